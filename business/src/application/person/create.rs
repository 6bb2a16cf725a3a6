use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::person::errors::PersonError;
use crate::domain::person::model::Person;
use crate::domain::person::repository::PersonRepository;
use crate::domain::person::use_cases::create::{CreatePersonParams, CreatePersonUseCase};

pub struct CreatePersonUseCaseImpl {
    pub repository: Arc<dyn PersonRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreatePersonUseCase for CreatePersonUseCaseImpl {
    async fn execute(&self, params: CreatePersonParams) -> Result<Person, PersonError> {
        self.logger
            .info(&format!("Creating person: {}", params.name));

        let person = Person::new(params.name, params.email, params.student_id)?;
        self.repository.save(&person).await?;

        self.logger.info(&format!("Person created: {}", person.id));
        Ok(person)
    }
}
