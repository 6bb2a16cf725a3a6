use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::university::errors::UniversityError;
use crate::domain::university::model::University;
use crate::domain::university::repository::UniversityRepository;
use crate::domain::university::use_cases::create::{CreateUniversityParams, CreateUniversityUseCase};

pub struct CreateUniversityUseCaseImpl {
    pub repository: Arc<dyn UniversityRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateUniversityUseCase for CreateUniversityUseCaseImpl {
    async fn execute(&self, params: CreateUniversityParams) -> Result<University, UniversityError> {
        self.logger
            .info(&format!("Creating university: {}", params.name));

        let university = University::new(params.name, params.domain)?;
        self.repository.save(&university).await?;

        self.logger
            .info(&format!("University created: {}", university.id));
        Ok(university)
    }
}
