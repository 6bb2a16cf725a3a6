use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::shared::text::normalize_optional;

use super::errors::UniversityError;

#[derive(Debug, Clone)]
pub struct University {
    pub id: Uuid,
    pub name: String,
    pub domain: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl University {
    pub fn new(name: String, domain: Option<String>) -> Result<Self, UniversityError> {
        if name.trim().is_empty() {
            return Err(UniversityError::NameEmpty);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            domain: normalize_optional(domain),
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        domain: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            domain,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_university_when_name_valid() {
        let result = University::new(
            "University of Texas at Arlington".to_string(),
            Some("uta.edu".to_string()),
        );

        assert!(result.is_ok());
        let university = result.unwrap();
        assert_eq!(university.name, "University of Texas at Arlington");
        assert_eq!(university.domain, Some("uta.edu".to_string()));
    }

    #[test]
    fn should_reject_when_name_empty() {
        let result = University::new("".to_string(), None);

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), UniversityError::NameEmpty));
    }

    #[test]
    fn should_reject_when_name_only_whitespace() {
        let result = University::new("   ".to_string(), None);

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), UniversityError::NameEmpty));
    }

    #[test]
    fn should_drop_blank_domain() {
        let university = University::new("MIT".to_string(), Some("  ".to_string())).unwrap();

        assert!(university.domain.is_none());
    }

    #[test]
    fn should_trim_name() {
        let university = University::new("  MIT  ".to_string(), None).unwrap();

        assert_eq!(university.name, "MIT");
    }
}
