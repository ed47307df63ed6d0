//! The five free-text fields collected by the hiring plan form.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Raw form submission. Missing JSON fields deserialize as empty strings so
/// they are reported by `validate` alongside blank ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HiringForm {
    pub company_information: String,
    pub position_details: String,
    pub project_requirements: String,
    pub team_dynamics: String,
    pub recruitment_goals: String,
}

impl HiringForm {
    /// Field names paired with their values, in form order.
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("company_information", &self.company_information),
            ("position_details", &self.position_details),
            ("project_requirements", &self.project_requirements),
            ("team_dynamics", &self.team_dynamics),
            ("recruitment_goals", &self.recruitment_goals),
        ]
    }

    /// Names of fields that are empty. Whitespace counts as content.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.fields()
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    /// Rejects the submission if any field is blank.
    pub fn validate(&self) -> Result<(), AppError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            return Ok(());
        }
        Err(AppError::Validation(format!(
            "Please fill in all the fields. Missing: {}",
            missing.join(", ")
        )))
    }

    /// All five values joined with single spaces, as typed.
    pub fn joined(&self) -> String {
        self.fields()
            .iter()
            .map(|(_, value)| *value)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> HiringForm {
        HiringForm {
            company_information: "HealthTech startup, 50 employees".to_string(),
            position_details: "ML Engineer, Mid".to_string(),
            project_requirements: "NLP chatbot".to_string(),
            team_dynamics: "2 data scientists".to_string(),
            recruitment_goals: "3 months, diversity 40%".to_string(),
        }
    }

    #[test]
    fn test_filled_form_validates() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_each_empty_field_is_rejected() {
        for i in 0..5 {
            let mut form = filled();
            match i {
                0 => form.company_information.clear(),
                1 => form.position_details.clear(),
                2 => form.project_requirements.clear(),
                3 => form.team_dynamics.clear(),
                _ => form.recruitment_goals.clear(),
            }
            let err = form.validate().unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "field {i}");
        }
    }

    #[test]
    fn test_whitespace_only_value_is_accepted() {
        let mut form = filled();
        form.team_dynamics = "  \n\t".to_string();
        assert!(form.missing_fields().is_empty());
        assert!(form.validate().is_ok());
        assert_eq!(form.team_dynamics, "  \n\t");
    }

    #[test]
    fn test_missing_json_fields_default_to_empty() {
        let form: HiringForm =
            serde_json::from_str(r#"{"company_information": "Acme"}"#).unwrap();
        assert_eq!(form.missing_fields().len(), 4);
        match form.validate() {
            Err(AppError::Validation(msg)) => {
                assert!(msg.contains("position_details"));
                assert!(msg.contains("recruitment_goals"));
                assert!(!msg.contains("company_information"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_joined_uses_single_spaces() {
        let form = HiringForm {
            company_information: "a".to_string(),
            position_details: "b".to_string(),
            project_requirements: "c".to_string(),
            team_dynamics: "d".to_string(),
            recruitment_goals: "e".to_string(),
        };
        assert_eq!(form.joined(), "a b c d e");
    }
}
