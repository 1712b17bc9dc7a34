//! Assessment configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::assessment::AssessmentType;

#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentConfig {
    /// Questionnaire used when none is named
    #[serde(default = "default_type")]
    pub default_type: String,
}

impl AssessmentConfig {
    /// The configured default, falling back to the built-in default type.
    pub fn assessment_type(&self) -> AssessmentType {
        AssessmentType::parse_or_default(&self.default_type)
    }

    /// A recognised `requested` name wins; anything else uses the configured
    /// default.
    pub fn resolve(&self, requested: Option<&str>) -> AssessmentType {
        requested
            .and_then(|name| name.parse().ok())
            .unwrap_or_else(|| self.assessment_type())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.default_type
            .parse::<AssessmentType>()
            .map(|_| ())
            .map_err(|_| ValidationError::UnknownAssessmentType(self.default_type.clone()))
    }
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            default_type: default_type(),
        }
    }
}

fn default_type() -> String {
    AssessmentType::default().as_str().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_quick() {
        let config = AssessmentConfig::default();
        assert_eq!(config.assessment_type(), AssessmentType::Quick);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_type_fails_validation_but_resolves_to_default() {
        let config = AssessmentConfig {
            default_type: "marathon".to_string(),
        };
        assert_eq!(config.assessment_type(), AssessmentType::Quick);
        assert_eq!(
            config.validate(),
            Err(ValidationError::UnknownAssessmentType("marathon".to_string()))
        );
    }

    #[test]
    fn requested_type_overrides_configured_default() {
        let config = AssessmentConfig {
            default_type: "risk".to_string(),
        };
        assert_eq!(config.resolve(Some("full")), AssessmentType::Full);
        assert_eq!(config.resolve(Some("weekly")), AssessmentType::Risk);
        assert_eq!(config.resolve(None), AssessmentType::Risk);
    }
}
