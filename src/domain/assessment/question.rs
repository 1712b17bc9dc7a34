//! Question and assessment-type value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Aspect;
use crate::domain::foundation::ValidationError;

/// Lowest value an option may carry.
pub const MIN_OPTION_VALUE: u8 = 1;

/// Highest value an option may carry; also the per-question score ceiling.
pub const MAX_OPTION_VALUE: u8 = 4;

/// Which questionnaire is being taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentType {
    Full,
    #[default]
    Quick,
    Risk,
}

impl AssessmentType {
    /// Resolves a type name, falling back to the default type when unrecognized.
    pub fn parse_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Returns the wire name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentType::Full => "full",
            AssessmentType::Quick => "quick",
            AssessmentType::Risk => "risk",
        }
    }
}

impl fmt::Display for AssessmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssessmentType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(AssessmentType::Full),
            "quick" => Ok(AssessmentType::Quick),
            "risk" => Ok(AssessmentType::Risk),
            other => Err(ValidationError::invalid_format(
                "assessment_type",
                format!("unknown assessment type '{}'", other),
            )),
        }
    }
}

/// One selectable answer for a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    pub value: u8,
}

impl AnswerOption {
    /// Creates an option, rejecting values outside `1..=4`.
    pub fn new(text: impl Into<String>, value: u8) -> Result<Self, ValidationError> {
        if !(MIN_OPTION_VALUE..=MAX_OPTION_VALUE).contains(&value) {
            return Err(ValidationError::out_of_range(
                "option_value",
                MIN_OPTION_VALUE as i32,
                MAX_OPTION_VALUE as i32,
                value as i32,
            ));
        }
        Ok(Self {
            text: text.into(),
            value,
        })
    }
}

/// An immutable questionnaire item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub aspect: Aspect,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Creates a question; it must offer at least one option.
    pub fn new(
        id: u32,
        text: impl Into<String>,
        aspect: Aspect,
        options: Vec<AnswerOption>,
    ) -> Result<Self, ValidationError> {
        if options.is_empty() {
            return Err(ValidationError::empty_field("options"));
        }
        Ok(Self {
            id,
            text: text.into(),
            aspect,
            options,
        })
    }

    /// Number of selectable options.
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Returns the value of the option at `index`, validating the index.
    pub fn option_value(&self, index: usize) -> Result<u8, ValidationError> {
        self.options
            .get(index)
            .map(|option| option.value)
            .ok_or_else(|| {
                ValidationError::out_of_range(
                    "option_index",
                    0,
                    self.options.len() as i32 - 1,
                    index as i32,
                )
            })
    }
}
