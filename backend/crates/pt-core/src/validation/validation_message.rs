use serde::{Serialize, Serializer};

/// Why a form field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationMessage {
    Required,
    NameTooShort,
    DescriptionTooShort,
    InvalidDate,
    EndBeforeStart,
    InvalidProgress,
    InvalidDays,
}

impl ValidationMessage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "This field is required",
            Self::NameTooShort => "Name must be at least 3 characters",
            Self::DescriptionTooShort => "Description must be at least 10 characters",
            Self::InvalidDate => "Invalid date",
            Self::EndBeforeStart => "End date must be after the start date",
            Self::InvalidProgress => "Progress must be between 0 and 100",
            Self::InvalidDays => "Estimated days must be greater than 0",
        }
    }
}

impl std::fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ValidationMessage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
