use crate::{DateMetrics, FormErrors, FormField, ProjectFormData, ValidationMessage};

use chrono::NaiveDateTime;

pub const MIN_NAME_LENGTH: usize = 3;
pub const MIN_DESCRIPTION_LENGTH: usize = 10;
pub const MIN_PROGRESS: i64 = 0;
pub const MAX_PROGRESS: i64 = 100;

type FieldCheck<T = ()> = Result<T, ValidationMessage>;

/// Validates candidate projects from the edit form
pub struct ProjectValidator;

impl ProjectValidator {
    /// Check every field of `candidate` and collect one message per failing field.
    ///
    /// Fields are independent except `endDate`, whose ordering rule only runs
    /// when both dates parse on their own.
    pub fn validate(candidate: &ProjectFormData) -> FormErrors {
        let start = Self::check_date(&candidate.start_date);
        let end = Self::check_date(&candidate.end_date);

        let end_check = match (&start, &end) {
            (Ok(start), Ok(end)) if end < start => Err(ValidationMessage::EndBeforeStart),
            (_, Ok(_)) => Ok(()),
            (_, Err(message)) => Err(*message),
        };

        [
            (FormField::Name, Self::check_name(&candidate.name)),
            (FormField::Owner, Self::check_owner(&candidate.owner)),
            (
                FormField::Description,
                Self::check_description(&candidate.description),
            ),
            (FormField::StartDate, start.map(|_| ())),
            (FormField::EndDate, end_check),
            (FormField::Progress, Self::check_progress(candidate.progress)),
            (
                FormField::EstimatedDays,
                Self::check_estimated_days(candidate.estimated_days),
            ),
        ]
        .into_iter()
        .filter_map(|(field, check)| check.err().map(|message| (field, message)))
        .collect()
    }

    pub fn has_errors(errors: &FormErrors) -> bool {
        errors.has_errors()
    }

    pub fn error_message_for(errors: &FormErrors, field: &str) -> Option<&'static str> {
        errors.error_message_for(field)
    }

    fn check_name(name: &str) -> FieldCheck {
        Self::check_min_length(name, MIN_NAME_LENGTH, ValidationMessage::NameTooShort)
    }

    fn check_owner(owner: &str) -> FieldCheck {
        if owner.trim().is_empty() {
            return Err(ValidationMessage::Required);
        }
        Ok(())
    }

    fn check_description(description: &str) -> FieldCheck {
        Self::check_min_length(
            description,
            MIN_DESCRIPTION_LENGTH,
            ValidationMessage::DescriptionTooShort,
        )
    }

    fn check_min_length(value: &str, min: usize, too_short: ValidationMessage) -> FieldCheck {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationMessage::Required);
        }
        if trimmed.chars().count() < min {
            return Err(too_short);
        }
        Ok(())
    }

    fn check_date(value: &str) -> FieldCheck<NaiveDateTime> {
        if value.trim().is_empty() {
            return Err(ValidationMessage::Required);
        }
        DateMetrics::parse_date(value).ok_or(ValidationMessage::InvalidDate)
    }

    fn check_progress(progress: i64) -> FieldCheck {
        if !(MIN_PROGRESS..=MAX_PROGRESS).contains(&progress) {
            return Err(ValidationMessage::InvalidProgress);
        }
        Ok(())
    }

    fn check_estimated_days(estimated_days: Option<i64>) -> FieldCheck {
        match estimated_days {
            Some(days) if days > 0 => Ok(()),
            _ => Err(ValidationMessage::InvalidDays),
        }
    }
}
