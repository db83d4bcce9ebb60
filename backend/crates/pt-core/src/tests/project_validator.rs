use crate::tests::valid_form;
use crate::{FormField, ProjectFormData, ProjectValidator, ValidationMessage};

use googletest::prelude::*;

#[test]
fn given_valid_form_when_validate_then_no_errors() {
    // Given
    let form = valid_form();

    // When
    let errors = ProjectValidator::validate(&form);

    // Then
    assert_that!(ProjectValidator::has_errors(&errors), eq(false));
    assert_that!(errors.len(), eq(0));
}

#[test]
fn given_short_fields_and_misordered_dates_when_validate_then_three_errors() {
    // Given
    let form = ProjectFormData {
        name: "AB".to_string(),
        owner: "X".to_string(),
        description: "short".to_string(),
        start_date: "2025-01-10".to_string(),
        end_date: "2025-01-01".to_string(),
        progress: 50,
        estimated_days: Some(5),
        ..ProjectFormData::default()
    };

    // When
    let errors = ProjectValidator::validate(&form);

    // Then
    assert_that!(errors.len(), eq(3));
    assert_that!(
        errors.get(FormField::Name),
        some(eq(ValidationMessage::NameTooShort))
    );
    assert_that!(
        errors.get(FormField::Description),
        some(eq(ValidationMessage::DescriptionTooShort))
    );
    assert_that!(
        errors.get(FormField::EndDate),
        some(eq(ValidationMessage::EndBeforeStart))
    );
    assert_that!(errors.get(FormField::Owner), none());
    assert_that!(errors.get(FormField::Progress), none());
    assert_that!(errors.get(FormField::EstimatedDays), none());
}

#[test]
fn given_out_of_range_numbers_when_validate_then_progress_and_days_errors() {
    // Given
    let form = ProjectFormData {
        progress: 150,
        estimated_days: Some(0),
        ..valid_form()
    };

    // When
    let errors = ProjectValidator::validate(&form);

    // Then
    assert_that!(
        errors.fields().collect::<Vec<_>>(),
        elements_are![eq(&FormField::Progress), eq(&FormField::EstimatedDays)]
    );
    assert_that!(
        errors.get(FormField::Progress),
        some(eq(ValidationMessage::InvalidProgress))
    );
    assert_that!(
        errors.get(FormField::EstimatedDays),
        some(eq(ValidationMessage::InvalidDays))
    );
}

#[test]
fn given_empty_form_when_validate_then_required_everywhere() {
    // Given
    let form = ProjectFormData {
        owner: String::new(),
        estimated_days: None,
        ..ProjectFormData::default()
    };

    // When
    let errors = ProjectValidator::validate(&form);

    // Then
    for field in [
        FormField::Name,
        FormField::Owner,
        FormField::Description,
        FormField::StartDate,
        FormField::EndDate,
    ] {
        assert_that!(errors.get(field), some(eq(ValidationMessage::Required)));
    }
    assert_that!(
        errors.get(FormField::EstimatedDays),
        some(eq(ValidationMessage::InvalidDays))
    );
    assert_that!(errors.get(FormField::Progress), none());
}

#[test]
fn given_whitespace_only_text_when_validate_then_required() {
    let form = ProjectFormData {
        name: "   ".to_string(),
        owner: "\t".to_string(),
        description: "     ".to_string(),
        ..valid_form()
    };

    let errors = ProjectValidator::validate(&form);

    assert_that!(errors.get(FormField::Name), some(eq(ValidationMessage::Required)));
    assert_that!(errors.get(FormField::Owner), some(eq(ValidationMessage::Required)));
    assert_that!(
        errors.get(FormField::Description),
        some(eq(ValidationMessage::Required))
    );
}

#[test]
fn given_padded_short_name_when_validate_then_too_short() {
    let form = ProjectFormData {
        name: "  ab  ".to_string(),
        ..valid_form()
    };

    let errors = ProjectValidator::validate(&form);

    assert_that!(
        errors.get(FormField::Name),
        some(eq(ValidationMessage::NameTooShort))
    );
}

#[test]
fn given_exact_minimum_lengths_when_validate_then_valid() {
    let form = ProjectFormData {
        name: "abc".to_string(),
        description: "0123456789".to_string(),
        ..valid_form()
    };

    assert_that!(ProjectValidator::validate(&form).is_empty(), eq(true));
}

#[test]
fn given_invalid_start_and_valid_end_when_validate_then_only_start_reported() {
    // Given
    let form = ProjectFormData {
        start_date: "2025-02-30".to_string(),
        end_date: "2024-01-01".to_string(),
        ..valid_form()
    };

    // When
    let errors = ProjectValidator::validate(&form);

    // Then
    assert_that!(
        errors.get(FormField::StartDate),
        some(eq(ValidationMessage::InvalidDate))
    );
    assert_that!(errors.get(FormField::EndDate), none());
}

#[test]
fn given_unparseable_end_when_validate_then_invalid_date() {
    let form = ProjectFormData {
        end_date: "next week".to_string(),
        ..valid_form()
    };

    let errors = ProjectValidator::validate(&form);

    assert_that!(
        errors.get(FormField::EndDate),
        some(eq(ValidationMessage::InvalidDate))
    );
    assert_that!(errors.get(FormField::StartDate), none());
}

#[test]
fn given_same_start_and_end_when_validate_then_valid() {
    let form = ProjectFormData {
        start_date: "2025-01-01".to_string(),
        end_date: "2025-01-01".to_string(),
        ..valid_form()
    };

    assert_that!(ProjectValidator::validate(&form).is_empty(), eq(true));
}

#[test]
fn given_progress_bounds_when_validate_then_inclusive() {
    for progress in [0, 100] {
        let form = ProjectFormData {
            progress,
            ..valid_form()
        };
        assert_that!(ProjectValidator::validate(&form).is_empty(), eq(true));
    }

    let form = ProjectFormData {
        progress: -1,
        ..valid_form()
    };
    assert_that!(
        ProjectValidator::validate(&form).get(FormField::Progress),
        some(eq(ValidationMessage::InvalidProgress))
    );
}

#[test]
fn given_negative_estimate_when_validate_then_invalid_days() {
    let form = ProjectFormData {
        estimated_days: Some(-3),
        ..valid_form()
    };

    assert_that!(
        ProjectValidator::validate(&form).get(FormField::EstimatedDays),
        some(eq(ValidationMessage::InvalidDays))
    );
}

#[test]
fn given_errors_when_error_message_for_then_lookup_by_wire_name() {
    let form = ProjectFormData {
        end_date: "2024-12-31".to_string(),
        ..valid_form()
    };

    let errors = ProjectValidator::validate(&form);

    assert_that!(
        ProjectValidator::error_message_for(&errors, "endDate"),
        some(eq("End date must be after the start date"))
    );
    assert_that!(ProjectValidator::error_message_for(&errors, "name"), none());
    assert_that!(ProjectValidator::error_message_for(&errors, "bogus"), none());
}
