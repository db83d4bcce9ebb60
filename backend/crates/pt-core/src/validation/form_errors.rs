use crate::{FormField, ValidationMessage};

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Serialize;

/// Field-level errors from one validation pass.
///
/// A missing key means the field is currently valid. Serializes as
/// `{ "endDate": "End date must be after the start date", ... }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<FormField, ValidationMessage>);

impl FormErrors {
    pub fn has_errors(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FormField) -> Option<ValidationMessage> {
        self.0.get(&field).copied()
    }

    /// Lookup by wire name (`"startDate"`). Unknown names have no error.
    pub fn error_message_for(&self, field: &str) -> Option<&'static str> {
        let field = FormField::from_str(field).ok()?;
        self.get(field).map(|message| message.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, ValidationMessage)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    /// Errors restricted to fields the user has already interacted with
    pub fn touched(&self, touched: &[FormField]) -> FormErrors {
        self.iter()
            .filter(|(field, _)| touched.contains(field))
            .collect()
    }
}

impl FromIterator<(FormField, ValidationMessage)> for FormErrors {
    fn from_iter<I: IntoIterator<Item = (FormField, ValidationMessage)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
