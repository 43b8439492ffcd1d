//! XAdES `NoticeRef` value type.

use serde::{Deserialize, Serialize};

use crate::validation::{require_organization, ValidationError};
use crate::wire::NoticeRefElement;

/// Reference to a notice text defined by an issuing organization.
///
/// The notice numbers select, in order, the placeholders of the
/// organization's notice text. Construction never validates, so a decoder can
/// stage an incomplete value and report it later through [`validate`].
///
/// [`validate`]: NoticeReference::validate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "NoticeRefElement", into = "NoticeRefElement")]
pub struct NoticeReference {
    organization: Option<String>,
    notice_numbers: Vec<i32>,
}

impl NoticeReference {
    /// Creates a notice reference for a present organization.
    pub fn new(organization: impl Into<String>) -> Self {
        Self::with_organization(Some(organization.into()))
    }

    /// Creates a notice reference storing `organization` verbatim, even when absent.
    pub fn with_organization(organization: Option<String>) -> Self {
        Self {
            organization,
            notice_numbers: Vec::new(),
        }
    }

    /// Current organization, unvalidated.
    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }

    /// Replaces the organization after checking it.
    ///
    /// On error the previous value is kept.
    pub fn set_organization(&mut self, value: Option<String>) -> Result<(), ValidationError> {
        require_organization(value.as_deref())?;
        self.organization = value;
        Ok(())
    }

    /// Number of notice numbers added so far.
    pub fn count_notice_numbers(&self) -> usize {
        self.notice_numbers.len()
    }

    /// Appends a notice number.
    pub fn add_notice_number(&mut self, number: i32) {
        self.notice_numbers.push(number);
    }

    /// Returns the notice number at `index`, or `0` when `index` is negative
    /// or past the end.
    ///
    /// `0` is also a legal notice number; use [`count_notice_numbers`] to
    /// range-check when the difference matters.
    ///
    /// [`count_notice_numbers`]: NoticeReference::count_notice_numbers
    pub fn notice_number(&self, index: isize) -> i32 {
        usize::try_from(index)
            .ok()
            .and_then(|idx| self.notice_numbers.get(idx))
            .copied()
            .unwrap_or(0)
    }

    /// All notice numbers in insertion order.
    pub fn notice_numbers(&self) -> &[i32] {
        &self.notice_numbers
    }

    /// Collects every structural error; an empty list means valid.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if let Err(err) = require_organization(self.organization()) {
            errors.push(err);
        }
        errors
    }

    /// Shorthand for `validate().is_empty()`.
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Extend<i32> for NoticeReference {
    fn extend<T: IntoIterator<Item = i32>>(&mut self, iter: T) {
        for number in iter {
            self.add_notice_number(number);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_reference_has_no_numbers() {
        let notice = NoticeReference::new("ACME Corp");
        assert_eq!(notice.count_notice_numbers(), 0);
        assert_eq!(notice.notice_number(0), 0);
        assert_eq!(notice.notice_number(-1), 0);
        assert!(notice.notice_numbers().is_empty());
    }

    #[test]
    fn out_of_range_index_falls_back_to_zero() {
        let mut notice = NoticeReference::new("ACME Corp");
        notice.add_notice_number(7);
        assert_eq!(notice.notice_number(0), 7);
        assert_eq!(notice.notice_number(1), 0);
        assert_eq!(notice.notice_number(isize::MIN), 0);
        assert_eq!(notice.notice_number(isize::MAX), 0);
    }

    #[test]
    fn rejected_setter_keeps_previous_value() {
        let mut notice = NoticeReference::new("ACME Corp");
        let err = notice.set_organization(None).unwrap_err();
        assert_eq!(
            err,
            ValidationError::RequiredValueMissing {
                field: "Organization"
            }
        );
        assert_eq!(notice.organization(), Some("ACME Corp"));
    }

    #[test]
    fn extend_appends_in_order() {
        let mut notice = NoticeReference::new("ACME Corp");
        notice.add_notice_number(1);
        notice.extend([2, 3]);
        assert_eq!(notice.notice_numbers(), &[1, 2, 3]);
    }

    #[test]
    fn validity_tracks_current_organization() {
        let mut notice = NoticeReference::with_organization(None);
        assert!(!notice.is_valid());
        notice.set_organization(Some(String::new())).unwrap();
        assert!(notice.is_valid());
    }
}
