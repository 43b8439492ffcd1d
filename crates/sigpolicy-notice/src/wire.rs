//! JSON mapping of the `NoticeRef` element.
//!
//! Member names follow the XAdES element names. Decoding replays the
//! staged construction used by XML readers: the organization is stored as
//! parsed and each notice number is appended in document order, without
//! validation.

use serde::{Deserialize, Serialize};

use crate::notice_ref::NoticeReference;

/// Errors raised while reading or writing the JSON form.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// Malformed JSON or a member of the wrong type.
    #[error("invalid NoticeRef JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialized shape of a notice reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeRefElement {
    /// Issuing organization; omitted when absent.
    #[serde(
        rename = "Organization",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub organization: Option<String>,
    /// Notice numbers in document order; omitted when empty.
    #[serde(
        rename = "NoticeNumbers",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub notice_numbers: Vec<i32>,
}

impl From<NoticeRefElement> for NoticeReference {
    fn from(element: NoticeRefElement) -> Self {
        let mut notice = NoticeReference::with_organization(element.organization);
        for number in element.notice_numbers {
            notice.add_notice_number(number);
        }
        notice
    }
}

impl From<NoticeReference> for NoticeRefElement {
    fn from(notice: NoticeReference) -> Self {
        let notice_numbers = (0..notice.count_notice_numbers())
            .map(|idx| notice.notice_number(idx as isize))
            .collect();
        NoticeRefElement {
            organization: notice.organization().map(str::to_owned),
            notice_numbers,
        }
    }
}

impl NoticeReference {
    /// Decodes a notice reference from its JSON element form.
    pub fn from_json(input: &str) -> Result<Self, WireError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Decodes a notice reference from an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, WireError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Encodes the notice reference as compact JSON.
    pub fn to_json(&self) -> Result<String, WireError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encodes the notice reference as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, WireError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Encodes the notice reference as a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, WireError> {
        Ok(serde_json::to_value(self)?)
    }
}
