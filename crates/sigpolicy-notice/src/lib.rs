//! XAdES signature-policy `NoticeRef` value type.
//!
//! A [`NoticeReference`] points at a notice text published by an
//! organization, optionally parameterized by an ordered list of notice
//! numbers. The crate holds and validates the value and maps it to and from
//! the JSON element form; XML processing and signing stay with the caller.
//!
#![deny(missing_docs)]

/// The notice reference value type.
pub mod notice_ref;
/// Validation errors and shared rules.
pub mod validation;
/// JSON element mapping.
pub mod wire;

pub use notice_ref::NoticeReference;
pub use validation::{require_organization, ValidationError, ORGANIZATION_FIELD};
pub use wire::{NoticeRefElement, WireError};
