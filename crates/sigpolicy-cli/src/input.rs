//! Reading NoticeRef documents from a file or stdin.

use sigpolicy_notice::{NoticeReference, WireError};
use std::io::{self, Read};
use thiserror::Error;

/// Errors raised while loading an input document.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read file {path}: {source}")]
    File { path: String, source: io::Error },
    #[error("failed to read stdin: {0}")]
    Stdin(#[from] io::Error),
    #[error(transparent)]
    Wire(#[from] WireError),
}

/// Loads a notice reference from `input`, or stdin when `None`.
pub fn load_notice(input: Option<String>) -> Result<NoticeReference, InputError> {
    let json_str = match input {
        Some(path) => {
            std::fs::read_to_string(&path).map_err(|source| InputError::File { path, source })?
        }
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    Ok(NoticeReference::from_json(&json_str)?)
}
