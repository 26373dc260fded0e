//! Reading the message to format: from a file or stdin, as raw text or a chat JSON payload.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::message::extract_content;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read {source_label}: {source}")]
    Io {
        source_label: String,
        #[source]
        source: io::Error,
    },
    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("JSON payload has no content, response, or message text")]
    MissingContent,
    #[error("--watch needs an input file, not stdin")]
    NotWatchable,
}

/// Where the message comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `None` and `-` mean stdin; anything else is a file path.
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            None => Self::Stdin,
            Some(p) if p.as_os_str() == "-" => Self::Stdin,
            Some(p) => Self::File(p.to_path_buf()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdin => None,
            Self::File(p) => Some(p),
        }
    }

    /// Short name for headers and error messages.
    pub fn label(&self) -> String {
        match self {
            Self::Stdin => "stdin".to_string(),
            Self::File(p) => p.display().to_string(),
        }
    }

    fn read_raw(&self) -> Result<String, InputError> {
        let result = match self {
            Self::Stdin => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf).map(|_| buf)
            }
            Self::File(p) => fs::read_to_string(p),
        };
        result.map_err(|source| InputError::Io {
            source_label: self.label(),
            source,
        })
    }
}

/// Turn raw input into message text, unwrapping a chat payload when `from_json` is set.
pub fn decode(raw: &str, from_json: bool) -> Result<String, InputError> {
    if !from_json {
        return Ok(raw.to_string());
    }
    let value: serde_json::Value = serde_json::from_str(raw)?;
    extract_content(&value).ok_or(InputError::MissingContent)
}

/// Read and decode the message from `source`.
pub fn load(source: &InputSource, from_json: bool) -> Result<String, InputError> {
    let raw = source.read_raw()?;
    log::debug!("Read {} bytes from {}", raw.len(), source.label());
    decode(&raw, from_json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn dash_and_none_mean_stdin() {
        assert_eq!(InputSource::from_arg(None), InputSource::Stdin);
        assert_eq!(InputSource::from_arg(Some(Path::new("-"))), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg(Some(Path::new("reply.txt"))),
            InputSource::File(PathBuf::from("reply.txt"))
        );
        assert!(InputSource::Stdin.path().is_none());
        assert_eq!(InputSource::Stdin.label(), "stdin");
    }

    #[test]
    fn loads_raw_text_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "1. 1. Book flights").unwrap();
        let source = InputSource::File(file.path().to_path_buf());
        assert_eq!(load(&source, false).unwrap(), "1. 1. Book flights");
    }

    #[test]
    fn loads_json_payload_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"response": "Hello"}}"#).unwrap();
        let source = InputSource::File(file.path().to_path_buf());
        assert_eq!(load(&source, true).unwrap(), "Hello");
    }

    #[test]
    fn missing_file_reports_path() {
        let source = InputSource::File(PathBuf::from("/nonexistent/concierge/reply.txt"));
        let err = load(&source, false).unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/concierge/reply.txt"));
    }

    #[test]
    fn decode_rejects_bad_json() {
        assert!(matches!(decode("{not json", true), Err(InputError::Json(_))));
        assert!(matches!(
            decode(r#"{"role": "assistant"}"#, true),
            Err(InputError::MissingContent)
        ));
        assert_eq!(decode("{not json", false).unwrap(), "{not json");
    }
}
