// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Provider or catalog configuration is unusable (e.g. the fallback
    /// locale has no message table). Fatal at startup.
    Config(String),

    /// An embedded locale file could not be parsed.
    Catalog(String),

    /// The key is missing from both the active and the fallback locale.
    /// Recoverable; callers typically display the raw key instead.
    MissingKey(String),

    /// Strict rendering found a placeholder with no supplied value.
    MissingParameter { key: String, name: String },

    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::MissingKey(key) => write!(f, "Missing message key: {}", key),
            Error::MissingParameter { key, name } => {
                write!(f, "Missing parameter '{}' for message key '{}'", name, key)
            }
            Error::Io(e) => write!(f, "I/O Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn missing_key_names_the_key() {
        let err = Error::MissingKey("unknown-key".into());
        assert_eq!(format!("{}", err), "Missing message key: unknown-key");
    }

    #[test]
    fn missing_parameter_names_key_and_placeholder() {
        let err = Error::MissingParameter {
            key: "score".into(),
            name: "score".into(),
        };
        let rendered = format!("{}", err);
        assert!(rendered.contains("'score'"));
        assert!(rendered.contains("Missing parameter"));
    }
}
