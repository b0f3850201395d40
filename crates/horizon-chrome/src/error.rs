//! Error types for frameless window chrome.

use thiserror::Error;

use crate::window::ButtonRole;

/// Errors raised while configuring or installing window chrome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChromeError {
    /// A button that cannot hold a checked state was attached to a role that
    /// needs one.
    #[error("the {role} button must be checkable")]
    NotCheckable {
        /// The role the button was being attached to.
        role: ButtonRole,
    },

    /// Native chrome is not available for this windowing system.
    #[error("native chrome is not supported: {0}")]
    Unsupported(&'static str),

    /// The native window handle could not be obtained.
    #[error("failed to access native window handle: {0}")]
    HandleAccess(String),

    /// A native call failed.
    #[error("platform call failed: {0}")]
    Platform(String),

    /// A configuration file could not be read or parsed.
    #[error("invalid chrome configuration: {0}")]
    Config(String),
}

/// Result type for chrome operations.
pub type ChromeResult<T> = std::result::Result<T, ChromeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChromeError::NotCheckable {
            role: ButtonRole::Toggle,
        };
        assert_eq!(err.to_string(), "the toggle button must be checkable");

        let err = ChromeError::Unsupported("no Win32 window handle");
        assert!(err.to_string().contains("no Win32 window handle"));
    }
}
