use std::path::PathBuf;

use thiserror::Error;

use crate::automation::AutomationError;

/// Errors surfaced by the conversion pipeline.
///
/// Two tiers: usage errors (bad input path, unsupported format, missing
/// output directory) and runtime errors (I/O, automation backend failures).
/// The CLI maps the tiers to exit codes 1 and 2.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("input file [{}] does not exist", .0.display())]
    InputNotFound(PathBuf),

    #[error("output directory [{}] does not exist", .0.display())]
    OutputDirMissing(PathBuf),

    #[error("input format [{0}] is not supported")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Automation(#[from] AutomationError),
}

impl ConvertError {
    /// Whether this is a usage/validation error rather than a runtime
    /// failure.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::InputNotFound(_) | Self::OutputDirMissing(_) | Self::UnsupportedFormat(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_not_found_message_contains_path() {
        let err = ConvertError::InputNotFound(PathBuf::from("/data/report.docx"));
        assert_eq!(
            err.to_string(),
            "input file [/data/report.docx] does not exist"
        );
    }

    #[test]
    fn test_unsupported_format_message_names_format() {
        let err = ConvertError::UnsupportedFormat("txt".to_string());
        assert_eq!(err.to_string(), "input format [txt] is not supported");
    }

    #[test]
    fn test_usage_classification() {
        assert!(ConvertError::InputNotFound(PathBuf::from("x")).is_usage());
        assert!(ConvertError::OutputDirMissing(PathBuf::from("x")).is_usage());
        assert!(ConvertError::UnsupportedFormat("txt".into()).is_usage());

        let io = ConvertError::Io(std::io::Error::other("disk on fire"));
        assert!(!io.is_usage());

        let automation = ConvertError::Automation(AutomationError::Launch {
            app: "document",
            reason: "binary not found".to_string(),
        });
        assert!(!automation.is_usage());
    }
}
