//! The desktop-automation boundary.
//!
//! All real conversion work (document parsing, layout, PDF rendering) is
//! performed by an external application driven through these traits. The
//! library itself only sequences open, export, close, and quit calls
//! inside one handler invocation.

pub mod soffice;

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised by an automation backend.
#[derive(Debug, Error)]
pub enum AutomationError {
    #[error("failed to launch {app} application: {reason}")]
    Launch { app: &'static str, reason: String },

    #[error("failed to open [{}]: {reason}", path.display())]
    Open { path: PathBuf, reason: String },

    #[error("PDF export to [{}] failed: {reason}", path.display())]
    Export { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A document opened inside a running application instance.
pub trait OpenDocument {
    /// Export a fixed-format (paginated, non-editable) PDF rendering of
    /// the document to `output`.
    fn export_pdf(&mut self, output: &Path) -> Result<(), AutomationError>;

    /// Close the document, discarding any changes made while it was open.
    fn close_discarding_changes(self: Box<Self>) -> Result<(), AutomationError>;
}

/// A running application instance with interactive alerts suppressed.
pub trait AppInstance {
    /// Open the document at `input` in this application.
    fn open(&mut self, input: &Path) -> Result<Box<dyn OpenDocument>, AutomationError>;

    /// Terminate the application instance without saving anything.
    fn quit(self: Box<Self>) -> Result<(), AutomationError>;
}

impl std::fmt::Debug for dyn AppInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AppInstance")
    }
}

/// Launches one desktop application per document family.
///
/// Launching implies suppressing the application's interactive alert
/// dialogs, so an unattended conversion can never hang on a prompt.
pub trait Automation {
    fn launch_document_app(&self) -> Result<Box<dyn AppInstance>, AutomationError>;
    fn launch_spreadsheet_app(&self) -> Result<Box<dyn AppInstance>, AutomationError>;
    fn launch_presentation_app(&self) -> Result<Box<dyn AppInstance>, AutomationError>;
}
