//! Convert Office documents (Word, Excel, and PowerPoint families) to PDF
//! by driving an external desktop-automation backend.
//!
//! The library validates the input path, maps its extension to one of
//! three conversion handlers, and sequences the automation calls that
//! perform the actual export. One invocation converts exactly one file;
//! the backend application is launched and shut down inside that call.

pub mod automation;
pub mod config;
pub mod error;
pub mod handlers;

use std::path::{Path, PathBuf};

use automation::Automation;
use config::{Format, OutputTarget};
use error::ConvertError;

/// Convert the file at `input` to a PDF at the location described by
/// `target`, using the given automation backend.
///
/// Returns the resolved output path on success.
pub fn convert_file(
    input: impl AsRef<Path>,
    target: &OutputTarget,
    automation: &dyn Automation,
) -> Result<PathBuf, ConvertError> {
    let input = input.as_ref();
    if !input.is_file() {
        return Err(ConvertError::InputNotFound(input.to_path_buf()));
    }

    let ext = input.extension().and_then(|e| e.to_str()).unwrap_or("");
    let format =
        Format::from_extension(ext).ok_or_else(|| ConvertError::UnsupportedFormat(ext.to_string()))?;

    let output = target.resolve(input);
    if let Some(dir) = output.parent()
        && !dir.as_os_str().is_empty()
        && !dir.is_dir()
    {
        return Err(ConvertError::OutputDirMissing(dir.to_path_buf()));
    }

    handlers::dispatch(format, automation, input, &output)?;
    Ok(output)
}
