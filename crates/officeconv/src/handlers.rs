//! The three conversion handlers, one per application family.
//!
//! Each handler drives the same sequence over the automation boundary:
//! launch the application, open the input, export the PDF, close the
//! document discarding changes, quit the application. The document is
//! always closed before the application quits.

use std::path::Path;

use tracing::info;

use crate::automation::{AppInstance, Automation};
use crate::config::{Family, Format};
use crate::error::ConvertError;

/// Select and run the handler for `format`.
pub fn dispatch(
    format: Format,
    automation: &dyn Automation,
    input: &Path,
    output: &Path,
) -> Result<(), ConvertError> {
    match format.family() {
        Family::Document => convert_document(automation, input, output),
        Family::Spreadsheet => convert_spreadsheet(automation, input, output),
        Family::Presentation => convert_presentation(automation, input, output),
    }
}

/// Convert a Word-family document (.doc, .docx).
pub fn convert_document(
    automation: &dyn Automation,
    input: &Path,
    output: &Path,
) -> Result<(), ConvertError> {
    let app = automation.launch_document_app()?;
    run_export(app, input, output, Family::Document)
}

/// Convert an Excel-family spreadsheet (.xls, .xml, .xlsx).
pub fn convert_spreadsheet(
    automation: &dyn Automation,
    input: &Path,
    output: &Path,
) -> Result<(), ConvertError> {
    let app = automation.launch_spreadsheet_app()?;
    run_export(app, input, output, Family::Spreadsheet)
}

/// Convert a PowerPoint-family presentation (.ppt, .pptx).
pub fn convert_presentation(
    automation: &dyn Automation,
    input: &Path,
    output: &Path,
) -> Result<(), ConvertError> {
    let app = automation.launch_presentation_app()?;
    run_export(app, input, output, Family::Presentation)
}

/// Open, export, close, quit. On failure mid-sequence the remaining
/// cleanup calls still run best-effort so the application is not left
/// behind, and the original error propagates.
fn run_export(
    mut app: Box<dyn AppInstance>,
    input: &Path,
    output: &Path,
    family: Family,
) -> Result<(), ConvertError> {
    let mut doc = match app.open(input) {
        Ok(doc) => doc,
        Err(err) => {
            let _ = app.quit();
            return Err(err.into());
        }
    };

    if let Err(err) = doc.export_pdf(output) {
        let _ = doc.close_discarding_changes();
        let _ = app.quit();
        return Err(err.into());
    }

    doc.close_discarding_changes()?;
    app.quit()?;
    info!(
        input = %input.display(),
        output = %output.display(),
        family = family.label(),
        "export complete"
    );
    Ok(())
}
