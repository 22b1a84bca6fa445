//! LibreOffice automation backend.
//!
//! Drives the `soffice` binary, one headless process per export. Headless
//! invocations never raise interactive dialogs, which satisfies the
//! alert-suppression requirement of the [`Automation`] contract; the
//! process exits once the export finishes, so close and quit have nothing
//! left to tear down.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::automation::{AppInstance, Automation, AutomationError, OpenDocument};
use crate::config::Family;

/// Environment variable overriding the `soffice` binary location.
pub const SOFFICE_ENV: &str = "OFFICECONV_SOFFICE";

/// LibreOffice PDF export filter for each application family.
fn pdf_filter(family: Family) -> &'static str {
    match family {
        Family::Document => "writer_pdf_Export",
        Family::Spreadsheet => "calc_pdf_Export",
        Family::Presentation => "impress_pdf_Export",
    }
}

/// Automation backend backed by a LibreOffice installation.
#[derive(Debug, Clone)]
pub struct Soffice {
    binary: PathBuf,
}

impl Soffice {
    /// Use the given `soffice` binary.
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Use `$OFFICECONV_SOFFICE` if set, otherwise `soffice` on `PATH`.
    pub fn from_env() -> Self {
        match std::env::var_os(SOFFICE_ENV) {
            Some(path) => Self::new(PathBuf::from(path)),
            None => Self::new("soffice"),
        }
    }

    fn launch(&self, family: Family) -> Result<Box<dyn AppInstance>, AutomationError> {
        let probe = Command::new(&self.binary)
            .arg("--version")
            .output()
            .map_err(|e| AutomationError::Launch {
                app: family.label(),
                reason: format!("{}: {e}", self.binary.display()),
            })?;
        if !probe.status.success() {
            return Err(AutomationError::Launch {
                app: family.label(),
                reason: format!(
                    "{} exited with {}",
                    self.binary.display(),
                    probe.status
                ),
            });
        }
        debug!(
            binary = %self.binary.display(),
            family = family.label(),
            "launched automation backend"
        );
        Ok(Box::new(SofficeApp {
            binary: self.binary.clone(),
            family,
        }))
    }
}

impl Automation for Soffice {
    fn launch_document_app(&self) -> Result<Box<dyn AppInstance>, AutomationError> {
        self.launch(Family::Document)
    }

    fn launch_spreadsheet_app(&self) -> Result<Box<dyn AppInstance>, AutomationError> {
        self.launch(Family::Spreadsheet)
    }

    fn launch_presentation_app(&self) -> Result<Box<dyn AppInstance>, AutomationError> {
        self.launch(Family::Presentation)
    }
}

struct SofficeApp {
    binary: PathBuf,
    family: Family,
}

impl AppInstance for SofficeApp {
    fn open(&mut self, input: &Path) -> Result<Box<dyn OpenDocument>, AutomationError> {
        // The headless process reads the file itself at export time, so
        // opening here only verifies the document is readable.
        fs::File::open(input).map_err(|e| AutomationError::Open {
            path: input.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Box::new(SofficeDocument {
            binary: self.binary.clone(),
            family: self.family,
            input: input.to_path_buf(),
        }))
    }

    fn quit(self: Box<Self>) -> Result<(), AutomationError> {
        Ok(())
    }
}

struct SofficeDocument {
    binary: PathBuf,
    family: Family,
    input: PathBuf,
}

impl OpenDocument for SofficeDocument {
    fn export_pdf(&mut self, output: &Path) -> Result<(), AutomationError> {
        // soffice names its output after the input stem and refuses a
        // target filename, so export into a staging directory first.
        let staging = tempfile::tempdir()?;
        let convert_to = format!("pdf:{}", pdf_filter(self.family));

        debug!(
            input = %self.input.display(),
            output = %output.display(),
            filter = %convert_to,
            "running headless export"
        );
        let result = Command::new(&self.binary)
            .arg("--headless")
            .arg("--norestore")
            .arg("--convert-to")
            .arg(&convert_to)
            .arg("--outdir")
            .arg(staging.path())
            .arg(&self.input)
            .output()?;

        if !result.status.success() {
            return Err(AutomationError::Export {
                path: output.to_path_buf(),
                reason: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        let stem = self.input.file_stem().unwrap_or_default();
        let produced = staging.path().join(stem).with_extension("pdf");
        if !produced.is_file() {
            return Err(AutomationError::Export {
                path: output.to_path_buf(),
                reason: "backend reported success but produced no PDF".to_string(),
            });
        }

        // The staging directory can sit on a different filesystem than the
        // requested output, where a rename would fail.
        fs::copy(&produced, output)?;
        Ok(())
    }

    fn close_discarding_changes(self: Box<Self>) -> Result<(), AutomationError> {
        Ok(())
    }
}
