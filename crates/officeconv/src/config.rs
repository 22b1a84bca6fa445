use std::path::{Path, PathBuf};

/// Supported input document formats, one per file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Doc,
    Docx,
    Xls,
    Xml,
    Xlsx,
    Ppt,
    Pptx,
}

impl Format {
    /// Detect format from file extension. Case-insensitive, and decided by
    /// the extension string alone; file content is never sniffed.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "doc" => Some(Self::Doc),
            "docx" => Some(Self::Docx),
            "xls" => Some(Self::Xls),
            "xml" => Some(Self::Xml),
            "xlsx" => Some(Self::Xlsx),
            "ppt" => Some(Self::Ppt),
            "pptx" => Some(Self::Pptx),
            _ => None,
        }
    }

    /// The application family that converts this format.
    pub fn family(self) -> Family {
        match self {
            Self::Doc | Self::Docx => Family::Document,
            Self::Xls | Self::Xml | Self::Xlsx => Family::Spreadsheet,
            Self::Ppt | Self::Pptx => Family::Presentation,
        }
    }
}

/// The desktop application family a conversion is handled by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Document,
    Spreadsheet,
    Presentation,
}

impl Family {
    /// Human-readable family name, used in log output and error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Spreadsheet => "spreadsheet",
            Self::Presentation => "presentation",
        }
    }
}

/// The second positional CLI argument: either an extension to swap onto
/// the input path, or an explicit output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Extension(String),
    Path(PathBuf),
}

impl OutputTarget {
    /// A bare alphanumeric token ("pdf") is an extension; anything
    /// containing a dot or a path separator is an explicit path.
    pub fn parse(arg: &str) -> Self {
        let is_token = !arg.is_empty() && arg.chars().all(|c| c.is_ascii_alphanumeric());
        if is_token {
            Self::Extension(arg.to_string())
        } else {
            Self::Path(PathBuf::from(arg))
        }
    }

    /// Resolve the concrete output path for the given input file.
    pub fn resolve(&self, input: &Path) -> PathBuf {
        match self {
            Self::Extension(ext) => input.with_extension(ext),
            Self::Path(path) => path.clone(),
        }
    }
}
