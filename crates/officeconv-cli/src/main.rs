use std::path::{Path, PathBuf};
use std::process;

use clap::{CommandFactory, Parser};
use officeconv::automation::soffice::Soffice;
use officeconv::config::OutputTarget;
use officeconv::error::ConvertError;

#[derive(Parser)]
#[command(
    name = "officeconv",
    version,
    about = "Convert Office documents (doc/docx, xls/xml/xlsx, ppt/pptx) to PDF"
)]
struct Cli {
    /// Input file (.doc, .docx, .xls, .xml, .xlsx, .ppt, .pptx)
    input: PathBuf,

    /// Output format (e.g. "pdf") or explicit output path
    output: String,
}

const EXIT_USAGE: i32 = 1;
const EXIT_RUNTIME: i32 = 2;

fn main() {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version print to stdout and exit 0.
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            eprintln!("{err}");
            process::exit(EXIT_USAGE);
        }
    };

    let target = OutputTarget::parse(&cli.output);
    match officeconv::convert_file(&cli.input, &target, &Soffice::from_env()) {
        Ok(output) => {
            println!("{}", converted_line(&cli.input, &output));
        }
        Err(err) => fail(&err),
    }
}

fn converted_line(input: &Path, output: &Path) -> String {
    format!("Converted [{}] to [{}]", input.display(), output.display())
}

fn fail(err: &ConvertError) -> ! {
    eprintln!("{err}");
    if err.is_usage() {
        eprintln!();
        eprintln!("{}", Cli::command().render_usage());
        process::exit(EXIT_USAGE);
    }
    process::exit(EXIT_RUNTIME);
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
