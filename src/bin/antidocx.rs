//! antidocx CLI - print the text of a DOCX file
//!
//! Usage:
//!   cat report.docx | antidocx [-w <columns>]
//!   antidocx [-w <columns>] report.docx

use antidocx::{Document, FormatOptions, DEFAULT_WIDTH};
use clap::{CommandFactory, Parser};
use std::fs;
use std::io::{self, BufWriter, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Exit status when extraction fails
const EXIT_ERROR: u8 = 1;
/// Exit status when nothing was piped in
const EXIT_USAGE: u8 = 2;

/// Print the text contents of a .docx file to stdout
#[derive(Parser)]
#[command(
    name = "antidocx",
    version,
    about = "Print the text contents of a .docx file to stdout",
    override_usage = "cat [FILE] | antidocx [-w <COLUMNS>]\n       antidocx [-w <COLUMNS>] [FILE]"
)]
struct Cli {
    /// Width of text in columns
    #[arg(short, long, value_name = "COLUMNS", default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// DOCX file to read (default: stdin, also "-")
    file: Option<PathBuf>,
}

/// Where the document bytes come from
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    fn from_arg(file: Option<&Path>) -> Self {
        match file {
            Some(path) if path != Path::new("-") => Input::File(path.to_path_buf()),
            _ => Input::Stdin,
        }
    }

    /// Stdin still attached to a terminal means nothing was piped in
    fn is_interactive(&self, stdin_is_terminal: bool) -> bool {
        *self == Input::Stdin && stdin_is_terminal
    }

    fn read(&self) -> io::Result<Vec<u8>> {
        match self {
            Input::File(path) => fs::read(path),
            Input::Stdin => {
                let mut bytes = Vec::new();
                io::stdin().lock().read_to_end(&mut bytes)?;
                Ok(bytes)
            }
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let input = Input::from_arg(cli.file.as_deref());
    if input.is_interactive(io::stdin().is_terminal()) {
        eprintln!("No input from file, use \"cat <filename> | antidocx\" or use \"-h\" for help.");
        eprintln!();
        eprintln!("{}", Cli::command().render_usage());
        return ExitCode::from(EXIT_USAGE);
    }

    match run(&input, cli.width) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", error_message(&e));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(input: &Input, width: usize) -> antidocx::Result<()> {
    let bytes = input.read()?;
    log::debug!("read {} bytes of input", bytes.len());

    let doc = Document::from_bytes(&bytes)?;
    let options = FormatOptions::new().width(width);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    out.write_all(doc.render(&options).as_bytes())?;
    out.flush()?;
    Ok(())
}

fn error_message(err: &antidocx::Error) -> String {
    format!("antidocx: {}", err)
}
