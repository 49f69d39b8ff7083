use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{CommandFactory, Parser};
use rtsbb::{FormattingOptions, format};
use tracing_subscriber::EnvFilter;

const OPTIONS_HELP: &str = "\
Available options are:
- underlined_exercise
- bold_exercise
- italic_exercise
- underlined_notes
- bold_notes
- italic_notes
- ignore_intended_reps";

#[derive(Parser)]
#[command(
    version,
    about = "Convert RTS workout exports to BBCode",
    after_help = OPTIONS_HELP
)]
struct Cli {
    /// Reject set data that does not divide evenly into the declared sets
    #[arg(long)]
    strict: bool,
    /// RTS export to convert, or `-` to read standard input
    file: PathBuf,
    /// Formatting options; unknown names are ignored
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    options: Vec<String>,
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read standard input")?;
        return Ok(input);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Entry point for the command-line converter.
///
/// Reads one RTS export, converts it with the options named on the command
/// line and prints the BBCode to standard output. Diagnostics go to standard
/// error and honour `RUST_LOG`.
///
/// # Examples
///
/// ```sh
/// # Bold exercise names, italic notes
/// rtsbb workout.txt bold_exercise italic_notes
///
/// # Only show what was actually lifted
/// cat workout.txt | rtsbb - ignore_intended_reps
/// ```
fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Flags after the file land in `options` verbatim.
    if cli.options.iter().any(|o| o == "--help" || o == "-h") {
        Cli::command().print_help()?;
        return Ok(());
    }
    let mut opts = FormattingOptions::from_flags(&cli.options);
    opts.strict |= cli.strict || cli.options.iter().any(|o| o == "--strict");

    let input = read_input(&cli.file)?;
    let out = format(&input, &opts)?;
    println!("{}", out.trim_end_matches('\n'));
    Ok(())
}
