use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use startpage::{Error, Mode};

pub mod run;

const STARTPAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(
    name = "startpage",
    version = STARTPAGE_VERSION,
    about = "Convert a bookmark list into a static start page"
)]
pub struct Cli {
    /// Bookmark file: `#Group` headers followed by `label * url` lines
    #[arg(value_name = "INPUT_FILE")]
    pub input: Option<PathBuf>,

    /// Everything after the input is accepted and ignored
    #[arg(
        hide = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 0..
    )]
    pub extra: Vec<String>,

    #[arg(long, value_enum, default_value = "html")]
    pub mode: DefaultMode,

    /// Write the page here instead of next to the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultMode {
    Html,
    Json,
    Cli,
}

impl From<DefaultMode> for Mode {
    fn from(mode: DefaultMode) -> Self {
        match mode {
            DefaultMode::Html => Mode::Html,
            DefaultMode::Json => Mode::Json,
            DefaultMode::Cli => Mode::Cli,
        }
    }
}

fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "startpage".to_string())
}

/// Installs the stderr debug subscriber when `--log` is given.
/// Returns whether a subscriber was installed by this call.
pub fn init_logging(enabled: bool) -> bool {
    if !enabled {
        return false;
    }
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

pub fn run(cli: Cli) -> Result<(), Error> {
    init_logging(cli.log);
    let input = cli.input.ok_or_else(|| Error::usage(program_name()))?;
    run::handle_run(&input, cli.mode.into(), cli.output)
}
