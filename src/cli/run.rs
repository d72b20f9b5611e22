use std::path::{Path, PathBuf};

use startpage::renderer::cli::{eprint_success, print_success};
use startpage::{convert, Error, Mode, Options, Output};

/// Entry point called by `cli::run` once the input path is known.
pub fn handle_run(input: &Path, mode: Mode, output: Option<PathBuf>) -> Result<(), Error> {
    let options = Options { mode, output };
    let outcome = convert(input, &options)?;

    match &outcome.output {
        Output::Written(_) => {
            print_success(&outcome.read_message());
            if let Some(msg) = outcome.written_message() {
                print_success(&msg);
            }
        }
        Output::Printed(text) => {
            // stdout carries only the result in these modes
            eprint_success(&outcome.read_message());
            print!("{}", text);
        }
    }
    Ok(())
}
