use colored::Colorize;

use crate::error::Error;
use crate::frame::Frame;

/// Terminal tree view of the parsed frames.
pub fn render_cli_to_string(frames: &[Frame]) -> String {
    let mut out = String::new();
    for frame in frames {
        out.push_str(&format!("▸ {} ({} links)\n", frame.name, frame.links.len()));
        for link in &frame.links {
            out.push_str(&format!("  {} → {}\n", link.label.trim(), link.url));
        }
    }
    out
}

pub fn print_success(message: &str) {
    println!("{} {}", "✔".green().bold(), message);
}

/// Same as `print_success`, on stderr, for runs whose stdout is the result.
pub fn eprint_success(message: &str) {
    eprintln!("{} {}", "✔".green().bold(), message);
}

pub fn print_error(err: &Error) {
    eprintln!("{} {}", "❌".red(), err.to_string().red());
}
