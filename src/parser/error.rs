use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("link is not in the right format <name> * <link>")]
    MalformedLink { line: usize, text: String },
    #[error("empty content: no `#` frame header found")]
    EmptyContent,
}

pub fn format_parse_error(err: &ParseError, filename: &str) -> String {
    match err {
        ParseError::MalformedLink { line, text } => {
            let caret = "^".repeat(text.chars().count().max(1));
            format!(
                "Parse error: {}\n --> {}:{}\n {}\n {}",
                err, filename, line, text, caret
            )
        }
        ParseError::EmptyContent => format!("Parse error: {}\n --> {}", err, filename),
    }
}
