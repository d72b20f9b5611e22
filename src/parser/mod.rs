pub mod error;
pub mod parser;

pub use error::{format_parse_error, ParseError};
pub use parser::{parse, parse_file};
