pub mod emit;
pub mod error;
pub mod frame;
pub mod parser;
pub mod pipeline;
pub mod renderer;

pub use error::{Error, Result};
pub use frame::{Frame, Link};
pub use parser::{format_parse_error, parse, parse_file, ParseError};
pub use pipeline::{convert, Mode, Options, Outcome, Output};
pub use renderer::render_page;
