pub mod cli;
pub mod css;
pub mod html;

pub use cli::render_cli_to_string;
pub use html::render_page;
