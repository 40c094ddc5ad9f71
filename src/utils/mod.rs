pub mod environment;
pub mod escape;
pub mod resources;

pub use environment::{default_data_path, format_path_with_tilde};
pub use escape::escape_html;
pub use resources::resolve_thumbnail;
