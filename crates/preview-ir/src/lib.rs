pub mod parse;
pub mod types;

pub use parse::{parse_directive, ParseError};
pub use types::{DesignDirective, EventRecord};
