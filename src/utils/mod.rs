pub mod colors;
pub mod formatting;
pub mod path;
pub mod table;
pub mod weight;

pub use formatting::{format_brl, format_kg};
pub use weight::parse_weight;
