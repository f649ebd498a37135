pub mod date_formatter;

pub use date_formatter::{format_price, round_price};
