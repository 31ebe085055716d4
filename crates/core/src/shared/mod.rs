pub mod constants;
pub mod error;
pub mod numeric_text;
pub mod palette;
