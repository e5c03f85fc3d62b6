pub mod decimal;
pub mod digit;
pub mod letter;
pub mod whitespace;

pub use decimal::decimal;
pub use digit::digit;
pub use letter::{letter, non_newline};
pub use whitespace::{skip_comments, skip_eol, skip_whitespace};
