pub mod common;
pub mod output;
