//! Heuristic contract field extraction.

mod parser;
pub mod rules;

pub use parser::HeuristicParser;
pub(crate) use parser::leading_chars;
