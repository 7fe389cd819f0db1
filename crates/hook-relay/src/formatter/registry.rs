//! Language registry
//!
//! The single table mapping a configured language to its formatter.

use super::{ChineseFormatter, EnglishFormatter, Formatter};
use hook_core::{Destination, Language};

type Constructor = fn(Destination) -> Box<dyn Formatter>;

fn english(destination: Destination) -> Box<dyn Formatter> {
    Box::new(EnglishFormatter::new(destination))
}

fn chinese(destination: Destination) -> Box<dyn Formatter> {
    Box::new(ChineseFormatter::new(destination))
}

fn constructor(language: Language) -> Constructor {
    match language {
        Language::English => english,
        Language::Chinese => chinese,
    }
}

/// Build the formatter for one destination
pub fn formatter_for(destination: Destination) -> Box<dyn Formatter> {
    constructor(destination.language)(destination)
}

/// Build one formatter per destination, preserving order
pub fn formatters_for(destinations: &[Destination]) -> Vec<Box<dyn Formatter>> {
    destinations.iter().cloned().map(formatter_for).collect()
}
