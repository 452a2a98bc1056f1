// Axes expression parser module

pub mod axes;
pub mod lexer;

// Public API re-exports
pub use axes::parse_axes;
