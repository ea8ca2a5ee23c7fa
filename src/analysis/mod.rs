//! Text analysis module for plurales.
//!
//! This module provides the pull-based token stream contract, a whitespace
//! tokenizer, the lowercase and Spanish plural stem filters, and the
//! factories that build filters by name.

pub mod factory;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use factory::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
