//! Core parsing and binding logic.

pub mod bind;
pub mod configuration;
pub mod error;
pub mod options;
pub mod parser;
