//! # Adapters Layer (Hexagonal Architecture)
//!
//! Override-file reader and implementations of the outbound
//! `TxtRecordResolver` port.

mod json_file;
mod txt_resolver;

pub use json_file::{read_hashfile, HashFile, HashLine};
pub use txt_resolver::{NoTxtResolver, StaticTxtResolver};
