#![doc = include_str!("../README.md")]
#![warn(
    clippy::cargo,
    missing_docs,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::option_if_let_else,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::multiple_crate_versions
)]
#![deny(unsafe_code)]

pub use crate::bench::{
    run, run_all, run_and_print, run_strategies, run_with_document, Report,
};
pub use crate::config::{BenchConfig, Measurement, DEFAULT_COUNT};
pub use crate::error::{Error, ErrorKind};
pub use crate::json::{Document, Json, JsonArray};
pub use crate::loader::{load_document, read_document, DEFAULT_DOCUMENT};
pub use crate::record::Record;
pub use crate::strategy::{Prepared, Strategy, UnknownStrategy};

mod bench;
mod config;
mod error;
/// A dynamic JSON wrapper where lookups never fail.
pub mod json;
mod loader;
/// The record type and the functions that build it from parsed JSON.
pub mod record;
mod strategy;
