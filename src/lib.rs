//! nbpair - Convert Jupyter notebooks into paired Python and Markdown files
//!
//! The conversion pipeline copies every notebook found under `raw/` into a
//! slug-named folder under `interim/`, derives a code-only Python script and
//! a markdown-only document from it, and maintains `interim/index.md` as a
//! catalog of every complete pair.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod catalog;
pub mod config;
pub mod discover;
pub mod notebook;
pub mod output;
pub mod pipeline;
pub mod slug;
pub mod writer;
