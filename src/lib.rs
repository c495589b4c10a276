//! Resume Convert: Markdown Resume Conversion Library
//!
//! Converts a Markdown resume into DOCX, PDF and HTML by driving pandoc.
//! All document semantics belong to pandoc; this crate validates the
//! environment, dispatches the requested conversions and reports results.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
