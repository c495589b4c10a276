//! Pipeline module - orchestrates the conversion steps

pub mod config;
pub mod converter;
pub mod dispatch;
pub mod error;
pub mod formats;
pub mod output_dir;
pub mod preconditions;
pub mod runner;

pub use config::*;
pub use converter::*;
pub use dispatch::*;
pub use error::*;
pub use formats::*;
pub use output_dir::*;
pub use preconditions::*;
pub use runner::*;
