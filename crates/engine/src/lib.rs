//! Wild shape engine: everything around the pure rules in `wildshape-domain`.
//!
//! - `config` - environment-driven settings
//! - `library` - built-in form templates and custom form files
//! - `character` - base character loading
//! - `commands` - the command-line surface

pub mod character;
pub mod commands;
pub mod config;
pub mod error;
pub mod library;

pub use commands::{run, Command, USAGE};
pub use config::{AppConfig, OutputFormat};
pub use error::LoadError;
pub use library::{FormLibrary, FormSet};
