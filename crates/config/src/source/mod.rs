//! Property sources: the readers that feed the aggregator.
//!
//! Responsibilities:
//! - Define the `PropertySource` trait, the only contract the engine needs from a reader.
//! - Provide the built-in readers (environment, `.properties` file, `.env` file, in-memory).
//! - Provide key-transforming decorators that wrap another source.
//!
//! Does NOT handle:
//! - Priority ordering or merging (see `loader::aggregate`).
//! - Placeholder expansion (see `loader::resolve`).
//!
//! Invariants:
//! - `read()` returns a complete mapping or an error, never a partial mapping.
//! - Each `read()` call observes the backing data at call time.

mod decorator;
mod dotenv;
mod env;
mod file;
mod programmatic;

pub use decorator::{KeyReplace, LowerCaseKeys};
pub use dotenv::{DotenvSource, dotenv_disabled, load_dotenv};
pub use env::{EnvSource, env_var_or_none};
pub use file::FileSource;
pub use programmatic::ProgrammaticSource;

use crate::error::SourceError;
use crate::types::PropertyMap;

/// A producer of key/value configuration entries.
pub trait PropertySource {
    /// Read the source, returning every key it defines.
    fn read(&self) -> Result<PropertyMap, SourceError>;

    /// Human-readable name used in logs and error messages.
    fn name(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

impl<S: PropertySource + ?Sized> PropertySource for Box<S> {
    fn read(&self) -> Result<PropertyMap, SourceError> {
        (**self).read()
    }

    fn name(&self) -> String {
        (**self).name()
    }
}
