//! Layered property configuration.
//!
//! This crate assembles configuration from several property sources (environment,
//! `.properties` files, `.env` files, in-memory values), merges them by priority,
//! and expands `${key}` placeholder references into a frozen `Properties` set.
//!
//! ```rust,ignore
//! let config = upconfig::ConfigBuilder::new()
//!     .add_file("app.properties", false)
//!     .add_env("APP_")
//!     .add("greeting", "hello ${user}")
//!     .build()?;
//! ```

pub mod constants;
mod error;
mod loader;
mod properties;
pub mod source;
mod types;

pub use error::{ConfigError, SourceError};
pub use loader::{ConfigBuilder, PrioritizedSource, Resolver, aggregate};
pub use properties::Properties;
pub use source::PropertySource;
pub use types::{Delimiters, Priority, Property, PropertyMap};
