//! Configuration assembly: merge sources, then resolve placeholders.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigBuilder` for prioritized source registration.
//! - Merge source outputs by priority (`aggregate`).
//! - Expand placeholder references across keys (`resolve`).
//!
//! Does NOT handle:
//! - Reading individual sources (see `crate::source`).
//! - Typed access to the result (see `crate::properties`).
//!
//! Invariants / Assumptions:
//! - Higher priority wins; equal priorities resolve by registration order, later wins.
//! - `Priority::Highest` outranks every numeric priority.
//! - Build runs to completion synchronously and yields either `Properties` or one error.

mod aggregate;
mod builder;
mod resolve;

#[cfg(test)]
mod tests;

pub use aggregate::{PrioritizedSource, aggregate};
pub use builder::ConfigBuilder;
pub use resolve::Resolver;
