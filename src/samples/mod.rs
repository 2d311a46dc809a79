//! Sample Module
//!
//! Example record types wired to the codec, used by the demo binary,
//! the integration tests and the benchmarks.
//!
//! Two adapter styles are shown:
//! - [`Company`]: one `describe` for the whole tree, nested closures per level
//! - [`Nested`]: one `describe` per type, composed with `collection_of`

mod company;
mod nested;

pub use company::{Company, Department, Employee};
pub use nested::{Branch, Leaf, Nested, Twig};
