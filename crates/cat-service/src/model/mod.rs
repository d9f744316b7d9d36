//! Pure data structures managed by the persistence actor.

pub mod cat;

pub use cat::*;
