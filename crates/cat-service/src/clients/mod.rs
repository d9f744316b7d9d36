//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).

pub mod cat_client;

pub use cat_client::*;
