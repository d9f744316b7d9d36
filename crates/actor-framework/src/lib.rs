//! # Actor Framework
//!
//! A small persistence layer for resource handlers, built on the **Actor Model**.
//!
//! Each resource type gets one [`ResourceActor`] that owns its store and serialises every
//! request. Handlers talk to it through a cloneable [`ResourceClient`], which exposes the
//! operations a CRUD controller needs: `create`, `get`, `list` and `update`.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the resource, its create/update payloads and the
//!    save-time validation hooks.
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing, id assignment and storage.
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe async calls.
//!
//! ```rust
//! use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Dog {
//!     id: u32,
//!     name: String,
//! }
//!
//! #[derive(Debug)] struct DogCreate { name: String }
//! #[derive(Debug)] struct DogUpdate { name: String }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("name can't be blank")]
//! struct BlankName;
//!
//! #[async_trait]
//! impl ActorEntity for Dog {
//!     type Id = u32;
//!     type Create = DogCreate;
//!     type Update = DogUpdate;
//!     type Context = ();
//!     type Error = BlankName;
//!
//!     fn from_create_params(id: u32, params: DogCreate) -> Result<Self, Self::Error> {
//!         if params.name.trim().is_empty() {
//!             return Err(BlankName);
//!         }
//!         Ok(Self { id, name: params.name })
//!     }
//!
//!     async fn on_update(&mut self, update: DogUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         self.name = update.name;
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Dog>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(DogCreate { name: "Rex".into() }).await.unwrap();
//!     assert_eq!(client.get(id).await.unwrap().unwrap().name, "Rex");
//!
//!     let rejected = client.create(DogCreate { name: " ".into() }).await;
//!     assert!(matches!(rejected, Err(FrameworkError::EntityError(_))));
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor, so the store needs no locks
//! - Dropping the last client closes the channel and ends the actor's loop
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from a queue of expectations, which lets controller
//! logic be tested without a running actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
