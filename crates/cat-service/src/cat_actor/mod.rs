//! # Cat Actor
//!
//! The persistence collaborator for cats: a [`ResourceActor<Cat>`] holding every cat in
//! id order, plus the validation rules applied on save.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Cat`]
//! - [`error`] - [`CatError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use cat_service::cat_actor;
//! use cat_service::model::CatCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = cat_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let params = CatCreate {
//!         name: Some("Tom".to_string()),
//!         color: Some("gray".to_string()),
//!     };
//!     let id = client.create_cat(params).await?;
//!     assert_eq!(id.to_string(), "1");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CatClient;
use crate::model::Cat;
use actor_framework::ResourceActor;

/// Creates a new Cat actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Cat>, CatClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CatClient::new(generic_client))
}
