//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a persisted resource must satisfy to be managed by
//! the generic [`ResourceActor`](crate::ResourceActor). It names the identifier, the create and
//! update payloads, the injected context and the error type, and exposes the lifecycle hooks the
//! actor calls while saving.
//!
//! # Validation
//! The hooks double as the save-time validation step. A hook that returns `Err` aborts the
//! request and the store is left exactly as it was:
//! - [`ActorEntity::from_create_params`] / [`ActorEntity::on_create`] failing means no entity is
//!   inserted and no identifier is consumed.
//! - [`ActorEntity::on_update`] must validate before assigning, so a rejected update leaves every
//!   field unchanged.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks may await other actors. The `Context` type is injected
/// into every hook by [`ResourceActor::run`](crate::ResourceActor::run), which lets dependencies
/// be bound after the actor is constructed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    ///
    /// Built from the actor's `u32` counter. `Ord` keeps listings in creation order.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The whitelisted fields required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The whitelisted fields accepted when updating an existing instance.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity, typically a `thiserror` enum.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the assigned id and the create payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction and before the entity is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply a partial update in place.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;
}
