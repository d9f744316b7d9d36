//! # Generic Messages
//!
//! The request envelope sent from [`ResourceClient`](crate::ResourceClient) to
//! [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants are the persistence operations a resource handler needs:
///
/// - **Create**: construct, validate and save a new resource from [`ActorEntity::Create`].
/// - **Get**: look up a single resource by id.
/// - **List**: every stored resource, ordered by id.
/// - **Update**: apply [`ActorEntity::Update`] to an existing resource and save it.
///
/// Resources managed here are never destroyed, so there is no delete request.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
}
