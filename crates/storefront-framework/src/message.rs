//! # Generic Messages
//!
//! Requests sent from a `ResourceClient` to its `ResourceActor`, and the change
//! events the actor broadcasts back to subscribers.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message sent to the actor to request an operation.
///
/// The variants are the CRUD operations every table supports, plus `List` for
/// whole-table reads and `Action` for resource-specific logic such as cart
/// increments. The payload types come from the [`ActorEntity`] associated types,
/// so a category payload can never reach the product table.
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
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

/// A change to one entity, broadcast to every subscriber of the actor.
///
/// `Created` and `Updated` carry the entity as it is after the change. A mutating
/// action is reported as `Updated`.
#[derive(Debug, Clone)]
pub enum ResourceEvent<T: ActorEntity> {
    Created { id: T::Id, entity: T },
    Updated { id: T::Id, entity: T },
    Deleted { id: T::Id },
}

impl<T: ActorEntity> ResourceEvent<T> {
    /// The id of the entity this event is about.
    pub fn id(&self) -> &T::Id {
        match self {
            ResourceEvent::Created { id, .. }
            | ResourceEvent::Updated { id, .. }
            | ResourceEvent::Deleted { id } => id,
        }
    }

    /// The entity after the change, `None` once deleted.
    pub fn entity(&self) -> Option<&T> {
        match self {
            ResourceEvent::Created { entity, .. } | ResourceEvent::Updated { entity, .. } => {
                Some(entity)
            }
            ResourceEvent::Deleted { .. } => None,
        }
    }
}
