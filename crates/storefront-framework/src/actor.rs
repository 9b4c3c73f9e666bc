//! # Generic Actor Server
//!
//! `ResourceActor` owns one in-memory table of entities and processes every request
//! for it sequentially. The storefront runs one actor per resource (categories,
//! products, users, carts), which is what makes the mock store relational without
//! any locking: a product actor checks its category reference by asking the
//! category actor through its injected context.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceEvent, ResourceRequest};
use indexmap::IndexMap;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};

/// Capacity of the change-event broadcast. Slow subscribers skip old events.
const EVENT_CAPACITY: usize = 64;

/// The generic actor that manages a table of entities.
///
/// The table keeps insertion order, so `List` returns entities in the order they
/// were created. Ids come from a counter starting at 1.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2.  **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop on a Tokio task.
///
/// ```rust
/// use storefront_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Tag { id: u32, label: String }
/// #[derive(Debug)] struct TagCreate { label: String }
/// #[derive(Debug)] struct TagUpdate;
/// #[derive(Debug)] enum TagAction {}
/// #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
///
/// #[async_trait]
/// impl ActorEntity for Tag {
///     type Id = u32;
///     type Create = TagCreate;
///     type Update = TagUpdate;
///     type Action = TagAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = TagError;
///
///     fn from_create_params(id: u32, p: TagCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, label: p.label })
///     }
///     async fn on_update(&mut self, _: TagUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, a: TagAction, _: &()) -> Result<(), Self::Error> { match a {} }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Tag>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let id = client.create(TagCreate { label: "sale".into() }).await.unwrap();
///     let tags = client.list().await.unwrap();
///     assert_eq!(tags[0].id, id);
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    events: broadcast::Sender<ResourceEvent<T>>,
    store: IndexMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full,
    /// client calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let actor = Self {
            receiver,
            events: events.clone(),
            store: IndexMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender, events);
        (actor, client)
    }

    fn publish(&self, event: ResourceEvent<T>) {
        // No subscribers is not an error.
        let _ = self.events.send(event);
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// `context` is passed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            self.publish(ResourceEvent::Created {
                                id: id.clone(),
                                entity: item,
                            });
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let items = self.store.values().cloned().collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    // Hooks mutate a copy so a rejected update leaves the row untouched.
                    let mut staged = item.clone();
                    if let Err(e) = staged.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    *item = staged.clone();
                    info!(entity_type, %id, "Updated");
                    self.publish(ResourceEvent::Updated {
                        id,
                        entity: staged.clone(),
                    });
                    let _ = respond_to.send(Ok(staged));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.shift_remove(&id);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    self.publish(ResourceEvent::Deleted { id });
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let before = T::action_mutates(&action).then(|| item.clone());
                    let result = item
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(_) => debug!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let changed = before.is_some_and(|before| item.changed_since(&before));
                    if changed && result.is_ok() {
                        let entity = item.clone();
                        self.publish(ResourceEvent::Updated { id, entity });
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
