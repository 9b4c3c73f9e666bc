use async_trait::async_trait;
use storefront_framework::{ActorEntity, FrameworkError, ResourceActor, ResourceEvent};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Shelf {
    id: u32,
    label: String,
    visits: u32,
}

#[derive(Debug)]
struct ShelfCreate {
    label: String,
}

#[derive(Debug)]
struct ShelfUpdate {
    label: Option<String>,
}

#[derive(Debug)]
enum ShelfAction {
    Visit,
    Peek,
    /// Counts as a mutation but only changes something on an unvisited shelf.
    Dust,
}

#[derive(Debug, thiserror::Error)]
#[error("label must not be empty")]
struct EmptyLabel;

#[async_trait]
impl ActorEntity for Shelf {
    type Id = u32;
    type Create = ShelfCreate;
    type Update = ShelfUpdate;
    type Action = ShelfAction;
    type ActionResult = u32;
    type Context = ();
    type Error = EmptyLabel;

    fn from_create_params(id: u32, params: ShelfCreate) -> Result<Self, Self::Error> {
        if params.label.is_empty() {
            return Err(EmptyLabel);
        }
        Ok(Self {
            id,
            label: params.label,
            visits: 0,
        })
    }

    async fn on_update(
        &mut self,
        update: ShelfUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(label) = update.label {
            // Mutate first so a rejected update proves the actor discards the copy.
            self.label = label;
            if self.label.is_empty() {
                return Err(EmptyLabel);
            }
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ShelfAction,
        _ctx: &Self::Context,
    ) -> Result<u32, Self::Error> {
        match action {
            ShelfAction::Visit => {
                self.visits += 1;
                Ok(self.visits)
            }
            ShelfAction::Peek => Ok(self.visits),
            ShelfAction::Dust => {
                self.visits = self.visits.max(1);
                Ok(self.visits)
            }
        }
    }

    fn action_mutates(action: &ShelfAction) -> bool {
        matches!(action, ShelfAction::Visit | ShelfAction::Dust)
    }

    fn changed_since(&self, before: &Self) -> bool {
        self != before
    }
}

fn create(label: &str) -> ShelfCreate {
    ShelfCreate {
        label: label.to_string(),
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    tokio::spawn(actor.run(()));

    let id = client.create(create("Dairy")).await.unwrap();
    assert_eq!(id, 1);

    let visits = client.perform_action(id, ShelfAction::Visit).await.unwrap();
    assert_eq!(visits, 1);

    let update = ShelfUpdate {
        label: Some("Cheese".into()),
    };
    let updated = client.update(id, update).await.unwrap();
    assert_eq!(updated.label, "Cheese");
    assert_eq!(updated.visits, 1);

    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_keeps_insertion_order_after_delete() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    tokio::spawn(actor.run(()));

    for label in ["Dairy", "Bakery", "Produce", "Frozen"] {
        client.create(create(label)).await.unwrap();
    }
    client.delete(2).await.unwrap();

    let labels: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.label)
        .collect();
    assert_eq!(labels, vec!["Dairy", "Produce", "Frozen"]);
}

#[tokio::test]
async fn test_rejected_update_leaves_entity_untouched() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    tokio::spawn(actor.run(()));

    let id = client.create(create("Dairy")).await.unwrap();
    let result = client
        .update(id, ShelfUpdate { label: Some(String::new()) })
        .await;

    let err = result.unwrap_err();
    assert!(err.entity_error::<EmptyLabel>().is_some());
    assert_eq!(client.get(id).await.unwrap().unwrap().label, "Dairy");
}

#[tokio::test]
async fn test_missing_ids_are_not_found() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    tokio::spawn(actor.run(()));

    assert!(matches!(client.delete(9).await, Err(FrameworkError::NotFound(id)) if id == "9"));
    assert!(matches!(
        client.perform_action(9, ShelfAction::Visit).await,
        Err(FrameworkError::NotFound(_))
    ));
    assert!(matches!(client.create(create("")).await, Err(FrameworkError::EntityError(_))));
}

#[tokio::test]
async fn test_subscribers_hear_mutations_but_not_reads() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    tokio::spawn(actor.run(()));

    let mut events = client.subscribe();

    let id = client.create(create("Dairy")).await.unwrap();
    client.perform_action(id, ShelfAction::Peek).await.unwrap();
    client.get(id).await.unwrap();
    client.perform_action(id, ShelfAction::Visit).await.unwrap();
    client.delete(id).await.unwrap();

    match events.recv().await.unwrap() {
        ResourceEvent::Created { id: created, entity } => {
            assert_eq!(created, id);
            assert_eq!(entity.label, "Dairy");
        }
        other => panic!("Expected Created, got {other:?}"),
    }
    match events.recv().await.unwrap() {
        ResourceEvent::Updated { entity, .. } => assert_eq!(entity.visits, 1),
        other => panic!("Expected Updated, got {other:?}"),
    }
    assert!(matches!(events.recv().await.unwrap(), ResourceEvent::Deleted { .. }));
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn test_mutating_action_that_changes_nothing_is_silent() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    tokio::spawn(actor.run(()));

    let id = client.create(create("Dairy")).await.unwrap();
    let mut events = client.subscribe();

    // First dusting bumps the count, the second leaves the shelf as it was
    assert_eq!(client.perform_action(id, ShelfAction::Dust).await.unwrap(), 1);
    assert_eq!(client.perform_action(id, ShelfAction::Dust).await.unwrap(), 1);

    match events.try_recv() {
        Ok(ResourceEvent::Updated { entity, .. }) => assert_eq!(entity.visits, 1),
        other => panic!("Expected Updated, got {other:?}"),
    }
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn test_actor_stops_when_clients_are_dropped() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    let handle = tokio::spawn(actor.run(()));

    client.create(create("Dairy")).await.unwrap();
    drop(client);

    handle.await.unwrap();
}
