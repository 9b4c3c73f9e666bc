//! # Mock Clients
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from
//! a queue of expectations instead of a table. Use it to test the logic *around* a
//! client (a product actor checking its category, a form submitting a product)
//! without starting the actor it depends on.
//!
//! | | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | Scripted answers | Real table |
//! | **Error Injection** | `return_err` | Needs a specific state |
//! | **Use Case** | Logic around a client | The actor itself or the whole system |
//!
//! ```rust
//! use storefront_framework::mock::MockClient;
//! use storefront_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Category { id: u32 }
//! #[derive(Debug)] struct CategoryCreate;
//! #[derive(Debug)] struct CategoryUpdate;
//! #[derive(Debug)] enum CategoryAction {}
//! #[derive(Debug, thiserror::Error)] #[error("category error")] struct CategoryError;
//!
//! #[async_trait]
//! impl ActorEntity for Category {
//!     type Id = u32; type Create = CategoryCreate; type Update = CategoryUpdate;
//!     type Action = CategoryAction; type ActionResult = (); type Context = (); type Error = CategoryError;
//!     fn from_create_params(id: u32, _: CategoryCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: CategoryUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, a: CategoryAction, _: &()) -> Result<(), Self::Error> { match a {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Category>::new();
//!     mock.expect_get(1).return_ok(Some(Category { id: 1 }));
//!     mock.expect_list().return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert!(client.get(1).await.unwrap().is_some());
//!     assert!(matches!(client.list().await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! The lower-level [`create_mock_client`] returns the request receiver itself, for
//! tests that want to inspect payloads with [`expect_create`], [`expect_get`] or
//! [`expect_action`] and answer by hand.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{broadcast, mpsc, oneshot};

/// A queued answer for the next request.
#[allow(dead_code)] // ids are not matched against requests yet
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn push<T: ActorEntity>(queue: &Queue<T>, expectation: Expectation<T>) {
    queue
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .push_back(expectation);
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are answered in the order they were declared. A request that does
/// not match the next expectation panics the mock task, and the caller then sees
/// `FrameworkError::ActorDropped`.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must run inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let (events, _) = broadcast::channel(16);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get { response, .. })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Update { respond_to, .. }, Some(Expectation::Update { response, .. })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Action { respond_to, .. }, Some(Expectation::Action { response, .. })) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender, events),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self, id: T::Id) -> UpdateExpectationBuilder<T> {
        UpdateExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        push(&self.expectations, Expectation::Get { id: self.id, response: Ok(value) });
    }

    pub fn return_err(self, error: FrameworkError) {
        push(&self.expectations, Expectation::Get { id: self.id, response: Err(error) });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: ActorEntity> {
    expectations: Queue<T>,
}

impl<T: ActorEntity> ListExpectationBuilder<T> {
    pub fn return_ok(self, items: Vec<T>) {
        push(&self.expectations, Expectation::List { response: Ok(items) });
    }

    pub fn return_err(self, error: FrameworkError) {
        push(&self.expectations, Expectation::List { response: Err(error) });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: ActorEntity> {
    expectations: Queue<T>,
}

impl<T: ActorEntity> CreateExpectationBuilder<T> {
    pub fn return_ok(self, id: T::Id) {
        push(&self.expectations, Expectation::Create { response: Ok(id) });
    }

    pub fn return_err(self, error: FrameworkError) {
        push(&self.expectations, Expectation::Create { response: Err(error) });
    }
}

/// Builder for `update` expectations.
pub struct UpdateExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: ActorEntity> UpdateExpectationBuilder<T> {
    pub fn return_ok(self, entity: T) {
        push(&self.expectations, Expectation::Update { id: self.id, response: Ok(entity) });
    }

    pub fn return_err(self, error: FrameworkError) {
        push(&self.expectations, Expectation::Update { id: self.id, response: Err(error) });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        push(&self.expectations, Expectation::Action { id: self.id, response: Ok(result) });
    }

    pub fn return_err(self, error: FrameworkError) {
        push(&self.expectations, Expectation::Action { id: self.id, response: Err(error) });
    }
}

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// Creates a client whose requests land on the returned receiver.
///
/// The test plays the actor: it reads each request with one of the `expect_*`
/// helpers, checks the payload, and answers on the oneshot sender.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (events, _) = broadcast::channel(16);
    (ResourceClient::new(sender, events), receiver)
}

/// Returns the payload if the next message is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Returns the id if the next message is a Get request.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Returns the id and action if the next message is an Action request.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
