//! # Mock Framework
//!
//! Utilities for testing clients and actors in isolation.
//!
//! [`MockClient`] hands out a real [`ResourceClient`] whose requests are answered from a
//! queue of scripted expectations instead of a running [`ResourceActor`](crate::framework::ResourceActor).
//!
//! ## Testing Strategies
//!
//! | Pattern | What runs for real | Where |
//! |---------|-------------------|-------|
//! | Client logic | nothing (pure mock) | `clients::*` unit tests |
//! | Actor + mocked deps | the actor under test | `tests/order_actor_test.rs` |
//! | Full system | every actor | `tests/integration_test.rs` |
//!
//! ```rust,ignore
//! let mut customers = MockClient::<Customer>::new();
//! customers.expect_get(CustomerId(1)).return_ok(Some(customer));
//!
//! let client = CustomerClient::new(customers.client());
//! // ... exercise code that calls client.get(...) ...
//! customers.verify();
//! ```
//!
//! For tests that need to look at the payload of a request, use [`create_mock_client`]
//! with [`expect_create`], [`expect_get`] or [`expect_action`] and answer by hand.

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted reply for the next request the mock receives.
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
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking.
///
/// Requests are matched against expectations in FIFO order. A request that doesn't
/// match the next expectation (wrong kind or wrong id) gets no reply, so the caller
/// sees [`FrameworkError::ActorDropped`], and [`MockClient::verify`] reports it.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    mismatches: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let mismatches = Arc::new(Mutex::new(Vec::new()));
        let queue = expectations.clone();
        let seen = mismatches.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().unwrap().pop_front();
                if let Err(msg) = answer(request, next) {
                    seen.lock().unwrap().push(msg);
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            mismatches,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(|response| Expectation::Create { response })
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(move |response| Expectation::Action { id, response })
    }

    /// Verifies that all expectations were met and no request went unmatched.
    pub fn verify(&self) {
        let mismatches = self.mismatches.lock().unwrap();
        if !mismatches.is_empty() {
            panic!("Unexpected requests: {}", mismatches.join("; "));
        }
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn builder<R>(
        &self,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            make: Box::new(make),
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder returned by the `expect_*` methods. Finish it with `return_ok` or `return_err`.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Queue<T>,
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

/// Replies to `request` from `expectation`, or describes why they don't match.
fn answer<T: ActorEntity>(
    request: ResourceRequest<T>,
    expectation: Option<Expectation<T>>,
) -> Result<(), String> {
    fn check<I: PartialEq + std::fmt::Display>(got: &I, want: &I) -> Result<(), String> {
        if got == want {
            Ok(())
        } else {
            Err(format!("expected id {want}, got {got}"))
        }
    }

    match (request, expectation) {
        (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response })) => {
            check(&id, &want)?;
            let _ = respond_to.send(response);
        }
        (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
            let _ = respond_to.send(response);
        }
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Update { id, respond_to, .. },
            Some(Expectation::Update { id: want, response }),
        ) => {
            check(&id, &want)?;
            let _ = respond_to.send(response);
        }
        (ResourceRequest::Delete { id, respond_to }, Some(Expectation::Delete { id: want, response })) => {
            check(&id, &want)?;
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Action { id, respond_to, .. },
            Some(Expectation::Action { id: want, response }),
        ) => {
            check(&id, &want)?;
            let _ = respond_to.send(response);
        }
        (request, Some(_)) => return Err(format!("request {} did not match", kind(&request))),
        (request, None) => return Err(format!("no expectation left for {}", kind(&request))),
    }
    Ok(())
}

fn kind<T: ActorEntity>(request: &ResourceRequest<T>) -> &'static str {
    match request {
        ResourceRequest::Create { .. } => "create",
        ResourceRequest::Get { .. } => "get",
        ResourceRequest::List { .. } => "list",
        ResourceRequest::Update { .. } => "update",
        ResourceRequest::Delete { .. } => "delete",
        ResourceRequest::Action { .. } => "action",
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client plus the receiving end of its channel.
///
/// Use this when a test must inspect the request payload itself (for example, the
/// reason carried by a cancel action) before answering it.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is a Get.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is an Action.
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Ingredient, IngredientCreate, IngredientId};

    fn ingredient(id: u32, name: &str) -> Ingredient {
        Ingredient::from_create_params(
            IngredientId(id),
            IngredientCreate {
                name: name.to_string(),
                amount: None,
                description: None,
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_raw_channel_helpers() {
        let (client, mut receiver) = create_mock_client::<Ingredient>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(IngredientCreate {
                    name: "Salmon".to_string(),
                    amount: Some("200g".to_string()),
                    description: None,
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.name, "Salmon");
        responder.send(Ok(IngredientId(7))).unwrap();

        assert_eq!(create_task.await.unwrap().unwrap(), IngredientId(7));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Ingredient>::new();
        mock.expect_create().return_ok(IngredientId(1));
        mock.expect_get(IngredientId(1)).return_ok(Some(ingredient(1, "Pumpkin")));
        mock.expect_list().return_ok(vec![ingredient(1, "Pumpkin"), ingredient(2, "Kale")]);
        mock.expect_delete(IngredientId(2)).return_err(FrameworkError::NotFound("ingredient_2".into()));

        let client = mock.client();
        let id = client
            .create(IngredientCreate {
                name: "Pumpkin".to_string(),
                amount: None,
                description: None,
            })
            .await
            .unwrap();
        assert_eq!(id, IngredientId(1));

        let fetched = client.get(id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Pumpkin");
        assert_eq!(client.list().await.unwrap().len(), 2);
        assert!(matches!(
            client.delete(IngredientId(2)).await,
            Err(FrameworkError::NotFound(_))
        ));

        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "expected id ingredient_1, got ingredient_9")]
    async fn test_verify_reports_wrong_id() {
        let mut mock = MockClient::<Ingredient>::new();
        mock.expect_get(IngredientId(1)).return_ok(None);

        let result = mock.client().get(IngredientId(9)).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_reports_unused_expectations() {
        let mut mock = MockClient::<Ingredient>::new();
        mock.expect_list().return_ok(vec![]);
        mock.verify();
    }
}
