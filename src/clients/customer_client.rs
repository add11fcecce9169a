//! # Customer Client
//!
//! Wraps a `ResourceClient<Customer>` and exposes account operations.
use crate::clients::actor_client::ActorClient;
use crate::customer_actor::{CustomerAction, CustomerActionResult, CustomerError};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CustomerError::from(e)
    }
}

impl CustomerClient {
    #[instrument(skip(self, params))]
    pub async fn create_customer(&self, params: CustomerCreate) -> Result<CustomerId, CustomerError> {
        debug!(?params, "create_customer called");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_customer(
        &self,
        id: CustomerId,
        update: CustomerUpdate,
    ) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Soft delete. The account stays on file so its orders keep a valid owner.
    #[instrument(skip(self))]
    pub async fn deactivate(&self, id: CustomerId) -> Result<(), CustomerError> {
        debug!("Deactivating customer");
        match self
            .inner
            .perform_action(id, CustomerAction::Deactivate)
            .await
            .map_err(Self::map_error)?
        {
            CustomerActionResult::Deactivate(()) => Ok(()),
            other => Err(CustomerError::ActorCommunicationError(format!(
                "unexpected result: {other:?}"
            ))),
        }
    }

    #[instrument(skip(self))]
    pub async fn activate(&self, id: CustomerId) -> Result<(), CustomerError> {
        debug!("Activating customer");
        match self
            .inner
            .perform_action(id, CustomerAction::Activate)
            .await
            .map_err(Self::map_error)?
        {
            CustomerActionResult::Activate(()) => Ok(()),
            other => Err(CustomerError::ActorCommunicationError(format!(
                "unexpected result: {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;

    #[tokio::test]
    async fn test_duplicate_email_maps_to_already_exists() {
        let mut mock = MockClient::<Customer>::new();
        mock.expect_create()
            .return_err(FrameworkError::AlreadyExists("amy@example.com".into()));
        let client = CustomerClient::new(mock.client());

        let err = client
            .create_customer(CustomerCreate {
                name: "Amy".into(),
                mobile_no: "0812345678".into(),
                email: "AMY@example.com".into(),
                address: None,
                zipcode: None,
                city: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err, CustomerError::AlreadyExists("amy@example.com".into()));
        mock.verify();
    }

    #[tokio::test]
    async fn test_entity_error_is_recovered() {
        let mut mock = MockClient::<Customer>::new();
        mock.expect_update(CustomerId(3)).return_err(FrameworkError::EntityError(Box::new(
            CustomerError::ValidationError("email: must be a valid email address".into()),
        )));
        let client = CustomerClient::new(mock.client());

        let err = client
            .update_customer(CustomerId(3), CustomerUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CustomerError::ValidationError(msg) if msg.starts_with("email")));
        mock.verify();
    }

    #[tokio::test]
    async fn test_deactivate_unknown_customer() {
        let mut mock = MockClient::<Customer>::new();
        mock.expect_action(CustomerId(8))
            .return_err(FrameworkError::NotFound("customer_8".into()));
        let client = CustomerClient::new(mock.client());

        let err = client.deactivate(CustomerId(8)).await.unwrap_err();
        assert_eq!(err, CustomerError::NotFound("customer_8".into()));
        mock.verify();
    }
}
