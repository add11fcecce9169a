use crate::clients::actor_client::ActorClient;
use crate::employee_actor::{EmployeeAction, EmployeeActionResult, EmployeeError};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Employee, EmployeeCreate, EmployeeId, EmployeeUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Employee actor.
#[derive(Clone)]
pub struct EmployeeClient {
    inner: ResourceClient<Employee>,
}

impl EmployeeClient {
    pub fn new(inner: ResourceClient<Employee>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Employee> for EmployeeClient {
    type Error = EmployeeError;

    fn inner(&self) -> &ResourceClient<Employee> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        EmployeeError::from(e)
    }
}

impl EmployeeClient {
    #[instrument(skip(self, params))]
    pub async fn create_employee(&self, params: EmployeeCreate) -> Result<EmployeeId, EmployeeError> {
        debug!(?params, "create_employee called");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_employee(
        &self,
        id: EmployeeId,
        update: EmployeeUpdate,
    ) -> Result<Employee, EmployeeError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn deactivate(&self, id: EmployeeId) -> Result<(), EmployeeError> {
        debug!("Deactivating employee");
        match self
            .inner
            .perform_action(id, EmployeeAction::Deactivate)
            .await
            .map_err(Self::map_error)?
        {
            EmployeeActionResult::Deactivate(()) => Ok(()),
            other => Err(EmployeeError::ActorCommunicationError(format!(
                "unexpected result: {other:?}"
            ))),
        }
    }

    #[instrument(skip(self))]
    pub async fn activate(&self, id: EmployeeId) -> Result<(), EmployeeError> {
        debug!("Activating employee");
        match self
            .inner
            .perform_action(id, EmployeeAction::Activate)
            .await
            .map_err(Self::map_error)?
        {
            EmployeeActionResult::Activate(()) => Ok(()),
            other => Err(EmployeeError::ActorCommunicationError(format!(
                "unexpected result: {other:?}"
            ))),
        }
    }
}
