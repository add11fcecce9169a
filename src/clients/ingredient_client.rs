use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::ingredient_actor::{IngredientAction, IngredientActionResult, IngredientError};
use crate::model::{Ingredient, IngredientCreate, IngredientId, IngredientUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Ingredient actor.
///
/// Ingredients are hard-deleted with [`ActorClient::delete`].
#[derive(Clone)]
pub struct IngredientClient {
    inner: ResourceClient<Ingredient>,
}

impl IngredientClient {
    pub fn new(inner: ResourceClient<Ingredient>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Ingredient> for IngredientClient {
    type Error = IngredientError;

    fn inner(&self) -> &ResourceClient<Ingredient> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        IngredientError::from(e)
    }
}

impl IngredientClient {
    #[instrument(skip(self, params))]
    pub async fn create_ingredient(&self, params: IngredientCreate) -> Result<IngredientId, IngredientError> {
        debug!(?params, "create_ingredient called");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_ingredient(
        &self,
        id: IngredientId,
        update: IngredientUpdate,
    ) -> Result<Ingredient, IngredientError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn deactivate(&self, id: IngredientId) -> Result<(), IngredientError> {
        debug!("Deactivating ingredient");
        match self
            .inner
            .perform_action(id, IngredientAction::Deactivate)
            .await
            .map_err(Self::map_error)?
        {
            IngredientActionResult::Deactivate(()) => Ok(()),
            other => Err(IngredientError::ActorCommunicationError(format!(
                "unexpected result: {other:?}"
            ))),
        }
    }

    #[instrument(skip(self))]
    pub async fn activate(&self, id: IngredientId) -> Result<(), IngredientError> {
        debug!("Activating ingredient");
        match self
            .inner
            .perform_action(id, IngredientAction::Activate)
            .await
            .map_err(Self::map_error)?
        {
            IngredientActionResult::Activate(()) => Ok(()),
            other => Err(IngredientError::ActorCommunicationError(format!(
                "unexpected result: {other:?}"
            ))),
        }
    }
}
