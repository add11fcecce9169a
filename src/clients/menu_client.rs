//! # Menu Client
//!
//! Wraps a `ResourceClient<Menu>`. Deleting a menu through this client is always a
//! soft delete ([`MenuClient::deactivate`]).
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::menu_actor::{MenuAction, MenuActionResult, MenuError};
use crate::model::{Menu, MenuCreate, MenuId, MenuUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<Menu>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<Menu>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Menu> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<Menu> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        MenuError::from(e)
    }
}

impl MenuClient {
    #[instrument(skip(self, params))]
    pub async fn create_menu(&self, params: MenuCreate) -> Result<MenuId, MenuError> {
        debug!(?params, "create_menu called");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_menu(&self, id: MenuId, update: MenuUpdate) -> Result<Menu, MenuError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn deactivate(&self, id: MenuId) -> Result<(), MenuError> {
        debug!("Deactivating menu");
        match self
            .inner
            .perform_action(id, MenuAction::Deactivate)
            .await
            .map_err(Self::map_error)?
        {
            MenuActionResult::Deactivate(()) => Ok(()),
            other => Err(MenuError::ActorCommunicationError(format!(
                "unexpected result: {other:?}"
            ))),
        }
    }

    #[instrument(skip(self))]
    pub async fn activate(&self, id: MenuId) -> Result<(), MenuError> {
        debug!("Activating menu");
        match self
            .inner
            .perform_action(id, MenuAction::Activate)
            .await
            .map_err(Self::map_error)?
        {
            MenuActionResult::Activate(()) => Ok(()),
            other => Err(MenuError::ActorCommunicationError(format!(
                "unexpected result: {other:?}"
            ))),
        }
    }

    /// The orderable catalog: active menus, ordered by id.
    #[instrument(skip(self))]
    pub async fn list_active(&self) -> Result<Vec<Menu>, MenuError> {
        let menus = self.list().await?;
        Ok(menus.into_iter().filter(|menu| menu.is_active).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action};

    #[tokio::test]
    async fn test_deactivate_sends_soft_delete() {
        let (client, mut receiver) = create_mock_client::<Menu>(10);
        let menu_client = MenuClient::new(client);

        let task = tokio::spawn(async move { menu_client.deactivate(MenuId(2)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, MenuId(2));
        assert!(matches!(action, MenuAction::Deactivate));
        responder.send(Ok(MenuActionResult::Deactivate(()))).unwrap();

        assert!(task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_mismatched_action_result_is_an_error() {
        let (client, mut receiver) = create_mock_client::<Menu>(10);
        let menu_client = MenuClient::new(client);

        let task = tokio::spawn(async move { menu_client.activate(MenuId(2)).await });

        let (_, _, responder) = expect_action(&mut receiver).await.unwrap();
        responder.send(Ok(MenuActionResult::Deactivate(()))).unwrap();

        assert!(matches!(
            task.await.unwrap(),
            Err(MenuError::ActorCommunicationError(_))
        ));
    }
}
