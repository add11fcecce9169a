//! [`ActorEntity`] implementation for [`Menu`].

use super::actions::{MenuAction, MenuActionResult};
use super::error::MenuError;
use crate::framework::ActorEntity;
use crate::model::validation::{self, Validate};
use crate::model::{Menu, MenuCreate, MenuId, MenuUpdate};
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for Menu {
    type Id = MenuId;
    type Create = MenuCreate;
    type Update = MenuUpdate;
    type Action = MenuAction;
    type ActionResult = MenuActionResult;
    type Context = ();
    type Error = MenuError;

    fn from_create_params(id: MenuId, params: MenuCreate) -> Result<Self, Self::Error> {
        params.validate()?;
        Ok(Self::new(id, params))
    }

    fn unique_keys(&self) -> Vec<String> {
        vec![validation::unique_key(&self.name)]
    }

    /// # Fields Updated
    /// - `name`, `description`, `image_url`, `ingredients`, `price`
    ///
    /// Orders already placed are unaffected; they hold a snapshot.
    async fn on_update(&mut self, update: MenuUpdate, _ctx: &()) -> Result<(), Self::Error> {
        update.validate()?;
        self.apply(update);
        Ok(())
    }

    async fn handle_action(&mut self, action: MenuAction, _ctx: &()) -> Result<MenuActionResult, Self::Error> {
        let result = match action {
            MenuAction::Deactivate => {
                self.is_active = false;
                MenuActionResult::Deactivate(())
            }
            MenuAction::Activate => {
                self.is_active = true;
                MenuActionResult::Activate(())
            }
        };
        self.updated_at = Utc::now();
        Ok(result)
    }
}
