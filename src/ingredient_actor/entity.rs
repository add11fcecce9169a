//! [`ActorEntity`] implementation for [`Ingredient`].

use super::actions::{IngredientAction, IngredientActionResult};
use super::error::IngredientError;
use crate::framework::ActorEntity;
use crate::model::validation::{self, Validate};
use crate::model::{Ingredient, IngredientCreate, IngredientId, IngredientUpdate};
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for Ingredient {
    type Id = IngredientId;
    type Create = IngredientCreate;
    type Update = IngredientUpdate;
    type Action = IngredientAction;
    type ActionResult = IngredientActionResult;
    type Context = ();
    type Error = IngredientError;

    fn from_create_params(id: IngredientId, params: IngredientCreate) -> Result<Self, Self::Error> {
        params.validate()?;
        Ok(Self::new(id, params))
    }

    fn unique_keys(&self) -> Vec<String> {
        vec![validation::unique_key(&self.name)]
    }

    async fn on_update(&mut self, update: IngredientUpdate, _ctx: &()) -> Result<(), Self::Error> {
        update.validate()?;
        self.apply(update);
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: IngredientAction,
        _ctx: &(),
    ) -> Result<IngredientActionResult, Self::Error> {
        let result = match action {
            IngredientAction::Deactivate => {
                self.is_active = false;
                IngredientActionResult::Deactivate(())
            }
            IngredientAction::Activate => {
                self.is_active = true;
                IngredientActionResult::Activate(())
            }
        };
        self.updated_at = Utc::now();
        Ok(result)
    }
}
