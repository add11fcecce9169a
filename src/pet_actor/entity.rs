//! [`ActorEntity`] implementation for [`Pet`].
//!
//! The pet actor depends on the customer actor: a pet can only be created for a
//! customer that exists and is active. The [`CustomerClient`] arrives as the actor's
//! context when it is started.

use super::actions::{PetAction, PetActionResult};
use super::error::PetError;
use crate::clients::{ActorClient, CustomerClient};
use crate::framework::ActorEntity;
use crate::model::{Pet, PetCreate, PetId, PetUpdate, Validate};
use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

#[async_trait]
impl ActorEntity for Pet {
    type Id = PetId;
    type Create = PetCreate;
    type Update = PetUpdate;
    type Action = PetAction;
    type ActionResult = PetActionResult;
    type Context = CustomerClient;
    type Error = PetError;

    fn from_create_params(id: PetId, params: PetCreate) -> Result<Self, Self::Error> {
        params.validate()?;
        Ok(Self::new(id, params))
    }

    async fn on_create(&mut self, customers: &CustomerClient) -> Result<(), Self::Error> {
        debug!(pet_id = %self.id, customer_id = %self.customer_id, "Checking owner");
        let owner = customers
            .get(self.customer_id)
            .await
            .map_err(|e| PetError::ActorCommunicationError(e.to_string()))?;
        match owner {
            Some(customer) if customer.is_active => Ok(()),
            Some(_) => Err(PetError::InvalidOwner(format!("{} is inactive", self.customer_id))),
            None => Err(PetError::InvalidOwner(format!("{} not found", self.customer_id))),
        }
    }

    async fn on_update(&mut self, update: PetUpdate, _ctx: &CustomerClient) -> Result<(), Self::Error> {
        update.validate()?;
        self.apply(update);
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: PetAction,
        _ctx: &CustomerClient,
    ) -> Result<PetActionResult, Self::Error> {
        match action {
            PetAction::Deactivate => {
                self.is_active = false;
                self.updated_at = Utc::now();
                Ok(PetActionResult::Deactivate(()))
            }
        }
    }
}
