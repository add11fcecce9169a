//! [`ActorEntity`] implementation for [`Customer`].

use super::actions::{CustomerAction, CustomerActionResult};
use super::error::CustomerError;
use crate::framework::ActorEntity;
use crate::model::validation::{self, Validate};
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Action = CustomerAction;
    type ActionResult = CustomerActionResult;
    type Context = ();
    type Error = CustomerError;

    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, Self::Error> {
        params.validate()?;
        Ok(Self::new(id, params))
    }

    /// Email addresses (ignoring case) and mobile numbers are unique.
    fn unique_keys(&self) -> Vec<String> {
        vec![validation::unique_key(&self.email), self.mobile_no.clone()]
    }

    async fn on_update(&mut self, update: CustomerUpdate, _ctx: &()) -> Result<(), Self::Error> {
        update.validate()?;
        self.apply(update);
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CustomerAction,
        _ctx: &(),
    ) -> Result<CustomerActionResult, Self::Error> {
        match action {
            CustomerAction::Deactivate => {
                self.is_active = false;
                self.updated_at = Utc::now();
                Ok(CustomerActionResult::Deactivate(()))
            }
            CustomerAction::Activate => {
                self.is_active = true;
                self.updated_at = Utc::now();
                Ok(CustomerActionResult::Activate(()))
            }
        }
    }
}
