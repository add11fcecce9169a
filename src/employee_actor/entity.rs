//! [`ActorEntity`] implementation for [`Employee`].

use super::actions::{EmployeeAction, EmployeeActionResult};
use super::error::EmployeeError;
use crate::framework::ActorEntity;
use crate::model::validation::{self, Validate};
use crate::model::{Employee, EmployeeCreate, EmployeeId, EmployeeUpdate};
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for Employee {
    type Id = EmployeeId;
    type Create = EmployeeCreate;
    type Update = EmployeeUpdate;
    type Action = EmployeeAction;
    type ActionResult = EmployeeActionResult;
    type Context = ();
    type Error = EmployeeError;

    fn from_create_params(id: EmployeeId, params: EmployeeCreate) -> Result<Self, Self::Error> {
        params.validate()?;
        Ok(Self::new(id, params))
    }

    fn unique_keys(&self) -> Vec<String> {
        vec![validation::unique_key(&self.email), self.mobile_no.clone()]
    }

    async fn on_update(&mut self, update: EmployeeUpdate, _ctx: &()) -> Result<(), Self::Error> {
        update.validate()?;
        self.apply(update);
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: EmployeeAction,
        _ctx: &(),
    ) -> Result<EmployeeActionResult, Self::Error> {
        let result = match action {
            EmployeeAction::Deactivate => {
                self.is_active = false;
                EmployeeActionResult::Deactivate(())
            }
            EmployeeAction::Activate => {
                self.is_active = true;
                EmployeeActionResult::Activate(())
            }
        };
        self.updated_at = Utc::now();
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EmployeeRole;

    #[tokio::test]
    async fn test_only_active_cooks_can_cook() {
        let mut cook = Employee::from_create_params(
            EmployeeId(1),
            EmployeeCreate {
                name: "Niran".into(),
                mobile_no: "0899999999".into(),
                email: "niran@kitchen.test".into(),
                role: EmployeeRole::Cook,
            },
        )
        .unwrap();
        assert!(cook.can_cook());

        cook.handle_action(EmployeeAction::Deactivate, &()).await.unwrap();
        assert!(!cook.can_cook());

        cook.handle_action(EmployeeAction::Activate, &()).await.unwrap();
        cook.on_update(
            EmployeeUpdate {
                role: Some(EmployeeRole::Admin),
                ..Default::default()
            },
            &(),
        )
        .await
        .unwrap();
        assert!(!cook.can_cook());
    }
}
