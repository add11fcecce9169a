//! # Order Client
//!
//! Provides a high-level API for interacting with the `Order` actor.
//!
//! Placement runs through the actor, where `Order::on_create` performs admission.
//! The client also holds the [`OrderContext`] so it can answer read-only questions
//! that span several actors, such as the allergy dry run, without creating anything.
use crate::allergy::ConflictResult;
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{
    CustomerId, EmployeeId, MenuId, Order, OrderCreate, OrderId, OrderStatus, OrderSummary, OrderUpdate,
    PetId,
};
use crate::order_actor::{admission, OrderAction, OrderActionResult, OrderContext, OrderError};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info, instrument};

/// Optional filters for [`OrderClient::list_orders`]. Unset fields match everything.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderFilter {
    pub customer_id: Option<CustomerId>,
    pub status: Option<OrderStatus>,
}

impl OrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        self.customer_id.map_or(true, |id| order.customer_id == id)
            && self.status.map_or(true, |status| order.status == status)
    }
}

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    ctx: OrderContext,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, ctx: OrderContext) -> Self {
        Self { inner, ctx }
    }

    /// Places an order. Fails with [`OrderError::AllergyConflict`] when the pet is
    /// allergic to the meal.
    #[instrument(skip(self, params))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(?params, "place_order called");
        info!("Sending place_order to actor");

        // Admission happens in Order::on_create
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Dry-run allergy check for a meal/pet pair.
    #[instrument(skip(self))]
    pub async fn check_allergies(&self, menu_id: MenuId, pet_id: PetId) -> Result<ConflictResult, OrderError> {
        let menu = admission::active_menu(&self.ctx, menu_id).await?;
        let pet = admission::active_pet(&self.ctx, pet_id, None).await?;
        Ok(admission::dry_run(&menu, &pet))
    }

    #[instrument(skip(self))]
    pub async fn update_instructions(&self, id: OrderId, update: OrderUpdate) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Moves the order to `status` and returns the status now on file.
    #[instrument(skip(self))]
    pub async fn change_status(&self, id: OrderId, status: OrderStatus) -> Result<OrderStatus, OrderError> {
        debug!("Changing status");
        match self
            .inner
            .perform_action(id, OrderAction::ChangeStatus(status))
            .await
            .map_err(Self::map_error)?
        {
            OrderActionResult::ChangeStatus(now) => Ok(now),
            other => Err(OrderError::ActorCommunicationError(format!(
                "unexpected result: {other:?}"
            ))),
        }
    }

    #[instrument(skip(self))]
    pub async fn cancel(&self, id: OrderId, reason: Option<String>) -> Result<(), OrderError> {
        debug!("Cancelling order");
        match self
            .inner
            .perform_action(id, OrderAction::Cancel { reason })
            .await
            .map_err(Self::map_error)?
        {
            OrderActionResult::Cancel(()) => Ok(()),
            other => Err(OrderError::ActorCommunicationError(format!(
                "unexpected result: {other:?}"
            ))),
        }
    }

    #[instrument(skip(self))]
    pub async fn assign_cook(&self, id: OrderId, employee_id: EmployeeId) -> Result<(), OrderError> {
        debug!("Assigning cook");
        match self
            .inner
            .perform_action(id, OrderAction::AssignCook(employee_id))
            .await
            .map_err(Self::map_error)?
        {
            OrderActionResult::AssignCook(()) => Ok(()),
            other => Err(OrderError::ActorCommunicationError(format!(
                "unexpected result: {other:?}"
            ))),
        }
    }

    /// Orders matching `filter`, ordered by id.
    #[instrument(skip(self))]
    pub async fn list_orders(&self, filter: OrderFilter) -> Result<Vec<Order>, OrderError> {
        let orders = self.list().await?;
        Ok(orders.into_iter().filter(|order| filter.matches(order)).collect())
    }

    #[instrument(skip(self))]
    pub async fn summary(&self) -> Result<OrderSummary, OrderError> {
        let orders = self.list().await?;
        Ok(OrderSummary::from_orders(&orders))
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{CustomerClient, EmployeeClient, MenuClient, PetClient};
    use crate::framework::mock::{create_mock_client, expect_action, MockClient};
    use crate::model::{Customer, Employee, Menu, MenuCreate, Pet, PetCreate, PetProfile, Plan};

    struct Mocks {
        customers: MockClient<Customer>,
        pets: MockClient<Pet>,
        menus: MockClient<Menu>,
        employees: MockClient<Employee>,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                customers: MockClient::new(),
                pets: MockClient::new(),
                menus: MockClient::new(),
                employees: MockClient::new(),
            }
        }

        fn context(&self) -> OrderContext {
            OrderContext {
                customers: CustomerClient::new(self.customers.client()),
                pets: PetClient::new(self.pets.client()),
                menus: MenuClient::new(self.menus.client()),
                employees: EmployeeClient::new(self.employees.client()),
            }
        }

        fn verify(&self) {
            self.customers.verify();
            self.pets.verify();
            self.menus.verify();
            self.employees.verify();
        }
    }

    fn order(id: u32, customer: u32, status: OrderStatus) -> Order {
        let mut order = Order::new(
            OrderId(id),
            OrderCreate {
                customer_id: CustomerId(customer),
                menu_id: None,
                pet_id: None,
                plan: Plan::SevenDays,
                quantity: 1,
                special_instructions: None,
            },
        );
        order.status = status;
        order
    }

    #[tokio::test]
    async fn test_cancel_forwards_reason() {
        let mocks = Mocks::new();
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client, mocks.context());

        let task = tokio::spawn(async move {
            order_client
                .cancel(OrderId(4), Some("Going on holiday".into()))
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, OrderId(4));
        match action {
            OrderAction::Cancel { reason } => assert_eq!(reason.as_deref(), Some("Going on holiday")),
            other => panic!("Expected Cancel action, got {other:?}"),
        }
        responder.send(Ok(OrderActionResult::Cancel(()))).unwrap();

        assert!(task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_allergy_conflict_survives_the_actor_boundary() {
        let mocks = Mocks::new();
        let mut orders = MockClient::<Order>::new();
        orders.expect_create().return_err(FrameworkError::EntityError(Box::new(
            OrderError::AllergyConflict {
                pet_name: "Coffee".into(),
                conflicting_terms: vec!["Salmon".into()],
            },
        )));
        let client = OrderClient::new(orders.client(), mocks.context());

        let err = client
            .place_order(OrderCreate {
                customer_id: CustomerId(1),
                menu_id: Some(MenuId(1)),
                pet_id: Some(PetId(1)),
                plan: Plan::SevenDays,
                quantity: 1,
                special_instructions: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::AllergyConflict { ref pet_name, .. } if pet_name == "Coffee"));
        orders.verify();
        mocks.verify();
    }

    #[tokio::test]
    async fn test_check_allergies_is_a_dry_run() {
        let mut mocks = Mocks::new();
        let menu = Menu::new(
            MenuId(1),
            MenuCreate {
                name: "Salmon Meal".into(),
                description: String::new(),
                image_url: None,
                ingredients: vec!["Salmon".into(), "Brown rice".into()],
                price: 0.0,
            },
        );
        let pet = Pet::new(
            PetId(2),
            PetCreate {
                customer_id: CustomerId(1),
                profile: PetProfile {
                    name: "Coffee".into(),
                    breed: None,
                    age: None,
                    weight: None,
                    gender: None,
                    allergies: vec!["salmon".into(), "dairy".into()],
                    activity_level: None,
                    body_conditions: None,
                    neutered: false,
                },
            },
        );
        mocks.menus.expect_get(MenuId(1)).return_ok(Some(menu));
        mocks.pets.expect_get(PetId(2)).return_ok(Some(pet));

        // No order request is expected: the order mock has no expectations.
        let orders = MockClient::<Order>::new();
        let client = OrderClient::new(orders.client(), mocks.context());

        let result = client.check_allergies(MenuId(1), PetId(2)).await.unwrap();
        assert!(result.has_conflict);
        assert_eq!(result.conflicting_terms, vec!["Salmon"]);
        orders.verify();
        mocks.verify();
    }

    #[tokio::test]
    async fn test_check_allergies_unknown_menu() {
        let mut mocks = Mocks::new();
        mocks.menus.expect_get(MenuId(9)).return_ok(None);
        let client = OrderClient::new(MockClient::<Order>::new().client(), mocks.context());

        let err = client.check_allergies(MenuId(9), PetId(1)).await.unwrap_err();
        assert_eq!(err, OrderError::InvalidMenu("menu_9 not found".into()));
        mocks.verify();
    }

    #[tokio::test]
    async fn test_list_orders_applies_filters_and_summary_counts() {
        let mocks = Mocks::new();
        let mut orders = MockClient::<Order>::new();
        let all = vec![
            order(1, 1, OrderStatus::Pending),
            order(2, 2, OrderStatus::Cooking),
            order(3, 1, OrderStatus::Cooking),
            order(4, 1, OrderStatus::Cancelled),
        ];
        orders.expect_list().return_ok(all.clone());
        orders.expect_list().return_ok(all.clone());
        orders.expect_list().return_ok(all);
        let client = OrderClient::new(orders.client(), mocks.context());

        let mine = client
            .list_orders(OrderFilter {
                customer_id: Some(CustomerId(1)),
                status: None,
            })
            .await
            .unwrap();
        assert_eq!(mine.iter().map(|o| o.id.0).collect::<Vec<_>>(), vec![1, 3, 4]);

        let cooking_for_me = client
            .list_orders(OrderFilter {
                customer_id: Some(CustomerId(1)),
                status: Some(OrderStatus::Cooking),
            })
            .await
            .unwrap();
        assert_eq!(cooking_for_me.len(), 1);
        assert_eq!(cooking_for_me[0].id, OrderId(3));

        let summary = client.summary().await.unwrap();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.cooking, 2);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.cancelled, 1);
        assert_eq!(summary.delivered, 0);
        orders.verify();
    }
}
