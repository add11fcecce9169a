use crate::clients::{CustomerClient, EmployeeClient, IngredientClient, MenuClient, OrderClient, PetClient};
use crate::config::Config;
use crate::order_actor::OrderContext;
use tracing::{error, info};

/// The runtime orchestrator for the pet-meal actors.
///
/// `PetMealSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all actors in the system
/// - **Dependency Wiring**: Connecting actors that depend on each other (e.g., the
///   order actor reads customers, pets, menus and employees)
///
/// # Example
///
/// ```ignore
/// let system = PetMealSystem::new(&Config::default());
///
/// let customer_id = system.customer_client.create_customer(params).await?;
/// let order_id = system.order_client.place_order(order).await?;
///
/// system.shutdown().await?;
/// ```
pub struct PetMealSystem {
    pub customer_client: CustomerClient,
    pub employee_client: EmployeeClient,
    pub pet_client: PetClient,
    pub menu_client: MenuClient,
    pub ingredient_client: IngredientClient,
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl PetMealSystem {
    /// Spawns every actor with its context injected. Must be called inside a Tokio runtime.
    pub fn new(config: &Config) -> Self {
        let capacity = config.channel_capacity;

        // 1. Create actors (no dependencies yet)
        let (customer_actor, customer_client) = crate::customer_actor::new(capacity);
        let (employee_actor, employee_client) = crate::employee_actor::new(capacity);
        let (pet_actor, pet_client) = crate::pet_actor::new(capacity);
        let (menu_actor, menu_client) = crate::menu_actor::new(capacity);
        let (ingredient_actor, ingredient_client) = crate::ingredient_actor::new(capacity);

        let order_ctx = OrderContext {
            customers: customer_client.clone(),
            pets: pet_client.clone(),
            menus: menu_client.clone(),
            employees: employee_client.clone(),
        };
        let (order_actor, order_client) = crate::order_actor::new(capacity, order_ctx.clone());

        // 2. Start actors with injected context
        let handles = vec![
            tokio::spawn(customer_actor.run(())),
            tokio::spawn(employee_actor.run(())),
            tokio::spawn(pet_actor.run(customer_client.clone())),
            tokio::spawn(menu_actor.run(())),
            tokio::spawn(ingredient_actor.run(())),
            tokio::spawn(order_actor.run(order_ctx)),
        ];
        info!(actors = handles.len(), capacity, "System started");

        Self {
            customer_client,
            employee_client,
            pet_client,
            menu_client,
            ingredient_client,
            order_client,
            handles,
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Drops all clients, which closes their channels, then waits for every actor
    /// task. Clones handed out earlier (e.g. to the HTTP router) must be dropped
    /// first, or the matching actors keep running.
    ///
    /// Returns an error if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.pet_client);
        drop(self.customer_client);
        drop(self.employee_client);
        drop(self.menu_client);
        drop(self.ingredient_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
