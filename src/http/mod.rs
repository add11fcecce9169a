//! # HTTP API
//!
//! An axum router over the actor clients. Handlers validate the request, call a
//! client, and wrap the result in the JSON envelope:
//!
//! - success: `{ "success": true, "data": ..., "message"? }`
//! - failure: `{ "success": false, "error": "...", "details"? }`
//!
//! Status codes come from [`AppError`]: 400 for schema or validation errors, 404
//! for unknown ids, 409 for duplicates, allergy conflicts and illegal transitions,
//! 500 when an actor is gone.

pub mod customers;
pub mod employees;
pub mod error;
pub mod extract;
pub mod ingredients;
pub mod menus;
pub mod orders;
pub mod pets;
pub mod response;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post, put},
    Router,
};
use tokio::signal::{
    self,
    unix::{signal, SignalKind},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::clients::{
    ActorClient, CustomerClient, EmployeeClient, IngredientClient, MenuClient, OrderClient, PetClient,
};
use crate::config::Config;
use crate::framework::ActorEntity;
use crate::lifecycle::PetMealSystem;

pub use error::AppError;

/// Client handles shared by every handler. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub customers: CustomerClient,
    pub employees: EmployeeClient,
    pub pets: PetClient,
    pub menus: MenuClient,
    pub ingredients: IngredientClient,
    pub orders: OrderClient,
}

impl AppState {
    pub fn from_system(system: &PetMealSystem) -> Self {
        Self {
            customers: system.customer_client.clone(),
            employees: system.employee_client.clone(),
            pets: system.pet_client.clone(),
            menus: system.menu_client.clone(),
            ingredients: system.ingredient_client.clone(),
            orders: system.order_client.clone(),
        }
    }
}

pub fn router(state: AppState, config: &Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(config.cors_max_age);

    Router::new()
        .route("/customers", get(customers::list).post(customers::create))
        .route(
            "/customers/{id}",
            get(customers::get).put(customers::update).delete(customers::deactivate),
        )
        .route("/customers/{id}/pets", get(pets::list_for_customer).post(pets::create))
        .route("/pets/{id}", get(pets::get).put(pets::update).delete(pets::deactivate))
        .route("/employees", get(employees::list).post(employees::create))
        .route(
            "/employees/{id}",
            get(employees::get).put(employees::update).delete(employees::deactivate),
        )
        .route("/menus", get(menus::list).post(menus::create))
        .route("/menus/{id}", get(menus::get).put(menus::update).delete(menus::deactivate))
        .route("/ingredients", get(ingredients::list).post(ingredients::create))
        .route(
            "/ingredients/{id}",
            get(ingredients::get).put(ingredients::update).delete(ingredients::delete),
        )
        .route("/orders", get(orders::list).post(orders::place))
        .route("/orders/check", post(orders::check))
        .route("/orders/summary", get(orders::summary))
        .route("/orders/{id}", get(orders::get).put(orders::update).delete(orders::cancel))
        .route("/orders/{id}/status", put(orders::change_status))
        .route("/orders/{id}/cook", put(orders::assign_cook))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}

/// Reads one record, turning a miss into a 404.
pub(crate) async fn fetch<T, C>(client: &C, id: T::Id) -> Result<T, AppError>
where
    T: ActorEntity,
    C: ActorClient<T>,
    AppError: From<C::Error>,
{
    client
        .get(id.clone())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{id} not found")))
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
