//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! The compact format hides the crate/module prefix (`with_target(false)`); the actor
//! loop tags every line with `entity_type` instead.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup and shutdown, with the final store size
//! - **Entity Operations**: Create, Get, List, Update, Delete and Actions
//! - **Admission**: each order's admission and every status change
//! - **HTTP**: one span per request from `tower-http`'s `TraceLayer`
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run                            # full payloads
//! RUST_LOG=pet_meal=debug,tower_http=info cargo run   # per-crate levels
//! ```
//!
//! ## Workflow Trace Example
//!
//! Placing an order for a pet that is allergic to the meal, with `RUST_LOG=info`:
//!
//! ```text
//! INFO place_order: Sending place_order to actor
//! WARN on_create failed entity_type="Order" error=Cannot place order: Coffee is allergic to ingredients in this meal (Salmon). Please select a different menu item.
//! ```
//!
//! With `RUST_LOG=debug` the same request also shows the lookups made during admission:
//!
//! ```text
//! DEBUG Create entity_type="Order" params=OrderCreate { customer_id: CustomerId(1), menu_id: Some(MenuId(1)), pet_id: Some(PetId(1)), .. }
//! DEBUG Admitting order order_id=order_1 customer_id=customer_1
//! DEBUG Get entity_type="Customer" id=customer_1 found=true
//! DEBUG Get entity_type="Menu" id=menu_1 found=true
//! DEBUG Get entity_type="Pet" id=pet_1 found=true
//! ```

/// Installs the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type replaces module paths
        .compact()
        .init();
}
