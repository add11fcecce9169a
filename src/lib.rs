#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Pet Meal
//!
//! > **A back end for pet-meal subscriptions that refuses to feed a pet what it is allergic to.**
//!
//! Customers register, add their pets (with allergies), browse a meal catalog and
//! subscribe to a 7, 14 or 30 day plan. Kitchen staff move orders through their
//! states. Every order passes an **allergy check** before it is stored.
//!
//! ## 🏗️ Design
//!
//! Each resource (customer, employee, pet, menu, ingredient, order) lives in its own
//! actor: a Tokio task that owns an in-memory store and handles one request at a
//! time. The message loop is written once, generically, in [`framework`]; each actor
//! only supplies the entity hooks.
//!
//! - **No locks**: an actor's state is touched by its own task only.
//! - **Typed errors**: each actor has its own `thiserror` enum. Errors raised inside
//!   an entity hook travel boxed through the actor and are downcast back by the
//!   client, so `OrderError::AllergyConflict` arrives intact.
//! - **Late binding**: dependencies are handed to `run(context)`, not to the
//!   constructor. The order actor gets clients for customers, pets, menus and
//!   employees.
//!
//! ## 🥗 Order Admission
//!
//! `Order::on_create` (see [`order_actor`]) checks, in order:
//!
//! 1. the customer exists and is active
//! 2. the menu exists and is active
//! 3. the pet exists, is active and belongs to the customer
//! 4. no meal ingredient conflicts with the pet's allergies ([`allergy::check_conflict`])
//! 5. the quantity is between 1 and [`MAX_QUANTITY`](model::MAX_QUANTITY)
//!
//! Admitted orders keep a snapshot of the meal and the pet, so later catalog edits
//! never rewrite history.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Key items**: [`ActorEntity`](framework::ActorEntity), [`ResourceActor`](framework::ResourceActor),
//!   [`MockClient`](framework::mock::MockClient).
//!
//! ### 2. The Checker ([`allergy`])
//! A pure function. No I/O, never fails.
//!
//! ### 3. The Data ([`model`])
//! Records, request payloads and the [`Validate`](model::Validate) trait.
//!
//! ### 4. The Actors ([`customer_actor`], [`employee_actor`], [`pet_actor`], [`menu_actor`], [`ingredient_actor`], [`order_actor`])
//! Concrete `ActorEntity` implementations, one directory each.
//!
//! ### 5. The Interface ([`clients`])
//! Domain-specific clients over the generic `ResourceClient`.
//!
//! ### 6. The Orchestrator ([`lifecycle`])
//! - **Key items**: [`PetMealSystem`](lifecycle::PetMealSystem), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ### 7. The Edge ([`http`], [`config`])
//! The axum router, the JSON envelope and environment configuration.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! PETMEAL_PORT=8080 cargo run
//! ```
//!
//! ```bash
//! cargo test
//! ```

pub mod allergy;
pub mod clients;
pub mod config;
pub mod customer_actor;
pub mod employee_actor;
pub mod framework;
pub mod http;
pub mod ingredient_actor;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
pub mod pet_actor;
