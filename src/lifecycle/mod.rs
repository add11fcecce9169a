//! # System Lifecycle & Orchestration
//!
//! Starts, wires and stops the resource actors.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without dependencies and receive them at `run(context)`:
//!
//! | Actor | Context |
//! |-------|---------|
//! | customer, employee, menu, ingredient | `()` |
//! | pet | `CustomerClient` |
//! | order | `OrderContext { customers, pets, menus, employees }` |
//!
//! The graph is acyclic (order → pet → customer), so shutdown is just: drop every
//! client, then await every actor task. Each actor exits once the last sender of
//! its channel is gone.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the `tracing` subscriber. See [`lifecycle::tracing`](self::tracing) for the log
//! format and the `RUST_LOG` filter.

pub mod system;
pub mod tracing;

pub use self::system::*;
pub use self::tracing::*;
