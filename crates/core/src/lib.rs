// Returns Workflow Core
//
// This crate provides the HTTP-agnostic part of the returns demo:
// - Domain entities (ReturnRecord, ActionKind, ReturnDetail)
// - The approval workflow: which actions are available and what they change
// - Deterministic synthetic seeding keyed on a stable string hash
// - ReturnStore, the single owned in-memory record set
//
// Key design decisions:
// - Availability is a flag decision table, kept as a pure function
// - Hashing uses FNV-1a so seeded data and refund outcomes are reproducible
// - The store serializes mutations behind one lock; reads are snapshots

// Telemetry (structured logging setup)
pub mod telemetry;

// Domain entity types
pub mod action;
pub mod record;

pub mod error;
pub mod hash;
pub mod seed;
pub mod store;
pub mod workflow;

// Re-exports for convenience
pub use action::{ActionKind, ActionView};
pub use error::{Result, ReturnsError};
pub use record::{ReturnDetail, ReturnRecord};
pub use seed::{generate_returns, DEFAULT_MARKETPLACES};
pub use store::ReturnStore;
pub use workflow::available_actions;
