//! # HMS Core
//!
//! In-memory relational store for the hospital administration service.
//!
//! This crate contains pure data operations:
//! - Entity types, insert payloads and patch payloads (`entities`)
//! - The `HospitalStore` with per-collection CRUD and denormalized join views (`store`)
//! - Startup seed data (`seed`)
//!
//! **No API concerns**: HTTP routing, request validation mapping and status codes
//! belong in `api-rest`.

pub mod entities;
mod seed;
pub mod store;

pub use entities::*;
pub use store::HospitalStore;

pub use entities::EntityId;

/// Errors surfaced by the store itself.
///
/// Plain not-found cases are expressed as `Option`/`bool` return values; this
/// enum covers the one genuinely exceptional condition: a join view hitting a
/// reference whose target row has been deleted.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A denormalized read found a reference to a row that no longer exists.
    ///
    /// Deletes are unrestricted, so a doctor can outlive its department; the
    /// broken state only becomes visible when a join view tries to resolve it.
    #[error("referenced {entity} {id} no longer exists")]
    MissingReference { entity: &'static str, id: EntityId },
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
