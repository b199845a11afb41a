//! Inventory domain module.
//!
//! This crate contains the medicine record model and the in-memory store,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod medicine;
pub mod store;

pub use medicine::{Medicine, MedicineDraft};
pub use store::MedicineStore;
