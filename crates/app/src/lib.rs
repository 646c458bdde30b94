//! # innkeep-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `RoomTypeRepository` — create and query room types
//!   - `RoomRepository` — CRUD for rooms
//!   - `ReservationRepository` — create, query, and update reservations
//! - Define **driving/inbound ports** as use-case structs:
//!   - `RoomService` — manage the room catalogue
//!   - `AvailabilityService` — check a room, search free rooms
//!   - `ReservationService` — book, cancel, look up reservations
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `innkeep-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod in_memory;
