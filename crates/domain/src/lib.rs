//! # innkeep-domain
//!
//! Pure domain model for the innkeep hotel reservation system.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Periods** (check-in/check-out intervals with overlap arithmetic)
//! - Define **Room types** and **Rooms** (capacity, amenities, cleaning time)
//! - Define **Reservations** (a room booked for a period, with a lifecycle)
//! - Provide the **availability evaluator**, the pure predicates deciding
//!   whether a room can take a new stay
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod availability;
pub mod period;
pub mod reservation;
pub mod room;
