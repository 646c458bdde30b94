//! # innkeep-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `innkeep-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `innkeep-app` (for port traits) and `innkeep-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod codec;
pub mod error;
pub mod pool;
pub mod reservation_repo;
pub mod room_repo;
pub mod room_type_repo;

pub use pool::{Config, Database};
pub use reservation_repo::SqliteReservationRepository;
pub use room_repo::SqliteRoomRepository;
pub use room_type_repo::SqliteRoomTypeRepository;
