//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`InnkeepError`]
//! via `#[from]`.

use crate::reservation::ReservationStatus;
use crate::time::Timestamp;

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum InnkeepError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Conflict(#[from] ConflictError),

    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransitionError),

    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A period whose check-out does not come strictly after its check-in.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("check-out {check_out} must be after check-in {check_in}")]
pub struct InvalidPeriodError {
    pub check_in: Timestamp,
    pub check_out: Timestamp,
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("room number must not be empty")]
    EmptyRoomNumber,

    #[error("room must have a room type")]
    MissingRoomType,

    #[error("reservation must reference a room")]
    MissingRoom,

    #[error("reservation must have a period")]
    MissingPeriod,

    #[error("unknown reservation status `{0}`")]
    UnknownStatus(String),

    #[error("capacity must be at least one")]
    ZeroCapacity,

    #[error("a reservation needs at least one guest")]
    ZeroGuests,

    #[error("{guests} guests exceed room capacity of {capacity}")]
    CapacityExceeded { guests: u32, capacity: u32 },

    #[error("period must start in the future")]
    PeriodInPast,

    #[error(transparent)]
    InvalidPeriod(#[from] InvalidPeriodError),
}

/// A lookup by identifier that found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// The requested room is already taken for the requested period.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("room {room_id} is not available for the requested period")]
pub struct ConflictError {
    pub room_id: String,
}

/// A reservation lifecycle change that is not allowed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot move reservation from {from} to {to}")]
pub struct InvalidTransitionError {
    pub from: ReservationStatus,
    pub to: ReservationStatus,
}

impl From<InvalidPeriodError> for InnkeepError {
    fn from(err: InvalidPeriodError) -> Self {
        Self::Validation(err.into())
    }
}
