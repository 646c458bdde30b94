//! Identifiers for room types, rooms, and reservations.
//!
//! Ids are random v4 UUIDs. They always print in lowercase hyphenated form,
//! which is also how storage keys them, so an id typed in any accepted
//! spelling looks up the same row.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An id string that is not a UUID.
#[derive(Debug, thiserror::Error)]
#[error("invalid {kind} id `{input}`")]
pub struct ParseIdError {
    /// Which kind of id was expected, e.g. `"room"`.
    pub kind: &'static str,
    /// The rejected input, trimmed.
    pub input: String,
    #[source]
    source: uuid::Error,
}

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident, $kind:literal) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Human name of this kind of id, used in error messages.
            pub const KIND: &'static str = $kind;

            /// Generate a new random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0.hyphenated())
            }
        }

        /// Accepts any UUID spelling (braced, simple, upper case) with
        /// surrounding whitespace, as pasted from a terminal.
        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let input = s.trim();
                Uuid::parse_str(input).map(Self).map_err(|source| ParseIdError {
                    kind: $kind,
                    input: input.to_string(),
                    source,
                })
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`RoomType`](crate::room::RoomType).
    RoomTypeId,
    "room type"
);

define_id!(
    /// Unique identifier for a [`Room`](crate::room::Room).
    RoomId,
    "room"
);

define_id!(
    /// Unique identifier for a [`Reservation`](crate::reservation::Reservation).
    ReservationId,
    "reservation"
);
