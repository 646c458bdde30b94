//! Availability service — answers "can this room / which rooms take this stay?".
//!
//! Loads a snapshot of rooms and reservations from the repositories and hands
//! it to the pure evaluator in [`innkeep_domain::availability`]. Two calls are
//! not atomic with respect to each other or to concurrent bookings.

use std::collections::HashMap;

use innkeep_domain::availability;
use innkeep_domain::error::{InnkeepError, NotFoundError};
use innkeep_domain::id::{RoomId, RoomTypeId};
use innkeep_domain::period::Period;
use innkeep_domain::reservation::Reservation;
use innkeep_domain::room::Room;

use crate::ports::{ReservationRepository, RoomRepository};

/// Application service for availability queries.
pub struct AvailabilityService<R, V> {
    rooms: R,
    reservations: V,
}

impl<R: RoomRepository, V: ReservationRepository> AvailabilityService<R, V> {
    /// Create a new service backed by the given repositories.
    pub fn new(rooms: R, reservations: V) -> Self {
        Self {
            rooms,
            reservations,
        }
    }

    /// Whether `room_id` can take `period`, cleaning buffer included.
    ///
    /// # Errors
    ///
    /// Returns [`InnkeepError::NotFound`] when the room does not exist, or a
    /// storage error from the repositories.
    #[tracing::instrument(skip(self, period), fields(period = %period))]
    pub async fn is_room_available(
        &self,
        room_id: RoomId,
        period: Period,
    ) -> Result<bool, InnkeepError> {
        let room = self.rooms.get_by_id(room_id).await?.ok_or_else(|| {
            InnkeepError::from(NotFoundError {
                entity: "Room",
                id: room_id.to_string(),
            })
        })?;
        let existing = self.reservations.find_by_room(room_id).await?;
        let available = availability::is_available_with_cleaning(&room, &period, &existing);
        tracing::debug!(available, "checked room availability");
        Ok(available)
    }

    /// Rooms that can take `period`, optionally restricted to one room type,
    /// in repository order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repositories.
    #[tracing::instrument(skip(self, period), fields(period = %period))]
    pub async fn search(
        &self,
        period: Period,
        room_type: Option<RoomTypeId>,
    ) -> Result<Vec<Room>, InnkeepError> {
        let rooms = self.rooms.get_all().await?;
        let reservations = self.reservations.get_all().await?;

        let mut by_room: HashMap<RoomId, Vec<Reservation>> = HashMap::new();
        for reservation in reservations {
            by_room
                .entry(reservation.room_id)
                .or_default()
                .push(reservation);
        }

        let found = availability::find_available_rooms(&period, &rooms, &by_room, room_type);
        tracing::info!(
            candidates = rooms.len(),
            available = found.len(),
            "availability search"
        );
        Ok(found)
    }
}
