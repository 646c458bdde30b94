//! Reservation service — booking and cancellation use-cases.

use innkeep_domain::availability;
use innkeep_domain::error::{ConflictError, InnkeepError, NotFoundError, ValidationError};
use innkeep_domain::id::{ReservationId, RoomId};
use innkeep_domain::period::Period;
use innkeep_domain::reservation::{Reservation, ReservationStatus};
use innkeep_domain::time::Timestamp;

use crate::ports::{ReservationRepository, RoomRepository};

/// What a guest asks for when booking.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub room_id: RoomId,
    pub guest_name: String,
    pub guests: u32,
    pub period: Period,
}

/// Application service for reservations.
pub struct ReservationService<R, V> {
    rooms: R,
    reservations: V,
}

impl<R: RoomRepository, V: ReservationRepository> ReservationService<R, V> {
    /// Create a new service backed by the given repositories.
    pub fn new(rooms: R, reservations: V) -> Self {
        Self {
            rooms,
            reservations,
        }
    }

    /// Book a room, producing a confirmed reservation.
    ///
    /// The availability check and the insert are two separate repository
    /// calls; concurrent bookings of the same room are not serialised here.
    ///
    /// # Errors
    ///
    /// - [`InnkeepError::Validation`] when the stay does not start after
    ///   `now`, the party exceeds the room capacity, or the request is
    ///   otherwise invalid
    /// - [`InnkeepError::NotFound`] when the room does not exist
    /// - [`InnkeepError::Conflict`] when the room is taken for the period
    ///   (cleaning buffer included)
    /// - a storage error from the repositories
    #[tracing::instrument(skip(self, request), fields(room_id = %request.room_id, period = %request.period))]
    pub async fn book(
        &self,
        request: BookingRequest,
        now: Timestamp,
    ) -> Result<Reservation, InnkeepError> {
        let reservation = Reservation::builder()
            .room_id(request.room_id)
            .guest_name(request.guest_name)
            .guests(request.guests)
            .period(request.period)
            .status(ReservationStatus::Confirmed)
            .created_at(now)
            .build()?;

        if !reservation.period.is_future(now) {
            return Err(ValidationError::PeriodInPast.into());
        }

        let room = self
            .rooms
            .get_by_id(reservation.room_id)
            .await?
            .ok_or_else(|| {
                InnkeepError::from(NotFoundError {
                    entity: "Room",
                    id: reservation.room_id.to_string(),
                })
            })?;

        if reservation.guests > room.room_type.capacity {
            return Err(ValidationError::CapacityExceeded {
                guests: reservation.guests,
                capacity: room.room_type.capacity,
            }
            .into());
        }

        let existing = self.reservations.find_by_room(room.id).await?;
        if !availability::is_available_with_cleaning(&room, &reservation.period, &existing) {
            tracing::warn!(room_number = %room.number, "room not available");
            return Err(ConflictError {
                room_id: room.id.to_string(),
            }
            .into());
        }

        let created = self.reservations.create(reservation).await?;
        tracing::info!(
            reservation_id = %created.id,
            nights = created.period.duration_nights(),
            "reservation confirmed"
        );
        Ok(created)
    }

    /// Cancel a reservation whose stay has not started at `now`.
    ///
    /// # Errors
    ///
    /// - [`InnkeepError::NotFound`] when the reservation does not exist
    /// - [`InnkeepError::InvalidTransition`] when it is already cancelled,
    ///   checked in, or checked out
    /// - [`InnkeepError::Validation`] when the stay already began
    /// - a storage error from the repository
    #[tracing::instrument(skip(self))]
    pub async fn cancel(
        &self,
        id: ReservationId,
        now: Timestamp,
    ) -> Result<Reservation, InnkeepError> {
        let mut reservation = self.get_reservation(id).await?;
        reservation.cancel(now)?;
        let updated = self.reservations.update(reservation).await?;
        tracing::info!("reservation cancelled");
        Ok(updated)
    }

    /// Look up a reservation by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`InnkeepError::NotFound`] when no reservation with `id`
    /// exists, or a storage error from the repository.
    pub async fn get_reservation(&self, id: ReservationId) -> Result<Reservation, InnkeepError> {
        self.reservations.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Reservation",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all reservations.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_reservations(&self) -> Result<Vec<Reservation>, InnkeepError> {
        self.reservations.get_all().await
    }

    /// List the reservations of one room, cancelled ones included.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_for_room(&self, room_id: RoomId) -> Result<Vec<Reservation>, InnkeepError> {
        self.reservations.find_by_room(room_id).await
    }
}
