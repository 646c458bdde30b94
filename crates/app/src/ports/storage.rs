//! Storage port — repository traits for persistence.

use std::future::Future;

use innkeep_domain::error::InnkeepError;
use innkeep_domain::id::{ReservationId, RoomId, RoomTypeId};
use innkeep_domain::reservation::Reservation;
use innkeep_domain::room::{Room, RoomType};

/// Repository for persisting and querying [`RoomType`]s.
pub trait RoomTypeRepository {
    /// Store a new room type.
    fn create(
        &self,
        room_type: RoomType,
    ) -> impl Future<Output = Result<RoomType, InnkeepError>> + Send;

    /// Get a room type by its unique identifier.
    fn get_by_id(
        &self,
        id: RoomTypeId,
    ) -> impl Future<Output = Result<Option<RoomType>, InnkeepError>> + Send;

    /// Get all room types, ordered by name.
    fn get_all(&self) -> impl Future<Output = Result<Vec<RoomType>, InnkeepError>> + Send;
}

/// Repository for persisting and querying [`Room`]s.
///
/// Rooms are returned with their [`RoomType`] resolved.
pub trait RoomRepository {
    /// Store a new room. Only the room type's id is persisted.
    fn create(&self, room: Room) -> impl Future<Output = Result<Room, InnkeepError>> + Send;

    /// Get a room by its unique identifier.
    fn get_by_id(
        &self,
        id: RoomId,
    ) -> impl Future<Output = Result<Option<Room>, InnkeepError>> + Send;

    /// Get all rooms, ordered by room number.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Room>, InnkeepError>> + Send;

    /// Delete a room by its unique identifier, failing with
    /// [`InnkeepError::NotFound`] when there is no such room.
    fn delete(&self, id: RoomId) -> impl Future<Output = Result<(), InnkeepError>> + Send;
}

/// Repository for persisting and querying [`Reservation`]s.
pub trait ReservationRepository {
    /// Store a new reservation.
    fn create(
        &self,
        reservation: Reservation,
    ) -> impl Future<Output = Result<Reservation, InnkeepError>> + Send;

    /// Get a reservation by its unique identifier.
    fn get_by_id(
        &self,
        id: ReservationId,
    ) -> impl Future<Output = Result<Option<Reservation>, InnkeepError>> + Send;

    /// Get all reservations, ordered by check-in.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Reservation>, InnkeepError>> + Send;

    /// Get every reservation of one room, cancelled ones included, ordered by check-in.
    fn find_by_room(
        &self,
        room_id: RoomId,
    ) -> impl Future<Output = Result<Vec<Reservation>, InnkeepError>> + Send;

    /// Replace a stored reservation.
    fn update(
        &self,
        reservation: Reservation,
    ) -> impl Future<Output = Result<Reservation, InnkeepError>> + Send;
}
