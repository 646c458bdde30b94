//! Room service — use-cases for managing the room catalogue.

use innkeep_domain::error::{InnkeepError, NotFoundError};
use innkeep_domain::id::{RoomId, RoomTypeId};
use innkeep_domain::room::{Room, RoomType};

use crate::ports::{RoomRepository, RoomTypeRepository};

/// Application service for room types and rooms.
pub struct RoomService<T, R> {
    room_types: T,
    rooms: R,
}

impl<T: RoomTypeRepository, R: RoomRepository> RoomService<T, R> {
    /// Create a new service backed by the given repositories.
    pub fn new(room_types: T, rooms: R) -> Self {
        Self { room_types, rooms }
    }

    /// Create a new room type after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`InnkeepError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, room_type), fields(room_type = %room_type.name))]
    pub async fn create_room_type(&self, room_type: RoomType) -> Result<RoomType, InnkeepError> {
        room_type.validate()?;
        self.room_types.create(room_type).await
    }

    /// Look up a room type by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`InnkeepError::NotFound`] when no room type with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_room_type(&self, id: RoomTypeId) -> Result<RoomType, InnkeepError> {
        self.room_types.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "RoomType",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all room types.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_room_types(&self) -> Result<Vec<RoomType>, InnkeepError> {
        self.room_types.get_all().await
    }

    /// Create a room of an existing type.
    ///
    /// The room type is resolved from storage, so a stale copy embedded in
    /// `room` is replaced by the stored one.
    ///
    /// # Errors
    ///
    /// Returns [`InnkeepError::Validation`] if invariants fail,
    /// [`InnkeepError::NotFound`] if the room type is unknown, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self, room), fields(room_number = %room.number))]
    pub async fn create_room(&self, room: Room) -> Result<Room, InnkeepError> {
        let room_type = self.get_room_type(room.room_type.id).await?;
        let room = Room { room_type, ..room };
        room.validate()?;
        self.rooms.create(room).await
    }

    /// Look up a room by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`InnkeepError::NotFound`] when no room with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_room(&self, id: RoomId) -> Result<Room, InnkeepError> {
        self.rooms.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Room",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all rooms.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_rooms(&self) -> Result<Vec<Room>, InnkeepError> {
        self.rooms.get_all().await
    }

    /// Delete a room by id, together with its reservations.
    ///
    /// # Errors
    ///
    /// Returns [`InnkeepError::NotFound`] when no room with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_room(&self, id: RoomId) -> Result<(), InnkeepError> {
        self.rooms.delete(id).await
    }
}
