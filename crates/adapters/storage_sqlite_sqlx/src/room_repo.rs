//! `SQLite` implementation of [`RoomRepository`].
//!
//! Rooms store only their room type's id; reads join `room_types` back in.

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use innkeep_app::ports::RoomRepository;
use innkeep_domain::error::{InnkeepError, NotFoundError};
use innkeep_domain::id::RoomId;
use innkeep_domain::room::Room;

use crate::codec;
use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Room`].
struct Wrapper(Room);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Room> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let number: String = row.try_get("number")?;

        Ok(Self(Room {
            id: codec::get_id::<RoomId>(row, "id")?,
            number,
            room_type: codec::room_type_from_row(row, "room_type_id")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO rooms (id, number, room_type_id) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = r"
    SELECT r.id, r.number, t.id AS room_type_id, t.name AS type_name,
           t.capacity, t.amenities, t.cleaning_hours
    FROM rooms r
    JOIN room_types t ON t.id = r.room_type_id
    WHERE r.id = ?
";
const SELECT_ALL: &str = r"
    SELECT r.id, r.number, t.id AS room_type_id, t.name AS type_name,
           t.capacity, t.amenities, t.cleaning_hours
    FROM rooms r
    JOIN room_types t ON t.id = r.room_type_id
    ORDER BY r.number
";
const DELETE_BY_ID: &str = "DELETE FROM rooms WHERE id = ?";

/// `SQLite`-backed room repository.
pub struct SqliteRoomRepository {
    pool: SqlitePool,
}

impl SqliteRoomRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RoomRepository for SqliteRoomRepository {
    fn create(&self, room: Room) -> impl Future<Output = Result<Room, InnkeepError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(codec::encode_id(room.id))
                .bind(&room.number)
                .bind(codec::encode_id(room.room_type.id))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(room)
        }
    }

    fn get_by_id(
        &self,
        id: RoomId,
    ) -> impl Future<Output = Result<Option<Room>, InnkeepError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(codec::encode_id(id))
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Room>, InnkeepError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn delete(&self, id: RoomId) -> impl Future<Output = Result<(), InnkeepError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(codec::encode_id(id))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(NotFoundError {
                    entity: "Room",
                    id: id.to_string(),
                }
                .into());
            }
            Ok(())
        }
    }
}
