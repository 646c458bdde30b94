//! `SQLite` implementation of [`RoomTypeRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, SqlitePool};

use innkeep_app::ports::RoomTypeRepository;
use innkeep_domain::error::InnkeepError;
use innkeep_domain::id::RoomTypeId;
use innkeep_domain::room::RoomType;

use crate::codec;
use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`RoomType`].
struct Wrapper(RoomType);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<RoomType> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        codec::room_type_from_row(row, "id").map(Self)
    }
}

const INSERT: &str = "INSERT INTO room_types (id, name, capacity, amenities, cleaning_hours) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT id, name AS type_name, capacity, amenities, cleaning_hours FROM room_types WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name AS type_name, capacity, amenities, cleaning_hours FROM room_types ORDER BY name";

/// `SQLite`-backed room type repository.
pub struct SqliteRoomTypeRepository {
    pool: SqlitePool,
}

impl SqliteRoomTypeRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RoomTypeRepository for SqliteRoomTypeRepository {
    fn create(
        &self,
        room_type: RoomType,
    ) -> impl Future<Output = Result<RoomType, InnkeepError>> + Send {
        let pool = self.pool.clone();
        async move {
            let amenities = serde_json::to_string(&room_type.amenities).map_err(StorageError::from)?;

            sqlx::query(INSERT)
                .bind(codec::encode_id(room_type.id))
                .bind(&room_type.name)
                .bind(i64::from(room_type.capacity))
                .bind(amenities)
                .bind(i64::from(room_type.cleaning_hours))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(room_type)
        }
    }

    fn get_by_id(
        &self,
        id: RoomTypeId,
    ) -> impl Future<Output = Result<Option<RoomType>, InnkeepError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<RoomType>, InnkeepError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
