//! `SQLite` implementation of [`ReservationRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use innkeep_app::ports::ReservationRepository;
use innkeep_domain::error::InnkeepError;
use innkeep_domain::id::{ReservationId, RoomId};
use innkeep_domain::period::Period;
use innkeep_domain::reservation::{Reservation, ReservationStatus};

use crate::codec;
use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Reservation`].
struct Wrapper(Reservation);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Reservation> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let guest_name: String = row.try_get("guest_name")?;
        let guests: i64 = row.try_get("guests")?;
        let check_in: String = row.try_get("check_in")?;
        let check_out: String = row.try_get("check_out")?;
        let status: String = row.try_get("status")?;
        let created_at: String = row.try_get("created_at")?;

        let period = Period::new(
            codec::decode_timestamp(&check_in)?,
            codec::decode_timestamp(&check_out)?,
        )
        .map_err(codec::decode_error)?;
        let status = status
            .parse::<ReservationStatus>()
            .map_err(codec::decode_error)?;

        Ok(Self(Reservation {
            id: codec::get_id::<ReservationId>(row, "id")?,
            room_id: codec::get_id::<RoomId>(row, "room_id")?,
            guest_name,
            guests: codec::decode_u32(guests)?,
            period,
            status,
            created_at: codec::decode_timestamp(&created_at)?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO reservations (id, room_id, guest_name, guests, check_in, check_out, status, created_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT * FROM reservations WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM reservations ORDER BY check_in, id";
const SELECT_BY_ROOM: &str = "SELECT * FROM reservations WHERE room_id = ? ORDER BY check_in, id";
const UPDATE: &str = r"
    UPDATE reservations
    SET room_id = ?, guest_name = ?, guests = ?, check_in = ?, check_out = ?, status = ?
    WHERE id = ?
";

/// `SQLite`-backed reservation repository.
pub struct SqliteReservationRepository {
    pool: SqlitePool,
}

impl SqliteReservationRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ReservationRepository for SqliteReservationRepository {
    fn create(
        &self,
        reservation: Reservation,
    ) -> impl Future<Output = Result<Reservation, InnkeepError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(codec::encode_id(reservation.id))
                .bind(codec::encode_id(reservation.room_id))
                .bind(&reservation.guest_name)
                .bind(i64::from(reservation.guests))
                .bind(codec::encode_timestamp(reservation.period.check_in()))
                .bind(codec::encode_timestamp(reservation.period.check_out()))
                .bind(reservation.status.as_str())
                .bind(codec::encode_timestamp(reservation.created_at))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(reservation)
        }
    }

    fn get_by_id(
        &self,
        id: ReservationId,
    ) -> impl Future<Output = Result<Option<Reservation>, InnkeepError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Reservation>, InnkeepError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_by_room(
        &self,
        room_id: RoomId,
    ) -> impl Future<Output = Result<Vec<Reservation>, InnkeepError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_ROOM)
                .bind(codec::encode_id(room_id))
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        reservation: Reservation,
    ) -> impl Future<Output = Result<Reservation, InnkeepError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(codec::encode_id(reservation.room_id))
                .bind(&reservation.guest_name)
                .bind(i64::from(reservation.guests))
                .bind(codec::encode_timestamp(reservation.period.check_in()))
                .bind(codec::encode_timestamp(reservation.period.check_out()))
                .bind(reservation.status.as_str())
                .bind(codec::encode_id(reservation.id))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(reservation)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;
    use crate::room_repo::SqliteRoomRepository;
    use crate::room_type_repo::SqliteRoomTypeRepository;
    use chrono::{TimeDelta, TimeZone, Utc};
    use innkeep_app::ports::{RoomRepository, RoomTypeRepository};
    use innkeep_domain::room::{Room, RoomType};
    use innkeep_domain::time::Timestamp;

    fn at(day: u32, hour: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0).unwrap()
    }

    async fn setup() -> (SqliteReservationRepository, Room) {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        let pool = db.pool().clone();
        let room_type = SqliteRoomTypeRepository::new(pool.clone())
            .create(
                RoomType::builder()
                    .name("Double")
                    .capacity(2)
                    .build()
                    .unwrap(),
            )
            .await
            .unwrap();
        let room = SqliteRoomRepository::new(pool.clone())
            .create(
                Room::builder()
                    .number("101")
                    .room_type(room_type)
                    .build()
                    .unwrap(),
            )
            .await
            .unwrap();
        (SqliteReservationRepository::new(pool), room)
    }

    fn reservation(room: &Room, from: u32, to: u32) -> Reservation {
        Reservation::builder()
            .room_id(room.id)
            .guest_name("Ada")
            .guests(2)
            .period(Period::new(at(from, 14), at(to, 11)).unwrap())
            .status(ReservationStatus::Confirmed)
            .created_at(at(1, 9))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_reservation() {
        let (repo, room) = setup().await;
        let r = reservation(&room, 10, 12);
        let id = r.id;

        repo.create(r.clone()).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched, r);
    }

    #[tokio::test]
    async fn should_return_none_when_reservation_not_found() {
        let (repo, _) = setup().await;
        assert!(repo.get_by_id(ReservationId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_find_reservations_of_room_ordered_by_check_in() {
        let (repo, room) = setup().await;
        repo.create(reservation(&room, 20, 22)).await.unwrap();
        repo.create(reservation(&room, 10, 12)).await.unwrap();

        let found = repo.find_by_room(room.id).await.unwrap();
        let check_ins: Vec<Timestamp> = found.iter().map(|r| r.period.check_in()).collect();
        assert_eq!(check_ins, vec![at(10, 14), at(20, 14)]);

        assert!(repo.find_by_room(RoomId::new()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_persist_status_change_on_update() {
        let (repo, room) = setup().await;
        let mut r = reservation(&room, 10, 12);
        repo.create(r.clone()).await.unwrap();

        r.status = ReservationStatus::Cancelled;
        repo.update(r.clone()).await.unwrap();

        let fetched = repo.get_by_id(r.id).await.unwrap().unwrap();
        assert_eq!(fetched.status, ReservationStatus::Cancelled);
        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_read_back_sub_microsecond_period_exactly() {
        let (repo, room) = setup().await;
        let base = at(10, 14);
        let r = Reservation::builder()
            .room_id(room.id)
            .guest_name("Ada")
            .period(
                Period::new(
                    base + TimeDelta::nanoseconds(100),
                    base + TimeDelta::nanoseconds(900),
                )
                .unwrap(),
            )
            .created_at(at(1, 9) + TimeDelta::nanoseconds(1))
            .build()
            .unwrap();
        repo.create(r.clone()).await.unwrap();

        assert_eq!(repo.find_by_room(room.id).await.unwrap(), vec![r.clone()]);
        assert_eq!(repo.get_all().await.unwrap(), vec![r.clone()]);
        assert_eq!(repo.get_by_id(r.id).await.unwrap(), Some(r));
    }

    #[tokio::test]
    async fn should_reject_reservation_for_unknown_room() {
        let (repo, _) = setup().await;
        let orphan = Reservation::builder()
            .room_id(RoomId::new())
            .guest_name("Ada")
            .period(Period::new(at(10, 14), at(12, 11)).unwrap())
            .build()
            .unwrap();

        let result = repo.create(orphan).await;
        assert!(matches!(result, Err(InnkeepError::Storage(_))));
    }
}
