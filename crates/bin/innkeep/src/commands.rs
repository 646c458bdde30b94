//! Executes parsed commands against the application services.

use serde_json::{Value, json};

use innkeep_adapter_storage_sqlite_sqlx::{
    Database, SqliteReservationRepository, SqliteRoomRepository, SqliteRoomTypeRepository,
};
use innkeep_app::services::availability_service::AvailabilityService;
use innkeep_app::services::reservation_service::{BookingRequest, ReservationService};
use innkeep_app::services::room_service::RoomService;
use innkeep_domain::error::InnkeepError;
use innkeep_domain::period::Period;
use innkeep_domain::room::{Room, RoomType};
use innkeep_domain::time::Timestamp;

use crate::cli::{Command, RoomCommand, RoomTypeCommand};

/// Errors surfaced by a command run.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Domain(#[from] InnkeepError),

    #[error("failed to render output")]
    Json(#[from] serde_json::Error),
}

/// Services wired to one `SQLite` database.
pub struct App {
    rooms: RoomService<SqliteRoomTypeRepository, SqliteRoomRepository>,
    availability: AvailabilityService<SqliteRoomRepository, SqliteReservationRepository>,
    reservations: ReservationService<SqliteRoomRepository, SqliteReservationRepository>,
}

impl App {
    #[must_use]
    pub fn new(db: &Database) -> Self {
        let pool = db.pool();
        Self {
            rooms: RoomService::new(
                SqliteRoomTypeRepository::new(pool.clone()),
                SqliteRoomRepository::new(pool.clone()),
            ),
            availability: AvailabilityService::new(
                SqliteRoomRepository::new(pool.clone()),
                SqliteReservationRepository::new(pool.clone()),
            ),
            reservations: ReservationService::new(
                SqliteRoomRepository::new(pool.clone()),
                SqliteReservationRepository::new(pool.clone()),
            ),
        }
    }

    /// Run `command` as of `now` and return its JSON output.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] when the use-case fails or its result cannot
    /// be serialized.
    pub async fn run(&self, command: Command, now: Timestamp) -> Result<Value, CommandError> {
        let output = match command {
            Command::RoomType { action } => self.run_room_type(action).await?,
            Command::Room { action } => self.run_room(action).await?,
            Command::Search {
                check_in,
                check_out,
                room_type,
            } => {
                let period = Period::new(check_in, check_out).map_err(InnkeepError::from)?;
                serde_json::to_value(self.availability.search(period, room_type).await?)?
            }
            Command::Book {
                room,
                guest,
                guests,
                check_in,
                check_out,
            } => {
                let period = Period::new(check_in, check_out).map_err(InnkeepError::from)?;
                let request = BookingRequest {
                    room_id: room,
                    guest_name: guest,
                    guests,
                    period,
                };
                serde_json::to_value(self.reservations.book(request, now).await?)?
            }
            Command::Cancel { id } => serde_json::to_value(self.reservations.cancel(id, now).await?)?,
            Command::Reservations { room: Some(room_id) } => {
                serde_json::to_value(self.reservations.list_for_room(room_id).await?)?
            }
            Command::Reservations { room: None } => {
                serde_json::to_value(self.reservations.list_reservations().await?)?
            }
        };
        Ok(output)
    }

    async fn run_room_type(&self, action: RoomTypeCommand) -> Result<Value, CommandError> {
        match action {
            RoomTypeCommand::Add {
                name,
                capacity,
                cleaning_hours,
                amenities,
            } => {
                let room_type = amenities
                    .into_iter()
                    .fold(RoomType::builder(), |builder, amenity| {
                        builder.amenity(amenity)
                    })
                    .name(name)
                    .capacity(capacity)
                    .cleaning_hours(cleaning_hours)
                    .build()?;
                Ok(serde_json::to_value(
                    self.rooms.create_room_type(room_type).await?,
                )?)
            }
            RoomTypeCommand::List => Ok(serde_json::to_value(
                self.rooms.list_room_types().await?,
            )?),
        }
    }

    async fn run_room(&self, action: RoomCommand) -> Result<Value, CommandError> {
        match action {
            RoomCommand::Add { number, room_type } => {
                let room_type = self.rooms.get_room_type(room_type).await?;
                let room = Room::builder()
                    .number(number)
                    .room_type(room_type)
                    .build()?;
                Ok(serde_json::to_value(self.rooms.create_room(room).await?)?)
            }
            RoomCommand::List => Ok(serde_json::to_value(self.rooms.list_rooms().await?)?),
            RoomCommand::Remove { id } => {
                self.rooms.delete_room(id).await?;
                Ok(json!({ "deleted": id }))
            }
        }
    }
}
