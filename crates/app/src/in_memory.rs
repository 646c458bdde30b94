//! In-memory repository implementations shared by the service tests.
//!
//! Each repository is a cheap `Clone` handle over shared state, so several
//! services can be wired to the same store.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use innkeep_domain::error::{InnkeepError, NotFoundError};
use innkeep_domain::id::{ReservationId, RoomId, RoomTypeId};
use innkeep_domain::reservation::Reservation;
use innkeep_domain::room::{Room, RoomType};

use crate::ports::{ReservationRepository, RoomRepository, RoomTypeRepository};

#[derive(Clone, Default)]
pub struct InMemoryRoomTypeRepo {
    store: Arc<Mutex<HashMap<RoomTypeId, RoomType>>>,
}

impl RoomTypeRepository for InMemoryRoomTypeRepo {
    fn create(
        &self,
        room_type: RoomType,
    ) -> impl Future<Output = Result<RoomType, InnkeepError>> + Send {
        self.store
            .lock()
            .unwrap()
            .insert(room_type.id, room_type.clone());
        async { Ok(room_type) }
    }

    fn get_by_id(
        &self,
        id: RoomTypeId,
    ) -> impl Future<Output = Result<Option<RoomType>, InnkeepError>> + Send {
        let result = self.store.lock().unwrap().get(&id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<RoomType>, InnkeepError>> + Send {
        let mut result: Vec<RoomType> = self.store.lock().unwrap().values().cloned().collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        async { Ok(result) }
    }
}

#[derive(Clone, Default)]
pub struct InMemoryRoomRepo {
    store: Arc<Mutex<HashMap<RoomId, Room>>>,
}

impl RoomRepository for InMemoryRoomRepo {
    fn create(&self, room: Room) -> impl Future<Output = Result<Room, InnkeepError>> + Send {
        self.store.lock().unwrap().insert(room.id, room.clone());
        async { Ok(room) }
    }

    fn get_by_id(
        &self,
        id: RoomId,
    ) -> impl Future<Output = Result<Option<Room>, InnkeepError>> + Send {
        let result = self.store.lock().unwrap().get(&id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Room>, InnkeepError>> + Send {
        let mut result: Vec<Room> = self.store.lock().unwrap().values().cloned().collect();
        result.sort_by(|a, b| a.number.cmp(&b.number));
        async { Ok(result) }
    }

    fn delete(&self, id: RoomId) -> impl Future<Output = Result<(), InnkeepError>> + Send {
        let removed = self.store.lock().unwrap().remove(&id);
        async move {
            removed.map(|_| ()).ok_or_else(|| {
                InnkeepError::from(NotFoundError {
                    entity: "Room",
                    id: id.to_string(),
                })
            })
        }
    }
}

#[derive(Clone, Default)]
pub struct InMemoryReservationRepo {
    store: Arc<Mutex<HashMap<ReservationId, Reservation>>>,
}

impl InMemoryReservationRepo {
    fn sorted(mut items: Vec<Reservation>) -> Vec<Reservation> {
        items.sort_by_key(|r| r.period.check_in());
        items
    }
}

impl ReservationRepository for InMemoryReservationRepo {
    fn create(
        &self,
        reservation: Reservation,
    ) -> impl Future<Output = Result<Reservation, InnkeepError>> + Send {
        self.store
            .lock()
            .unwrap()
            .insert(reservation.id, reservation.clone());
        async { Ok(reservation) }
    }

    fn get_by_id(
        &self,
        id: ReservationId,
    ) -> impl Future<Output = Result<Option<Reservation>, InnkeepError>> + Send {
        let result = self.store.lock().unwrap().get(&id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Reservation>, InnkeepError>> + Send {
        let result = Self::sorted(self.store.lock().unwrap().values().cloned().collect());
        async { Ok(result) }
    }

    fn find_by_room(
        &self,
        room_id: RoomId,
    ) -> impl Future<Output = Result<Vec<Reservation>, InnkeepError>> + Send {
        let result = Self::sorted(
            self.store
                .lock()
                .unwrap()
                .values()
                .filter(|r| r.room_id == room_id)
                .cloned()
                .collect(),
        );
        async { Ok(result) }
    }

    fn update(
        &self,
        reservation: Reservation,
    ) -> impl Future<Output = Result<Reservation, InnkeepError>> + Send {
        self.store
            .lock()
            .unwrap()
            .insert(reservation.id, reservation.clone());
        async { Ok(reservation) }
    }
}
