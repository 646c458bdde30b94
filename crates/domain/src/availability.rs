//! Availability evaluator — pure predicates over rooms, periods, and
//! existing reservations.
//!
//! Callers hand in a snapshot of reservations; nothing here does IO or fails.
//! Cancelled reservations and reservations of other rooms are ignored.

use std::collections::HashMap;

use chrono::{DateTime, TimeDelta, Utc};

use crate::id::{RoomId, RoomTypeId};
use crate::period::Period;
use crate::reservation::Reservation;
use crate::room::Room;

/// Whether no active reservation of `room` overlaps `period`.
#[must_use]
pub fn is_available(room: &Room, period: &Period, existing: &[Reservation]) -> bool {
    !blocking(room, existing).any(|r| r.period.overlaps(period))
}

/// Hours housekeeping needs between two stays in `room`.
#[must_use]
pub fn cleaning_buffer_hours(room: &Room) -> u32 {
    room.room_type.cleaning_hours
}

/// Like [`is_available`], but each active reservation also keeps the room
/// blocked for the cleaning buffer before its check-in and after its
/// check-out.
#[must_use]
pub fn is_available_with_cleaning(room: &Room, period: &Period, existing: &[Reservation]) -> bool {
    let buffer = TimeDelta::hours(i64::from(cleaning_buffer_hours(room)));
    !blocking(room, existing).any(|r| {
        let blocked_from = r
            .period
            .check_in()
            .checked_sub_signed(buffer)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let blocked_until = r
            .period
            .check_out()
            .checked_add_signed(buffer)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        period.check_in() < blocked_until && blocked_from < period.check_out()
    })
}

/// Keep the rooms of `candidates` that can take `period`, in input order.
///
/// When `room_type` is set, rooms of any other type are dropped. Rooms
/// missing from `reservations_by_room` are treated as empty.
#[must_use]
pub fn find_available_rooms(
    period: &Period,
    candidates: &[Room],
    reservations_by_room: &HashMap<RoomId, Vec<Reservation>>,
    room_type: Option<RoomTypeId>,
) -> Vec<Room> {
    candidates
        .iter()
        .filter(|room| room_type.is_none_or(|wanted| room.room_type.id == wanted))
        .filter(|room| {
            let existing = reservations_by_room
                .get(&room.id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            is_available_with_cleaning(room, period, existing)
        })
        .cloned()
        .collect()
}

fn blocking<'a>(
    room: &'a Room,
    existing: &'a [Reservation],
) -> impl Iterator<Item = &'a Reservation> + 'a {
    existing.iter().filter(move |r| r.blocks(room.id))
}
