//! Reservation — a room booked for a period, with a lifecycle status.

use serde::{Deserialize, Serialize};

use crate::error::{InnkeepError, InvalidTransitionError, ValidationError};
use crate::id::{ReservationId, RoomId};
use crate::period::Period;
use crate::time::{self, Timestamp};

/// Lifecycle state of a [`Reservation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl ReservationStatus {
    /// Whether a reservation in this state keeps its room occupied.
    #[must_use]
    pub fn blocks_room(self) -> bool {
        !matches!(self, Self::Cancelled)
    }

    /// Whether the lifecycle allows moving from `self` to `next`.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Confirmed | Self::Cancelled)
                | (Self::Confirmed, Self::CheckedIn | Self::Cancelled)
                | (Self::CheckedIn, Self::CheckedOut)
        )
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::CheckedIn => "checked_in",
            Self::CheckedOut => "checked_out",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReservationStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "checked_in" => Ok(Self::CheckedIn),
            "checked_out" => Ok(Self::CheckedOut),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ValidationError::UnknownStatus(s.to_string())),
        }
    }
}

/// A booking of one room for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub room_id: RoomId,
    pub guest_name: String,
    pub guests: u32,
    pub period: Period,
    pub status: ReservationStatus,
    pub created_at: Timestamp,
}

impl Reservation {
    /// Create a builder for constructing a [`Reservation`].
    #[must_use]
    pub fn builder() -> ReservationBuilder {
        ReservationBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`InnkeepError::Validation`] when `guest_name` is empty or
    /// `guests` is zero.
    pub fn validate(&self) -> Result<(), InnkeepError> {
        if self.guest_name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.guests == 0 {
            return Err(ValidationError::ZeroGuests.into());
        }
        Ok(())
    }

    /// Whether this reservation keeps `room_id` occupied.
    #[must_use]
    pub fn blocks(&self, room_id: RoomId) -> bool {
        self.room_id == room_id && self.status.blocks_room()
    }

    /// Move to `next`, enforcing the lifecycle.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTransitionError`] when the lifecycle forbids it.
    pub fn transition_to(&mut self, next: ReservationStatus) -> Result<(), InvalidTransitionError> {
        if !self.status.can_transition_to(next) {
            return Err(InvalidTransitionError {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }

    /// Cancel a reservation whose stay has not started at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`InnkeepError::InvalidTransition`] when the status cannot
    /// move to cancelled, or [`InnkeepError::Validation`] with
    /// [`ValidationError::PeriodInPast`] when the stay already began.
    pub fn cancel(&mut self, now: Timestamp) -> Result<(), InnkeepError> {
        if !self.status.can_transition_to(ReservationStatus::Cancelled) {
            return Err(InvalidTransitionError {
                from: self.status,
                to: ReservationStatus::Cancelled,
            }
            .into());
        }
        if !self.period.is_future(now) {
            return Err(ValidationError::PeriodInPast.into());
        }
        self.transition_to(ReservationStatus::Cancelled)?;
        Ok(())
    }
}

/// Step-by-step builder for [`Reservation`].
#[derive(Debug, Default)]
pub struct ReservationBuilder {
    id: Option<ReservationId>,
    room_id: Option<RoomId>,
    guest_name: Option<String>,
    guests: Option<u32>,
    period: Option<Period>,
    status: ReservationStatus,
    created_at: Option<Timestamp>,
}

impl ReservationBuilder {
    #[must_use]
    pub fn id(mut self, id: ReservationId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn room_id(mut self, room_id: RoomId) -> Self {
        self.room_id = Some(room_id);
        self
    }

    #[must_use]
    pub fn guest_name(mut self, guest_name: impl Into<String>) -> Self {
        self.guest_name = Some(guest_name.into());
        self
    }

    #[must_use]
    pub fn guests(mut self, guests: u32) -> Self {
        self.guests = Some(guests);
        self
    }

    #[must_use]
    pub fn period(mut self, period: Period) -> Self {
        self.period = Some(period);
        self
    }

    #[must_use]
    pub fn status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Consume the builder, validate, and return a [`Reservation`].
    ///
    /// # Errors
    ///
    /// Returns [`InnkeepError::Validation`] if the room or period is
    /// missing, the guest name is empty, or the party is empty.
    pub fn build(self) -> Result<Reservation, InnkeepError> {
        let room_id = self.room_id.ok_or(ValidationError::MissingRoom)?;
        let period = self.period.ok_or(ValidationError::MissingPeriod)?;
        let reservation = Reservation {
            id: self.id.unwrap_or_default(),
            room_id,
            guest_name: self.guest_name.unwrap_or_default(),
            guests: self.guests.unwrap_or(1),
            period,
            status: self.status,
            created_at: self.created_at.unwrap_or_else(time::now),
        };
        reservation.validate()?;
        Ok(reservation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn at(day: u32, hour: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0).unwrap()
    }

    fn reservation(status: ReservationStatus) -> Reservation {
        Reservation::builder()
            .room_id(RoomId::new())
            .guest_name("Ada")
            .guests(2)
            .period(Period::new(at(10, 14), at(12, 11)).unwrap())
            .status(status)
            .build()
            .unwrap()
    }

    #[test]
    fn should_build_pending_reservation_by_default() {
        let r = Reservation::builder()
            .room_id(RoomId::new())
            .guest_name("Ada")
            .period(Period::new(at(10, 14), at(12, 11)).unwrap())
            .build()
            .unwrap();
        assert_eq!(r.status, ReservationStatus::Pending);
        assert_eq!(r.guests, 1);
    }

    #[test]
    fn should_return_validation_error_when_guest_name_is_empty() {
        let result = Reservation::builder()
            .room_id(RoomId::new())
            .period(Period::new(at(10, 14), at(12, 11)).unwrap())
            .build();
        assert!(matches!(
            result,
            Err(InnkeepError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_return_validation_error_when_guests_is_zero() {
        let result = Reservation::builder()
            .room_id(RoomId::new())
            .guest_name("Ada")
            .guests(0)
            .period(Period::new(at(10, 14), at(12, 11)).unwrap())
            .build();
        assert!(matches!(
            result,
            Err(InnkeepError::Validation(ValidationError::ZeroGuests))
        ));
    }

    #[test]
    fn should_return_validation_error_when_period_is_missing() {
        let result = Reservation::builder()
            .room_id(RoomId::new())
            .guest_name("Ada")
            .build();
        assert!(matches!(
            result,
            Err(InnkeepError::Validation(ValidationError::MissingPeriod))
        ));
    }

    #[test]
    fn should_block_room_unless_cancelled() {
        assert!(ReservationStatus::Pending.blocks_room());
        assert!(ReservationStatus::Confirmed.blocks_room());
        assert!(ReservationStatus::CheckedIn.blocks_room());
        assert!(ReservationStatus::CheckedOut.blocks_room());
        assert!(!ReservationStatus::Cancelled.blocks_room());
    }

    #[test]
    fn should_only_block_its_own_room() {
        let r = reservation(ReservationStatus::Confirmed);
        assert!(r.blocks(r.room_id));
        assert!(!r.blocks(RoomId::new()));
    }

    #[test]
    fn should_cancel_confirmed_reservation_before_check_in() {
        let mut r = reservation(ReservationStatus::Confirmed);
        r.cancel(at(9, 0)).unwrap();
        assert_eq!(r.status, ReservationStatus::Cancelled);
    }

    #[test]
    fn should_refuse_to_cancel_after_stay_started() {
        let mut r = reservation(ReservationStatus::Confirmed);
        let result = r.cancel(at(11, 0));
        assert!(matches!(
            result,
            Err(InnkeepError::Validation(ValidationError::PeriodInPast))
        ));
        assert_eq!(r.status, ReservationStatus::Confirmed);
    }

    #[test]
    fn should_refuse_to_cancel_twice() {
        let mut r = reservation(ReservationStatus::Cancelled);
        let result = r.cancel(at(9, 0));
        assert!(matches!(result, Err(InnkeepError::InvalidTransition(_))));
    }

    #[test]
    fn should_refuse_to_cancel_checked_in_reservation() {
        let mut r = reservation(ReservationStatus::CheckedIn);
        assert!(matches!(
            r.cancel(at(9, 0)),
            Err(InnkeepError::InvalidTransition(_))
        ));
    }

    #[test]
    fn should_follow_lifecycle_transitions() {
        let mut r = reservation(ReservationStatus::Pending);
        r.transition_to(ReservationStatus::Confirmed).unwrap();
        r.transition_to(ReservationStatus::CheckedIn).unwrap();
        r.transition_to(ReservationStatus::CheckedOut).unwrap();
        let err = r
            .transition_to(ReservationStatus::Confirmed)
            .unwrap_err();
        assert_eq!(err.from, ReservationStatus::CheckedOut);
        assert_eq!(err.to, ReservationStatus::Confirmed);
    }

    #[test]
    fn should_parse_status_from_display_form() {
        for status in [
            ReservationStatus::Pending,
            ReservationStatus::Confirmed,
            ReservationStatus::CheckedIn,
            ReservationStatus::CheckedOut,
            ReservationStatus::Cancelled,
        ] {
            assert_eq!(status.to_string().parse::<ReservationStatus>(), Ok(status));
        }
        assert!("archived".parse::<ReservationStatus>().is_err());
    }

    #[test]
    fn should_serialize_status_as_snake_case() {
        let json = serde_json::to_string(&ReservationStatus::CheckedIn).unwrap();
        assert_eq!(json, "\"checked_in\"");
    }
}
