//! Command-line surface.
//!
//! Timestamps are RFC 3339 (e.g. `2024-01-10T14:00:00Z`).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use innkeep_domain::id::{ReservationId, RoomId, RoomTypeId};
use innkeep_domain::time::Timestamp;

#[derive(Debug, Parser)]
#[command(name = "innkeep")]
#[command(about = "Hotel room catalogue, availability search, and reservations")]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "innkeep.toml")]
    pub config: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage room types
    RoomType {
        #[command(subcommand)]
        action: RoomTypeCommand,
    },
    /// Manage rooms
    Room {
        #[command(subcommand)]
        action: RoomCommand,
    },
    /// List rooms free for a stay, cleaning time included
    Search {
        #[arg(long)]
        check_in: Timestamp,
        #[arg(long)]
        check_out: Timestamp,
        /// Only consider rooms of this type
        #[arg(long)]
        room_type: Option<RoomTypeId>,
    },
    /// Book a room
    Book {
        #[arg(long)]
        room: RoomId,
        #[arg(long)]
        guest: String,
        #[arg(long, default_value_t = 1)]
        guests: u32,
        #[arg(long)]
        check_in: Timestamp,
        #[arg(long)]
        check_out: Timestamp,
    },
    /// Cancel a reservation that has not started yet
    Cancel { id: ReservationId },
    /// List reservations
    Reservations {
        /// Only show reservations of this room
        #[arg(long)]
        room: Option<RoomId>,
    },
}

#[derive(Debug, Subcommand)]
pub enum RoomTypeCommand {
    /// Create a room type
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        capacity: u32,
        /// Hours the room stays blocked before each check-in and after each check-out
        #[arg(long, default_value_t = 0)]
        cleaning_hours: u32,
        #[arg(long = "amenity")]
        amenities: Vec<String>,
    },
    /// List room types
    List,
}

#[derive(Debug, Subcommand)]
pub enum RoomCommand {
    /// Create a room of an existing type
    Add {
        #[arg(long)]
        number: String,
        #[arg(long)]
        room_type: RoomTypeId,
    },
    /// List rooms
    List,
    /// Delete a room and its reservations
    Remove { id: RoomId },
}
