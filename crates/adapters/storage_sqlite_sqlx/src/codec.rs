//! Column encoding shared by the repositories.

use chrono::SecondsFormat;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use sqlx::types::Uuid;
use sqlx::types::uuid::fmt::Hyphenated;

use innkeep_domain::id::RoomTypeId;
use innkeep_domain::room::RoomType;
use innkeep_domain::time::Timestamp;

pub(crate) fn decode_error<E>(err: E) -> sqlx::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    sqlx::Error::Decode(Box::new(err))
}

/// Fixed-width UTC form at full precision, so text ordering in SQL matches
/// time ordering and a stored period reads back exactly as written.
pub(crate) fn encode_timestamp(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub(crate) fn decode_timestamp(value: &str) -> Result<Timestamp, sqlx::Error> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.to_utc())
        .map_err(decode_error)
}

/// Ids are stored as lowercase hyphenated text.
pub(crate) fn encode_id<T: Into<Uuid>>(id: T) -> Hyphenated {
    id.into().hyphenated()
}

pub(crate) fn get_id<T: From<Uuid>>(row: &SqliteRow, column: &str) -> Result<T, sqlx::Error> {
    let value: Hyphenated = row.try_get(column)?;
    Ok(T::from(value.into_uuid()))
}

pub(crate) fn decode_u32(value: i64) -> Result<u32, sqlx::Error> {
    u32::try_from(value).map_err(decode_error)
}

/// Read a room type from a row whose id lives in `id_column`.
pub(crate) fn room_type_from_row(row: &SqliteRow, id_column: &str) -> Result<RoomType, sqlx::Error> {
    let name: String = row.try_get("type_name")?;
    let capacity: i64 = row.try_get("capacity")?;
    let amenities: String = row.try_get("amenities")?;
    let cleaning_hours: i64 = row.try_get("cleaning_hours")?;

    Ok(RoomType {
        id: get_id::<RoomTypeId>(row, id_column)?,
        name,
        capacity: decode_u32(capacity)?,
        amenities: serde_json::from_str(&amenities).map_err(decode_error)?,
        cleaning_hours: decode_u32(cleaning_hours)?,
    })
}
