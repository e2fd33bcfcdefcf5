use thiserror::Error;

use crate::game::types::RoomId;

/// Errors that abort a command. Player mistakes (bad direction, missing item,
/// locked door) are narrative replies, not errors.
#[derive(Debug, Error)]
pub enum GameError {
    /// Returned when a room lookup misses; the castle graph is built incomplete.
    #[error("room not found in world graph: {0}")]
    RoomMissing(RoomId),

    /// Wrapper around IO errors while reading input or writing output.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
