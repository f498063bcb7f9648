use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

const DISPLAY_NAME_PREFIX: &str = "Stream ";
const DISPLAY_NAME_ID_CHARS: usize = 6;

/// Room identifier as it travels on the wire.
///
/// Generated ids are UUID v4 strings. Ids received from clients are kept as
/// given, so a lookup with an arbitrary string simply finds no room.
#[derive(Debug, Serialize, Deserialize, Clone, Hash, Eq, PartialEq)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human readable name shown in room listings.
    pub fn display_name(&self) -> String {
        let prefix: String = self.0.chars().take(DISPLAY_NAME_ID_CHARS).collect();
        format!("{DISPLAY_NAME_PREFIX}{prefix}")
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for RoomId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of the room listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummary {
    pub room_id: RoomId,
    pub name: String,
}
