use serde::{Deserialize, Serialize};

use crate::highlight::MatchSpan;

/// Kind of a search match as pre-classified by the search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Message,
    Chat,
    Member,
    Nil,
}

/// Type of a chat room. Room type can change over a room's lifetime
/// (e.g. public -> private), so group-ness is computed fresh each render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Private,
    Group,
    Public,
}

impl RoomType {
    pub fn is_group(self) -> bool {
        matches!(self, RoomType::Group | RoomType::Public)
    }
}

/// Room descriptor carried by a search match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomRef {
    pub chat_id: String,
    pub room_type: RoomType,
    /// Explicit room topic, if one is set.
    pub topic: Option<String>,
    /// Computed room title (fallback when no topic is set).
    pub title: String,
    /// The participant except the current user. Meaningful for 1:1 rooms only.
    pub peer: Option<String>,
    pub member_count: Option<usize>,
}

/// Whether the given room is a group chat. A missing room is never a group.
pub fn room_is_group(room: Option<&RoomRef>) -> bool {
    room.map_or(false, |r| r.room_type.is_group())
}

/// Message record attached to a message match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageData {
    pub message_id: String,
    /// Message timestamp.
    pub delay: i64,
    /// Summary text precomputed by the search engine, if any.
    pub renderable_summary: Option<String>,
}

/// Payload of a match: a message record, a contact handle, or nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPayload {
    Message(MessageData),
    Contact(String),
    None,
}

/// A single search-result entry supplied by the search engine.
/// Read-only to this crate; constructed per query and discarded on the next.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub kind: MatchKind,
    pub room: Option<RoomRef>,
    pub data: MatchPayload,
    /// Byte offsets into the unhighlighted text that matched the query.
    pub matches: Vec<MatchSpan>,
    /// Ordinal of the message within its room's buffer, when the buffer
    /// already holds the message locally.
    pub index: Option<usize>,
}
