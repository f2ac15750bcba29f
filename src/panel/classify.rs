use crate::highlight::MatchSpan;
use crate::model::{Match, MatchKind, MatchPayload, MessageData, RoomRef};

/// Resolved presentation variant for a match. Each variant carries exactly
/// the fields its downstream consumer needs; the raw match shape stops here.
#[derive(Debug, Clone)]
pub enum RenderVariant {
    Message(MessageVariant),
    Chat(ChatVariant),
    Member(MemberVariant),
    Empty,
}

#[derive(Debug, Clone)]
pub struct MessageVariant {
    pub room: RoomRef,
    pub data: MessageData,
    pub matches: Vec<MatchSpan>,
    pub index: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct ChatVariant {
    pub room: RoomRef,
    pub matches: Vec<MatchSpan>,
}

#[derive(Debug, Clone)]
pub struct MemberVariant {
    /// Contact handle; required when there is no contextual room.
    pub contact: Option<String>,
    pub room: Option<RoomRef>,
    pub matches: Vec<MatchSpan>,
}

/// Determine the presentation variant for a raw match. Pure. An absent
/// match, a `Nil` kind, an unknown shape, or a match violating the kind's
/// invariants (e.g. a message without a room) maps to `Empty` — the result
/// list never crashes on a malformed entry.
pub fn classify(m: Option<&Match>) -> RenderVariant {
    let m = match m {
        Some(m) => m,
        None => return RenderVariant::Empty,
    };

    match m.kind {
        MatchKind::Message => match (&m.room, &m.data) {
            (Some(room), MatchPayload::Message(data)) => RenderVariant::Message(MessageVariant {
                room: room.clone(),
                data: data.clone(),
                matches: m.matches.clone(),
                index: m.index,
            }),
            _ => RenderVariant::Empty,
        },
        MatchKind::Chat => match &m.room {
            Some(room) => RenderVariant::Chat(ChatVariant {
                room: room.clone(),
                matches: m.matches.clone(),
            }),
            None => RenderVariant::Empty,
        },
        MatchKind::Member => {
            let contact = match &m.data {
                MatchPayload::Contact(handle) => Some(handle.clone()),
                _ => None,
            };
            if contact.is_none() && m.room.is_none() {
                return RenderVariant::Empty;
            }
            RenderVariant::Member(MemberVariant {
                contact,
                room: m.room.clone(),
                matches: m.matches.clone(),
            })
        }
        MatchKind::Nil => RenderVariant::Empty,
    }
}
