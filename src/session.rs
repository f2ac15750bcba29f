use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use crate::model::{MessageData, RoomType};

/// A live, locally instantiated chat room.
pub trait RoomInstance: Send + Sync {
    fn room_url(&self) -> String;
    fn room_title(&self) -> String;
    /// Position the room view at the given message. `index` is the local
    /// buffer ordinal when the message is already materialized; without it
    /// the room resolves the position lazily (e.g. paginates backward).
    fn scroll_to_message(&self, message_id: &str, index: Option<usize>);
    /// Synthesize display text for a message from the room's buffer.
    fn renderable_summary(&self, data: &MessageData) -> String;
}

/// Chat session registry: looks up live rooms and instantiates missing ones.
pub trait ChatSessions: Send + Sync {
    fn get_chat_by_id(&self, chat_id: &str) -> Option<Arc<dyn RoomInstance>>;
    /// Request instantiation of a room with the given participants.
    /// Fire-and-forget: never blocks, never errors, and with `background`
    /// set the new room must not steal focus.
    fn open_chat(&self, participants: &[String], mode: RoomType, background: bool);
}

/// Contact metadata lookups. All lookups are best-effort; `None` degrades
/// to empty display text.
pub trait ContactStore: Send + Sync {
    fn nickname(&self, handle: &str) -> Option<String>;
    fn display_name(&self, handle: &str) -> Option<String>;
    fn presence_text(&self, handle: &str) -> Option<String>;
    fn last_activity_text(&self, handle: &str) -> Option<String>;
}

/// Performs the actual route change.
pub trait NavigationSink: Send + Sync {
    fn load_sub_page(&self, path: &str);
}

/// Room instantiation request drained by the owning application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    OpenChat {
        participants: Vec<String>,
        mode: RoomType,
        background: bool,
    },
}

/// `ChatSessions` backed by an in-memory live-room map plus a command
/// channel for instantiation requests. The host drains the receiver and
/// populates the room map as rooms come up; late-arriving rooms are its
/// concern, not this crate's.
pub struct SessionBridge {
    rooms: Mutex<HashMap<String, Arc<dyn RoomInstance>>>,
    commands: mpsc::UnboundedSender<SessionCommand>,
}

impl SessionBridge {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<SessionCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            SessionBridge {
                rooms: Mutex::new(HashMap::new()),
                commands: tx,
            },
            rx,
        )
    }

    pub fn insert_room(&self, chat_id: &str, room: Arc<dyn RoomInstance>) {
        if let Ok(mut rooms) = self.rooms.lock() {
            rooms.insert(chat_id.to_string(), room);
        }
    }

    pub fn remove_room(&self, chat_id: &str) {
        if let Ok(mut rooms) = self.rooms.lock() {
            rooms.remove(chat_id);
        }
    }
}

impl ChatSessions for SessionBridge {
    fn get_chat_by_id(&self, chat_id: &str) -> Option<Arc<dyn RoomInstance>> {
        self.rooms
            .lock()
            .ok()
            .and_then(|rooms| rooms.get(chat_id).cloned())
    }

    fn open_chat(&self, participants: &[String], mode: RoomType, background: bool) {
        let command = SessionCommand::OpenChat {
            participants: participants.to_vec(),
            mode,
            background,
        };
        if self.commands.send(command).is_err() {
            log::warn!("open_chat dropped: session command receiver is gone");
        }
    }
}
