use std::sync::Arc;

use serde::Serialize;

use crate::model::RoomType;
use crate::session::{ChatSessions, NavigationSink};

use super::{PanelSink, SearchPanelEvent};

/// Destination of a result row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationTarget {
    /// Bare contact handle, no room. Opens the contact profile sub-page.
    Contact(String),
    /// Room reference by chat id. The room may not be instantiated locally.
    Room { chat_id: String },
}

/// Navigation request bound to a row at presentation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activation {
    pub target: NavigationTarget,
    pub message_id: Option<String>,
    /// Local buffer ordinal hint for the deep-link scroll.
    pub index: Option<usize>,
}

/// What an activation resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    OpenedContact { path: String },
    OpenedRoom { path: String },
    DeepLinked { path: String, message_id: String },
    /// The room was not instantiated locally; a background open was
    /// requested instead of navigating.
    RequestedRoom { chat_id: String },
}

/// Resolves and performs the navigation for an activated result row.
/// There is no fatal path: an unresolvable room falls through to a lazy
/// background instantiation, and the worst case is a freshly created empty
/// room.
pub struct NavigationResolver {
    sessions: Arc<dyn ChatSessions>,
    navigation: Arc<dyn NavigationSink>,
    panel: Arc<dyn PanelSink>,
    self_handle: String,
}

impl NavigationResolver {
    pub fn new(
        sessions: Arc<dyn ChatSessions>,
        navigation: Arc<dyn NavigationSink>,
        panel: Arc<dyn PanelSink>,
        self_handle: impl Into<String>,
    ) -> Self {
        NavigationResolver {
            sessions,
            navigation,
            panel,
            self_handle: self_handle.into(),
        }
    }

    /// Invoked on user selection of a row. Notifies the panel first, so it
    /// can reset its UI state regardless of navigation outcome, then
    /// navigates.
    pub fn activate(&self, activation: &Activation) -> NavigationAction {
        self.panel.notify(SearchPanelEvent::ResultOpen);

        match &activation.target {
            NavigationTarget::Contact(handle) => {
                let path = format!("fm/chat/p/{}", handle);
                self.navigation.load_sub_page(&path);
                NavigationAction::OpenedContact { path }
            }
            NavigationTarget::Room { chat_id } => match self.sessions.get_chat_by_id(chat_id) {
                Some(room) => {
                    let path = room.room_url();
                    self.navigation.load_sub_page(&path);
                    match &activation.message_id {
                        Some(message_id) => {
                            room.scroll_to_message(message_id, activation.index);
                            NavigationAction::DeepLinked {
                                path,
                                message_id: message_id.clone(),
                            }
                        }
                        None => NavigationAction::OpenedRoom { path },
                    }
                }
                None => {
                    log::debug!("no live room for {}, requesting background open", chat_id);
                    self.sessions.open_chat(
                        &[self.self_handle.clone(), chat_id.clone()],
                        RoomType::Private,
                        true,
                    );
                    NavigationAction::RequestedRoom {
                        chat_id: chat_id.clone(),
                    }
                }
            },
        }
    }
}
