//! Result rows for a chat application's unified search panel.
//!
//! Given a heterogeneous search match (a message, a chat, or a member) this
//! crate decides which presentation variant applies, computes the row's
//! display text with match highlighting, and resolves the navigation action
//! on selection: open an existing room, request a background room
//! instantiation, open a contact profile, or deep-link to a message within
//! a room. Markup rendering, search execution and scoring live elsewhere;
//! collaborators are injected through the traits in [`session`].

pub mod highlight;
pub mod logging;
pub mod model;
pub mod panel;
pub mod session;

pub use highlight::{Highlight, MarkupHighlighter, MatchSpan};
pub use model::{room_is_group, Match, MatchKind, MatchPayload, MessageData, RoomRef, RoomType};
pub use panel::classify::{classify, RenderVariant};
pub use panel::navigate::{Activation, NavigationAction, NavigationResolver, NavigationTarget};
pub use panel::presenter::ResultPresenter;
pub use panel::summary::{Summary, SummaryResolver};
pub use panel::{
    HighlightLayout, IconKind, PanelSink, ResultViewModel, RowAction, SearchPanelEvent,
};
pub use session::{
    ChatSessions, ContactStore, NavigationSink, RoomInstance, SessionBridge, SessionCommand,
};
