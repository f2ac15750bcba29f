pub mod classify;
pub mod navigate;
pub mod presenter;
pub mod summary;

use serde::Serialize;

use crate::model::MatchKind;
use navigate::Activation;

/// Fixed label shown when a query produced no results.
pub const NO_RESULTS_LABEL: &str = "No results";

/// Inline call-to-action attached to the empty state on the first query
/// attempt. The `[A]`/`[/A]` tokens are substituted with anchor markup
/// wrapping the "search messages instead" action.
pub const SEARCH_MESSAGES_INLINE_LABEL: &str = "Try [A]searching for messages[/A] instead";

/// Notifications dispatched to the owning search panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPanelEvent {
    /// A result row was activated. Dispatched before every navigation so the
    /// panel can reset its UI state regardless of navigation outcome.
    ResultOpen,
    /// The empty-state call-to-action was activated.
    SearchMessages,
}

/// Consumes panel notifications.
pub trait PanelSink: Send + Sync {
    fn notify(&self, event: SearchPanelEvent);
}

/// Leading icon of a result row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    /// Group chat topic icon.
    Group,
    /// Avatar of the given contact handle.
    Contact(String),
    /// Empty-state icon.
    NoResults,
}

/// Row layout: `Graphic` is icon-forward with highlighted text, `Textual`
/// is plain with presence/metadata text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightLayout {
    Graphic,
    Textual,
}

/// What activating a row does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowAction {
    /// Navigate to the resolved destination.
    Open(Activation),
    /// Ask the panel to run a message search instead.
    SearchMessages,
    /// Inert row.
    None,
}

/// Everything the external renderer needs to display one result row.
#[derive(Debug, Clone, Serialize)]
pub struct ResultViewModel {
    pub kind: MatchKind,
    /// Already-highlighted markup.
    pub title: String,
    pub subtitle: Option<String>,
    pub icon: IconKind,
    pub is_group: bool,
    pub highlight_layout: HighlightLayout,
    /// Message timestamp, for the time marker on message rows.
    pub timestamp: Option<i64>,
    pub action: RowAction,
}
