use std::sync::Arc;

use crate::model::{room_is_group, Match, MatchKind};

use super::classify::{classify, RenderVariant};
use super::navigate::{Activation, NavigationAction, NavigationResolver, NavigationTarget};
use super::summary::SummaryResolver;
use super::{PanelSink, ResultViewModel, RowAction, SearchPanelEvent};

/// Orchestrates classification, summary resolution and navigation for one
/// result row. Stateless between renders: everything is re-derived from the
/// current match, no view-model survives a query change.
pub struct ResultPresenter {
    summaries: SummaryResolver,
    navigation: NavigationResolver,
    panel: Arc<dyn PanelSink>,
}

impl ResultPresenter {
    pub fn new(
        summaries: SummaryResolver,
        navigation: NavigationResolver,
        panel: Arc<dyn PanelSink>,
    ) -> Self {
        ResultPresenter {
            summaries,
            navigation,
            panel,
        }
    }

    /// Build the view-model for a match. `is_first_query` marks the user's
    /// first query attempt, which attaches the empty-state call-to-action.
    pub fn present(&self, m: Option<&Match>, is_first_query: bool) -> ResultViewModel {
        let variant = classify(m);
        let summary = self.summaries.resolve(&variant, is_first_query);

        let (kind, is_group, timestamp, action) = match &variant {
            RenderVariant::Message(v) => (
                MatchKind::Message,
                v.room.room_type.is_group(),
                Some(v.data.delay),
                RowAction::Open(Activation {
                    target: NavigationTarget::Room {
                        chat_id: v.room.chat_id.clone(),
                    },
                    message_id: Some(v.data.message_id.clone()),
                    index: v.index,
                }),
            ),
            RenderVariant::Chat(v) => (
                MatchKind::Chat,
                v.room.room_type.is_group(),
                None,
                RowAction::Open(Activation {
                    target: NavigationTarget::Room {
                        chat_id: v.room.chat_id.clone(),
                    },
                    message_id: None,
                    index: None,
                }),
            ),
            RenderVariant::Member(v) => {
                let target = match &v.room {
                    Some(room) => NavigationTarget::Room {
                        chat_id: room.chat_id.clone(),
                    },
                    None => NavigationTarget::Contact(v.contact.clone().unwrap_or_default()),
                };
                (
                    MatchKind::Member,
                    room_is_group(v.room.as_ref()),
                    None,
                    RowAction::Open(Activation {
                        target,
                        message_id: None,
                        index: None,
                    }),
                )
            }
            RenderVariant::Empty => (
                MatchKind::Nil,
                false,
                None,
                if is_first_query {
                    RowAction::SearchMessages
                } else {
                    RowAction::None
                },
            ),
        };

        ResultViewModel {
            kind,
            title: summary.title,
            subtitle: summary.subtitle,
            icon: summary.icon,
            is_group,
            highlight_layout: summary.layout,
            timestamp,
            action,
        }
    }

    /// Dispatch the row's action on user activation.
    pub fn activate(&self, row: &ResultViewModel) -> Option<NavigationAction> {
        match &row.action {
            RowAction::Open(activation) => Some(self.navigation.activate(activation)),
            RowAction::SearchMessages => {
                self.panel.notify(SearchPanelEvent::SearchMessages);
                None
            }
            RowAction::None => None,
        }
    }
}
