use std::sync::Arc;

use crate::highlight::Highlight;
use crate::model::RoomRef;
use crate::session::{ChatSessions, ContactStore};

use super::classify::{ChatVariant, MemberVariant, MessageVariant, RenderVariant};
use super::{HighlightLayout, IconKind, NO_RESULTS_LABEL, SEARCH_MESSAGES_INLINE_LABEL};

/// Resolved display text for one result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub title: String,
    pub subtitle: Option<String>,
    pub icon: IconKind,
    pub layout: HighlightLayout,
}

/// Computes display text for a variant, applying fallback chains and
/// highlight markup. Best-effort: missing room/contact data degrades to
/// empty text, nothing fails the render.
pub struct SummaryResolver {
    sessions: Arc<dyn ChatSessions>,
    contacts: Arc<dyn ContactStore>,
    highlighter: Arc<dyn Highlight>,
}

impl SummaryResolver {
    pub fn new(
        sessions: Arc<dyn ChatSessions>,
        contacts: Arc<dyn ContactStore>,
        highlighter: Arc<dyn Highlight>,
    ) -> Self {
        SummaryResolver {
            sessions,
            contacts,
            highlighter,
        }
    }

    pub fn resolve(&self, variant: &RenderVariant, is_first_query: bool) -> Summary {
        match variant {
            RenderVariant::Message(v) => self.message(v),
            RenderVariant::Chat(v) => self.chat(v),
            RenderVariant::Member(v) => self.member(v),
            RenderVariant::Empty => empty_state(is_first_query),
        }
    }

    fn message(&self, v: &MessageVariant) -> Summary {
        let summary = v
            .data
            .renderable_summary
            .clone()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| {
                self.sessions
                    .get_chat_by_id(&v.room.chat_id)
                    .map(|room| room.renderable_summary(&v.data))
            })
            .unwrap_or_default();

        let icon = if v.room.room_type.is_group() {
            IconKind::Group
        } else {
            IconKind::Contact(v.room.peer.clone().unwrap_or_default())
        };

        Summary {
            title: room_display_title(&v.room),
            subtitle: Some(self.highlighter.highlight(&summary, &v.matches, true)),
            icon,
            layout: HighlightLayout::Graphic,
        }
    }

    fn chat(&self, v: &ChatVariant) -> Summary {
        let topic = v.room.topic.as_deref().unwrap_or_default();
        Summary {
            title: self.highlighter.highlight(topic, &v.matches, true),
            subtitle: None,
            icon: IconKind::Group,
            layout: HighlightLayout::Graphic,
        }
    }

    fn member(&self, v: &MemberVariant) -> Summary {
        // Non-empty matches select the highlighted graphic layout, empty
        // matches the plain textual one.
        let layout = if v.matches.is_empty() {
            HighlightLayout::Textual
        } else {
            HighlightLayout::Graphic
        };

        match v.room.as_ref().filter(|r| r.room_type.is_group()) {
            Some(room) => {
                let base = room_display_title(room);
                let (title, subtitle) = match layout {
                    HighlightLayout::Graphic => {
                        (self.highlighter.highlight(&base, &v.matches, true), None)
                    }
                    HighlightLayout::Textual => {
                        (base, room.member_count.map(|n| format!("{} members", n)))
                    }
                };
                Summary {
                    title,
                    subtitle,
                    icon: IconKind::Group,
                    layout,
                }
            }
            None => {
                let handle = v.contact.clone().unwrap_or_default();
                let name = self
                    .contacts
                    .nickname(&handle)
                    .filter(|s| !s.trim().is_empty())
                    .or_else(|| self.contacts.display_name(&handle))
                    .unwrap_or_default();
                let (title, subtitle) = match layout {
                    HighlightLayout::Graphic => (
                        self.highlighter.highlight(&name, &v.matches, true),
                        self.contacts.presence_text(&handle),
                    ),
                    HighlightLayout::Textual => (name, self.contacts.last_activity_text(&handle)),
                };
                Summary {
                    title,
                    subtitle,
                    icon: IconKind::Contact(handle),
                    layout,
                }
            }
        }
    }
}

/// Display title of a room: explicit topic, else the computed title.
fn room_display_title(room: &RoomRef) -> String {
    room.topic
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(room.title.as_str())
        .to_string()
}

fn empty_state(is_first_query: bool) -> Summary {
    Summary {
        title: NO_RESULTS_LABEL.to_string(),
        subtitle: is_first_query.then(|| {
            SEARCH_MESSAGES_INLINE_LABEL
                .replace("[A]", "<a>")
                .replace("[/A]", "</a>")
        }),
        icon: IconKind::NoResults,
        layout: HighlightLayout::Textual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::{MarkupHighlighter, MatchSpan};
    use crate::model::{MessageData, RoomType};
    use crate::session::RoomInstance;

    struct FakeRoom;

    impl RoomInstance for FakeRoom {
        fn room_url(&self) -> String {
            "fm/chat/c1".to_string()
        }
        fn room_title(&self) -> String {
            "Fake".to_string()
        }
        fn scroll_to_message(&self, _message_id: &str, _index: Option<usize>) {}
        fn renderable_summary(&self, data: &MessageData) -> String {
            format!("buffer summary for {}", data.message_id)
        }
    }

    struct FakeSessions {
        has_room: bool,
    }

    impl ChatSessions for FakeSessions {
        fn get_chat_by_id(&self, _chat_id: &str) -> Option<Arc<dyn RoomInstance>> {
            if self.has_room {
                Some(Arc::new(FakeRoom))
            } else {
                None
            }
        }
        fn open_chat(&self, _participants: &[String], _mode: RoomType, _background: bool) {}
    }

    struct FakeContacts {
        nickname: Option<&'static str>,
    }

    impl ContactStore for FakeContacts {
        fn nickname(&self, _handle: &str) -> Option<String> {
            self.nickname.map(str::to_string)
        }
        fn display_name(&self, handle: &str) -> Option<String> {
            Some(format!("Contact {}", handle))
        }
        fn presence_text(&self, _handle: &str) -> Option<String> {
            Some("Online".to_string())
        }
        fn last_activity_text(&self, _handle: &str) -> Option<String> {
            Some("Last seen recently".to_string())
        }
    }

    fn resolver(has_room: bool, nickname: Option<&'static str>) -> SummaryResolver {
        SummaryResolver::new(
            Arc::new(FakeSessions { has_room }),
            Arc::new(FakeContacts { nickname }),
            Arc::new(MarkupHighlighter),
        )
    }

    fn room(room_type: RoomType, topic: Option<&str>) -> RoomRef {
        RoomRef {
            chat_id: "c1".to_string(),
            room_type,
            topic: topic.map(str::to_string),
            title: "Computed Title".to_string(),
            peer: Some("peer".to_string()),
            member_count: Some(4),
        }
    }

    fn message_variant(summary: Option<&str>, matches: Vec<MatchSpan>) -> RenderVariant {
        RenderVariant::Message(MessageVariant {
            room: room(RoomType::Private, None),
            data: MessageData {
                message_id: "m1".to_string(),
                delay: 1_700_000_000,
                renderable_summary: summary.map(str::to_string),
            },
            matches,
            index: None,
        })
    }

    #[test]
    fn test_message_uses_precomputed_summary() {
        let s = resolver(true, None).resolve(&message_variant(Some("hello there"), vec![]), false);
        assert_eq!(s.title, "Computed Title");
        assert_eq!(s.subtitle.as_deref(), Some("hello there"));
        assert_eq!(s.icon, IconKind::Contact("peer".to_string()));
        assert_eq!(s.layout, HighlightLayout::Graphic);
    }

    #[test]
    fn test_message_falls_back_to_buffer_summary() {
        let s = resolver(true, None).resolve(&message_variant(None, vec![]), false);
        assert_eq!(s.subtitle.as_deref(), Some("buffer summary for m1"));
    }

    #[test]
    fn test_message_without_room_or_summary_degrades_to_empty_text() {
        let s = resolver(false, None).resolve(&message_variant(None, vec![]), false);
        assert_eq!(s.subtitle.as_deref(), Some(""));
    }

    #[test]
    fn test_message_summary_is_highlighted() {
        let s = resolver(true, None).resolve(
            &message_variant(Some("hello there"), vec![MatchSpan { start: 0, end: 5 }]),
            false,
        );
        assert_eq!(s.subtitle.as_deref(), Some("<strong>hello</strong> there"));
    }

    #[test]
    fn test_message_title_prefers_topic() {
        let v = RenderVariant::Message(MessageVariant {
            room: room(RoomType::Group, Some("The Topic")),
            data: MessageData {
                message_id: "m1".to_string(),
                delay: 0,
                renderable_summary: Some("x".to_string()),
            },
            matches: vec![],
            index: None,
        });
        let s = resolver(true, None).resolve(&v, false);
        assert_eq!(s.title, "The Topic");
        assert_eq!(s.icon, IconKind::Group);
    }

    #[test]
    fn test_chat_topic_highlighted_no_subtitle() {
        let v = RenderVariant::Chat(ChatVariant {
            room: room(RoomType::Public, Some("rust talk")),
            matches: vec![MatchSpan { start: 0, end: 4 }],
        });
        let s = resolver(true, None).resolve(&v, false);
        assert_eq!(s.title, "<strong>rust</strong> talk");
        assert!(s.subtitle.is_none());
        assert_eq!(s.icon, IconKind::Group);
    }

    #[test]
    fn test_member_group_textual_shows_member_count() {
        let v = RenderVariant::Member(MemberVariant {
            contact: Some("u1".to_string()),
            room: Some(room(RoomType::Group, Some("Team"))),
            matches: vec![],
        });
        let s = resolver(true, None).resolve(&v, false);
        assert_eq!(s.layout, HighlightLayout::Textual);
        assert_eq!(s.title, "Team");
        assert_eq!(s.subtitle.as_deref(), Some("4 members"));
    }

    #[test]
    fn test_member_group_graphic_highlights_topic() {
        let v = RenderVariant::Member(MemberVariant {
            contact: None,
            room: Some(room(RoomType::Group, Some("Team"))),
            matches: vec![MatchSpan { start: 0, end: 4 }],
        });
        let s = resolver(true, None).resolve(&v, false);
        assert_eq!(s.layout, HighlightLayout::Graphic);
        assert_eq!(s.title, "<strong>Team</strong>");
        assert!(s.subtitle.is_none());
    }

    #[test]
    fn test_member_contact_nickname_over_display_name() {
        let v = RenderVariant::Member(MemberVariant {
            contact: Some("u1".to_string()),
            room: None,
            matches: vec![],
        });
        let s = resolver(true, Some("Nick")).resolve(&v, false);
        assert_eq!(s.title, "Nick");
        assert_eq!(s.subtitle.as_deref(), Some("Last seen recently"));
        assert_eq!(s.icon, IconKind::Contact("u1".to_string()));
    }

    #[test]
    fn test_member_contact_falls_back_to_display_name() {
        let v = RenderVariant::Member(MemberVariant {
            contact: Some("u1".to_string()),
            room: None,
            matches: vec![],
        });
        let s = resolver(true, None).resolve(&v, false);
        assert_eq!(s.title, "Contact u1");
    }

    #[test]
    fn test_member_contact_graphic_vs_textual() {
        let graphic = resolver(true, Some("Nick")).resolve(
            &RenderVariant::Member(MemberVariant {
                contact: Some("u1".to_string()),
                room: None,
                matches: vec![MatchSpan { start: 0, end: 4 }],
            }),
            false,
        );
        assert_eq!(graphic.layout, HighlightLayout::Graphic);
        assert_eq!(graphic.title, "<strong>Nick</strong>");
        assert_eq!(graphic.subtitle.as_deref(), Some("Online"));

        let textual = resolver(true, Some("Nick")).resolve(
            &RenderVariant::Member(MemberVariant {
                contact: Some("u1".to_string()),
                room: None,
                matches: vec![],
            }),
            false,
        );
        assert_eq!(textual.layout, HighlightLayout::Textual);
        assert_eq!(textual.title, "Nick");
        assert_eq!(textual.subtitle.as_deref(), Some("Last seen recently"));
    }

    #[test]
    fn test_empty_first_query_has_call_to_action() {
        let s = resolver(true, None).resolve(&RenderVariant::Empty, true);
        assert_eq!(s.title, NO_RESULTS_LABEL);
        let cta = s.subtitle.unwrap();
        assert!(cta.contains("<a>"));
        assert!(cta.contains("</a>"));
        assert!(!cta.contains("[A]"));
        assert!(!cta.contains("[/A]"));
    }

    #[test]
    fn test_empty_refinement_has_no_call_to_action() {
        let s = resolver(true, None).resolve(&RenderVariant::Empty, false);
        assert!(s.subtitle.is_none());
        assert_eq!(s.icon, IconKind::NoResults);
        assert_eq!(s.layout, HighlightLayout::Textual);
    }
}
