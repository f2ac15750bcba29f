use serde::{Deserialize, Serialize};

/// A match span identifying a query hit in the text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchSpan {
    /// Byte offset of the match start.
    pub start: usize,
    /// Byte offset of the match end (exclusive).
    pub end: usize,
}

/// Wraps matched substrings in emphasis markup.
pub trait Highlight: Send + Sync {
    /// Wrap every span of `text` named in `spans` in emphasis markup.
    /// Spans are byte offsets into the unhighlighted `text`. With an empty
    /// span list the text passes through unmarked.
    fn highlight(&self, text: &str, spans: &[MatchSpan], escape_html: bool) -> String;
}

/// Default highlighter: `<strong>` markup with HTML escaping.
#[derive(Debug, Default)]
pub struct MarkupHighlighter;

impl Highlight for MarkupHighlighter {
    fn highlight(&self, text: &str, spans: &[MatchSpan], escape_html: bool) -> String {
        let spans = normalize_spans(text, spans);
        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;
        for span in &spans {
            push_segment(&mut out, &text[cursor..span.start], escape_html);
            out.push_str("<strong>");
            push_segment(&mut out, &text[span.start..span.end], escape_html);
            out.push_str("</strong>");
            cursor = span.end;
        }
        push_segment(&mut out, &text[cursor..], escape_html);
        out
    }
}

/// Sort spans by start position and apply the de-dup policy: on overlap the
/// earlier span wins and later overlapping spans are dropped. Spans that are
/// empty, out of range, or off `char` boundaries are dropped as well, so a
/// malformed span never corrupts output.
fn normalize_spans(text: &str, spans: &[MatchSpan]) -> Vec<MatchSpan> {
    let mut sorted: Vec<MatchSpan> = spans
        .iter()
        .filter(|s| {
            s.start < s.end
                && s.end <= text.len()
                && text.is_char_boundary(s.start)
                && text.is_char_boundary(s.end)
        })
        .cloned()
        .collect();
    sorted.sort_by_key(|s| s.start);

    let mut kept: Vec<MatchSpan> = Vec::with_capacity(sorted.len());
    for span in sorted {
        match kept.last() {
            Some(last) if span.start < last.end => {}
            _ => kept.push(span),
        }
    }
    kept
}

fn push_segment(out: &mut String, segment: &str, escape_html: bool) {
    if escape_html {
        for c in segment.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#39;"),
                _ => out.push(c),
            }
        }
    } else {
        out.push_str(segment);
    }
}
