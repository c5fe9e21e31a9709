//! Small rendering helpers shared by the tables screen and the search dialog.

use ratatui::prelude::Rect;
use scraper::Html;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// What: Render catalog markup as plain text.
///
/// Inputs:
/// - `raw`: Catalog field that may contain HTML such as `<p>` separators
///
/// Output:
/// - Text content of the fragment, one space between text nodes.
///
/// Details:
/// - Catalog fields are untrusted; tags are dropped, never interpreted.
#[must_use]
pub fn markup_to_text(raw: &str) -> String {
    if !raw.contains('<') && !raw.contains('&') {
        return raw.trim().to_string();
    }
    let fragment = Html::parse_fragment(raw);
    fragment
        .root_element()
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// What: Short label for a selected major chip.
///
/// Output:
/// - Plain text of the segment after the last `<p>` separator.
#[must_use]
pub fn last_major_segment(major: &str) -> String {
    let lower = major.to_ascii_lowercase();
    let tail = lower
        .rfind("<p>")
        .map_or(major, |idx| &major[idx + "<p>".len()..]);
    markup_to_text(tail)
}

/// What: Cut `s` to at most `max` terminal columns, appending `…` when cut.
#[must_use]
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// What: Compress sorted slot ids into ranges, e.g. `[1,2,3,5]` → `1-3,5`.
#[must_use]
pub fn slot_summary(range: &[u8]) -> String {
    let mut sorted = range.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    let mut parts: Vec<String> = Vec::new();
    let mut iter = sorted.into_iter().peekable();
    while let Some(start) = iter.next() {
        let mut end = start;
        while iter.peek() == Some(&(end + 1)) {
            end += 1;
            iter.next();
        }
        if start == end {
            parts.push(start.to_string());
        } else {
            parts.push(format!("{start}-{end}"));
        }
    }
    parts.join(",")
}

/// What: Rect of at most `max_w` x `max_h` centered in `area`, leaving a margin.
#[must_use]
pub fn centered_rect(area: Rect, max_w: u16, max_h: u16) -> Rect {
    let w = area.width.saturating_sub(4).min(max_w);
    let h = area.height.saturating_sub(2).min(max_h);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

/// What: First index of a window of `width` items that keeps `cursor` in view.
#[must_use]
pub const fn window_start(cursor: usize, len: usize, width: usize) -> usize {
    if width == 0 || len <= width {
        return 0;
    }
    let max_start = len - width;
    let start = cursor.saturating_sub(width / 2);
    if start > max_start { max_start } else { start }
}
