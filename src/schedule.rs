//! Schedule-string parsing and the fixed day/time vocabulary.
//!
//! Catalog schedules look like `월1~2(D-201)<p>수3~4(D-201)`: one meeting per
//! `<p>`-separated segment, each a day label, a slot list, and an optional
//! room in parentheses. Short forms such as `mon3,4` are accepted too.

use crate::state::ParsedScheduleEntry;

/// Day labels offered by the day filter, in week order.
pub const DAY_LABELS: [&str; 6] = ["월", "화", "수", "목", "금", "토"];

/// Credit values offered by the credits selector.
pub const CREDIT_CHOICES: [u8; 3] = [1, 2, 3];

/// Grade levels offered by the grade checkboxes.
pub const GRADE_CHOICES: [u8; 4] = [1, 2, 3, 4];

/// Time slots (id, clock range) offered by the time filter.
pub const TIME_SLOTS: [(u8, &str); 24] = [
    (1, "09:00~09:30"),
    (2, "09:30~10:00"),
    (3, "10:00~10:30"),
    (4, "10:30~11:00"),
    (5, "11:00~11:30"),
    (6, "11:30~12:00"),
    (7, "12:00~12:30"),
    (8, "12:30~13:00"),
    (9, "13:00~13:30"),
    (10, "13:30~14:00"),
    (11, "14:00~14:30"),
    (12, "14:30~15:00"),
    (13, "15:00~15:30"),
    (14, "15:30~16:00"),
    (15, "16:00~16:30"),
    (16, "16:30~17:00"),
    (17, "17:00~17:30"),
    (18, "17:30~18:00"),
    (19, "18:00~18:50"),
    (20, "18:55~19:45"),
    (21, "19:50~20:40"),
    (22, "20:45~21:35"),
    (23, "21:40~22:30"),
    (24, "22:35~23:25"),
];

/// What: Look up the clock label of a time slot.
///
/// Inputs:
/// - `id`: Time-slot id (1-based)
///
/// Output:
/// - `Some(label)` for a known slot; `None` otherwise.
#[must_use]
pub fn time_slot_label(id: u8) -> Option<&'static str> {
    TIME_SLOTS
        .iter()
        .find(|(slot, _)| *slot == id)
        .map(|(_, label)| *label)
}

/// What: Parse a raw schedule description into meeting entries.
///
/// Inputs:
/// - `raw`: Schedule text as found in the catalog (may be empty)
///
/// Output:
/// - Entries in source order; empty when nothing parseable is present.
///
/// Details:
/// - Never fails: segments without a day label or without any slot are skipped.
/// - `a~b` expands to the inclusive range; `,` separates single slots or ranges.
/// - Duplicate slots within one segment are collapsed.
#[must_use]
pub fn parse_schedule(raw: &str) -> Vec<ParsedScheduleEntry> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.replace("<P>", "<p>")
        .split("<p>")
        .filter_map(parse_segment)
        .collect()
}

/// What: Parse one `<p>`-separated meeting segment.
///
/// Output:
/// - `None` when the segment lacks a day label or a slot.
fn parse_segment(segment: &str) -> Option<ParsedScheduleEntry> {
    let segment = segment.trim();
    let digit_at = segment.find(|c: char| c.is_ascii_digit())?;
    let day = segment[..digit_at].trim();
    if day.is_empty() {
        return None;
    }
    let rest = &segment[digit_at..];
    let slots_end = rest
        .find(|c: char| !(c.is_ascii_digit() || c == ',' || c == '~' || c.is_whitespace()))
        .unwrap_or(rest.len());
    let range = parse_slots(&rest[..slots_end]);
    if range.is_empty() {
        return None;
    }
    Some(ParsedScheduleEntry {
        day: day.to_string(),
        range,
        room: parse_room(&rest[slots_end..]),
    })
}

/// What: Expand a slot list such as `1~3,5` into `[1, 2, 3, 5]`.
fn parse_slots(slots: &str) -> Vec<u8> {
    let mut out: Vec<u8> = Vec::new();
    for part in slots.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if let Some((a, b)) = part.split_once('~') {
            let (Ok(start), Ok(end)) = (a.trim().parse::<u8>(), b.trim().parse::<u8>()) else {
                continue;
            };
            if start > end {
                continue;
            }
            for slot in start..=end {
                if !out.contains(&slot) {
                    out.push(slot);
                }
            }
        } else if let Ok(slot) = part.parse::<u8>()
            && !out.contains(&slot)
        {
            out.push(slot);
        }
    }
    out
}

/// What: Extract the text between the first `(` and the following `)`.
fn parse_room(tail: &str) -> Option<String> {
    let open = tail.find('(')?;
    let inner = &tail[open + 1..];
    let close = inner.find(')').unwrap_or(inner.len());
    let room = inner[..close].trim();
    if room.is_empty() {
        None
    } else {
        Some(room.to_string())
    }
}
