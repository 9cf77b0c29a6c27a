use crate::models::Comment;
use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// Shape of a canonical date: `YYYY`, `YYYY-MM` or `YYYY-MM-DD`
static CANONICAL_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}(-\d{2}(-\d{2})?)?$").expect("canonical date regex"));

static NON_DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\D+").expect("non-digit run regex"));

/// Find the first TODO comment on a source line.
///
/// A marker is `//`, optional whitespace, the case-insensitive token
/// `todo`, then whitespace or a colon. Markers inside a quoted string are
/// skipped and scanning continues; the first non-quoted marker wins.
/// Returns the line suffix starting at the marker.
///
/// Quote state is tracked per line with one toggle per quote kind; a
/// quote character inside an active span of the other kind does not
/// toggle, and an unterminated quote simply leaves its toggle set for
/// the rest of the line.
pub fn extract_comment(line: &str) -> Option<&str> {
    let mut in_single = false;
    let mut in_double = false;

    for (index, symbol) in line.char_indices() {
        match symbol {
            '\'' if !in_double => in_single = !in_single,
            '"' if !in_single => in_double = !in_double,
            '/' if !in_single && !in_double && marker_starts_at(&line[index..]) => {
                return Some(&line[index..]);
            }
            _ => {}
        }
    }

    None
}

fn marker_starts_at(rest: &str) -> bool {
    let Some(after_slashes) = rest.strip_prefix("//") else {
        return false;
    };
    let mut chars = after_slashes.trim_start().chars();
    let token: String = chars.by_ref().take(4).collect();
    token.eq_ignore_ascii_case("todo")
        && matches!(chars.next(), Some(next) if next.is_whitespace() || next == ':')
}

/// Parse a raw comment (starting at `//`) into a structured [`Comment`].
///
/// The body after the `todo` token splits on `;` into at most three
/// fields. With fewer than two separators the whole body is the text and
/// user/date stay empty; otherwise the first two `;` delimit user and
/// date, with whitespace around each consumed separator stripped at the
/// boundary only, and the remainder is the text.
///
/// The extractor guarantees the input contains a `todo` token; a raw
/// comment without one is an internal invariant violation, not a user
/// error.
pub fn parse_comment(raw: &str, file_name: &str) -> Result<Comment> {
    let token_at = find_todo_token(raw)
        .ok_or_else(|| anyhow!("comment candidate without a TODO token: {raw:?}"))?;

    let mut body = raw[token_at + 4..].trim_start();
    if let Some(after_colon) = body.strip_prefix(':') {
        body = after_colon.trim_start();
    }

    let (user, date, text) = split_fields(body);
    let importance = text.matches('!').count();

    Ok(Comment {
        user: user.to_string(),
        date: normalize_date(date),
        text: text.to_string(),
        importance,
        file_name: file_name.to_string(),
    })
}

fn find_todo_token(raw: &str) -> Option<usize> {
    raw.as_bytes()
        .windows(4)
        .position(|window| window.eq_ignore_ascii_case(b"todo"))
}

fn split_fields(body: &str) -> (&str, &str, &str) {
    if body.matches(';').count() < 2 {
        return ("", "", body.trim());
    }

    let mut parts = body.splitn(3, ';');
    let user = parts.next().unwrap_or("").trim_end();
    let date = parts.next().unwrap_or("").trim();
    let text = parts.next().unwrap_or("").trim_start();
    (user, date, text)
}

/// Normalize a free-form date token into canonical form, or empty string.
///
/// Already-canonical, calendar-valid input is returned unchanged. Other
/// input is split on non-digit runs; with at most three parts and a
/// 4-digit final part (year-last styles like `20.12.2012`) the parts are
/// reversed and re-validated. Anything else is silently dropped.
pub fn normalize_date(candidate: &str) -> String {
    if is_canonical_date(candidate) {
        return candidate.to_string();
    }
    if candidate.is_empty() {
        return String::new();
    }

    let parts: Vec<&str> = NON_DIGIT_RUN.split(candidate).collect();
    if parts.len() <= 3 && parts.last().is_some_and(|year| year.len() == 4) {
        let rebuilt = parts
            .iter()
            .rev()
            .copied()
            .collect::<Vec<&str>>()
            .join("-");
        if is_canonical_date(&rebuilt) {
            return rebuilt;
        }
    }

    String::new()
}

/// Check for the canonical shape `YYYY[-MM[-DD]]` with calendar-valid
/// components.
pub fn is_canonical_date(candidate: &str) -> bool {
    if !CANONICAL_DATE.is_match(candidate) {
        return false;
    }

    let mut fields = candidate.splitn(3, '-');
    let year: i32 = fields.next().unwrap_or_default().parse().unwrap_or(0);
    match (fields.next(), fields.next()) {
        (None, _) => true,
        (Some(month), None) => matches!(month.parse::<u32>(), Ok(1..=12)),
        (Some(month), Some(day)) => {
            let month: u32 = month.parse().unwrap_or(0);
            let day: u32 = day.parse().unwrap_or(0);
            NaiveDate::from_ymd_opt(year, month, day).is_some()
        }
    }
}
