use crate::models::Comment;

const USER_HEADER: &str = "user";
const DATE_HEADER: &str = "date";
const TEXT_HEADER: &str = "comment";
const FILE_NAME_HEADER: &str = "fileName";

// Content lengths at or past the cap pin the column to cap + 2
const USER_CAP: usize = 10;
const DATE_CAP: usize = 10;
const TEXT_CAP: usize = 50;
const FILE_NAME_CAP: usize = 15;

const ELLIPSIS: &str = "...";

/// Column widths for one render, derived from the selection being
/// displayed. The importance column is fixed; the others grow with their
/// content up to a hard cap. Recomputed on every render, never cached
/// across commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    pub user: usize,
    pub date: usize,
    pub text: usize,
    pub file_name: usize,
}

impl TableLayout {
    pub fn compute(comments: &[&Comment]) -> Self {
        Self {
            user: column_width(
                comments.iter().map(|c| c.user.as_str()),
                USER_HEADER,
                USER_CAP,
            ),
            date: column_width(
                comments.iter().map(|c| c.date.as_str()),
                DATE_HEADER,
                DATE_CAP,
            ),
            text: column_width(
                comments.iter().map(|c| c.text.as_str()),
                TEXT_HEADER,
                TEXT_CAP,
            ),
            file_name: column_width(
                comments.iter().map(|c| c.file_name.as_str()),
                FILE_NAME_HEADER,
                FILE_NAME_CAP,
            ),
        }
    }
}

fn column_width<'a>(contents: impl Iterator<Item = &'a str>, header: &str, cap: usize) -> usize {
    let longest = contents.map(|s| s.chars().count()).max().unwrap_or(0);
    (header.chars().count() + 2)
        .max(longest + 2)
        .min(cap + 2)
}

/// Render a selection as a text table with the fixed column order
/// importance, user, date, comment, fileName.
///
/// Emits the header row, a dash rule of the header's length, one row per
/// comment (the importance cell shows `!` or blank) and, only when at
/// least one data row was emitted, a trailing rule identical to the
/// first.
pub fn render(comments: &[&Comment]) -> String {
    let layout = TableLayout::compute(comments);

    let mut lines = Vec::with_capacity(comments.len() + 3);
    lines.push(format_row(
        '!',
        USER_HEADER,
        DATE_HEADER,
        TEXT_HEADER,
        FILE_NAME_HEADER,
        &layout,
    ));
    let rule = "-".repeat(lines[0].chars().count());
    lines.push(rule.clone());

    for comment in comments {
        lines.push(format_row(
            if comment.is_important() { '!' } else { ' ' },
            &shorten(&comment.user, layout.user),
            &shorten(&comment.date, layout.date),
            &shorten(&comment.text, layout.text),
            &shorten(&comment.file_name, layout.file_name),
            &layout,
        ));
    }

    if !comments.is_empty() {
        lines.push(rule);
    }

    let mut rendered = lines.join("\n");
    rendered.push('\n');
    rendered
}

fn format_row(
    importance: char,
    user: &str,
    date: &str,
    text: &str,
    file_name: &str,
    layout: &TableLayout,
) -> String {
    format!(
        "  {importance}  |  {user:<user_width$}|  {date:<date_width$}|  {text:<text_width$}|  {file_name:<file_width$}",
        user_width = layout.user,
        date_width = layout.date,
        text_width = layout.text,
        file_width = layout.file_name,
    )
}

// Cells longer than their column keep width - 3 characters plus an
// ellipsis, so a truncated cell exactly fills the column.
fn shorten(content: &str, width: usize) -> String {
    if content.chars().count() <= width {
        return content.to_string();
    }
    let kept: String = content.chars().take(width - ELLIPSIS.len()).collect();
    format!("{kept}{ELLIPSIS}")
}
