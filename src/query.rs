use crate::models::Comment;
use crate::parser::is_canonical_date;
use thiserror::Error;

/// Why an input line failed to resolve into a command. Every variant is
/// surfaced to the user as the same fixed `wrong command` message; the
/// distinction exists for callers and tests.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command")]
    UnknownCommand,

    #[error("wrong number of arguments")]
    WrongArity,

    #[error("unknown sort key")]
    UnknownSortKey,

    #[error("invalid date argument")]
    InvalidDate,
}

/// The closed set of session commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Important,
    User(String),
    Date(String),
    Sort(SortKey),
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    User,
    Importance,
    Date,
}

/// Resolve one input line into a [`Command`].
///
/// The line splits at the first space into a command name and a single
/// argument. `exit`, `show` and `important` take no argument; `user`
/// takes a non-empty prefix; `date` takes a canonical-shaped,
/// calendar-valid date; `sort` takes one of `user`, `importance`, `date`.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (name, arg) = match line.split_once(' ') {
        Some((name, arg)) => (name, Some(arg.trim())),
        None => (line, None),
    };

    match (name, arg) {
        ("exit", None) => Ok(Command::Exit),
        ("show", None) => Ok(Command::Show),
        ("important", None) => Ok(Command::Important),
        ("exit" | "show" | "important", Some(_)) => Err(CommandError::WrongArity),
        ("user", Some(prefix)) if !prefix.is_empty() => Ok(Command::User(prefix.to_string())),
        ("date", Some(reference)) if !reference.is_empty() => {
            if is_canonical_date(reference) {
                Ok(Command::Date(reference.to_string()))
            } else {
                Err(CommandError::InvalidDate)
            }
        }
        ("sort", Some("user")) => Ok(Command::Sort(SortKey::User)),
        ("sort", Some("importance")) => Ok(Command::Sort(SortKey::Importance)),
        ("sort", Some("date")) => Ok(Command::Sort(SortKey::Date)),
        ("sort", Some(key)) if !key.is_empty() => Err(CommandError::UnknownSortKey),
        ("user" | "date" | "sort", _) => Err(CommandError::WrongArity),
        _ => Err(CommandError::UnknownCommand),
    }
}

/// Apply a command to the full collection, producing a fresh ordered
/// selection. The collection itself is never mutated; sorts operate on a
/// copy and are stable, so ties keep their scan order.
pub fn apply<'a>(command: &Command, comments: &'a [Comment]) -> Vec<&'a Comment> {
    match command {
        Command::Show | Command::Exit => comments.iter().collect(),
        Command::Important => comments.iter().filter(|c| c.is_important()).collect(),
        Command::User(prefix) => {
            let prefix = prefix.to_lowercase();
            comments
                .iter()
                .filter(|c| c.user.to_lowercase().starts_with(&prefix))
                .collect()
        }
        Command::Date(reference) => comments
            .iter()
            .filter(|c| truncated(&c.date, reference.len()) >= reference.as_str())
            .collect(),
        Command::Sort(key) => sorted(comments, *key),
    }
}

// Canonical dates are ASCII, so byte truncation is safe; dates shorter
// than the reference compare as-is (and lose, being a strict prefix).
fn truncated(date: &str, len: usize) -> &str {
    &date[..date.len().min(len)]
}

fn sorted<'a>(comments: &'a [Comment], key: SortKey) -> Vec<&'a Comment> {
    let mut selection: Vec<&Comment> = comments.iter().collect();
    match key {
        SortKey::User => {
            // Anonymous comments go after all named ones, both groups in
            // scan order
            let (mut named, anonymous): (Vec<&Comment>, Vec<&Comment>) =
                selection.into_iter().partition(|c| !c.user.is_empty());
            named.sort_by_key(|c| c.user.to_lowercase());
            named.extend(anonymous);
            selection = named;
        }
        SortKey::Importance => selection.sort_by(|a, b| b.importance.cmp(&a.importance)),
        SortKey::Date => selection.sort_by(|a, b| b.date.cmp(&a.date)),
    }
    selection
}
