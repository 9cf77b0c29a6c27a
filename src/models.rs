use serde::{Deserialize, Serialize};

/// A single structured TODO comment extracted from a source file.
///
/// Comments are created once during the startup scan and never mutated
/// afterwards; the collection order follows file-enumeration order, then
/// line order within each file. That order is the default display order
/// and the tie-break for every sort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Author field of the comment, may be empty
    pub user: String,

    /// Canonical date (`YYYY`, `YYYY-MM` or `YYYY-MM-DD`), empty if the
    /// comment carried no recognizable date
    pub date: String,

    /// Free-text remainder of the comment
    pub text: String,

    /// Urgency score: count of `!` characters in `text`
    pub importance: usize,

    /// Base name of the file the comment was found in (not the full path)
    pub file_name: String,
}

impl Comment {
    pub fn is_important(&self) -> bool {
        self.importance > 0
    }
}
