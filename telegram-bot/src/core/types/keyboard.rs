//! Reply keyboard shown under the input field.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplyKeyboard {
    /// Rows of button labels; pressing a button sends its label as text.
    Buttons(Vec<Vec<String>>),
    /// Hides the current keyboard.
    Remove,
}

impl ReplyKeyboard {
    /// One button per row.
    pub fn column(labels: &[&str]) -> Self {
        ReplyKeyboard::Buttons(labels.iter().map(|l| vec![l.to_string()]).collect())
    }

    /// All buttons in a single row.
    pub fn row(labels: &[&str]) -> Self {
        ReplyKeyboard::Buttons(vec![labels.iter().map(|l| l.to_string()).collect()])
    }
}
