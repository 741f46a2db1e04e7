use std::fmt;

use serde::{Deserialize, Serialize};

/// Task priority, ordered `Low < High < Fire`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Priority {
    #[default]
    Low,
    High,
    Fire,
}

impl Priority {
    /// All priorities in ascending order (the order the editor offers them)
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::High, Priority::Fire];

    pub fn name(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::High => "High",
            Priority::Fire => "Fire",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Priority::Low => "\u{1F3AF}",
            Priority::High => "\u{2757}",
            Priority::Fire => "\u{1F525}",
        }
    }

    /// Position in [`Priority::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Priority at `index`, clamped to the last one
    pub fn from_index(index: usize) -> Priority {
        Priority::ALL[index.min(Priority::ALL.len() - 1)]
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symbol(), self.name())
    }
}

impl From<Priority> for u8 {
    fn from(p: Priority) -> u8 {
        p as u8
    }
}

/// Rejected priority value from the persisted file
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid priority {0} (expected 0, 1 or 2)")]
pub struct InvalidPriority(pub u8);

impl TryFrom<u8> for Priority {
    type Error = InvalidPriority;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Priority::Low),
            1 => Ok(Priority::High),
            2 => Ok(Priority::Fire),
            other => Err(InvalidPriority(other)),
        }
    }
}

/// A single to-do item. Identity is positional: there is no ID field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub priority: Priority,
}

impl Task {
    /// Create a pending task. The name is stored trimmed.
    pub fn new(name: &str, priority: Priority) -> Self {
        Task {
            name: name.trim().to_string(),
            done: false,
            priority,
        }
    }
}
