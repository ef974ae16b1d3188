//! The three fixed difficulty presets.

/// A named number range and attempt budget.
///
/// The lower bound of the range is always 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Difficulty {
    pub name: &'static str,
    /// Upper bound of the secret number, inclusive
    pub range: u32,
    pub attempt_budget: u32,
}

pub const EASY: Difficulty = Difficulty {
    name: "Easy",
    range: 50,
    attempt_budget: 10,
};

pub const NORMAL: Difficulty = Difficulty {
    name: "Normal",
    range: 100,
    attempt_budget: 7,
};

pub const HARD: Difficulty = Difficulty {
    name: "Hard",
    range: 500,
    attempt_budget: 5,
};

/// Lookup table over the presets, in menu order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DifficultyTable {
    presets: [Difficulty; 3],
}

impl DifficultyTable {
    pub const fn standard() -> Self {
        Self {
            presets: [EASY, NORMAL, HARD],
        }
    }

    /// Find a preset by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&Difficulty> {
        self.presets
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Difficulty> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self::standard()
    }
}
