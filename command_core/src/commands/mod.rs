//! The command vocabulary.
//!
//! Commands are whole phrases matched exactly after normalization: no
//! abbreviations, synonyms or arguments.

/// Every command the interpreter recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Status,
    Quests,
    FindCoffeeMug,
    Study,
    Rest,
    Inventory,
    Help,
}

impl Command {
    /// The full vocabulary, in the order `help` lists it.
    pub const ALL: [Command; 7] = [
        Command::Status,
        Command::Quests,
        Command::FindCoffeeMug,
        Command::Study,
        Command::Rest,
        Command::Inventory,
        Command::Help,
    ];

    /// The phrase the player types.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Status => "status",
            Command::Quests => "quests",
            Command::FindCoffeeMug => "find coffee mug",
            Command::Study => "study",
            Command::Rest => "rest",
            Command::Inventory => "inventory",
            Command::Help => "help",
        }
    }

    /// One-line description shown by `help`.
    pub fn summary(&self) -> &'static str {
        match self {
            Command::Status => "View your current stamina and knowledge",
            Command::Quests => "See your active quests",
            Command::FindCoffeeMug => "Complete the coffee mug quest",
            Command::Study => "Study to increase knowledge (costs stamina)",
            Command::Rest => "Restore some stamina",
            Command::Inventory => "Check your items (coming soon)",
            Command::Help => "Show this help message",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Trim surrounding whitespace and lower-case.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
