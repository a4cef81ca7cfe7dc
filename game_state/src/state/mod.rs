//! Game state - the central structure holding all session data.

use serde::{Deserialize, Serialize};

use crate::config::RulesConfig;
use crate::quests::QuestLog;

/// Lines every new session opens with.
pub const WELCOME_BANNER: [&str; 3] = [
    "Welcome to MedSchoolRPG. Your journey begins...",
    "",
    "Type 'help' to see available commands.",
];

/// Read-only view of the numeric stats for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub stamina: u32,
    pub max_stamina: u32,
    pub knowledge: u32,
}

/// The complete state of a session.
///
/// Fields are stored without validation; the interpreter keeps stamina inside
/// `0..=max_stamina`. The history log only ever grows.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current stamina, bounded by `max_stamina`.
    pub stamina: u32,

    /// Accumulated knowledge. No upper bound.
    pub knowledge: u32,

    /// Quests in the order they were handed out.
    pub quests: QuestLog,

    max_stamina: u32,

    /// Full transcript in display order.
    history: Vec<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&RulesConfig::default())
    }
}

impl GameState {
    /// Create a fresh session: starter quests, welcome banner, full stamina.
    pub fn new(config: &RulesConfig) -> Self {
        let mut state = Self::empty(config);
        state.quests = QuestLog::starter();
        state.append_lines(WELCOME_BANNER);
        state
    }

    /// Create a session with no quests and an empty history.
    pub fn empty(config: &RulesConfig) -> Self {
        Self {
            stamina: config.starting_stamina.min(config.max_stamina),
            knowledge: 0,
            quests: QuestLog::new(),
            max_stamina: config.max_stamina,
            history: Vec::new(),
        }
    }

    pub fn max_stamina(&self) -> u32 {
        self.max_stamina
    }

    /// Append one line to the history log.
    pub fn append_line(&mut self, text: impl Into<String>) {
        self.history.push(text.into());
    }

    /// Append several lines, preserving their order.
    pub fn append_lines<I>(&mut self, lines: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.history.extend(lines.into_iter().map(Into::into));
    }

    /// The transcript so far.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Lines appended since the log held `from` entries.
    pub fn history_since(&self, from: usize) -> &[String] {
        self.history.get(from..).unwrap_or(&[])
    }

    /// Snapshot of the numeric stats.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            stamina: self.stamina,
            max_stamina: self.max_stamina,
            knowledge: self.knowledge,
        }
    }
}
