//! Quest definitions and the ordered quest log.

mod quest_log;

pub use quest_log::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for quests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestId(pub Uuid);

impl QuestId {
    /// Create a new random quest ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for QuestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for QuestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The quests the game knows how to complete.
///
/// Lookups inside the engine go through this key; the title is what the
/// player sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestKind {
    CoffeeMug,
    PatientCharts,
}

impl QuestKind {
    /// Every starter quest, in log order.
    pub const STARTERS: [QuestKind; 2] = [QuestKind::CoffeeMug, QuestKind::PatientCharts];

    /// Player-facing title.
    pub fn title(&self) -> &'static str {
        match self {
            QuestKind::CoffeeMug => "Find the missing coffee mug",
            QuestKind::PatientCharts => "Review patient charts",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            QuestKind::CoffeeMug => "Search the cafeteria for your lost mug. -10 stamina.",
            QuestKind::PatientCharts => {
                "Increase your knowledge by studying medical records. -15 stamina."
            }
        }
    }
}

/// A named objective with a one-way incomplete -> completed transition.
///
/// Title and description come from the kind, so a kind always carries the
/// title the player sees.
#[derive(Debug, Clone)]
pub struct Quest {
    pub id: QuestId,
    pub kind: QuestKind,
    completed: bool,
}

impl Quest {
    /// Create an incomplete quest of the given kind.
    pub fn new(kind: QuestKind) -> Self {
        Self {
            id: QuestId::new(),
            kind,
            completed: false,
        }
    }

    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    pub fn description(&self) -> &'static str {
        self.kind.description()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Mark the quest completed. Returns `true` only on the transition.
    pub fn complete(&mut self) -> bool {
        !std::mem::replace(&mut self.completed, true)
    }
}
