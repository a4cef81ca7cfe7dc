//! The quest log - insertion-ordered, one quest per kind.

use thiserror::Error;

use super::{Quest, QuestId, QuestKind};

/// Errors raised while building a quest log.
#[derive(Debug, Error)]
pub enum QuestError {
    #[error("the quest '{}' is already in the log", .0.title())]
    Duplicate(QuestKind),
}

/// Ordered collection of quests.
///
/// Quests are never removed; their order is fixed at insertion. Each kind
/// appears at most once, which also keeps titles unique.
#[derive(Debug, Clone, Default)]
pub struct QuestLog {
    quests: Vec<Quest>,
}

impl QuestLog {
    /// Create an empty quest log.
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed set of quests a new game starts with.
    pub fn starter() -> Self {
        Self {
            quests: QuestKind::STARTERS.iter().map(|k| Quest::new(*k)).collect(),
        }
    }

    /// Append a quest. A second quest of the same kind is rejected.
    pub fn add(&mut self, quest: Quest) -> Result<QuestId, QuestError> {
        if self.quests.iter().any(|q| q.kind == quest.kind) {
            return Err(QuestError::Duplicate(quest.kind));
        }
        let id = quest.id;
        self.quests.push(quest);
        Ok(id)
    }

    /// Get an incomplete quest of the given kind.
    pub fn find_incomplete(&self, kind: QuestKind) -> Option<&Quest> {
        self.quests
            .iter()
            .find(|q| q.kind == kind && !q.is_completed())
    }

    /// Complete the incomplete quest of the given kind.
    ///
    /// Returns `false` when there is nothing left to complete.
    pub fn complete(&mut self, kind: QuestKind) -> bool {
        match self
            .quests
            .iter_mut()
            .find(|q| q.kind == kind && !q.is_completed())
        {
            Some(quest) => {
                log::info!("quest completed: {}", quest.title());
                quest.complete()
            }
            None => false,
        }
    }

    /// Incomplete quests in log order.
    pub fn active(&self) -> impl Iterator<Item = &Quest> {
        self.quests.iter().filter(|q| !q.is_completed())
    }

    /// Completed quests in log order.
    pub fn completed(&self) -> impl Iterator<Item = &Quest> {
        self.quests.iter().filter(|q| q.is_completed())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Quest> {
        self.quests.iter()
    }

    pub fn len(&self) -> usize {
        self.quests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }
}
