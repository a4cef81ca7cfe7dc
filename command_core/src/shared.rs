//! Lock-guarded session for hosts that drive the game from several threads.

use game_state::{GameState, RulesConfig, StatsSnapshot};
use parking_lot::Mutex;

use crate::interpreter::{CommandInterpreter, Outcome};

/// A game state and its interpreter behind a single lock.
///
/// The lock is held for exactly one `process` call.
pub struct SharedGame {
    interpreter: CommandInterpreter,
    state: Mutex<GameState>,
}

impl Default for SharedGame {
    fn default() -> Self {
        Self::new(RulesConfig::default())
    }
}

impl SharedGame {
    /// Start a fresh session with the given rules.
    pub fn new(config: RulesConfig) -> Self {
        let state = GameState::new(&config);
        Self {
            interpreter: CommandInterpreter::new(config),
            state: Mutex::new(state),
        }
    }

    /// Run one command under the lock.
    pub fn process(&self, raw: &str) -> Outcome {
        let mut state = self.state.lock();
        self.interpreter.process(&mut state, raw)
    }

    /// Current stats.
    pub fn snapshot(&self) -> StatsSnapshot {
        self.state.lock().snapshot()
    }

    /// Copy of history lines from index `from` onwards.
    pub fn history_since(&self, from: usize) -> Vec<String> {
        self.state.lock().history_since(from).to_vec()
    }

    /// Run `f` with read access to the state.
    pub fn with_state<R>(&self, f: impl FnOnce(&GameState) -> R) -> R {
        f(&self.state.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_shared_process() {
        let game = SharedGame::default();
        let mark = game.with_state(|s| s.history().len());

        assert_eq!(
            game.process("study"),
            Outcome::Handled(crate::Command::Study)
        );

        let snapshot = game.snapshot();
        assert_eq!(snapshot.stamina, 85);
        assert_eq!(snapshot.knowledge, 20);
        assert_eq!(game.history_since(mark)[0], "> study");
    }

    #[test]
    fn test_commands_from_threads_stay_framed() {
        let game = Arc::new(SharedGame::default());
        let mark = game.with_state(|s| s.history().len());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let game = Arc::clone(&game);
                thread::spawn(move || {
                    game.process("inventory");
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // Each inventory call appends echo + blank + 6 lines + blank
        let lines = game.history_since(mark);
        assert_eq!(lines.len(), 4 * 9);
        for chunk in lines.chunks(9) {
            assert_eq!(chunk[0], "> inventory");
            assert_eq!(chunk[8], "");
        }
    }
}
