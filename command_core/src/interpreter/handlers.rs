//! Command bodies. Each handler appends its narration and applies its effects.

use game_state::{GameState, QuestKind, RulesConfig};

use crate::commands::Command;

/// Signature shared by every command body.
pub type Handler = fn(&mut GameState, &RulesConfig);

/// Resolve the body for a command.
pub fn for_command(command: Command) -> Handler {
    match command {
        Command::Help => help,
        Command::Status => status,
        Command::Quests => quests,
        Command::FindCoffeeMug => find_coffee_mug,
        Command::Study => study,
        Command::Rest => rest,
        Command::Inventory => inventory,
    }
}

fn help(state: &mut GameState, _config: &RulesConfig) {
    state.append_line("Available Commands:");
    state.append_lines(
        Command::ALL
            .iter()
            .map(|c| format!("• {} - {}", c.name(), c.summary())),
    );
}

fn status(state: &mut GameState, config: &RulesConfig) {
    state.append_lines([
        "=== Current Status ===".to_string(),
        format!("Stamina: {}/{}", state.stamina, state.max_stamina()),
        format!("Knowledge: {}", state.knowledge),
    ]);

    if state.stamina < config.tired_threshold {
        state.append_line("");
        state.append_line("⚠️ You're getting tired! Consider resting.");
    }
}

fn quests(state: &mut GameState, _config: &RulesConfig) {
    let mut lines = vec!["=== Active Quests ===".to_string()];

    let mut any_active = false;
    for quest in state.quests.active() {
        any_active = true;
        lines.push(format!("• {}", quest.title()));
        lines.push(format!("  {}", quest.description()));
    }
    if !any_active {
        lines.push("No active quests available.".to_string());
    }

    let completed: Vec<_> = state
        .quests
        .completed()
        .map(|q| format!("✅ {}", q.title()))
        .collect();
    if !completed.is_empty() {
        lines.push(String::new());
        lines.push("=== Completed Quests ===".to_string());
        lines.extend(completed);
    }

    state.append_lines(lines);
}

fn find_coffee_mug(state: &mut GameState, config: &RulesConfig) {
    if state.quests.find_incomplete(QuestKind::CoffeeMug).is_none() {
        state.append_line(
            "You've already found the coffee mug, or that quest isn't available right now.",
        );
        return;
    }

    if state.stamina < config.coffee_mug_cost {
        state.append_lines([
            "You're too tired to search properly.",
            "Rest first to restore your stamina.",
        ]);
        return;
    }

    state.stamina -= config.coffee_mug_cost;
    state.quests.complete(QuestKind::CoffeeMug);
    state.append_lines([
        "☕ You found the coffee mug hidden behind some textbooks!".to_string(),
        "You feel slightly more awake.".to_string(),
        String::new(),
        format!("✅ Quest completed: {}", QuestKind::CoffeeMug.title()),
    ]);
}

fn study(state: &mut GameState, config: &RulesConfig) {
    if state.stamina < config.study_cost {
        state.append_lines([
            "You're too tired to focus on studying.",
            "Rest first to restore your stamina.",
        ]);
        return;
    }

    state.stamina -= config.study_cost;
    state.knowledge = state.knowledge.saturating_add(config.study_knowledge_gain);
    state.append_lines([
        "📚 You spent an hour studying medical textbooks.".to_string(),
        format!(
            "Your knowledge has increased by {} points!",
            config.study_knowledge_gain
        ),
        "You feel mentally sharper but physically tired.".to_string(),
    ]);

    // Studying doubles as the chart review
    if state.quests.complete(QuestKind::PatientCharts) {
        state.append_line("");
        state.append_line(format!(
            "✅ Quest completed: {}",
            QuestKind::PatientCharts.title()
        ));
    }
}

fn rest(state: &mut GameState, config: &RulesConfig) {
    let gain = config
        .rest_gain
        .min(state.max_stamina().saturating_sub(state.stamina));
    state.stamina += gain;

    state.append_lines([
        format!("😴 You take a well-deserved break and restore {gain} stamina."),
        format!("Current stamina: {}/{}", state.stamina, state.max_stamina()),
    ]);
}

fn inventory(state: &mut GameState, _config: &RulesConfig) {
    state.append_lines([
        "🎒 Your inventory:",
        "• Medical textbooks",
        "• Stethoscope",
        "• Notepad",
        "",
        "(Inventory system coming in future updates!)",
    ]);
}

/// Fallback for anything outside the vocabulary. Echoes the raw text back.
pub fn unrecognized(state: &mut GameState, raw: &str) {
    state.append_lines([
        format!("❓ I don't understand '{raw}'."),
        "Type 'help' to see available commands.".to_string(),
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_state::Quest;

    fn fresh() -> (GameState, RulesConfig) {
        let config = RulesConfig::default();
        (GameState::empty(&config), config)
    }

    fn fresh_with_quests() -> (GameState, RulesConfig) {
        let config = RulesConfig::default();
        (GameState::new(&config), config)
    }

    #[test]
    fn test_help_lists_every_command() {
        let (mut state, config) = fresh();
        help(&mut state, &config);

        assert_eq!(
            state.history(),
            &[
                "Available Commands:",
                "• status - View your current stamina and knowledge",
                "• quests - See your active quests",
                "• find coffee mug - Complete the coffee mug quest",
                "• study - Study to increase knowledge (costs stamina)",
                "• rest - Restore some stamina",
                "• inventory - Check your items (coming soon)",
                "• help - Show this help message",
            ]
        );
    }

    #[test]
    fn test_status_without_warning() {
        let (mut state, config) = fresh();
        state.stamina = 20;
        state.knowledge = 40;
        status(&mut state, &config);

        assert_eq!(
            state.history(),
            &["=== Current Status ===", "Stamina: 20/100", "Knowledge: 40"]
        );
    }

    #[test]
    fn test_status_warns_when_tired() {
        let (mut state, config) = fresh();
        state.stamina = 19;
        status(&mut state, &config);

        let lines = state.history();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "⚠️ You're getting tired! Consider resting.");
    }

    #[test]
    fn test_quests_lists_active() {
        let (mut state, config) = fresh_with_quests();
        let mark = state.history().len();
        quests(&mut state, &config);

        assert_eq!(
            state.history_since(mark),
            &[
                "=== Active Quests ===",
                "• Find the missing coffee mug",
                "  Search the cafeteria for your lost mug. -10 stamina.",
                "• Review patient charts",
                "  Increase your knowledge by studying medical records. -15 stamina.",
            ]
        );
    }

    #[test]
    fn test_quests_with_completed_section() {
        let (mut state, config) = fresh_with_quests();
        state.quests.complete(QuestKind::CoffeeMug);
        let mark = state.history().len();
        quests(&mut state, &config);

        assert_eq!(
            state.history_since(mark),
            &[
                "=== Active Quests ===",
                "• Review patient charts",
                "  Increase your knowledge by studying medical records. -15 stamina.",
                "",
                "=== Completed Quests ===",
                "✅ Find the missing coffee mug",
            ]
        );
    }

    #[test]
    fn test_quests_none_active() {
        let (mut state, config) = fresh_with_quests();
        state.quests.complete(QuestKind::CoffeeMug);
        state.quests.complete(QuestKind::PatientCharts);
        let mark = state.history().len();
        quests(&mut state, &config);

        let lines = state.history_since(mark);
        assert_eq!(lines[1], "No active quests available.");
        assert_eq!(lines[3], "=== Completed Quests ===");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_quests_empty_log() {
        let (mut state, config) = fresh();
        quests(&mut state, &config);

        assert_eq!(
            state.history(),
            &["=== Active Quests ===", "No active quests available."]
        );
    }

    #[test]
    fn test_find_coffee_mug_too_tired() {
        let (mut state, config) = fresh_with_quests();
        state.stamina = 9;
        find_coffee_mug(&mut state, &config);

        assert_eq!(state.stamina, 9);
        assert!(state.quests.find_incomplete(QuestKind::CoffeeMug).is_some());
        assert!(state
            .history()
            .contains(&"You're too tired to search properly.".to_string()));
    }

    #[test]
    fn test_find_coffee_mug_exact_cost() {
        let (mut state, config) = fresh_with_quests();
        state.stamina = 10;
        find_coffee_mug(&mut state, &config);

        assert_eq!(state.stamina, 0);
        assert!(state.quests.find_incomplete(QuestKind::CoffeeMug).is_none());
    }

    #[test]
    fn test_find_coffee_mug_without_quest() {
        let (mut state, config) = fresh();
        find_coffee_mug(&mut state, &config);

        assert_eq!(state.stamina, 100);
        assert_eq!(
            state.history(),
            &["You've already found the coffee mug, or that quest isn't available right now."]
        );
    }

    #[test]
    fn test_find_coffee_mug_ignores_other_quests() {
        let (mut state, config) = fresh();
        state.quests.add(Quest::new(QuestKind::PatientCharts)).unwrap();

        find_coffee_mug(&mut state, &config);
        find_coffee_mug(&mut state, &config);

        assert_eq!(state.stamina, 100);
        assert_eq!(state.quests.completed().count(), 0);
        assert!(!state
            .history()
            .iter()
            .any(|l| l.starts_with("✅ Quest completed")));
    }

    #[test]
    fn test_study_without_chart_quest() {
        let (mut state, config) = fresh();
        study(&mut state, &config);

        assert_eq!(state.stamina, 85);
        assert_eq!(state.knowledge, 20);
        assert_eq!(state.history().len(), 3);
    }

    #[test]
    fn test_study_exact_cost() {
        let (mut state, config) = fresh();
        state.stamina = 15;
        study(&mut state, &config);

        assert_eq!(state.stamina, 0);
        assert_eq!(state.knowledge, 20);
    }

    #[test]
    fn test_study_knowledge_saturates() {
        let (mut state, config) = fresh();
        state.knowledge = u32::MAX - 5;
        study(&mut state, &config);

        assert_eq!(state.knowledge, u32::MAX);
    }

    #[test]
    fn test_rest_full_gain() {
        let (mut state, config) = fresh();
        state.stamina = 40;
        rest(&mut state, &config);

        assert_eq!(state.stamina, 70);
        assert_eq!(
            state.history(),
            &[
                "😴 You take a well-deserved break and restore 30 stamina.",
                "Current stamina: 70/100",
            ]
        );
    }

    #[test]
    fn test_rest_at_full_stamina() {
        let (mut state, config) = fresh();
        rest(&mut state, &config);

        assert_eq!(state.stamina, 100);
        assert_eq!(
            state.history()[0],
            "😴 You take a well-deserved break and restore 0 stamina."
        );
    }

    #[test]
    fn test_inventory_is_static() {
        let (mut state, config) = fresh();
        inventory(&mut state, &config);

        assert_eq!(state.history().len(), 6);
        assert_eq!(state.history()[0], "🎒 Your inventory:");
        assert_eq!(state.stamina, 100);
    }

    #[test]
    fn test_unrecognized_echoes_raw_text() {
        let (mut state, _config) = fresh();
        unrecognized(&mut state, "Dance Wildly");

        assert_eq!(
            state.history(),
            &[
                "❓ I don't understand 'Dance Wildly'.",
                "Type 'help' to see available commands.",
            ]
        );
    }

    #[test]
    fn test_custom_rules_apply() {
        let config = RulesConfig {
            study_cost: 30,
            study_knowledge_gain: 5,
            ..Default::default()
        };
        let mut state = GameState::empty(&config);
        study(&mut state, &config);

        assert_eq!(state.stamina, 70);
        assert_eq!(state.knowledge, 5);
        assert_eq!(
            state.history()[1],
            "Your knowledge has increased by 5 points!"
        );
    }
}
