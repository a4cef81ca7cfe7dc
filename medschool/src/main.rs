//! Terminal front-end: reads commands from stdin and prints the transcript.
//!
//! Usage: `medschool [RULES.toml]`

use anyhow::{Context, Result};
use command_core::{CommandInterpreter, ECHO_PREFIX};
use game_state::{GameState, RulesConfig, StatsSnapshot};
use std::io::{self, BufRead, Write};

/// Words the front-end handles itself.
const QUIT_WORDS: [&str; 2] = ["quit", "exit"];

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => RulesConfig::from_path(&path)
            .with_context(|| format!("loading rules from {path}"))?,
        None => RulesConfig::default(),
    };
    log::info!("starting session with {:?}", config);

    let interpreter = CommandInterpreter::new(config);
    let mut state = GameState::new(interpreter.config());

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    render_header(&mut stdout, state.snapshot())?;
    render_lines(&mut stdout, state.history())?;

    let mut rendered = state.history().len();
    loop {
        write!(stdout, "Enter your command here... ")?;
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim_end_matches(['\n', '\r']);
        if QUIT_WORDS.contains(&input.trim().to_lowercase().as_str()) {
            break;
        }

        interpreter.process(&mut state, input);

        let fresh = state.history_since(rendered);
        if fresh.is_empty() {
            continue;
        }
        render_lines(&mut stdout, fresh)?;
        render_header(&mut stdout, state.snapshot())?;
        rendered = state.history().len();
    }

    log::info!("session ended with {:?}", state.snapshot());
    Ok(())
}

fn render_header(out: &mut impl Write, stats: StatsSnapshot) -> io::Result<()> {
    writeln!(
        out,
        "[MedSchoolRPG] Stamina: {}/{}  Knowledge: {}",
        stats.stamina, stats.max_stamina, stats.knowledge
    )
}

fn render_lines(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        // Echoed input is indented so it stands apart from narration
        if line.starts_with(ECHO_PREFIX) {
            writeln!(out, "  {line}")?;
        } else {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}
