//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;
use thrp_core::{ReplayRecord, ReplayType, StageRecord};

/// Format a decoded replay as a boxed multi-line block.
pub fn format_replay_console(record: &ReplayRecord) -> String {
    let mut output = String::new();
    let border = "━".repeat(50);
    let border_dim = border.dimmed();

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(
        output,
        "  {} {} [{}]",
        record.game().id().bold(),
        record.shot(),
        format_colored_difficulty(record.difficulty())
    );
    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(output, "  PLAYER : {}", record.name());
    let _ = writeln!(
        output,
        "  DATE   : {}",
        record.timestamp().format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(output, "  TYPE   : {}", format_replay_type(record));
    let _ = writeln!(output, "  SCORE  : {}", record.score().to_string().cyan());
    if let Some(route) = record.route() {
        let _ = writeln!(output, "  ROUTE  : {}", route);
    }
    if let Some(slowdown) = record.slowdown() {
        let _ = writeln!(output, "  SLOW   : {:.2}%", slowdown);
    }
    for stage in record.stages() {
        let _ = writeln!(output, "  {}", format_stage(stage));
    }
    let _ = write!(output, "{}", border_dim);

    output
}

/// One-line summary used by the scan command.
pub fn format_replay_summary(record: &ReplayRecord) -> String {
    format!(
        "{} {} {} {} ({}, {} stages)",
        record.game().id(),
        record.shot(),
        record.difficulty(),
        record.score(),
        record.replay_type(),
        record.stages().len()
    )
}

fn format_replay_type(record: &ReplayRecord) -> String {
    match (record.replay_type(), record.spell_card_id()) {
        (ReplayType::SpellPractice, Some(id)) => {
            format!("spell_practice #{}", id).purple().to_string()
        }
        (ReplayType::Versus, _) => record.replay_type().yellow().to_string(),
        (replay_type, _) => replay_type.to_string(),
    }
}

fn format_stage(stage: &StageRecord) -> String {
    let mut line = format!("STAGE {:>2}:", stage.stage);
    let counters = [
        ("score", stage.score.map(|v| v.to_string())),
        ("lives", stage.lives.map(|v| v.to_string())),
        ("bombs", stage.bombs.map(|v| v.to_string())),
        ("power", stage.power.map(|v| v.to_string())),
        ("piv", stage.piv.map(|v| v.to_string())),
        ("graze", stage.graze.map(|v| v.to_string())),
    ];
    for (label, value) in counters {
        if let Some(value) = value {
            let _ = write!(line, " {}={}", label.dimmed(), value);
        }
    }
    line
}

/// Format difficulty with color
fn format_colored_difficulty(difficulty: u8) -> String {
    match difficulty {
        0 => "Easy".green().to_string(),
        1 => "Normal".blue().to_string(),
        2 => "Hard".yellow().to_string(),
        3 => "Lunatic".red().to_string(),
        4 => "Extra".purple().to_string(),
        5 => "Phantasm".truecolor(255, 200, 0).to_string(),
        other => other.to_string(),
    }
}
