//! Stage and score normalization.
//!
//! Readers hand over fields exactly as stored. This module turns them into
//! the values a player would see: per-stage counters describe the *end* of
//! each stage, PIV is at display precision, stored off-by-ones are removed,
//! and the replay is classified.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::DecodeResult;
use crate::format::layout::th08;
use crate::game::{DIFFICULTY_EXTRA, Game, ReplayType};
use crate::record::{ReplayParts, ReplayRecord, StageRecord};

/// Reader output, as stored in the file.
#[derive(Debug, Clone)]
pub(crate) struct RawReplay {
    pub game: Game,
    pub shot: String,
    pub difficulty: u8,
    pub score: u64,
    pub timestamp: DateTime<Utc>,
    pub name: String,
    pub slowdown: Option<f64>,
    pub spell_card_id: Option<u32>,
    pub stages: Vec<StageRecord>,
}

pub(crate) fn normalize(raw: RawReplay) -> DecodeResult<ReplayRecord> {
    let RawReplay {
        game,
        shot,
        difficulty,
        score,
        timestamp,
        name,
        slowdown,
        spell_card_id,
        mut stages,
    } = raw;

    let replay_type = classify(game, spell_card_id, &stages, difficulty);
    let route = infer_route(game, &stages);

    if scales_piv(game) {
        for stage in &mut stages {
            stage.piv = stage.piv.map(scale_piv);
        }
    }
    if game == Game::Th12 {
        for stage in &mut stages {
            stage.life_pieces = stage.life_pieces.map(|p| if p > 0 { p - 1 } else { p });
        }
    }
    if stores_stage_start(game) && replay_type != ReplayType::Versus {
        shift_stages(&mut stages, score);
    }

    debug!(
        "Normalized {game} replay: {replay_type}, {} stages, route {route:?}",
        stages.len()
    );

    ReplayRecord::new(ReplayParts {
        game,
        shot,
        difficulty,
        score,
        timestamp,
        name,
        replay_type,
        route,
        spell_card_id,
        slowdown,
        stages,
    })
}

/// Games whose stage records hold the state on *entering* the stage.
fn stores_stage_start(game: Game) -> bool {
    match game {
        Game::Th06
        | Game::Th07
        | Game::Th08
        | Game::Th09
        | Game::Th10
        | Game::Th11
        | Game::Th12
        | Game::Th128
        | Game::Th13
        | Game::Th14
        | Game::Th17
        | Game::Alco => true,
        Game::Th095 | Game::Th18 | Game::Th20 => false,
    }
}

fn scales_piv(game: Game) -> bool {
    match game {
        Game::Th10
        | Game::Th11
        | Game::Th12
        | Game::Th13
        | Game::Th14
        | Game::Th17
        | Game::Th18
        | Game::Th20 => true,
        Game::Th06
        | Game::Th07
        | Game::Th08
        | Game::Th09
        | Game::Th095
        | Game::Th128
        | Game::Alco => false,
    }
}

/// Stored PIV carries three extra digits of precision and is shown in
/// steps of ten.
pub(crate) fn scale_piv(raw: u64) -> u64 {
    raw / 1000 * 10
}

/// Moves each stage's counters onto the previous stage.
///
/// Stage N then reports the state on entering N+1, i.e. the end of N. The
/// last stage keeps only the final score. Fields describing the stage itself
/// (th09 opponent shot and CPU flags) stay where they are.
pub(crate) fn shift_stages(stages: &mut [StageRecord], final_score: u64) {
    for i in 0..stages.len() {
        let end_state = match stages.get(i + 1) {
            Some(next) => next.clone(),
            None => StageRecord {
                score: Some(final_score),
                ..Default::default()
            },
        };
        let current = &mut stages[i];
        *current = StageRecord {
            stage: current.stage,
            th09_p1_cpu: current.th09_p1_cpu,
            th09_p2_cpu: current.th09_p2_cpu,
            th09_p2_shot: current.th09_p2_shot.take(),
            ..end_state
        };
    }
}

/// th08 only: which final stage was reached.
pub(crate) fn infer_route(game: Game, stages: &[StageRecord]) -> Option<String> {
    if game != Game::Th08 {
        return None;
    }
    let reached = |number: u16| stages.iter().any(|s| s.stage == number);
    if reached(th08::FINAL_A) {
        Some("FinalA".to_string())
    } else if reached(th08::FINAL_B) {
        Some("FinalB".to_string())
    } else {
        None
    }
}

pub(crate) fn classify(
    game: Game,
    spell_card_id: Option<u32>,
    stages: &[StageRecord],
    difficulty: u8,
) -> ReplayType {
    if spell_card_id.is_some() {
        return ReplayType::SpellPractice;
    }
    if game == Game::Th09 && is_versus(stages) {
        return ReplayType::Versus;
    }
    if stages.len() == 1 && difficulty < DIFFICULTY_EXTRA {
        return ReplayType::StagePractice;
    }
    ReplayType::Regular
}

/// Neither side is driven by the CPU.
fn is_versus(stages: &[StageRecord]) -> bool {
    stages
        .first()
        .is_some_and(|s| s.th09_p1_cpu == Some(false) && s.th09_p2_cpu == Some(false))
}
