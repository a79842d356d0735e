//! Normalized output of the decoder.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{DecodeError, DecodeResult};
use crate::game::{Game, ReplayType};

/// Counters for one stage of a replay.
///
/// `None` means the game does not track the value (or it is unknown for this
/// stage); `Some(0)` means it is tracked and zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StageRecord {
    pub stage: u16,
    pub score: Option<u64>,
    pub power: Option<u32>,
    pub piv: Option<u64>,
    pub graze: Option<u32>,
    pub point_items: Option<u32>,
    pub lives: Option<i32>,
    pub life_pieces: Option<i32>,
    pub bombs: Option<i32>,
    pub bomb_pieces: Option<i32>,
    pub th06_rank: Option<u32>,
    pub th07_cherry: Option<u32>,
    pub th07_cherrymax: Option<u32>,
    pub th09_p1_cpu: Option<bool>,
    pub th09_p2_cpu: Option<bool>,
    pub th09_p2_shot: Option<String>,
    pub th09_p2_score: Option<u64>,
    pub th128_motivation: Option<u32>,
    pub th128_perfect_freeze: Option<u32>,
    pub th128_frozen_area: Option<f64>,
    pub th13_trance: Option<u32>,
    pub th13_extends: Option<u32>,
    pub th17_hyper_fill: Option<u32>,
    pub th18_funds: Option<u32>,
}

impl StageRecord {
    pub fn new(stage: u16) -> Self {
        Self {
            stage,
            ..Default::default()
        }
    }
}

/// A decoded replay.
///
/// Only constructible through [`ReplayRecord::new`], which rejects records
/// whose stages are out of order or whose spell-practice fields disagree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayRecord {
    game: Game,
    shot: String,
    difficulty: u8,
    score: u64,
    timestamp: DateTime<Utc>,
    name: String,
    replay_type: ReplayType,
    route: Option<String>,
    spell_card_id: Option<u32>,
    slowdown: Option<f64>,
    stages: Vec<StageRecord>,
}

/// Field values for [`ReplayRecord::new`].
#[derive(Debug, Clone)]
pub(crate) struct ReplayParts {
    pub game: Game,
    pub shot: String,
    pub difficulty: u8,
    pub score: u64,
    pub timestamp: DateTime<Utc>,
    pub name: String,
    pub replay_type: ReplayType,
    pub route: Option<String>,
    pub spell_card_id: Option<u32>,
    pub slowdown: Option<f64>,
    pub stages: Vec<StageRecord>,
}

impl ReplayRecord {
    pub(crate) fn new(parts: ReplayParts) -> DecodeResult<Self> {
        if let Some(pair) = parts.stages.windows(2).find(|w| w[0].stage >= w[1].stage) {
            return Err(DecodeError::Invariant(format!(
                "stage {} follows stage {}",
                pair[1].stage, pair[0].stage
            )));
        }

        let is_spell = parts.replay_type == ReplayType::SpellPractice;
        if is_spell != parts.spell_card_id.is_some() {
            return Err(DecodeError::Invariant(format!(
                "{} replay with spell card id {:?}",
                parts.replay_type, parts.spell_card_id
            )));
        }
        if is_spell && !parts.stages.is_empty() {
            return Err(DecodeError::Invariant(format!(
                "spell practice replay with {} stages",
                parts.stages.len()
            )));
        }

        Ok(Self {
            game: parts.game,
            shot: parts.shot,
            difficulty: parts.difficulty,
            score: parts.score,
            timestamp: parts.timestamp,
            name: parts.name,
            replay_type: parts.replay_type,
            route: parts.route,
            spell_card_id: parts.spell_card_id,
            slowdown: parts.slowdown,
            stages: parts.stages,
        })
    }

    pub fn game(&self) -> Game {
        self.game
    }

    pub fn shot(&self) -> &str {
        &self.shot
    }

    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn replay_type(&self) -> ReplayType {
        self.replay_type
    }

    /// Final route, only set for th08.
    pub fn route(&self) -> Option<&str> {
        self.route.as_deref()
    }

    pub fn spell_card_id(&self) -> Option<u32> {
        self.spell_card_id
    }

    pub fn slowdown(&self) -> Option<f64> {
        self.slowdown
    }

    pub fn stages(&self) -> &[StageRecord] {
        &self.stages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn parts() -> ReplayParts {
        ReplayParts {
            game: Game::Th10,
            shot: "ReimuA".to_string(),
            difficulty: 1,
            score: 1000,
            timestamp: Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap(),
            name: "nrook".to_string(),
            replay_type: ReplayType::Regular,
            route: None,
            spell_card_id: None,
            slowdown: Some(0.0),
            stages: vec![StageRecord::new(1), StageRecord::new(2)],
        }
    }

    #[test]
    fn test_valid_record() {
        let record = ReplayRecord::new(parts()).unwrap();
        assert_eq!(record.game(), Game::Th10);
        assert_eq!(record.stages().len(), 2);
        assert_eq!(record.route(), None);
    }

    #[test]
    fn test_rejects_unordered_stages() {
        let mut p = parts();
        p.stages = vec![StageRecord::new(2), StageRecord::new(1)];
        assert!(matches!(
            ReplayRecord::new(p),
            Err(DecodeError::Invariant(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_stages() {
        let mut p = parts();
        p.stages = vec![StageRecord::new(3), StageRecord::new(3)];
        assert!(ReplayRecord::new(p).is_err());
    }

    #[test]
    fn test_spell_practice_requires_id_and_no_stages() {
        let mut p = parts();
        p.replay_type = ReplayType::SpellPractice;
        assert!(ReplayRecord::new(p.clone()).is_err());

        p.spell_card_id = Some(12);
        assert!(ReplayRecord::new(p.clone()).is_err());

        p.stages.clear();
        let record = ReplayRecord::new(p).unwrap();
        assert_eq!(record.spell_card_id(), Some(12));
    }

    #[test]
    fn test_spell_id_without_spell_practice_is_rejected() {
        let mut p = parts();
        p.spell_card_id = Some(3);
        assert!(ReplayRecord::new(p).is_err());
    }

    #[test]
    fn test_serializes_game_id() {
        let record = ReplayRecord::new(parts()).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["game"], "th10");
        assert_eq!(json["replay_type"], "regular");
        assert_eq!(json["stages"][0]["stage"], 1);
        assert!(json["stages"][0]["score"].is_null());
    }
}
