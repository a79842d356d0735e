//! Readers for the block-shuffle container (th095, th10 onward).

use chrono::DateTime;
use tracing::{debug, warn};

use super::layout::{ContainerLayout, ModernLayout, STANDARD_CONTAINER, StageLayout, modern, th095};
use super::stage::{read_int, read_stage};
use super::userdata::UserSection;
use super::{parse_datetime, read_text, shot_name};
use crate::bytes::ByteBuffer;
use crate::error::{DecodeError, DecodeResult};
use crate::game::{DIFFICULTY_EXTRA, Game};
use crate::lzss;
use crate::normalize::RawReplay;
use crate::record::StageRecord;

/// Fixed fields at the start of every modern replay.
#[derive(Debug)]
pub(crate) struct ModernContainer<'a> {
    pub version: u32,
    pub user_offset: usize,
    pub body: &'a [u8],
    pub decompressed_size: usize,
}

impl<'a> ModernContainer<'a> {
    pub(crate) fn parse(raw: &'a [u8], layout: &ContainerLayout) -> DecodeResult<Self> {
        let buf = ByteBuffer::new(raw);
        let compressed_size = buf.read_u32_at(layout.compressed_size)? as usize;
        Ok(Self {
            version: buf.read_u32_at(modern::VERSION)?,
            user_offset: buf.read_u32_at(modern::USER_OFFSET)? as usize,
            body: buf.slice_at(layout.body, compressed_size)?,
            decompressed_size: buf.read_u32_at(layout.decompressed_size)? as usize,
        })
    }

    /// Undoes both block-shuffle passes, then LZSS.
    fn unpack(&self, layout: &ModernLayout) -> Vec<u8> {
        let mut body = self.body.to_vec();
        for pass in &layout.passes {
            pass.apply(&mut body);
        }
        let data = lzss::decompress(&body, self.decompressed_size);
        if data.len() < self.decompressed_size {
            warn!("Decompressed {} of {} expected bytes", data.len(), self.decompressed_size);
        }
        data
    }
}

/// Reads the USER section through the container header only.
pub(crate) fn read_user_section(raw: &[u8]) -> DecodeResult<UserSection> {
    let offset = ByteBuffer::new(raw).read_u32_at(modern::USER_OFFSET)? as usize;
    UserSection::parse(raw, offset)
}

pub(crate) fn read_modern(
    raw: &[u8],
    game: Game,
    layout: &ModernLayout,
) -> DecodeResult<RawReplay> {
    let container = ModernContainer::parse(raw, &layout.container)?;
    debug!(
        "{game} container: version {:#x}, {} compressed -> {} bytes",
        container.version,
        container.body.len(),
        container.decompressed_size
    );
    let data = container.unpack(layout);
    let buf = ByteBuffer::new(&data);

    let seconds = read_int(&buf, layout.timestamp, "timestamp")?;
    let timestamp =
        DateTime::from_timestamp(seconds, 0).ok_or(DecodeError::invalid("timestamp", seconds))?;

    let difficulty = match layout.difficulty {
        Some(offset) => buf.read_u32_at(offset)?,
        None => 0,
    };
    let difficulty =
        u8::try_from(difficulty).map_err(|_| DecodeError::invalid("difficulty", difficulty))?;

    let mut shot_index = match layout.shot {
        Some(offset) => buf.read_u32_at(offset)? as usize,
        None => 0,
    };
    if let Some((offset, per_character)) = layout.subshot {
        let subshot = buf.read_u32_at(offset)? as usize;
        if subshot >= per_character {
            return Err(DecodeError::invalid("subshot", subshot));
        }
        shot_index = shot_index
            .checked_mul(per_character)
            .and_then(|i| i.checked_add(subshot))
            .ok_or(DecodeError::invalid("shot", shot_index))?;
    }

    let spell_card_id = match layout.spell_card_id {
        Some(offset) => Some(buf.read_u32_at(offset)?).filter(|&id| id != modern::NO_SPELL_CARD),
        None => None,
    };

    let stages = match (spell_card_id, &layout.stage) {
        (None, Some(stage)) => read_modern_stages(&buf, layout, stage)?,
        _ => Vec::new(),
    };
    debug!("{game} body: {} stages", stages.len());

    Ok(RawReplay {
        game,
        shot: shot_name(game, shot_index)?,
        difficulty,
        score: u64::from(buf.read_u32_at(layout.score)?) * 10,
        timestamp,
        name: read_text(&buf, layout.name, "name")?,
        slowdown: Some(buf.read_f32_at(layout.slowdown)?.into()),
        spell_card_id,
        stages,
    })
}

/// Stage records are packed back to back, each followed by its input blob.
fn read_modern_stages(
    buf: &ByteBuffer,
    layout: &ModernLayout,
    stage: &StageLayout,
) -> DecodeResult<Vec<StageRecord>> {
    let count = buf.read_u32_at(layout.stage_count)?;
    let mut stages = Vec::new();
    let mut offset = layout.header_size;

    for _ in 0..count {
        let number = buf.read_u16_at(offset + modern::STAGE_NUMBER)?;
        stages.push(read_stage(buf, offset, number, stage)?);

        let blob = buf.read_u32_at(offset + modern::STAGE_BLOB_LEN)? as usize;
        offset = offset
            .checked_add(stage.size)
            .and_then(|o| o.checked_add(blob))
            .ok_or(DecodeError::invalid("stage input length", blob))?;
    }
    Ok(stages)
}

/// th095 has no stage data; every field comes from the USER section.
pub(crate) fn read_th095(raw: &[u8]) -> DecodeResult<RawReplay> {
    let container = ModernContainer::parse(raw, &STANDARD_CONTAINER)?;
    let user = UserSection::parse(raw, container.user_offset)?;
    let require = |key: &'static str| {
        user.value(key).ok_or(DecodeError::invalid(key, "missing from USER section"))
    };

    let level = require(th095::LEVEL_KEY)?;
    let level_number = if level == th095::EXTRA_LEVEL {
        th095::EXTRA_LEVEL_NUMBER
    } else {
        parse_number(level, th095::LEVEL_KEY)?
    };
    let scene: u32 = parse_number(require(th095::SCENE_KEY)?, th095::SCENE_KEY)?;
    if !(1..=th095::EXTRA_LEVEL_NUMBER).contains(&level_number)
        || !(1..=th095::SCENES_PER_LEVEL).contains(&scene)
    {
        return Err(DecodeError::invalid("scene", format!("{level}-{scene}")));
    }
    let spell_card_id = (level_number - 1) * th095::SCENES_PER_LEVEL + (scene - 1);

    let slowdown = user
        .value(th095::SLOWDOWN_KEY)
        .and_then(|value| value.parse::<f64>().ok());

    Ok(RawReplay {
        game: Game::Th095,
        shot: shot_name(Game::Th095, 0)?,
        difficulty: if level == th095::EXTRA_LEVEL {
            DIFFICULTY_EXTRA
        } else {
            0
        },
        score: parse_number(require(th095::SCORE_KEY)?, th095::SCORE_KEY)?,
        timestamp: parse_datetime(require(th095::DATE_KEY)?, th095::DATE_FORMATS)?,
        name: user.value(th095::NAME_KEY).unwrap_or_default().to_string(),
        slowdown,
        spell_card_id: Some(spell_card_id),
        stages: Vec::new(),
    })
}

fn parse_number<T: std::str::FromStr>(value: &str, field: &'static str) -> DecodeResult<T> {
    value.parse().map_err(|_| DecodeError::invalid(field, value))
}
