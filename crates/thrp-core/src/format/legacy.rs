//! Readers for the rolling-cipher formats (th06 through th09).

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::layout::{
    LEGACY_USER_OFFSET, LegacyContainer, MONTH_DAY_FORMAT, StageLayout, UNDATED_YEAR, th06, th07,
    th08, th09,
};
use super::stage::read_stage;
use super::userdata::UserSection;
use super::{parse_date, parse_datetime, read_text, shot_name};
use crate::bytes::ByteBuffer;
use crate::cipher::rolling_subtract;
use crate::error::{DecodeError, DecodeResult};
use crate::game::{DIFFICULTY_PHANTASM, Game};
use crate::lzss;
use crate::normalize::RawReplay;
use crate::record::StageRecord;

/// Deciphers and decompresses a legacy file.
///
/// The result keeps the plain prefix, so every layout offset is absolute.
/// Anything past the cipher region (the USER section) is dropped; read it
/// from the raw bytes instead.
pub(crate) fn reconstruct(raw: &[u8], container: &LegacyContainer) -> DecodeResult<Vec<u8>> {
    let input = ByteBuffer::new(raw);
    let key = input.read_u8_at(container.key)?;
    let cipher_end = if container.cipher_ends_at_user {
        input.read_u32_at(LEGACY_USER_OFFSET)? as usize
    } else {
        raw.len()
    };
    if cipher_end < container.cipher_start || cipher_end > raw.len() {
        return Err(DecodeError::invalid("USER section offset", cipher_end));
    }

    let mut data = raw[..cipher_end].to_vec();
    rolling_subtract(&mut data[container.cipher_start..], key);

    let Some(compression) = container.compression else {
        return Ok(data);
    };
    let expected = ByteBuffer::new(&data).read_u32_at(compression.size_field)? as usize;
    if compression.header_len > data.len() {
        return Err(DecodeError::OutOfBounds {
            offset: compression.header_len,
            len: 0,
            size: data.len(),
        });
    }
    let body = lzss::decompress(&data[compression.header_len..], expected);
    if body.len() < expected {
        warn!("Decompressed {} of {} expected bytes", body.len(), expected);
    }
    debug!(
        "Legacy body: key {key:#04x}, {} compressed -> {} bytes",
        data.len() - compression.header_len,
        body.len()
    );

    data.truncate(compression.header_len);
    data.extend_from_slice(&body);
    Ok(data)
}

/// Reads a table of `count` u32 stage pointers; zero means "not played".
fn read_pointed_stages(
    buf: &ByteBuffer,
    pointers: usize,
    count: usize,
    layout: &StageLayout,
    stage_number: impl Fn(usize) -> u16,
) -> DecodeResult<Vec<StageRecord>> {
    let mut stages = Vec::new();
    for index in 0..count {
        let pointer = buf.read_u32_at(pointers + index * 4)? as usize;
        if pointer == 0 {
            continue;
        }
        stages.push(read_stage(buf, pointer, stage_number(index), layout)?);
    }
    Ok(stages)
}

fn month_day_date(text: &str) -> DecodeResult<DateTime<Utc>> {
    parse_date(&format!("{UNDATED_YEAR}/{text}"), &format!("%Y/{MONTH_DAY_FORMAT}"))
}

pub(crate) fn read_th06(raw: &[u8]) -> DecodeResult<RawReplay> {
    let data = reconstruct(raw, &th06::CONTAINER)?;
    let buf = ByteBuffer::new(&data);

    let shot = shot_name(Game::Th06, buf.read_u8_at(th06::SHOT)?.into())?;
    let date = read_text(&buf, th06::DATE, "date")?;
    let stages = read_pointed_stages(
        &buf,
        th06::STAGE_POINTERS,
        th06::STAGE_COUNT,
        &th06::STAGE,
        |index| index as u16 + 1,
    )?;

    Ok(RawReplay {
        game: Game::Th06,
        shot,
        difficulty: buf.read_u8_at(th06::DIFFICULTY)?,
        score: buf.read_u32_at(th06::SCORE)?.into(),
        timestamp: parse_date(&date, th06::DATE_FORMAT)?,
        name: read_text(&buf, th06::NAME, "name")?,
        slowdown: Some(buf.read_f32_at(th06::SLOWDOWN)?.into()),
        spell_card_id: None,
        stages,
    })
}

pub(crate) fn read_th07(raw: &[u8]) -> DecodeResult<RawReplay> {
    let data = reconstruct(raw, &th07::CONTAINER)?;
    let buf = ByteBuffer::new(&data);

    let difficulty = buf.read_u8_at(th07::DIFFICULTY)?;
    let date = read_text(&buf, th07::DATE, "date")?;
    let stages = read_pointed_stages(
        &buf,
        th07::STAGE_POINTERS,
        th07::STAGE_COUNT,
        &th07::STAGE,
        |index| match index {
            6 if difficulty == DIFFICULTY_PHANTASM => 8,
            _ => index as u16 + 1,
        },
    )?;

    Ok(RawReplay {
        game: Game::Th07,
        shot: shot_name(Game::Th07, buf.read_u8_at(th07::SHOT)?.into())?,
        difficulty,
        score: u64::from(buf.read_u32_at(th07::SCORE)?) * 10,
        timestamp: month_day_date(&date)?,
        name: read_text(&buf, th07::NAME, "name")?,
        slowdown: Some(buf.read_f32_at(th07::SLOWDOWN)?.into()),
        spell_card_id: None,
        stages,
    })
}

pub(crate) fn read_th08(raw: &[u8]) -> DecodeResult<RawReplay> {
    let data = reconstruct(raw, &th08::CONTAINER)?;
    let buf = ByteBuffer::new(&data);

    let spell = buf.read_u16_at(th08::SPELL_CARD_ID)?;
    let spell_card_id = (spell != th08::NO_SPELL_CARD).then_some(u32::from(spell));
    let stages = if spell_card_id.is_some() {
        Vec::new()
    } else {
        read_pointed_stages(
            &buf,
            th08::STAGE_POINTERS,
            th08::STAGE_COUNT,
            &th08::STAGE,
            |index| index as u16 + 1,
        )?
    };

    let timestamp = match th08_user_timestamp(raw) {
        Some(timestamp) => timestamp,
        None => month_day_date(&read_text(&buf, th08::DATE, "date")?)?,
    };

    Ok(RawReplay {
        game: Game::Th08,
        shot: shot_name(Game::Th08, buf.read_u8_at(th08::SHOT)?.into())?,
        difficulty: buf.read_u8_at(th08::DIFFICULTY)?,
        score: u64::from(buf.read_u32_at(th08::SCORE)?) * 10,
        timestamp,
        name: read_text(&buf, th08::NAME, "name")?,
        slowdown: Some(buf.read_f32_at(th08::SLOWDOWN)?.into()),
        spell_card_id,
        stages,
    })
}

/// The header only stores month and day; the USER section has the rest.
fn th08_user_timestamp(raw: &[u8]) -> Option<DateTime<Utc>> {
    let offset = ByteBuffer::new(raw).read_u32_at(LEGACY_USER_OFFSET).ok()? as usize;
    let user = match UserSection::parse(raw, offset) {
        Ok(user) => user,
        Err(e) => {
            debug!("th08 USER section unreadable, using header date: {e}");
            return None;
        }
    };
    let value = user.value(th08::USER_DATE_KEY)?;
    parse_datetime(value, &[th08::USER_DATE_FORMAT]).ok()
}

struct Th09Player {
    score: u64,
    shot: String,
    cpu: bool,
    lives: i32,
}

fn read_th09_player(buf: &ByteBuffer, base: usize) -> DecodeResult<Th09Player> {
    let record = buf.slice_at(base, th09::PLAYER_SIZE)?;
    let record = ByteBuffer::new(record);
    Ok(Th09Player {
        score: u64::from(record.read_u32_at(th09::PLAYER_SCORE)?) * th09::SCORE_MULTIPLIER,
        shot: shot_name(Game::Th09, record.read_u8_at(th09::PLAYER_SHOT)?.into())?,
        cpu: record.read_u8_at(th09::PLAYER_FLAGS)? & th09::CPU_FLAG != 0,
        lives: record.read_u8_at(th09::PLAYER_LIVES)?.into(),
    })
}

/// th09 stores one record per player per stage. Player 1 fills the regular
/// stage fields; player 2 fills the `th09_*` opponent fields.
pub(crate) fn read_th09(raw: &[u8]) -> DecodeResult<RawReplay> {
    let data = reconstruct(raw, &th09::CONTAINER)?;
    let buf = ByteBuffer::new(&data);

    let mut shot = None;
    let mut stages = Vec::new();
    for index in 0..th09::STAGE_COUNT {
        let p1_pointer = buf.read_u32_at(th09::STAGE_POINTERS + index * 4)? as usize;
        if p1_pointer == 0 {
            continue;
        }
        let p2_index = index + th09::PLAYER_2_POINTER_OFFSET;
        let p2_pointer = buf.read_u32_at(th09::STAGE_POINTERS + p2_index * 4)? as usize;

        let p1 = read_th09_player(&buf, p1_pointer)?;
        shot.get_or_insert_with(|| p1.shot.clone());

        let mut stage = StageRecord {
            score: Some(p1.score),
            lives: Some(p1.lives),
            th09_p1_cpu: Some(p1.cpu),
            ..StageRecord::new(index as u16 + 1)
        };
        if p2_pointer != 0 {
            let p2 = read_th09_player(&buf, p2_pointer)?;
            stage.th09_p2_score = Some(p2.score);
            stage.th09_p2_shot = Some(p2.shot);
            stage.th09_p2_cpu = Some(p2.cpu);
        }
        stages.push(stage);
    }

    let Some(shot) = shot else {
        return Err(DecodeError::invalid("stage pointers", "no stages recorded"));
    };
    let score = stages.last().and_then(|s| s.score).unwrap_or_default();
    let date = read_text(&buf, th09::DATE, "date")?;

    Ok(RawReplay {
        game: Game::Th09,
        shot,
        difficulty: buf.read_u8_at(th09::DIFFICULTY)?,
        score,
        timestamp: parse_date(&date, th09::DATE_FORMAT)?,
        name: read_text(&buf, th09::NAME, "name")?,
        slowdown: None,
        spell_card_id: None,
        stages,
    })
}
