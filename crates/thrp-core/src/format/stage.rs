//! Generic stage reader driven by [`StageLayout`] tables.

use crate::bytes::ByteBuffer;
use crate::error::{DecodeError, DecodeResult};
use crate::format::layout::{Field, Slot, StageLayout, Width};
use crate::record::StageRecord;

/// A raw field value before it is stored into a [`StageRecord`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Value {
    Int(i64),
    Float(f32),
}

/// Reads `field` relative to `base`.
pub(crate) fn read_field(buf: &ByteBuffer, base: usize, field: Field) -> DecodeResult<Value> {
    let offset = base
        .checked_add(field.offset)
        .ok_or(DecodeError::OutOfBounds {
            offset: base,
            len: field.offset,
            size: buf.len(),
        })?;
    let value = match field.width {
        Width::U8 => Value::Int(buf.read_u8_at(offset)?.into()),
        Width::I8 => Value::Int((buf.read_u8_at(offset)? as i8).into()),
        Width::U16 => Value::Int(buf.read_u16_at(offset)?.into()),
        Width::U32 => Value::Int(buf.read_u32_at(offset)?.into()),
        Width::U64 => {
            let raw = buf.read_u64_at(offset)?;
            Value::Int(i64::try_from(raw).map_err(|_| DecodeError::invalid("u64 field", raw))?)
        }
        Width::F32 => Value::Float(buf.read_f32_at(offset)?),
    };
    Ok(value)
}

/// Reads an integer field at an absolute offset.
pub(crate) fn read_int(buf: &ByteBuffer, field: Field, name: &'static str) -> DecodeResult<i64> {
    int(read_field(buf, 0, field)?, name)
}

/// Reads every field of `layout` from the record starting at `base`.
pub(crate) fn read_stage(
    buf: &ByteBuffer,
    base: usize,
    stage: u16,
    layout: &StageLayout,
) -> DecodeResult<StageRecord> {
    let mut record = StageRecord::new(stage);
    for &(slot, field) in layout.fields {
        let value = read_field(buf, base, field)?;
        store(&mut record, slot, value, layout.score_multiplier)?;
    }
    Ok(record)
}

fn int<T: TryFrom<i64>>(value: Value, field: &'static str) -> DecodeResult<T> {
    match value {
        Value::Int(raw) => T::try_from(raw).map_err(|_| DecodeError::invalid(field, raw)),
        Value::Float(raw) => Err(DecodeError::invalid(field, raw)),
    }
}

fn float(value: Value) -> f64 {
    match value {
        Value::Int(raw) => raw as f64,
        Value::Float(raw) => f64::from(raw),
    }
}

fn store(record: &mut StageRecord, slot: Slot, value: Value, multiplier: u64) -> DecodeResult<()> {
    match slot {
        Slot::Score => {
            let raw: u64 = int(value, "stage score")?;
            record.score = Some(raw * multiplier);
        }
        Slot::Power => record.power = Some(int(value, "power")?),
        Slot::Piv => record.piv = Some(int(value, "piv")?),
        Slot::Graze => record.graze = Some(int(value, "graze")?),
        Slot::PointItems => record.point_items = Some(int(value, "point items")?),
        Slot::Lives => record.lives = Some(int(value, "lives")?),
        Slot::LifePieces => record.life_pieces = Some(int(value, "life pieces")?),
        Slot::Bombs => record.bombs = Some(int(value, "bombs")?),
        Slot::BombPieces => record.bomb_pieces = Some(int(value, "bomb pieces")?),
        Slot::Th06Rank => record.th06_rank = Some(int(value, "rank")?),
        Slot::Th07Cherry => record.th07_cherry = Some(int(value, "cherry")?),
        Slot::Th07Cherrymax => record.th07_cherrymax = Some(int(value, "cherrymax")?),
        Slot::Th128Motivation => record.th128_motivation = Some(int(value, "motivation")?),
        Slot::Th128PerfectFreeze => {
            record.th128_perfect_freeze = Some(int(value, "perfect freeze")?)
        }
        Slot::Th128FrozenArea => record.th128_frozen_area = Some(float(value)),
        Slot::Th13Trance => record.th13_trance = Some(int(value, "trance")?),
        Slot::Th13Extends => record.th13_extends = Some(int(value, "extends")?),
        Slot::Th17HyperFill => record.th17_hyper_fill = Some(int(value, "hyper fill")?),
        Slot::Th18Funds => record.th18_funds = Some(int(value, "funds")?),
    }
    Ok(())
}
