//! Magic-byte dispatch and shared helpers for the per-game readers.

pub(crate) mod layout;
mod legacy;
mod modern;
mod stage;
mod userdata;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use tracing::debug;

use crate::bytes::ByteBuffer;
use crate::error::{DecodeError, DecodeResult, Error, Result};
use crate::game::Game;
use crate::normalize::{RawReplay, normalize};
use crate::record::ReplayRecord;
use layout::{TextField, collision};

const MAGIC_LEN: usize = 4;

/// Decodes a complete replay file.
///
/// # Errors
///
/// [`Error::UnsupportedFormat`] when the magic is unknown (or the th13/th14
/// description is unrecognized); [`Error::CorruptReplay`] for any failure
/// after the game has been identified.
pub fn decode(bytes: &[u8]) -> Result<ReplayRecord> {
    let game = identify(bytes)?;
    debug!("Decoding {game} replay ({} bytes)", bytes.len());

    read(bytes, game)
        .and_then(normalize)
        .map_err(|e| Error::CorruptReplay {
            game,
            reason: e.to_string(),
        })
}

/// Maps the leading magic to a game.
fn identify(bytes: &[u8]) -> Result<Game> {
    let Some(magic) = bytes.get(..MAGIC_LEN) else {
        return Err(unsupported(bytes));
    };
    match magic {
        b"T6RP" => Ok(Game::Th06),
        b"T7RP" => Ok(Game::Th07),
        b"T8RP" => Ok(Game::Th08),
        b"T9RP" => Ok(Game::Th09),
        b"t95r" => Ok(Game::Th095),
        b"t10r" => Ok(Game::Th10),
        b"t11r" => Ok(Game::Th11),
        b"t12r" => Ok(Game::Th12),
        b"t128" => Ok(Game::Th128),
        b"t13r" => resolve_t13r(bytes),
        b"t17r" => Ok(Game::Th17),
        b"t18r" => Ok(Game::Th18),
        b"t20r" => Ok(Game::Th20),
        b"al1r" => Ok(Game::Alco),
        _ => Err(unsupported(bytes)),
    }
}

/// th13 and th14 share `t13r`; the USER description names the game.
///
/// An unreadable USER section makes the file a corrupt th13 replay.
fn resolve_t13r(bytes: &[u8]) -> Result<Game> {
    let user = modern::read_user_section(bytes).map_err(|e| Error::CorruptReplay {
        game: Game::Th13,
        reason: format!("cannot tell th13 from th14: {e}"),
    })?;
    let marker = user
        .description()
        .and_then(|d| d.chars().nth(collision::DESCRIPTION_INDEX));
    match marker {
        Some(collision::TH13_MARKER) => Ok(Game::Th13),
        Some(collision::TH14_MARKER) => Ok(Game::Th14),
        other => {
            debug!("t13r replay with description marker {other:?}");
            Err(unsupported(bytes))
        }
    }
}

fn unsupported(bytes: &[u8]) -> Error {
    let magic = &bytes[..bytes.len().min(MAGIC_LEN)];
    Error::UnsupportedFormat {
        magic: String::from_utf8_lossy(magic).into_owned(),
    }
}

fn read(bytes: &[u8], game: Game) -> DecodeResult<RawReplay> {
    match game {
        Game::Th06 => legacy::read_th06(bytes),
        Game::Th07 => legacy::read_th07(bytes),
        Game::Th08 => legacy::read_th08(bytes),
        Game::Th09 => legacy::read_th09(bytes),
        Game::Th095 => modern::read_th095(bytes),
        Game::Th10 => modern::read_modern(bytes, game, &layout::TH10),
        Game::Th11 => modern::read_modern(bytes, game, &layout::TH11),
        Game::Th12 => modern::read_modern(bytes, game, &layout::TH12),
        Game::Th128 => modern::read_modern(bytes, game, &layout::TH128),
        Game::Th13 => modern::read_modern(bytes, game, &layout::TH13),
        Game::Th14 => modern::read_modern(bytes, game, &layout::TH14),
        Game::Th17 => modern::read_modern(bytes, game, &layout::TH17),
        Game::Th18 => modern::read_modern(bytes, game, &layout::TH18),
        Game::Th20 => modern::read_modern(bytes, game, &layout::TH20),
        Game::Alco => modern::read_modern(bytes, game, &layout::ALCO),
    }
}

pub(crate) fn read_text(
    buf: &ByteBuffer,
    field: TextField,
    name: &'static str,
) -> DecodeResult<String> {
    buf.read_text_at(field.offset, field.len, field.encoding, name)
}

pub(crate) fn shot_name(game: Game, index: usize) -> DecodeResult<String> {
    game.shot(index).map(str::to_string).ok_or(DecodeError::invalid("shot", index))
}

/// Parses a date-only field as midnight UTC.
pub(crate) fn parse_date(text: &str, format: &str) -> DecodeResult<DateTime<Utc>> {
    NaiveDate::parse_from_str(text.trim(), format)
        .map(|date| date.and_time(NaiveTime::default()).and_utc())
        .map_err(|_| DecodeError::invalid("date", text))
}

/// Parses a date-time field with the first format that fits, as UTC.
pub(crate) fn parse_datetime(text: &str, formats: &[&str]) -> DecodeResult<DateTime<Utc>> {
    formats
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text.trim(), format).ok())
        .map(|datetime| datetime.and_utc())
        .ok_or(DecodeError::invalid("date", text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identify_simple_magics() {
        assert_eq!(identify(b"T6RP....").unwrap(), Game::Th06);
        assert_eq!(identify(b"t128").unwrap(), Game::Th128);
        assert_eq!(identify(b"t18r\x00").unwrap(), Game::Th18);
        assert_eq!(identify(b"t20r rest").unwrap(), Game::Th20);
        assert_eq!(identify(b"al1r").unwrap(), Game::Alco);
    }

    #[test]
    fn test_identify_rejects_short_and_unknown() {
        assert_eq!(
            identify(b"T6"),
            Err(Error::UnsupportedFormat {
                magic: "T6".to_string()
            })
        );
        assert_eq!(
            identify(b"t15r rest"),
            Err(Error::UnsupportedFormat {
                magic: "t15r".to_string()
            })
        );
        assert!(identify(b"").is_err());
    }

    #[test]
    fn test_t13r_without_user_section_is_corrupt() {
        let mut bytes = b"t13r".to_vec();
        bytes.resize(64, 0);
        assert!(matches!(
            identify(&bytes),
            Err(Error::CorruptReplay { game: Game::Th13, .. })
        ));
        assert!(matches!(
            identify(b"t13r\x00\x00"),
            Err(Error::CorruptReplay { game: Game::Th13, .. })
        ));
    }

    #[test]
    fn test_t13r_with_unknown_description_is_unsupported() {
        let text = "東方紺珠伝 リプレイファイル情報\r\n";
        let (encoded, _, _) = encoding_rs::SHIFT_JIS.encode(text);
        let mut bytes = b"t13r".to_vec();
        bytes.resize(16, 0);
        bytes[12..16].copy_from_slice(&16u32.to_le_bytes());
        bytes.extend_from_slice(b"USER");
        bytes.extend_from_slice(&((encoded.len() + 12) as u32).to_le_bytes());
        bytes.extend_from_slice(&[0; 4]);
        bytes.extend_from_slice(&encoded);
        assert!(matches!(identify(&bytes), Err(Error::UnsupportedFormat { .. })));
    }

    #[test]
    fn test_parse_date_formats() {
        let date = parse_date("08/16/03", "%m/%d/%y").unwrap();
        assert_eq!(date.to_rfc3339(), "2003-08-16T00:00:00+00:00");

        let formats = ["%Y/%m/%d %H:%M:%S", "%Y/%m/%d %H:%M"];
        let datetime = parse_datetime("2022/09/04 23:13", &formats).unwrap();
        assert_eq!(datetime.to_rfc3339(), "2022-09-04T23:13:00+00:00");

        assert!(parse_date("13/45/03", "%m/%d/%y").is_err());
    }

    #[test]
    fn test_shot_name_out_of_range() {
        assert_eq!(shot_name(Game::Th13, 3).unwrap(), "Youmu");
        assert!(shot_name(Game::Th13, 4).is_err());
    }

    #[test]
    fn test_decode_wraps_errors_with_game() {
        let err = decode(b"T7RP\x00\x00").unwrap_err();
        assert!(matches!(err, Error::CorruptReplay { game: Game::Th07, .. }));
    }
}
