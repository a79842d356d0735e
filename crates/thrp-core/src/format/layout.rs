//! Binary layout tables for every supported replay format
//!
//! All offsets are little-endian and absolute within the buffer they apply
//! to: the reconstructed file for legacy formats, the decompressed body for
//! modern ones, or the start of one stage record for stage tables.
//!
//! Stage fields are plain data ([`StageLayout`]) consumed by the generic
//! reader in [`super::stage`], so adding a counter to a game is a one-line
//! table change.
//!
//! # Container Overview
//!
//! ```text
//! Legacy (th06-th09)                 Modern (th095, th10-th18, alco)
//! ─────────────────────────          ─────────────────────────────────
//! 0x00  magic                        0x00  magic
//! ...   plain header                 0x04  version
//! key   rolling-cipher key           0x0C  USER section offset
//! ...   rolling-cipher region        0x1C  compressed size
//!       (LZSS tail from th07)        0x20  decompressed size
//! [USER section, th08/th09]          0x24  block-shuffled LZSS body
//!                                    [USER section]
//! ```
//!
//! th20 keeps the modern container but moves the sizes to 0x28/0x2C and the
//! body to 0x30.

use crate::bytes::TextEncoding;
use crate::cipher::BlockCipher;

/// Storage width of a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Width {
    U8,
    I8,
    U16,
    U32,
    U64,
    F32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Field {
    pub offset: usize,
    pub width: Width,
}

pub(crate) const fn u8_at(offset: usize) -> Field {
    Field {
        offset,
        width: Width::U8,
    }
}

pub(crate) const fn i8_at(offset: usize) -> Field {
    Field {
        offset,
        width: Width::I8,
    }
}

pub(crate) const fn u16_at(offset: usize) -> Field {
    Field {
        offset,
        width: Width::U16,
    }
}

pub(crate) const fn u32_at(offset: usize) -> Field {
    Field {
        offset,
        width: Width::U32,
    }
}

pub(crate) const fn u64_at(offset: usize) -> Field {
    Field {
        offset,
        width: Width::U64,
    }
}

pub(crate) const fn f32_at(offset: usize) -> Field {
    Field {
        offset,
        width: Width::F32,
    }
}

/// Fixed-width text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TextField {
    pub offset: usize,
    pub len: usize,
    pub encoding: TextEncoding,
}

/// [`crate::StageRecord`] member a stage field is stored into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    Score,
    Power,
    Piv,
    Graze,
    PointItems,
    Lives,
    LifePieces,
    Bombs,
    BombPieces,
    Th06Rank,
    Th07Cherry,
    Th07Cherrymax,
    Th128Motivation,
    Th128PerfectFreeze,
    Th128FrozenArea,
    Th13Trance,
    Th13Extends,
    Th17HyperFill,
    Th18Funds,
}

/// Schema of one per-stage record.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StageLayout {
    /// Fixed part of the record. Modern records are followed by an input
    /// blob whose length is stored at [`modern::STAGE_BLOB_LEN`].
    pub size: usize,
    /// Applied to [`Slot::Score`] (games storing score / 10 use 10).
    pub score_multiplier: u64,
    pub fields: &'static [(Slot, Field)],
}

// ============================================================================
// Legacy formats
// ============================================================================

/// How a legacy file is deciphered and decompressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LegacyContainer {
    /// Offset of the rolling-cipher key byte.
    pub key: usize,
    pub cipher_start: usize,
    /// Cipher region ends at the USER section instead of at end of file.
    pub cipher_ends_at_user: bool,
    pub compression: Option<Compression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Compression {
    /// Bytes before this offset are stored plain; the rest is LZSS.
    pub header_len: usize,
    /// Offset of the u32 decompressed size.
    pub size_field: usize,
}

/// Offset of the u32 USER section pointer in th08/th09 files.
pub(crate) const LEGACY_USER_OFFSET: usize = 12;

/// th07 and th08 header dates carry no year.
pub(crate) const MONTH_DAY_FORMAT: &str = "%m/%d";
/// Placeholder year for those dates. Must be a leap year so `02/29` parses.
pub(crate) const UNDATED_YEAR: i32 = 1904;

/// th06 (Embodiment of Scarlet Devil)
///
/// ```text
/// Offset   Field              Size    Notes
/// ──────────────────────────────────────────────────────
/// 0x06     Shot               1
/// 0x07     Difficulty         1
/// 0x0E     Cipher key         1
/// 0x10     Date               9       ASCII "%m/%d/%y"
/// 0x19     Name               9       Shift-JIS
/// 0x24     Score              4       stored as displayed
/// 0x2C     Slowdown           4       f32
/// 0x34     Stage pointers     7 x 4
/// ```
pub(crate) mod th06 {
    use super::*;

    pub const CONTAINER: LegacyContainer = LegacyContainer {
        key: 14,
        cipher_start: 15,
        cipher_ends_at_user: false,
        compression: None,
    };

    pub const SHOT: usize = 6;
    pub const DIFFICULTY: usize = 7;
    pub const DATE: TextField = TextField {
        offset: 16,
        len: 9,
        encoding: TextEncoding::Ascii,
    };
    pub const DATE_FORMAT: &str = "%m/%d/%y";
    pub const NAME: TextField = TextField {
        offset: 25,
        len: 9,
        encoding: TextEncoding::ShiftJis,
    };
    pub const SCORE: usize = 36;
    pub const SLOWDOWN: usize = 44;
    pub const STAGE_POINTERS: usize = 52;
    pub const STAGE_COUNT: usize = 7;

    pub const STAGE: StageLayout = StageLayout {
        size: 12,
        score_multiplier: 1,
        fields: &[
            (Slot::Score, u32_at(0)),
            (Slot::Power, u8_at(8)),
            (Slot::Lives, i8_at(9)),
            (Slot::Bombs, i8_at(10)),
            (Slot::Th06Rank, u8_at(11)),
        ],
    };
}

/// th07 (Perfect Cherry Blossom)
///
/// ```text
/// Offset   Field              Size    Notes
/// ──────────────────────────────────────────────────────
/// 0x0D     Cipher key         1
/// 0x18     Decompressed size  4
/// 0x1C     Stage pointers     7 x 4
/// 0x54     (LZSS body starts)
/// 0x56     Shot               1
/// 0x57     Difficulty         1
/// 0x58     Date               6       ASCII "%m/%d"
/// 0x5E     Name               9       Shift-JIS
/// 0x6C     Score              4       score / 10
/// 0xCC     Slowdown           4       f32
/// ```
pub(crate) mod th07 {
    use super::*;

    pub const CONTAINER: LegacyContainer = LegacyContainer {
        key: 13,
        cipher_start: 16,
        cipher_ends_at_user: false,
        compression: Some(Compression {
            header_len: 84,
            size_field: 24,
        }),
    };

    pub const STAGE_POINTERS: usize = 28;
    pub const STAGE_COUNT: usize = 7;
    pub const SHOT: usize = 86;
    pub const DIFFICULTY: usize = 87;
    pub const DATE: TextField = TextField {
        offset: 88,
        len: 6,
        encoding: TextEncoding::Ascii,
    };
    pub const NAME: TextField = TextField {
        offset: 94,
        len: 9,
        encoding: TextEncoding::ShiftJis,
    };
    pub const SCORE: usize = 108;
    pub const SLOWDOWN: usize = 204;

    pub const STAGE: StageLayout = StageLayout {
        size: 40,
        score_multiplier: 10,
        fields: &[
            (Slot::Score, u32_at(0)),
            (Slot::PointItems, u32_at(4)),
            (Slot::Piv, u32_at(8)),
            (Slot::Th07Cherrymax, u32_at(12)),
            (Slot::Th07Cherry, u32_at(16)),
            (Slot::Graze, u32_at(20)),
            (Slot::Power, u8_at(34)),
            (Slot::Lives, u8_at(35)),
            (Slot::Bombs, u8_at(36)),
        ],
    };
}

/// th08 (Imperishable Night)
///
/// ```text
/// Offset   Field              Size    Notes
/// ──────────────────────────────────────────────────────
/// 0x0C     USER offset        4
/// 0x15     Cipher key         1
/// 0x1C     Decompressed size  4
/// 0x20     Stage pointers     9 x 4   4A, 4B, 6A, 6B are separate slots
/// 0x68     (LZSS body starts)
/// 0x6A     Shot               1
/// 0x6B     Difficulty         1
/// 0x6C     Date               6       ASCII "%m/%d"
/// 0x72     Name               10      ASCII
/// 0x7C     Spell card id      2       0xFFFF when not spell practice
/// 0xB0     Score              4       score / 10
/// 0x118    Slowdown           4       f32
/// ```
pub(crate) mod th08 {
    use super::*;

    pub const CONTAINER: LegacyContainer = LegacyContainer {
        key: 21,
        cipher_start: 24,
        cipher_ends_at_user: true,
        compression: Some(Compression {
            header_len: 104,
            size_field: 28,
        }),
    };

    pub const STAGE_POINTERS: usize = 32;
    pub const STAGE_COUNT: usize = 9;
    pub const SHOT: usize = 106;
    pub const DIFFICULTY: usize = 107;
    pub const DATE: TextField = TextField {
        offset: 108,
        len: 6,
        encoding: TextEncoding::Ascii,
    };
    pub const NAME: TextField = TextField {
        offset: 114,
        len: 10,
        encoding: TextEncoding::Ascii,
    };
    pub const SPELL_CARD_ID: usize = 124;
    pub const NO_SPELL_CARD: u16 = 0xFFFF;
    pub const SCORE: usize = 176;
    pub const SLOWDOWN: usize = 280;

    /// Stage numbers of the two final stages.
    pub const FINAL_A: u16 = 7;
    pub const FINAL_B: u16 = 8;

    /// USER key holding the full timestamp.
    pub const USER_DATE_KEY: &str = "Date";
    pub const USER_DATE_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

    pub const STAGE: StageLayout = StageLayout {
        size: 32,
        score_multiplier: 10,
        fields: &[
            (Slot::Score, u32_at(0)),
            (Slot::PointItems, u32_at(4)),
            (Slot::Graze, u32_at(8)),
            (Slot::Piv, u32_at(20)),
            (Slot::Power, u8_at(28)),
            (Slot::Lives, u8_at(29)),
            (Slot::Bombs, u8_at(30)),
        ],
    };
}

/// th09 (Phantasmagoria of Flower View)
///
/// ```text
/// Offset   Field              Size    Notes
/// ──────────────────────────────────────────────────────
/// 0x0C     USER offset        4
/// 0x15     Cipher key         1
/// 0x1C     Decompressed size  4
/// 0x20     Stage pointers     40 x 4  P1 at i, P2 at i + 10
/// 0xC0     (LZSS body starts)
/// 0xC4     Date               10      ASCII "%y/%m/%d"
/// 0xCE     Name               9       ASCII
/// 0xD7     Difficulty         1
/// ```
///
/// Each player record is 10 bytes: score / 10 (u32), shot (+6), CPU flag
/// (high bit of +7), lives (+8).
pub(crate) mod th09 {
    use super::*;

    pub const CONTAINER: LegacyContainer = LegacyContainer {
        key: 21,
        cipher_start: 24,
        cipher_ends_at_user: true,
        compression: Some(Compression {
            header_len: 192,
            size_field: 28,
        }),
    };

    pub const STAGE_POINTERS: usize = 32;
    pub const STAGE_COUNT: usize = 10;
    pub const PLAYER_2_POINTER_OFFSET: usize = 10;
    pub const DATE: TextField = TextField {
        offset: 196,
        len: 10,
        encoding: TextEncoding::Ascii,
    };
    pub const DATE_FORMAT: &str = "%y/%m/%d";
    pub const NAME: TextField = TextField {
        offset: 206,
        len: 9,
        encoding: TextEncoding::Ascii,
    };
    pub const DIFFICULTY: usize = 215;

    pub const PLAYER_SIZE: usize = 10;
    pub const PLAYER_SCORE: usize = 0;
    pub const PLAYER_SHOT: usize = 6;
    pub const PLAYER_FLAGS: usize = 7;
    pub const CPU_FLAG: u8 = 0x80;
    pub const PLAYER_LIVES: usize = 8;
    pub const SCORE_MULTIPLIER: u64 = 10;
}

// ============================================================================
// Modern formats
// ============================================================================

/// Fixed container fields shared by th095 and th10 onward.
pub(crate) mod modern {
    pub const VERSION: usize = 4;
    pub const USER_OFFSET: usize = 12;

    /// Spell card id value meaning "not spell practice".
    pub const NO_SPELL_CARD: u32 = 0xFFFF_FFFF;

    /// Stage number (u16) within a stage record.
    pub const STAGE_NUMBER: usize = 0;
    /// Length (u32) of the input blob following a stage record.
    pub const STAGE_BLOB_LEN: usize = 8;
}

/// Where a modern container keeps its size fields and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ContainerLayout {
    pub compressed_size: usize,
    pub decompressed_size: usize,
    pub body: usize,
}

pub(crate) const STANDARD_CONTAINER: ContainerLayout = ContainerLayout {
    compressed_size: 28,
    decompressed_size: 32,
    body: 36,
};

pub(crate) const TH20_CONTAINER: ContainerLayout = ContainerLayout {
    compressed_size: 40,
    decompressed_size: 44,
    body: 48,
};

/// Layout of a modern decompressed body.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ModernLayout {
    pub container: ContainerLayout,
    pub passes: [BlockCipher; 2],
    pub name: TextField,
    /// Unix seconds, u32 or u64.
    pub timestamp: Field,
    /// score / 10
    pub score: usize,
    pub slowdown: usize,
    pub stage_count: usize,
    /// `None` for games with a single shot.
    pub shot: Option<usize>,
    /// Sub-shot offset and the number of sub-shots per character; the shot
    /// table index is `shot * count + subshot`.
    pub subshot: Option<(usize, usize)>,
    /// `None` for games without a difficulty select; read as 0.
    pub difficulty: Option<usize>,
    pub spell_card_id: Option<usize>,
    pub header_size: usize,
    /// `None` when the stage record format is unknown; no stages are read.
    pub stage: Option<StageLayout>,
}

const fn name_field(len: usize, encoding: TextEncoding) -> TextField {
    TextField {
        offset: 0,
        len,
        encoding,
    }
}

const TH10_PASSES: [BlockCipher; 2] = [
    BlockCipher::new(0x400, 0xAA, 0xE1),
    BlockCipher::new(0x80, 0x3D, 0x7A),
];
const TH11_PASSES: [BlockCipher; 2] = [
    BlockCipher::new(0x800, 0xAA, 0xE1),
    BlockCipher::new(0x40, 0x3D, 0x7A),
];
const TH12_PASSES: [BlockCipher; 2] = [
    BlockCipher::new(0x800, 0x5E, 0xE1),
    BlockCipher::new(0x40, 0x7D, 0x3A),
];
const TH128_PASSES: [BlockCipher; 2] = [
    BlockCipher::new(0x800, 0x5E, 0xE7),
    BlockCipher::new(0x80, 0x7D, 0x36),
];
const TH13_PASSES: [BlockCipher; 2] = [
    BlockCipher::new(0x400, 0x5C, 0xE1),
    BlockCipher::new(0x100, 0x7D, 0x3A),
];

pub(crate) const TH10: ModernLayout = ModernLayout {
    container: STANDARD_CONTAINER,
    passes: TH10_PASSES,
    name: name_field(12, TextEncoding::Ascii),
    timestamp: u32_at(12),
    score: 16,
    slowdown: 72,
    stage_count: 76,
    shot: Some(80),
    subshot: Some((84, 3)),
    difficulty: Some(88),
    spell_card_id: None,
    header_size: 100,
    stage: Some(StageLayout {
        size: 452,
        score_multiplier: 10,
        fields: &[
            (Slot::Score, u32_at(12)),
            (Slot::Power, u32_at(16)),
            (Slot::Piv, u32_at(20)),
            (Slot::Lives, u32_at(28)),
        ],
    }),
};

pub(crate) const TH11: ModernLayout = ModernLayout {
    container: STANDARD_CONTAINER,
    passes: TH11_PASSES,
    name: name_field(12, TextEncoding::Ascii),
    timestamp: u64_at(12),
    score: 20,
    slowdown: 84,
    stage_count: 88,
    shot: Some(92),
    subshot: Some((96, 3)),
    difficulty: Some(100),
    spell_card_id: None,
    header_size: 112,
    stage: Some(StageLayout {
        size: 144,
        score_multiplier: 10,
        fields: &[
            (Slot::Score, u32_at(12)),
            (Slot::Power, u32_at(16)),
            (Slot::Piv, u32_at(20)),
            (Slot::Lives, u16_at(24)),
            (Slot::LifePieces, u16_at(26)),
            (Slot::Graze, u32_at(52)),
        ],
    }),
};

pub(crate) const TH12: ModernLayout = ModernLayout {
    container: STANDARD_CONTAINER,
    passes: TH12_PASSES,
    name: name_field(12, TextEncoding::Ascii),
    timestamp: u64_at(12),
    score: 20,
    slowdown: 84,
    stage_count: 88,
    shot: Some(92),
    subshot: Some((96, 2)),
    difficulty: Some(100),
    spell_card_id: None,
    header_size: 112,
    stage: Some(StageLayout {
        size: 160,
        score_multiplier: 10,
        fields: &[
            (Slot::Score, u32_at(12)),
            (Slot::Power, u32_at(16)),
            (Slot::Piv, u32_at(20)),
            (Slot::Lives, u16_at(24)),
            (Slot::LifePieces, u16_at(26)),
            (Slot::Bombs, u16_at(28)),
            (Slot::BombPieces, u16_at(30)),
            (Slot::Graze, u32_at(48)),
        ],
    }),
};

/// th128 stores its route in the shot slot.
pub(crate) const TH128: ModernLayout = ModernLayout {
    container: STANDARD_CONTAINER,
    passes: TH128_PASSES,
    name: name_field(12, TextEncoding::ShiftJis),
    timestamp: u64_at(12),
    score: 20,
    slowdown: 84,
    stage_count: 88,
    shot: Some(92),
    subshot: None,
    difficulty: Some(100),
    spell_card_id: None,
    header_size: 112,
    stage: Some(StageLayout {
        size: 144,
        score_multiplier: 10,
        fields: &[
            (Slot::Score, u32_at(12)),
            (Slot::Graze, u32_at(40)),
            (Slot::Th128Motivation, u32_at(128)),
            (Slot::Th128PerfectFreeze, u32_at(132)),
            (Slot::Th128FrozenArea, f32_at(136)),
        ],
    }),
};

pub(crate) const TH13: ModernLayout = ModernLayout {
    container: STANDARD_CONTAINER,
    passes: TH13_PASSES,
    name: name_field(12, TextEncoding::Ascii),
    timestamp: u64_at(12),
    score: 20,
    slowdown: 84,
    stage_count: 88,
    shot: Some(92),
    subshot: None,
    difficulty: Some(100),
    spell_card_id: Some(112),
    header_size: 116,
    stage: Some(StageLayout {
        size: 196,
        score_multiplier: 10,
        fields: &[
            (Slot::Score, u32_at(28)),
            (Slot::Graze, u32_at(44)),
            (Slot::Piv, u32_at(56)),
            (Slot::Power, u32_at(68)),
            (Slot::Lives, u32_at(80)),
            (Slot::LifePieces, u32_at(84)),
            (Slot::Th13Extends, u32_at(88)),
            (Slot::Bombs, u32_at(92)),
            (Slot::BombPieces, u32_at(96)),
            (Slot::Th13Trance, u32_at(100)),
        ],
    }),
};

pub(crate) const TH14: ModernLayout = ModernLayout {
    container: STANDARD_CONTAINER,
    passes: TH13_PASSES,
    name: name_field(12, TextEncoding::Ascii),
    timestamp: u64_at(12),
    score: 20,
    slowdown: 116,
    stage_count: 120,
    shot: Some(124),
    subshot: Some((128, 2)),
    difficulty: Some(132),
    spell_card_id: Some(144),
    header_size: 148,
    stage: Some(StageLayout {
        size: 220,
        score_multiplier: 10,
        fields: &[
            (Slot::Score, u32_at(28)),
            (Slot::Graze, u32_at(44)),
            (Slot::Piv, u32_at(56)),
            (Slot::Power, u32_at(68)),
            (Slot::Lives, u32_at(80)),
            (Slot::LifePieces, u32_at(84)),
            (Slot::Bombs, u32_at(92)),
            (Slot::BombPieces, u32_at(96)),
        ],
    }),
};

pub(crate) const TH17: ModernLayout = ModernLayout {
    container: STANDARD_CONTAINER,
    passes: TH13_PASSES,
    name: name_field(16, TextEncoding::Ascii),
    timestamp: u64_at(16),
    score: 24,
    slowdown: 128,
    stage_count: 132,
    shot: Some(136),
    subshot: Some((140, 3)),
    difficulty: Some(144),
    spell_card_id: Some(156),
    header_size: 160,
    stage: Some(StageLayout {
        size: 344,
        score_multiplier: 10,
        fields: &[
            (Slot::Score, u32_at(52)),
            (Slot::Graze, u32_at(68)),
            (Slot::PointItems, u32_at(88)),
            (Slot::Piv, u32_at(92)),
            (Slot::Power, u32_at(104)),
            (Slot::Lives, u32_at(120)),
            (Slot::LifePieces, u32_at(124)),
            (Slot::Bombs, u32_at(132)),
            (Slot::BombPieces, u32_at(136)),
            (Slot::Th17HyperFill, u32_at(152)),
        ],
    }),
};

/// th18 stage records hold a start-of-stage and an end-of-stage snapshot;
/// only the end snapshot is read.
const TH18_STAGE_END: usize = 2408;

pub(crate) const TH18: ModernLayout = ModernLayout {
    container: STANDARD_CONTAINER,
    passes: TH13_PASSES,
    name: name_field(16, TextEncoding::ShiftJis),
    timestamp: u64_at(16),
    score: 24,
    slowdown: 164,
    stage_count: 168,
    shot: Some(172),
    subshot: None,
    difficulty: Some(180),
    spell_card_id: Some(192),
    header_size: 200,
    stage: Some(StageLayout {
        size: 4716,
        score_multiplier: 10,
        fields: &[
            (Slot::Score, u32_at(TH18_STAGE_END + 32)),
            (Slot::Graze, u32_at(TH18_STAGE_END + 48)),
            (Slot::Th18Funds, u32_at(TH18_STAGE_END + 68)),
            (Slot::Piv, u32_at(TH18_STAGE_END + 72)),
            (Slot::Power, u32_at(TH18_STAGE_END + 92)),
            (Slot::Lives, u32_at(TH18_STAGE_END + 108)),
            (Slot::LifePieces, u32_at(TH18_STAGE_END + 112)),
            (Slot::Bombs, u32_at(TH18_STAGE_END + 124)),
            (Slot::BombPieces, u32_at(TH18_STAGE_END + 128)),
        ],
    }),
};

/// th20 header. Its cipher passes are assumed to match th13 onward, and its
/// stage records are not decoded.
pub(crate) const TH20: ModernLayout = ModernLayout {
    container: TH20_CONTAINER,
    passes: TH13_PASSES,
    name: name_field(16, TextEncoding::ShiftJis),
    timestamp: u64_at(16),
    score: 24,
    slowdown: 208,
    stage_count: 212,
    shot: Some(216),
    subshot: None,
    difficulty: Some(240),
    spell_card_id: Some(252),
    header_size: 256,
    stage: None,
};

/// Uwabami Breakers: one character, no difficulty select and no spell
/// practice. Stage records carry only the score.
pub(crate) const ALCO: ModernLayout = ModernLayout {
    container: STANDARD_CONTAINER,
    passes: TH10_PASSES,
    name: name_field(12, TextEncoding::ShiftJis),
    timestamp: u32_at(12),
    score: 16,
    slowdown: 72,
    stage_count: 76,
    shot: None,
    subshot: None,
    difficulty: None,
    spell_card_id: None,
    header_size: 96,
    stage: Some(StageLayout {
        size: 24,
        score_multiplier: 10,
        fields: &[(Slot::Score, u32_at(12))],
    }),
};

/// th095 keeps everything it needs in the USER section.
pub(crate) mod th095 {
    pub const NAME_KEY: &str = "Name";
    pub const LEVEL_KEY: &str = "Level";
    pub const SCENE_KEY: &str = "Scene";
    pub const DATE_KEY: &str = "Date";
    pub const SCORE_KEY: &str = "Score";
    pub const SLOWDOWN_KEY: &str = "Slow Rate";
    pub const EXTRA_LEVEL: &str = "EX";
    pub const EXTRA_LEVEL_NUMBER: u32 = 11;
    pub const SCENES_PER_LEVEL: u32 = 10;
    pub const DATE_FORMATS: &[&str] = &["%y/%m/%d %H:%M", "%Y/%m/%d %H:%M:%S", "%Y/%m/%d %H:%M"];
}

/// Characters at description index 2 that tell th13 and th14 apart.
pub(crate) mod collision {
    pub const DESCRIPTION_INDEX: usize = 2;
    pub const TH13_MARKER: char = '神';
    pub const TH14_MARKER: char = '輝';
}
