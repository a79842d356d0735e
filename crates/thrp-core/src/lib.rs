//! Decoder for Touhou Project replay files (`.rpy`).
//!
//! [`decode`] takes the raw bytes of a replay and returns a normalized
//! [`ReplayRecord`]. The library performs no I/O.

mod bytes;
pub mod cipher;
pub mod error;
mod format;
pub mod game;
pub mod lzss;
mod normalize;
pub mod record;

pub use error::{Error, Result};
pub use format::decode;
pub use game::{Game, ReplayType};
pub use record::{ReplayRecord, StageRecord};
