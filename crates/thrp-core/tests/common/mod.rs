//! Synthetic replay builders shared by the integration tests.
//!
//! The encoders here are the inverses of the decoder's transforms and exist
//! only to produce fixtures.

#![allow(dead_code)]

use encoding_rs::SHIFT_JIS;
use thrp_core::cipher::{block_shuffle_encrypt, rolling_add};

pub type Passes = [(usize, u8, u8); 2];

pub const TH10_PASSES: Passes = [(0x400, 0xAA, 0xE1), (0x80, 0x3D, 0x7A)];
pub const TH11_PASSES: Passes = [(0x800, 0xAA, 0xE1), (0x40, 0x3D, 0x7A)];
pub const TH12_PASSES: Passes = [(0x800, 0x5E, 0xE1), (0x40, 0x7D, 0x3A)];
pub const TH128_PASSES: Passes = [(0x800, 0x5E, 0xE7), (0x80, 0x7D, 0x36)];
pub const TH13_PASSES: Passes = [(0x400, 0x5C, 0xE1), (0x100, 0x7D, 0x3A)];

pub const TH13_DESCRIPTION: &str = "東方神霊廟 リプレイファイル情報";
pub const TH14_DESCRIPTION: &str = "東方輝針城 リプレイファイル情報";

fn ensure_len(buf: &mut Vec<u8>, end: usize) {
    if buf.len() < end {
        buf.resize(end, 0);
    }
}

pub fn put_bytes(buf: &mut Vec<u8>, offset: usize, bytes: &[u8]) {
    ensure_len(buf, offset + bytes.len());
    buf[offset..offset + bytes.len()].copy_from_slice(bytes);
}

pub fn put_u8(buf: &mut Vec<u8>, offset: usize, value: u8) {
    put_bytes(buf, offset, &[value]);
}

pub fn put_u16(buf: &mut Vec<u8>, offset: usize, value: u16) {
    put_bytes(buf, offset, &value.to_le_bytes());
}

pub fn put_u32(buf: &mut Vec<u8>, offset: usize, value: u32) {
    put_bytes(buf, offset, &value.to_le_bytes());
}

pub fn put_u64(buf: &mut Vec<u8>, offset: usize, value: u64) {
    put_bytes(buf, offset, &value.to_le_bytes());
}

pub fn put_f32(buf: &mut Vec<u8>, offset: usize, value: f32) {
    put_bytes(buf, offset, &value.to_le_bytes());
}

/// LZSS stream made only of literal tokens.
pub fn literal_lzss(plain: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut bit = 0usize;
    let mut push = |set: bool| {
        if bit % 8 == 0 {
            out.push(0u8);
        }
        if set {
            let last = out.len() - 1;
            out[last] |= 0x80 >> (bit % 8);
        }
        bit += 1;
    };
    for &byte in plain {
        push(true);
        for i in (0..8).rev() {
            push((byte >> i) & 1 == 1);
        }
    }
    out
}

/// USER section with CR LF separated Shift-JIS lines.
pub fn user_section(lines: &[&str]) -> Vec<u8> {
    let text: String = lines.iter().map(|line| format!("{line}\r\n")).collect();
    let (encoded, _, _) = SHIFT_JIS.encode(&text);
    let mut section = b"USER".to_vec();
    section.extend_from_slice(&((encoded.len() + 12) as u32).to_le_bytes());
    section.extend_from_slice(&[0x10, 0, 0, 0]);
    section.extend_from_slice(&encoded);
    section
}

/// Shift-JIS bytes of `text`.
pub fn sjis(text: &str) -> Vec<u8> {
    SHIFT_JIS.encode(text).0.into_owned()
}

/// Cipher and compression settings for a legacy file.
pub struct LegacyOptions {
    pub key_offset: usize,
    pub key: u8,
    pub cipher_start: usize,
    /// `(header_len, size_field)`
    pub compression: Option<(usize, usize)>,
    /// Appended after the cipher region; its offset is stored at 12.
    pub user: Option<Vec<u8>>,
}

pub fn th06_options() -> LegacyOptions {
    LegacyOptions {
        key_offset: 14,
        key: 0x5A,
        cipher_start: 15,
        compression: None,
        user: None,
    }
}

pub fn th07_options() -> LegacyOptions {
    LegacyOptions {
        key_offset: 13,
        key: 0x33,
        cipher_start: 16,
        compression: Some((84, 24)),
        user: None,
    }
}

pub fn th08_options(user: Vec<u8>) -> LegacyOptions {
    LegacyOptions {
        key_offset: 21,
        key: 0xC1,
        cipher_start: 24,
        compression: Some((104, 28)),
        user: Some(user),
    }
}

pub fn th09_options(user: Vec<u8>) -> LegacyOptions {
    LegacyOptions {
        key_offset: 21,
        key: 0x07,
        cipher_start: 24,
        compression: Some((192, 28)),
        user: Some(user),
    }
}

/// Builds a legacy file whose reconstructed buffer is `plain`.
pub fn legacy_file(magic: &[u8; 4], plain: &[u8], options: &LegacyOptions) -> Vec<u8> {
    let mut file = match options.compression {
        None => plain.to_vec(),
        Some((header_len, size_field)) => {
            let mut file = plain[..header_len].to_vec();
            put_u32(&mut file, size_field, (plain.len() - header_len) as u32);
            file.extend(literal_lzss(&plain[header_len..]));
            file
        }
    };
    put_bytes(&mut file, 0, magic);
    put_u8(&mut file, options.key_offset, options.key);
    if options.user.is_some() {
        let user_offset = file.len() as u32;
        put_u32(&mut file, 12, user_offset);
    }
    rolling_add(&mut file[options.cipher_start..], options.key);
    if let Some(user) = &options.user {
        file.extend_from_slice(user);
    }
    file
}

/// Offset of the compressed body in th095 through th18 and alco containers.
pub const STANDARD_BODY_OFFSET: usize = 36;
/// th20 moves both size fields and the body 12 bytes further in.
pub const TH20_BODY_OFFSET: usize = 48;

/// Builds a modern container around a plain decompressed `body`.
pub fn modern_file(magic: &[u8; 4], body: &[u8], passes: Passes, user: &[u8]) -> Vec<u8> {
    container_file(magic, body, passes, user, STANDARD_BODY_OFFSET)
}

/// Like [`modern_file`], with the size fields just before `body_offset`.
pub fn container_file(
    magic: &[u8; 4],
    body: &[u8],
    passes: Passes,
    user: &[u8],
    body_offset: usize,
) -> Vec<u8> {
    let mut data = literal_lzss(body);
    let [(size1, base1, add1), (size2, base2, add2)] = passes;
    block_shuffle_encrypt(&mut data, size2, base2, add2);
    block_shuffle_encrypt(&mut data, size1, base1, add1);

    let mut file = magic.to_vec();
    put_u32(&mut file, 4, 0x100);
    put_u32(&mut file, body_offset - 8, data.len() as u32);
    put_u32(&mut file, body_offset - 4, body.len() as u32);
    file.extend_from_slice(&data);
    let user_offset = file.len() as u32;
    put_u32(&mut file, 12, user_offset);
    file.extend_from_slice(user);
    file
}
