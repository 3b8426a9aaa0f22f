// src/wad/error.rs
use std::io;

/// Errors produced while reading a WAD archive or resolving its
/// cross-references. Every failure is fatal; the converter never retries.
#[derive(Debug, thiserror::Error)]
pub enum WadError {
    #[error("level {0:?} not found in archive directory")]
    LevelNotFound(String),

    #[error("archive truncated: directory entry at byte {offset} runs past the archive end ({len} bytes)")]
    TruncatedDirectory { offset: u64, len: u64 },

    #[error("archive truncated: {lump} lump at byte {offset} ({size} bytes) runs past the archive end ({len} bytes)")]
    TruncatedLump {
        lump: &'static str,
        offset: u64,
        size: u64,
        len: u64,
    },

    #[error("{lump} lump size {size} is not a multiple of its {record_size}-byte record")]
    MalformedLump {
        lump: &'static str,
        size: u32,
        record_size: u32,
    },

    #[error("{kind} index {index} out of range (only {len} loaded)")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
