// src/wad/level.rs

use std::io::{self, Cursor};

use log::debug;

use super::archive::{Archive, LevelLumps, LumpSlice};
use super::error::WadError;
use crate::map::{LineDef, Sector, SideDef, Thing, Vertex};

/// The decoded geometry of one map: five parallel record lists in file
/// order. All cross-references between them are plain indices, validated
/// lazily through the checked accessors below. A `Level` is built once and
/// never mutated afterwards, so it can be shared freely across threads.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Level {
    pub vertices: Vec<Vertex>,
    pub linedefs: Vec<LineDef>,
    pub sidedefs: Vec<SideDef>,
    pub sectors: Vec<Sector>,
    pub things: Vec<Thing>,
}

impl Level {
    /// Decodes every located lump of `lumps` out of the archive bytes.
    pub fn from_archive(archive: &Archive, lumps: &LevelLumps) -> Result<Self, WadError> {
        let data = archive.data();
        let level = Level {
            vertices: decode_lump(data, lumps.vertices, "VERTEXES", Vertex::RECORD_SIZE, |r| Vertex::from_wad(r))?,
            linedefs: decode_lump(data, lumps.linedefs, "LINEDEFS", LineDef::RECORD_SIZE, |r| LineDef::from_wad(r))?,
            sidedefs: decode_lump(data, lumps.sidedefs, "SIDEDEFS", SideDef::RECORD_SIZE, |r| SideDef::from_wad(r))?,
            sectors: decode_lump(data, lumps.sectors, "SECTORS", Sector::RECORD_SIZE, |r| Sector::from_wad(r))?,
            things: decode_lump(data, lumps.things, "THINGS", Thing::RECORD_SIZE, |r| Thing::from_wad(r))?,
        };
        debug!(
            "assembled level: {} vertices, {} linedefs, {} sidedefs, {} sectors, {} things",
            level.vertices.len(),
            level.linedefs.len(),
            level.sidedefs.len(),
            level.sectors.len(),
            level.things.len()
        );
        Ok(level)
    }

    /// Looks up a vertex by index, surfacing a bad linedef cross-reference.
    pub fn vertex(&self, index: usize) -> Result<&Vertex, WadError> {
        self.vertices.get(index).ok_or(WadError::IndexOutOfRange {
            kind: "vertex",
            index,
            len: self.vertices.len(),
        })
    }

    /// Looks up a sidedef by index.
    pub fn sidedef(&self, index: usize) -> Result<&SideDef, WadError> {
        self.sidedefs.get(index).ok_or(WadError::IndexOutOfRange {
            kind: "sidedef",
            index,
            len: self.sidedefs.len(),
        })
    }

    /// Looks up a sector by index.
    pub fn sector(&self, index: usize) -> Result<&Sector, WadError> {
        self.sectors.get(index).ok_or(WadError::IndexOutOfRange {
            kind: "sector",
            index,
            len: self.sectors.len(),
        })
    }

    /// The bounding box of all vertices as (min_x, min_y, max_x, max_y), or
    /// `None` for a level without vertices.
    pub fn bounds(&self) -> Option<(i16, i16, i16, i16)> {
        let first = self.vertices.first()?;
        let mut bounds = (first.x, first.y, first.x, first.y);
        for v in &self.vertices[1..] {
            bounds.0 = bounds.0.min(v.x);
            bounds.1 = bounds.1.min(v.y);
            bounds.2 = bounds.2.max(v.x);
            bounds.3 = bounds.3.max(v.y);
        }
        Some(bounds)
    }
}

/// Decodes `size / record_size` records sequentially from one lump. A size
/// that is not a whole number of records is a malformed archive, reported
/// before anything is decoded.
fn decode_lump<T, F>(
    data: &[u8],
    slice: Option<LumpSlice>,
    lump: &'static str,
    record_size: u32,
    decode: F,
) -> Result<Vec<T>, WadError>
where
    F: Fn(&mut Cursor<&[u8]>) -> io::Result<T>,
{
    let Some(LumpSlice { offset, size }) = slice else {
        return Ok(Vec::new());
    };
    if size % record_size != 0 {
        return Err(WadError::MalformedLump {
            lump,
            size,
            record_size,
        });
    }
    let start = offset as u64;
    let end = start + size as u64;
    if end > data.len() as u64 {
        return Err(WadError::TruncatedLump {
            lump,
            offset: start,
            size: size as u64,
            len: data.len() as u64,
        });
    }
    let count = (size / record_size) as usize;
    debug!("reading {} {} records", count, lump);
    let mut cursor = Cursor::new(&data[start as usize..end as usize]);
    let mut records = Vec::with_capacity(count);
    for _ in 0..count {
        records.push(decode(&mut cursor)?);
    }
    Ok(records)
}
