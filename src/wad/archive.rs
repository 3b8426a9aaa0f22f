// src/wad/archive.rs

use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;

use byteorder::{LE, ReadBytesExt};
use log::{debug, info, warn};

use super::error::WadError;
use super::level::Level;

/// Size of one directory entry: 4 bytes offset + 4 bytes size + 8 bytes name.
pub const DIR_ENTRY_SIZE: u32 = 16;

/// Size of the archive header: 4-byte magic + lump count + directory offset.
const HEADER_SIZE: usize = 12;

/// A single lump entry from the WAD directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LumpEntry {
    pub offset: u32,
    pub size: u32,
    pub name: String,
}

/// Byte range of one located level-data lump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LumpSlice {
    pub offset: u32,
    pub size: u32,
}

/// The five level-data lumps located for one map, in the order the directory
/// listed them after the map marker. A `None` slot means the archive never
/// supplied that lump before the SECTORS terminator; the assembler treats it
/// as an empty record list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelLumps {
    pub things: Option<LumpSlice>,
    pub linedefs: Option<LumpSlice>,
    pub sidedefs: Option<LumpSlice>,
    pub vertices: Option<LumpSlice>,
    pub sectors: Option<LumpSlice>,
}

/// An in-memory WAD archive: the raw bytes plus the two header fields needed
/// to walk the lump directory. Lump data is only decoded on demand.
pub struct Archive {
    data: Vec<u8>,
    num_lumps: u32,
    dir_offset: u32,
}

impl Archive {
    /// Reads a whole WAD file into memory.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, WadError> {
        Self::from_bytes(fs::read(path)?)
    }

    /// Wraps an already-loaded archive byte buffer.
    ///
    /// The 4-byte magic must be present but is not validated beyond that;
    /// an unfamiliar magic only logs a warning so homebrew archives still
    /// convert.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, WadError> {
        if data.len() < HEADER_SIZE {
            return Err(WadError::TruncatedDirectory {
                offset: 0,
                len: data.len() as u64,
            });
        }
        let magic = &data[0..4];
        if magic != b"IWAD" && magic != b"PWAD" {
            warn!(
                "unfamiliar archive magic {:?}, continuing anyway",
                String::from_utf8_lossy(magic)
            );
        }
        let mut header = Cursor::new(&data[4..HEADER_SIZE]);
        let num_lumps = header.read_u32::<LE>()?;
        let dir_offset = header.read_u32::<LE>()?;
        debug!("archive holds {} lumps, directory at byte {}", num_lumps, dir_offset);
        Ok(Archive {
            data,
            num_lumps,
            dir_offset,
        })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Decodes the directory entry at the given position.
    fn dir_entry(&self, index: u32) -> Result<LumpEntry, WadError> {
        let offset = self.dir_offset as u64 + index as u64 * DIR_ENTRY_SIZE as u64;
        let end = offset + DIR_ENTRY_SIZE as u64;
        if end > self.data.len() as u64 {
            return Err(WadError::TruncatedDirectory {
                offset,
                len: self.data.len() as u64,
            });
        }
        let mut cursor = Cursor::new(&self.data[offset as usize..end as usize]);
        let lump_offset = cursor.read_u32::<LE>()?;
        let lump_size = cursor.read_u32::<LE>()?;
        let mut name_buf = [0u8; 8];
        cursor.read_exact(&mut name_buf)?;
        let name: String = name_buf.iter().map(|&c| c as char).collect();
        Ok(LumpEntry {
            offset: lump_offset,
            size: lump_size,
            name: name.trim_end_matches('\0').to_string(),
        })
    }

    /// Scans the directory for the named map marker and locates the first
    /// occurrence of each level-data lump after it. Scanning stops right
    /// after the SECTORS lump, the last one a level block carries that we
    /// consume; duplicate kinds in non-conformant archives are ignored.
    pub fn find_level(&self, map_name: &str) -> Result<LevelLumps, WadError> {
        let mut found = false;
        let mut lumps = LevelLumps::default();
        for index in 0..self.num_lumps {
            let entry = self.dir_entry(index)?;
            if !found {
                if entry.name == map_name {
                    info!("found map {}", entry.name);
                    found = true;
                }
                continue;
            }
            let slice = LumpSlice {
                offset: entry.offset,
                size: entry.size,
            };
            match entry.name.as_str() {
                "THINGS" => {
                    lumps.things.get_or_insert(slice);
                }
                "LINEDEFS" => {
                    lumps.linedefs.get_or_insert(slice);
                }
                "SIDEDEFS" => {
                    lumps.sidedefs.get_or_insert(slice);
                }
                "VERTEXES" => {
                    lumps.vertices.get_or_insert(slice);
                }
                "SECTORS" => {
                    lumps.sectors = Some(slice);
                    break;
                }
                _ => {}
            }
        }
        if !found {
            return Err(WadError::LevelNotFound(map_name.to_string()));
        }
        Ok(lumps)
    }

    /// Locates and fully decodes the named level.
    pub fn read_level(&self, map_name: &str) -> Result<Level, WadError> {
        let lumps = self.find_level(map_name)?;
        Level::from_archive(self, &lumps)
    }

    /// Lists the level markers ("E1M1" / "MAP01" style names) present in the
    /// directory, in directory order.
    pub fn level_names(&self) -> Result<Vec<String>, WadError> {
        let mut names = Vec::new();
        for index in 0..self.num_lumps {
            let entry = self.dir_entry(index)?;
            if is_level_marker(&entry.name) {
                names.push(entry.name);
            }
        }
        Ok(names)
    }
}

/// Returns true if the lump name looks like a level marker.
fn is_level_marker(name: &str) -> bool {
    if let Some(rest) = name.strip_prefix("MAP") {
        return rest.len() == 2 && rest.chars().all(|c| c.is_ascii_digit());
    }
    let bytes = name.as_bytes();
    bytes.len() == 4
        && bytes[0] == b'E'
        && bytes[1].is_ascii_digit()
        && bytes[2] == b'M'
        && bytes[3].is_ascii_digit()
}
