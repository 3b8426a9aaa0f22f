// src/map/sidedef.rs
use std::io::{self, Read, Write};
use byteorder::{LE, ReadBytesExt, WriteBytesExt};

/// A sidedef in classic DOOM format (30 bytes total).
///
/// Layout (all little-endian):
///
/// ```text
/// offset  field       type / size
/// ------  ----------  ------------
///  0-1    x_offset    i16
///  2-3    y_offset    i16
///  4-11   upper_tex   [u8; 8]
/// 12-19   lower_tex   [u8; 8]
/// 20-27   mid_tex     [u8; 8]
/// 28-29   sector      u16  (index into sector list)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideDef {
    /// Horizontal texture offset.
    pub x_offset: i16,

    /// Vertical texture offset.
    pub y_offset: i16,

    /// Upper texture name, up to 8 chars (zero-padded in the WAD).
    pub upper_tex: String,

    /// Lower texture name, up to 8 chars.
    pub lower_tex: String,

    /// Middle (a.k.a. "mid" or "normal") texture name, up to 8 chars.
    pub mid_tex: String,

    /// Index of the sector this side faces.
    pub sector: usize,
}

impl SideDef {
    /// Size of one sidedef record in a WAD.
    pub const RECORD_SIZE: u32 = 30;

    pub fn from_wad<R: Read>(reader: &mut R) -> io::Result<Self> {
        Ok(SideDef {
            x_offset: reader.read_i16::<LE>()?,
            y_offset: reader.read_i16::<LE>()?,
            upper_tex: read_tex8(reader)?,
            lower_tex: read_tex8(reader)?,
            mid_tex: read_tex8(reader)?,
            sector: reader.read_u16::<LE>()? as usize,
        })
    }

    pub fn to_wad<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_i16::<LE>(self.x_offset)?;
        writer.write_i16::<LE>(self.y_offset)?;
        write_tex8(writer, &self.upper_tex)?;
        write_tex8(writer, &self.lower_tex)?;
        write_tex8(writer, &self.mid_tex)?;
        writer.write_u16::<LE>(self.sector as u16)?;
        Ok(())
    }
}

/// Reads exactly 8 bytes of texture name, trimming trailing `\0` padding.
fn read_tex8<R: Read>(reader: &mut R) -> io::Result<String> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf)?;
    let raw: String = buf.iter().map(|&c| c as char).collect();
    Ok(raw.trim_end_matches('\0').to_string())
}

/// Writes an 8-byte texture name, zero-padded if shorter, truncated if
/// longer than 8.
fn write_tex8<W: Write>(writer: &mut W, tex: &str) -> io::Result<()> {
    let mut buf = [0u8; 8];
    for (i, &b) in tex.as_bytes().iter().take(8).enumerate() {
        buf[i] = b;
    }
    writer.write_all(&buf)?;
    Ok(())
}
