// src/map/sector.rs
use std::io::{self, Read, Write};
use byteorder::{LE, ReadBytesExt, WriteBytesExt};

/// A sector in classic DOOM format (26 bytes).
///
/// Layout (all little-endian):
///
/// ```text
/// offset  field          type / size
/// ------  -------------  ------------
///  0-1    floor_height   i16
///  2-3    ceiling_height i16
///  4-11   floor_tex      [u8; 8]
/// 12-19   ceiling_tex    [u8; 8]
/// 20-21   light          u16
/// 22-23   sector_type    u16
/// 24-25   tag            u16
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sector {
    /// The floor height (in map units).
    pub floor_height: i16,

    /// The ceiling height (in map units).
    pub ceiling_height: i16,

    /// The name of the floor flat, up to 8 chars (zero-padded in the WAD).
    pub floor_tex: String,

    /// The name of the ceiling flat, up to 8 chars.
    pub ceiling_tex: String,

    /// Light level (0-255 in classic DOOM).
    pub light: u16,

    /// Special type (a.k.a. "effect"): secret, damage floor, etc.
    pub sector_type: u16,

    /// Sector tag, matched against linedef tags.
    pub tag: u16,
}

impl Sector {
    /// Size of one sector record in a WAD.
    pub const RECORD_SIZE: u32 = 26;

    pub fn from_wad<R: Read>(reader: &mut R) -> io::Result<Self> {
        Ok(Sector {
            floor_height: reader.read_i16::<LE>()?,
            ceiling_height: reader.read_i16::<LE>()?,
            floor_tex: read_flat8(reader)?,
            ceiling_tex: read_flat8(reader)?,
            light: reader.read_u16::<LE>()?,
            sector_type: reader.read_u16::<LE>()?,
            tag: reader.read_u16::<LE>()?,
        })
    }

    pub fn to_wad<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_i16::<LE>(self.floor_height)?;
        writer.write_i16::<LE>(self.ceiling_height)?;
        write_flat8(writer, &self.floor_tex)?;
        write_flat8(writer, &self.ceiling_tex)?;
        writer.write_u16::<LE>(self.light)?;
        writer.write_u16::<LE>(self.sector_type)?;
        writer.write_u16::<LE>(self.tag)?;
        Ok(())
    }

    /// Returns the difference between ceiling and floor height.
    pub fn headroom(&self) -> i16 {
        self.ceiling_height - self.floor_height
    }

    pub fn is_secret(&self) -> bool {
        self.sector_type == 9
    }

    pub fn is_damage(&self) -> bool {
        matches!(self.sector_type, 4 | 5 | 7 | 16)
    }
}

/// Reads an 8-byte flat name from the WAD, trimming trailing `\0` padding.
fn read_flat8<R: Read>(reader: &mut R) -> io::Result<String> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf)?;
    let raw: String = buf.iter().map(|&c| c as char).collect();
    Ok(raw.trim_end_matches('\0').to_string())
}

/// Writes an 8-byte flat name, zero-padded.
fn write_flat8<W: Write>(writer: &mut W, flat: &str) -> io::Result<()> {
    let mut buf = [0u8; 8];
    for (i, &b) in flat.as_bytes().iter().take(8).enumerate() {
        buf[i] = b;
    }
    writer.write_all(&buf)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample_bytes() -> Vec<u8> {
        let mut raw = Vec::new();
        raw.extend_from_slice(&0i16.to_le_bytes());
        raw.extend_from_slice(&128i16.to_le_bytes());
        raw.extend_from_slice(b"FLOOR4_8");
        raw.extend_from_slice(b"CEIL3_5\0");
        raw.extend_from_slice(&160u16.to_le_bytes());
        raw.extend_from_slice(&9u16.to_le_bytes());
        raw.extend_from_slice(&7u16.to_le_bytes());
        raw
    }

    #[test]
    fn decode_all_fields() {
        let mut cursor = Cursor::new(sample_bytes());
        let s = Sector::from_wad(&mut cursor).unwrap();
        assert_eq!(cursor.position(), 26);
        assert_eq!(s.floor_height, 0);
        assert_eq!(s.ceiling_height, 128);
        assert_eq!(s.floor_tex, "FLOOR4_8");
        assert_eq!(s.ceiling_tex, "CEIL3_5");
        assert_eq!(s.light, 160);
        assert_eq!(s.sector_type, 9);
        assert_eq!(s.tag, 7);
        assert_eq!(s.headroom(), 128);
    }

    #[test]
    fn round_trip() {
        let raw = sample_bytes();
        let s = Sector::from_wad(&mut Cursor::new(raw.clone())).unwrap();
        let mut out = Vec::new();
        s.to_wad(&mut out).unwrap();
        assert_eq!(out, raw);
    }

    #[test]
    fn type_predicates() {
        let mut s = Sector::from_wad(&mut Cursor::new(sample_bytes())).unwrap();
        assert!(s.is_secret());
        assert!(!s.is_damage());
        s.sector_type = 5;
        assert!(s.is_damage());
        assert!(!s.is_secret());
        s.sector_type = 0;
        assert!(!s.is_damage());
    }
}
