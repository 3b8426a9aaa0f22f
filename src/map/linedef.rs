// src/map/linedef.rs
use std::io::{self, Read, Write};
use byteorder::{LE, ReadBytesExt, WriteBytesExt};

/// Sidedef index meaning "no side" in the on-disk format.
const NO_SIDE: u16 = 0xFFFF;

/// A linedef in classic DOOM format (14 bytes).
///
/// Layout (all little-endian):
///
/// ```text
/// offset  field     type / size
/// ------  --------  ------------
///  0-1    start     u16 (vertex index)
///  2-3    end       u16 (vertex index)
///  4-5    flags     u16
///  6-7    special   u16
///  8-9    tag       u16
/// 10-11   right     u16 (sidedef index, 0xFFFF = none)
/// 12-13   left      u16 (sidedef index, 0xFFFF = none)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDef {
    pub start: usize,
    pub end: usize,
    pub flags: u16,
    pub special: u16,
    pub tag: u16,
    pub right: Option<usize>,
    pub left: Option<usize>,
}

impl LineDef {
    /// Size of one linedef record in a WAD.
    pub const RECORD_SIZE: u32 = 14;

    /// The "secret" flag bit: the line shows as one-sided on the automap.
    pub const FLAG_SECRET: u16 = 1 << 5;

    pub fn from_wad<R: Read>(reader: &mut R) -> io::Result<Self> {
        Ok(LineDef {
            start: reader.read_u16::<LE>()? as usize,
            end: reader.read_u16::<LE>()? as usize,
            flags: reader.read_u16::<LE>()?,
            special: reader.read_u16::<LE>()?,
            tag: reader.read_u16::<LE>()?,
            right: decode_side(reader.read_u16::<LE>()?),
            left: decode_side(reader.read_u16::<LE>()?),
        })
    }

    pub fn to_wad<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_u16::<LE>(self.start as u16)?;
        writer.write_u16::<LE>(self.end as u16)?;
        writer.write_u16::<LE>(self.flags)?;
        writer.write_u16::<LE>(self.special)?;
        writer.write_u16::<LE>(self.tag)?;
        writer.write_u16::<LE>(encode_side(self.right))?;
        writer.write_u16::<LE>(encode_side(self.left))?;
        Ok(())
    }

    /// Returns a copy running in the opposite direction: endpoints exchanged
    /// and the right/left sides exchanged with them, so the side a sector
    /// lies on is still correct after the reversal.
    pub fn flip(&self) -> LineDef {
        LineDef {
            start: self.end,
            end: self.start,
            flags: self.flags,
            special: self.special,
            tag: self.tag,
            right: self.left,
            left: self.right,
        }
    }

    pub fn is_door(&self) -> bool {
        matches!(self.special, 1..=4 | 16)
    }

    pub fn is_teleporter(&self) -> bool {
        matches!(
            self.special,
            39 | 97 | 125 | 126 | 174 | 195 | 207..=210 | 243 | 244 | 262..=269
        )
    }

    pub fn is_lift(&self) -> bool {
        matches!(self.special, 10 | 21 | 62 | 88 | 120 | 121 | 123)
    }

    pub fn is_exit(&self) -> bool {
        matches!(self.special, 11 | 51 | 52 | 124 | 197 | 198)
    }

    pub fn is_secret(&self) -> bool {
        self.flags & Self::FLAG_SECRET != 0
    }
}

fn decode_side(raw: u16) -> Option<usize> {
    if raw == NO_SIDE {
        None
    } else {
        Some(raw as usize)
    }
}

fn encode_side(side: Option<usize>) -> u16 {
    match side {
        Some(index) => index as u16,
        None => NO_SIDE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn round_trip_preserves_all_14_bytes() {
        let raw: Vec<u8> = vec![
            0x01, 0x00, // start
            0x02, 0x00, // end
            0x21, 0x00, // flags
            0x61, 0x00, // special
            0x07, 0x00, // tag
            0x05, 0x00, // right
            0xFF, 0xFF, // left (none)
        ];
        let mut cursor = Cursor::new(raw.clone());
        let line = LineDef::from_wad(&mut cursor).unwrap();
        assert_eq!(cursor.position(), 14);
        assert_eq!(line.start, 1);
        assert_eq!(line.end, 2);
        assert_eq!(line.right, Some(5));
        assert_eq!(line.left, None);

        let mut out = Vec::new();
        line.to_wad(&mut out).unwrap();
        assert_eq!(out, raw);
    }

    #[test]
    fn flip_swaps_endpoints_and_sides() {
        let line = LineDef {
            start: 3,
            end: 7,
            flags: 4,
            special: 0,
            tag: 0,
            right: Some(1),
            left: None,
        };
        let flipped = line.flip();
        assert_eq!(flipped.start, 7);
        assert_eq!(flipped.end, 3);
        assert_eq!(flipped.right, None);
        assert_eq!(flipped.left, Some(1));
        assert_eq!(flipped.flags, 4);
        // flip never mutates in place
        assert_eq!(line.start, 3);
        assert_eq!(flipped.flip(), line);
    }

    #[test]
    fn special_type_categories() {
        let mut line = LineDef {
            start: 0,
            end: 0,
            flags: 0,
            special: 1,
            tag: 0,
            right: None,
            left: None,
        };
        assert!(line.is_door());
        line.special = 39;
        assert!(line.is_teleporter());
        line.special = 62;
        assert!(line.is_lift());
        line.special = 11;
        assert!(line.is_exit());
        line.special = 0;
        assert!(!line.is_door() && !line.is_teleporter() && !line.is_lift() && !line.is_exit());
        line.flags = LineDef::FLAG_SECRET;
        assert!(line.is_secret());
    }
}
