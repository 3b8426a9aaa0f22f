// src/map/vertex.rs
use std::io::{self, Read, Write};
use byteorder::{LE, ReadBytesExt, WriteBytesExt};

/// A map vertex in classic DOOM format (4 bytes: x then y, little-endian i16).
///
/// The stored `y` is the negation of the on-disk value, so that increasing y
/// points downward on the rendered image like any 2D drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vertex {
    pub x: i16,
    pub y: i16,
}

impl Vertex {
    /// Size of one vertex record in a WAD.
    pub const RECORD_SIZE: u32 = 4;

    pub fn from_wad<R: Read>(reader: &mut R) -> io::Result<Self> {
        Ok(Vertex {
            x: reader.read_i16::<LE>()?,
            // Wrapping keeps -32768 representable through the sign flip.
            y: reader.read_i16::<LE>()?.wrapping_neg(),
        })
    }

    pub fn to_wad<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_i16::<LE>(self.x)?;
        writer.write_i16::<LE>(self.y.wrapping_neg())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn decode_negates_y() {
        let mut cursor = Cursor::new(vec![0x10, 0x00, 0x20, 0x00]);
        let v = Vertex::from_wad(&mut cursor).unwrap();
        assert_eq!(v, Vertex { x: 16, y: -32 });
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn round_trip_is_double_negation() {
        let raw = vec![0x34, 0x12, 0xCD, 0xAB];
        let v = Vertex::from_wad(&mut Cursor::new(raw.clone())).unwrap();
        let mut out = Vec::new();
        v.to_wad(&mut out).unwrap();
        assert_eq!(out, raw);
    }

    #[test]
    fn round_trip_survives_i16_min() {
        let raw = vec![0x00, 0x80, 0x00, 0x80];
        let v = Vertex::from_wad(&mut Cursor::new(raw.clone())).unwrap();
        let mut out = Vec::new();
        v.to_wad(&mut out).unwrap();
        assert_eq!(out, raw);
    }
}
