// src/map/thing.rs
use std::io::{self, Read, Write};
use byteorder::{LE, ReadBytesExt, WriteBytesExt};

/// A placed map object ("thing") in classic DOOM format (10 bytes).
///
/// The stored `y` is negated like [`Vertex`](crate::map::Vertex) so things
/// land on the same rendered coordinate system as the geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thing {
    pub x: i16,
    pub y: i16,
    pub angle: u16,
    pub thing_type: u16,
    pub flags: u16,
}

impl Thing {
    /// Size of one thing record in a WAD.
    pub const RECORD_SIZE: u32 = 10;

    pub const FLAG_SKILL_1_2: u16 = 1;
    pub const FLAG_SKILL_3: u16 = 2;
    pub const FLAG_SKILL_4_5: u16 = 4;
    pub const FLAG_DEAF: u16 = 8;
    pub const FLAG_MULTIPLAYER: u16 = 16;

    pub fn from_wad<R: Read>(reader: &mut R) -> io::Result<Self> {
        Ok(Thing {
            x: reader.read_i16::<LE>()?,
            y: reader.read_i16::<LE>()?.wrapping_neg(),
            angle: reader.read_u16::<LE>()?,
            thing_type: reader.read_u16::<LE>()?,
            flags: reader.read_u16::<LE>()?,
        })
    }

    pub fn to_wad<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_i16::<LE>(self.x)?;
        writer.write_i16::<LE>(self.y.wrapping_neg())?;
        writer.write_u16::<LE>(self.angle)?;
        writer.write_u16::<LE>(self.thing_type)?;
        writer.write_u16::<LE>(self.flags)?;
        Ok(())
    }

    /// True for things that only spawn in multiplayer games.
    pub fn is_multiplayer_only(&self) -> bool {
        self.flags & Self::FLAG_MULTIPLAYER != 0
    }
}
