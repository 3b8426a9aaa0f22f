// src/wad/mod.rs
pub mod archive;
pub mod error;
pub mod level;

pub use archive::{Archive, LevelLumps, LumpEntry, LumpSlice};
pub use error::WadError;
pub use level::Level;
