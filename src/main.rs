//! # wad2svg
//!
//! Converts one level of a classic Doom or Doom II WAD archive into an SVG
//! drawing on stdout: sector floors as filled outlines, special walls
//! colour-coded, and optional markers for monsters, weapons and pickups.

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use log::info;

use wad2svg::svg::{self, RenderOpts};
use wad2svg::wad::Archive;

#[derive(Parser)]
#[command(
    name = "wad2svg",
    about = "Generates SVG images from Doom and Doom II WAD files"
)]
struct Cli {
    /// Path to the WAD archive.
    wad_file: PathBuf,

    /// Name of the map to render, e.g. "E1M1" or "MAP01".
    map_name: String,

    /// Width of the generated SVG image.
    #[arg(long, default_value_t = 1280)]
    image_width: u32,

    /// Height of the generated SVG image.
    #[arg(long, default_value_t = 1024)]
    image_height: u32,

    /// Print the archive's map names to stderr.
    #[arg(long)]
    list_maps: bool,

    /// Whether or not to show ammunition.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    show_ammo: bool,

    /// Whether or not to show items.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    show_artifacts: bool,

    /// Whether or not to show keys.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    show_keys: bool,

    /// Whether or not to show monsters.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    show_monsters: bool,

    /// Whether or not to show powerups.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    show_powerups: bool,

    /// Whether or not to show weapons.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    show_weapons: bool,

    /// Whether or not to show multiplayer-only things.
    #[arg(long = "show-mp", default_value_t = false, action = clap::ArgAction::Set)]
    show_multiplayer: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let wad_name = cli
        .wad_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    info!("reading archive {}", cli.wad_file.display());
    let archive = Archive::open(&cli.wad_file)?;

    if cli.list_maps {
        for name in archive.level_names()? {
            eprintln!("{}", name);
        }
    }

    let level = archive.read_level(&cli.map_name)?;

    let opts = RenderOpts {
        wad_name,
        map_name: cli.map_name,
        image_width: cli.image_width,
        image_height: cli.image_height,
        show_ammo: cli.show_ammo,
        show_artifacts: cli.show_artifacts,
        show_keys: cli.show_keys,
        show_monsters: cli.show_monsters,
        show_powerups: cli.show_powerups,
        show_weapons: cli.show_weapons,
        show_multiplayer: cli.show_multiplayer,
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    svg::render(&mut out, &level, &opts)?;
    out.flush()?;
    Ok(())
}
