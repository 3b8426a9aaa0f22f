// src/svg/mod.rs

//! Serializes a decoded [`Level`] to an SVG document: one filled `<path>`
//! per sector built from its stitched outline chains, colour-coded restrokes
//! of special walls, and optional per-category markers for placed things.

pub mod style;
pub mod things;

use std::io::Write;

use log::info;
use rayon::prelude::*;

use crate::map::Thing;
use crate::outline::{chain_points, sector_boundary, stitch_chains};
use crate::wad::{Level, WadError};
use things::{describe, flags_label, ThingClass};

/// Output options, mirroring the command-line flag set.
#[derive(Debug, Clone)]
pub struct RenderOpts {
    pub wad_name: String,
    pub map_name: String,
    pub image_width: u32,
    pub image_height: u32,
    pub show_ammo: bool,
    pub show_artifacts: bool,
    pub show_keys: bool,
    pub show_monsters: bool,
    pub show_powerups: bool,
    pub show_weapons: bool,
    pub show_multiplayer: bool,
}

impl Default for RenderOpts {
    fn default() -> Self {
        RenderOpts {
            wad_name: String::new(),
            map_name: String::new(),
            image_width: 1280,
            image_height: 1024,
            show_ammo: true,
            show_artifacts: true,
            show_keys: true,
            show_monsters: true,
            show_powerups: true,
            show_weapons: true,
            show_multiplayer: false,
        }
    }
}

/// Writes the whole SVG document for one level.
///
/// Sector fragments are rendered in parallel (the level is immutable) and
/// written out in sector-index order, so output is identical to a serial
/// pass.
pub fn render<W: Write>(w: &mut W, level: &Level, opts: &RenderOpts) -> Result<(), WadError> {
    let (min_x, min_y, max_x, max_y) = level.bounds().unwrap_or((0, 0, 0, 0));
    let width = max_x as i32 - min_x as i32;
    let height = max_y as i32 - min_y as i32;
    info!(
        "map bounds x: {}..{} ({} wide), y: {}..{} ({} tall)",
        min_x, max_x, width, min_y, max_y, height
    );

    writeln!(w, "<?xml version=\"1.0\" standalone=\"no\"?>")?;
    writeln!(
        w,
        "<svg width=\"{}\" height=\"{}\" viewBox=\"{} {} {} {}\" xmlns=\"http://www.w3.org/2000/svg\">",
        opts.image_width, opts.image_height, min_x, min_y, width, height
    )?;
    writeln!(w, "  <title>{} - {}</title>", opts.wad_name, opts.map_name)?;
    writeln!(w, "  <g fill-rule=\"evenodd\">")?;

    let fragments = (0..level.sectors.len())
        .into_par_iter()
        .map(|i| sector_fragment(level, i))
        .collect::<Result<Vec<String>, WadError>>()?;
    for fragment in &fragments {
        w.write_all(fragment.as_bytes())?;
    }

    for thing in &level.things {
        if let Some(marker) = thing_fragment(thing, opts) {
            w.write_all(marker.as_bytes())?;
        }
    }

    writeln!(w, "  </g>")?;
    writeln!(w, "</svg>")?;
    Ok(())
}

/// One sector's `<g>` element: the filled outline path, then colour-coded
/// restrokes of its special walls.
fn sector_fragment(level: &Level, sector_index: usize) -> Result<String, WadError> {
    let sector = &level.sectors[sector_index];
    let boundary = sector_boundary(level, sector_index)?;
    let chains = stitch_chains(boundary.clone());

    let mut out = String::new();
    out.push_str(&format!(
        "    <g {}>\n",
        style::sector_attributes(sector)
    ));
    out.push_str(&format!("      <title>Sector {}</title>\n", sector_index));
    out.push_str(&format!(
        "      <desc>Sector Type: {}</desc>\n",
        sector.sector_type
    ));

    // All chains share one path; the even-odd fill rule on the enclosing
    // group turns inner loops into holes.
    let mut d = String::new();
    for chain in &chains {
        let points = chain_points(chain, level)?;
        d.push_str(&format!(
            "M {} {} L {} {} ",
            points[0].x, points[0].y, points[1].x, points[1].y
        ));
        for p in &points[2..] {
            d.push_str(&format!("{} {} ", p.x, p.y));
        }
    }
    out.push_str(&format!("      <path d=\"{}\"/>\n", d));

    for line in boundary.iter().filter(|l| l.special != 0) {
        let start = level.vertex(line.start)?;
        let end = level.vertex(line.end)?;
        out.push_str(&format!("      <!-- Type {} -->\n", line.special));
        out.push_str(&format!(
            "      <path d=\"M {} {} L {} {}\" stroke=\"{}\" stroke-width=\"3\"/>\n",
            start.x,
            start.y,
            end.x,
            end.y,
            style::special_line_stroke(line)
        ));
    }
    out.push_str("    </g>\n");
    Ok(out)
}

/// The marker for one placed thing, or `None` when its category is switched
/// off, it is multiplayer-only in a single-player render, or it has no
/// display entry at all.
fn thing_fragment(thing: &Thing, opts: &RenderOpts) -> Option<String> {
    if thing.is_multiplayer_only() && !opts.show_multiplayer {
        return None;
    }
    let info = describe(thing.thing_type)?;
    let enabled = match info.class {
        ThingClass::Ammo => opts.show_ammo,
        ThingClass::Artifact => opts.show_artifacts,
        ThingClass::Key => opts.show_keys,
        ThingClass::Monster => opts.show_monsters,
        ThingClass::Powerup => opts.show_powerups,
        ThingClass::Weapon => opts.show_weapons,
    };
    if !enabled {
        return None;
    }
    let title = format!("{} [{}]", info.name, flags_label(thing));
    let marker = match info.class {
        ThingClass::Monster => format!(
            "    <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"><title>{}</title></circle>\n",
            thing.x - 10,
            thing.y - 10,
            info.radius,
            info.colour,
            title
        ),
        // Keys draw without an outline stroke.
        ThingClass::Key => format!(
            "    <rect x=\"{}\" y=\"{}\" width=\"20\" height=\"20\" fill=\"{}\"><title>{}</title></rect>\n",
            thing.x - 10,
            thing.y - 10,
            info.colour,
            title
        ),
        _ => format!(
            "    <rect x=\"{}\" y=\"{}\" width=\"20\" height=\"20\" stroke=\"black\" fill=\"{}\"><title>{}</title></rect>\n",
            thing.x - 10,
            thing.y - 10,
            info.colour,
            title
        ),
    };
    Some(marker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{LineDef, Sector, SideDef, Vertex};

    fn square_level() -> Level {
        let line = |start, end| LineDef {
            start,
            end,
            flags: 0,
            special: 0,
            tag: 0,
            right: Some(0),
            left: None,
        };
        Level {
            vertices: vec![
                Vertex { x: 0, y: 0 },
                Vertex { x: 64, y: 0 },
                Vertex { x: 64, y: 64 },
                Vertex { x: 0, y: 64 },
            ],
            linedefs: vec![line(0, 1), line(1, 2), line(2, 3), line(3, 0)],
            sidedefs: vec![SideDef {
                x_offset: 0,
                y_offset: 0,
                upper_tex: String::new(),
                lower_tex: String::new(),
                mid_tex: String::new(),
                sector: 0,
            }],
            sectors: vec![Sector {
                floor_height: 0,
                ceiling_height: 128,
                floor_tex: "FLOOR4_8".to_string(),
                ceiling_tex: "CEIL3_5".to_string(),
                light: 160,
                sector_type: 0,
                tag: 0,
            }],
            things: vec![Thing {
                x: 32,
                y: 32,
                angle: 0,
                thing_type: 3004,
                flags: Thing::FLAG_SKILL_1_2,
            }],
        }
    }

    fn render_to_string(level: &Level, opts: &RenderOpts) -> String {
        let mut out = Vec::new();
        render(&mut out, level, opts).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn document_structure() {
        let svg = render_to_string(&square_level(), &RenderOpts::default());
        assert!(svg.starts_with("<?xml version=\"1.0\" standalone=\"no\"?>\n"));
        assert!(svg.contains("viewBox=\"0 0 64 64\""));
        assert!(svg.contains("<g fill-rule=\"evenodd\">"));
        assert!(svg.contains("<title>Sector 0</title>"));
        assert!(svg.contains("<path d=\"M 0 0 L 64 0 64 64 0 64 0 0 \"/>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn monster_marker_drawn_as_circle() {
        let svg = render_to_string(&square_level(), &RenderOpts::default());
        assert!(svg.contains("<circle cx=\"22\" cy=\"22\" r=\"20\" fill=\"black\">"));
        assert!(svg.contains("<title>Zombieman [12]</title>"));
    }

    #[test]
    fn monsters_can_be_switched_off() {
        let opts = RenderOpts {
            show_monsters: false,
            ..RenderOpts::default()
        };
        let svg = render_to_string(&square_level(), &opts);
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn multiplayer_things_hidden_by_default() {
        let mut level = square_level();
        level.things[0].flags |= Thing::FLAG_MULTIPLAYER;
        let svg = render_to_string(&level, &RenderOpts::default());
        assert!(!svg.contains("<circle"));

        let opts = RenderOpts {
            show_multiplayer: true,
            ..RenderOpts::default()
        };
        let svg = render_to_string(&level, &opts);
        assert!(svg.contains("<circle"));
    }

    #[test]
    fn special_walls_restroked_with_category_colour() {
        let mut level = square_level();
        level.linedefs[0].special = 1; // a door
        let svg = render_to_string(&level, &RenderOpts::default());
        assert!(svg.contains("<!-- Type 1 -->"));
        assert!(svg.contains("stroke=\"green\" stroke-width=\"3\""));
    }

    #[test]
    fn end_to_end_from_archive_bytes() {
        use crate::wad::Archive;

        let level = square_level();
        let mut things = Vec::new();
        let mut linedefs = Vec::new();
        let mut sidedefs = Vec::new();
        let mut vertices = Vec::new();
        let mut sectors = Vec::new();
        for t in &level.things {
            t.to_wad(&mut things).unwrap();
        }
        for l in &level.linedefs {
            l.to_wad(&mut linedefs).unwrap();
        }
        for s in &level.sidedefs {
            s.to_wad(&mut sidedefs).unwrap();
        }
        for v in &level.vertices {
            v.to_wad(&mut vertices).unwrap();
        }
        for s in &level.sectors {
            s.to_wad(&mut sectors).unwrap();
        }
        let wad = crate::wad::archive::tests::build_wad(&[
            ("E1M1", &[]),
            ("THINGS", &things),
            ("LINEDEFS", &linedefs),
            ("SIDEDEFS", &sidedefs),
            ("VERTEXES", &vertices),
            ("SECTORS", &sectors),
        ]);
        let archive = Archive::from_bytes(wad).unwrap();
        let decoded = archive.read_level("E1M1").unwrap();
        assert_eq!(decoded, level);

        let svg = render_to_string(&decoded, &RenderOpts::default());
        assert!(svg.contains("<path d=\"M 0 0 L 64 0 64 64 0 64 0 0 \"/>"));
        assert!(svg.contains("<title>Zombieman [12]</title>"));
    }

    #[test]
    fn bad_geometry_propagates_index_error() {
        let mut level = square_level();
        level.linedefs[0].start = 99;
        let mut out = Vec::new();
        let err = render(&mut out, &level, &RenderOpts::default()).unwrap_err();
        assert!(matches!(err, WadError::IndexOutOfRange { kind: "vertex", .. }));
    }
}
