// src/svg/things.rs

use crate::map::Thing;

/// Display category of a placed object. Open-ended: type codes outside the
/// tables below simply have no marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThingClass {
    Ammo,
    Artifact,
    Key,
    Monster,
    Powerup,
    Weapon,
}

/// How one thing type is drawn: its category, hover name, marker colour and,
/// for monsters, the in-game collision radius used as the circle radius.
#[derive(Debug, Clone, Copy)]
pub struct ThingInfo {
    pub class: ThingClass,
    pub name: &'static str,
    pub colour: &'static str,
    pub radius: i32,
}

/// Looks up the display entry for a thing type code.
pub fn describe(thing_type: u16) -> Option<ThingInfo> {
    let ammo = |name| ThingInfo {
        class: ThingClass::Ammo,
        name,
        colour: "aqua",
        radius: 0,
    };
    let artifact = |name| ThingInfo {
        class: ThingClass::Artifact,
        name,
        colour: "green",
        radius: 0,
    };
    let key = |name, colour| ThingInfo {
        class: ThingClass::Key,
        name,
        colour,
        radius: 0,
    };
    let monster = |name, radius| ThingInfo {
        class: ThingClass::Monster,
        name,
        colour: "black",
        radius,
    };
    let powerup = |name| ThingInfo {
        class: ThingClass::Powerup,
        name,
        colour: "yellow",
        radius: 0,
    };
    let weapon = |name| ThingInfo {
        class: ThingClass::Weapon,
        name,
        colour: "red",
        radius: 0,
    };

    let info = match thing_type {
        17 => ammo("Energy cell pack"),
        2007 => ammo("Clip"),
        2008 => ammo("4 shotgun shells"),
        2010 => ammo("Rocket"),
        2046 => ammo("Box of rockets"),
        2047 => ammo("Energy cell"),
        2048 => ammo("Box of bullets"),
        2049 => ammo("Box of shotgun shells"),

        83 => artifact("Megasphere"),
        2013 => artifact("Supercharge"),
        2014 => artifact("Health bonus"),
        2015 => artifact("Armor bonus"),
        2022 => artifact("Invulnerability"),
        2023 => artifact("Berserk"),
        2024 => artifact("Partial invisibility"),
        2026 => artifact("Computer area map"),
        2045 => artifact("Light amplification visor"),

        5 => key("Blue keycard", "blue"),
        6 => key("Yellow keycard", "yellow"),
        13 => key("Red keycard", "red"),
        38 => key("Red skull key", "red"),
        39 => key("Yellow skull key", "yellow"),
        40 => key("Blue skull key", "blue"),

        7 => monster("Spiderdemon", 128),
        9 => monster("Shotgun guy", 20),
        16 => monster("Cyberdemon", 40),
        58 => monster("Spectre", 30),
        64 => monster("Arch-vile", 20),
        65 => monster("Heavy weapon dude", 20),
        66 => monster("Revenant", 20),
        67 => monster("Mancubus", 48),
        68 => monster("Arachnotron", 64),
        69 => monster("Hell knight", 24),
        71 => monster("Pain elemental", 31),
        72 => monster("Commander Keen", 16),
        84 => monster("Wolfenstein SS", 20),
        3001 => monster("Imp", 20),
        3002 => monster("Demon", 30),
        3003 => monster("Baron of Hell", 24),
        3004 => monster("Zombieman", 20),
        3005 => monster("Cacodemon", 31),
        3006 => monster("Lost soul", 16),

        8 => powerup("Backpack"),
        2011 => powerup("Stimpack"),
        2012 => powerup("Medikit"),
        2018 => powerup("Armor"),
        2019 => powerup("Megaarmor"),
        2025 => powerup("Radiation shielding suit"),

        82 => weapon("Super shotgun"),
        2001 => weapon("Shotgun"),
        2002 => weapon("Chaingun"),
        2003 => weapon("Rocket launcher"),
        2004 => weapon("Plasma gun"),
        2005 => weapon("Chainsaw"),
        2006 => weapon("BFG9000"),

        _ => return None,
    };
    Some(info)
}

/// A terse label of the spawn flags, shown in marker tooltips: skill groups
/// "12" / "3" / "45", "D" for deaf, "M" for multiplayer-only.
pub fn flags_label(thing: &Thing) -> String {
    let mut label = String::new();
    if thing.flags & Thing::FLAG_SKILL_1_2 != 0 {
        label.push_str("12");
    }
    if thing.flags & Thing::FLAG_SKILL_3 != 0 {
        label.push('3');
    }
    if thing.flags & Thing::FLAG_SKILL_4_5 != 0 {
        label.push_str("45");
    }
    if thing.flags & Thing::FLAG_DEAF != 0 {
        label.push('D');
    }
    if thing.flags & Thing::FLAG_MULTIPLAYER != 0 {
        label.push('M');
    }
    label
}
