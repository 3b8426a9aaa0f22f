// src/outline.rs

//! Reassembles sector boundaries from the unordered linedef soup a WAD
//! stores. A sector's walls arrive in arbitrary file order, pointing in
//! arbitrary directions; rendering the sector as a filled shape needs them
//! regrouped into ordered runs of connected points. [`sector_boundary`]
//! selects the walls, [`stitch_chains`] groups them, and [`chain_points`]
//! resolves a run to drawable coordinates.

use std::collections::{HashMap, VecDeque};

use crate::map::{LineDef, Vertex};
use crate::wad::{Level, WadError};

/// A maximal run of linedefs connected end-to-point: one boundary loop of a
/// sector, or an open path when the geometry does not close. Closure is
/// implicit in the coordinates, never flagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub lines: Vec<LineDef>,
}

impl Chain {
    /// Vertex indices along the run: the first line's start, then every
    /// line's end in order.
    pub fn point_indices(&self) -> Vec<usize> {
        let mut points = Vec::with_capacity(self.lines.len() + 1);
        if let Some(first) = self.lines.first() {
            points.push(first.start);
        }
        points.extend(self.lines.iter().map(|l| l.end));
        points
    }

    /// True when the run returns to its starting vertex.
    pub fn is_closed(&self) -> bool {
        match (self.lines.first(), self.lines.last()) {
            (Some(first), Some(last)) => last.end == first.start,
            _ => false,
        }
    }
}

/// Collects the linedefs bounding the given sector: every line with at least
/// one side facing it, in linedef file order, each line once even when both
/// of its sides face the sector. A line whose side reference runs past the
/// sidedef list fails here, at the first dereference.
pub fn sector_boundary(level: &Level, sector: usize) -> Result<Vec<LineDef>, WadError> {
    let mut boundary = Vec::new();
    for line in &level.linedefs {
        let mut faces_sector = false;
        for side in [line.right, line.left].into_iter().flatten() {
            if level.sidedef(side)?.sector == sector {
                faces_sector = true;
            }
        }
        if faces_sector {
            boundary.push(line.clone());
        }
    }
    Ok(boundary)
}

/// Groups boundary lines into maximal connected chains.
///
/// Each chain grows greedily from a seed line: while any remaining line
/// touches the chain's head or tail vertex it is absorbed, flipped when its
/// direction opposes the chain's. Growth restarts after every absorption, so
/// a chain takes everything reachable by shared endpoints before the next
/// seed is picked. Disconnected input yields several chains; nothing is ever
/// dropped, and a lone unconnectable line becomes a chain of one.
///
/// When several remaining lines touch the same chain end (well-formed
/// geometry never branches, damaged archives can) the earliest one in
/// boundary order wins, so output for a given archive is stable run to run.
pub fn stitch_chains(boundary: Vec<LineDef>) -> Vec<Chain> {
    // Vertex index -> boundary positions of the lines touching it, kept
    // ascending so a bucket's first unused entry is the earliest match.
    let mut incident: HashMap<usize, Vec<usize>> = HashMap::new();
    for (i, line) in boundary.iter().enumerate() {
        incident.entry(line.start).or_default().push(i);
        if line.end != line.start {
            incident.entry(line.end).or_default().push(i);
        }
    }

    let mut used = vec![false; boundary.len()];
    let mut chains = Vec::new();
    for seed in 0..boundary.len() {
        if used[seed] {
            continue;
        }
        used[seed] = true;
        let mut chain: VecDeque<LineDef> = VecDeque::new();
        chain.push_back(boundary[seed].clone());
        loop {
            let head_end = chain.back().map(|l| l.end).unwrap_or_default();
            let tail_start = chain.front().map(|l| l.start).unwrap_or_default();
            let Some(next) = first_unused(&incident, &used, head_end, tail_start) else {
                break;
            };
            used[next] = true;
            let line = &boundary[next];
            if line.start == head_end {
                chain.push_back(line.clone());
            } else if line.end == tail_start {
                chain.push_front(line.clone());
            } else if line.end == head_end {
                chain.push_back(line.flip());
            } else {
                // line.start == tail_start, the only way it got picked
                chain.push_front(line.flip());
            }
        }
        chains.push(Chain {
            lines: chain.into(),
        });
    }
    chains
}

/// The earliest-boundary-order unused line touching either chain end.
fn first_unused(
    incident: &HashMap<usize, Vec<usize>>,
    used: &[bool],
    head_end: usize,
    tail_start: usize,
) -> Option<usize> {
    let first_at = |vertex: usize| {
        incident
            .get(&vertex)
            .and_then(|bucket| bucket.iter().copied().find(|&i| !used[i]))
    };
    match (first_at(head_end), first_at(tail_start)) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

/// Resolves a chain to vertex coordinates: the first line's start point
/// followed by every line's end point.
pub fn chain_points(chain: &Chain, level: &Level) -> Result<Vec<Vertex>, WadError> {
    let mut points = Vec::with_capacity(chain.lines.len() + 1);
    for index in chain.point_indices() {
        points.push(*level.vertex(index)?);
    }
    Ok(points)
}

/// Boundary selection and stitching in one step: the outline polylines of
/// one sector, ready for a path serializer.
pub fn sector_outlines(level: &Level, sector: usize) -> Result<Vec<Vec<Vertex>>, WadError> {
    let chains = stitch_chains(sector_boundary(level, sector)?);
    chains
        .iter()
        .map(|chain| chain_points(chain, level))
        .collect()
}
