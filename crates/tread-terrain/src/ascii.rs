//! Plain-text rendering of a map for logs and terminals.

use crate::{Terrain, TileMap, classify};

/// Glyph for a tile name.
///
/// Road and shoreline shapes get line-drawing glyphs from their name suffix;
/// plain tiles fall back to one glyph per terrain category.
pub fn glyph(tile_name: &str) -> char {
    let shape = tile_name.rsplit('_').next().unwrap_or(tile_name);
    match shape {
        "roadNorth" => '|',
        "roadEast" => '-',
        "roadCornerUL" => 'F',
        "roadCornerUR" => '7',
        "roadCornerLL" => 'L',
        "roadCornerLR" => 'J',
        "roadCrossing" | "roadCrossingRound" => '+',
        "roadSplitN" | "roadSplitS" | "roadSplitE" | "roadSplitW" => 'T',
        "transitionN" => '^',
        "transitionS" => 'v',
        "transitionE" => '>',
        "transitionW" => '<',
        "roadTransitionN" | "roadTransitionS" | "roadTransitionE" | "roadTransitionW" => '=',
        _ => match classify(tile_name) {
            Terrain::Grass => '.',
            Terrain::Sand => '#',
            Terrain::Water => '~',
            Terrain::Road => '+',
            Terrain::Out => ' ',
        },
    }
}

/// Renders the map as one line per row, glyphs separated by spaces.
pub fn render_ascii(map: &TileMap) -> String {
    let mut out = String::with_capacity(map.rows() * (map.cols() * 2 + 1));
    for (i, &id) in map.tiles().iter().enumerate() {
        out.push(glyph(&map.catalog().get(id).name));
        if (i + 1) % map.cols() == 0 {
            out.push('\n');
        } else {
            out.push(' ');
        }
    }
    out
}
