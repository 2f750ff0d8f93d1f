// Enumeration of the 3x3x3 grid of cubies and their sticker colors.
use bevy::prelude::*;

use crate::utils::constants::rubik_constants::{FACE_COUNT, GRID_CUBIES, GRID_EXTENT};
use crate::utils::objects::CubeDescriptor;
use crate::utils::palette::Palette;

/// Picks the sticker of one face pair: the positive face at +extent, the negative at -extent.
fn sticker_pair(coordinate: i32, positive: Color, negative: Color, interior: Color) -> (Color, Color) {
    (
        if coordinate == GRID_EXTENT { positive } else { interior },
        if coordinate == -GRID_EXTENT { negative } else { interior },
    )
}

/// Face colors of the cubie at `position`, ordered +X, -X, +Y, -Y, +Z, -Z.
/// Only faces on the outer boundary of the grid get a sticker.
pub fn face_colors_for(position: IVec3, palette: &Palette) -> [Color; FACE_COUNT] {
    let (right, left) = sticker_pair(position.x, palette.right, palette.left, palette.interior);
    let (up, down) = sticker_pair(position.y, palette.up, palette.down, palette.interior);
    let (front, back) = sticker_pair(position.z, palette.front, palette.back, palette.interior);

    [right, left, up, down, front, back]
}

/// True for the cubies whose depth coordinate is at the positive extreme.
pub fn is_front_layer(position: IVec3) -> bool {
    position.z == GRID_EXTENT
}

/// All 27 cubies, x outermost then y then z. Front-layer cubies carry `angle`.
pub fn build_grid(palette: &Palette, angle: u32) -> Vec<CubeDescriptor> {
    let mut grid = Vec::with_capacity(GRID_CUBIES);

    for x in -GRID_EXTENT..=GRID_EXTENT {
        for y in -GRID_EXTENT..=GRID_EXTENT {
            for z in -GRID_EXTENT..=GRID_EXTENT {
                let position = IVec3::new(x, y, z);
                grid.push(CubeDescriptor {
                    position,
                    face_colors: face_colors_for(position, palette),
                    rotation_angle_degrees: is_front_layer(position).then_some(angle),
                });
            }
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_grid_covers_every_position_once() {
        let grid = build_grid(&Palette::default(), 0);
        assert_eq!(grid.len(), 27);

        let positions: HashSet<IVec3> = grid.iter().map(|cubie| cubie.position).collect();
        assert_eq!(positions.len(), 27);
        assert!(positions.iter().all(|p| p.abs().max_element() <= 1));
    }

    #[test]
    fn test_only_front_layer_is_tagged() {
        let grid = build_grid(&Palette::default(), 42);
        let tagged: Vec<&CubeDescriptor> = grid.iter().filter(|c| c.is_front_layer()).collect();

        assert_eq!(tagged.len(), 9);
        assert!(tagged.iter().all(|c| c.position.z == 1));
        assert!(tagged.iter().all(|c| c.rotation_angle_degrees == Some(42)));
        assert!(
            grid.iter()
                .filter(|c| c.position.z != 1)
                .all(|c| c.rotation_angle_degrees.is_none())
        );
    }

    #[test]
    fn test_corner_cubie_has_three_stickers() {
        let palette = Palette::default();
        let colors = face_colors_for(IVec3::new(1, -1, 1), &palette);
        assert_eq!(
            colors,
            [
                palette.right,
                palette.interior,
                palette.interior,
                palette.down,
                palette.front,
                palette.interior,
            ]
        );
    }

    #[test]
    fn test_core_cubie_is_all_interior() {
        let palette = Palette::default();
        let colors = face_colors_for(IVec3::ZERO, &palette);
        assert!(colors.iter().all(|c| *c == palette.interior));
    }

    #[test]
    fn test_sticker_count_matches_boundary_faces() {
        let palette = Palette::default();
        for cubie in build_grid(&palette, 0) {
            let boundary_faces = cubie
                .position
                .to_array()
                .iter()
                .filter(|c| c.abs() == 1)
                .count();
            let stickers = cubie
                .face_colors
                .iter()
                .filter(|c| **c != palette.interior)
                .count();
            assert_eq!(stickers, boundary_faces);
        }
    }
}
