//! Geometry of a single cubie: the box mesh, its per-face vertex colors and
//! the polar placement of the spinning layer.
use bevy::mesh::{PrimitiveTopology, VertexAttributeValues};
use bevy::prelude::*;

use crate::utils::constants::rubik_constants::{FACE_COUNT, VERTICES_PER_FACE};

/// Outward normals of the box faces, in the same order as `FaceColors`.
pub const BOX_FACE_NORMALS: [Vec3; FACE_COUNT] = [
    Vec3::X,
    Vec3::NEG_X,
    Vec3::Y,
    Vec3::NEG_Y,
    Vec3::Z,
    Vec3::NEG_Z,
];

// In-plane axis of each face; the second axis is normal x tangent, so corners wind counter-clockwise.
const BOX_FACE_TANGENTS: [Vec3; FACE_COUNT] = [
    Vec3::NEG_Z,
    Vec3::Z,
    Vec3::X,
    Vec3::X,
    Vec3::X,
    Vec3::NEG_X,
];

/// Builds a non-indexed box of edge `size`: 6 faces x 2 triangles x 3 vertices,
/// faces ordered +X, -X, +Y, -Y, +Z, -Z.
pub fn box_geometry(size: f32) -> Mesh {
    let half = size / 2.0;
    let vertex_count = FACE_COUNT * VERTICES_PER_FACE;

    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(vertex_count);
    let mut normals: Vec<[f32; 3]> = Vec::with_capacity(vertex_count);
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(vertex_count);

    for (normal, tangent) in BOX_FACE_NORMALS.iter().zip(BOX_FACE_TANGENTS.iter()) {
        let bitangent = normal.cross(*tangent);
        let corner = |su: f32, sv: f32| (*normal + *tangent * su + bitangent * sv) * half;

        let quad = [
            (corner(-1.0, -1.0), [0.0, 1.0]),
            (corner(1.0, -1.0), [1.0, 1.0]),
            (corner(1.0, 1.0), [1.0, 0.0]),
            (corner(-1.0, 1.0), [0.0, 0.0]),
        ];

        // Two triangles sharing the 0-2 diagonal.
        for index in [0, 1, 2, 0, 2, 3] {
            let (position, uv) = quad[index];
            positions.push(position.to_array());
            normals.push(normal.to_array());
            uvs.push(uv);
        }
    }

    Mesh::new(PrimitiveTopology::TriangleList, Default::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
}

/// Linear RGB per vertex: vertex `i` takes `colors[i / 6]`.
pub fn face_vertex_colors(vertex_count: usize, colors: &[Color; FACE_COUNT]) -> Vec<[f32; 3]> {
    (0..vertex_count)
        .map(|i| {
            let face = (i / VERTICES_PER_FACE).min(FACE_COUNT - 1);
            let linear = colors[face].to_linear();
            [linear.red, linear.green, linear.blue]
        })
        .collect()
}

/// Index into `BOX_FACE_NORMALS` of the face whose normal is closest to `normal`.
pub fn face_index_of(normal: Vec3) -> usize {
    BOX_FACE_NORMALS
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.dot(normal).total_cmp(&b.dot(normal)))
        .map(|(index, _)| index)
        .unwrap_or(0)
}

/// Paints each face of a box mesh one flat color.
///
/// Indexed meshes are first expanded so no vertex is shared between faces.
/// Each vertex takes the color of the face its normal points along, so boxes
/// that list their faces in another order are painted the same way; a mesh
/// without normals falls back to blocks of six vertices in face order.
/// The color attribute is replaced, so repainting with the same colors
/// produces the same buffer.
pub fn paint_faces(mesh: &mut Mesh, colors: &[Color; FACE_COUNT]) {
    if mesh.indices().is_some() {
        mesh.duplicate_vertices();
    }

    let rgb = match mesh.attribute(Mesh::ATTRIBUTE_NORMAL) {
        Some(VertexAttributeValues::Float32x3(normals)) => normals
            .iter()
            .map(|normal| {
                let linear = colors[face_index_of(Vec3::from_array(*normal))].to_linear();
                [linear.red, linear.green, linear.blue]
            })
            .collect(),
        _ => face_vertex_colors(mesh.count_vertices(), colors),
    };

    let rgba: Vec<[f32; 4]> = rgb.into_iter().map(|[r, g, b]| [r, g, b, 1.0]).collect();

    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, rgba);
}

/// Returns `(r, theta)` of a point in the plane, theta in radians.
pub fn rectangular_to_polar(x: f32, y: f32) -> (f32, f32) {
    ((x * x + y * y).sqrt(), y.atan2(x))
}

pub fn polar_to_rectangular(r: f32, theta: f32) -> (f32, f32) {
    (r * theta.cos(), r * theta.sin())
}

/// Rendered position and orientation of a cubie.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl From<Placement> for Transform {
    fn from(placement: Placement) -> Self {
        Transform::from_translation(placement.translation).with_rotation(placement.rotation)
    }
}

/// Where a cubie is drawn.
///
/// Without an angle the grid position is used as is. With an angle the
/// `(x, y)` position orbits the Z axis by that many degrees, the depth is
/// pinned to the front plane `z = 1`, and the cubie is tilted about Z by the
/// same angle.
pub fn placement(position: IVec3, degrees: Option<u32>) -> Placement {
    let Some(degrees) = degrees else {
        return Placement {
            translation: position.as_vec3(),
            rotation: Quat::IDENTITY,
        };
    };

    let radians = (degrees as f32).to_radians();
    let (r, theta) = rectangular_to_polar(position.x as f32, position.y as f32);
    let (x, y) = polar_to_rectangular(r, theta + radians);

    Placement {
        translation: Vec3::new(x, y, 1.0),
        rotation: Quat::from_rotation_z(radians),
    }
}
