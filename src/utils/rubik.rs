// This file contains the logic for spawning the cubies, painting their faces and outlining them.
use bevy::prelude::*;

use crate::utils::animation::place_front_layer;
use crate::utils::config::SceneConfig;
use crate::utils::constants::rubik_constants::{CUBIE_SIZE, EDGE_SCALE};
use crate::utils::geometry::{box_geometry, paint_faces, placement};
use crate::utils::grid::build_grid;
use crate::utils::objects::{
    AnimationAngle, Cubie, EdgeStyle, FaceColors, FrontLayer, SceneEntity, ScenePhase,
};
use crate::utils::palette::Palette;

/// Spawns the 27 cubies at their grid positions, the front layer already turned to the current angle.
pub fn spawn_rubik(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    palette: Res<Palette>,
    config: Res<SceneConfig>,
    angle: Res<AnimationAngle>,
) {
    // One vertex-colored material shared by every cubie, the colors live in the meshes.
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: config.scene.unlit,
        ..default()
    });

    let grid = build_grid(&palette, angle.0);
    for descriptor in &grid {
        let mut mesh = box_geometry(CUBIE_SIZE);
        paint_faces(&mut mesh, &descriptor.face_colors);

        let transform: Transform =
            placement(descriptor.position, descriptor.rotation_angle_degrees).into();

        let mut cubie = commands.spawn((
            Mesh3d(meshes.add(mesh)),
            MeshMaterial3d(material.clone()),
            transform,
            Cubie {
                position: descriptor.position,
            },
            FaceColors(descriptor.face_colors),
            SceneEntity,
        ));

        if descriptor.is_front_layer() {
            cubie.insert(FrontLayer);
        }
    }

    debug!("Spawned {} cubies at {} degrees", grid.len(), angle.0);
}

/// Repaints the mesh of every cubie whose face colors changed.
pub fn repaint_changed_faces(
    mut meshes: ResMut<Assets<Mesh>>,
    cubies: Query<(&Cubie, &Mesh3d, &FaceColors), Changed<FaceColors>>,
) {
    for (cubie, mesh_handle, colors) in &cubies {
        // Missing mesh: this change is dropped, the repaint is a no-op.
        let Some(mesh) = meshes.get_mut(&mesh_handle.0) else {
            debug!("Mesh of cubie {} not available, skipping repaint", cubie.position);
            continue;
        };
        paint_faces(mesh, &colors.0);
    }
}

/// Applies the configured outline width to the default gizmo group.
pub fn configure_edge_gizmos(mut config_store: ResMut<GizmoConfigStore>, style: Res<EdgeStyle>) {
    let (config, _) = config_store.config_mut::<DefaultGizmoConfigGroup>();
    config.line.width = style.width;
}

/// Outlines every cubie so the stickers read as separate squares.
pub fn draw_cubie_edges(
    mut gizmos: Gizmos,
    style: Res<EdgeStyle>,
    cubies: Query<&Transform, With<Cubie>>,
) {
    if !style.visible {
        return;
    }

    for transform in &cubies {
        gizmos.cuboid(
            transform.with_scale(Vec3::splat(CUBIE_SIZE * EDGE_SCALE)),
            style.color,
        );
    }
}

/// Sticker outlines, drawn with gizmos after the front layer has been placed.
pub struct EdgesPlugin;

impl Plugin for EdgesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, configure_edge_gizmos).add_systems(
            Update,
            draw_cubie_edges
                .after(place_front_layer)
                .run_if(in_state(ScenePhase::Mounted)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use bevy::mesh::VertexAttributeValues;

    fn rubik_world(angle: u32) -> World {
        let mut world = World::new();
        world.init_resource::<Assets<Mesh>>();
        world.init_resource::<Assets<StandardMaterial>>();
        world.insert_resource(Palette::default());
        world.insert_resource(SceneConfig::default());
        world.insert_resource(AnimationAngle(angle));
        world
    }

    fn mesh_colors(world: &World, handle: &Handle<Mesh>) -> Vec<[f32; 4]> {
        let mesh = world.resource::<Assets<Mesh>>().get(handle).unwrap();
        match mesh.attribute(Mesh::ATTRIBUTE_COLOR) {
            Some(VertexAttributeValues::Float32x4(colors)) => colors.clone(),
            _ => panic!("cubie mesh should carry Float32x4 colors"),
        }
    }

    #[test]
    fn test_spawn_rubik_spawns_grid_with_front_layer() {
        let mut world = rubik_world(1);
        world.run_system_once(spawn_rubik).unwrap();

        let cubies = world.query::<&Cubie>().iter(&world).count();
        let front = world
            .query_filtered::<&Cubie, With<FrontLayer>>()
            .iter(&world)
            .count();
        assert_eq!(cubies, 27);
        assert_eq!(front, 9);

        let all_front_at_z1 = world
            .query_filtered::<(&Cubie, &Transform), With<FrontLayer>>()
            .iter(&world)
            .all(|(cubie, transform)| cubie.position.z == 1 && transform.translation.z == 1.0);
        assert!(all_front_at_z1);
    }

    #[test]
    fn test_spawned_meshes_are_painted() {
        let mut world = rubik_world(0);
        world.run_system_once(spawn_rubik).unwrap();

        let cubies: Vec<(Handle<Mesh>, FaceColors)> = world
            .query::<(&Mesh3d, &FaceColors)>()
            .iter(&world)
            .map(|(mesh, colors)| (mesh.0.clone(), colors.clone()))
            .collect();

        for (handle, colors) in cubies {
            let painted = mesh_colors(&world, &handle);
            assert_eq!(painted.len(), 36);
            for (i, rgba) in painted.iter().enumerate() {
                let expected = colors.0[i / 6].to_linear();
                assert_eq!(*rgba, [expected.red, expected.green, expected.blue, 1.0]);
            }
        }
    }

    #[test]
    fn test_changed_face_colors_repaint_mesh() {
        let mut world = rubik_world(0);
        world.run_system_once(spawn_rubik).unwrap();

        let (entity, handle) = world
            .query::<(Entity, &Mesh3d)>()
            .iter(&world)
            .map(|(entity, mesh)| (entity, mesh.0.clone()))
            .next()
            .unwrap();

        let magenta = Color::srgb(1.0, 0.0, 1.0);
        world.entity_mut(entity).insert(FaceColors([magenta; 6]));
        world.run_system_once(repaint_changed_faces).unwrap();

        let linear = magenta.to_linear();
        let expected = [linear.red, linear.green, linear.blue, 1.0];
        assert!(mesh_colors(&world, &handle).iter().all(|rgba| *rgba == expected));
    }

    #[test]
    fn test_repaint_skips_missing_mesh() {
        let mut world = rubik_world(0);
        world.spawn((
            Cubie {
                position: IVec3::ZERO,
            },
            Mesh3d(Handle::default()),
            FaceColors([Color::BLACK; 6]),
        ));

        world.run_system_once(repaint_changed_faces).unwrap();
        assert_eq!(world.resource::<Assets<Mesh>>().len(), 0);
    }
}
