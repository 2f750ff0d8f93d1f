use bevy::prelude::*;

use crate::log;
use crate::utils::camera::OrbitCamera;
use crate::utils::config::SceneConfig;
use crate::utils::constants::lighting_constants::{
    LIGHT_RANGE, POINT_LIGHT_POSITION, SHADOWS_ENABLED, SPOTLIGHT_INNER_ANGLE,
    SPOTLIGHT_OUTER_ANGLE, SPOTLIGHT_POSITION,
};
use crate::utils::objects::{AnimationAngle, SceneEntity, SpinTimer};

/// Mounts the spin animation: a fresh angle and a running timer.
pub fn start_spin(mut commands: Commands, config: Res<SceneConfig>) {
    let animation = &config.animation;
    let start = AnimationAngle(animation.start_degrees % 360);

    commands.insert_resource(start);
    commands.insert_resource(SpinTimer::new(animation.tick_period()));

    info!(
        "Spin started at {} degrees, one degree every {:?}",
        start.0,
        animation.tick_period()
    );
}

/// Spawns camera and lights.
pub fn setup(mut commands: Commands, config: Res<SceneConfig>) {
    let orbit = OrbitCamera::from_config(&config.camera);

    // Camera
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: config.camera.fov_degrees.to_radians(),
            ..default()
        }),
        orbit.calculate_transform(),
        orbit,
        SceneEntity,
    ));

    // Narrow spot light aimed at the cube
    commands.spawn((
        SpotLight {
            intensity: config.lighting.spot_intensity,
            range: LIGHT_RANGE,
            outer_angle: SPOTLIGHT_OUTER_ANGLE,
            inner_angle: SPOTLIGHT_INNER_ANGLE,
            shadows_enabled: SHADOWS_ENABLED,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(SPOTLIGHT_POSITION))
            .looking_at(Vec3::ZERO, Vec3::Y),
        SceneEntity,
    ));

    // Fill light from the opposite corner
    commands.spawn((
        PointLight {
            intensity: config.lighting.point_intensity,
            range: LIGHT_RANGE,
            shadows_enabled: SHADOWS_ENABLED,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(POINT_LIGHT_POSITION)),
        SceneEntity,
    ));

    // Ambient light
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: config.lighting.ambient_brightness,
        affects_lightmapped_meshes: true,
    });

    log!("🧊 Rubik scene mounted");
    log!("🖱️  Drag to orbit, right-drag to pan, scroll to zoom");
    log!("⌨️  Arrows/WASD orbit | Home resets view | SPACE pauses | M unmounts");
}

/// Unmounts the scene: despawns every scene entity and stops the timer.
pub fn despawn_setup(mut commands: Commands, query: Query<Entity, With<SceneEntity>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }

    commands.remove_resource::<SpinTimer>();
    commands.remove_resource::<AnimationAngle>();

    log!("🧊 Rubik scene unmounted");
}
