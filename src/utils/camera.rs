//! Orbit camera around the cube: drag to rotate, right-drag to pan, wheel to zoom.

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use std::f32::consts::TAU;

use crate::utils::config::CameraConfig;
use crate::utils::constants::camera_3d_constants::{
    CAMERA_3D_INITIAL_X, CAMERA_3D_INITIAL_Y, CAMERA_3D_INITIAL_Z, CAMERA_3D_KEYBOARD_SPEED,
    CAMERA_3D_MAX_PITCH,
};

// Pixel-based wheels report roughly this many pixels per notch.
const PIXELS_PER_SCROLL_LINE: f32 = 100.0;

/// Orbit camera component
#[derive(Component, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Point the camera orbits around
    pub target: Vec3,
    /// Distance from target
    pub distance: f32,
    /// Rotation around vertical axis
    pub yaw: f32,
    /// Elevation above the horizontal plane
    pub pitch: f32,
    /// Vertical field of view in radians, used to pan at cursor speed
    pub fov: f32,
    pub rotate_speed: f32,
    pub zoom_step: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    // View restored by `reset`
    home: (Vec3, f32, f32, f32),
}

impl OrbitCamera {
    /// Camera at the configured distance, looking at the origin from the initial direction.
    pub fn from_config(config: &CameraConfig) -> Self {
        let config = config.clone().sanitized();
        let direction =
            Vec3::new(CAMERA_3D_INITIAL_X, CAMERA_3D_INITIAL_Y, CAMERA_3D_INITIAL_Z).normalize();
        let yaw = direction.x.atan2(direction.z);
        let pitch = direction.y.asin();
        let distance = config.distance.clamp(config.min_distance, config.max_distance);

        Self {
            target: Vec3::ZERO,
            distance,
            yaw,
            pitch,
            fov: config.fov_degrees.to_radians(),
            rotate_speed: config.rotate_speed,
            zoom_step: config.zoom_step,
            min_distance: config.min_distance,
            max_distance: config.max_distance,
            home: (Vec3::ZERO, distance, yaw, pitch),
        }
    }

    /// Calculate transform from current orbit parameters
    pub fn calculate_transform(&self) -> Transform {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();

        let position = self.target + Vec3::new(x, y, z);
        Transform::from_translation(position).looking_at(self.target, Vec3::Y)
    }

    /// Dragging across the full window height turns by a full circle times the rotate speed.
    pub fn rotate_by_drag(&mut self, delta: Vec2, window_height: f32) {
        if window_height <= 0.0 {
            return;
        }
        let scale = TAU * self.rotate_speed / window_height;
        self.yaw -= delta.x * scale;
        self.pitch = (self.pitch + delta.y * scale).clamp(-CAMERA_3D_MAX_PITCH, CAMERA_3D_MAX_PITCH);
    }

    /// Moves the target so the point under the cursor follows it.
    pub fn pan_by_drag(&mut self, delta: Vec2, window_height: f32) {
        if window_height <= 0.0 {
            return;
        }
        let transform = self.calculate_transform();
        let scale = 2.0 * self.distance * (self.fov / 2.0).tan() / window_height;
        let offset = -*transform.right() * delta.x * scale + *transform.up() * delta.y * scale;
        self.target += offset;
    }

    /// Positive steps zoom in by `zoom_step` each.
    pub fn zoom_by(&mut self, steps: f32) {
        self.distance =
            (self.distance * self.zoom_step.powf(steps)).clamp(self.min_distance, self.max_distance);
    }

    /// Reset to the start-up view
    pub fn reset(&mut self) {
        let (target, distance, yaw, pitch) = self.home;
        self.target = target;
        self.distance = distance;
        self.yaw = yaw;
        self.pitch = pitch;
    }
}

/// System that handles orbit (left drag) and pan (right drag)
pub fn orbit_camera(
    mut camera_query: Query<(&mut OrbitCamera, &mut Transform)>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut motion_events: MessageReader<MouseMotion>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let rotating = mouse_buttons.pressed(MouseButton::Left);
    let panning = mouse_buttons.pressed(MouseButton::Right);
    if !rotating && !panning {
        motion_events.clear();
        return;
    }

    let delta: Vec2 = motion_events.read().map(|event| event.delta).sum();
    if delta.length_squared() < 0.001 {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((mut orbit, mut transform)) = camera_query.single_mut() else {
        // No camera, or more than one camera
        return;
    };

    if rotating {
        orbit.rotate_by_drag(delta, window.height());
    } else {
        orbit.pan_by_drag(delta, window.height());
    }
    *transform = orbit.calculate_transform();
}

/// System that handles camera zoom via scroll wheel
pub fn zoom_camera(
    mut camera_query: Query<(&mut OrbitCamera, &mut Transform)>,
    mut scroll_events: MessageReader<MouseWheel>,
) {
    let steps: f32 = scroll_events
        .read()
        .map(|event| match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y / PIXELS_PER_SCROLL_LINE,
        })
        .sum();
    if steps.abs() < 0.01 {
        return;
    }

    let Ok((mut orbit, mut transform)) = camera_query.single_mut() else {
        return;
    };
    orbit.zoom_by(steps);
    *transform = orbit.calculate_transform();
}

/// Orbits with A/D or arrows left/right, zooms with W/S or arrows up/down, Home resets.
pub fn camera_keyboard_controls(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut camera_query: Query<(&mut OrbitCamera, &mut Transform)>,
) {
    let Ok((mut orbit, mut transform)) = camera_query.single_mut() else {
        return;
    };

    if keyboard.just_pressed(KeyCode::Home) {
        orbit.reset();
        *transform = orbit.calculate_transform();
        info!("Camera reset to default");
        return;
    }

    let speed = CAMERA_3D_KEYBOARD_SPEED * time.delta_secs();

    let left = keyboard.pressed(KeyCode::ArrowLeft) || keyboard.pressed(KeyCode::KeyA);
    let right = keyboard.pressed(KeyCode::ArrowRight) || keyboard.pressed(KeyCode::KeyD);
    let up = keyboard.pressed(KeyCode::ArrowUp) || keyboard.pressed(KeyCode::KeyW);
    let down = keyboard.pressed(KeyCode::ArrowDown) || keyboard.pressed(KeyCode::KeyS);

    if !(left || right || up || down) {
        return;
    }

    if left {
        orbit.yaw -= speed;
    }
    if right {
        orbit.yaw += speed;
    }
    if up {
        orbit.zoom_by(speed);
    }
    if down {
        orbit.zoom_by(-speed);
    }

    *transform = orbit.calculate_transform();
}

/// Plugin for camera controls
pub struct OrbitCameraPlugin;

impl Plugin for OrbitCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (orbit_camera, zoom_camera, camera_keyboard_controls),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_default_view_looks_down_negative_z() {
        let orbit = OrbitCamera::from_config(&CameraConfig::default());
        let transform = orbit.calculate_transform();

        assert!(transform.translation.abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), EPSILON));
        assert!(transform.forward().abs_diff_eq(Vec3::NEG_Z, EPSILON));
    }

    #[test]
    fn test_full_height_drag_is_full_turn() {
        let mut orbit = OrbitCamera::from_config(&CameraConfig::default());
        let yaw = orbit.yaw;

        orbit.rotate_by_drag(Vec2::new(600.0, 0.0), 600.0);
        assert!((orbit.yaw - (yaw - TAU)).abs() < EPSILON);
        assert!(
            orbit
                .calculate_transform()
                .translation
                .abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), EPSILON)
        );
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut orbit = OrbitCamera::from_config(&CameraConfig::default());
        orbit.rotate_by_drag(Vec2::new(0.0, 10_000.0), 600.0);
        assert_eq!(orbit.pitch, CAMERA_3D_MAX_PITCH);
        orbit.rotate_by_drag(Vec2::new(0.0, -20_000.0), 600.0);
        assert_eq!(orbit.pitch, -CAMERA_3D_MAX_PITCH);
    }

    #[test]
    fn test_zoom_steps_and_limits() {
        let mut orbit = OrbitCamera::from_config(&CameraConfig::default());
        orbit.zoom_by(1.0);
        assert!((orbit.distance - 5.0 * 0.95).abs() < EPSILON);
        orbit.zoom_by(-1.0);
        assert!((orbit.distance - 5.0).abs() < EPSILON);

        orbit.zoom_by(1_000.0);
        assert_eq!(orbit.distance, orbit.min_distance);
        orbit.zoom_by(-1_000.0);
        assert_eq!(orbit.distance, orbit.max_distance);
    }

    #[test]
    fn test_pan_moves_target_in_view_plane() {
        let mut orbit = OrbitCamera::from_config(&CameraConfig::default());
        orbit.pan_by_drag(Vec2::new(100.0, 0.0), 600.0);

        // Dragging right slides the scene right, so the target moves left.
        assert!(orbit.target.x < 0.0);
        assert!(orbit.target.y.abs() < EPSILON);
        assert!(orbit.target.z.abs() < EPSILON);
    }

    #[test]
    fn test_inverted_distance_range_uses_default_limits() {
        let config = CameraConfig {
            min_distance: 10.0,
            max_distance: 3.0,
            ..Default::default()
        };
        let mut orbit = OrbitCamera::from_config(&config);

        assert_eq!(orbit.min_distance, CameraConfig::default().min_distance);
        assert_eq!(orbit.max_distance, CameraConfig::default().max_distance);
        assert_eq!(orbit.distance, 5.0);

        orbit.zoom_by(1_000.0);
        assert_eq!(orbit.distance, orbit.min_distance);
    }

    #[test]
    fn test_reset_restores_home_view() {
        let mut orbit = OrbitCamera::from_config(&CameraConfig::default());
        let home = orbit.clone();

        orbit.rotate_by_drag(Vec2::new(120.0, 40.0), 600.0);
        orbit.pan_by_drag(Vec2::new(30.0, 30.0), 600.0);
        orbit.zoom_by(3.0);
        orbit.reset();

        assert_eq!(orbit, home);
    }
}
