// This file defines the various objects, resources, and components used by the cube scene.
use bevy::prelude::*;
use std::time::Duration;

use crate::utils::constants::animation_constants::FULL_TURN_DEGREES;
use crate::utils::constants::rubik_constants::FACE_COUNT;

/// Whether the cube scene is currently mounted in the window.
#[derive(States, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScenePhase {
    #[default]
    // Cubies, camera and lights are spawned and the spin timer runs
    Mounted,
    // Everything despawned, no timer
    Unmounted,
}

/// Description of one cubie before it is spawned.
#[derive(Clone, Debug, PartialEq)]
pub struct CubeDescriptor {
    /// Grid position, each coordinate in {-1, 0, 1}.
    pub position: IVec3,
    /// One color per face, in the order +X, -X, +Y, -Y, +Z, -Z.
    pub face_colors: [Color; FACE_COUNT],
    /// Only set for the animated front layer.
    pub rotation_angle_degrees: Option<u32>,
}

impl CubeDescriptor {
    pub fn is_front_layer(&self) -> bool {
        self.rotation_angle_degrees.is_some()
    }
}

/// Angle of the spinning front layer in whole degrees, always in [0, 360).
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct AnimationAngle(pub u32);

impl AnimationAngle {
    /// Steps one degree forward, 359 wraps back to 0.
    pub fn advance(&mut self) {
        self.0 = if self.0 >= FULL_TURN_DEGREES - 1 {
            0
        } else {
            self.0 + 1
        };
    }
}

/// Repeating timer driving [`AnimationAngle`]. Only exists while the scene is mounted.
#[derive(Resource, Debug)]
pub struct SpinTimer(pub Timer);

impl SpinTimer {
    pub fn new(period: Duration) -> Self {
        Self(Timer::new(period, TimerMode::Repeating))
    }
}

/// A component that marks an entity as one of the 27 cubies.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cubie {
    pub position: IVec3,
}

/// A component that marks a cubie as part of the spinning front layer.
#[derive(Component)]
pub struct FrontLayer;

/// Face colors of a cubie; changing them repaints its mesh.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct FaceColors(pub [Color; FACE_COUNT]);

/// A component that marks an entity as part of the scene, despawned on unmount.
#[derive(Component)]
pub struct SceneEntity;

/// Edge outline settings resolved from the config.
#[derive(Resource, Clone, Debug)]
pub struct EdgeStyle {
    pub visible: bool,
    pub color: Color,
    pub width: f32,
}
