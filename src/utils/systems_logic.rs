//! Systems logic based on whether the scene is mounted.

use crate::utils::animation::{advance_animation_angle, place_front_layer, toggle_spin_pause};
use crate::utils::objects::{AnimationAngle, ScenePhase, SpinTimer};
use crate::utils::rubik::{repaint_changed_faces, spawn_rubik};
use crate::utils::setup::{despawn_setup, setup, start_spin};
use bevy::prelude::*;

// Plugin for managing the scene systems based on the current scene phase.
pub struct SystemsLogicPlugin;

impl Plugin for SystemsLogicPlugin {
    /// Builds the plugin by adding the systems to the app.
    fn build(&self, app: &mut App) {
        app.init_state::<ScenePhase>()
            // Mount: timer first so the cubies spawn at the start angle
            .add_systems(
                OnEnter(ScenePhase::Mounted),
                (start_spin, setup, spawn_rubik).chain(),
            )
            .add_systems(
                Update,
                (
                    // Tick, then place, then paint
                    (
                        advance_animation_angle.run_if(resource_exists::<SpinTimer>),
                        place_front_layer.run_if(resource_exists_and_changed::<AnimationAngle>),
                        repaint_changed_faces,
                    )
                        .chain(),
                    toggle_spin_pause.run_if(resource_exists::<SpinTimer>),
                )
                    .run_if(in_state(ScenePhase::Mounted)),
            )
            // Unmount: no tick can fire once the timer resource is gone
            .add_systems(OnExit(ScenePhase::Mounted), despawn_setup);
    }
}
