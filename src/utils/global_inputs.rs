//! Input handling that works whether or not the scene is mounted.
use bevy::prelude::*;

use bevy::window::{
    CursorGrabMode, CursorOptions, MonitorSelection, PrimaryWindow, VideoModeSelection, WindowMode,
};

use crate::utils::objects::ScenePhase;

pub struct InputsPlugin;

impl Plugin for InputsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (handle_keyboard_input, toggle_scene_mount));
    }
}

/// Display/cursor mode after the next ESC press.
pub fn next_display_mode(window_mode: WindowMode) -> (WindowMode, CursorGrabMode) {
    match window_mode {
        WindowMode::Windowed => (
            WindowMode::Fullscreen(MonitorSelection::Current, VideoModeSelection::Current),
            CursorGrabMode::Confined,
        ),
        _ => (WindowMode::Windowed, CursorGrabMode::None),
    }
}

/// Toggle between windowed and fullscreen with the cursor confined to the window.
/// The cursor stays visible since the camera is dragged with it.
pub fn toggle_display_cursor_mode(window: &mut Window, cursor: &mut CursorOptions) {
    let (mode, grab) = next_display_mode(window.mode);

    #[cfg(not(target_arch = "wasm32"))]
    {
        window.mode = mode;
    }
    #[cfg(target_arch = "wasm32")]
    let _ = mode;

    cursor.grab_mode = grab;
    cursor.visible = true;
}

/// Handles ESC key to toggle display and cursor modes
pub fn handle_keyboard_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut windows: Query<(&mut Window, &mut CursorOptions), With<PrimaryWindow>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }

    let Ok((mut window, mut cursor)) = windows.single_mut() else {
        return;
    };
    toggle_display_cursor_mode(&mut window, &mut cursor);
    info!("Window mode is now {:?}", window.mode);
}

/// M unmounts the scene, or mounts it again.
pub fn toggle_scene_mount(
    keyboard: Res<ButtonInput<KeyCode>>,
    phase: Res<State<ScenePhase>>,
    mut next_phase: ResMut<NextState<ScenePhase>>,
) {
    if !keyboard.just_pressed(KeyCode::KeyM) {
        return;
    }

    next_phase.set(match phase.get() {
        ScenePhase::Mounted => ScenePhase::Unmounted,
        ScenePhase::Unmounted => ScenePhase::Mounted,
    });
}
