use bevy::prelude::*;

use rubik_3d_spin::plugins::rubik_plugin::RubikPlugin;
use rubik_3d_spin::utils::constants::window_constants::WINDOW_TITLE;

/// Main application function
fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.into(),
                fit_canvas_to_parent: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(RubikPlugin::from_args())
        .run();
}
