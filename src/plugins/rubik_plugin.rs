use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use std::path::PathBuf;

use crate::utils::camera::OrbitCameraPlugin;
use crate::utils::config::SceneConfig;
use crate::utils::debug_functions::DebugFunctionsPlugin;
use crate::utils::global_inputs::InputsPlugin;
use crate::utils::objects::EdgeStyle;
use crate::utils::palette::{Palette, parse_color_or_black};
use crate::utils::rubik::EdgesPlugin;
use crate::utils::systems_logic::SystemsLogicPlugin;

/// Plugins
/// Everything needed to show the spinning cube. Add it after `DefaultPlugins`
/// so that configuration problems reach the log.
pub struct RubikPlugin {
    pub config_path: PathBuf,
}

impl RubikPlugin {
    /// Config path taken from the command line, see [`SceneConfig::path_from_args`].
    pub fn from_args() -> Self {
        Self {
            config_path: SceneConfig::path_from_args(),
        }
    }
}

impl Plugin for RubikPlugin {
    fn build(&self, app: &mut App) {
        let config = SceneConfig::load_or_default(&self.config_path);
        let look = &config.scene;

        app.insert_resource(Palette::from_config(&config.palette))
            .insert_resource(EdgeStyle {
                visible: look.show_edges,
                color: parse_color_or_black(&look.edge_color, "edge_color"),
                width: look.edge_width,
            })
            .insert_resource(ClearColor(parse_color_or_black(
                &look.background,
                "background",
            )))
            .insert_resource(config)
            .add_systems(Startup, apply_window_title)
            .add_plugins((
                SystemsLogicPlugin,
                EdgesPlugin,
                OrbitCameraPlugin,
                InputsPlugin,
                DebugFunctionsPlugin,
            ));
    }
}

fn apply_window_title(
    config: Res<SceneConfig>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Ok(mut window) = windows.single_mut() else {
        return;
    };
    window.title = config.window.title.clone();
}
