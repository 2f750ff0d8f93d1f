//! Debug helpers: vsync toggle and light gizmos.
use bevy::{prelude::*, window::*};

pub struct DebugFunctionsPlugin;

impl Plugin for DebugFunctionsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (toggle_vsync, visualize_lights));
    }
}

/// Toggles VSync when the 'V' key is pressed.
fn toggle_vsync(input: Res<ButtonInput<KeyCode>>, mut window: Query<&mut Window, With<PrimaryWindow>>) {
    if !input.just_pressed(KeyCode::KeyV) {
        return;
    }
    let Ok(mut window) = window.single_mut() else {
        return;
    };

    window.present_mode = if matches!(window.present_mode, PresentMode::AutoVsync) {
        PresentMode::AutoNoVsync
    } else {
        PresentMode::AutoVsync
    };

    info!("PRESENT_MODE: {:?}", window.present_mode);
}

/// Draws the point and spot lights when toggled with the 'L' key.
fn visualize_lights(
    mut gizmos: Gizmos,
    point_lights: Query<(&GlobalTransform, &PointLight)>,
    spot_lights: Query<(&GlobalTransform, &SpotLight)>,
    input: Res<ButtonInput<KeyCode>>,
    mut show_lights: Local<bool>,
) {
    if input.just_pressed(KeyCode::KeyL) {
        *show_lights = !*show_lights;
        info!("Light visualization: {}", *show_lights);
    }

    if !*show_lights {
        return;
    }

    for (transform, light) in &point_lights {
        gizmos.sphere(transform.translation(), 0.3, light.color);
    }
    for (transform, light) in &spot_lights {
        let origin = transform.translation();
        gizmos.sphere(origin, 0.3, light.color);
        // Aim line towards what the spot lights up
        gizmos.line(origin, origin + *transform.forward() * light.range, light.color);
    }
}
