// Constants used by the cube scene, structured into modules.
// They are the defaults of `SceneConfig`, which may override most of them.

/// 3D camera
pub mod camera_3d_constants {
    pub const CAMERA_3D_INITIAL_X: f32 = 0.0;
    pub const CAMERA_3D_INITIAL_Y: f32 = 0.0;
    pub const CAMERA_3D_INITIAL_Z: f32 = 5.0;

    // Vertical field of view in degrees.
    pub const CAMERA_3D_FOV_DEGREES: f32 = 75.0;

    // A drag across the full window height orbits by 2*PI * speed.
    pub const CAMERA_3D_ROTATE_SPEED: f32 = 1.0;
    // Distance factor applied per wheel step.
    pub const CAMERA_3D_ZOOM_STEP: f32 = 0.95;
    // Keyboard orbit speed in radians per second.
    pub const CAMERA_3D_KEYBOARD_SPEED: f32 = 2.0;

    // Radius range for the camera's orbit.
    pub const CAMERA_3D_MIN_RADIUS: f32 = 2.0;
    pub const CAMERA_3D_MAX_RADIUS: f32 = 30.0;

    // Keep the pitch away from the poles.
    pub const CAMERA_3D_MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.01;
}

/// Cube grid
pub mod rubik_constants {
    // Grid coordinates span -GRID_EXTENT..=GRID_EXTENT on each axis.
    pub const GRID_EXTENT: i32 = 1;
    pub const GRID_SIDE: usize = 3;
    pub const GRID_CUBIES: usize = GRID_SIDE * GRID_SIDE * GRID_SIDE;

    // Faces per cubie, in the order +X, -X, +Y, -Y, +Z, -Z.
    pub const FACE_COUNT: usize = 6;
    // Two triangles per face in a non-indexed box.
    pub const VERTICES_PER_FACE: usize = 6;

    pub const CUBIE_SIZE: f32 = 1.0;

    // Sticker colors
    pub const COLOR_RIGHT: &str = "#b71234";
    pub const COLOR_LEFT: &str = "#ff5800";
    pub const COLOR_UP: &str = "#ffffff";
    pub const COLOR_DOWN: &str = "#ffd500";
    pub const COLOR_FRONT: &str = "#009b48";
    pub const COLOR_BACK: &str = "#0046ad";
    pub const COLOR_INTERIOR: &str = "#000000";

    pub const BACKGROUND_COLOR: &str = "#cbd5e1";
    pub const EDGE_COLOR: &str = "black";
    pub const EDGE_WIDTH: f32 = 5.0;
    // Edges sit slightly outside the faces to avoid z-fighting.
    pub const EDGE_SCALE: f32 = 1.002;
}

/// Spin animation
pub mod animation_constants {
    pub const TICK_MILLIS: u64 = 17;
    pub const START_DEGREES: u32 = 1;
    pub const FULL_TURN_DEGREES: u32 = 360;
}

/// Lighting constants
pub mod lighting_constants {
    // Shadow settings
    #[cfg(target_arch = "wasm32")]
    pub const SHADOWS_ENABLED: bool = false; // Need to disable shadowslight on WASM for weird artifacts
    #[cfg(not(target_arch = "wasm32"))]
    pub const SHADOWS_ENABLED: bool = true;

    pub const GLOBAL_AMBIENT_LIGHT_INTENSITY: f32 = 200.0;

    pub const SPOTLIGHT_POSITION: [f32; 3] = [10.0, 10.0, 10.0];
    pub const SPOTLIGHT_LIGHT_INTENSITY: f32 = 5_000_000.0;
    pub const SPOTLIGHT_OUTER_ANGLE: f32 = 0.15;
    // Full penumbra: the cone fades from the axis outward.
    pub const SPOTLIGHT_INNER_ANGLE: f32 = 0.0;

    pub const POINT_LIGHT_POSITION: [f32; 3] = [-10.0, -10.0, -10.0];
    pub const POINT_LIGHT_INTENSITY: f32 = 2_000_000.0;

    pub const LIGHT_RANGE: f32 = 100.0;
}

/// Generic window constants
pub mod window_constants {
    pub const WINDOW_TITLE: &str = "Rubik 3D Spin";
    pub const DEFAULT_CONFIG_PATH: &str = "rubik.toml";
}
