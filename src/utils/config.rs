//! Scene configuration
//!
//! Loaded once at start-up from a TOML file. Every field is optional and
//! defaults to the values in `constants.rs`, so an empty or missing file
//! yields the stock scene.

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::utils::constants::{
    animation_constants::{START_DEGREES, TICK_MILLIS},
    camera_3d_constants::{
        CAMERA_3D_FOV_DEGREES, CAMERA_3D_INITIAL_Z, CAMERA_3D_MAX_RADIUS, CAMERA_3D_MIN_RADIUS,
        CAMERA_3D_ROTATE_SPEED, CAMERA_3D_ZOOM_STEP,
    },
    lighting_constants::{
        GLOBAL_AMBIENT_LIGHT_INTENSITY, POINT_LIGHT_INTENSITY, SPOTLIGHT_LIGHT_INTENSITY,
    },
    rubik_constants::{
        BACKGROUND_COLOR, COLOR_BACK, COLOR_DOWN, COLOR_FRONT, COLOR_INTERIOR, COLOR_LEFT,
        COLOR_RIGHT, COLOR_UP, EDGE_COLOR, EDGE_WIDTH,
    },
    window_constants::{DEFAULT_CONFIG_PATH, WINDOW_TITLE},
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub window: WindowConfig,
    pub animation: AnimationConfig,
    pub palette: PaletteConfig,
    pub camera: CameraConfig,
    pub scene: SceneLookConfig,
    pub lighting: LightingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Period of the spin timer in milliseconds.
    pub tick_millis: u64,
    /// Angle of the front layer when the scene mounts.
    pub start_degrees: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tick_millis: TICK_MILLIS,
            start_degrees: START_DEGREES,
        }
    }
}

impl AnimationConfig {
    /// Tick period, never zero (a zero-length repeating timer would fire without bound).
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis.max(1))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub right: String,
    pub left: String,
    pub up: String,
    pub down: String,
    pub front: String,
    pub back: String,
    pub interior: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            right: COLOR_RIGHT.to_string(),
            left: COLOR_LEFT.to_string(),
            up: COLOR_UP.to_string(),
            down: COLOR_DOWN.to_string(),
            front: COLOR_FRONT.to_string(),
            back: COLOR_BACK.to_string(),
            interior: COLOR_INTERIOR.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub distance: f32,
    pub fov_degrees: f32,
    pub rotate_speed: f32,
    pub zoom_step: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: CAMERA_3D_INITIAL_Z,
            fov_degrees: CAMERA_3D_FOV_DEGREES,
            rotate_speed: CAMERA_3D_ROTATE_SPEED,
            zoom_step: CAMERA_3D_ZOOM_STEP,
            min_distance: CAMERA_3D_MIN_RADIUS,
            max_distance: CAMERA_3D_MAX_RADIUS,
        }
    }
}

impl CameraConfig {
    /// Replaces an empty or non-finite distance range with the default one.
    pub fn sanitized(mut self) -> Self {
        let valid = self.min_distance.is_finite()
            && self.max_distance.is_finite()
            && self.min_distance <= self.max_distance;

        if !valid {
            let defaults = Self::default();
            log::warn!(
                "camera distance range {}..{} is invalid, using {}..{}",
                self.min_distance,
                self.max_distance,
                defaults.min_distance,
                defaults.max_distance
            );
            self.min_distance = defaults.min_distance;
            self.max_distance = defaults.max_distance;
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneLookConfig {
    pub background: String,
    /// Flat vertex colors, lights are ignored.
    pub unlit: bool,
    pub show_edges: bool,
    pub edge_color: String,
    pub edge_width: f32,
}

impl Default for SceneLookConfig {
    fn default() -> Self {
        Self {
            background: BACKGROUND_COLOR.to_string(),
            unlit: true,
            show_edges: true,
            edge_color: EDGE_COLOR.to_string(),
            edge_width: EDGE_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub ambient_brightness: f32,
    pub spot_intensity: f32,
    pub point_intensity: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient_brightness: GLOBAL_AMBIENT_LIGHT_INTENSITY,
            spot_intensity: SPOTLIGHT_LIGHT_INTENSITY,
            point_intensity: POINT_LIGHT_INTENSITY,
        }
    }
}

impl SceneConfig {
    /// Config path: first command-line argument, else `rubik.toml`.
    pub fn path_from_args() -> PathBuf {
        std::env::args()
            .nth(1)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.camera = config.camera.sanitized();
        Ok(config)
    }

    /// Load config from file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content, path)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from file, logging and falling back to defaults on error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|err| {
            log::error!("{err}; using default configuration");
            Self::default()
        })
    }
}
