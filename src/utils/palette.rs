//! Sticker colors of the cube and parsing of color strings.
use bevy::color::palettes::css;
use bevy::prelude::*;
use thiserror::Error;

use crate::utils::config::PaletteConfig;
use crate::utils::constants::rubik_constants::{
    COLOR_BACK, COLOR_DOWN, COLOR_FRONT, COLOR_INTERIOR, COLOR_LEFT, COLOR_RIGHT, COLOR_UP,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("unknown color name or malformed hex value: {0:?}")]
    Invalid(String),
}

/// Parses `#rgb`, `#rrggbb` (the `#` is optional) or one of a few CSS color names.
pub fn parse_color(value: &str) -> Result<Color, ColorParseError> {
    let trimmed = value.trim();

    let named = match trimmed.to_ascii_lowercase().as_str() {
        "black" => Some(css::BLACK),
        "white" => Some(css::WHITE),
        "red" => Some(css::RED),
        "orange" => Some(css::ORANGE),
        "yellow" => Some(css::YELLOW),
        "green" => Some(css::GREEN),
        "blue" => Some(css::BLUE),
        _ => None,
    };
    if let Some(srgba) = named {
        return Ok(Color::from(srgba));
    }

    Srgba::hex(trimmed)
        .map(Color::from)
        .map_err(|_| ColorParseError::Invalid(trimmed.to_string()))
}

/// Like [`parse_color`], but a malformed value is logged and painted black.
pub fn parse_color_or_black(value: &str, field: &str) -> Color {
    parse_color(value).unwrap_or_else(|err| {
        log::warn!("palette field `{field}`: {err}, using black");
        Color::BLACK
    })
}

/// Colors of the six outer faces of the cube plus the hidden interior faces.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct Palette {
    /// +X
    pub right: Color,
    /// -X
    pub left: Color,
    /// +Y
    pub up: Color,
    /// -Y
    pub down: Color,
    /// +Z
    pub front: Color,
    /// -Z
    pub back: Color,
    pub interior: Color,
}

impl Palette {
    pub fn from_config(config: &PaletteConfig) -> Self {
        Self {
            right: parse_color_or_black(&config.right, "right"),
            left: parse_color_or_black(&config.left, "left"),
            up: parse_color_or_black(&config.up, "up"),
            down: parse_color_or_black(&config.down, "down"),
            front: parse_color_or_black(&config.front, "front"),
            back: parse_color_or_black(&config.back, "back"),
            interior: parse_color_or_black(&config.interior, "interior"),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            right: parse_color_or_black(COLOR_RIGHT, "right"),
            left: parse_color_or_black(COLOR_LEFT, "left"),
            up: parse_color_or_black(COLOR_UP, "up"),
            down: parse_color_or_black(COLOR_DOWN, "down"),
            front: parse_color_or_black(COLOR_FRONT, "front"),
            back: parse_color_or_black(COLOR_BACK, "back"),
            interior: parse_color_or_black(COLOR_INTERIOR, "interior"),
        }
    }
}
