pub mod utils {
    pub mod animation;
    pub mod camera;
    pub mod config;
    pub mod constants;
    pub mod debug_functions;
    pub mod geometry;
    pub mod global_inputs;
    pub mod grid;
    pub mod macros;
    pub mod objects;
    pub mod palette;
    pub mod rubik;
    pub mod setup;
    pub mod systems_logic;
}

pub mod plugins {
    pub mod rubik_plugin;
}
