pub mod api;
pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod glyphs;
pub mod loader;
pub mod scorer;
pub mod synth;
// cmd and reports are binary modules (see main.rs).
