// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

pub mod config;
pub mod data;
pub mod frontend;
pub mod game;
pub mod history;
pub mod level;
pub mod map;
pub mod moves;
pub mod parser;
pub mod report;
pub mod rules;
pub mod script;
pub mod terminal;
pub mod world;

mod fs;
mod vec2d;

pub use crate::level::LoadLevels;
