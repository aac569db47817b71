//! Conway's Game of Life on a toroidal grid.
//!
//! [`Grid`] stores the cells, [`step`] advances them one generation using
//! [`rule::next_state`], and [`Controller`] runs that step on a fixed cadence
//! inside a single-threaded tokio `LocalSet`. [`EngineHandle`] hosts a
//! controller on its own thread for callers such as a GUI.

pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod rule;
pub mod simulation;
pub mod step;

pub use config::EngineConfig;
pub use controller::{Controller, Frame};
pub use engine::{Command, EngineHandle};
pub use error::{EngineError, Result};
pub use grid::Grid;
pub use patterns::{PATTERNS, Pattern};
pub use simulation::Simulation;
pub use step::step;
