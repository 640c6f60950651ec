//! In-memory model of a rhythm game level.
//!
//! A level is a sequence of measures. Each measure holds rhythmic values (notes and
//! rests) and gameplay triggers addressed by sub-beat, at a resolution of
//! [`time::SUBDIVISIONS`] sub-beats per beat. All changes go through the controllers
//! handed out by [`controller::LevelController`].

pub mod color;
pub mod config;
pub mod controller;
pub mod error;
pub mod level;
pub mod time;

pub use crate::controller::{LevelConfigController, LevelController, LevelDataController};
pub use crate::error::LevelError;
