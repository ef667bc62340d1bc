#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod brush;
pub mod canvas;
pub mod config;
pub mod pad;

#[cfg(feature = "gui")]
pub mod error;
#[cfg(feature = "gui")]
pub mod input;
#[cfg(feature = "gui")]
pub mod renderer;
