//! Load a weighted road graph from an adjacency-list text file, cut it down
//! to a drawable size, lay it out and draw it with its edge weights.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod layout;
pub mod pipeline;
pub mod render;
pub mod state;
pub mod ui;

pub use config::VizConfig;
pub use error::{Result, VizError};
