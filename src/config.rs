use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, VizError};
use crate::layout::{LayoutMode, LayoutOptions};
use crate::render::{FigureStyle, DEFAULT_TITLE};

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

/// Everything one pipeline run needs. Passed by reference; never global.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VizConfig {
    /// Adjacency-list text file to load.
    pub file_path: PathBuf,
    /// Sampling cap; must be positive.
    pub max_nodes_to_draw: usize,
    pub layout_mode: LayoutMode,
    /// Write an SVG here instead of opening a window.
    pub output: Option<PathBuf>,
    /// Seed for the random and spring layouts.
    pub seed: Option<u64>,
    pub spring_iterations: usize,
    pub title: String,
    /// CSS colour name for node markers.
    pub node_color: String,
    /// Figure size in pixels.
    pub width: u32,
    pub height: u32,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            file_path: PathBuf::from("nodes.txt"),
            max_nodes_to_draw: 10,
            layout_mode: LayoutMode::ForceScaffold,
            output: None,
            seed: None,
            spring_iterations: crate::layout::spring::DEFAULT_ITERATIONS,
            title: DEFAULT_TITLE.to_string(),
            node_color: "deepskyblue".to_string(),
            width: 1200,
            height: 1200,
        }
    }
}

impl VizConfig {
    /// Read a JSON config file. Missing keys take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| VizError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
            .map_err(|e| VizError::Config(format!("{}: {e}", path.display())))
    }

    pub fn from_json_str(text: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_nodes_to_draw == 0 {
            return Err(VizError::Config("max_nodes_to_draw must be greater than 0".into()));
        }
        if self.width == 0 || self.height == 0 {
            return Err(VizError::Config(format!(
                "figure size {}x{} must be non-zero",
                self.width, self.height
            )));
        }
        self.style()?;
        Ok(())
    }

    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            seed: self.seed,
            spring_iterations: self.spring_iterations,
        }
    }

    pub fn style(&self) -> Result<FigureStyle> {
        FigureStyle::with_node_color(&self.node_color)
            .ok_or_else(|| VizError::Config(format!("unknown colour name {:?}", self.node_color)))
    }
}
