use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::data::parser::ParseError;
use crate::render::RenderError;

/// Fatal pipeline failures. Layout problems never show up here: the layout
/// stage recovers from them on its own.
#[derive(Debug, Error)]
pub enum VizError {
    #[error("cannot read graph file {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("cannot write figure to {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = VizError> = std::result::Result<T, E>;
