// Library exports for csv3d

pub mod cloud;
pub mod column;
pub mod csv_reader;
pub mod data;
pub mod gesture;
pub mod mapper;
pub mod parser;
pub mod scale;

use serde::Deserialize;

/// Display-space options for point cloud generation
#[derive(Debug, Clone, Deserialize)]
pub struct CloudOptions {
    #[serde(default = "default_scale")]
    pub scale: f64,
}

fn default_scale() -> f64 {
    scale::DEFAULT_SCALE
}

impl Default for CloudOptions {
    fn default() -> Self {
        Self {
            scale: scale::DEFAULT_SCALE,
        }
    }
}
