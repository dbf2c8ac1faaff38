//! Individual pipeline stages

pub mod blur;
pub mod grayscale;
pub mod resize;
pub mod threshold;
