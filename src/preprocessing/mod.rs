//! Document binarization pipeline
//!
//! Grayscale, resize to a fixed width, Gaussian blur, then adaptive
//! thresholding, each as an independent step.

pub mod kernel;
pub mod pipeline;
pub mod steps;

pub use pipeline::Pipeline;
