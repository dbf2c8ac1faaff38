use std::path::PathBuf;

use image::imageops::FilterType;

use crate::error::PipelineError;
use crate::Args;

/// Width every output image is resampled to
pub const DEFAULT_TARGET_WIDTH: u32 = 1000;
/// Side of the square Gaussian blur kernel
pub const DEFAULT_BLUR_KERNEL_SIZE: u32 = 5;
/// Side of the neighbourhood used for the local threshold mean
pub const DEFAULT_THRESHOLD_BLOCK_SIZE: u32 = 11;
/// Subtracted from the local mean before comparing
pub const DEFAULT_THRESHOLD_OFFSET: i32 = 2;

/// Fixed parameters of the binarization pipeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    pub target_width: u32,
    pub blur_kernel_size: u32,
    pub threshold_block_size: u32,
    pub threshold_offset: i32,
    /// Value written for pixels above their local threshold
    pub max_value: u8,
    pub resize_filter: FilterType,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            target_width: DEFAULT_TARGET_WIDTH,
            blur_kernel_size: DEFAULT_BLUR_KERNEL_SIZE,
            threshold_block_size: DEFAULT_THRESHOLD_BLOCK_SIZE,
            threshold_offset: DEFAULT_THRESHOLD_OFFSET,
            max_value: u8::MAX,
            // Bilinear
            resize_filter: FilterType::Triangle,
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.target_width == 0 {
            return Err(PipelineError::InvalidConfig(
                "target width must be positive".to_string(),
            ));
        }
        if self.blur_kernel_size == 0 || self.blur_kernel_size % 2 == 0 {
            return Err(PipelineError::InvalidConfig(format!(
                "blur kernel size must be odd and positive, got {}",
                self.blur_kernel_size
            )));
        }
        if self.threshold_block_size <= 1 || self.threshold_block_size % 2 == 0 {
            return Err(PipelineError::InvalidConfig(format!(
                "threshold block size must be odd and greater than 1, got {}",
                self.threshold_block_size
            )));
        }
        Ok(())
    }
}

/// Invocation configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub pipeline: PipelineConfig,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            input: args.input,
            output: args.output,
            pipeline: PipelineConfig::default(),
        }
    }
}
