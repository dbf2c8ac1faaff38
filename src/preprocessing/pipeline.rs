use crate::config::PipelineConfig;
use crate::error::PipelineError;
use image::{DynamicImage, GrayImage};
use std::time::Instant;

use super::steps;

/// Timing information for a single pipeline step
#[derive(Debug, Clone)]
pub struct StepTiming {
    pub name: String,
    pub time_ms: u64,
}

/// Binarized image plus timing stats
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub image: GrayImage,
    /// Total processing time in milliseconds
    pub total_time_ms: u64,
    /// Individual step timings, in execution order
    pub steps: Vec<StepTiming>,
}

/// Fixed sequence of steps driven by a [`PipelineConfig`]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Result<Self, PipelineError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Run every step on `image`
    pub fn process(&self, image: DynamicImage) -> Result<PipelineResult, PipelineError> {
        let start = Instant::now();
        let mut steps_timing = Vec::new();

        // The resize target comes from the decoded size, before any step runs
        let target = steps::resize::target_dimensions(
            image.width(),
            image.height(),
            self.config.target_width,
        )?;

        let img = self.run_step("grayscale", image, &mut steps_timing, steps::grayscale::apply)?;

        let img = self.run_step("resize", img, &mut steps_timing, |img| {
            steps::resize::apply(img, target, self.config.resize_filter)
        })?;

        let img = self.run_step("blur", img, &mut steps_timing, |img| {
            steps::blur::apply(img, self.config.blur_kernel_size)
        })?;

        let img = self.run_step("threshold", img, &mut steps_timing, |img| {
            steps::threshold::apply(
                img,
                self.config.threshold_block_size,
                self.config.threshold_offset,
                self.config.max_value,
            )
        })?;

        Ok(PipelineResult {
            image: img,
            total_time_ms: start.elapsed().as_millis() as u64,
            steps: steps_timing,
        })
    }

    fn run_step<I, F>(
        &self,
        name: &str,
        img: I,
        timings: &mut Vec<StepTiming>,
        step_fn: F,
    ) -> Result<GrayImage, PipelineError>
    where
        F: FnOnce(I) -> Result<GrayImage, PipelineError>,
    {
        let step_start = Instant::now();
        let result = step_fn(img)?;
        let time_ms = step_start.elapsed().as_millis() as u64;
        tracing::debug!(
            "{} -> {}x{} in {}ms",
            name,
            result.width(),
            result.height(),
            time_ms
        );
        timings.push(StepTiming {
            name: name.to_string(),
            time_ms,
        });
        Ok(result)
    }
}
