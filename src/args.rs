//! Command-line interface of `wm-gaussian`.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::{
    arg_parsers::{Sigma, Spacing},
    plan::SmoothingPlan,
};

#[derive(Parser, Debug)]
#[command(
    name = "wm-gaussian",
    version,
    about = "Smooths an image with a recursive Gaussian filter, keeping its pixel format",
    long_about = None
)]
pub struct Args {
    /// Image to read; the format is detected from the file contents
    #[arg(value_name = "inputImageFile")]
    pub input_image_file: PathBuf,

    /// Image to write; the format is chosen by the file extension
    #[arg(value_name = "outputImageFile")]
    pub output_image_file: PathBuf,

    /// Standard deviation of the Gaussian in physical units (0 disables smoothing)
    #[arg(allow_negative_numbers = true)]
    pub sigma: Sigma,

    /// Physical size of a pixel, as X or XxY
    #[arg(long, value_name = "X[xY]", default_value_t = Spacing::default())]
    pub spacing: Spacing,

    /// Log more details (-v for progress, -vv for debugging output)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }

    pub fn into_plan(self) -> SmoothingPlan {
        SmoothingPlan {
            input_file: self.input_image_file,
            output_file: self.output_image_file,
            sigma: self.sigma,
            spacing: self.spacing,
        }
    }
}
