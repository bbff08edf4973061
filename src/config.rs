use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::data::model::PayloadRange;

/// Dataset path used when neither the command line nor the environment names one.
pub const DEFAULT_DATA_PATH: &str = "spacex_launch_dash.csv";

// ---------------------------------------------------------------------------
// Payload slider configuration
// ---------------------------------------------------------------------------

/// Bounds, step, marks and initial value of the payload range control.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<f64>,
    pub initial: PayloadRange,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10000.0,
            step: 1000.0,
            marks: vec![0.0, 2500.0, 5000.0, 7500.0, 10000.0],
            initial: PayloadRange::new(1000.0, 9000.0),
        }
    }
}

impl SliderConfig {
    /// Widen the bounds so every payload in `[data_min, data_max]` is reachable.
    /// The initial range is clamped into the resulting bounds.
    pub fn fitted_to(&self, data_min: f64, data_max: f64) -> Self {
        let min = self.min.min(data_min);
        let max = self.max.max(data_max);
        let low = self.initial.low.clamp(min, max);
        let high = self.initial.high.clamp(low, max);
        Self {
            min,
            max,
            step: self.step,
            marks: self.marks.clone(),
            initial: PayloadRange::new(low, high),
        }
    }
}

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub window_size: [f32; 2],
    pub slider: SliderConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            window_size: [1200.0, 900.0],
            slider: SliderConfig::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Command line / environment
// ---------------------------------------------------------------------------

/// Command-line arguments; each also reads its `SPACEX_DASH_*` variable.
#[derive(Debug, Clone, Parser)]
#[command(name = "spacex-launch-dashboard", version, about = "SpaceX launch records dashboard")]
pub struct CliArgs {
    /// Launch records file (.csv, .json or .parquet)
    #[arg(env = "SPACEX_DASH_DATA", default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Lower bound of the payload slider (kg)
    #[arg(long, env = "SPACEX_DASH_PAYLOAD_MIN", allow_negative_numbers = true)]
    pub payload_min: Option<f64>,

    /// Upper bound of the payload slider (kg)
    #[arg(long, env = "SPACEX_DASH_PAYLOAD_MAX", allow_negative_numbers = true)]
    pub payload_max: Option<f64>,

    /// Step of the payload slider (kg)
    #[arg(long, env = "SPACEX_DASH_PAYLOAD_STEP", allow_negative_numbers = true)]
    pub payload_step: Option<f64>,
}

impl DashboardConfig {
    /// Parse the process arguments and environment. `--help`, `--version` and
    /// malformed input exit the process with clap's message.
    pub fn from_env() -> Self {
        Self::from(CliArgs::parse())
    }

    /// Parse an explicit argument list (first item is the program name).
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        CliArgs::try_parse_from(args).map(Self::from)
    }
}

impl From<CliArgs> for DashboardConfig {
    /// Slider settings that are not finite, have `min >= max` or a
    /// non-positive step fall back to the defaults as a whole.
    fn from(args: CliArgs) -> Self {
        let defaults = Self::default();
        let min = args.payload_min.unwrap_or(defaults.slider.min);
        let max = args.payload_max.unwrap_or(defaults.slider.max);
        let step = args.payload_step.unwrap_or(defaults.slider.step);

        let valid = [min, max, step].iter().all(|v| v.is_finite()) && min < max && step > 0.0;
        let slider = if valid {
            SliderConfig {
                min,
                max,
                step,
                marks: (0..=4).map(|i| min + (max - min) * f64::from(i) / 4.0).collect(),
                initial: PayloadRange::new(
                    defaults.slider.initial.low.clamp(min, max),
                    defaults.slider.initial.high.clamp(min, max),
                ),
            }
        } else {
            log::warn!("Ignoring invalid payload slider settings: min={min} max={max} step={step}");
            defaults.slider
        };

        Self {
            data_path: args.data,
            window_size: defaults.window_size,
            slider,
        }
    }
}
