//! Runtime configuration and command-line parsing.
//!
//! Flags take a value either as the next argument (`--fps 60`) or inline
//! (`--fps=60`). Every numeric value is validated before the frame loop
//! starts; see [`ConfigError`] for what gets rejected.

use std::fmt;
use std::path::PathBuf;

use crate::math::vec3::Vec3;
use crate::render::DEFAULT_SAMPLE_STEP;

pub const USAGE: &str = "\
Usage: glyphcube [OPTIONS]

Options:
  --screen-width <PX>    Window width in pixels [default: 800]
  --screen-height <PX>   Window height in pixels [default: 800]
  --cell-size <PX>       Pixels per character cell [default: 10]
  --cube-width <UNITS>   Cube edge length in cells [default: 20]
  --fps <N>              Target frames per second [default: 30]
  --rotate-x <RAD>       Rotation per frame about X [default: 0.01]
  --rotate-y <RAD>       Rotation per frame about Y [default: 0.01]
  --rotate-z <RAD>       Rotation per frame about Z [default: 0.01]
  --step <UNITS>         Surface sampling step [default: 0.5]
  --frames <N>           Render N frames without a window and print the last
  --screenshot <PATH>    Save the last rendered frame as an image
  -h, --help             Print this help
";

/// Errors produced while building or validating a [`Config`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A value parsed but is outside its allowed range.
    InvalidConfiguration { name: &'static str, reason: String },
    /// A flag's value is not a number.
    MalformedArgument { flag: String, value: String },
    /// A flag was given without a value.
    MissingValue(String),
    UnknownFlag(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidConfiguration { name, reason } => {
                write!(f, "invalid {name}: {reason}")
            }
            ConfigError::MalformedArgument { flag, value } => {
                write!(f, "invalid value '{value}' for {flag}: expected a number")
            }
            ConfigError::MissingValue(flag) => write!(f, "missing value for {flag}"),
            ConfigError::UnknownFlag(flag) => write!(f, "unknown option '{flag}'"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Config),
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub screen_width: u32,
    pub screen_height: u32,
    pub cell_size: u32,
    /// Cube edge length in world units; one unit is one cell.
    pub cube_width: f32,
    pub fps: u32,
    /// Rotation per frame in radians about X, Y and Z.
    pub rotation_delta: Vec3,
    pub sample_step: f32,
    /// Headless mode: number of frames to render before exiting.
    pub frames: Option<u64>,
    pub screenshot: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 800,
            cell_size: 10,
            cube_width: 20.0,
            fps: 30,
            rotation_delta: Vec3::new(0.01, 0.01, 0.01),
            sample_step: DEFAULT_SAMPLE_STEP,
            frames: None,
            screenshot: None,
        }
    }
}

fn invalid(name: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidConfiguration {
        name,
        reason: reason.into(),
    }
}

fn parse_positive_int(name: &'static str, flag: &str, value: &str) -> Result<u32, ConfigError> {
    let n: i64 = value.trim().parse().map_err(|_| ConfigError::MalformedArgument {
        flag: flag.to_string(),
        value: value.to_string(),
    })?;
    if n <= 0 {
        return Err(invalid(name, format!("must be positive, got {n}")));
    }
    u32::try_from(n).map_err(|_| invalid(name, format!("{n} is too large")))
}

fn parse_float(flag: &str, value: &str) -> Result<f32, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::MalformedArgument {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}

impl Config {
    /// Parses command-line arguments (without the program name) on top of the
    /// defaults and validates the result.
    pub fn from_args<I, S>(args: I) -> Result<Command, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter().map(Into::<String>::into);

        while let Some(arg) = args.next() {
            if arg == "-h" || arg == "--help" {
                return Ok(Command::Help);
            }
            if !arg.starts_with("--") {
                return Err(ConfigError::UnknownFlag(arg));
            }

            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
                None => (arg.clone(), None),
            };
            let value = match inline.or_else(|| args.next()) {
                Some(value) => value,
                None => return Err(ConfigError::MissingValue(flag)),
            };

            config.apply(&flag, &value)?;
        }

        config.validate()?;
        Ok(Command::Run(config))
    }

    fn apply(&mut self, flag: &str, value: &str) -> Result<(), ConfigError> {
        match flag {
            "--screen-width" => {
                self.screen_width = parse_positive_int("screen width", flag, value)?
            }
            "--screen-height" => {
                self.screen_height = parse_positive_int("screen height", flag, value)?
            }
            "--cell-size" => self.cell_size = parse_positive_int("cell size", flag, value)?,
            "--cube-width" => self.cube_width = parse_float(flag, value)?,
            "--fps" => self.fps = parse_positive_int("frame rate", flag, value)?,
            "--rotate-x" => self.rotation_delta.x = parse_float(flag, value)?,
            "--rotate-y" => self.rotation_delta.y = parse_float(flag, value)?,
            "--rotate-z" => self.rotation_delta.z = parse_float(flag, value)?,
            "--step" => self.sample_step = parse_float(flag, value)?,
            "--frames" => {
                self.frames = Some(u64::from(parse_positive_int("frame count", flag, value)?))
            }
            "--screenshot" => self.screenshot = Some(PathBuf::from(value)),
            _ => return Err(ConfigError::UnknownFlag(flag.to_string())),
        }
        Ok(())
    }

    /// Checks every value is usable by the engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width == 0 {
            return Err(invalid("screen width", "must be positive"));
        }
        if self.screen_height == 0 {
            return Err(invalid("screen height", "must be positive"));
        }
        // The ARGB color buffer is sized and indexed in u32 bytes.
        let bytes = self
            .screen_width
            .checked_mul(self.screen_height)
            .and_then(|pixels| pixels.checked_mul(4));
        if bytes.is_none() {
            return Err(invalid(
                "screen size",
                format!(
                    "{}x{} px does not fit a 32-bit color buffer",
                    self.screen_width, self.screen_height
                ),
            ));
        }
        if self.cell_size == 0 {
            return Err(invalid("cell size", "must be positive"));
        }
        if self.cell_size > self.screen_width || self.cell_size > self.screen_height {
            return Err(invalid(
                "cell size",
                format!(
                    "{} px leaves no cells on a {}x{} screen",
                    self.cell_size, self.screen_width, self.screen_height
                ),
            ));
        }
        if !self.cube_width.is_finite() || self.cube_width <= 0.0 {
            return Err(invalid(
                "cube width",
                format!("must be positive, got {}", self.cube_width),
            ));
        }
        if self.fps == 0 {
            return Err(invalid("frame rate", "must be positive"));
        }
        if !self.sample_step.is_finite() || self.sample_step <= 0.0 {
            return Err(invalid(
                "sample step",
                format!("must be positive, got {}", self.sample_step),
            ));
        }
        let d = self.rotation_delta;
        if !(d.x.is_finite() && d.y.is_finite() && d.z.is_finite()) {
            return Err(invalid("rotation delta", "must be finite"));
        }
        Ok(())
    }

    /// Character grid size as (cols, rows).
    pub fn grid_size(&self) -> (usize, usize) {
        (
            (self.screen_width / self.cell_size) as usize,
            (self.screen_height / self.cell_size) as usize,
        )
    }
}
