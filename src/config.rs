use std::{fmt, fs, path::Path, str::FromStr};

use egui::Color32;
use serde::Deserialize;

use crate::{
    color::{parse_hex, ColorGenerator},
    error::{ConfigError, ConfigResult},
};

pub const PALETTE_SIZE: usize = 4;

pub const DEFAULT_STROKE_WIDTH: f32 = 5.0;
pub const DEFAULT_TEXT_SIZE: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// The whole ring spins into place on one timeline.
    #[default]
    Rotate,
    /// Segments fill one after another, one timeline each.
    Sequential,
    /// Each segment opens in both directions from a fixed offset.
    Split,
}

impl RenderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Rotate => "rotate",
            RenderMode::Sequential => "sequential",
            RenderMode::Split => "split",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rotate" | "0" => Ok(RenderMode::Rotate),
            "sequential" | "1" => Ok(RenderMode::Sequential),
            "split" | "2" => Ok(RenderMode::Split),
            _ => Err(ConfigError::UnknownMode(s.to_owned())),
        }
    }
}

/// Fully resolved style. Every palette slot holds a concrete color.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    pub stroke_width: f32,
    pub text_size: f32,
    pub mode: RenderMode,
    pub colors: [Color32; PALETTE_SIZE],
    pub text_color: Color32,
}

/// Style as configured, before unset palette slots are filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSpec {
    pub stroke_width: f32,
    pub text_size: f32,
    pub mode: RenderMode,
    pub colors: [Option<Color32>; PALETTE_SIZE],
    pub text_color: Color32,
}

impl Default for StyleSpec {
    fn default() -> Self {
        StyleSpec {
            stroke_width: DEFAULT_STROKE_WIDTH,
            text_size: DEFAULT_TEXT_SIZE,
            mode: RenderMode::default(),
            colors: [None; PALETTE_SIZE],
            text_color: Color32::BLACK,
        }
    }
}

impl StyleSpec {
    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Fills palette slots front to back. Slots past `colors.len()` keep
    /// whatever they held.
    pub fn with_colors(mut self, colors: &[Color32]) -> ConfigResult<Self> {
        if colors.len() > PALETTE_SIZE {
            return Err(ConfigError::TooManyColors(colors.len()));
        }
        for (slot, color) in self.colors.iter_mut().zip(colors) {
            *slot = Some(*color);
        }
        Ok(self)
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        log::debug!("loaded style file {}", path.display());

        StyleSpec::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> ConfigResult<Self> {
        let file: StyleFile = toml::from_str(text)?;
        StyleSpec::default().merge(file)
    }

    /// Overlays values present in `file` onto this spec.
    pub fn merge(mut self, file: StyleFile) -> ConfigResult<Self> {
        if let Some(w) = file.stroke_width {
            self.stroke_width = w;
        }
        if let Some(s) = file.text_size {
            self.text_size = s;
        }
        if let Some(mode) = file.mode {
            self.mode = mode.parse()?;
        }
        if let Some(c) = file.text_color {
            self.text_color = parse_hex(&c)?;
        }

        let colors = file
            .colors
            .iter()
            .map(|c| parse_hex(c))
            .collect::<Result<Vec<_>, _>>()?;

        self.with_colors(&colors)?.validated()
    }

    pub fn validated(self) -> ConfigResult<Self> {
        positive("stroke_width", self.stroke_width)?;
        positive("text_size", self.text_size)?;
        Ok(self)
    }

    /// Unset slots get a generated color now, so they stay put for as long
    /// as this style is in use.
    pub fn resolve(&self, colors: &mut ColorGenerator) -> StyleConfig {
        StyleConfig {
            stroke_width: self.stroke_width,
            text_size: self.text_size,
            mode: self.mode,
            colors: self.colors.map(|c| c.unwrap_or_else(|| colors.next_color())),
            text_color: self.text_color,
        }
    }
}

fn positive(name: &'static str, value: f32) -> ConfigResult<()> {
    // NaN fails this too
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleFile {
    pub stroke_width: Option<f32>,
    pub text_size: Option<f32>,
    pub mode: Option<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    pub text_color: Option<String>,
}
