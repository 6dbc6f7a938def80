use std::path::PathBuf;

use clap::Parser;
use egui::Color32;

use stats_view::{
    color::parse_hex,
    config::{RenderMode, StyleSpec},
    error::{ConfigError, ConfigResult},
};

pub const DEFAULT_VALUES: [f32; 4] = [500.0, 500.0, 500.0, 500.0];

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Values to chart, in display order
    pub values: Vec<f32>,

    /// Style file (TOML). Defaults to stats-view/style.toml in the user config dir
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// rotate, sequential or split
    #[clap(short, long)]
    pub mode: Option<RenderMode>,

    #[clap(long)]
    pub stroke_width: Option<f32>,

    #[clap(long)]
    pub text_size: Option<f32>,

    /// Segment color, #RRGGBB or #AARRGGBB. Repeat for up to 4
    #[clap(long = "color")]
    pub colors: Vec<String>,

    /// Seed for generated fallback colors
    #[clap(long)]
    pub seed: Option<u64>,
}

impl Args {
    pub fn values(&self) -> Vec<f32> {
        if self.values.is_empty() {
            DEFAULT_VALUES.to_vec()
        } else {
            self.values.clone()
        }
    }

    /// Style file (explicit or default location) with flags laid over it.
    pub fn style(&self) -> ConfigResult<StyleSpec> {
        let mut spec = match self.style_path() {
            Some(path) => StyleSpec::load(&path)?,
            None => StyleSpec::default(),
        };

        if let Some(mode) = self.mode {
            spec.mode = mode;
        }
        if let Some(w) = self.stroke_width {
            spec.stroke_width = w;
        }
        if let Some(s) = self.text_size {
            spec.text_size = s;
        }

        let colors = self
            .colors
            .iter()
            .map(|c| parse_hex(c))
            .collect::<Result<Vec<Color32>, _>>()
            .map_err(ConfigError::from)?;

        spec.with_colors(&colors)?.validated()
    }

    fn style_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.config {
            return Some(path.clone());
        }

        let path = dirs::config_dir()?.join("stats-view").join("style.toml");
        path.is_file().then(|| path)
    }
}

pub fn get_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn positional_values_and_missing_style_file() {
        let args = Args::parse_from([
            "stats-view",
            "--config",
            "/nonexistent/style.toml",
            "1",
            "2",
        ]);
        assert_eq!(args.values(), vec![1.0, 2.0]);
        assert!(matches!(args.style(), Err(ConfigError::Io { .. })));
    }

    #[test]
    fn flags_win_over_style_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r##"
stroke_width = 3.0
text_size = 30.0
mode = "sequential"
colors = ["#00FF00", "#00FF00", "#FFFF00"]
"##
        )
        .unwrap();
        let path = file.path().to_str().unwrap();

        let args = Args::parse_from([
            "stats-view",
            "--config",
            path,
            "--mode",
            "split",
            "--stroke-width",
            "8",
            "--color",
            "#FF0000",
            "--color",
            "#0000FF",
        ]);
        assert_eq!(args.values(), DEFAULT_VALUES.to_vec());

        let spec = args.style().unwrap();
        assert_eq!(spec.mode, RenderMode::Split);
        assert_eq!(spec.stroke_width, 8.0);
        // Not given on the command line, so the file value stands.
        assert_eq!(spec.text_size, 30.0);
        assert_eq!(
            spec.colors,
            [Some(Color32::RED), Some(Color32::BLUE), Some(Color32::YELLOW), None]
        );

        let file_only = Args::parse_from(["stats-view", "--config", path]).style().unwrap();
        assert_eq!(file_only.mode, RenderMode::Sequential);
        assert_eq!(file_only.stroke_width, 3.0);
    }

    #[test]
    fn rejects_bad_mode() {
        assert!(Args::try_parse_from(["stats-view", "--mode", "spin"]).is_err());
    }
}
