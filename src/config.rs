use core::fmt;
use core::str::FromStr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::error::Error;

/// Output settings for a drawing session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Size and grid of the drawing surface
    pub canvas: Canvas,
    /// Directory all output files are written into
    pub output_dir: PathBuf,
    /// Image format of the rendered curve
    pub format: OutputFormat,
    /// File name of the image, without extension
    pub image_name: String,
    pub table_name: String,
    pub matrix_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            canvas: Canvas::default(),
            output_dir: PathBuf::from("."),
            format: OutputFormat::Png,
            image_name: "bezier_curve".to_string(),
            table_name: "bezier_table.txt".to_string(),
            matrix_name: "bezier_matrix.txt".to_string(),
        }
    }
}

impl Config {
    pub fn image_path(&self) -> PathBuf {
        self.output_dir
            .join(&self.image_name)
            .with_extension(self.format.extension())
    }

    pub fn table_path(&self) -> PathBuf {
        self.output_dir.join(&self.table_name)
    }

    pub fn matrix_path(&self) -> PathBuf {
        self.output_dir.join(&self.matrix_name)
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "svg" => Ok(OutputFormat::Svg),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}
