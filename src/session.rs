//! A drawing session: the edited control points together with the drawing
//! and table settings, loadable from a JSON document such as
//!
//! ```json
//! {
//!     "points": [ { "x": -100, "y": 0 }, { "x": 0, "y": 150 }, { "x": 100, "y": 0 } ],
//!     "method": "matrix",
//!     "step": 0.1,
//!     "range": 1,
//!     "config": { "format": "svg", "output_dir": "out" }
//! }
//! ```
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::Config;
use crate::control_points::ControlPointSequence;
use crate::error::Result;
use crate::render::{render_to_file, Scene};
use crate::sampler::{sample, sample_table, EvaluationMethod, TableRow};
use crate::table::{save_matrix, write_table};
use crate::NativeFloat;

fn default_step() -> NativeFloat {
    0.1
}

fn default_range() -> NativeFloat {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub points: ControlPointSequence,
    #[serde(default)]
    pub method: EvaluationMethod,
    /// Parameter step of the coordinate table
    #[serde(default = "default_step")]
    pub step: NativeFloat,
    /// Largest parameter of the coordinate table
    #[serde(default = "default_range")]
    pub range: NativeFloat,
    #[serde(default)]
    pub config: Config,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            points: ControlPointSequence::default(),
            method: EvaluationMethod::default(),
            step: default_step(),
            range: default_range(),
            config: Config::default(),
        }
    }
}

impl Session {
    /// Parse a session and validate its control points.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut session: Session = serde_json::from_str(json)?;
        session.points = ControlPointSequence::from_points(session.points.iter().copied())?;
        Ok(session)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let session = Self::from_json(&fs::read_to_string(path)?)?;
        info!(
            path = %path.display(),
            points = session.points.len(),
            method = %session.method,
            "loaded session"
        );
        Ok(session)
    }

    pub fn scene(&self) -> Scene<'_> {
        Scene::new(self.config.canvas, &self.points, self.method)
    }

    /// The curve polyline in screen coordinates, empty for fewer than two points.
    pub fn polyline(&self) -> Vec<(NativeFloat, NativeFloat)> {
        let (xs, ys) = self.config.canvas.screen_axes(&self.points);
        sample(self.method, &xs, &ys)
    }

    /// The coordinate table in screen coordinates. The table always uses the
    /// Bernstein sum, whichever method is selected for drawing.
    pub fn table(&self) -> Vec<TableRow<NativeFloat>> {
        let (xs, ys) = self.config.canvas.screen_axes(&self.points);
        sample_table(&xs, &ys, self.step, self.range)
    }

    /// Draw the curve and write the table and matrix exports into the output directory.
    pub fn export(&self) -> Result<()> {
        fs::create_dir_all(&self.config.output_dir)?;
        render_to_file(&self.config.image_path(), self.config.format, &self.scene())?;

        let rows = self.table();
        if rows.is_empty() {
            warn!(step = self.step, range = self.range, "no coordinate table for these parameters");
        } else {
            write_table(&self.config.table_path(), &rows)?;
        }
        save_matrix(&self.config.matrix_path())
    }
}
