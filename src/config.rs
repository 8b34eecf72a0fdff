//! Grid configuration
//!
//! Every constant the grid depends on lives in [`GridConfig`]. The default
//! value is the reference chord backdrop: 124 measures of two sections.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::error::Category;

use crate::error::{GridError, GridResult};
use crate::geometry;
use crate::types::Color;

/// Stroke width of every grid line, in pixels
pub const STROKE_WIDTH: u32 = 1;

const DEFAULT_WIDTH: u32 = 180 * 2;
const DEFAULT_HEIGHT: u32 = 40 * 2;
const DEFAULT_MEASURES: u32 = 124;
const DEFAULT_SECTION_WIDTH: u32 = 62 * 2;
const DEFAULT_ANCHORS: [i32; 2] = [22 * 2, (22 + 62 + 10) * 2];

/// Layout constants for one render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Height of one measure band in pixels
    pub height: u32,
    /// Number of measure bands
    pub measures: u32,
    /// Width of each section in pixels
    pub section_width: u32,
    /// Left edge of each section, in drawing order
    pub section_anchors: Vec<i32>,
    pub main_color: Color,
    pub sub_color: Color,
    pub background: Color,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            measures: DEFAULT_MEASURES,
            section_width: DEFAULT_SECTION_WIDTH,
            section_anchors: DEFAULT_ANCHORS.to_vec(),
            main_color: Color::black(),
            sub_color: Color::light_gray(),
            background: Color::white(),
        }
    }
}

impl GridConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> GridResult<Self> {
        serde_json::from_str(json).map_err(|err| match err.classify() {
            // well-formed JSON holding a bad value (negative width, unknown key, ...)
            Category::Data => GridError::InvalidConfiguration(err.to_string()),
            _ => GridError::from(err),
        })
    }

    /// Load a JSON config file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> GridResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check the input constraints of a render.
    ///
    /// `measures == 0` is valid and yields an empty grid.
    pub fn validate(&self) -> GridResult<()> {
        if self.width == 0 {
            return Err(invalid("width must be positive"));
        }
        if self.height == 0 {
            return Err(invalid("height must be positive"));
        }
        if self.section_width == 0 {
            return Err(invalid("section_width must be positive"));
        }
        if self.section_anchors.is_empty() {
            return Err(invalid("section_anchors must not be empty"));
        }
        if geometry::canvas_size(self.width, self.height, self.measures).is_none() {
            return Err(invalid(format!(
                "canvas height {} * {} / 2 exceeds {} pixels",
                self.height,
                self.measures,
                u32::MAX
            )));
        }
        Ok(())
    }

    pub fn sections_per_measure(&self) -> usize {
        self.section_anchors.len()
    }
}

fn invalid(message: impl Into<String>) -> GridError {
    GridError::InvalidConfiguration(message.into())
}

/// Values that replace fields of a base config, e.g. from the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub measures: Option<u32>,
    pub section_width: Option<u32>,
    pub section_anchors: Option<Vec<i32>>,
}

impl ConfigOverrides {
    pub fn apply(self, mut config: GridConfig) -> GridConfig {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(measures) = self.measures {
            config.measures = measures;
        }
        if let Some(section_width) = self.section_width {
            config.section_width = section_width;
        }
        if let Some(anchors) = self.section_anchors {
            config.section_anchors = anchors;
        }
        config
    }
}
