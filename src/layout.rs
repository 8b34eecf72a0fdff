//! Grid line layout
//!
//! [`GridLines`] walks the grid measure by measure, and within a measure
//! section by section. Each section yields its main line first, then the
//! five quarter ticks from left to right:
//!
//! ```text
//!   line_x      +sw/4     +sw/2     +3sw/4     +sw
//!     |         |         |         |         |    y0
//!     |         |         |         |         |
//!     +=========================================+  y1 (main)
//! ```
//!
//! The sequence is lazy. A new `GridLines` over the same config replays
//! exactly the same instructions.

use std::iter::FusedIterator;

use crate::config::{GridConfig, STROKE_WIDTH};
use crate::geometry::{self, TICKS_PER_SECTION};
use crate::types::{LineInstruction, LineKind, Point};

/// Lines drawn for one section in one measure
pub const LINES_PER_SECTION: usize = 1 + TICKS_PER_SECTION;

/// Total number of lines a config produces
pub fn line_count(config: &GridConfig) -> usize {
    config.measures as usize * config.sections_per_measure() * LINES_PER_SECTION
}

/// Lazy sequence of grid line instructions
#[derive(Debug, Clone)]
pub struct GridLines<'a> {
    config: &'a GridConfig,
    ticks: [i64; TICKS_PER_SECTION],
    measure: u32,
    section: usize,
    step: usize,
    remaining: usize,
}

impl<'a> GridLines<'a> {
    pub fn new(config: &'a GridConfig) -> Self {
        Self {
            config,
            ticks: geometry::tick_offsets(config.section_width),
            measure: 0,
            section: 0,
            step: 0,
            remaining: line_count(config),
        }
    }

    fn current(&self) -> LineInstruction {
        let config = self.config;
        let (y0, y1) = geometry::band_bounds(self.measure, config.height);
        let line_x = config.section_anchors[self.section] as i64;

        if self.step == 0 {
            LineInstruction {
                kind: LineKind::Main,
                start: Point::new(line_x, y1),
                end: Point::new(line_x + config.section_width as i64, y1),
                color: config.main_color,
                stroke_width: STROKE_WIDTH,
            }
        } else {
            let x = line_x + self.ticks[self.step - 1];
            LineInstruction {
                kind: LineKind::Sub,
                start: Point::new(x, y0),
                end: Point::new(x, y1),
                color: config.sub_color,
                stroke_width: STROKE_WIDTH,
            }
        }
    }

    fn advance(&mut self) {
        self.step += 1;
        if self.step == LINES_PER_SECTION {
            self.step = 0;
            self.section += 1;
            if self.section == self.config.sections_per_measure() {
                self.section = 0;
                self.measure += 1;
            }
        }
    }
}

impl Iterator for GridLines<'_> {
    type Item = LineInstruction;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let line = self.current();
        self.advance();
        self.remaining -= 1;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for GridLines<'_> {}

impl FusedIterator for GridLines<'_> {}
