//! Grid layout generator
//!
//! Validates a [`GridConfig`] once, then renders the grid onto a canvas.
//! The canvas height follows the fixed `height * measures / 2` rule, so with
//! the reference layout only the top half of the grid is visible; the rest
//! is clipped while drawing. [`GridLayoutGenerator::clipped_rows`] reports
//! how much.

use log::{debug, info, warn};

use crate::canvas::Canvas;
use crate::config::GridConfig;
use crate::error::{GridError, GridResult};
use crate::geometry;
use crate::layout::{self, GridLines};
use crate::types::Size;

/// Renders the measure/section grid for a validated config
#[derive(Debug, Clone)]
pub struct GridLayoutGenerator {
    config: GridConfig,
    canvas_size: Size,
}

impl GridLayoutGenerator {
    pub fn new(config: GridConfig) -> GridResult<Self> {
        config.validate()?;
        let canvas_size = geometry::canvas_size(config.width, config.height, config.measures)
            .ok_or_else(|| GridError::InvalidConfiguration("canvas height overflow".to_string()))?;

        debug!(
            "Grid config: {} measures of {}px, sections at {:?} ({}px wide), canvas {}x{}",
            config.measures,
            config.height,
            config.section_anchors,
            config.section_width,
            canvas_size.width,
            canvas_size.height
        );

        Ok(Self { config, canvas_size })
    }

    pub fn canvas_size(&self) -> Size {
        self.canvas_size
    }

    /// Fresh pass over every line instruction
    pub fn lines(&self) -> GridLines<'_> {
        GridLines::new(&self.config)
    }

    pub fn line_count(&self) -> usize {
        layout::line_count(&self.config)
    }

    /// Pixel rows of the drawn grid that fall below the canvas
    pub fn clipped_rows(&self) -> u64 {
        if self.config.measures == 0 {
            return 0;
        }
        // bottom main line sits on row height * measures, inclusive
        let drawn_rows = self.config.height as u64 * self.config.measures as u64 + 1;
        drawn_rows.saturating_sub(self.canvas_size.height as u64)
    }

    /// Draw every line onto `canvas`, returning how many were drawn
    pub fn render_into(&self, canvas: &mut Canvas) -> usize {
        let mut drawn = 0;
        for line in self.lines() {
            canvas.draw(&line);
            drawn += 1;
        }
        drawn
    }

    /// Render the grid onto a new background-filled canvas
    pub fn generate(&self) -> Canvas {
        let mut canvas = Canvas::new(self.canvas_size, self.config.background);

        let clipped = self.clipped_rows();
        if clipped > 0 {
            warn!(
                "Grid is {} rows taller than the {}px canvas; the overflow is clipped",
                clipped, self.canvas_size.height
            );
        }

        let drawn = self.render_into(&mut canvas);
        info!(
            "Rendered {} grid lines on a {}x{} canvas",
            drawn, self.canvas_size.width, self.canvas_size.height
        );
        canvas
    }
}

/// Validate `config` and render its grid
pub fn generate(config: GridConfig) -> GridResult<Canvas> {
    Ok(GridLayoutGenerator::new(config)?.generate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, LineKind, Point};
    use pretty_assertions::assert_eq;

    fn example_config() -> GridConfig {
        GridConfig {
            width: 360,
            height: 80,
            measures: 124,
            section_width: 124,
            section_anchors: vec![44, 176],
            ..Default::default()
        }
    }

    #[test]
    fn test_example_scenario() {
        let generator = GridLayoutGenerator::new(example_config()).unwrap();
        assert_eq!(generator.canvas_size(), Size::new(360, 4960));
        assert_eq!(generator.line_count(), 1488);
        assert_eq!(generator.lines().count(), 1488);

        let first = generator.lines().next().unwrap();
        assert_eq!(first.kind, LineKind::Main);
        assert_eq!(first.start, Point::new(44, 80));
        assert_eq!(first.end, Point::new(168, 80));
        assert_eq!(first.color, Color::black());
        assert_eq!(first.stroke_width, 1);
    }

    #[test]
    fn test_every_section_geometry() {
        let config = example_config();
        let generator = GridLayoutGenerator::new(config.clone()).unwrap();
        let lines: Vec<_> = generator.lines().collect();

        for (chunk_index, chunk) in lines.chunks(6).enumerate() {
            let m = (chunk_index / config.section_anchors.len()) as i64;
            let line_x = config.section_anchors[chunk_index % config.section_anchors.len()] as i64;
            let (y0, y1) = (m * 80, (m + 1) * 80);

            assert_eq!(chunk[0].kind, LineKind::Main);
            assert!(chunk[0].is_horizontal());
            assert_eq!((chunk[0].start, chunk[0].end), (Point::new(line_x, y1), Point::new(line_x + 124, y1)));

            let xs: Vec<i64> = chunk[1..].iter().map(|l| l.start.x).collect();
            assert_eq!(xs, vec![line_x, line_x + 31, line_x + 62, line_x + 93, line_x + 124]);
            for tick in &chunk[1..] {
                assert_eq!(tick.kind, LineKind::Sub);
                assert_eq!(tick.color, Color::light_gray());
                assert!(tick.is_vertical());
                assert_eq!((tick.start.y, tick.end.y), (y0, y1));
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let generator = GridLayoutGenerator::new(example_config()).unwrap();
        let first: Vec<_> = generator.lines().collect();
        let second: Vec<_> = generator.lines().collect();
        assert_eq!(first, second);
        assert_eq!(generator.generate(), generator.generate());
    }

    #[test]
    fn test_rendered_pixels() {
        let canvas = generate(example_config()).unwrap();
        assert_eq!(canvas.size(), Size::new(360, 4960));
        // main line
        assert_eq!(canvas.pixel(50, 80), Some(Color::black()));
        // tick drawn after the main line wins the crossing
        assert_eq!(canvas.pixel(44, 80), Some(Color::light_gray()));
        assert_eq!(canvas.pixel(75, 40), Some(Color::light_gray()));
        assert_eq!(canvas.pixel(45, 40), Some(Color::white()));
        assert_eq!(canvas.pixel(10, 10), Some(Color::white()));
        // last visible row still inside the grid
        assert_eq!(canvas.pixel(300, 4959), Some(Color::light_gray()));
    }

    #[test]
    fn test_clipped_rows() {
        let generator = GridLayoutGenerator::new(example_config()).unwrap();
        assert_eq!(generator.clipped_rows(), 124 * 80 + 1 - 4960);

        let empty = GridLayoutGenerator::new(GridConfig { measures: 0, ..example_config() }).unwrap();
        assert_eq!(empty.clipped_rows(), 0);
    }

    #[test]
    fn test_zero_measures() {
        let canvas = generate(GridConfig { measures: 0, ..example_config() }).unwrap();
        assert_eq!(canvas.size(), Size::new(360, 0));
    }

    #[test]
    fn test_invalid_config_fails_before_drawing() {
        let err = generate(GridConfig { section_anchors: vec![], ..example_config() }).unwrap_err();
        assert!(matches!(err, GridError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_render_into_existing_canvas() {
        let config = GridConfig {
            width: 20,
            height: 4,
            measures: 2,
            section_width: 8,
            section_anchors: vec![2],
            ..Default::default()
        };
        let generator = GridLayoutGenerator::new(config).unwrap();
        let mut canvas = Canvas::new(Size::new(20, 10), Color::rgb(1, 1, 1));
        assert_eq!(generator.render_into(&mut canvas), 12);
        assert_eq!(canvas.pixel(5, 4), Some(Color::black()));
        assert_eq!(canvas.pixel(5, 8), Some(Color::black()));
        assert_eq!(canvas.pixel(6, 1), Some(Color::light_gray()));
        assert_eq!(canvas.pixel(5, 9), Some(Color::rgb(1, 1, 1)));
    }
}
