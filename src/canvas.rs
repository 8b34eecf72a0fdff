//! Raster canvas backed by an `image` RGB buffer
//!
//! Provides the three primitives the grid renderer needs: create a blank
//! canvas, draw a straight line, and save the result.

use std::path::Path;

use image::RgbImage;

use crate::error::GridResult;
use crate::geometry::for_each_line_pixel;
use crate::image_utils;
use crate::types::{Color, LineInstruction, Point, Size};

/// In-memory RGB canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Create a canvas filled with `background`
    pub fn new(size: Size, background: Color) -> Self {
        Self {
            image: RgbImage::from_pixel(size.width, size.height, background.into()),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Color at `(x, y)`, or `None` outside the canvas
    pub fn pixel(&self, x: i64, y: i64) -> Option<Color> {
        let (x, y) = self.to_pixel_coords(x, y)?;
        Some((*self.image.get_pixel(x, y)).into())
    }

    /// Draw a line between two points. Pixels outside the canvas are dropped.
    pub fn draw_line(&mut self, start: Point, end: Point, color: Color, stroke_width: u32) {
        let rgb: image::Rgb<u8> = color.into();
        let (width, height) = (self.width() as i64, self.height() as i64);
        let image = &mut self.image;
        for_each_line_pixel(start, end, stroke_width, |x, y| {
            if (0..width).contains(&x) && (0..height).contains(&y) {
                image.put_pixel(x as u32, y as u32, rgb);
            }
        });
    }

    pub fn draw(&mut self, line: &LineInstruction) {
        self.draw_line(line.start, line.end, line.color, line.stroke_width);
    }

    /// Write the canvas as PNG
    pub fn save<P: AsRef<Path>>(&self, path: P) -> GridResult<()> {
        image_utils::save_png(&self.image, path.as_ref())
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }

    fn to_pixel_coords(&self, x: i64, y: i64) -> Option<(u32, u32)> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        (x < self.width() && y < self.height()).then_some((x, y))
    }
}
