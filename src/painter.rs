use image::{Rgb, RgbImage};
use ndarray::Array2;

use crate::gradient::GradientTable;

/// Maps a grid of normalized escape values to pixel colors.
pub trait Painter {
    fn value_color(&self, value: f64) -> Rgb<u8>;

    fn paint(&self, values: &Array2<f64>) -> RgbImage {
        let width: u32 = values.ncols().try_into().unwrap();
        let height: u32 = values.nrows().try_into().unwrap();

        let mut img = RgbImage::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let value = values[[y as usize, x as usize]];
                img.put_pixel(x, y, self.value_color(value));
            }
        }
        img
    }
}

/// Paints by sampling a borrowed gradient table.
pub struct GradientPainter<'a> {
    gradient: &'a GradientTable,
}

impl<'a> GradientPainter<'a> {
    pub fn new(gradient: &'a GradientTable) -> Self {
        Self { gradient }
    }
}

impl Painter for GradientPainter<'_> {
    fn value_color(&self, value: f64) -> Rgb<u8> {
        self.gradient.sample(value)
    }
}
