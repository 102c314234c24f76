use ndarray::Array2;
use num::complex::Complex;

/// One axis of the complex-plane viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn length(&self) -> f64 {
        self.max - self.min
    }
}

/// Rectangular region of the complex plane mapped onto the output image.
///
/// Pixel mapping derives a single scale from the real axis and the image
/// width; the imaginary axis supplies the top edge, and the rendered
/// vertical extent follows from the image aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub re: Axis,
    pub im: Axis,
}

impl Viewport {
    pub fn new(re: Axis, im: Axis) -> Self {
        Self { re, im }
    }

    /// Pixels per unit of complex-plane distance.
    pub fn pixel_scale(&self, width: usize) -> f64 {
        width as f64 / self.re.length()
    }

    /// Complex coordinate of the pixel at `(x, y)`.
    pub fn pixel_coordinate(&self, x: usize, y: usize, width: usize) -> Complex<f64> {
        let scale = self.pixel_scale(width);
        Complex::new(x as f64 / scale + self.re.min, y as f64 / scale + self.im.min)
    }

    /// Coordinate grid for a `width` x `height` image, row-major.
    pub fn coordinates(&self, width: usize, height: usize) -> Array2<Complex<f64>> {
        let scale = self.pixel_scale(width);
        Array2::from_shape_fn((height, width), |(y, x)| {
            Complex::new(x as f64 / scale + self.re.min, y as f64 / scale + self.im.min)
        })
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Axis::new(-3.0, 0.5), Axis::new(-1.0, 1.0))
    }
}
