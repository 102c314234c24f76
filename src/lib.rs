use image::RgbImage;
use log::info;

use crate::coord::Viewport;
use crate::gradient::GradientTable;
use crate::painter::{GradientPainter, Painter};
use crate::solver::EscapeSolver;

pub mod color;
pub mod coord;
pub mod error;
pub mod gradient;
pub mod painter;
pub mod solver;

pub use error::GradientError;

/// Everything needed to render one image: output dimensions, the
/// complex-plane viewport, the escape-time solver, and the gradient table.
///
/// The table is built once at startup and borrowed by the painter for the
/// duration of the render; nothing here is mutated while rendering.
pub struct Renderer {
    pub width: usize,
    pub height: usize,
    pub viewport: Viewport,
    pub solver: EscapeSolver,
    pub gradient: GradientTable,
}

impl Renderer {
    pub fn new(
        width: usize,
        height: usize,
        viewport: Viewport,
        solver: EscapeSolver,
        gradient: GradientTable,
    ) -> Self {
        Self {
            width,
            height,
            viewport,
            solver,
            gradient,
        }
    }

    /// Renders the configured view: evaluate escape times for every pixel
    /// coordinate, then color each value through the gradient. Sequential;
    /// each buffer cell is written exactly once.
    pub fn render(&self) -> RgbImage {
        info!(
            "rendering {}x{}, max {} iterations",
            self.width,
            self.height,
            self.solver.max_iter()
        );
        let coords = self.viewport.coordinates(self.width, self.height);
        let values = self.solver.solve(&coords);
        let painter = GradientPainter::new(&self.gradient);
        let img = painter.paint(&values);
        info!("render complete");
        img
    }
}

#[cfg(test)]
mod test {
    use image::Rgb;

    use super::*;
    use crate::coord::Axis;

    fn greyscale_renderer() -> Renderer {
        Renderer::new(
            4,
            4,
            Viewport::new(Axis::new(-2.0, 1.0), Axis::new(-1.0, 1.0)),
            EscapeSolver::new(5),
            GradientTable::from_hex_stops(&[("#000000", 0.0), ("#FFFFFF", 1.0)]).unwrap(),
        )
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = greyscale_renderer();
        assert_eq!(renderer.render().into_raw(), renderer.render().into_raw());
    }

    #[test]
    fn test_greyscale_scene_orders_interior_and_exterior() {
        let renderer = greyscale_renderer();
        let img = renderer.render();

        // Every pixel of a two-stop black-to-white table is grey.
        for Rgb([r, g, b]) in img.pixels() {
            assert_eq!(r, g);
            assert_eq!(g, b);
        }

        // The deep-interior point renders darker than a fast-escaping
        // exterior point.
        let interior = renderer
            .gradient
            .sample(renderer.solver.evaluate(num::complex::Complex::new(0.0, 0.0)));
        let exterior = renderer
            .gradient
            .sample(renderer.solver.evaluate(num::complex::Complex::new(1.5, 0.0)));
        assert!(interior[0] < exterior[0]);
    }

    #[test]
    fn test_saved_image_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        let img = greyscale_renderer().render();
        img.save(&path).unwrap();

        let reloaded = image::open(&path).unwrap().into_rgb8();
        assert_eq!(reloaded.into_raw(), img.into_raw());
    }
}
