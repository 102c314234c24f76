use anyhow::Context;
use log::info;

use mandelshade::coord::{Axis, Viewport};
use mandelshade::gradient::GradientTable;
use mandelshade::solver::EscapeSolver;
use mandelshade::Renderer;

const WIDTH: usize = 1920;
const HEIGHT: usize = 1080;
const MAX_ITER: u32 = 20;
const OUTPUT: &str = "mandelbrot.png";

const STOPS: &[(&str, f64)] = &[
    ("#000000", 0.0),
    ("#FF3A3A", 0.25),
    ("#8FFF42", 0.5),
    ("#ACB7FF", 0.75),
    ("#000000", 1.0),
];

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let gradient = GradientTable::from_hex_stops(STOPS).context("invalid gradient configuration")?;
    let viewport = Viewport::new(Axis::new(-3.0, 0.5), Axis::new(-1.0, 1.0));
    let renderer = Renderer::new(WIDTH, HEIGHT, viewport, EscapeSolver::new(MAX_ITER), gradient);

    let img = renderer.render();
    img.save(OUTPUT)
        .with_context(|| format!("failed to write {OUTPUT}"))?;
    info!("wrote {OUTPUT}");
    Ok(())
}
