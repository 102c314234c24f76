use image::Rgb;

use crate::color::{Lab, Srgb};
use crate::error::GradientError;

/// One anchor of the piecewise color interpolation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub color: Lab,
    pub position: f64,
}

/// Ordered color stops spanning `[0, 1]`, immutable once built.
///
/// Construction validates the table so sampling is total: at least two
/// stops, the first at position 0.0, the last at 1.0, and positions
/// strictly increasing in between.
#[derive(Clone, Debug)]
pub struct GradientTable {
    stops: Vec<GradientStop>,
}

impl GradientTable {
    pub fn new(stops: Vec<GradientStop>) -> Result<Self, GradientError> {
        if stops.len() < 2 {
            return Err(GradientError::TooFewStops(stops.len()));
        }
        let first = stops[0].position;
        let last = stops[stops.len() - 1].position;
        if first != 0.0 || last != 1.0 {
            return Err(GradientError::UncoveredDomain { first, last });
        }
        for (i, pair) in stops.windows(2).enumerate() {
            if pair[1].position <= pair[0].position {
                return Err(GradientError::UnorderedStops(i + 1));
            }
        }
        Ok(Self { stops })
    }

    /// Builds a table from `(hex color, position)` pairs.
    pub fn from_hex_stops(stops: &[(&str, f64)]) -> Result<Self, GradientError> {
        let stops = stops
            .iter()
            .map(|&(hex, position)| -> Result<GradientStop, GradientError> {
                Ok(GradientStop {
                    color: Srgb::from_hex(hex)?.into(),
                    position,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(stops)
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// The pair of stops bracketing `t`. Values outside every segment
    /// (possible since escape values may exceed 1) resolve to the final
    /// segment rather than an error.
    fn segment(&self, t: f64) -> (&GradientStop, &GradientStop) {
        for pair in self.stops.windows(2) {
            if pair[0].position <= t && t <= pair[1].position {
                return (&pair[0], &pair[1]);
            }
        }
        let n = self.stops.len();
        (&self.stops[n - 2], &self.stops[n - 1])
    }

    /// Samples the gradient at `t`, blending the bracketing stops in Lab
    /// space and clamping the result into displayable sRGB.
    pub fn sample(&self, t: f64) -> Rgb<u8> {
        let (left, right) = self.segment(t);
        let frac = (t - left.position) / (right.position - left.position);
        Srgb::from(left.color.blend(right.color, frac)).to_rgb8()
    }
}
