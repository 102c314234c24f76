//! sRGB and CIE Lab color types for the gradient sampler.
//!
//! Gradient stops are blended in L*a*b* (D65 reference white) so equal
//! parameter steps read as equal perceived color steps, which keeps the
//! rendered gradient free of banding.

use image::Rgb;

use crate::error::GradientError;

const D65_X: f64 = 0.95047;
const D65_Y: f64 = 1.0;
const D65_Z: f64 = 1.08883;

/// sRGB color with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// CIE L*a*b* color, L in `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Srgb {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Parses a `"#rrggbb"` hex color, case insensitive, `#` optional.
    pub fn from_hex(hex: &str) -> Result<Self, GradientError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(GradientError::InvalidHexColor(hex.to_string()));
        }
        let channel = |range| {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| v as f64 / 255.0)
                .map_err(|_| GradientError::InvalidHexColor(hex.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Quantizes to 8-bit RGB, clamping out-of-gamut channels first.
    pub fn to_rgb8(self) -> Rgb<u8> {
        let q = |v: f64| (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
        Rgb([q(self.r), q(self.g), q(self.b)])
    }
}

impl Lab {
    /// Linear blend toward `other`; `t` outside `[0, 1]` extrapolates.
    pub fn blend(self, other: Lab, t: f64) -> Lab {
        Lab {
            l: self.l + t * (other.l - self.l),
            a: self.a + t * (other.a - self.a),
            b: self.b + t * (other.b - self.b),
        }
    }
}

fn srgb_to_linear(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(v: f64) -> f64 {
    if v <= 0.0031308 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

// f(t) from the CIE Lab definition, linearized below (6/29)^3.
fn lab_f(t: f64) -> f64 {
    if t > 0.008856451679035631 {
        t.cbrt()
    } else {
        t / 0.12841854934601665 + 4.0 / 29.0
    }
}

fn lab_f_inv(t: f64) -> f64 {
    if t > 6.0 / 29.0 {
        t * t * t
    } else {
        0.12841854934601665 * (t - 4.0 / 29.0)
    }
}

impl From<Srgb> for Lab {
    fn from(c: Srgb) -> Self {
        let r = srgb_to_linear(c.r);
        let g = srgb_to_linear(c.g);
        let b = srgb_to_linear(c.b);

        let x = 0.4124564 * r + 0.3575761 * g + 0.1804375 * b;
        let y = 0.2126729 * r + 0.7151522 * g + 0.0721750 * b;
        let z = 0.0193339 * r + 0.1191920 * g + 0.9503041 * b;

        let fx = lab_f(x / D65_X);
        let fy = lab_f(y / D65_Y);
        let fz = lab_f(z / D65_Z);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<Lab> for Srgb {
    fn from(c: Lab) -> Self {
        let fy = (c.l + 16.0) / 116.0;
        let fx = fy + c.a / 500.0;
        let fz = fy - c.b / 200.0;

        let x = D65_X * lab_f_inv(fx);
        let y = D65_Y * lab_f_inv(fy);
        let z = D65_Z * lab_f_inv(fz);

        let r = 3.2404542 * x - 1.5371385 * y - 0.4985314 * z;
        let g = -0.9692660 * x + 1.8760108 * y + 0.0415560 * z;
        let b = 0.0556434 * x - 0.2040259 * y + 1.0572252 * z;

        Srgb {
            r: linear_to_srgb(r),
            g: linear_to_srgb(g),
            b: linear_to_srgb(b),
        }
    }
}
