use std::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColourParseError {
    MissingHash { input: String },
    InvalidLength { input: String, length: usize },
    InvalidDigit { input: String },
}

impl fmt::Display for ColourParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHash { input } => {
                write!(f, "colour '{}' must start with '#'", input)
            }
            Self::InvalidLength { input, length } => {
                write!(
                    f,
                    "colour '{}' has {} hex digits, expected 6 or 8",
                    input, length
                )
            }
            Self::InvalidDigit { input } => {
                write!(f, "colour '{}' contains a non-hex digit", input)
            }
        }
    }
}

impl Error for ColourParseError {}

/// Straight (non-premultiplied) RGBA colour, 8 bits per channel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    pub const BLACK: Colour = Colour::rgb(0, 0, 0);
    pub const WHITE: Colour = Colour::rgb(255, 255, 255);
    /// `rgba(255,255,255,0)`, the outer stops of a soft brush gradient.
    pub const TRANSPARENT_WHITE: Colour = Colour::rgba(255, 255, 255, 0);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    #[must_use]
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Interpolates in premultiplied space, so a fade from a transparent
    /// stop never bleeds that stop's colour channels into the result.
    #[must_use]
    pub fn lerp(self, other: Colour, t: f64) -> Colour {
        let t = t.clamp(0.0, 1.0);
        let a0 = f64::from(self.a) / 255.0;
        let a1 = f64::from(other.a) / 255.0;
        let alpha = a0 * (1.0 - t) + a1 * t;

        if alpha <= 0.0 {
            return Colour::rgba(
                lerp_channel(self.r, other.r, t),
                lerp_channel(self.g, other.g, t),
                lerp_channel(self.b, other.b, t),
                0,
            );
        }

        let channel = |c0: u8, c1: u8| {
            let premultiplied = f64::from(c0) * a0 * (1.0 - t) + f64::from(c1) * a1 * t;
            (premultiplied / alpha).round().clamp(0.0, 255.0) as u8
        };

        Colour {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
            a: (alpha * 255.0).round() as u8,
        }
    }

    /// Composites `self` over `destination` (Porter-Duff source-over).
    #[must_use]
    pub fn over(self, destination: Colour) -> Colour {
        if self.a == 255 {
            return self;
        }
        if self.a == 0 {
            return destination;
        }

        let sa = f64::from(self.a) / 255.0;
        let da = f64::from(destination.a) / 255.0;
        let out_a = sa + da * (1.0 - sa);

        let channel = |s: u8, d: u8| {
            let value = (f64::from(s) * sa + f64::from(d) * da * (1.0 - sa)) / out_a;
            value.round().clamp(0.0, 255.0) as u8
        };

        Colour {
            r: channel(self.r, destination.r),
            g: channel(self.g, destination.g),
            b: channel(self.b, destination.b),
            a: (out_a * 255.0).round() as u8,
        }
    }
}

fn lerp_channel(c0: u8, c1: u8, t: f64) -> u8 {
    (f64::from(c0) * (1.0 - t) + f64::from(c1) * t).round() as u8
}

impl FromStr for Colour {
    type Err = ColourParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let digits = input
            .strip_prefix('#')
            .ok_or_else(|| ColourParseError::MissingHash {
                input: input.to_string(),
            })?;

        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColourParseError::InvalidLength {
                input: input.to_string(),
                length: digits.len(),
            });
        }

        let byte = |index: usize| {
            digits
                .get(index..index + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| ColourParseError::InvalidDigit {
                    input: input.to_string(),
                })
        };

        let alpha = if digits.len() == 8 { byte(6)? } else { 255 };

        Ok(Colour::rgba(byte(0)?, byte(2)?, byte(4)?, alpha))
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({},{},{},{})",
            self.r,
            self.g,
            self.b,
            f64::from(self.a) / 255.0
        )
    }
}
