//! The four cosine coefficients and the animation mode that selects one of
//! them.

use std::fmt;
use std::str::FromStr;

use crate::error::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamId {
    A,
    B,
    C,
    D,
}

impl ParamId {
    pub const ALL: [ParamId; 4] = [ParamId::A, ParamId::B, ParamId::C, ParamId::D];

    pub fn as_str(self) -> &'static str {
        match self {
            ParamId::A => "A",
            ParamId::B => "B",
            ParamId::C => "C",
            ParamId::D => "D",
        }
    }
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coefficients of `y = a·cos(b·x + c) + d`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    /// Amplitude.
    pub a: f64,
    /// Angular frequency.
    pub b: f64,
    /// Phase.
    pub c: f64,
    /// Vertical offset.
    pub d: f64,
}

impl Params {
    pub const DEFAULT: Params = Params {
        a: 1.0,
        b: 1.0,
        c: 0.0,
        d: 0.0,
    };

    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    #[inline]
    pub fn get(&self, id: ParamId) -> f64 {
        match id {
            ParamId::A => self.a,
            ParamId::B => self.b,
            ParamId::C => self.c,
            ParamId::D => self.d,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, id: ParamId) -> &mut f64 {
        match id {
            ParamId::A => &mut self.a,
            ParamId::B => &mut self.b,
            ParamId::C => &mut self.c,
            ParamId::D => &mut self.d,
        }
    }

    /// Evaluate the curve at `x`.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.a * (self.b * x + self.c).cos() + self.d
    }

    /// One step of exponential smoothing toward `target`.
    pub fn smooth_toward(&mut self, target: &Params, factor: f64) {
        for id in ParamId::ALL {
            let current = self.get_mut(id);
            *current = lerp(*current, target.get(id), factor);
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[inline]
pub fn lerp(a: f64, b: f64, f: f64) -> f64 {
    a + (b - a) * f
}

/// Parse a control's value. Empty, malformed and non-finite text is rejected.
pub fn parse_number(raw: &str) -> Result<f64, InputError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::NotANumber(raw.to_owned())),
    }
}

/// Which animated parameter is driven while playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationMode {
    None,
    A,
    B,
    #[default]
    C,
    D,
}

impl AnimationMode {
    pub fn param(self) -> Option<ParamId> {
        match self {
            AnimationMode::None => None,
            AnimationMode::A => Some(ParamId::A),
            AnimationMode::B => Some(ParamId::B),
            AnimationMode::C => Some(ParamId::C),
            AnimationMode::D => Some(ParamId::D),
        }
    }

    /// Token used by the mode `<select>`.
    pub fn as_str(self) -> &'static str {
        match self.param() {
            Some(id) => id.as_str(),
            None => "none",
        }
    }
}

impl FromStr for AnimationMode {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "none" => Ok(AnimationMode::None),
            "A" => Ok(AnimationMode::A),
            "B" => Ok(AnimationMode::B),
            "C" => Ok(AnimationMode::C),
            "D" => Ok(AnimationMode::D),
            other => Err(InputError::UnknownMode(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothing_moves_every_parameter_by_factor() {
        let mut p = Params::new(0.0, 0.0, 5.0, 0.0);
        let target = Params::new(1.0, 1.0, 0.0, 1.0);
        p.smooth_toward(&target, 0.5);
        assert_eq!(p, Params::new(0.5, 0.5, 2.5, 0.5));
    }

    #[test]
    fn parse_number_rejects_garbage() {
        assert_eq!(parse_number(" 2.5 "), Ok(2.5));
        assert!(parse_number("").is_err());
        assert!(parse_number("abc").is_err());
        assert!(parse_number("inf").is_err());
        assert!(parse_number("NaN").is_err());
    }

    #[test]
    fn mode_tokens_round_trip() {
        for mode in [
            AnimationMode::None,
            AnimationMode::A,
            AnimationMode::B,
            AnimationMode::C,
            AnimationMode::D,
        ] {
            assert_eq!(mode.as_str().parse::<AnimationMode>(), Ok(mode));
        }
        assert!("E".parse::<AnimationMode>().is_err());
    }
}
