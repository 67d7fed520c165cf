//! Plain value types carried by entities

use serde::Serialize;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// 2-D point or vector
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Directions are plain vectors
pub type Direction = Position;

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl AddAssign for Position {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Position {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Add for Position {
    type Output = Position;

    fn add(mut self, rhs: Self) -> Position {
        self += rhs;
        self
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(mut self, rhs: Self) -> Position {
        self -= rhs;
        self
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{x: {}, y: {}}}", self.x, self.y)
    }
}

/// RGBA, each channel nominally in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// Opaque black
impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{r: {}, g: {}, b: {}, a: {}}}",
            self.r, self.g, self.b, self.a
        )
    }
}

/// Frequency in Hz together with the current phase in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frequency {
    pub value: f64,
    pub phase: f64,
}

impl Frequency {
    /// Placeholder until a `frequency:` field is read
    pub const INVALID: Frequency = Frequency {
        value: -1.0,
        phase: 0.0,
    };

    pub const fn new(value: f64, phase: f64) -> Self {
        Self { value, phase }
    }

    pub fn period(&self) -> f64 {
        1.0 / self.value
    }

    /// Convert a start phase given as a fraction of a period into seconds,
    /// using the frequency known at this point
    pub fn set_start_phase(&mut self, start_phase: f64) {
        self.phase = start_phase * self.period();
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Frequency::INVALID
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{freq: {}, phase: {}}}", self.value, self.phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_arithmetic() {
        let a = Position::new(1.0, 2.0);
        let b = Position::new(0.5, -1.0);
        assert_eq!(a + b, Position::new(1.5, 1.0));
        assert_eq!(a - b, Position::new(0.5, 3.0));
        assert_eq!(Position::new(3.0, 4.0).norm(), 5.0);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Color::default(), Color::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Frequency::default().value, -1.0);
        assert_eq!(Position::default(), Position::new(0.0, 0.0));
    }

    #[test]
    fn test_start_phase_uses_current_frequency() {
        let mut frequency = Frequency::new(2.0, 0.0);
        frequency.set_start_phase(0.5);
        assert_eq!(frequency.phase, 0.25);

        // read before any frequency: the placeholder value applies
        let mut early = Frequency::default();
        early.set_start_phase(0.5);
        assert_eq!(early.phase, -0.5);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(1.0, 0.5).to_string(), "{x: 1, y: 0.5}");
        assert_eq!(Frequency::new(2.0, 0.0).to_string(), "{freq: 2, phase: 0}");
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&Color::BLACK).unwrap();
        assert_eq!(json, r#"{"r":0.0,"g":0.0,"b":0.0,"a":1.0}"#);
    }
}
