//! Clear color

use serde::{Serialize, Deserialize};

/// RGBA color the framebuffer is cleared to, components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClearColor {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Alpha
    pub a: f32,
}

impl ClearColor {
    /// The sample window's background
    pub const DARK_TEAL: Self = Self::new(0.07, 0.13, 0.17, 1.0);

    /// Opaque black
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Create a color from its components
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Components as `[r, g, b, a]`
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Whether every component is a finite value in `[0, 1]`
    pub fn is_normalized(self) -> bool {
        self.to_array().iter().all(|c| (0.0..=1.0).contains(c))
    }
}

impl Default for ClearColor {
    fn default() -> Self {
        Self::DARK_TEAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dark_teal_components() {
        let [r, g, b, a] = ClearColor::DARK_TEAL.to_array();

        assert_relative_eq!(r, 0.07);
        assert_relative_eq!(g, 0.13);
        assert_relative_eq!(b, 0.17);
        assert_relative_eq!(a, 1.0);
    }

    #[test]
    fn test_normalized_range() {
        assert!(ClearColor::BLACK.is_normalized());
        assert!(!ClearColor::new(0.0, -0.1, 0.0, 1.0).is_normalized());
        assert!(!ClearColor::new(f32::NAN, 0.0, 0.0, 1.0).is_normalized());
    }
}
