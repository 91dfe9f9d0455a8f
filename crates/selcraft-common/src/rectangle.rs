//! Plain rectangle object factory.

use serde::{Deserialize, Serialize};

/// A rectangle with a width, a height and a derived area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle from its sides.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width * height`.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Build a [`Rectangle`] from its sides.
///
/// # Example
/// ```ignore
/// let r = make_rectangle(10.0, 20.0);
/// assert_eq!(r.area(), 200.0);
/// ```
#[must_use]
pub const fn make_rectangle(width: f64, height: f64) -> Rectangle {
    Rectangle::new(width, height)
}
