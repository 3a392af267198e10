//! Method overriding through a shared capability.
//!
//! `Shape` declares `area` without a body; every concrete shape supplies its
//! own formula and the call is resolved at runtime through `dyn Shape`.

use std::fmt;

use crate::error::ShapeError;

/// Approximation of pi used by the circle formula, so a radius of 5 yields 78.5.
#[allow(clippy::approx_constant)]
pub const PI_APPROX: f64 = 3.14;

pub trait Shape {
    fn name(&self) -> &str;
    fn area(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn try_new(radius: f64) -> Result<Self, ShapeError> {
        ShapeError::check("Circle", "radius", radius).map(Self::new)
    }
}

impl Shape for Circle {
    fn name(&self) -> &str {
        "Circle"
    }

    fn area(&self) -> f64 {
        PI_APPROX * self.radius * self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub side: f64,
}

impl Square {
    pub fn new(side: f64) -> Self {
        Self { side }
    }

    pub fn try_new(side: f64) -> Result<Self, ShapeError> {
        ShapeError::check("Square", "side", side).map(Self::new)
    }
}

impl Shape for Square {
    fn name(&self) -> &str {
        "Square"
    }

    fn area(&self) -> f64 {
        self.side * self.side
    }
}

// =============================================================================
// Closed set of variants
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    Circle(Circle),
    Square(Square),
}

impl Shape for ShapeKind {
    fn name(&self) -> &str {
        match self {
            ShapeKind::Circle(circle) => circle.name(),
            ShapeKind::Square(square) => square.name(),
        }
    }

    fn area(&self) -> f64 {
        match self {
            ShapeKind::Circle(circle) => circle.area(),
            ShapeKind::Square(square) => square.area(),
        }
    }
}

impl From<Circle> for ShapeKind {
    fn from(circle: Circle) -> Self {
        ShapeKind::Circle(circle)
    }
}

impl From<Square> for ShapeKind {
    fn from(square: Square) -> Self {
        ShapeKind::Square(square)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Circle(circle) => write!(f, "Circle(radius={})", circle.radius),
            ShapeKind::Square(square) => write!(f, "Square(side={})", square.side),
        }
    }
}

pub fn total_area(shapes: &[Box<dyn Shape>]) -> f64 {
    shapes.iter().map(|shape| shape.area()).sum()
}
