//! Liskov substitution: a square is not a rectangle here. Making `Square`
//! inherit `Rectangle`'s mutable width and height would force one setter to
//! silently change the other dimension, so the two are sibling variants
//! unified only by the `Shape` capability.

use crate::core::Shape;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
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
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.side * self.side
    }
}

/// Computes and prints the area of both reference variants.
pub fn demonstrate(width: f64, height: f64, side: f64) {
    let rectangle = Rectangle::new(width, height);
    println!("Rectangle area: {}", rectangle.area());

    let square = Square::new(side);
    println!("Square area: {}", square.area());
}
