use core::ops::{Add, Mul, Neg, Sub};

use super::Scalar;

/// A 2d point or vector with coordinates of scalar type T.
/// Points are plain values: they are copied, never shared.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point2<T> {
    pub(crate) x: T,
    pub(crate) y: T,
}

impl<T> Point2<T>
where
    T: Scalar,
{
    pub fn new(x: T, y: T) -> Self {
        Point2 { x, y }
    }

    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }

    /// Dot product of self and other, both interpreted as vectors
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    pub fn squared_length(&self) -> T {
        self.dot(*self)
    }

    /// Euclidean distance between self and other
    pub fn distance(&self, other: Self) -> T {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// The vector rotated by 90° counter-clockwise
    pub fn perpendicular(&self) -> Self {
        Point2 {
            x: -self.y,
            y: self.x,
        }
    }

    /// Linear interpolation `self * (1 - t) + other * t`.
    /// t is not clamped, values outside [0,1] extrapolate along the line.
    pub fn lerp(self, other: Self, t: T) -> Self {
        self * (T::one() - t) + other * t
    }

    pub fn midpoint(self, other: Self) -> Self {
        self.lerp(other, 0.5f32.into())
    }
}

impl<T> Add for Point2<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    fn add(self, other: Point2<T>) -> Point2<T> {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T> Sub for Point2<T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T> Neg for Point2<T>
where
    T: Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        Point2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T> Mul<T> for Point2<T>
where
    T: Mul<T, Output = T> + Copy,
{
    type Output = Point2<T>;

    fn mul(self, rhs: T) -> Point2<T> {
        Point2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl<T> From<(T, T)> for Point2<T> {
    fn from((x, y): (T, T)) -> Self {
        Point2 { x, y }
    }
}

impl<T> From<[T; 2]> for Point2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Point2 { x, y }
    }
}

impl<T> From<Point2<T>> for (T, T) {
    fn from(p: Point2<T>) -> Self {
        (p.x, p.y)
    }
}

impl<T> From<Point2<T>> for [T; 2] {
    fn from(p: Point2<T>) -> Self {
        [p.x, p.y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    #[test]
    fn arithmetic() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(3.0, -1.0);
        assert_eq!(a + b, Point2::new(4.0, 1.0));
        assert_eq!(a - b, Point2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Point2::new(2.0, 4.0));
        assert_eq!(-a, Point2::new(-1.0, -2.0));
        assert_eq!(a.dot(b), 1.0);
    }

    /// Classic pythagorean triple with sides 3, 4 and hypotenuse 5
    #[test]
    fn distance_pythagoras() {
        let a: Point2<f64> = Point2::new(0.0, 1.0);
        let b: Point2<f64> = Point2::new(3.0, 5.0);
        assert!((a.distance(b) - 5.0).abs() < EPSILON);
        assert!(((b - a).squared_length() - 25.0).abs() < EPSILON);
    }

    #[test]
    fn lerp_extrapolates() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(2.0, 4.0);
        assert_eq!(a.lerp(b, 0.5), Point2::new(1.0, 2.0));
        assert_eq!(a.lerp(b, 1.5), Point2::new(3.0, 6.0));
        assert_eq!(a.midpoint(b), Point2::new(1.0, 2.0));
    }

    #[test]
    fn perpendicular_is_orthogonal() {
        let v = Point2::new(3.0f32, 7.0);
        assert_eq!(v.dot(v.perpendicular()), 0.0);
        assert_eq!(v.perpendicular(), Point2::new(-7.0, 3.0));
    }

    #[test]
    fn tuple_and_array_conversions() {
        let p: Point2<f64> = (1.5, -2.0).into();
        assert_eq!(p, Point2::new(1.5, -2.0));
        let arr: [f64; 2] = p.into();
        assert_eq!(arr, [1.5, -2.0]);
        assert_eq!(Point2::from(arr), p);
    }
}
