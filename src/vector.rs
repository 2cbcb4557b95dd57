use std::ops::{Neg, Add, Sub, Mul, Div};
use std::fmt;

use approx::AbsDiffEq;

use crate::quaternion::Quaternion;

/// A point or direction in 3D space.
#[repr(C)]
#[derive(PartialEq, Clone, Copy, Default, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn sub(&self, vec: Vec3) -> Self {
        Self::new(self.x - vec.x, self.y - vec.y, self.z - vec.z)
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        self.length_sq().sqrt()
    }

    pub fn length_sq(&self) -> f64 {
        self.x*self.x + self.y*self.y + self.z*self.z
    }

    pub fn dot(&self, vec: Vec3) -> f64 {
        self.x*vec.x + self.y*vec.y + self.z*vec.z
    }

    pub fn equals(&self, vec: Vec3, eps: f64) -> bool {
        let d = self.sub(vec);
        d.x.abs() < eps && d.y.abs() < eps && d.z.abs() < eps
    }

    /// `(0, x, y, z)`
    pub fn to_pure_quaternion(&self) -> Quaternion {
        Quaternion::pure(self.x, self.y, self.z)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Vec3::sub(&self, other)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, other: f64) -> Self::Output {
        Self::new(self.x * other, self.y * other, self.z * other)
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    fn div(self, other: f64) -> Self::Output {
        Self::new(self.x / other, self.y / other, self.z / other)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(arr: [f64; 3]) -> Vec3 {
        bytemuck::cast(arr)
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(vec: Vec3) -> [f64; 3] {
        bytemuck::cast(vec)
    }
}

impl AbsDiffEq for Vec3 {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        0.0
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[test]
fn sub_test() {
    let v  = Vec3::new(4.0, 3.0, 6.0);
    let v2 = Vec3::new(2.0, 9.0, 3.0);

    assert!(v.sub(v2) == Vec3::new(2.0, -6.0, 3.0));
    assert!(v - v2 == v + -v2);
}

#[test]
fn dot_test() {
    let v  = Vec3::new(4.0, 3.0, 6.0);
    let v2 = Vec3::new(2.0, 9.0, 3.0);

    let dot = v.dot(v2);
    assert!(dot == 53.0);
}

#[test]
fn length_test() {
    let v = Vec3::new(2.0, 3.0, 6.0);
    assert!(v.length() == 7.0);
    assert!(v.length_sq() == 49.0);
}

#[test]
fn scale_test() {
    let v = Vec3::new(2.0, -3.0, 6.0);
    assert!(v * 0.5 == v / 2.0);
}

#[test]
fn equals_test() {
    let v = Vec3::new(1.0, 1.0, 1.0);
    assert!(v.equals(Vec3::new(1.05, 0.95, 1.0), 0.1));
    assert!(!v.equals(Vec3::new(1.0, 1.0, 1.2), 0.1));
}

#[test]
fn abs_diff_eq_test() {
    let v = Vec3::new(0.5, -3.0, 6.0);
    assert!(v.abs_diff_eq(&v, 0.0));
    assert!(v.abs_diff_eq(&Vec3::new(0.25, -3.0, 6.0), 0.25));
    assert!(!v.equals(Vec3::new(0.25, -3.0, 6.0), 0.25));
    assert!(!v.abs_diff_eq(&Vec3::new(0.5, -3.0, 6.5), Vec3::default_epsilon()));
}

#[test]
fn array_test() {
    let v = Vec3::from([1.0, -2.0, 3.5]);
    assert!(v == Vec3::new(1.0, -2.0, 3.5));
    assert!(<[f64; 3]>::from(v) == [1.0, -2.0, 3.5]);
}

#[test]
fn pure_quaternion_test() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    assert!(v.to_pure_quaternion() == Quaternion::new(0.0, 1.0, 2.0, 3.0));
}

#[test]
fn display_test() {
    assert_eq!(Vec3::new(1.0, -0.5, 0.0).to_string(), "(1, -0.5, 0)");
}
