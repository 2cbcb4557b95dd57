use std::ops::{Neg, Add, Sub, Mul};
use std::fmt;

use approx::AbsDiffEq;

use crate::error::{QuaternionError, QuaternionResult};

/// A quaternion with scalar part `w` and imaginary parts `i`, `j`, `k`.
///
/// Every operation returns a new value; nothing mutates a quaternion after
/// it has been built.
#[repr(C)]
#[derive(PartialEq, Clone, Copy, Default, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Quaternion {
    pub w: f64,
    pub i: f64,
    pub j: f64,
    pub k: f64,
}
impl Quaternion {
    pub fn new(w: f64, i: f64, j: f64, k: f64) -> Self {
        Self { w, i, j, k }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// `(n, 0, 0, 0)`
    pub fn from_real(n: f64) -> Self {
        Self::new(n, 0.0, 0.0, 0.0)
    }

    /// `(0, i, j, k)`
    pub fn pure(i: f64, j: f64, k: f64) -> Self {
        Self::new(0.0, i, j, k)
    }

    pub fn add(&self, q: Quaternion) -> Self {
        Self::new(self.w + q.w, self.i + q.i, self.j + q.j, self.k + q.k)
    }

    pub fn sub(&self, q: Quaternion) -> Self {
        Self::new(self.w - q.w, self.i - q.i, self.j - q.j, self.k - q.k)
    }

    /// Hamilton product `self * q`. Not commutative.
    pub fn mul_by_grassmann(&self, q: Quaternion) -> Self {
        Self::new(
            self.w*q.w - self.i*q.i - self.j*q.j - self.k*q.k,
            self.w*q.i + self.i*q.w + self.j*q.k - self.k*q.j,
            self.w*q.j - self.i*q.k + self.j*q.w + self.k*q.i,
            self.w*q.k + self.i*q.j - self.j*q.i + self.k*q.w,
        )
    }

    /// Euclidean product `conj(self) * q`.
    pub fn mul_by_euclid(&self, q: Quaternion) -> Self {
        self.conjugate().mul_by_grassmann(q)
    }

    /// Symmetric scalar part, `(conj(self)*q + conj(q)*self).w / 2`.
    ///
    /// This is the four-dimensional dot product of the two quaternions.
    pub fn mul_scalar(&self, q: Quaternion) -> f64 {
        self.conjugate()
            .mul_by_grassmann(q)
            .add(q.conjugate().mul_by_grassmann(*self))
            .w / 2.0
    }

    /// Antisymmetric scalar part, `(conj(self)*q - conj(q)*self).w / 2`.
    pub fn mul_outer(&self, q: Quaternion) -> f64 {
        self.conjugate()
            .mul_by_grassmann(q)
            .sub(q.conjugate().mul_by_grassmann(*self))
            .w / 2.0
    }

    pub fn mul_by_number(&self, n: f64) -> Self {
        self.mul_by_grassmann(Self::from_real(n))
    }

    /// Commutator `(self*q - q*self) / 2`.
    pub fn mul_vector(&self, q: Quaternion) -> Self {
        let d = self.mul_by_grassmann(q).sub(q.mul_by_grassmann(*self));
        Self::new(d.w / 2.0, d.i / 2.0, d.j / 2.0, d.k / 2.0)
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.i, -self.j, -self.k)
    }

    /// Squared norm: `w² + i² + j² + k²`.
    ///
    /// This is *not* the Euclidean length; take the square root for that.
    pub fn norm(&self) -> f64 {
        self.w*self.w + self.i*self.i + self.j*self.j + self.k*self.k
    }

    /// Scales the quaternion to unit norm.
    pub fn normalize(&self) -> QuaternionResult<Self> {
        let norm = self.norm();
        if norm == 0.0 {
            return Err(QuaternionError::ZeroQuaternion);
        }

        let norm_sqrt = norm.sqrt();
        Ok(Self::new(
            self.w / norm_sqrt,
            self.i / norm_sqrt,
            self.j / norm_sqrt,
            self.k / norm_sqrt,
        ))
    }

    /// Multiplicative inverse, `conj(self) / norm(self)`.
    pub fn reverse(&self) -> QuaternionResult<Self> {
        let norm = self.norm();
        if norm == 0.0 {
            return Err(QuaternionError::ZeroQuaternion);
        }

        let conj = self.conjugate();
        Ok(Self::new(conj.w / norm, conj.i / norm, conj.j / norm, conj.k / norm))
    }

    /// Builds the unit rotation quaternion for a right-handed rotation by
    /// `angle` radians around the axis `(self.i, self.j, self.k)`.
    ///
    /// The whole quaternion, `w` included, is normalized before `w` is
    /// replaced with `cos(angle / 2)`, so callers pass a pure quaternion.
    pub fn to_rotate_quaternion(&self, angle: f64) -> QuaternionResult<Self> {
        let axis = self.normalize()?;
        let (sin, cos) = (angle / 2.0).sin_cos();

        Ok(Self::new(cos, axis.i * sin, axis.j * sin, axis.k * sin))
    }

    /// True when every component differs by less than `eps` and the norms
    /// differ by less than `eps`.
    pub fn equals(&self, q: Quaternion, eps: f64) -> bool {
        self.equals_by_coords(q, eps) && self.equals_by_norm(q, eps)
    }

    fn equals_by_coords(&self, q: Quaternion, eps: f64) -> bool {
        let d = self.sub(q);
        d.w.abs() < eps && d.i.abs() < eps && d.j.abs() < eps && d.k.abs() < eps
    }

    fn equals_by_norm(&self, q: Quaternion, eps: f64) -> bool {
        (self.norm() - q.norm()).abs() < eps
    }
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.w, -self.i, -self.j, -self.k)
    }
}

impl Add for Quaternion {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Quaternion::add(&self, other)
    }
}

impl Sub for Quaternion {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Quaternion::sub(&self, other)
    }
}

impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        self.mul_by_grassmann(other)
    }
}

impl Mul<f64> for Quaternion {
    type Output = Self;

    fn mul(self, other: f64) -> Self::Output {
        self.mul_by_number(other)
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from(arr: [f64; 4]) -> Quaternion {
        bytemuck::cast(arr)
    }
}

impl From<Quaternion> for [f64; 4] {
    fn from(q: Quaternion) -> [f64; 4] {
        bytemuck::cast(q)
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        0.0
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.w.abs_diff_eq(&other.w, epsilon)
            && self.i.abs_diff_eq(&other.i, epsilon)
            && self.j.abs_diff_eq(&other.j, epsilon)
            && self.k.abs_diff_eq(&other.k, epsilon)
            && self.norm().abs_diff_eq(&other.norm(), epsilon)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})+({})i+({})j+({})k", self.w, self.i, self.j, self.k)
    }
}

#[test]
fn add_one_to_one() {
    let q = Quaternion::identity().add(Quaternion::identity());
    assert!(q.equals(Quaternion::new(2.0, 0.0, 0.0, 0.0), 1e-15));
}

#[test]
fn add_prepared_values() {
    let cases = [
        ([0.0, 0.0, 0.0, 0.0], [0.0, 0.0, 0.0, 0.0], [0.0, 0.0, 0.0, 0.0]),
        ([0.0, 0.0, 0.0, 0.0], [1.0, 0.0, 0.0, 0.0], [1.0, 0.0, 0.0, 0.0]),
        ([-1.0, 0.0, 0.0, 0.0], [1.0, 0.0, 0.0, 0.0], [0.0, 0.0, 0.0, 0.0]),
        ([-1.0, 0.0, 0.0, 0.0], [-1.0, 0.0, 0.0, 0.0], [-2.0, 0.0, 0.0, 0.0]),
        ([1.0, 2.0, 3.0, 4.0], [0.5, -2.0, 1.0, -8.0], [1.5, 0.0, 4.0, -4.0]),
    ];
    for (a, b, want) in cases {
        let got = Quaternion::from(a) + Quaternion::from(b);
        assert!(got.equals(want.into(), 1e-15), "{a:?} + {b:?} gave {got}");
    }
}

#[test]
fn grassmann_unit_products() {
    let i = Quaternion::pure(1.0, 0.0, 0.0);
    let j = Quaternion::pure(0.0, 1.0, 0.0);
    let k = Quaternion::pure(0.0, 0.0, 1.0);

    assert_eq!(i * j, k);
    assert_eq!(j * k, i);
    assert_eq!(k * i, j);
    assert_eq!(j * i, -k);
    assert_eq!(i * i, Quaternion::from_real(-1.0));
}

#[test]
fn grassmann_known_product() {
    let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let b = Quaternion::new(5.0, 6.0, 7.0, 8.0);
    assert_eq!(a.mul_by_grassmann(b), Quaternion::new(-60.0, 12.0, 30.0, 24.0));
}

#[test]
fn euclid_product_conjugates_left_operand() {
    let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let b = Quaternion::new(5.0, 6.0, 7.0, 8.0);
    assert_eq!(a.mul_by_euclid(b), a.conjugate() * b);
    assert_eq!(a.mul_by_euclid(b), Quaternion::new(70.0, 0.0, -16.0, -8.0));
}

#[test]
fn scalar_and_outer_products() {
    let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let b = Quaternion::new(5.0, 6.0, 7.0, 8.0);

    assert_eq!(a.mul_scalar(b), 70.0);
    assert_eq!(a.mul_scalar(Quaternion::pure(1.0, 0.0, 0.0)), a.i);
    assert_eq!(a.mul_outer(a), 0.0);
    assert_eq!(a.mul_outer(b), 0.0);
}

#[test]
fn vector_product_is_cross_product_of_imaginary_parts() {
    let a = Quaternion::new(7.0, 4.0, 3.0, 6.0);
    let b = Quaternion::new(-2.0, 2.0, 9.0, 3.0);
    assert_eq!(a.mul_vector(b), Quaternion::pure(-45.0, 0.0, 30.0));
}

#[test]
fn mul_by_number_scales_components() {
    let q = Quaternion::new(1.0, -2.0, 0.5, 4.0);
    assert_eq!(q.mul_by_number(2.0), Quaternion::new(2.0, -4.0, 1.0, 8.0));
    assert_eq!(q * -1.0, -q);
    assert_eq!(q.mul_by_number(3.0).norm(), q.norm() * 9.0);
}

#[test]
fn norm_is_squared() {
    assert_eq!(Quaternion::new(1.0, 2.0, 3.0, 4.0).norm(), 30.0);
}

#[test]
fn normalize_zero_fails() {
    assert_eq!(Quaternion::zero().normalize(), Err(QuaternionError::ZeroQuaternion));
}

#[test]
fn reverse_zero_fails() {
    assert_eq!(
        Quaternion::new(0.0, 0.0, 0.0, 0.0).reverse(),
        Err(QuaternionError::ZeroQuaternion)
    );
}

#[test]
fn reverse_is_inverse() {
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let r = q.reverse().unwrap();
    assert!((q * r).equals(Quaternion::identity(), 1e-12));
    assert!((r * q).equals(Quaternion::identity(), 1e-12));
}

#[test]
fn rotate_quaternion_from_axis() {
    let r = Quaternion::pure(0.0, 0.0, 2.0)
        .to_rotate_quaternion(std::f64::consts::FRAC_PI_2)
        .unwrap();
    let half = std::f64::consts::FRAC_1_SQRT_2;
    assert!(r.equals(Quaternion::new(half, 0.0, 0.0, half), 1e-12));
    assert!((r.norm() - 1.0).abs() < 1e-12);
}

#[test]
fn rotate_quaternion_zero_axis_fails() {
    assert_eq!(
        Quaternion::zero().to_rotate_quaternion(1.0),
        Err(QuaternionError::ZeroQuaternion)
    );
}

#[test]
fn equals_checks_norm_as_well_as_components() {
    let a = Quaternion::new(1.0, 1.0, 1.0, 1.0);
    let b = Quaternion::new(1.09, 1.09, 1.09, 1.09);
    // Each component is within 0.1, but the norms are 4.0 and ~4.75.
    assert!(!a.equals(b, 0.1));
    assert!(a.equals(b, 1.0));
}

#[test]
fn abs_diff_eq_is_reflexive_at_zero_epsilon() {
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    assert!(q.abs_diff_eq(&q, 0.0));
    approx::assert_abs_diff_eq!(q, q);
    assert!(!q.abs_diff_eq(&(q + Quaternion::from_real(1e-12)), Quaternion::default_epsilon()));
}

#[test]
fn abs_diff_eq_accepts_difference_equal_to_epsilon() {
    let a = Quaternion::from_real(0.5);
    let b = Quaternion::from_real(0.25);
    // Norms are 0.25 and 0.0625, so only the components sit on the boundary.
    assert!(a.abs_diff_eq(&b, 0.25));
    assert!(!a.equals(b, 0.25));
}

#[test]
fn array_conversions() {
    let q = Quaternion::from([1.0, 2.0, 3.0, 4.0]);
    assert_eq!(q, Quaternion::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(<[f64; 4]>::from(q), [1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn display() {
    let q = Quaternion::new(1.0, -2.5, 0.0, 4.0);
    assert_eq!(q.to_string(), "(1)+(-2.5)i+(0)j+(4)k");
}
