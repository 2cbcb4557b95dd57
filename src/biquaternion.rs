use std::ops::{Add, Sub, Mul};
use std::fmt;

use approx::AbsDiffEq;

use crate::quaternion::Quaternion;
use crate::vector::Vec3;

/// A pair of quaternions `(p, q)` multiplied with the dual-number rule.
///
/// `p` is the primary (real) part and `q` the secondary (dual) part. As a
/// rigid-motion operator `p` is a unit rotation quaternion and `q` encodes
/// the translation, but none of the algebra below checks that.
#[repr(C)]
#[derive(PartialEq, Clone, Copy, Default, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Biquaternion {
    pub p: Quaternion,
    pub q: Quaternion,
}
impl Biquaternion {
    pub fn new(p: Quaternion, q: Quaternion) -> Self {
        Self { p, q }
    }

    /// `(1, 0)`
    pub fn identity() -> Self {
        Self::new(Quaternion::identity(), Quaternion::zero())
    }

    /// `(rotation, 0)`
    pub fn from_rotation(rotation: Quaternion) -> Self {
        Self::new(rotation, Quaternion::zero())
    }

    /// `(1, (0, v / 2))`
    pub fn from_half_translation(v: Vec3) -> Self {
        Self::new(Quaternion::identity(), (v / 2.0).to_pure_quaternion())
    }

    /// Embeds a point as `(1, (0, x, y, z))`.
    pub fn from_point(v: Vec3) -> Self {
        Self::new(Quaternion::identity(), v.to_pure_quaternion())
    }

    pub fn add(&self, bq: Biquaternion) -> Self {
        Self::new(self.p.add(bq.p), self.q.add(bq.q))
    }

    pub fn sub(&self, bq: Biquaternion) -> Self {
        Self::new(self.p.sub(bq.p), self.q.sub(bq.q))
    }

    /// `(a.p * b.p, a.p * b.q + a.q * b.p)`
    pub fn mul(&self, bq: Biquaternion) -> Self {
        Self::new(
            self.p.mul_by_grassmann(bq.p),
            self.p.mul_by_grassmann(bq.q).add(self.q.mul_by_grassmann(bq.p)),
        )
    }

    /// Dual-number conjugate: flips the sign of `q`, leaves `p` alone.
    pub fn conjugate(&self) -> Self {
        Self::new(self.p, self.q.mul_by_number(-1.0))
    }

    /// Quaternion conjugate of both parts.
    pub fn complex_conjugate(&self) -> Self {
        Self::new(self.p.conjugate(), self.q.conjugate())
    }

    pub fn equals(&self, bq: Biquaternion, eps: f64) -> bool {
        self.p.equals(bq.p, eps) && self.q.equals(bq.q, eps)
    }
}

impl Add for Biquaternion {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Biquaternion::add(&self, other)
    }
}

impl Sub for Biquaternion {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Biquaternion::sub(&self, other)
    }
}

impl Mul for Biquaternion {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        Biquaternion::mul(&self, other)
    }
}

impl AbsDiffEq for Biquaternion {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        0.0
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.p.abs_diff_eq(&other.p, epsilon) && self.q.abs_diff_eq(&other.q, epsilon)
    }
}

impl fmt::Display for Biquaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{\n{},\n{}\n}}", self.p, self.q)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample_a() -> Biquaternion {
        Biquaternion::new(
            Quaternion::new(1.0, 2.0, 3.0, 4.0),
            Quaternion::new(-1.0, 0.5, 0.0, 2.0),
        )
    }

    fn sample_b() -> Biquaternion {
        Biquaternion::new(
            Quaternion::new(5.0, 6.0, 7.0, 8.0),
            Quaternion::new(0.0, 1.0, -1.0, 3.0),
        )
    }

    #[test]
    fn add_and_sub_are_component_wise() {
        let (a, b) = (sample_a(), sample_b());

        assert_eq!(a + b, Biquaternion::new(a.p + b.p, a.q + b.q));
        assert_eq!(a - b, Biquaternion::new(a.p - b.p, a.q - b.q));
        assert!((a + b - b).equals(a, 1e-15));
    }

    #[test]
    fn mul_uses_dual_number_rule() {
        let (a, b) = (sample_a(), sample_b());
        let r = a * b;

        assert_eq!(r.p, a.p * b.p);
        assert_eq!(r.q, a.p * b.q + a.q * b.p);
        assert_ne!(r, b * a);
    }

    #[test]
    fn identity_is_neutral() {
        let a = sample_a();
        assert_eq!(Biquaternion::identity() * a, a);
        assert_eq!(a * Biquaternion::identity(), a);
    }

    #[test]
    fn conjugate_flips_only_dual_part() {
        let a = sample_a();
        let c = a.conjugate();

        assert_eq!(c.p, a.p);
        assert_eq!(c.q, -a.q);
    }

    #[test]
    fn complex_conjugate_conjugates_both_parts() {
        let a = sample_a();
        let c = a.complex_conjugate();

        assert_eq!(c.p, a.p.conjugate());
        assert_eq!(c.q, a.q.conjugate());
    }

    #[test]
    fn conjugates_are_distinct_involutions_that_commute() {
        let a = sample_a();

        assert_eq!(a.conjugate().conjugate(), a);
        assert_eq!(a.complex_conjugate().complex_conjugate(), a);
        assert_ne!(a.conjugate(), a.complex_conjugate());
        assert_eq!(
            a.conjugate().complex_conjugate(),
            a.complex_conjugate().conjugate()
        );
    }

    #[test]
    fn half_translation_and_point_embeddings() {
        let v = Vec3::new(2.0, -4.0, 6.0);

        assert_eq!(
            Biquaternion::from_half_translation(v),
            Biquaternion::new(Quaternion::identity(), Quaternion::pure(1.0, -2.0, 3.0))
        );
        assert_eq!(
            Biquaternion::from_point(v),
            Biquaternion::new(Quaternion::identity(), Quaternion::pure(2.0, -4.0, 6.0))
        );
    }

    #[test]
    fn equals_needs_both_parts() {
        let a = sample_a();
        let shifted_q = Biquaternion::new(a.p, a.q + Quaternion::from_real(0.5));
        let shifted_p = Biquaternion::new(a.p + Quaternion::from_real(0.5), a.q);

        assert!(a.equals(a, 1e-15));
        assert!(!a.equals(shifted_q, 0.1));
        assert!(!a.equals(shifted_p, 0.1));
    }

    #[test]
    fn abs_diff_eq_is_reflexive_at_zero_epsilon() {
        let a = sample_a();
        assert!(a.abs_diff_eq(&a, 0.0));
        assert!(!a.abs_diff_eq(&sample_b(), Biquaternion::default_epsilon()));
    }

    #[test]
    fn abs_diff_eq_needs_both_parts() {
        let a = sample_a();
        let shifted_q = Biquaternion::new(a.p, a.q + Quaternion::from_real(0.5));

        assert!(!a.abs_diff_eq(&shifted_q, 0.1));
        assert!(a.abs_diff_eq(&shifted_q, 2.0));
    }

    #[test]
    fn display() {
        let a = Biquaternion::new(Quaternion::identity(), Quaternion::pure(1.0, 2.0, 3.0));
        assert_eq!(a.to_string(), "{\n(1)+(0)i+(0)j+(0)k,\n(0)+(1)i+(2)j+(3)k\n}");
    }
}
