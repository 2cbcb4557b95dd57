//! Rigid motions of 3D points expressed as biquaternion sandwich products.
//!
//! A point `v` is embedded as `(1, (0, v))` and transformed as
//! `M * (1, (0, v)) * M'`, where `M'` is the adjoint of the operator `M`.
//! The transformed point is read back from the imaginary part of the dual
//! component of the product.

use log::trace;

use crate::biquaternion::Biquaternion;
use crate::error::QuaternionResult;
use crate::quaternion::Quaternion;
use crate::vector::Vec3;

/// How the right-hand factor of the sandwich product is formed from the
/// operator.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Adjoint {
    /// `complex_conjugate(M)`
    Complex,
    /// `complex_conjugate(conjugate(M))`
    Full,
}

/// A constructed rigid-motion operator.
///
/// Building a motion is the only step that can fail; once built it can be
/// applied to any number of points.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Motion {
    operator: Biquaternion,
    adjoint: Adjoint,
}
impl Motion {
    /// Rotation by `angle` radians around `axis`: `(R, 0)`.
    pub fn rotation(axis: Vec3, angle: f64) -> QuaternionResult<Self> {
        let rotation = rotate_quaternion(axis, angle)?;
        let operator = Biquaternion::from_rotation(rotation);
        trace!("rotation motion around {axis} by {angle}: {operator:?}");

        Ok(Self { operator, adjoint: Adjoint::Complex })
    }

    /// Translation by `step`: `(1, step / 2)`.
    pub fn translation(step: Vec3) -> Self {
        let operator = Biquaternion::from_half_translation(step);
        trace!("translation motion by {step}: {operator:?}");

        Self { operator, adjoint: Adjoint::Full }
    }

    /// `(R, (step / 2) * R)`: the point is rotated, then moved by `step`.
    pub fn rotation_then_step(step: Vec3, rotate_axis: Vec3, angle: f64) -> QuaternionResult<Self> {
        let rotation = rotate_quaternion(rotate_axis, angle)?;
        let half_step = (step / 2.0).to_pure_quaternion();
        let operator = Biquaternion::new(rotation, half_step.mul_by_grassmann(rotation));
        trace!("rotate-and-step motion, step {step}, axis {rotate_axis}, angle {angle}: {operator:?}");

        Ok(Self { operator, adjoint: Adjoint::Full })
    }

    /// `(R, R * (step / 2))`: the point is moved by `step`, then rotated.
    pub fn step_then_rotation(step: Vec3, rotate_axis: Vec3, angle: f64) -> QuaternionResult<Self> {
        let rotation = rotate_quaternion(rotate_axis, angle)?;
        let half_step = (step / 2.0).to_pure_quaternion();
        let operator = Biquaternion::new(rotation, rotation.mul_by_grassmann(half_step));
        trace!("step-and-rotate motion, step {step}, axis {rotate_axis}, angle {angle}: {operator:?}");

        Ok(Self { operator, adjoint: Adjoint::Full })
    }

    /// Rotation around `pivot` instead of the origin:
    /// `(1, pivot / 2) * (R, 0) * (1, conj(pivot / 2))`.
    pub fn rotation_around_point(pivot: Vec3, rotate_axis: Vec3, angle: f64) -> QuaternionResult<Self> {
        let rotation = rotate_quaternion(rotate_axis, angle)?;
        let to_pivot = Biquaternion::from_half_translation(pivot);
        let from_pivot = Biquaternion::new(to_pivot.p, to_pivot.q.conjugate());
        let operator = to_pivot
            .mul(Biquaternion::from_rotation(rotation))
            .mul(from_pivot);
        trace!("pivot rotation around {pivot}, axis {rotate_axis}, angle {angle}: {operator:?}");

        Ok(Self { operator, adjoint: Adjoint::Full })
    }

    /// The biquaternion `M` of the sandwich product.
    pub fn operator(&self) -> Biquaternion {
        self.operator
    }

    /// The right-hand factor `M'` of the sandwich product.
    pub fn adjoint(&self) -> Biquaternion {
        match self.adjoint {
            Adjoint::Complex => self.operator.complex_conjugate(),
            Adjoint::Full => self.operator.conjugate().complex_conjugate(),
        }
    }

    pub fn apply(&self, v: Vec3) -> Vec3 {
        let res = self
            .operator
            .mul(Biquaternion::from_point(v))
            .mul(self.adjoint());

        Vec3::new(res.q.i, res.q.j, res.q.k)
    }
}

fn rotate_quaternion(axis: Vec3, angle: f64) -> QuaternionResult<Quaternion> {
    axis.to_pure_quaternion().to_rotate_quaternion(angle)
}

impl Vec3 {
    /// Rotates the point by `angle` radians around `axis` through the origin.
    ///
    /// Fails with [`QuaternionError::ZeroQuaternion`](crate::error::QuaternionError)
    /// when `axis` is the zero vector.
    pub fn rotate(&self, axis: Vec3, angle: f64) -> QuaternionResult<Vec3> {
        Ok(Motion::rotation(axis, angle)?.apply(*self))
    }

    /// Moves the point by `step`.
    pub fn step_to(&self, step: Vec3) -> Vec3 {
        Motion::translation(step).apply(*self)
    }

    pub fn rotate_and_step_to(&self, step: Vec3, rotate_axis: Vec3, angle: f64) -> QuaternionResult<Vec3> {
        Ok(Motion::rotation_then_step(step, rotate_axis, angle)?.apply(*self))
    }

    pub fn step_and_rotate_to(&self, step: Vec3, rotate_axis: Vec3, angle: f64) -> QuaternionResult<Vec3> {
        Ok(Motion::step_then_rotation(step, rotate_axis, angle)?.apply(*self))
    }

    /// Rotates the point by `angle` radians around the line through `pivot`
    /// with direction `rotate_axis`.
    pub fn rotate_around_point(&self, pivot: Vec3, rotate_axis: Vec3, angle: f64) -> QuaternionResult<Vec3> {
        Ok(Motion::rotation_around_point(pivot, rotate_axis, angle)?.apply(*self))
    }
}
