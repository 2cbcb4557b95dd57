//! Conversions to and from `cgmath` vectors and quaternions.

use crate::quaternion::Quaternion;
use crate::vector::Vec3;

impl From<cgmath::Quaternion<f64>> for Quaternion {
    fn from(quat: cgmath::Quaternion<f64>) -> Quaternion {
        Quaternion::new(quat.s, quat.v.x, quat.v.y, quat.v.z)
    }
}

impl From<Quaternion> for cgmath::Quaternion<f64> {
    fn from(quat: Quaternion) -> cgmath::Quaternion<f64> {
        cgmath::Quaternion::new(quat.w, quat.i, quat.j, quat.k)
    }
}

impl From<cgmath::Vector3<f64>> for Vec3 {
    fn from(vec: cgmath::Vector3<f64>) -> Vec3 {
        Vec3::new(vec.x, vec.y, vec.z)
    }
}

impl From<Vec3> for cgmath::Vector3<f64> {
    fn from(vec: Vec3) -> cgmath::Vector3<f64> {
        cgmath::Vector3::new(vec.x, vec.y, vec.z)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use cgmath::{InnerSpace, Rad, Rotation, Rotation3};

    #[test]
    fn quaternion_round_trips_through_cgmath() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let c: cgmath::Quaternion<f64> = q.into();

        assert_eq!(c.s, 1.0);
        assert_eq!(c.v, cgmath::Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(Quaternion::from(c), q);
    }

    #[test]
    fn grassmann_product_matches_cgmath() {
        let a = Quaternion::new(0.5, -1.0, 2.0, 0.25);
        let b = Quaternion::new(-3.0, 0.5, 1.5, -2.0);
        let c = cgmath::Quaternion::from(a) * cgmath::Quaternion::from(b);

        assert_abs_diff_eq!(a.mul_by_grassmann(b), Quaternion::from(c), epsilon = 1e-12);
    }

    #[test]
    fn rotate_quaternion_matches_cgmath_axis_angle() {
        let axis = Vec3::new(1.0, -2.0, 0.5);
        let angle = 1.1;
        let c = cgmath::Quaternion::from_axis_angle(cgmath::Vector3::from(axis).normalize(), Rad(angle));

        let r = axis.to_pure_quaternion().to_rotate_quaternion(angle).unwrap();
        assert_abs_diff_eq!(r, Quaternion::from(c), epsilon = 1e-12);
    }

    #[test]
    fn rotate_matches_cgmath_rotate_vector() {
        let axis = Vec3::new(0.3, 0.4, -1.2);
        let angle = -2.4;
        let v = Vec3::new(1.5, -0.5, 2.0);
        let c = cgmath::Quaternion::from_axis_angle(cgmath::Vector3::from(axis).normalize(), Rad(angle));

        let expected = Vec3::from(c.rotate_vector(v.into()));
        assert_abs_diff_eq!(v.rotate(axis, angle).unwrap(), expected, epsilon = 1e-9);
    }
}
