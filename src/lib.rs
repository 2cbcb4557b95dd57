//! Quaternion and biquaternion algebra, and rigid motions of 3D points built
//! on top of it.
//!
//! ```
//! use biquat::{Quaternion, Vec3};
//!
//! let r = Vec3::new(1.0, 0.0, 0.0)
//!     .rotate(Vec3::new(0.0, 0.0, 1.0), std::f64::consts::PI)
//!     .unwrap();
//! assert!(r.equals(Vec3::new(-1.0, 0.0, 0.0), 1e-9));
//!
//! assert!(Quaternion::zero().reverse().is_err());
//! ```
//!
//! Every type is a `Copy` value; no operation mutates its inputs. Operations
//! that divide by a norm return [`QuaternionResult`] and fail with
//! [`QuaternionError::ZeroQuaternion`] on an all-zero operand.

pub mod error;
pub mod quaternion;
pub mod biquaternion;
pub mod vector;
pub mod motion;
mod interop;

pub use crate::error::{QuaternionError, QuaternionResult};
pub use crate::quaternion::Quaternion;
pub use crate::biquaternion::Biquaternion;
pub use crate::vector::Vec3;
pub use crate::motion::Motion;
