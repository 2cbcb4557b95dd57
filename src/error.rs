use std::error::Error;
use std::fmt;

pub type QuaternionResult<T> = Result<T, QuaternionError>;

/// Failure of an operation that has to divide by a quaternion norm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuaternionError {
    /// All four components of the operand are exactly zero.
    ZeroQuaternion,
}
impl fmt::Display for QuaternionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuaternionError::ZeroQuaternion => {
                write!(f, "All components equals to zero")
            }
        }
    }
}
impl Error for QuaternionError {}

#[test]
fn zero_quaternion_message() {
    assert_eq!(
        QuaternionError::ZeroQuaternion.to_string(),
        "All components equals to zero"
    );
}

#[test]
fn zero_quaternion_boxes_as_error() {
    let err: Box<dyn Error> = Box::new(QuaternionError::ZeroQuaternion);
    assert!(err.downcast_ref::<QuaternionError>().is_some());
}
