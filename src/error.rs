use thiserror::Error;

/// Errors raised by vector construction and interpolation.
///
/// All errors are raised synchronously at the violated contract; nothing is
/// retried or recovered internally. Arithmetic between vectors of different
/// arities is rejected at compile time and never reaches this enum.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum VectorError {
    /// A slice constructor received the wrong number of components.
    #[error("dimension mismatch: expected {expected} components, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// The vector type declares zero components. Unreachable through the
    /// shipped `Vec2`/`Vec3` aliases; guards new arities.
    #[error("vector type declares no components")]
    EmptyDimensions,

    /// An interpolation fraction was outside `[0, 1]`.
    #[error("interpolation fraction {amount} is outside [0, 1]")]
    OutOfRange { amount: f64 },

    /// A zero-length vector cannot be scaled to unit length.
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,

    /// The operation is declared but intentionally unimplemented.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}
