use thiserror::Error;

/// An error from the ray tracer.
///
/// Most misuse (normalizing a zero vector, inverting a singular transform through
/// [`Matrix4::inverse`](crate::math::Matrix4::inverse)) is treated as a programming error
/// and panics instead. These variants cover the fallible entry points.
#[derive(Debug, Error)]
pub enum Error {
    #[error("matrix is singular and cannot be inverted")]
    SingularMatrix,

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}
