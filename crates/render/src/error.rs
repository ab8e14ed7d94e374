use raycam_camera::CameraError;
use raycam_kernel::KernelError;

/// Errors from a render call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    #[error("invalid render configuration: {0}")]
    InvalidConfiguration(String),
    #[error(transparent)]
    Camera(#[from] CameraError),
    #[error(transparent)]
    Kernel(#[from] KernelError),
}
