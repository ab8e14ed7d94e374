use raycam_kernel::KernelError;

/// Errors from camera setup and ray generation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CameraError {
    #[error("invalid camera configuration: {0}")]
    InvalidConfiguration(String),
    #[error(transparent)]
    Kernel(#[from] KernelError),
}
