use thiserror::Error;

pub type Result<T> = std::result::Result<T, PadError>;

/// Failures while acquiring graphics resources at startup.
#[derive(Debug, Error)]
pub enum PadError {
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("failed to find an appropriate adapter")]
    NoAdapter,

    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface supports no texture format")]
    NoSurfaceFormat,
}
