use thiserror::Error;

/// Errors raised while opening or running the native indicator window.
#[derive(Error, Debug)]
pub enum IndicatorError {
    /// Event loop could not be created or exited abnormally
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// Window creation failed
    #[error("window error: {0}")]
    Window(#[from] winit::error::OsError),

    /// Pixel buffer or GPU surface setup failed
    #[error("pixel buffer error: {0}")]
    Pixels(#[from] pixels::Error),
}
