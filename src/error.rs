use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("degenerate layout: plot area is {width}x{height}")]
    Geometry { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Error raised by a drawing backend, passed through untouched.
    #[error(transparent)]
    Surface(Box<dyn std::error::Error + Send + Sync>),
}

impl ChartError {
    /// Wraps a backend error so it can travel through `ChartResult`.
    pub fn surface<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Surface(Box::new(err))
    }
}
