use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures are configuration and input validation concerns, checked once
/// before the first tick.
#[derive(Debug, Error)]
pub enum Error {
    /// Non-positive radius or mass, or a non-finite position/velocity.
    #[error("invalid particle: {0}")]
    InvalidParticle(String),

    /// Field dimensions that cannot hold the configured particles.
    #[error("invalid field: {0}")]
    InvalidField(String),

    /// Initial position outside of the field.
    #[error("out of bounds: {0}")]
    OutOfBounds(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_informative() {
        let e = Error::InvalidParticle("radius must be finite and > 0".to_string());
        let msg = e.to_string();
        assert!(msg.contains("invalid particle"));
        assert!(msg.contains("radius"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
        let e: Error = io.into();
        assert!(matches!(e, Error::Io(_)));
        assert!(e.to_string().contains("stdout closed"));
    }
}
