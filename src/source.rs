use openssl::error::ErrorStack;
use openssl::rand::rand_bytes;
use thiserror::Error;

/// Generate the given number of cryptographically secure random bytes.
///
/// The bytes are requested from the platform secure source in a single draw,
/// without internal retries. Requesting zero bytes is valid and yields an
/// empty vector.
pub fn bytes(n: usize) -> Result<Vec<u8>, SourceError> {
    bytes_from(&SystemSource, n)
}

/// Generate `n` secure random bytes from the given source.
pub(crate) fn bytes_from<S: ByteSource>(source: &S, n: usize) -> Result<Vec<u8>, SourceError> {
    let mut buf = vec![0u8; n];
    source.fill(&mut buf)?;
    Ok(buf)
}

/// A source of cryptographically secure random bytes.
///
/// [`SystemSource`] is the only implementation outside of tests. The seam
/// exists so the conversions on top can be exercised against fixed or
/// failing sources.
pub(crate) trait ByteSource {
    /// Fill the whole buffer with secure random bytes.
    ///
    /// On failure the buffer contents are unspecified and must not be used.
    fn fill(&self, buf: &mut [u8]) -> Result<(), SourceError>;
}

/// The platform secure random source.
pub(crate) struct SystemSource;

impl ByteSource for SystemSource {
    fn fill(&self, buf: &mut [u8]) -> Result<(), SourceError> {
        Ok(rand_bytes(buf)?)
    }
}

/// An error that may occur while drawing secure random bytes.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The platform secure source could not fill the requested buffer.
    /// No partial result is available, the whole draw failed.
    #[error("secure random source unavailable")]
    Unavailable(#[from] ErrorStack),
}


#[cfg(test)]
mod tests {
    use super::test_source::FailingSource;
    use super::*;

    #[test]
    fn bytes_has_requested_length() {
        for n in [0, 1, 2, 3, 8, 75, 1024] {
            assert_eq!(bytes(n).unwrap().len(), n);
        }
    }

    #[test]
    fn zero_length_request_is_valid() {
        assert!(bytes(0).unwrap().is_empty());
    }

    #[test]
    fn failing_source_yields_no_bytes() {
        assert!(matches!(
            bytes_from(&FailingSource, 8),
            Err(SourceError::Unavailable(_)),
        ));
    }
}
