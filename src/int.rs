//! Fixed-width random integers, packed big-endian from secure bytes.

use crate::source::{ByteSource, SourceError, SystemSource};

/// Generate a random `u16` from two secure random bytes.
///
/// The bytes are packed big-endian, which keeps the result uniformly
/// distributed over the whole range of the type.
pub fn uint16() -> Result<u16, SourceError> {
    uint16_from(&SystemSource)
}

/// Generate a random `u32` from four secure random bytes.
pub fn uint32() -> Result<u32, SourceError> {
    uint32_from(&SystemSource)
}

/// Generate a random `u64` from eight secure random bytes.
pub fn uint64() -> Result<u64, SourceError> {
    uint64_from(&SystemSource)
}

/// Generate a random `i16` from two secure random bytes.
///
/// The bit pattern is identical to the unsigned variant, reinterpreted as
/// two's-complement. The sign bit is simply the top bit of the first byte.
pub fn int16() -> Result<i16, SourceError> {
    int16_from(&SystemSource)
}

/// Generate a random `i32` from four secure random bytes.
pub fn int32() -> Result<i32, SourceError> {
    int32_from(&SystemSource)
}

/// Generate a random `i64` from eight secure random bytes.
pub fn int64() -> Result<i64, SourceError> {
    int64_from(&SystemSource)
}

pub(crate) fn uint16_from<S: ByteSource>(source: &S) -> Result<u16, SourceError> {
    Ok(u16::from_be_bytes(draw(source)?))
}

pub(crate) fn uint32_from<S: ByteSource>(source: &S) -> Result<u32, SourceError> {
    Ok(u32::from_be_bytes(draw(source)?))
}

pub(crate) fn uint64_from<S: ByteSource>(source: &S) -> Result<u64, SourceError> {
    Ok(u64::from_be_bytes(draw(source)?))
}

pub(crate) fn int16_from<S: ByteSource>(source: &S) -> Result<i16, SourceError> {
    Ok(i16::from_be_bytes(draw(source)?))
}

pub(crate) fn int32_from<S: ByteSource>(source: &S) -> Result<i32, SourceError> {
    Ok(i32::from_be_bytes(draw(source)?))
}

pub(crate) fn int64_from<S: ByteSource>(source: &S) -> Result<i64, SourceError> {
    Ok(i64::from_be_bytes(draw(source)?))
}

/// Draw exactly `N` fresh bytes from the given source.
///
/// Each width above packs the drawn array with `from_be_bytes`, placing the
/// first drawn byte in the most significant position.
fn draw<S: ByteSource, const N: usize>(source: &S) -> Result<[u8; N], SourceError> {
    let mut buf = [0u8; N];
    source.fill(&mut buf)?;
    Ok(buf)
}
