//! Seeding a non-cryptographic generator from the secure source.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::int;
use crate::source::{ByteSource, SourceError, SystemSource};

/// Construct a new pseudorandom generator seeded from the secure source.
///
/// Only the seed is drawn from the secure source, the generator itself is not
/// cryptographically secure. On failure no generator is returned, callers
/// must not fall back to an unseeded one.
pub fn rand_source() -> Result<SmallRng, SourceError> {
    rand_source_from(&SystemSource)
}

pub(crate) fn rand_source_from<S: ByteSource>(source: &S) -> Result<SmallRng, SourceError> {
    let seed = int::int64_from(source)?;
    Ok(SmallRng::seed_from_u64(seed as u64))
}

#[cfg(test)]
mod tests {
    use rand::RngCore;

    use super::*;
    use crate::source::test_source::FailingSource;

    #[test]
    fn generator_is_usable() {
        let mut rng = rand_source().unwrap();
        assert_ne!(rng.next_u64(), rng.next_u64());
    }

    #[test]
    fn generators_are_seeded_independently() {
        let mut a = rand_source().unwrap();
        let mut b = rand_source().unwrap();
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn no_generator_on_source_failure() {
        assert!(rand_source_from(&FailingSource).is_err());
    }
}
