//! A set of utilities for generating random data from the cryptographically
//! secure source provided by the platform. Secure bytes may be drawn
//! directly, or turned into fixed-width integers, Base64 encoded strings and
//! a seeded non-cryptographic pseudorandom generator.
//!
//! Every call draws fresh bytes from the secure source. Nothing is buffered,
//! cached or shared between calls, so all operations are safe to invoke from
//! concurrent threads.
//!
//! ```
//! use rand::Rng;
//!
//! // A random identifier, at most 16 characters when encoded
//! let id = secure_random::url_base64(16)?;
//!
//! // A fast generator seeded from the secure source
//! let mut rng = secure_random::rand_source()?;
//! let roll: u8 = rng.gen_range(1..=6);
//! # let _ = (id, roll);
//! # Ok::<(), secure_random::SourceError>(())
//! ```

pub mod b64;
pub mod int;
pub mod seed;
pub mod source;

pub use self::b64::{base64, url_base64};
pub use self::int::{int16, int32, int64, uint16, uint32, uint64};
pub use self::seed::rand_source;
pub use self::source::{bytes, SourceError};
