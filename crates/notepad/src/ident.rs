//! Note identifiers: validation and random generation.
//!
//! An identifier doubles as the URL path segment and the file name inside
//! the save directory, so only a conservative character set is accepted.

use std::fmt;
use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;

/// Maximum length of a note identifier, in characters.
pub const MAX_ID_LEN: usize = 64;

/// Length of a freshly generated identifier.
pub const GENERATED_ID_LEN: usize = 5;

/// Symbols used for generated identifiers.
///
/// Digits and letters that are easy to confuse when read aloud or in some
/// fonts (`0`/`o`, `1`/`l`/`i`, `6`/`b`, `8`, `u`/`v`) are left out.
pub const ID_ALPHABET: &[u8] = b"234579abcdefghjkmnpqrstwxyz";

/// Pattern every accepted identifier must match.
pub const ID_PATTERN: &str = r"^[A-Za-z0-9_-]+$";

static ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ID_PATTERN).expect("identifier pattern is valid"));

/// Returns `true` if `candidate` is an acceptable note identifier.
pub fn is_valid(candidate: &str) -> bool {
    !candidate.is_empty() && candidate.len() <= MAX_ID_LEN && ID_RE.is_match(candidate)
}

/// A validated note identifier.
///
/// The only ways to obtain one are [`NoteId::parse`] and
/// [`NoteId::generate`], so anything holding a `NoteId` is safe to join onto
/// the save directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoteId(String);

impl NoteId {
    /// Validate `candidate`, returning `None` if it is not an acceptable identifier.
    pub fn parse(candidate: &str) -> Option<Self> {
        is_valid(candidate).then(|| Self(candidate.to_string()))
    }

    /// Generate a fresh random identifier.
    ///
    /// Draws come from the thread-local generator, which is a CSPRNG seeded
    /// from the operating system. No check is made against existing notes.
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let id = (0..GENERATED_ID_LEN)
            .map(|_| char::from(ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())]))
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NoteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
