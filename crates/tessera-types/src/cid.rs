use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Byte length of a base58 CIDv0 string ("Qm..."), the default scheme.
pub const CID_V0_LEN: usize = 46;

/// Content identifier referencing an attribute's asset bundle.
///
/// A `Cid` is validated to an exact byte length at parse time and is
/// otherwise opaque. The registry never verifies that the referenced
/// content actually exists; pinning and retrieval are external concerns.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cid(String);

impl Cid {
    /// Parse a raw string, requiring exactly `expected_len` bytes.
    pub fn parse(raw: impl Into<String>, expected_len: usize) -> Result<Self, TypeError> {
        let raw = raw.into();
        if raw.len() != expected_len {
            return Err(TypeError::InvalidLength {
                expected: expected_len,
                actual: raw.len(),
            });
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn sample(fill: char) -> String {
        std::iter::repeat(fill).take(CID_V0_LEN).collect()
    }

    #[test]
    fn parse_accepts_exact_length() {
        let cid = Cid::parse(sample('Q'), CID_V0_LEN).unwrap();
        assert_eq!(cid.as_str().len(), CID_V0_LEN);
    }

    #[test]
    fn parse_rejects_short_input() {
        let err = Cid::parse("Qmshort", CID_V0_LEN).unwrap_err();
        assert_eq!(
            err,
            TypeError::InvalidLength {
                expected: CID_V0_LEN,
                actual: 7
            }
        );
    }

    #[test]
    fn parse_rejects_empty_input() {
        let err = Cid::parse("", CID_V0_LEN).unwrap_err();
        assert_eq!(
            err,
            TypeError::InvalidLength {
                expected: CID_V0_LEN,
                actual: 0
            }
        );
    }

    #[test]
    fn expected_length_is_configurable() {
        assert!(Cid::parse("abcd", 4).is_ok());
        assert!(Cid::parse("abcd", 5).is_err());
    }

    #[test]
    fn serde_is_transparent() {
        let cid = Cid::parse(sample('Q'), CID_V0_LEN).unwrap();
        let json = serde_json::to_string(&cid).unwrap();
        assert_eq!(json, format!("\"{}\"", cid.as_str()));
    }

    proptest! {
        #[test]
        fn only_exact_length_strings_parse(s in "[a-zA-Z0-9]{0,64}") {
            let outcome = Cid::parse(s.clone(), CID_V0_LEN);
            prop_assert_eq!(outcome.is_ok(), s.len() == CID_V0_LEN);
        }
    }
}
