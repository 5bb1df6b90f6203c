//! Strongly-typed identifiers used across the catalog.

use core::str::FromStr;
use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Identifier of a product: a stable URL slug such as `ld-films-pro`.
///
/// Catalog entries are compiled into the binary, so ids built with
/// [`ProductId::from_static`] borrow their text; ids parsed from user input own
/// theirs. Equality and hashing only look at the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Cow<'static, str>);

impl ProductId {
    /// Wrap a compile-time slug without validating it.
    ///
    /// Static catalog ids are checked once by catalog validation at startup.
    pub const fn from_static(slug: &'static str) -> Self {
        Self(Cow::Borrowed(slug))
    }

    /// Parse and validate a slug.
    pub fn parse(s: &str) -> Result<Self, CatalogError> {
        if is_valid_slug(s) {
            Ok(Self(Cow::Owned(s.to_string())))
        } else {
            Err(CatalogError::invalid_id(format!("ProductId: {s:?} is not a slug")))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this id satisfies the slug rules.
    pub fn is_valid(&self) -> bool {
        is_valid_slug(&self.0)
    }
}

/// Slug rules: non-empty, lowercase ASCII letters/digits separated by single
/// hyphens, no leading or trailing hyphen.
pub fn is_valid_slug(s: &str) -> bool {
    !s.is_empty()
        && s.split('-').all(|part| {
            !part.is_empty()
                && part
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        })
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ProductId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ProductId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl FromStr for ProductId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_catalog_style_slugs() {
        for slug in ["ld-films-pro", "hdpe-bags-v3", "pet-resin-food", "a1"] {
            assert!(is_valid_slug(slug), "{slug} should be valid");
            assert_eq!(ProductId::parse(slug).unwrap().as_str(), slug);
        }
    }

    #[test]
    fn rejects_malformed_slugs() {
        for slug in ["", "-lead", "trail-", "double--hyphen", "Upper", "with space", "ümlaut"] {
            assert!(!is_valid_slug(slug), "{slug:?} should be rejected");
            assert!(matches!(ProductId::parse(slug), Err(CatalogError::InvalidId(_))));
        }
    }

    #[test]
    fn static_and_parsed_ids_compare_equal() {
        let a = ProductId::from_static("ld-films-pro");
        let b: ProductId = "ld-films-pro".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a, "ld-films-pro");
        assert_eq!(a.to_string(), "ld-films-pro");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = ProductId::from_static("fibc-bulk-bags");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"fibc-bulk-bags\"");
        let back: ProductId = serde_json::from_str("\"fibc-bulk-bags\"").unwrap();
        assert_eq!(back, id);
    }

    proptest! {
        /// Property: any hyphen-joined list of lowercase words parses and displays unchanged.
        #[test]
        fn generated_slugs_parse(parts in prop::collection::vec("[a-z0-9]{1,8}", 1..5)) {
            let slug = parts.join("-");
            let id = ProductId::parse(&slug).unwrap();
            prop_assert_eq!(id.as_str(), slug.as_str());
        }

        /// Property: uppercase input never parses (lookups stay case-sensitive).
        #[test]
        fn uppercase_never_parses(s in "[a-z]{0,5}[A-Z][a-zA-Z]{0,5}") {
            prop_assert!(ProductId::parse(&s).is_err());
        }
    }
}
