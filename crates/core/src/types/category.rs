//! Product category choice for the header search bar.

use core::fmt;

/// The reserved category value that means "near me" rather than a product
/// category. It travels on a separate query-string axis (`local=true`)
/// instead of `category=...`.
pub const LOCAL_CATEGORY_VALUE: &str = "local";

/// A category choice made in the header search bar.
///
/// The storefront exposes one pseudo-category, `local`, alongside the real
/// category names enumerated by the server. The two are different axes of
/// the products listing: `local` filters by merchant proximity, a named
/// category filters by product taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategoryChoice {
    /// The "local" pseudo-category.
    Local,
    /// A server-enumerated category name.
    Named(String),
}

impl CategoryChoice {
    /// Parse a raw category value from a form field.
    ///
    /// Returns `None` for an empty value (no category chosen).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            None
        } else if raw == LOCAL_CATEGORY_VALUE {
            Some(Self::Local)
        } else {
            Some(Self::Named(raw.to_owned()))
        }
    }

    /// The raw value stored in the scope's hidden category field.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Local => LOCAL_CATEGORY_VALUE,
            Self::Named(name) => name,
        }
    }

    /// Whether this is the `local` pseudo-category.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::Local)
    }
}

impl fmt::Display for CategoryChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}
