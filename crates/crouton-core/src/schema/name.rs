use std::fmt;

/// Name of a model, kept verbatim as declared by the application.
///
/// Table naming preserves the declared casing (`User` lowers to `Users`),
/// so no case conversion happens here.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(src: &str) -> Self {
        Self(src.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The pluralized form of the name.
    pub fn pluralized(&self) -> String {
        pluralizer::pluralize(&self.0, 2, false)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
