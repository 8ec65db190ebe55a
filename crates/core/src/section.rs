//! Recognized docstring sections and their header aliases.

use std::fmt;

/// A recognized structured section inside a docstring body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Function or method arguments (`Args:`, `Params:`, ...).
    Arguments,
    /// Class or module attributes (`Attributes:`, `Members:`).
    Attributes,
    /// Exceptions raised (`Raises:`).
    Raises,
    /// Return value description (`Return:`, `Returns:`).
    Returns,
    /// Yielded value description (`Yields:`).
    Yields,
}

impl SectionKind {
    /// Looks up a header word in the alias table.
    ///
    /// The word is trimmed and lowercased before the lookup, so `Args`,
    /// `ARGS` and ` args ` all resolve to [`SectionKind::Arguments`].
    pub fn from_header(word: &str) -> Option<Self> {
        match word.trim().to_lowercase().as_str() {
            "args" | "arguments" | "parameters" | "params" => Some(Self::Arguments),
            "attributes" | "members" => Some(Self::Attributes),
            "raises" => Some(Self::Raises),
            "return" | "returns" => Some(Self::Returns),
            "yields" => Some(Self::Yields),
            _ => None,
        }
    }

    /// Canonical section name as rendered in the output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Arguments => "Arguments",
            Self::Attributes => "Attributes",
            Self::Raises => "Raises",
            Self::Returns => "Returns",
            Self::Yields => "Yields",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
