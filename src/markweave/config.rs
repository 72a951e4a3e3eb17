//! Ambient configuration surface.
//!
//!     The core pipeline takes only a bare source string; this is the small options
//!     struct a complete crate needs so it can be used standalone without a
//!     separate frontmatter-stripping collaborator, and so pathological nesting has
//!     a documented, configurable bound (§5's "target >= 1000 levels").

/// Options controlling [`crate::parse_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOptions {
    /// Whether to strip a leading `+++ ... +++` frontmatter block before
    /// tokenizing. Defaults to `true`. Set to `false` when a collaborator (e.g. a
    /// TOML frontmatter deserializer) has already consumed it, and the remaining
    /// body might legitimately start with `+++` of its own accord.
    pub strip_frontmatter: bool,
    /// Maximum recursion depth the tree builder will descend to before returning
    /// [`crate::markweave::error::ParseError::NestingTooDeep`] instead of
    /// recursing further. See §5: "implementations should either bound the
    /// recursion depth or use an explicit work stack (target >= 1000 levels)".
    pub max_nesting_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            strip_frontmatter: true,
            max_nesting_depth: 1000,
        }
    }
}
