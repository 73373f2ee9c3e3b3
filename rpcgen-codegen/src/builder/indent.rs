//! Indentation configuration for code generation.

use std::borrow::Cow;

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (Rust).
    pub const RUST: Self = Self::Spaces(4);

    /// 2-space indentation (TypeScript, Markdown lists).
    pub const TYPESCRIPT: Self = Self::Spaces(2);

    /// Tab indentation (gofmt).
    pub const GO: Self = Self::Tab;

    /// The text of one indent level: exactly `n` spaces for `Spaces(n)`.
    pub fn unit(&self) -> Cow<'static, str> {
        match self {
            Self::Spaces(2) => Cow::Borrowed("  "),
            Self::Spaces(4) => Cow::Borrowed("    "),
            Self::Spaces(n) => Cow::Owned(" ".repeat(usize::from(*n))),
            Self::Tab => Cow::Borrowed("\t"),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::RUST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_unit() {
        assert_eq!(Indent::Spaces(2).unit(), "  ");
        assert_eq!(Indent::Spaces(4).unit(), "    ");
        assert_eq!(Indent::Tab.unit(), "\t");
    }

    #[test]
    fn test_any_width_is_honoured() {
        assert_eq!(Indent::Spaces(3).unit(), "   ");
        assert_eq!(Indent::Spaces(8).unit(), "        ");
        assert_eq!(Indent::Spaces(0).unit(), "");
    }

    #[test]
    fn test_indent_constants() {
        assert_eq!(Indent::RUST, Indent::Spaces(4));
        assert_eq!(Indent::TYPESCRIPT, Indent::Spaces(2));
        assert_eq!(Indent::GO, Indent::Tab);
    }
}
