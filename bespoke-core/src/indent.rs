//! Indentation configuration for generated code.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (Rust, Python).
    pub const FOUR_SPACES: Self = Self::Spaces(4);

    /// 2-space indentation (TypeScript, JavaScript, YAML).
    pub const TWO_SPACES: Self = Self::Spaces(2);

    /// Tab indentation (Go, Makefiles).
    pub const TAB: Self = Self::Tab;

    /// Append `level` units of this indentation to `buffer`.
    pub fn write_to(&self, buffer: &mut String, level: usize) {
        match self {
            Self::Spaces(width) => {
                buffer.extend(std::iter::repeat_n(' ', usize::from(*width) * level))
            }
            Self::Tab => buffer.extend(std::iter::repeat_n('\t', level)),
        }
    }

    /// The string for one indent level.
    pub fn unit(&self) -> String {
        let mut unit = String::new();
        self.write_to(&mut unit, 1);
        unit
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::FOUR_SPACES
    }
}
