use std::ops::{BitOr, BitOrAssign};

use compact_str::CompactString;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Reset,
    Rgb(u8, u8, u8),
    Indexed(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Mod(u16);

impl Mod {
    pub const BOLD: Self = Self(1 << 0);
    pub const DIM: Self = Self(1 << 1);
    pub const UNDERLINE: Self = Self(1 << 2);
    pub const REVERSE: Self = Self(1 << 3);
    pub const ITALIC: Self = Self(1 << 4);

    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl BitOr for Mod {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Mod {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub mods: Mod,
}

impl Style {
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn add_mod(mut self, m: Mod) -> Self {
        self.mods |= m;
        self
    }
}

/// Display attribute attached to a run of cells.
///
/// `Object` is reserved: the layout pipeline uses it to tag placeholder runs
/// with the id of the embedded object they stand for. User markup carrying
/// it is rejected at flatten time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Attr {
    #[default]
    None,
    /// Palette tag resolved by the embedding application.
    Tag(CompactString),
    Style(Style),
    Object(usize),
}

impl Attr {
    pub fn tag(name: impl Into<CompactString>) -> Self {
        Attr::Tag(name.into())
    }

    pub fn object_id(&self) -> Option<usize> {
        match self {
            Attr::Object(id) => Some(*id),
            _ => None,
        }
    }
}

impl From<Style> for Attr {
    fn from(style: Style) -> Self {
        Attr::Style(style)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/style.rs"]
mod tests;
