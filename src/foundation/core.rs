use std::ops::{Index, IndexMut};

/// Straight-alpha RGBA8 color, the pixel type of every image bitsprite produces.
pub type Rgba8 = image::Rgba<u8>;

/// Number of variants rendered per sheet (one per 8-bit value).
pub const VARIANT_COUNT: usize = 256;

/// Semantic role of a template pixel.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PixelRole {
    /// Empty space; may be promoted to `Outline` next to colored pixels.
    #[default]
    Background,
    /// Data pixel: drawn as `Bit` when its bit is set, otherwise as `Outline`.
    Bit,
    /// Fixed accent-colored pixel.
    Accent,
    /// Fixed fill-colored pixel.
    Fill,
    /// Outline pixel.
    Outline,
    /// Segment marker. Only produced while classifying; never rendered.
    Delimiter,
}

impl PixelRole {
    /// Number of roles, and the length of every [`RoleTable`].
    pub const COUNT: usize = 6;

    /// All roles in table order.
    pub const ALL: [PixelRole; Self::COUNT] = [
        PixelRole::Background,
        PixelRole::Bit,
        PixelRole::Accent,
        PixelRole::Fill,
        PixelRole::Outline,
        PixelRole::Delimiter,
    ];

    /// Position of this role inside a [`RoleTable`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// `true` for the roles that grow an outline around themselves.
    pub fn is_colored(self) -> bool {
        matches!(self, PixelRole::Bit | PixelRole::Accent | PixelRole::Fill)
    }
}

/// Fixed-size table holding one value per [`PixelRole`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleTable<T>([T; PixelRole::COUNT]);

impl<T> RoleTable<T> {
    /// Build a table by evaluating `f` once per role, in [`PixelRole::ALL`] order.
    pub fn from_fn(f: impl FnMut(PixelRole) -> T) -> Self {
        Self(PixelRole::ALL.map(f))
    }

    /// Build a new table from this one.
    pub fn map<U>(&self, mut f: impl FnMut(PixelRole, &T) -> U) -> RoleTable<U> {
        RoleTable::from_fn(|role| f(role, &self.0[role.index()]))
    }
}

impl<T> Index<PixelRole> for RoleTable<T> {
    type Output = T;

    fn index(&self, role: PixelRole) -> &T {
        &self.0[role.index()]
    }
}

impl<T> IndexMut<PixelRole> for RoleTable<T> {
    fn index_mut(&mut self, role: PixelRole) -> &mut T {
        &mut self.0[role.index()]
    }
}

/// One of the 256 rendered variants; its value selects the active bits.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Variant(pub u8);

impl Variant {
    /// Every variant in sheet order.
    pub fn all() -> impl Iterator<Item = Variant> {
        (0..=u8::MAX).map(Variant)
    }

    /// Variant position on the sheet (and in per-segment permutations).
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
