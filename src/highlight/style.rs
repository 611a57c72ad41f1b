//! Display styles carried by named tags

/// A foreground color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Rgb(u8, u8, u8),
}

/// Display style applied to a tagged span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Color,
}

impl Style {
    /// Create a style from RGB components
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            fg: Color::Rgb(r, g, b),
        }
    }
}
