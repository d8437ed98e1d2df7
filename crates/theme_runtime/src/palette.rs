//! Named color tokens shared with the styling tables.

/// One named palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    /// Token name, `<group>-<shade>`.
    pub token: &'static str,
    /// CSS hex color.
    pub hex: &'static str,
}

const fn color(token: &'static str, hex: &'static str) -> PaletteColor {
    PaletteColor { token, hex }
}

/// Every palette token in declaration order.
pub const PALETTE: [PaletteColor; 8] = [
    color("accent-100", "#15ADFF"),
    color("dark-100", "#111111"),
    color("info-success", "#3F845F"),
    color("info-failed", "#E25C5C"),
    color("light-100", "#FFFFFF"),
    color("light-300", "#CFCFCF"),
    color("light-500", "#7F90A1"),
    color("light-700", "#707070"),
];

/// Looks up the hex value for a palette token.
pub fn palette_color(token: &str) -> Option<&'static str> {
    PALETTE
        .iter()
        .find(|entry| entry.token == token)
        .map(|entry| entry.hex)
}
