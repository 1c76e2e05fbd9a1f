use crate::pattern::Intensity;
use crossterm::style::Color;
use image::Rgb;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TermColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl TermColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        TermColor { r, g, b }
    }

    pub fn to_rgb(&self) -> Rgb<u8> {
        Rgb([self.r, self.g, self.b])
    }

    /// Nearest xterm-256 colour; works on terminals without truecolor.
    pub fn to_ansi(&self) -> Color {
        Color::AnsiValue(ansi_colours::ansi256_from_rgb((self.r, self.g, self.b)))
    }
}

// Contribution graph palette, empty cell then four shades
pub const EMPTY: TermColor = TermColor::new(235, 237, 240);
pub const SHADES: [TermColor; 4] = [
    TermColor::new(155, 233, 168),
    TermColor::new(64, 196, 99),
    TermColor::new(48, 161, 78),
    TermColor::new(33, 110, 57),
];
pub const BACKGROUND: TermColor = TermColor::new(255, 255, 255);

/// Colour used to preview a whole pattern at one intensity.
pub fn intensity_color(intensity: Intensity) -> TermColor {
    match intensity {
        Intensity::Light => SHADES[0],
        Intensity::Medium => SHADES[1],
        Intensity::Random => SHADES[2],
        Intensity::Dark => SHADES[3],
    }
}

/// Shade index (0 = empty, 1..=4) for a day with `count` commits.
pub fn shade_for_count(count: usize) -> usize {
    match count {
        0 => 0,
        1..=3 => 1,
        4..=6 => 2,
        7..=11 => 3,
        _ => 4,
    }
}

pub fn shade_color(shade: usize) -> TermColor {
    match shade {
        0 => EMPTY,
        n => SHADES[(n - 1).min(SHADES.len() - 1)],
    }
}
