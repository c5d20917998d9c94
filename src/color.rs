use peniko::color::{parse_color, Srgb};
use peniko::Color;

use crate::config::ColorPalette;

/// An opaque 8-bit sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Perceived brightness in `0.0..=1.0` using the Rec. 601 luma weights.
    fn luma(self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b))
            / 255.0
    }
}

/// WCAG conformance level for text contrast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContrastLevel {
    #[default]
    Aa,
    Aaa,
}

impl ContrastLevel {
    pub fn required_ratio(self) -> f64 {
        match self {
            Self::Aa => 4.5,
            Self::Aaa => 7.0,
        }
    }
}

/// Parses any CSS color string the renderer understands: hex, `rgb()`, `hsl()`, named colors.
pub fn parse_css_color(value: &str) -> Option<Color> {
    parse_color(value)
        .ok()
        .map(|color| color.to_alpha_color::<Srgb>())
}

/// Parses a six-digit hex color; the leading `#` is optional.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

fn scale(hex: &str, factor: f64) -> String {
    let Some(rgb) = hex_to_rgb(hex) else {
        return hex.to_string();
    };
    let channel = |value: u8| (f64::from(value) * factor).round().clamp(0.0, 255.0) as u8;
    rgb_to_hex(Rgb {
        r: channel(rgb.r),
        g: channel(rgb.g),
        b: channel(rgb.b),
    })
}

/// Brightens each channel by `percent`; unparseable input is returned unchanged.
pub fn lighten(hex: &str, percent: f64) -> String {
    scale(hex, 1.0 + percent / 100.0)
}

pub fn darken(hex: &str, percent: f64) -> String {
    scale(hex, 1.0 - percent / 100.0)
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// Derives a dark palette, keeping the brand hues but lifting them for dark backgrounds.
pub fn dark_mode_palette(light: &ColorPalette) -> ColorPalette {
    ColorPalette {
        primary: lighten(or_default(&light.primary, "#007acc"), 20.0),
        secondary: lighten(or_default(&light.secondary, "#6c757d"), 20.0),
        accent: lighten(or_default(&light.accent, "#28a745"), 20.0),
        background: "#1e1e1e".to_string(),
        surface: "#2d2d2d".to_string(),
        text: "#ffffff".to_string(),
        text_muted: "#b0b0b0".to_string(),
        border: "#404040".to_string(),
        shadow: "rgba(0, 0, 0, 0.3)".to_string(),
    }
}

pub fn light_mode_palette(dark: &ColorPalette) -> ColorPalette {
    ColorPalette {
        primary: darken(or_default(&dark.primary, "#007acc"), 20.0),
        secondary: darken(or_default(&dark.secondary, "#6c757d"), 20.0),
        accent: darken(or_default(&dark.accent, "#28a745"), 20.0),
        background: "#ffffff".to_string(),
        surface: "#f8f9fa".to_string(),
        text: "#212529".to_string(),
        text_muted: "#6c757d".to_string(),
        border: "#dee2e6".to_string(),
        shadow: "rgba(0, 0, 0, 0.1)".to_string(),
    }
}

/// Unparseable colors count as light.
pub fn is_light(hex: &str) -> bool {
    hex_to_rgb(hex).map_or(true, |rgb| rgb.luma() > 0.5)
}

/// Black or white, whichever reads better on `background`.
pub fn contrast_color(background: &str) -> &'static str {
    if is_light(background) {
        "#000000"
    } else {
        "#ffffff"
    }
}

/// Returns 1.0 when either color cannot be parsed.
pub fn contrast_ratio(first: &str, second: &str) -> f64 {
    let (Some(a), Some(b)) = (hex_to_rgb(first), hex_to_rgb(second)) else {
        return 1.0;
    };
    let lighter = a.luma().max(b.luma());
    let darker = a.luma().min(b.luma());
    (lighter + 0.05) / (darker + 0.05)
}

pub fn meets_contrast(first: &str, second: &str, level: ContrastLevel) -> bool {
    contrast_ratio(first, second) >= level.required_ratio()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let rgb = hex_to_rgb("#007acc").unwrap();
        assert_eq!(rgb, Rgb { r: 0, g: 0x7a, b: 0xcc });
        assert_eq!(rgb_to_hex(rgb), "#007acc");
        assert_eq!(hex_to_rgb("007ACC"), Some(rgb));
    }

    #[test]
    fn short_hex_is_not_a_triple() {
        assert_eq!(hex_to_rgb("#fff"), None);
        assert_eq!(hex_to_rgb("#gggggg"), None);
    }

    #[test]
    fn lighten_and_darken_clamp() {
        assert_eq!(lighten("#ffffff", 50.0), "#ffffff");
        assert_eq!(darken("#808080", 100.0), "#000000");
        assert_eq!(lighten("#646464", 20.0), "#787878");
        assert_eq!(lighten("not-a-color", 20.0), "not-a-color");
    }

    #[test]
    fn dark_palette_uses_fixed_neutrals() {
        let dark = dark_mode_palette(&ColorPalette::default());
        assert_eq!(dark.background, "#1e1e1e");
        assert_eq!(dark.text, "#ffffff");
        assert_eq!(dark.primary, lighten("#007acc", 20.0));
    }

    #[test]
    fn light_palette_falls_back_on_empty_hues() {
        let empty = ColorPalette {
            primary: String::new(),
            ..ColorPalette::default()
        };
        let light = light_mode_palette(&empty);
        assert_eq!(light.primary, darken("#007acc", 20.0));
        assert_eq!(light.background, "#ffffff");
    }

    #[test]
    fn contrast_helpers() {
        assert!(is_light("#ffffff"));
        assert!(!is_light("#000000"));
        assert_eq!(contrast_color("#1e1e1e"), "#ffffff");
        assert_eq!(contrast_color("#fafafa"), "#000000");
        assert!(meets_contrast("#000000", "#ffffff", ContrastLevel::Aaa));
        assert!(!meets_contrast("#777777", "#888888", ContrastLevel::Aa));
        assert_eq!(contrast_ratio("nope", "#ffffff"), 1.0);
    }

    #[test]
    fn parses_css_color_grammar() {
        assert!(parse_css_color("#fff").is_some());
        assert!(parse_css_color("#1e1e1e").is_some());
        assert!(parse_css_color("rgba(0, 0, 0, 0.1)").is_some());
        assert!(parse_css_color("hsl(120, 50%, 50%)").is_some());
        assert!(parse_css_color("rebeccapurple").is_some());
        assert!(parse_css_color("definitely-not-a-color").is_none());
        assert!(parse_css_color("#12345").is_none());
    }
}
