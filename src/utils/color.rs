use ratatui::style::Color;

/// Parse a `#RRGGBB` color into a terminal color.
///
/// Anything that is not a six digit hex triplet falls back to light blue, the
/// color used for rows whose download link is still being resolved.
#[must_use]
pub fn parse_hex_color(color: &str) -> Color {
    let hex = color.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Color::LightBlue;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => Color::LightBlue,
    }
}
