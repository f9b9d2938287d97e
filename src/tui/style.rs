//! Color constants and axis helpers for the TUI.

use ratatui::style::Color;

/// Generated power line color.
pub const POWER_COLOR: Color = Color::Blue;
/// Battery charge line color.
pub const CHARGE_COLOR: Color = Color::Green;
/// SOC gauge color when high (>= 50%).
pub const SOC_HIGH: Color = Color::Green;
/// SOC gauge color when medium (>= 20%).
pub const SOC_MID: Color = Color::Yellow;
/// SOC gauge color when low (< 20%).
pub const SOC_LOW: Color = Color::Red;
/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;
/// Lunar day indicator color.
pub const DAY_COLOR: Color = Color::Yellow;
/// Lunar night indicator color.
pub const NIGHT_COLOR: Color = Color::Blue;

/// Returns a color based on the battery state of charge.
pub fn soc_color(soc: f64) -> Color {
    if soc >= 0.5 {
        SOC_HIGH
    } else if soc >= 0.2 {
        SOC_MID
    } else {
        SOC_LOW
    }
}

/// Y-axis bounds for a non-negative series: zero up to `ceiling` plus 10%.
///
/// A non-positive or non-finite ceiling falls back to `[0, 1]`.
pub fn bounds_from_zero(ceiling: f64) -> [f64; 2] {
    if !ceiling.is_finite() || ceiling <= 0.0 {
        return [0.0, 1.0];
    }
    [0.0, ceiling * 1.1]
}
