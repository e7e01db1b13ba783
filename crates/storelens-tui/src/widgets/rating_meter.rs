//! Star meter for product ratings — ★★★★☆ with color thresholds.

use ratatui::style::Style;
use ratatui::text::Span;

use crate::theme;

/// Returns a styled `Span` of five star glyphs for a 0–5 rating.
///
/// | Stars   | Rating      | Color           |
/// |---------|-------------|-----------------|
/// | `★★★★★` | >= 4.5      | Success Green   |
/// | `★★★★☆` | 3.5 to 4.5  | Neon Cyan       |
/// | `★★★☆☆` | 2.5 to 3.5  | Electric Yellow |
/// | `★★☆☆☆` | 1.5 to 2.5  | Coral           |
/// | below   | < 1.5       | Error Red       |
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::as_conversions
)]
pub fn stars_span(rate: f64) -> Span<'static> {
    let filled = (rate.clamp(0.0, 5.0).round() as usize).min(5);
    let glyphs = format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled));

    let color = if rate >= 4.5 {
        theme::SUCCESS_GREEN
    } else if rate >= 3.5 {
        theme::NEON_CYAN
    } else if rate >= 2.5 {
        theme::ELECTRIC_YELLOW
    } else if rate >= 1.5 {
        theme::CORAL
    } else {
        theme::ERROR_RED
    };

    Span::styled(glyphs, Style::default().fg(color))
}
