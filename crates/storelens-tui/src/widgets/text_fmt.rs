//! Card text formatting helpers.

/// Maximum description length shown on a card.
const EXCERPT_CHARS: usize = 100;

/// Truncate a description to 100 characters and append an ellipsis.
///
/// The ellipsis is appended unconditionally, matching the storefront
/// card layout — short descriptions still end with `...`.
pub fn excerpt(description: &str) -> String {
    let mut out: String = description.chars().take(EXCERPT_CHARS).collect();
    out.push_str("...");
    out
}

/// Money formatting used on cards and in the detail popup.
pub fn price(price: f64) -> String {
    format!("${price:.2}")
}

/// Rating badge shown next to the star meter.
pub fn rating_badge(rate: f64, count: u64) -> String {
    format!("⭐ {rate}/5 ({count} reviews)")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn excerpt_truncates_long_descriptions_to_100_chars() {
        let long = "x".repeat(250);
        let out = excerpt(&long);
        assert_eq!(out.chars().count(), 103);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn excerpt_appends_ellipsis_even_when_short() {
        assert_eq!(excerpt("Compact tee"), "Compact tee...");
        assert_eq!(excerpt(""), "...");
    }

    #[test]
    fn excerpt_counts_chars_not_bytes() {
        let stars = "⭐".repeat(120);
        let out = excerpt(&stars);
        assert_eq!(out.chars().count(), 103);
    }

    #[test]
    fn prices_render_with_two_decimals() {
        assert_eq!(price(109.95), "$109.95");
        assert_eq!(price(10.0), "$10.00");
    }

    #[test]
    fn rating_badge_shows_rate_and_review_count() {
        assert_eq!(rating_badge(3.9, 120), "⭐ 3.9/5 (120 reviews)");
    }
}
