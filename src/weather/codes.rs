//! WMO weather code tables
//!
//! Only the codes the dashboard knows get a label; everything else,
//! including a missing code, renders the fallbacks.

/// Description for codes outside the table
pub const FALLBACK_DESCRIPTION: &str = "Unknown";

/// Glyph for codes outside the table
pub const FALLBACK_GLYPH: &str = "🔆";

/// Human-readable description of a weather code
pub fn describe(code: Option<i64>) -> &'static str {
    match code {
        Some(0) => "Clear sky",
        Some(1) => "Mainly clear",
        Some(2) => "Partly cloudy",
        Some(3) => "Overcast",
        Some(45) => "Fog",
        Some(48) => "Depositing rime fog",
        Some(51) => "Light drizzle",
        Some(53) => "Moderate drizzle",
        Some(55) => "Dense drizzle",
        Some(61) => "Slight rain",
        Some(63) => "Moderate rain",
        Some(65) => "Heavy rain",
        Some(71) => "Slight snow",
        Some(73) => "Moderate snow",
        Some(75) => "Heavy snow",
        Some(95) => "Thunderstorm",
        _ => FALLBACK_DESCRIPTION,
    }
}

/// Emoji for a quick glance at a weather code
pub fn glyph(code: Option<i64>) -> &'static str {
    match code {
        Some(0) => "☀️",
        Some(1) => "🌤️",
        Some(2) => "⛅",
        Some(3) => "☁️",
        Some(45) | Some(48) => "🌫️",
        Some(51) | Some(61) => "🌦️",
        Some(53) | Some(55) | Some(63) | Some(65) => "🌧️",
        Some(71) | Some(73) => "🌨️",
        Some(75) => "❄️",
        Some(95) => "⛈️",
        _ => FALLBACK_GLYPH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN: &[i64] = &[0, 1, 2, 3, 45, 48, 51, 53, 55, 61, 63, 65, 71, 73, 75, 95];

    #[test]
    fn test_clear_sky() {
        assert_eq!(describe(Some(0)), "Clear sky");
        assert_eq!(glyph(Some(0)), "☀️");
    }

    #[test]
    fn test_unknown_codes_fall_back() {
        for code in [Some(4), Some(96), Some(99), Some(-1), None] {
            assert_eq!(describe(code), FALLBACK_DESCRIPTION);
            assert_eq!(glyph(code), FALLBACK_GLYPH);
        }
    }

    #[test]
    fn test_tables_cover_same_codes() {
        for &code in KNOWN {
            assert_ne!(describe(Some(code)), FALLBACK_DESCRIPTION, "{}", code);
            assert_ne!(glyph(Some(code)), FALLBACK_GLYPH, "{}", code);
        }
    }
}
