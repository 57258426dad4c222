//! Clock Renderer
//!
//! Formats wall-clock time for the time widget. The UI calls [`render`]
//! once on mount and then every [`TICK_INTERVAL_MS`].

use chrono::{DateTime, Local, Utc};
use chrono_tz::{Tz, TZ_VARIANTS};

use crate::timezone::ZonePreference;

/// Re-render period
pub const TICK_INTERVAL_MS: u32 = 1000;

/// Local representation, e.g. `10/19/2026, 3:04:05 PM`
pub const LOCAL_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Named-zone representation, e.g. `Oct 19, 2026, 03:04:05 PM`
pub const ZONED_FORMAT: &str = "%b %-d, %Y, %I:%M:%S %p";

/// Text for the time display under the given preference
///
/// An identifier that is not a known IANA zone renders local time.
pub fn render(now: DateTime<Utc>, preference: &ZonePreference) -> String {
    match preference {
        ZonePreference::Zone(id) => format_in_zone(now, id).unwrap_or_else(|| format_local(now)),
        ZonePreference::Auto => format_local(now),
    }
}

/// Format in a named zone; `None` for an unknown identifier
///
/// Identifiers match regardless of case, so `asia/tokyo` is Tokyo.
pub fn format_in_zone(now: DateTime<Utc>, zone_id: &str) -> Option<String> {
    let tz = parse_zone(zone_id)?;
    Some(now.with_timezone(&tz).format(ZONED_FORMAT).to_string())
}

/// Exact IANA match first, then a case-insensitive scan
fn parse_zone(zone_id: &str) -> Option<Tz> {
    zone_id.parse::<Tz>().ok().or_else(|| {
        TZ_VARIANTS
            .iter()
            .copied()
            .find(|tz| tz.name().eq_ignore_ascii_case(zone_id))
    })
}

/// Format in the runtime's local zone
pub fn format_local(now: DateTime<Utc>) -> String {
    now.with_timezone(&Local).format(LOCAL_FORMAT).to_string()
}
