//! Radar Renderer
//!
//! The radar widget embeds a third-party map centred on the resolved
//! location and links to the same map in a new tab. Rendered once; no
//! polling.

use crate::location::Coordinates;

/// Map page of the radar provider
pub const RADAR_BASE_URL: &str = "https://www.rainviewer.com/map.html";

/// Zoom level for both the embed and the link
pub const RADAR_ZOOM: u8 = 7;

/// Map view URL for a location
pub fn radar_url(base: &str, coordinates: Coordinates, zoom: u8) -> String {
    format!(
        "{}?loc={},{},{}",
        base, coordinates.latitude, coordinates.longitude, zoom
    )
}

/// Everything the radar widget renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadarView {
    /// `src` of the lazily loaded preview frame
    pub embed_url: String,
    /// `href` of the "open in new tab" link
    pub link_url: String,
}

impl RadarView {
    pub const FRAME_TITLE: &'static str = "Doppler preview";
    pub const LINK_TEXT: &'static str = "Open full Doppler map";

    pub fn new(base: &str, coordinates: Coordinates, zoom: u8) -> Self {
        let url = radar_url(base, coordinates, zoom);
        Self {
            embed_url: url.clone(),
            link_url: url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::DEFAULT_COORDINATES;

    #[test]
    fn test_default_location_url() {
        let view = RadarView::new(RADAR_BASE_URL, DEFAULT_COORDINATES, RADAR_ZOOM);
        assert_eq!(
            view.embed_url,
            "https://www.rainviewer.com/map.html?loc=40.7128,-74.006,7"
        );
        assert_eq!(view.link_url, view.embed_url);
    }

    #[test]
    fn test_custom_zoom() {
        let url = radar_url(RADAR_BASE_URL, Coordinates::new(-33.8688, 151.2093), 9);
        assert_eq!(url, "https://www.rainviewer.com/map.html?loc=-33.8688,151.2093,9");
    }
}
