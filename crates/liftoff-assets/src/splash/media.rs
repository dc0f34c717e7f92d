//! CSS media queries selecting a startup image

/// Build the media query for one device/orientation pairing
///
/// `width` and `height` are physical pixels; the query uses CSS pixels, so
/// both are divided by `scale` and floored. Callers must pass a non-zero
/// `scale`; see [`Device::has_geometry`](crate::Device::has_geometry).
pub fn assemble_media_query(width: u32, height: u32, scale: u32, orientation: &str) -> String {
    let params = [
        ("device-width", format!("{}px", width / scale)),
        ("device-height", format!("{}px", height / scale)),
        ("-webkit-device-pixel-ratio", scale.to_string()),
        ("orientation", orientation.to_string()),
    ];

    std::iter::once("screen".to_string())
        .chain(
            params
                .iter()
                .map(|(key, value)| format!("({}: {})", key, value)),
        )
        .collect::<Vec<_>>()
        .join(" and ")
}
