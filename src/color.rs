use palette::Srgb;

// ---------------------------------------------------------------------------
// Series color palette
// ---------------------------------------------------------------------------

/// Fixed 10-entry series palette (the classic plotly default cycle).
/// Countries are colored by their position in the current selection,
/// wrapping modulo the palette length.
pub const SERIES_PALETTE: [Srgb<u8>; 10] = [
    Srgb::new(31, 119, 180),
    Srgb::new(255, 127, 14),
    Srgb::new(44, 160, 44),
    Srgb::new(214, 39, 40),
    Srgb::new(148, 103, 189),
    Srgb::new(140, 86, 75),
    Srgb::new(227, 119, 194),
    Srgb::new(127, 127, 127),
    Srgb::new(188, 189, 34),
    Srgb::new(23, 190, 207),
];

/// Color for the series of the `index`-th selected country.
pub fn series_color(index: usize) -> Srgb<u8> {
    SERIES_PALETTE[index % SERIES_PALETTE.len()]
}

/// CSS `rgb(r, g, b)` string as emitted in chart specifications.
pub fn css_color(color: Srgb<u8>) -> String {
    format!("rgb({}, {}, {})", color.red, color.green, color.blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles_by_index() {
        assert_eq!(series_color(0), series_color(10));
        assert_eq!(series_color(3), series_color(13));
        assert_ne!(series_color(0), series_color(1));
    }

    #[test]
    fn css_formatting() {
        assert_eq!(css_color(series_color(0)), "rgb(31, 119, 180)");
        assert_eq!(css_color(series_color(11)), "rgb(255, 127, 14)");
    }
}
