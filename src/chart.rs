use serde::Serialize;

// ---------------------------------------------------------------------------
// Chart specification
// ---------------------------------------------------------------------------

/// A declarative chart: named series plus a layout. Serializes to the
/// plotly-style figure JSON the hosting framework's rendering layer
/// consumes. Rebuilt from scratch on every selection change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub data: Vec<Series>,
    pub layout: Layout,
}

/// One line trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub x: Vec<i32>,
    pub y: Vec<f64>,
    #[serde(rename = "type")]
    pub trace_type: TraceType,
    pub name: String,
    pub line: LineStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceType {
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    /// CSS color string, e.g. `rgb(31, 119, 180)`.
    pub color: String,
    /// Solid lines omit the key on the wire, matching the rendering layer's
    /// default.
    #[serde(skip_serializing_if = "LineDash::is_solid")]
    pub dash: LineDash,
}

/// Line dash pattern distinguishing sub-indicators within one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineDash {
    Solid,
    Dash,
    Dot,
}

impl LineDash {
    pub fn is_solid(&self) -> bool {
        matches!(self, LineDash::Solid)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: String,
    pub xaxis: Axis,
}

/// Axis with an explicit range; the range clamps the view, it does not
/// filter the underlying series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub range: [i32; 2],
}

impl ChartSpec {
    pub fn new(title: impl Into<String>, range: [i32; 2], data: Vec<Series>) -> Self {
        ChartSpec {
            data,
            layout: Layout {
                title: title.into(),
                xaxis: Axis { range },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_the_plotly_wire_shape() {
        let spec = ChartSpec::new(
            "Population",
            [1960, 2020],
            vec![Series {
                x: vec![1960, 1961],
                y: vec![100.0, 110.0],
                trace_type: TraceType::Line,
                name: "Norway, total".to_string(),
                line: LineStyle {
                    color: "rgb(31, 119, 180)".to_string(),
                    dash: LineDash::Solid,
                },
            }],
        );

        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["layout"]["title"], "Population");
        assert_eq!(json["layout"]["xaxis"]["range"][1], 2020);
        assert_eq!(json["data"][0]["type"], "line");
        assert_eq!(json["data"][0]["name"], "Norway, total");
        // Solid lines carry no dash key on the wire.
        assert!(json["data"][0]["line"].get("dash").is_none());
    }

    #[test]
    fn dash_patterns_serialize_lowercase() {
        let dashed = serde_json::to_value(LineDash::Dash).unwrap();
        let dotted = serde_json::to_value(LineDash::Dot).unwrap();
        assert_eq!(dashed, "dash");
        assert_eq!(dotted, "dot");
    }
}
