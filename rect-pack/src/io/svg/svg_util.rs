use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path};

use crate::geometry::primitives::{ORect, Point, Rect, SPolygon};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Draw the anchor point of every placement
    #[serde(default)]
    pub anchors: bool,
    ///Draw the bounding box of every boundary, the area covered by the scan
    #[serde(default)]
    pub bounding_box: bool,
    ///Draw the major direction as an axis through the centroid of the boundary
    #[serde(default)]
    pub direction_axis: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            anchors: true,
            bounding_box: false,
            direction_axis: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f64,
    pub boundary_fill: Color,
    pub rect_fill: Color,
    pub rotated_rect_fill: Color,
    pub anchor_fill: Color,
    pub axis_stroke: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::EARTH_TONES
    }
}

impl SvgLayoutTheme {
    pub const EARTH_TONES: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        boundary_fill: Color(0xCC, 0x82, 0x4A),
        rect_fill: Color(0xFF, 0xC8, 0x79),
        rotated_rect_fill: Color(0xC7, 0xA9, 0x00), // DARK YELLOW
        anchor_fill: Color(0x2D, 0x2D, 0x2D),
        axis_stroke: Color(0xFF, 0x00, 0x00), // RED
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        boundary_fill: Color(0xD3, 0xD3, 0xD3),
        rect_fill: Color(0x7A, 0x7A, 0x7A),
        rotated_rect_fill: Color(0x63, 0x63, 0x63),
        anchor_fill: Color(0x00, 0x00, 0x00),
        axis_stroke: Color(0xD0, 0x00, 0x00),
    };
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(u8, u8, u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "expected a color as #RRGGBB, got {s:?}"
        );
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).with_context(|| format!("invalid color {s:?}"))
        };
        Ok(Color(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

pub fn simple_polygon_data(s_poly: &SPolygon) -> Data {
    let mut data = Data::new().move_to::<(f64, f64)>(s_poly.vertex(0).into());
    for i in 1..s_poly.n_vertices() {
        data = data.line_to::<(f64, f64)>(s_poly.vertex(i).into());
    }
    data.close()
}

pub fn o_rect_data(rect: &ORect) -> Data {
    let [a, b, c, d] = rect.corners();
    Data::new()
        .move_to::<(f64, f64)>(a.into())
        .line_to::<(f64, f64)>(b.into())
        .line_to::<(f64, f64)>(c.into())
        .line_to::<(f64, f64)>(d.into())
        .close()
}

pub fn aa_rect_data(rect: Rect) -> Data {
    Data::new()
        .move_to((rect.x_min, rect.y_min))
        .line_to((rect.x_max, rect.y_min))
        .line_to((rect.x_max, rect.y_max))
        .line_to((rect.x_min, rect.y_max))
        .close()
}

pub fn line_data(start: Point, end: Point) -> Data {
    Data::new()
        .move_to::<(f64, f64)>(start.into())
        .line_to::<(f64, f64)>(end.into())
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

pub fn point(Point(x, y): Point, fill: Option<&str>, rad: Option<f64>) -> Circle {
    Circle::new()
        .set("cx", x)
        .set("cy", y)
        .set("r", rad.unwrap_or(0.5))
        .set("fill", fill.unwrap_or("black"))
}
