use anyhow::Result;
use svg::Document;
use svg::node::element::{Group, Text, Title};

use crate::geometry::primitives::{Rect, SPolygon, Vector};
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use crate::packing::batch::BoundaryOutcome;

/// Draws every boundary with the rectangles packed into it.
/// `outcomes` is matched to `boundaries` by position.
pub fn packing_to_svg(
    boundaries: &[SPolygon],
    outcomes: &[BoundaryOutcome],
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let canvas = Canvas::new(boundaries, options);
    let theme = &options.theme;
    let sw = canvas.stroke_width;

    let n_placed: usize = outcomes.iter().map(|o| o.placements().len()).sum();
    let n_failed = outcomes.iter().filter(|o| o.is_failed()).count();

    let mut rects_group = Group::new().set("id", "placements");
    let mut anchors_group = Group::new().set("id", "anchors");

    for (i, outcome) in outcomes.iter().enumerate() {
        for (j, p) in outcome.placements().iter().enumerate() {
            let fill = match p.rotated {
                true => theme.rotated_rect_fill,
                false => theme.rect_fill,
            };
            let title = Title::new(format!(
                "placement {j} in boundary {i}, anchor: ({:.3}, {:.3}), rotated: {}",
                p.anchor.0, p.anchor.1, p.rotated
            ));
            rects_group = rects_group.add(
                svg_util::data_to_path(
                    svg_util::o_rect_data(&p.rect),
                    &[
                        ("fill", &*format!("{fill}")),
                        ("stroke-width", &*format!("{sw}")),
                        ("stroke", "black"),
                        ("fill-opacity", "0.75"),
                    ],
                )
                .add(title),
            );
            if options.anchors {
                anchors_group = anchors_group.add(svg_util::point(
                    p.anchor,
                    Some(&*format!("{}", theme.anchor_fill)),
                    Some(1.5 * sw),
                ));
            }
        }
    }

    let label = format!("placements: {n_placed} | failed boundaries: {n_failed} | {title}");

    canvas
        .document(label)
        .add(canvas.boundaries_group(boundaries))
        .add(rects_group)
        .add(anchors_group)
}

/// Draws every boundary with its major direction as an axis through its centroid.
/// `directions` is matched to `boundaries` by position, failed entries are left out.
pub fn directions_to_svg(
    boundaries: &[SPolygon],
    directions: &[Result<f64>],
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let canvas = Canvas::new(boundaries, options);
    let sw = canvas.stroke_width;

    let mut axes_group = Group::new().set("id", "directions");
    if options.direction_axis {
        for (i, (boundary, direction)) in boundaries.iter().zip(directions).enumerate() {
            let Ok(angle) = direction else { continue };
            //long enough to cross the entire boundary
            let half_length = 0.5 * f64::hypot(boundary.bbox.width(), boundary.bbox.height());
            let (sin, cos) = angle.sin_cos();
            let reach = Vector(cos, sin) * half_length;
            let centroid = boundary.centroid();

            axes_group = axes_group.add(
                svg_util::data_to_path(
                    svg_util::line_data(centroid + -reach, centroid + reach),
                    &[
                        ("stroke", &*format!("{}", options.theme.axis_stroke)),
                        ("stroke-width", &*format!("{}", 2.0 * sw)),
                        ("stroke-dasharray", &*format!("{} {}", 4.0 * sw, 2.0 * sw)),
                        ("stroke-linecap", "round"),
                    ],
                )
                .add(Title::new(format!(
                    "boundary {i}, major direction: {:.3}°",
                    angle.to_degrees()
                ))),
            );
        }
    }

    let n_failed = directions.iter().filter(|d| d.is_err()).count();
    let label = format!("boundaries: {} | failed: {n_failed} | {title}", boundaries.len());

    canvas
        .document(label)
        .add(canvas.boundaries_group(boundaries))
        .add(axes_group)
}

/// Shared frame of the drawings: view box around all boundaries and a matching stroke width
struct Canvas {
    vbox: Rect,
    stroke_width: f64,
    options: SvgDrawOptions,
}

impl Canvas {
    fn new(boundaries: &[SPolygon], options: SvgDrawOptions) -> Self {
        let bbox = boundaries
            .iter()
            .map(|b| b.bbox)
            .reduce(Rect::bounding_rect)
            .unwrap_or(Rect {
                x_min: 0.0,
                y_min: 0.0,
                x_max: 1.0,
                y_max: 1.0,
            });
        let vbox = bbox.scale(1.10);
        let stroke_width = f64::min(vbox.width(), vbox.height())
            * 0.001
            * options.theme.stroke_width_multiplier;

        Canvas {
            vbox,
            stroke_width,
            options,
        }
    }

    fn boundaries_group(&self, boundaries: &[SPolygon]) -> Group {
        let sw = self.stroke_width;
        let mut group = Group::new().set("id", "boundaries");
        for (i, boundary) in boundaries.iter().enumerate() {
            let bbox = boundary.bbox;
            let title = Title::new(format!(
                "boundary {i}, bbox: [x_min: {:.3}, y_min: {:.3}, x_max: {:.3}, y_max: {:.3}]",
                bbox.x_min, bbox.y_min, bbox.x_max, bbox.y_max
            ));
            group = group.add(
                svg_util::data_to_path(
                    svg_util::simple_polygon_data(boundary),
                    &[
                        ("fill", &*format!("{}", self.options.theme.boundary_fill)),
                        ("stroke", "black"),
                        ("stroke-width", &*format!("{}", 2.0 * sw)),
                    ],
                )
                .add(title),
            );
            if self.options.bounding_box {
                group = group.add(svg_util::data_to_path(
                    svg_util::aa_rect_data(bbox),
                    &[
                        ("fill", "none"),
                        ("stroke", "black"),
                        ("stroke-opacity", "0.3"),
                        ("stroke-width", &*format!("{}", 0.5 * sw)),
                        ("stroke-dasharray", &*format!("{} {}", 1.0 * sw, 2.0 * sw)),
                    ],
                ));
            }
        }
        group
    }

    fn document(&self, label: String) -> Document {
        let vbox = self.vbox;
        let font_size = f64::min(vbox.width(), vbox.height()) * 0.025;
        //print some information above the left top of the drawing
        let label = Text::new(label)
            .set("x", vbox.x_min)
            .set("y", vbox.y_min - 0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500");

        Document::new()
            .set(
                "viewBox",
                (vbox.x_min, vbox.y_min - font_size, vbox.width(), vbox.height() + font_size),
            )
            .set("xmlns:xlink", "http://www.w3.org/1999/xlink")
            .add(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::primitives::ORect;
    use crate::packing::pack;
    use crate::util::PackConfig;

    fn square() -> SPolygon {
        SPolygon::from(Rect::try_new(0.0, 0.0, 50.0, 50.0).unwrap())
    }

    #[test]
    fn packing_drawing_holds_every_placement() {
        let config = PackConfig {
            offset: 0.0,
            search_spacing: 5.0,
            axis_aligned: true,
            ..PackConfig::default()
        };
        let placements = pack(&square(), &ORect::axis_aligned(0.0, 0.0, 10.0, 10.0), &config).unwrap();
        let n = placements.len();
        let doc = packing_to_svg(
            &[square()],
            &[BoundaryOutcome::Packed(placements)],
            SvgDrawOptions::default(),
            "square",
        );
        let rendered = doc.to_string();
        assert_eq!(rendered.matches("placement ").count(), n);
        assert!(rendered.contains(&format!("placements: {n}")));
    }

    #[test]
    fn direction_drawing_skips_failures() {
        let directions = vec![Ok(0.0), Err(anyhow::anyhow!("no direction"))];
        let doc = directions_to_svg(
            &[square(), square()],
            &directions,
            SvgDrawOptions::default(),
            "dirs",
        );
        let rendered = doc.to_string();
        assert_eq!(rendered.matches("major direction").count(), 1);
        assert!(rendered.contains("failed: 1"));
    }
}
