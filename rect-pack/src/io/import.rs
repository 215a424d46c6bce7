use anyhow::{Context, Result, ensure};
use itertools::Itertools;
use log::warn;

use crate::geometry::primitives::{Frame, ORect, Point, SPolygon};
use crate::io::ext_repr::{ExtInstance, ExtRectangle, ExtSPolygon};

/// Internal counterpart of an [`ExtInstance`].
/// Shapes are stored together with their index in the external instance,
/// invalid shapes are left out.
#[derive(Clone, Debug)]
pub struct Instance {
    pub name: String,
    pub boundaries: Vec<(usize, SPolygon)>,
    pub templates: Vec<(usize, ORect)>,
}

impl Instance {
    pub fn boundary_polygons(&self) -> Vec<SPolygon> {
        self.boundaries.iter().map(|(_, b)| b.clone()).collect_vec()
    }

    pub fn template_rects(&self) -> Vec<ORect> {
        self.templates.iter().map(|(_, t)| *t).collect_vec()
    }

    /// Index in the external instance of the `i`-th imported boundary
    pub fn boundary_id(&self, i: usize) -> usize {
        self.boundaries[i].0
    }
}

/// Imports an instance into the library.
/// Boundaries and rectangles which fail to import are reported and skipped,
/// the instance itself fails only if no boundary remains.
pub fn import_instance(ext_instance: &ExtInstance) -> Result<Instance> {
    let boundaries = ext_instance
        .boundaries
        .iter()
        .enumerate()
        .filter_map(|(i, ext_b)| match import_simple_polygon(ext_b) {
            Ok(b) => Some((i, b)),
            Err(e) => {
                warn!("[IMPORT] skipping boundary {i}: {e:#}");
                None
            }
        })
        .collect_vec();

    let templates = ext_instance
        .rectangles
        .iter()
        .enumerate()
        .filter_map(|(i, ext_r)| match import_rectangle(ext_r) {
            Ok(r) => Some((i, r)),
            Err(e) => {
                warn!("[IMPORT] skipping rectangle {i}: {e:#}");
                None
            }
        })
        .collect_vec();

    ensure!(
        !boundaries.is_empty(),
        "instance {} contains no valid boundary ({} given)",
        ext_instance.name,
        ext_instance.boundaries.len()
    );

    Ok(Instance {
        name: ext_instance.name.clone(),
        boundaries,
        templates,
    })
}

pub fn import_simple_polygon(sp: &ExtSPolygon) -> Result<SPolygon> {
    let mut points = sp.0.iter().map(|&(x, y)| Point(x, y)).collect_vec();
    //Remove duplicates that are consecutive (e.g. [1, 2, 2, 3] -> [1, 2, 3])
    points.dedup();
    SPolygon::new(points).context("invalid boundary")
}

pub fn import_rectangle(ext_rect: &ExtRectangle) -> Result<ORect> {
    let ExtRectangle {
        origin,
        width,
        height,
        rotation,
    } = *ext_rect;
    ensure!(
        rotation.is_finite(),
        "rectangle rotation must be finite, got {rotation}"
    );
    let rect = ORect::new(Frame::rotated(origin.into(), rotation), width, height);
    ensure!(rect.is_valid(), "invalid rectangle: {ext_rect:?}");
    Ok(rect)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> ExtSPolygon {
        ExtSPolygon(vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)])
    }

    #[test]
    fn closed_ring_with_repeated_points() {
        let ring = ExtSPolygon(vec![
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (0.0, 10.0),
            (0.0, 0.0),
        ]);
        let poly = import_simple_polygon(&ring).unwrap();
        assert_eq!(poly.n_vertices(), 4);
    }

    #[test]
    fn invalid_shapes_are_skipped() {
        let ext = ExtInstance {
            name: "mixed".to_string(),
            boundaries: vec![
                ExtSPolygon(vec![(0.0, 0.0), (1.0, 1.0)]),
                square(),
                ExtSPolygon(vec![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]),
            ],
            rectangles: vec![
                ExtRectangle {
                    origin: (0.0, 0.0),
                    width: 0.0,
                    height: 1.0,
                    rotation: 0.0,
                },
                ExtRectangle {
                    origin: (1.0, 2.0),
                    width: 3.0,
                    height: 1.0,
                    rotation: 0.25,
                },
            ],
        };
        let instance = import_instance(&ext).unwrap();
        assert_eq!(instance.boundaries.len(), 1);
        assert_eq!(instance.boundary_id(0), 1);
        assert_eq!(instance.templates.len(), 1);
        assert_eq!(instance.templates[0].0, 1);
    }

    #[test]
    fn instance_without_valid_boundary_fails() {
        let ext = ExtInstance {
            name: "empty".to_string(),
            boundaries: vec![ExtSPolygon(vec![])],
            rectangles: vec![],
        };
        assert!(import_instance(&ext).is_err());
    }
}
