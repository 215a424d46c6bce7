use std::time::Instant;

use anyhow::Result;
use log::{info, warn};
use rect_pack::direction::find_major_directions;
use rect_pack::io::export::{export_direction_solution, export_pack_solution};
use rect_pack::io::ext_repr::ExtInstance;
use rect_pack::io::import::import_instance;
use rect_pack::io::svg::{directions_to_svg, packing_to_svg};
use rect_pack::packing::batch::pack_all;
use svg::Document;

use crate::config::RPConfig;
use crate::io::output::{DirectionOutput, PackOutput};

/// Packs every rectangle of the instance into every boundary
pub fn solve_pack(ext_instance: &ExtInstance, config: &RPConfig) -> Result<(PackOutput, Document)> {
    let start = Instant::now();
    let instance = import_instance(ext_instance)?;
    if instance.templates.is_empty() {
        warn!(
            "[PACK] instance {} has no valid rectangle to pack",
            instance.name
        );
    }

    let boundaries = instance.boundary_polygons();
    let batch = pack_all(&boundaries, &instance.template_rects(), &config.pack_config)?;
    let run_time = start.elapsed();

    info!(
        "[PACK] {} placements in {} boundaries, took {}ms",
        batch.n_placements(),
        boundaries.len(),
        run_time.as_millis()
    );

    let output = PackOutput {
        instance: ext_instance.clone(),
        solution: export_pack_solution(&instance, &batch, run_time),
        config: *config,
    };
    let svg = packing_to_svg(
        &boundaries,
        &batch.outcomes,
        config.svg_draw_options,
        &instance.name,
    );

    Ok((output, svg))
}

/// Finds the major direction of every boundary of the instance
pub fn solve_direction(
    ext_instance: &ExtInstance,
    config: &RPConfig,
) -> Result<(DirectionOutput, Document)> {
    let instance = import_instance(ext_instance)?;
    let boundaries = instance.boundary_polygons();
    let directions = find_major_directions(&boundaries, config.direction_config.n_categories);

    for (i, d) in directions.iter().enumerate() {
        match d {
            Ok(angle) => info!(
                "[DIR] boundary {}: {:.3}°",
                instance.boundary_id(i),
                angle.to_degrees()
            ),
            Err(e) => warn!("[DIR] boundary {} failed: {e:#}", instance.boundary_id(i)),
        }
    }

    let output = DirectionOutput {
        instance: ext_instance.clone(),
        solution: export_direction_solution(&instance, &directions),
        config: *config,
    };
    let svg = directions_to_svg(
        &boundaries,
        &directions,
        config.svg_draw_options,
        &instance.name,
    );

    Ok((output, svg))
}
