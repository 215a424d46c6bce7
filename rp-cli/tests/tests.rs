#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use std::path::Path;

    use float_cmp::approx_eq;
    use test_case::test_case;

    use rect_pack::geometry::geo_enums::PointContainment;
    use rect_pack::io::ext_repr::ExtInstance;
    use rect_pack::io::import::{import_rectangle, import_simple_polygon};
    use rect_pack::util::PackConfig;
    use rp_cli::config::RPConfig;
    use rp_cli::io;
    use rp_cli::io::output::PackOutput;
    use rp_cli::solve::{solve_direction, solve_pack};

    fn read_instance(path: &str) -> ExtInstance {
        let _ = env_logger::builder().is_test(true).try_init();
        io::read_json(Path::new(path)).unwrap()
    }

    /// Default configuration on a grid offset along the footprint, which keeps the anchors
    /// from running off the assets' boundaries
    fn aligned_config() -> RPConfig {
        RPConfig {
            pack_config: PackConfig {
                axis_aligned: true,
                ..PackConfig::default()
            },
            ..RPConfig::default()
        }
    }

    #[test_case("../assets/square.json"; "square")]
    #[test_case("../assets/l_shape.json"; "l_shape")]
    #[test_case("../assets/mixed.json"; "mixed")]
    fn pack_instance(instance_path: &str) {
        let ext_instance = read_instance(instance_path);
        let config = aligned_config();
        let (output, svg) = solve_pack(&ext_instance, &config).unwrap();

        let solution = &output.solution;
        assert!(!solution.placements.is_empty());
        assert!(solution.failures.is_empty());

        for p in &solution.placements {
            let boundary = import_simple_polygon(&ext_instance.boundaries[p.boundary]).unwrap();
            let rect = import_rectangle(&p.rectangle).unwrap();
            for corner in rect.corners() {
                assert_eq!(
                    boundary.containment(&corner, config.pack_config.containment_tolerance),
                    PointContainment::Inside
                );
            }
        }
        assert!(svg.to_string().contains("<svg"));
    }

    #[test]
    fn invalid_shapes_do_not_stop_the_run() {
        let ext_instance = read_instance("../assets/mixed.json");
        let (output, _) = solve_pack(&ext_instance, &aligned_config()).unwrap();

        //boundary 1 is a segment, it is skipped on import
        let used = output
            .solution
            .placements
            .iter()
            .map(|p| p.boundary)
            .collect::<Vec<_>>();
        assert!(!used.contains(&1));
        assert!(used.contains(&0));
        assert!(used.contains(&3));
    }

    #[test_case("../assets/square.json"; "square")]
    #[test_case("../assets/l_shape.json"; "l_shape")]
    #[test_case("../assets/mixed.json"; "mixed")]
    fn direction_instance(instance_path: &str) {
        let ext_instance = read_instance(instance_path);
        let (output, svg) = solve_direction(&ext_instance, &RPConfig::default()).unwrap();

        for d in &output.solution.directions {
            assert!((0.0..PI).contains(&d.angle));
            assert!(approx_eq!(f64, d.angle.to_degrees(), d.angle_deg, ulps = 2));
        }
        assert!(svg.to_string().contains("major direction"));
    }

    #[test]
    fn clockwise_rectangle_points_along_x() {
        let ext_instance = read_instance("../assets/mixed.json");
        let (output, _) = solve_direction(&ext_instance, &RPConfig::default()).unwrap();

        let directions = &output.solution.directions;
        //the segment boundary is skipped on import
        assert_eq!(directions.len(), 3);
        let rectangle = directions.iter().find(|d| d.boundary == 3).unwrap();
        assert_eq!(rectangle.angle, 0.0);
    }

    #[test]
    fn output_roundtrips_through_json() {
        let ext_instance = read_instance("../assets/l_shape.json");
        let config = aligned_config();
        let (output, _) = solve_pack(&ext_instance, &config).unwrap();

        let path = std::env::temp_dir().join("rp_cli_sol_l_shape.json");
        io::write_json(&output, &path).unwrap();
        let parsed: PackOutput = io::read_json(&path).unwrap();

        assert_eq!(parsed.instance.name, "l_shape");
        assert_eq!(parsed.solution.placements.len(), output.solution.placements.len());
        for (a, b) in parsed.solution.placements.iter().zip(&output.solution.placements) {
            assert_eq!(a.boundary, b.boundary);
            assert!(approx_eq!(f64, a.anchor.0, b.anchor.0, ulps = 2));
            assert!(approx_eq!(f64, a.anchor.1, b.anchor.1, ulps = 2));
        }
    }
}
