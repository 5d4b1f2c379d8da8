#[cfg(test)]
mod tests {
    use crate::Nozzle::fields::FieldKind;
    use crate::Nozzle::grid::build_grid;
    use crate::Nozzle::initial_fields::{derive_pressure, derive_temperature};
    use crate::Nozzle::maccormack::MacCormackStepper;
    use crate::Nozzle::nozzle_output::{format_field, write_report};
    use crate::Nozzle::nozzle_solver::{NozzleSolver, solve_nozzle};
    use crate::Nozzle::nozzle_task::{NozzleError, NozzleInput};
    use approx::assert_relative_eq;

    fn assert_all_close(got: &[f32], expected: &[f32], eps: f32) {
        assert_eq!(got.len(), expected.len());
        for (g, e) in got.iter().zip(expected.iter()) {
            assert_relative_eq!(*g, *e, epsilon = eps);
        }
    }

    /// a = 100, dt = 1, dx = 0.1 drives corrected temperature at index 1 far below zero
    fn unstable_input() -> NozzleInput {
        NozzleInput::new(0.0, 1.0, 5, 100.0, 1.0, 0.1)
    }

    #[test]
    fn test_unit_grid_and_pressure() {
        let coord = build_grid(0.0, 1.0, 5).unwrap();
        assert_all_close(coord.values(), &[0.0, 0.25, 0.5, 0.75, 1.0], 1e-7);
        let p = derive_pressure(&coord);
        assert_all_close(p.values(), &[1.0, 0.92135, 0.8427, 0.76405, 0.6854], 1e-6);
    }

    #[test]
    fn test_reference_run() {
        let solution = solve_nozzle(&NozzleInput::default()).unwrap();
        assert_all_close(
            solution.predicted_pressure.values(),
            &[1.0, 0.922923, 0.844273, 0.765623, 0.6854],
            1e-5,
        );
        assert_all_close(
            solution.corrected_pressure.values(),
            &[1.0, 0.923694, 0.845060, 0.766425, 0.6854],
            1e-5,
        );
        assert_all_close(
            solution.corrected_temperature.values(),
            &[1.0, 0.943874, 0.886036, 0.828197, 0.7686],
            1e-5,
        );
        assert_all_close(
            solution.velocity.values(),
            &[0.1, 0.361896, 0.607135, 0.834974, 1.043271],
            1e-5,
        );
        assert!(!solution.has_anomalies());
    }

    #[test]
    fn test_minimal_grid_is_boundary_passthrough() {
        let input = NozzleInput::new(0.0, 1.0, 2, 3.0, 0.5, 0.1);
        let solution = NozzleSolver::new(input).solve().unwrap();
        assert_eq!(solution.coordinate.values(), &[0.0, 1.0]);
        assert_eq!(
            solution.predicted_pressure.values(),
            solution.pressure.values()
        );
        assert_eq!(
            solution.corrected_pressure.values(),
            solution.pressure.values()
        );
        assert_eq!(
            solution.predicted_temperature.values(),
            solution.temperature.values()
        );
        assert_eq!(
            solution.corrected_temperature.values(),
            solution.temperature.values()
        );
    }

    #[test]
    fn test_single_point_grid_is_rejected() {
        let mut input = NozzleInput::default();
        input.grid_point_count = 1;
        match solve_nozzle(&input) {
            Err(NozzleError::InvalidGridSize(1)) => {}
            other => panic!("expected InvalidGridSize(1), got {:?}", other),
        }
    }

    #[test]
    fn test_boundaries_survive_any_coefficients() {
        for (a, dt, dx) in [(0.5, 0.01, 0.25), (100.0, 1.0, 0.1), (-3.0, 0.2, 0.05)] {
            let input = NozzleInput::new(0.2, 1.5, 8, a, dt, dx);
            let s = solve_nozzle(&input).unwrap();
            for (source, derived) in [
                (&s.pressure, &s.predicted_pressure),
                (&s.pressure, &s.corrected_pressure),
                (&s.temperature, &s.predicted_temperature),
                (&s.temperature, &s.corrected_temperature),
            ] {
                assert_eq!(derived.first(), source.first());
                assert_eq!(derived.last(), source.last());
            }
        }
    }

    #[test]
    fn test_same_stepper_for_pressure_and_temperature() {
        let input = NozzleInput::new(0.0, 2.0, 9, 0.7, 0.05, 0.2);
        let solution = solve_nozzle(&input).unwrap();
        let coord = build_grid(0.0, 2.0, 9).unwrap();
        let stepper = MacCormackStepper::from_input(&input);
        let (_, corr_p) = stepper.step(&derive_pressure(&coord));
        let (_, corr_t) = stepper.step(&derive_temperature(&coord));
        assert_eq!(corr_p, solution.corrected_pressure);
        assert_eq!(corr_t, solution.corrected_temperature);
    }

    #[test]
    fn test_negative_temperature_nan_reaches_report() {
        let solution = solve_nozzle(&unstable_input()).unwrap();
        assert!(solution.corrected_temperature[1] < 0.0);
        assert!(solution.velocity[1].is_nan());
        assert!(solution.velocity[2].is_finite());

        assert_eq!(solution.anomalies.len(), 1);
        let anomaly = solution.anomalies[0];
        assert_eq!(anomaly.field, FieldKind::Velocity);
        assert_eq!(anomaly.index, 1);
        assert!(anomaly.value.is_nan());
        assert!(solution.field(anomaly.field)[anomaly.index].is_nan());

        let velocity_report = format_field(&solution.velocity);
        let values: Vec<&str> = velocity_report
            .lines()
            .nth(1)
            .unwrap()
            .split(' ')
            .collect();
        assert_eq!(values.len(), 5);
        assert_eq!(values[0], "0.100");
        assert_eq!(values[1], "NaN");

        let mut buf = Vec::new();
        write_report(&solution, &mut buf).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("NaN"));
    }

    #[test]
    fn test_non_finite_corrected_temperature_is_recorded() {
        // a·dt/dx overflows f32, the stencil produces inf - inf
        let input = NozzleInput::new(0.0, 1.0, 5, 1e30, 1e10, 1e-10);
        let solution = solve_nozzle(&input).unwrap();
        let t = &solution.corrected_temperature;
        assert_eq!(t[0], 1.0);
        assert!(t[1].is_nan());
        assert!(t[2].is_nan());
        assert_eq!(t[3], f32::INFINITY);
        assert_relative_eq!(t[4], 0.7686, epsilon = 1e-6);

        let kinds: Vec<(FieldKind, usize)> = solution
            .anomalies
            .iter()
            .map(|a| (a.field, a.index))
            .collect();
        assert_eq!(
            kinds,
            vec![
                (FieldKind::CorrectedTemperature, 1),
                (FieldKind::CorrectedTemperature, 2),
                (FieldKind::CorrectedTemperature, 3),
                (FieldKind::Velocity, 1),
                (FieldKind::Velocity, 2),
                (FieldKind::Velocity, 3),
            ]
        );

        let report = format_field(t);
        let mut lines = report.lines();
        assert_eq!(lines.next(), Some("CORRECTED T VALUES:"));
        assert_eq!(lines.next(), Some("1.000 NaN NaN inf 0.769"));
    }

    #[test]
    fn test_shifted_grid_overshoots_right_boundary() {
        let input = NozzleInput::new(1.0, 1.0, 3, 0.5, 0.01, 0.25);
        let solution = solve_nozzle(&input).unwrap();
        assert_all_close(solution.coordinate.values(), &[1.0, 1.5, 2.0], 1e-7);
    }
}
