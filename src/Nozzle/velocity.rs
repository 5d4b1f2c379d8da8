//! Velocity profile from coordinates and corrected temperature.

use super::fields::{Field, FieldKind};

/// `V_i = (0.1 + 1.09·x_i)·T'_i^0.5`
///
/// A negative corrected temperature gives `NaN` at that point. The value is kept
/// as it is; callers that care look for it in `NozzleSolution::anomalies`.
///
/// # Panics
/// If the two fields have different lengths.
pub fn derive_velocity(coord: &Field, corrected_temp: &Field) -> Field {
    assert_eq!(
        coord.len(),
        corrected_temp.len(),
        "coordinate and temperature fields have different lengths"
    );
    let values = coord
        .iter()
        .zip(corrected_temp.iter())
        .map(|(&x, &t)| ((0.1 + 1.09 * x as f64) * (t as f64).powf(0.5)) as f32)
        .collect();
    Field::new(FieldKind::Velocity, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_velocity_values() {
        let coord = Field::new(FieldKind::Coordinate, vec![0.0, 0.5, 1.0]);
        let temp = Field::new(FieldKind::CorrectedTemperature, vec![1.0, 0.64, 0.25]);
        let v = derive_velocity(&coord, &temp);
        assert_eq!(v.kind(), FieldKind::Velocity);
        assert_relative_eq!(v[0], 0.1, epsilon = 1e-6);
        assert_relative_eq!(v[1], 0.645 * 0.8, epsilon = 1e-6);
        assert_relative_eq!(v[2], 1.19 * 0.5, epsilon = 1e-6);
    }

    #[test]
    #[should_panic]
    fn test_mismatched_lengths_panic() {
        let coord = Field::new(FieldKind::Coordinate, vec![0.0, 0.5, 1.0]);
        let temp = Field::new(FieldKind::CorrectedTemperature, vec![1.0, 0.64]);
        let _ = derive_velocity(&coord, &temp);
    }

    #[test]
    fn test_negative_temperature_gives_nan() {
        let coord = Field::new(FieldKind::Coordinate, vec![0.0, 0.25, 0.5]);
        let temp = Field::new(FieldKind::CorrectedTemperature, vec![1.0, -0.3, 0.81]);
        let v = derive_velocity(&coord, &temp);
        assert!(v[0].is_finite());
        assert!(v[1].is_nan());
        assert!(v[2].is_finite());
    }
}
