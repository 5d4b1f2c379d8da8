//! Initial pressure and temperature profiles.
//!
//! Both are straight lines in `x`. The products are formed in double precision and
//! stored as `f32`, which keeps the rounding of the reference values.

use super::fields::{Field, FieldKind};

const PRESSURE_SLOPE: f64 = 0.3146;
const TEMPERATURE_SLOPE: f64 = 0.2314;

fn linear_profile(coord: &Field, slope: f64, kind: FieldKind) -> Field {
    let values = coord
        .iter()
        .map(|&x| (1.0 - slope * x as f64) as f32)
        .collect();
    Field::new(kind, values)
}

/// `P(x) = 1 - 0.3146·x`
pub fn derive_pressure(coord: &Field) -> Field {
    linear_profile(coord, PRESSURE_SLOPE, FieldKind::Pressure)
}

/// `T(x) = 1 - 0.2314·x`
pub fn derive_temperature(coord: &Field) -> Field {
    linear_profile(coord, TEMPERATURE_SLOPE, FieldKind::Temperature)
}
