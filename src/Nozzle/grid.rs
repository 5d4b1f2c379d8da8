//! Grid coordinates along the nozzle axis.
//!
//! The grid is a fixed-increment ramp: it starts at the left boundary and adds
//! `right / (n - 1)` at every point. With a non-zero left boundary the last point
//! is `left + right`, not `right`. Downstream values depend on this exact
//! recurrence, so it is not replaced by an interpolating linspace.

use super::fields::{Field, FieldKind};
use super::nozzle_task::NozzleError;
use log::debug;

/// Builds the coordinate field for `n` grid points.
///
/// # Returns
/// * `Ok(Field)` - coordinates of kind `FieldKind::Coordinate`
/// * `Err(NozzleError::InvalidGridSize)` - for `n <= 1`, before anything is allocated
pub fn build_grid(left: f32, right: f32, n: i32) -> Result<Field, NozzleError> {
    if n <= 1 {
        return Err(NozzleError::InvalidGridSize(n));
    }
    let n = n as usize;
    let increment = right / (n - 1) as f32;
    debug!("grid: {} points, increment {}", n, increment);

    let mut coord = Vec::with_capacity(n);
    coord.push(left);
    for i in 1..n {
        coord.push(coord[i - 1] + increment);
    }
    Ok(Field::new(FieldKind::Coordinate, coord))
}
