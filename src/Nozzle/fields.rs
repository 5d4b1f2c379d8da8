//! Per-grid-point profiles along the nozzle axis.

use std::ops::Index;

/// The eight quantities a nozzle run produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Coordinate,
    Pressure,
    PredictedPressure,
    CorrectedPressure,
    Temperature,
    PredictedTemperature,
    CorrectedTemperature,
    Velocity,
}

impl FieldKind {
    /// Header printed above the values of this field
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Coordinate => "X VALUES:",
            FieldKind::Pressure => "P VALUES:",
            FieldKind::PredictedPressure => "PREDICTED P VALUES:",
            FieldKind::CorrectedPressure => "CORRECTED P VALUES:",
            FieldKind::Temperature => "T VALUES:",
            FieldKind::PredictedTemperature => "PREDICTED T VALUES:",
            FieldKind::CorrectedTemperature => "CORRECTED T VALUES:",
            FieldKind::Velocity => "V VALUES:",
        }
    }

    /// Kind of the field the predictor makes out of this one
    pub fn predicted(&self) -> FieldKind {
        match self {
            FieldKind::Pressure => FieldKind::PredictedPressure,
            FieldKind::Temperature => FieldKind::PredictedTemperature,
            other => *other,
        }
    }

    /// Kind of the field the corrector makes out of this one
    pub fn corrected(&self) -> FieldKind {
        match self {
            FieldKind::Pressure => FieldKind::CorrectedPressure,
            FieldKind::Temperature => FieldKind::CorrectedTemperature,
            other => *other,
        }
    }
}

/// A named, fixed-length sequence of single precision values.
///
/// Fields are built once by the component that owns them and are read-only
/// afterwards; there is no way to resize one.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    kind: FieldKind,
    values: Vec<f32>,
}

impl Field {
    pub fn new(kind: FieldKind, values: Vec<f32>) -> Self {
        Self { kind, values }
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f32> {
        self.values.iter()
    }

    pub fn first(&self) -> Option<f32> {
        self.values.first().copied()
    }

    pub fn last(&self) -> Option<f32> {
        self.values.last().copied()
    }
}

impl Index<usize> for Field {
    type Output = f32;

    fn index(&self, i: usize) -> &f32 {
        &self.values[i]
    }
}

impl<'a> IntoIterator for &'a Field {
    type Item = &'a f32;
    type IntoIter = std::slice::Iter<'a, f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
