use crate::parse::Sample;
use std::collections::HashMap;

const AXIS_MARGIN: f64 = 0.05;

/// Append-only time/value pair buffer; indices stay aligned 1:1.
#[derive(Debug, Default, Clone)]
pub struct SeriesBuffer {
    pub times: Vec<f64>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

/// One growable buffer per discovered series name. First-seen order is fixed
/// for the session and determines render, legend and color order.
#[derive(Default)]
pub struct SeriesStore {
    names: Vec<String>,
    buffers: Vec<SeriesBuffer>,
    index: HashMap<String, usize>,
}

impl SeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, idx: usize) -> &str {
        &self.names[idx]
    }

    pub fn buffer(&self, idx: usize) -> &SeriesBuffer {
        &self.buffers[idx]
    }

    /// Appends every measurement of the sample, creating buffers for names
    /// seen for the first time. Returns the indices of newly created series
    /// so the caller can register them with the render surface.
    pub fn append(&mut self, sample: &Sample) -> Vec<usize> {
        let mut created = Vec::new();
        for (name, value) in &sample.measurements {
            let idx = match self.index.get(name) {
                Some(idx) => *idx,
                None => {
                    let idx = self.names.len();
                    self.names.push(name.clone());
                    self.buffers.push(SeriesBuffer::default());
                    self.index.insert(name.clone(), idx);
                    created.push(idx);
                    idx
                }
            };
            self.buffers[idx].times.push(sample.time_ms);
            self.buffers[idx].values.push(*value);
        }
        created
    }

    /// Global time range across all series with a 5% margin each side.
    /// `None` when the store is empty or the raw span is exactly zero; a
    /// zero-span tick leaves the axis unchanged rather than collapsing the
    /// viewport.
    pub fn time_bounds(&self) -> Option<AxisBounds> {
        margined_bounds(self.buffers.iter().map(|buf| buf.times.as_slice()))
    }

    /// Global value range across all series, same margin and zero-span rule.
    pub fn value_bounds(&self) -> Option<AxisBounds> {
        margined_bounds(self.buffers.iter().map(|buf| buf.values.as_slice()))
    }
}

fn margined_bounds<'a>(sequences: impl Iterator<Item = &'a [f64]>) -> Option<AxisBounds> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for sequence in sequences {
        for value in sequence {
            min = min.min(*value);
            max = max.max(*value);
        }
    }
    let span = max - min;
    if !span.is_finite() || span == 0.0 {
        return None;
    }
    Some(AxisBounds {
        min: min - span * AXIS_MARGIN,
        max: max + span * AXIS_MARGIN,
    })
}
