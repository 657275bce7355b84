use teleplot_core::{Axis, RenderSurface, Rgb, SeriesHandle};

/// Render surface for headless runs: series registrations and title changes
/// go to the log, draw calls are dropped.
#[derive(Default)]
pub struct LogSurface {
    series: Vec<String>,
}

impl LogSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSurface for LogSurface {
    fn create_series(&mut self, name: &str) -> SeriesHandle {
        let handle = SeriesHandle(self.series.len());
        self.series.push(name.to_string());
        log::info!("discovered series {name:?}");
        handle
    }

    fn set_series_color(&mut self, _handle: SeriesHandle, _color: Rgb) {}

    fn set_series_data(&mut self, _handle: SeriesHandle, _times: &[f64], _values: &[f64]) {}

    fn set_axis_range(&mut self, _axis: Axis, _min: f64, _max: f64) {}

    fn show_legend_entry(&mut self, _handle: SeriesHandle, _name: &str) {}

    fn set_title(&mut self, text: &str) {
        log::info!("session: {text}");
    }
}
