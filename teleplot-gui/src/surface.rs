use egui::Color32;
use egui_plot::{Legend, Line, Plot, PlotBounds, PlotPoints};
use teleplot_core::{Axis, RenderSurface, Rgb, SeriesHandle};

struct PlotSeries {
    name: String,
    color: Color32,
    points: Vec<[f64; 2]>,
    legend: bool,
}

/// egui-side implementation of the render surface. The tick driver writes
/// series data, axis ranges and the title here; `render` replays the current
/// snapshot into one locked-interaction plot.
#[derive(Default)]
pub(crate) struct PlotSurface {
    series: Vec<PlotSeries>,
    time_range: Option<(f64, f64)>,
    value_range: Option<(f64, f64)>,
    title: String,
    title_dirty: bool,
}

impl PlotSurface {
    /// Window title pending application, if the state changed this tick.
    pub(crate) fn take_title(&mut self) -> Option<String> {
        if self.title_dirty {
            self.title_dirty = false;
            Some(self.title.clone())
        } else {
            None
        }
    }

    pub(crate) fn render(&self, ui: &mut egui::Ui) {
        let mut plot = Plot::new("telemetry")
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_boxed_zoom(false)
            .allow_drag(false)
            .x_axis_label("Time (ms)")
            .y_axis_label("Value");

        if self.series.iter().any(|series| series.legend) {
            plot = plot.legend(Legend::default());
        }

        plot.show(ui, |plot_ui| {
            for series in &self.series {
                if series.points.is_empty() {
                    continue;
                }
                let points: PlotPoints = series.points.clone().into();
                let mut line = Line::new(points).color(series.color);
                if series.legend {
                    line = line.name(&series.name);
                }
                plot_ui.line(line);
            }

            // A zero-span axis keeps its previous bounds for the tick.
            let current = plot_ui.plot_bounds();
            let (tmin, tmax) = self
                .time_range
                .unwrap_or((current.min()[0], current.max()[0]));
            let (vmin, vmax) = self
                .value_range
                .unwrap_or((current.min()[1], current.max()[1]));
            if tmin.is_finite() && vmin.is_finite() {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max([tmin, vmin], [tmax, vmax]));
            }
        });
    }
}

impl RenderSurface for PlotSurface {
    fn create_series(&mut self, name: &str) -> SeriesHandle {
        let handle = SeriesHandle(self.series.len());
        self.series.push(PlotSeries {
            name: name.to_string(),
            color: Color32::WHITE,
            points: Vec::new(),
            legend: false,
        });
        handle
    }

    fn set_series_color(&mut self, handle: SeriesHandle, color: Rgb) {
        if let Some(series) = self.series.get_mut(handle.0) {
            series.color = Color32::from_rgb(color.0, color.1, color.2);
        }
    }

    fn set_series_data(&mut self, handle: SeriesHandle, times: &[f64], values: &[f64]) {
        if let Some(series) = self.series.get_mut(handle.0) {
            series.points = times
                .iter()
                .zip(values.iter())
                .map(|(t, v)| [*t, *v])
                .collect();
        }
    }

    fn set_axis_range(&mut self, axis: Axis, min: f64, max: f64) {
        match axis {
            Axis::Time => self.time_range = Some((min, max)),
            Axis::Value => self.value_range = Some((min, max)),
        }
    }

    fn show_legend_entry(&mut self, handle: SeriesHandle, _name: &str) {
        if let Some(series) = self.series.get_mut(handle.0) {
            series.legend = true;
        }
    }

    fn set_title(&mut self, text: &str) {
        self.title = text.to_string();
        self.title_dirty = true;
    }
}
