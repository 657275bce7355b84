use crate::process::ProcessControl;
use channel::SampleQueue;
use std::sync::Arc;
use teleplot_core::{
    palette_color, Axis, RenderSurface, Sample, SeriesHandle, SeriesStore, SessionContext,
    SessionState,
};

/// Orchestrates one render tick: drain the queue, aggregate into the series
/// store, autoscale, redraw, then run the timeout check. Owns all session
/// state; the render surface is only ever called from here.
pub struct TickDriver {
    ctx: SessionContext,
    store: SeriesStore,
    queue: Arc<dyn SampleQueue<Sample>>,
    process: Box<dyn ProcessControl>,
    script_label: String,
    handles: Vec<SeriesHandle>,
    legend_shown: usize,
    published_state: Option<SessionState>,
}

impl TickDriver {
    pub fn new(
        ctx: SessionContext,
        queue: Arc<dyn SampleQueue<Sample>>,
        process: Box<dyn ProcessControl>,
        script_label: impl Into<String>,
    ) -> Self {
        Self {
            ctx,
            store: SeriesStore::new(),
            queue,
            process,
            script_label: script_label.into(),
            handles: Vec::new(),
            legend_shown: 0,
            published_state: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.ctx.state()
    }

    /// Window/session title: current state name plus the script, so liveness
    /// is observable at a glance.
    pub fn title(&self) -> String {
        format!("{} {}", self.ctx.state().label(), self.script_label)
    }

    pub fn tick(&mut self, surface: &mut dyn RenderSurface) {
        let drained = self.drain(surface);

        // Legend entries are revealed only once the session is live; entries
        // for series discovered while still warming up appear on the RUN
        // transition.
        if self.ctx.state() == SessionState::Run {
            for idx in self.legend_shown..self.handles.len() {
                surface.show_legend_entry(self.handles[idx], self.store.name(idx));
            }
            self.legend_shown = self.handles.len();
        }

        if let Some(bounds) = self.store.time_bounds() {
            surface.set_axis_range(Axis::Time, bounds.min, bounds.max);
        }
        if let Some(bounds) = self.store.value_bounds() {
            surface.set_axis_range(Axis::Value, bounds.min, bounds.max);
        }

        for (idx, handle) in self.handles.iter().enumerate() {
            let buffer = self.store.buffer(idx);
            surface.set_series_data(*handle, &buffer.times, &buffer.values);
        }

        let child_exited = !self.process.is_alive();
        if self.ctx.finish_tick(drained > 0, child_exited) {
            self.process.terminate();
        }
        self.sync_title(surface);
    }

    /// Non-blocking drain of everything currently queued. New series are
    /// registered with the surface and the palette is re-spread over the new
    /// series count.
    fn drain(&mut self, surface: &mut dyn RenderSurface) -> usize {
        let mut drained = 0;
        while let Ok(Some(sample)) = self.queue.try_pop() {
            drained += 1;
            self.ctx.note_sample_drained();
            for idx in self.store.append(&sample) {
                let handle = surface.create_series(self.store.name(idx));
                self.handles.push(handle);
                let count = self.store.len();
                for (i, existing) in self.handles.iter().enumerate() {
                    surface.set_series_color(*existing, palette_color(i, count));
                }
            }
        }
        drained
    }

    fn sync_title(&mut self, surface: &mut dyn RenderSurface) {
        let state = self.ctx.state();
        if self.published_state != Some(state) {
            surface.set_title(&self.title());
            self.published_state = Some(state);
        }
    }

    /// Terminates the child if it is still running. Used on window close.
    pub fn shutdown(&mut self) {
        self.process.terminate();
    }
}
