use regex::Regex;

/// One committed set of measurements, timestamped relative to the session
/// origin. Measurement order is first-seen order within the accumulator.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub time_ms: f64,
    pub measurements: Vec<(String, f64)>,
}

const TIME_KEY: &str = "Time";
const DELAY_KEY: &str = "Delay";

/// Turns raw telemetry lines into [`Sample`]s.
///
/// Lines look like `Gyro -- Time: 1000, X: 0.12, Y: -0.3` or
/// `Gyro, X: 0.12`. The first segment of each line is a group label that is
/// prefixed onto the measurement keys; `Time` is the reserved timestamp field
/// and `Delay` is reserved inter-message latency that is never recorded.
///
/// The accumulator persists across lines: a sample may be assembled from
/// several consecutive lines and commits once it holds more than one entry.
pub struct LineParser {
    separator: Regex,
    piece: Regex,
    number: Regex,
    accumulator: Vec<(String, f64)>,
    sample_index: u64,
    t0: Option<f64>,
    tick_interval_ms: f64,
}

impl LineParser {
    pub fn new(tick_interval_ms: f64) -> Self {
        Self {
            separator: Regex::new(r", ?| ?-- ?").expect("separator pattern"),
            piece: Regex::new(r": ?").expect("piece pattern"),
            number: Regex::new(r"[-+]?[0-9]*\.?[0-9]+").expect("number pattern"),
            accumulator: Vec::new(),
            sample_index: 0,
            t0: None,
            tick_interval_ms,
        }
    }

    /// Session origin time, fixed at the first commit.
    pub fn origin(&self) -> Option<f64> {
        self.t0
    }

    /// Number of committed samples so far.
    pub fn samples_committed(&self) -> u64 {
        self.sample_index
    }

    /// Entries currently sitting in the uncommitted accumulator.
    pub fn pending_entries(&self) -> usize {
        self.accumulator.len()
    }

    /// Feeds one raw line; returns a sample when the accumulator commits.
    /// Malformed lines contribute nothing and never fail.
    pub fn push_line(&mut self, line: &str) -> Option<Sample> {
        if line.starts_with('{') {
            return None;
        }
        let line = line.trim();
        let segments: Vec<&str> = self.separator.split(line).collect();
        // Group label is positional: the first segment verbatim, even when it
        // itself starts with a reserved keyword.
        let group = segments.first().copied().unwrap_or("");
        for segment in segments.iter().skip(1) {
            let pieces: Vec<&str> = self.piece.split(segment).collect();
            let sub_key = pieces.first().copied().unwrap_or("");
            if sub_key == DELAY_KEY {
                continue;
            }
            let fragment = pieces.last().copied().unwrap_or(sub_key);
            let Some(found) = self.number.find(fragment) else {
                continue;
            };
            let Ok(value) = found.as_str().parse::<f64>() else {
                continue;
            };
            let key = if sub_key == TIME_KEY {
                TIME_KEY.to_string()
            } else {
                format!("{group}, {sub_key}")
            };
            self.record(key, value);
        }
        self.try_commit()
    }

    fn record(&mut self, key: String, value: f64) {
        if let Some(entry) = self.accumulator.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.accumulator.push((key, value));
        }
    }

    /// Commits once the accumulator holds more than one entry, i.e. at least
    /// one real measurement beyond the timestamp.
    fn try_commit(&mut self) -> Option<Sample> {
        if self.accumulator.len() <= 1 {
            return None;
        }
        let raw = self
            .accumulator
            .iter()
            .find(|(k, _)| k == TIME_KEY)
            .map(|(_, v)| *v)
            .unwrap_or(self.sample_index as f64 * self.tick_interval_ms);
        let t0 = *self.t0.get_or_insert(raw);
        let measurements = self
            .accumulator
            .drain(..)
            .filter(|(k, _)| k != TIME_KEY)
            .collect();
        self.sample_index += 1;
        Some(Sample {
            time_ms: raw - t0,
            measurements,
        })
    }
}
