//! Wall-clock timing of the load / optimize / save phases.
//!
//! ```ignore
//! let mut timings = TimingReport::default();
//! let timer = PhaseTimer::start(Phase::Loading);
//! let model = load_model(path)?;
//! timings.record(timer.finish());
//! ```

use std::fmt;
use std::time::{Duration, Instant};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Loading,
    Optimization,
    Serialization,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Phase::Loading => "Loading model",
            Phase::Optimization => "Model optimization",
            Phase::Serialization => "Serializing result model",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseTiming {
    pub phase: Phase,
    #[serde(rename = "millis", serialize_with = "serialize_millis")]
    pub duration: Duration,
}

fn serialize_millis<S: serde::Serializer>(duration: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u128(duration.as_millis())
}

/// Measures one phase from `start` until `finish`.
#[derive(Debug)]
pub struct PhaseTimer {
    phase: Phase,
    started: Instant,
}

impl PhaseTimer {
    pub fn start(phase: Phase) -> Self {
        tracing::debug!("{} started", phase);
        Self {
            phase,
            started: Instant::now(),
        }
    }

    /// Stop the timer and log "<phase> took <n>ms".
    pub fn finish(self) -> PhaseTiming {
        let duration = self.started.elapsed();
        tracing::info!("{} took {}ms", self.phase, duration.as_millis());
        PhaseTiming {
            phase: self.phase,
            duration,
        }
    }
}

/// Phase timings of one run, in the order they were recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimingReport {
    pub phases: Vec<PhaseTiming>,
}

impl TimingReport {
    pub fn record(&mut self, timing: PhaseTiming) {
        self.phases.push(timing);
    }

    pub fn total(&self) -> Duration {
        self.phases.iter().map(|timing| timing.duration).sum()
    }
}
