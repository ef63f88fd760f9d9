use std::path::{Path, PathBuf};

use enum_dispatch::enum_dispatch;

/// Observes the accesses a [crate::MemFS] serves.
#[enum_dispatch]
pub trait Trace {
    fn on_read(&mut self, path: &Path);
    fn on_read_nonexist(&mut self, path: &Path);
    fn on_write(&mut self, path: &Path, last_content: Option<&str>);
}

#[enum_dispatch(Trace)]
#[derive(Debug)]
pub enum Tracer {
    NoopTracer,
    RecordingTracer,
}

impl Default for Tracer {
    fn default() -> Self {
        Self::NoopTracer(Default::default())
    }
}

impl Tracer {
    pub fn recording() -> Self {
        Self::RecordingTracer(Default::default())
    }
    /// Events seen so far. Always empty for [NoopTracer].
    pub fn events(&self) -> &[TraceEvent] {
        match self {
            Self::NoopTracer(_) => &[],
            Self::RecordingTracer(r) => &r.events,
        }
    }
    pub fn writes(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, TraceEvent::Write { .. }))
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    Read(PathBuf),
    ReadNonexist(PathBuf),
    Write { path: PathBuf, overwrote: bool },
}

#[derive(Debug, Default)]
pub struct NoopTracer;
impl Trace for NoopTracer {
    fn on_read(&mut self, _path: &Path) {}

    fn on_read_nonexist(&mut self, _path: &Path) {}

    fn on_write(&mut self, _path: &Path, _last_content: Option<&str>) {}
}

#[derive(Debug, Default)]
pub struct RecordingTracer {
    events: Vec<TraceEvent>,
}
impl Trace for RecordingTracer {
    fn on_read(&mut self, path: &Path) {
        self.events.push(TraceEvent::Read(path.to_path_buf()));
    }

    fn on_read_nonexist(&mut self, path: &Path) {
        self.events.push(TraceEvent::ReadNonexist(path.to_path_buf()));
    }

    fn on_write(&mut self, path: &Path, last_content: Option<&str>) {
        self.events.push(TraceEvent::Write {
            path: path.to_path_buf(),
            overwrote: last_content.is_some(),
        });
    }
}
