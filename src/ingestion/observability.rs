use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::AnalysisError;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AnalysisSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (analysis failed).
    Error,
    /// Critical error (the source could not be read).
    Critical,
}

impl AnalysisSeverity {
    /// Severity of a failed analysis: source read failures are critical, everything else is an
    /// ordinary error.
    pub fn for_error(error: &AnalysisError) -> Self {
        match error {
            AnalysisError::Io(_) => AnalysisSeverity::Critical,
            AnalysisError::Csv(err) => match err.kind() {
                ::csv::ErrorKind::Io(_) => AnalysisSeverity::Critical,
                _ => AnalysisSeverity::Error,
            },
            _ => AnalysisSeverity::Error,
        }
    }
}

/// Context about one analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisContext {
    /// Where the lines came from (a path, or a label such as `"<lines>"`).
    pub source: String,
    /// Region requested by the caller, as given.
    pub region: String,
}

/// Stats reported on a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisStats {
    /// Input rows, header included.
    pub input_rows: usize,
    /// Rows left after header removal, deduplication and region filtering.
    pub shaped_rows: usize,
}

/// Observer interface for analysis outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait AnalysisObserver: Send + Sync {
    /// Called when the analysis succeeds.
    fn on_success(&self, _ctx: &AnalysisContext, _stats: AnalysisStats) {}

    /// Called when the analysis fails.
    fn on_failure(&self, _ctx: &AnalysisContext, _severity: AnalysisSeverity, _error: &AnalysisError) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &AnalysisContext, severity: AnalysisSeverity, error: &AnalysisError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn AnalysisObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn AnalysisObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl AnalysisObserver for CompositeObserver {
    fn on_success(&self, ctx: &AnalysisContext, stats: AnalysisStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &AnalysisContext, severity: AnalysisSeverity, error: &AnalysisError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &AnalysisContext, severity: AnalysisSeverity, error: &AnalysisError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Logs analysis events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl AnalysisObserver for StdErrObserver {
    fn on_success(&self, ctx: &AnalysisContext, stats: AnalysisStats) {
        eprintln!(
            "[analyze][{}] ok shaped_rows={}/{} source={}",
            ctx.region, stats.shaped_rows, stats.input_rows, ctx.source
        );
    }

    fn on_failure(&self, ctx: &AnalysisContext, severity: AnalysisSeverity, error: &AnalysisError) {
        eprintln!(
            "[analyze][{}] {:?}: {} (source={})",
            ctx.region, severity, error, ctx.source
        );
    }

    fn on_alert(&self, ctx: &AnalysisContext, severity: AnalysisSeverity, error: &AnalysisError) {
        eprintln!(
            "[ALERT][analyze][{}] {:?}: {} (source={})",
            ctx.region, severity, error, ctx.source
        );
    }
}

/// Appends analysis events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    /// One line per event: region and outcome first, then details, then where the rows came from.
    fn record(&self, ctx: &AnalysisContext, outcome: &str, detail: &str) {
        self.append_line(&format!(
            "region={} {outcome} {detail} source={} at={}",
            ctx.region,
            ctx.source,
            unix_ts()
        ));
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl AnalysisObserver for FileObserver {
    fn on_success(&self, ctx: &AnalysisContext, stats: AnalysisStats) {
        self.record(
            ctx,
            "ok",
            &format!("shaped_rows={}/{}", stats.shaped_rows, stats.input_rows),
        );
    }

    fn on_failure(&self, ctx: &AnalysisContext, severity: AnalysisSeverity, error: &AnalysisError) {
        self.record(ctx, "failed", &format!("severity={severity:?} err=\"{error}\""));
    }

    fn on_alert(&self, ctx: &AnalysisContext, severity: AnalysisSeverity, error: &AnalysisError) {
        self.record(ctx, "ALERT", &format!("severity={severity:?} err=\"{error}\""));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
