//! Plain data row types written by output backends.

use ix_admission::CompletionRecord;

/// One finished vehicle lifecycle, flattened for persistence.
///
/// Timestamps are simulation seconds.  The three optional columns are
/// genuinely nullable at this boundary; sinks must not invent zeros.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionRow {
    pub vehicle_id:      u32,
    pub arrival_secs:    f64,
    pub permission_secs: Option<f64>,
    pub enter_secs:      Option<f64>,
    pub exit_secs:       Option<f64>,
}

impl From<&CompletionRecord> for CompletionRow {
    fn from(rec: &CompletionRecord) -> Self {
        Self {
            vehicle_id:      rec.id.0,
            arrival_secs:    rec.arrival_time.secs(),
            permission_secs: rec.permission_time.map(|t| t.secs()),
            enter_secs:      rec.enter_time.map(|t| t.secs()),
            exit_secs:       rec.exit_time.map(|t| t.secs()),
        }
    }
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:          u64,
    pub sim_time_secs: f64,
    /// Vehicles tracked by the scheduler after this tick's update.
    pub tracked:       u64,
    /// Vehicles holding permission after this tick's update.
    pub active:        u64,
}
