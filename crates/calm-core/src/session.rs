//! Breathing-break countdown.
//!
//! A session counts down once per second from `break_seconds` to zero. The
//! skip button stays locked for the first `skip_lock_ticks` ticks; the done
//! button is enabled and honoured for the whole session.

use crate::config::WidgetConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    Finished,
}

/// Why a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    Completed,
    Skipped,
    Done,
}

#[derive(Clone, Debug)]
pub struct BreakSession {
    total: u32,
    remaining: u32,
    lock_remaining: u32,
    ended: Option<EndReason>,
}

impl BreakSession {
    pub fn new(total_seconds: u32, skip_lock_ticks: u32) -> Self {
        let total = total_seconds.max(1);
        Self {
            total,
            remaining: total,
            lock_remaining: skip_lock_ticks.min(total),
            ended: None,
        }
    }

    pub fn from_config(cfg: &WidgetConfig) -> Self {
        Self::new(cfg.break_seconds, cfg.skip_lock_ticks)
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn lock_remaining(&self) -> u32 {
        self.lock_remaining
    }

    pub fn is_running(&self) -> bool {
        self.ended.is_none()
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.ended
    }

    pub fn can_skip(&self) -> bool {
        self.is_running() && self.lock_remaining == 0
    }

    /// Whether the done button may end the session; never locked.
    pub fn can_finish(&self) -> bool {
        self.is_running()
    }

    /// Text for the skip button, e.g. `Skip (7)`.
    pub fn skip_label(&self) -> String {
        format!("Skip ({})", self.lock_remaining)
    }

    /// Elapsed share of the break in percent, 0 at start and 100 at the end.
    pub fn progress_percent(&self) -> f64 {
        100.0 - (self.remaining as f64 / self.total as f64) * 100.0
    }

    /// CSS value for the progress meter's `--p` property.
    pub fn progress_css(&self) -> String {
        format!("{}%", self.progress_percent())
    }

    /// Advance one second. Ticking an ended session reports `Finished`
    /// without changing anything.
    pub fn tick(&mut self) -> TickOutcome {
        if self.ended.is_some() {
            return TickOutcome::Finished;
        }
        self.remaining = self.remaining.saturating_sub(1);
        self.lock_remaining = self.lock_remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.ended = Some(EndReason::Completed);
            TickOutcome::Finished
        } else {
            TickOutcome::Running
        }
    }

    /// Request an early end through the skip button. Refused while locked.
    pub fn skip(&mut self) -> bool {
        if self.ended.is_some() || !self.can_skip() {
            return false;
        }
        self.ended = Some(EndReason::Skipped);
        true
    }

    /// End through the done button; accepted whenever the session runs.
    pub fn done(&mut self) -> bool {
        if self.ended.is_some() {
            return false;
        }
        self.ended = Some(EndReason::Done);
        true
    }
}
