//! Gravity scheduling policy
//!
//! The core never owns a timer. It hands out [`GravityTicket`]s, each tagged with the level it
//! was scheduled under, and the driver's timer fires them back into
//! [`Board::tick`](crate::board::Board::tick).
//!
//! A level change schedules a new, faster ticket. The old ticket is then stale: when it fires
//! it must not move the piece and must not be re-armed, otherwise the piece would fall at both
//! speeds at once.

use std::time::Duration;

use crate::scoring::gravity_interval;
use crate::types::{GRAVITY_BASE_MS, GRAVITY_LEVEL_OFFSET};

/// Tuning for the gravity interval, `base / (level + level_offset)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GravityConfig {
    pub base: Duration,
    pub level_offset: u32,
}

impl GravityConfig {
    pub fn new(base: Duration, level_offset: u32) -> Self {
        Self { base, level_offset }
    }

    pub fn interval(&self, level: u32) -> Duration {
        gravity_interval(self.base, level, self.level_offset)
    }
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            base: Duration::from_millis(GRAVITY_BASE_MS),
            level_offset: GRAVITY_LEVEL_OFFSET,
        }
    }
}

/// A periodic gravity tick, tagged with the level it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GravityTicket {
    level: u32,
    interval: Duration,
}

impl GravityTicket {
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Time between two firings of this ticket
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether this ticket still belongs to a board at `level`
    pub fn is_current_for(&self, level: u32) -> bool {
        self.level == level
    }
}

/// What the timer should do with a ticket that just fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tick applied gravity; fire again after the ticket's interval.
    Rearm,
    /// The ticket is stale (or the game ended). Drop it without re-arming.
    Superseded,
}

/// Issues gravity tickets for the board to hand to the driver
#[derive(Debug, Clone)]
pub struct GravityScheduler {
    config: GravityConfig,
    pending: Option<GravityTicket>,
}

impl GravityScheduler {
    pub fn new(config: GravityConfig) -> Self {
        Self {
            config,
            pending: None,
        }
    }

    /// Schedule a ticket for `level`.
    ///
    /// The ticket waits in the pending slot until the driver takes it. Scheduling again before
    /// that replaces it, which is fine: the replaced ticket would already be stale.
    pub fn schedule(&mut self, level: u32) -> GravityTicket {
        let ticket = GravityTicket {
            level,
            interval: self.config.interval(level),
        };
        self.pending = Some(ticket);
        ticket
    }

    /// Take the most recently scheduled ticket, if the driver has not taken it yet
    pub fn take_pending(&mut self) -> Option<GravityTicket> {
        self.pending.take()
    }
}

impl Default for GravityScheduler {
    fn default() -> Self {
        Self::new(GravityConfig::default())
    }
}
