//! Deadline timer for gravity tickets.
//!
//! The board hands out [`GravityTicket`]s; this timer owns their deadlines. Each fired ticket
//! goes back into [`Board::tick`], and the outcome decides whether it stays armed.

use std::time::Instant;

use tracing::debug;

use crate::core::{Board, GravityTicket, TickOutcome};

#[derive(Debug, Clone, Copy)]
struct Armed {
    ticket: GravityTicket,
    deadline: Instant,
}

#[derive(Debug, Default)]
pub struct GravityTimer {
    armed: Vec<Armed>,
}

impl GravityTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `ticket` to fire one interval after `now`.
    pub fn arm(&mut self, ticket: GravityTicket, now: Instant) {
        debug!(level = ticket.level(), interval = ?ticket.interval(), "gravity armed");
        self.armed.push(Armed {
            ticket,
            deadline: now + ticket.interval(),
        });
    }

    /// Arm whatever ticket the board has scheduled since the last call.
    pub fn arm_scheduled(&mut self, board: &mut Board, now: Instant) -> bool {
        match board.take_scheduled() {
            Some(ticket) => {
                self.arm(ticket, now);
                true
            }
            None => false,
        }
    }

    /// Earliest deadline among armed tickets; `None` once nothing is armed.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.armed.iter().map(|a| a.deadline).min()
    }

    pub fn len(&self) -> usize {
        self.armed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.armed.is_empty()
    }

    /// Fire every ticket whose deadline is at or before `now`, earliest first.
    ///
    /// Superseded tickets are dropped. Current ones are re-armed one interval later; missed
    /// intervals are skipped rather than replayed, so each ticket fires at most once per call.
    /// Tickets the board schedules along the way (level ups) are armed from `now`.
    ///
    /// Returns the number of tickets fired.
    pub fn fire_due(&mut self, now: Instant, board: &mut Board) -> usize {
        let mut fired = 0;
        while let Some(i) = self.earliest_due(now) {
            let armed = self.armed[i];
            fired += 1;
            match board.tick(armed.ticket) {
                TickOutcome::Rearm => {
                    let interval = armed.ticket.interval();
                    let mut next = armed.deadline + interval;
                    if next <= now {
                        next = now + interval;
                    }
                    self.armed[i].deadline = next;
                }
                TickOutcome::Superseded => {
                    debug!(level = armed.ticket.level(), "gravity ticket dropped");
                    self.armed.swap_remove(i);
                }
            }
            self.arm_scheduled(board, now);
        }
        fired
    }

    fn earliest_due(&self, now: Instant) -> Option<usize> {
        self.armed
            .iter()
            .enumerate()
            .filter(|(_, a)| a.deadline <= now)
            .min_by_key(|(_, a)| a.deadline)
            .map(|(i, _)| i)
    }
}
