//! The chart client: owns the drawing surface and applies poll results.
//!
//! Platform code drives it: a timer calls [`ChartClient::begin_poll`], the
//! fetch runs wherever the host likes, and its result comes back through
//! [`ChartClient::complete_poll`]. Window resizes go to
//! [`ChartClient::resize`].

use crate::config::{BAR_FILL, CORNER_RADIUS, PollPolicy};
use crate::error::PollError;
use crate::layout::{Viewport, bar_layout};
use crate::model::Payload;
use crate::surface::DrawSurface;

/// Handle for one issued request. Must be handed back exactly once.
#[derive(Debug, PartialEq, Eq)]
pub struct PollTicket {
    seq: u64,
}

impl PollTicket {
    /// Issue order of this request, starting at 0.
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// What a completed poll did to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Cleared and drew this many bars.
    Rendered { bars: usize },
    /// Falsy body; previous frame left as is.
    Unchanged,
    /// Truthy body without a usable series; surface cleared, nothing drawn.
    Cleared,
    /// Request or decode failed; previous frame left as is.
    Dropped,
}

pub struct ChartClient<S: DrawSurface> {
    surface: S,
    policy: PollPolicy,
    next_seq: u64,
    in_flight: usize,
    newest_applied: Option<u64>,
    stale_applied: u64,
}

impl<S: DrawSurface> ChartClient<S> {
    pub fn new(surface: S, policy: PollPolicy) -> Self {
        Self {
            surface,
            policy,
            next_seq: 0,
            in_flight: 0,
            newest_applied: None,
            stale_applied: 0,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn policy(&self) -> PollPolicy {
        self.policy
    }

    /// Requests issued but not yet completed.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Responses applied after a newer one had already been applied.
    pub fn stale_applied(&self) -> u64 {
        self.stale_applied
    }

    /// Size the surface to the window. This resets the bitmap; the next
    /// poll repaints.
    pub fn resize(&mut self, viewport: Viewport) {
        log::debug!("resize to {}x{}", viewport.width, viewport.height);
        self.surface.set_viewport(viewport);
    }

    /// Full repaint from `data`. Returns the number of bars drawn.
    pub fn render(&mut self, data: &[f64]) -> usize {
        self.surface.clear();
        let bars = bar_layout(data, self.surface.viewport());
        for bar in &bars {
            self.surface.fill_round_rect(bar, CORNER_RADIUS, BAR_FILL);
        }
        bars.len()
    }

    /// Called on every timer tick. Returns a ticket if a request should be
    /// issued now.
    pub fn begin_poll(&mut self) -> Option<PollTicket> {
        if self.policy == PollPolicy::SkipWhileInFlight && self.in_flight > 0 {
            log::trace!("tick skipped, {} request(s) in flight", self.in_flight);
            return None;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight += 1;
        Some(PollTicket { seq })
    }

    /// Apply the result of the request issued with `ticket`.
    pub fn complete_poll(
        &mut self,
        ticket: PollTicket,
        result: Result<Payload, PollError>,
    ) -> TickOutcome {
        self.in_flight = self.in_flight.saturating_sub(1);

        let payload = match result {
            Ok(payload) => payload,
            Err(e) => {
                log::debug!("poll #{} dropped: {e}", ticket.seq);
                return TickOutcome::Dropped;
            }
        };

        match payload {
            Payload::Empty => TickOutcome::Unchanged,
            Payload::Series(data) => {
                self.note_applied(ticket.seq);
                let bars = self.render(&data);
                TickOutcome::Rendered { bars }
            }
            Payload::Malformed(reason) => {
                self.note_applied(ticket.seq);
                log::warn!("poll #{}: unusable payload, {reason}", ticket.seq);
                self.surface.clear();
                TickOutcome::Cleared
            }
        }
    }

    fn note_applied(&mut self, seq: u64) {
        match self.newest_applied {
            Some(newest) if seq < newest => {
                self.stale_applied += 1;
                log::debug!("poll #{seq} applied after newer poll #{newest}");
            }
            _ => self.newest_applied = Some(seq),
        }
    }
}
