//! Compass popup state
//!
//! One request may be outstanding at a time. Each submission hands out a
//! [`Ticket`]; a result is only accepted for the ticket currently pending,
//! so results for a closed popup or a superseded request are dropped.

use thiserror::Error;
use tracing::debug;

use super::{CompassAnswer, CompassError, CompassMode, CompassRequest};

/// Identifies one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PopupState {
    #[default]
    Idle,
    Pending {
        ticket: Ticket,
        query: String,
    },
    Answered(CompassAnswer),
    Failed(CompassError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRefusal {
    #[error("the compass is closed")]
    Closed,
    #[error("a request is already in progress")]
    Busy,
    #[error("type a question first")]
    EmptyQuery,
}

#[derive(Debug, Default)]
pub struct CompassPopup {
    open: bool,
    mode: CompassMode,
    state: PopupState,
    next_ticket: u64,
}

impl CompassPopup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn mode(&self) -> CompassMode {
        self.mode
    }

    pub fn state(&self) -> &PopupState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state, PopupState::Pending { .. })
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the popup; a pending result will be discarded on arrival
    pub fn close(&mut self) {
        if self.is_busy() {
            debug!("compass closed with a request in flight");
        }
        self.open = false;
        self.state = PopupState::Idle;
    }

    pub fn set_mode(&mut self, mode: CompassMode) {
        self.mode = mode;
    }

    /// Start a request, returning it together with its ticket
    pub fn submit(
        &mut self,
        query: &str,
        api_key: Option<&str>,
    ) -> Result<(Ticket, CompassRequest), SubmitRefusal> {
        if !self.open {
            return Err(SubmitRefusal::Closed);
        }
        if self.is_busy() {
            return Err(SubmitRefusal::Busy);
        }
        let query = query.trim();
        if query.is_empty() {
            return Err(SubmitRefusal::EmptyQuery);
        }

        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.state = PopupState::Pending {
            ticket,
            query: query.to_string(),
        };

        let mut request = CompassRequest::new(self.mode, query);
        if let Some(key) = api_key {
            request = request.with_api_key(key);
        }
        Ok((ticket, request))
    }

    /// Deliver the result for a ticket; returns whether it was accepted
    pub fn deliver(
        &mut self,
        ticket: Ticket,
        result: Result<CompassAnswer, CompassError>,
    ) -> bool {
        let current = matches!(
            &self.state,
            PopupState::Pending { ticket: pending, .. } if *pending == ticket
        );
        if !current {
            debug!(ticket = ticket.0, "dropping stale compass result");
            return false;
        }

        self.state = match result {
            Ok(answer) => PopupState::Answered(answer),
            Err(e) => PopupState::Failed(e),
        };
        true
    }

    /// Whether the last failure invites a retry with the student's own key
    pub fn offers_own_key(&self) -> bool {
        matches!(&self.state, PopupState::Failed(e) if e.allows_own_key())
    }
}
