use crate::mode::TimeMode;

/// What kind of simulation event occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEventKind {
    /// The host toggled the lighting state.
    LightsToggled {
        /// The state after the toggle (`true` = day preset).
        on: bool,
    },
    /// The one-shot startup check flipped lighting to match the sun.
    StartupAligned {
        /// Whether the sun angle fell on the night side of the band.
        night: bool,
    },
    /// The time-source policy was switched mid-session.
    ModeChanged {
        /// The previous policy.
        from: TimeMode,
        /// The new policy.
        to: TimeMode,
    },
}

/// A record of something that happened during simulation.
#[derive(Debug, Clone)]
pub struct ClockEvent {
    /// The frame number when this event occurred (1-based).
    pub frame: u64,
    /// The specific kind of event that occurred.
    pub kind: ClockEventKind,
    /// A human-readable description of the event.
    pub description: String,
}

impl ClockEvent {
    /// Create a new event with the given frame, kind, and description.
    pub fn new(frame: u64, kind: ClockEventKind, description: impl Into<String>) -> Self {
        Self {
            frame,
            kind,
            description: description.into(),
        }
    }
}

/// Accumulates events during a simulation run.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<ClockEvent>,
    max_events: usize,
}

impl EventLog {
    /// Create a new event log with the given maximum capacity (0 = unlimited).
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
        }
    }

    /// Append an event, dropping the oldest events if the log exceeds
    /// its capacity.
    pub fn push(&mut self, event: ClockEvent) {
        self.events.push(event);
        if self.max_events > 0 && self.events.len() > self.max_events {
            let drain_count = self.events.len() - self.max_events;
            self.events.drain(..drain_count);
        }
    }

    /// Return a slice of all recorded events.
    pub fn events(&self) -> &[ClockEvent] {
        &self.events
    }

    /// Return all events that occurred at the given frame.
    pub fn events_at_frame(&self, frame: u64) -> Vec<&ClockEvent> {
        self.events.iter().filter(|e| e.frame == frame).collect()
    }

    /// Return the number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Return `true` if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
