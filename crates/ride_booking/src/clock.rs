//! Flow clock: virtual milliseconds plus a queue of pending booking events.
//!
//! User actions are scheduled at [FlowClock::now] and processed immediately by the
//! runner; the navigation hand-off is the only event scheduled in the future.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use bevy_ecs::prelude::Resource;

use crate::catalog::RideOptionId;

pub const ONE_SEC_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventKind {
    SubmitLocations,
    SelectOption,
    ReviseSelection,
    StartOver,
    ConfirmBooking,
    CancelBooking,
    NavigationHandOff,
}

/// Payload carried by events that act on a specific catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventSubject {
    RideOption(RideOptionId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub timestamp: u64,
    pub kind: EventKind,
    pub subject: Option<EventSubject>,
    /// Insertion order; breaks ties between events due at the same time.
    pub seq: u64,
}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap a min-heap by (timestamp, seq).
        other
            .timestamp
            .cmp(&self.timestamp)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The event being processed by the current schedule run.
#[derive(Debug, Clone, Copy, Resource)]
pub struct CurrentEvent(pub Event);

#[derive(Debug, Default, Resource)]
pub struct FlowClock {
    now: u64,
    next_seq: u64,
    events: BinaryHeap<Event>,
}

impl FlowClock {
    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn schedule_at(
        &mut self,
        timestamp: u64,
        kind: EventKind,
        subject: Option<EventSubject>,
    ) -> Event {
        debug_assert!(
            timestamp >= self.now,
            "event timestamp must be >= current time"
        );
        let event = Event {
            timestamp: timestamp.max(self.now),
            kind,
            subject,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.events.push(event);
        event
    }

    pub fn schedule_now(&mut self, kind: EventKind, subject: Option<EventSubject>) -> Event {
        self.schedule_at(self.now, kind, subject)
    }

    pub fn schedule_in_ms(
        &mut self,
        delay_ms: u64,
        kind: EventKind,
        subject: Option<EventSubject>,
    ) -> Event {
        self.schedule_at(self.now.saturating_add(delay_ms), kind, subject)
    }

    /// Drops every pending event of `kind`. Returns how many were removed.
    pub fn cancel(&mut self, kind: EventKind) -> usize {
        let before = self.events.len();
        self.events.retain(|event| event.kind != kind);
        before - self.events.len()
    }

    pub fn pending(&self, kind: EventKind) -> usize {
        self.events.iter().filter(|event| event.kind == kind).count()
    }

    pub fn next_event_time(&self) -> Option<u64> {
        self.events.peek().map(|event| event.timestamp)
    }

    pub fn pop_next(&mut self) -> Option<Event> {
        let event = self.events.pop()?;
        self.now = event.timestamp;
        Some(event)
    }

    /// Moves time forward without processing anything. Never moves backwards.
    pub fn advance_to(&mut self, timestamp: u64) {
        self.now = self.now.max(timestamp);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
