use std::fmt;

use bevy_ecs::prelude::Resource;

use crate::catalog::RideOption;
use crate::error::BookingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BookingStage {
    #[default]
    Location,
    Options,
    Confirmation,
}

impl BookingStage {
    pub const ALL: [BookingStage; 3] = [
        BookingStage::Location,
        BookingStage::Options,
        BookingStage::Confirmation,
    ];

    /// Zero-based position in the wizard.
    pub fn index(self) -> usize {
        match self {
            BookingStage::Location => 0,
            BookingStage::Options => 1,
            BookingStage::Confirmation => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            BookingStage::Location => "Location",
            BookingStage::Options => "Choose Ride",
            BookingStage::Confirmation => "Confirm",
        }
    }
}

impl fmt::Display for BookingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// The rider's in-progress booking. Lives exactly as long as the flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Resource)]
pub struct BookingSession {
    pub pickup: String,
    pub destination: String,
    /// `Some` from the first selection on; kept as the highlight when revising.
    pub chosen_option: Option<RideOption>,
    pub stage: BookingStage,
}

impl BookingSession {
    /// Both locations are present once surrounding whitespace is ignored.
    pub fn locations_complete(&self) -> bool {
        !self.pickup.trim().is_empty() && !self.destination.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitReason {
    /// The post-confirmation hand-off fired.
    HandedOff,
    /// The rider backed out to the dashboard.
    Cancelled,
    /// The hosting view went away.
    TornDown,
}

/// Where the flow is in its own lifetime, independent of the wizard stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Resource)]
pub struct FlowLifecycle {
    /// Flow clock time at which the booking was confirmed. Never cleared.
    pub committed_at: Option<u64>,
    /// Due time of the pending hand-off; cleared when it fires or is dropped.
    pub hand_off_due: Option<u64>,
    pub exit: Option<ExitReason>,
}

impl FlowLifecycle {
    /// Still accepting wizard actions.
    pub fn is_active(&self) -> bool {
        self.committed_at.is_none() && self.exit.is_none()
    }

    pub fn is_committed(&self) -> bool {
        self.committed_at.is_some()
    }

    pub fn is_exited(&self) -> bool {
        self.exit.is_some()
    }

    pub fn hand_off_pending(&self) -> bool {
        self.hand_off_due.is_some()
    }
}

/// Result of the most recent action that can be rejected; cleared before each dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Resource)]
pub struct LastRejection(pub Option<BookingError>);
