//! View model: what each stage must show. Pure data, no presentation.

use crate::catalog::{DriverRoster, Fare, RideCatalog, RideOption, RideOptionId};
use crate::config::{FlowConfig, PaymentCard};
use crate::session::{BookingSession, BookingStage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressStep {
    pub number: usize,
    pub stage: BookingStage,
    pub status: StepStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StagePanel {
    LocationForm {
        pickup: String,
        destination: String,
    },
    OptionList {
        options: Vec<RideOption>,
        highlighted: Option<RideOptionId>,
    },
    ConfirmationCard {
        option: RideOption,
        pickup: String,
        destination: String,
        total_fare: Fare,
        book_label: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TripSummary {
    pub from: String,
    pub to: String,
    pub estimated_distance_km: f64,
    pub estimated_minutes: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DriverCard {
    pub name: String,
    pub initials: String,
    pub vehicle: String,
    pub rating: f32,
    pub eta_minutes: u32,
    pub distance_km: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingView {
    pub progress: Vec<ProgressStep>,
    pub panel: StagePanel,
    pub trip_summary: Option<TripSummary>,
    pub nearby_drivers: Vec<DriverCard>,
    pub payment: PaymentCard,
}

impl BookingView {
    pub fn build(
        session: &BookingSession,
        rides: &RideCatalog,
        drivers: &DriverRoster,
        config: &FlowConfig,
    ) -> Self {
        let trip_summary = (session.stage != BookingStage::Location).then(|| TripSummary {
            from: session.pickup.clone(),
            to: session.destination.clone(),
            estimated_distance_km: config.trip_estimate.distance_km,
            estimated_minutes: config.trip_estimate.minutes,
        });

        Self {
            progress: progress_steps(session.stage),
            panel: stage_panel(session, rides),
            trip_summary,
            nearby_drivers: drivers
                .drivers()
                .iter()
                .map(|driver| DriverCard {
                    name: driver.name.clone(),
                    initials: driver.initials(),
                    vehicle: driver.vehicle.clone(),
                    rating: driver.rating,
                    eta_minutes: driver.eta_minutes,
                    distance_km: driver.distance_km,
                })
                .collect(),
            payment: config.payment.clone(),
        }
    }
}

pub fn progress_steps(current: BookingStage) -> Vec<ProgressStep> {
    BookingStage::ALL
        .into_iter()
        .map(|stage| ProgressStep {
            number: stage.index() + 1,
            stage,
            status: match stage.index().cmp(&current.index()) {
                std::cmp::Ordering::Less => StepStatus::Completed,
                std::cmp::Ordering::Equal => StepStatus::Active,
                std::cmp::Ordering::Greater => StepStatus::Pending,
            },
        })
        .collect()
}

fn stage_panel(session: &BookingSession, rides: &RideCatalog) -> StagePanel {
    match (session.stage, session.chosen_option.as_ref()) {
        (BookingStage::Location, _) => StagePanel::LocationForm {
            pickup: session.pickup.clone(),
            destination: session.destination.clone(),
        },
        (BookingStage::Confirmation, Some(option)) => StagePanel::ConfirmationCard {
            option: option.clone(),
            pickup: session.pickup.clone(),
            destination: session.destination.clone(),
            total_fare: option.price,
            book_label: format!("Book {}", option.label),
        },
        // Confirmation without a choice cannot happen; fall back to the list.
        (BookingStage::Options | BookingStage::Confirmation, chosen) => StagePanel::OptionList {
            options: rides.options().to_vec(),
            highlighted: chosen.map(|option| option.id),
        },
    }
}
