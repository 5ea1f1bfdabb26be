//! Plain-text rendering of a [BookingView].

use std::fmt;

use ride_booking::view::{StagePanel, StepStatus};
use ride_booking::{BookingView, RideOption};

pub fn render_view(view: &BookingView) -> String {
    ViewText(view).to_string()
}

/// Terminal layout of a [BookingView].
struct ViewText<'a>(&'a BookingView);

impl fmt::Display for ViewText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        let steps: Vec<String> = view
            .progress
            .iter()
            .map(|step| {
                let marker = match step.status {
                    StepStatus::Completed => "✓",
                    StepStatus::Active => "●",
                    StepStatus::Pending => "○",
                };
                format!("{marker} {} {}", step.number, step.stage)
            })
            .collect();
        writeln!(f, "{}", steps.join("  ──  "))?;
        writeln!(f)?;

        match &view.panel {
            StagePanel::LocationForm {
                pickup,
                destination,
            } => {
                writeln!(f, "Where to?")?;
                writeln!(f, "  Pickup location: {}", placeholder(pickup))?;
                writeln!(f, "  Destination:     {}", placeholder(destination))?;
            }
            StagePanel::OptionList {
                options,
                highlighted,
            } => {
                writeln!(f, "Choose your ride")?;
                for option in options {
                    let marker = if Some(option.id) == *highlighted { ">" } else { " " };
                    writeln!(f, "{marker} {}", option_line(option))?;
                }
            }
            StagePanel::ConfirmationCard {
                option,
                pickup,
                destination,
                total_fare,
                book_label,
            } => {
                writeln!(f, "Confirm your ride")?;
                writeln!(f, "  {}", option_line(option))?;
                writeln!(f, "  Pickup:      {pickup}")?;
                writeln!(f, "  Destination: {destination}")?;
                writeln!(f, "  Total fare:  {total_fare}")?;
                writeln!(f, "  [{book_label}]  [Choose Different Ride]")?;
            }
        }

        if let Some(summary) = &view.trip_summary {
            writeln!(f, "\nTrip details")?;
            writeln!(f, "  From: {}", summary.from)?;
            writeln!(f, "  To:   {}", summary.to)?;
            writeln!(
                f,
                "  Estimated distance: {} km, estimated time: {} min",
                summary.estimated_distance_km, summary.estimated_minutes
            )?;
        }

        if !view.nearby_drivers.is_empty() {
            writeln!(f, "\nNearby drivers")?;
            for driver in &view.nearby_drivers {
                writeln!(
                    f,
                    "  [{}] {} ({}) ★ {:.1}  {} min, {} km away",
                    driver.initials,
                    driver.name,
                    driver.vehicle,
                    driver.rating,
                    driver.eta_minutes,
                    driver.distance_km
                )?;
            }
        }

        writeln!(
            f,
            "\nPayment: {} ({})",
            view.payment.masked_number, view.payment.brand
        )?;
        Ok(())
    }
}

pub fn option_line(option: &RideOption) -> String {
    format!(
        "{} {:<12} {:>7}  {} min  {} seats  {}",
        option.icon,
        option.label,
        option.price.to_string(),
        option.eta_minutes,
        option.seats,
        option.description
    )
}

fn placeholder(value: &str) -> &str {
    if value.is_empty() {
        "(empty)"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ride_booking::collaborators::{RecordingNavigator, RecordingNotifier};
    use ride_booking::{BookingFlow, BookingSetup, RideOptionId};

    #[test]
    fn confirmation_render_shows_fare_and_book_button() {
        let mut flow = BookingFlow::new(
            BookingSetup::default(),
            RecordingNavigator::default(),
            RecordingNotifier::default(),
        );
        flow.set_pickup("Main St");
        flow.set_destination("Airport");
        flow.submit_locations().expect("accepted");
        flow.select_option(RideOptionId(2));

        let text = render_view(&flow.view());
        assert!(text.contains("● 3 Confirm"));
        assert!(text.contains("Total fare:  $18.75"));
        assert!(text.contains("[Book UberXL]"));
        assert!(text.contains("[JS] John Smith"));
    }

    #[test]
    fn location_render_marks_empty_fields() {
        let flow = BookingFlow::new(
            BookingSetup::default(),
            RecordingNavigator::default(),
            RecordingNotifier::default(),
        );
        let text = render_view(&flow.view());
        assert!(text.contains("Pickup location: (empty)"));
        assert!(!text.contains("Trip details"));
    }

    #[test]
    fn options_render_marks_the_highlighted_tier() {
        let mut flow = BookingFlow::new(
            BookingSetup::default(),
            RecordingNavigator::default(),
            RecordingNotifier::default(),
        );
        flow.set_pickup("Main St");
        flow.set_destination("Airport");
        flow.submit_locations().expect("accepted");
        flow.select_option(RideOptionId(3));
        flow.revise();

        let text = render_view(&flow.view());
        let highlighted: Vec<&str> = text.lines().filter(|line| line.starts_with('>')).collect();
        assert_eq!(highlighted.len(), 1);
        assert!(highlighted[0].contains("Uber Black"));
        assert!(text.contains("From: Main St"));
    }
}
