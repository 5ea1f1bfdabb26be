use ride_booking::collaborators::{RecordingNavigator, RecordingNotifier, Severity};
use ride_booking::{AppRoute, BookingFlow, BookingSetup, RideOptionId};

/// A flow plus the recorders wired into it.
pub struct Harness {
    pub flow: BookingFlow,
    pub navigator: RecordingNavigator,
    pub notifier: RecordingNotifier,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_setup(BookingSetup::default())
    }

    pub fn with_setup(setup: BookingSetup) -> Self {
        let navigator = RecordingNavigator::default();
        let notifier = RecordingNotifier::default();
        let flow = BookingFlow::new(setup, navigator.clone(), notifier.clone());
        Self {
            flow,
            navigator,
            notifier,
        }
    }

    pub fn enter_locations(&mut self, pickup: &str, destination: &str) {
        self.flow.set_pickup(pickup);
        self.flow.set_destination(destination);
    }

    /// Fills both locations, submits and selects `id`.
    pub fn book_until_confirmation(&mut self, pickup: &str, destination: &str, id: u32) {
        self.enter_locations(pickup, destination);
        self.flow
            .submit_locations()
            .expect("locations should be accepted");
        self.flow.select_option(RideOptionId(id));
    }

    pub fn errors(&self) -> usize {
        self.notifier.count(Severity::Error)
    }

    pub fn successes(&self) -> usize {
        self.notifier.count(Severity::Success)
    }

    pub fn routes(&self) -> Vec<AppRoute> {
        self.navigator.routes()
    }
}
