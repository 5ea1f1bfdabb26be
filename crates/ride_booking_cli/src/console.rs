//! Collaborators that print to the terminal.

use ride_booking::{AppRoute, Navigator, Notice, Notifier, Severity};

pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, route: AppRoute) {
        println!("→ navigate to {route}");
    }
}

pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        match notice.severity {
            Severity::Error => println!("✗ {}", notice.message),
            Severity::Success => println!("✓ {}", notice.message),
        }
    }
}
