//! Outbound collaborators: navigation and notifications.
//!
//! Both are fire-and-forget. The flow never waits on them and never looks at a
//! result, so an implementation must not block.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use bevy_ecs::prelude::Resource;

use crate::routes::AppRoute;

pub trait Navigator: Send + Sync + 'static {
    fn navigate(&self, route: AppRoute);
}

pub trait Notifier: Send + Sync + 'static {
    fn notify(&self, notice: Notice);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Success,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Success => f.write_str("success"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }
}

/// World-side handle for the navigation collaborator.
#[derive(Resource)]
pub struct NavigatorHandle(pub Box<dyn Navigator>);

/// World-side handle for the notification collaborator.
#[derive(Resource)]
pub struct NotifierHandle(pub Box<dyn Notifier>);

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Navigator that remembers every route it was sent to. Clones share history.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    routes: Arc<Mutex<Vec<AppRoute>>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<AppRoute> {
        lock(&self.routes).clone()
    }

    pub fn last(&self) -> Option<AppRoute> {
        lock(&self.routes).last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: AppRoute) {
        lock(&self.routes).push(route);
    }
}

/// Notifier that remembers every notice it received. Clones share history.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        lock(&self.notices).clone()
    }

    pub fn count(&self, severity: Severity) -> usize {
        lock(&self.notices)
            .iter()
            .filter(|notice| notice.severity == severity)
            .count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        lock(&self.notices).push(notice);
    }
}
