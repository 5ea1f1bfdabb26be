//! Page identifiers handed to the navigation collaborator.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppRoute {
    Landing,
    Login,
    Register,
    RiderDashboard,
    DriverDashboard,
    BookRide,
    TripHistory,
    Profile,
    NotFound,
}

impl AppRoute {
    pub const ALL: [AppRoute; 9] = [
        AppRoute::Landing,
        AppRoute::Login,
        AppRoute::Register,
        AppRoute::RiderDashboard,
        AppRoute::DriverDashboard,
        AppRoute::BookRide,
        AppRoute::TripHistory,
        AppRoute::Profile,
        AppRoute::NotFound,
    ];

    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Landing => "/",
            AppRoute::Login => "/login",
            AppRoute::Register => "/register",
            AppRoute::RiderDashboard => "/rider",
            AppRoute::DriverDashboard => "/driver",
            AppRoute::BookRide => "/book-ride",
            AppRoute::TripHistory => "/trips",
            AppRoute::Profile => "/profile",
            AppRoute::NotFound => "*",
        }
    }

    /// Resolves a path; anything unknown lands on [AppRoute::NotFound].
    pub fn from_path(path: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|route| *route != AppRoute::NotFound && route.path() == path)
            .unwrap_or(AppRoute::NotFound)
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
