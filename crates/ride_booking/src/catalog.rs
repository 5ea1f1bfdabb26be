//! Static catalogs read by the booking flow: ride tiers and nearby drivers.
//!
//! Both catalogs are immutable once built. [RideCatalog] is guaranteed non-empty
//! with unique ids, so the option stage never needs its own validation.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RideOptionId(pub u32);

impl fmt::Display for RideOptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A price in cents. Displays and serializes as `"$12.50"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fare {
    cents: u64,
}

impl Fare {
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub fn cents(&self) -> u64 {
        self.cents
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.cents / 100, self.cents % 100)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid fare {0:?}: expected a dollar amount such as \"$12.50\"")]
pub struct FareParseError(String);

impl FromStr for Fare {
    type Err = FareParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || FareParseError(raw.to_string());
        let amount = raw.trim();
        let amount = amount.strip_prefix('$').unwrap_or(amount);
        let (dollars, cents) = match amount.split_once('.') {
            Some((dollars, cents)) => (dollars, cents),
            None => (amount, "0"),
        };
        if dollars.is_empty()
            || cents.is_empty()
            || cents.len() > 2
            || !dollars.bytes().all(|b| b.is_ascii_digit())
            || !cents.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        let whole: u64 = dollars.parse().map_err(|_| invalid())?;
        let mut fraction: u64 = cents.parse().map_err(|_| invalid())?;
        if cents.len() == 1 {
            fraction *= 10;
        }
        whole
            .checked_mul(100)
            .and_then(|total| total.checked_add(fraction))
            .map(Fare::from_cents)
            .ok_or_else(invalid)
    }
}

impl TryFrom<String> for Fare {
    type Error = FareParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Fare> for String {
    fn from(fare: Fare) -> Self {
        fare.to_string()
    }
}

/// One bookable ride tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RideOption {
    pub id: RideOptionId,
    pub label: String,
    pub description: String,
    pub price: Fare,
    pub eta_minutes: u32,
    pub seats: u32,
    pub icon: String,
}

/// A driver shown in the sidebar. Decorative only; never part of a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NearbyDriver {
    pub id: u32,
    pub name: String,
    pub rating: f32,
    pub vehicle: String,
    pub eta_minutes: u32,
    pub distance_km: f64,
}

impl NearbyDriver {
    /// Avatar fallback: first letter of every word of the name.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Resource)]
pub struct RideCatalog {
    options: Vec<RideOption>,
}

impl RideCatalog {
    pub fn new(options: Vec<RideOption>) -> Result<Self, ConfigError> {
        if options.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        let mut seen = HashSet::with_capacity(options.len());
        for option in &options {
            if !seen.insert(option.id) {
                return Err(ConfigError::DuplicateRideOption(option.id));
            }
        }
        Ok(Self { options })
    }

    /// The four sample tiers the product ships with.
    pub fn sample() -> Self {
        let tier = |id, label: &str, description: &str, cents, eta_minutes, seats, icon: &str| {
            RideOption {
                id: RideOptionId(id),
                label: label.to_string(),
                description: description.to_string(),
                price: Fare::from_cents(cents),
                eta_minutes,
                seats,
                icon: icon.to_string(),
            }
        };
        Self {
            options: vec![
                tier(1, "UberX", "Affordable, everyday rides", 1250, 3, 4, "🚗"),
                tier(2, "UberXL", "Extra seats for your group", 1875, 5, 6, "🚙"),
                tier(
                    3,
                    "Uber Black",
                    "Premium rides with professional drivers",
                    2800,
                    8,
                    4,
                    "🚗",
                ),
                tier(4, "Uber Pool", "Share your ride, split the cost", 825, 7, 2, "🚗"),
            ],
        }
    }

    pub fn get(&self, id: RideOptionId) -> Option<&RideOption> {
        self.options.iter().find(|option| option.id == id)
    }

    pub fn options(&self) -> &[RideOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Resource)]
pub struct DriverRoster {
    drivers: Vec<NearbyDriver>,
}

impl DriverRoster {
    pub fn new(drivers: Vec<NearbyDriver>) -> Self {
        Self { drivers }
    }

    pub fn sample() -> Self {
        Self::new(vec![
            NearbyDriver {
                id: 1,
                name: "John Smith".to_string(),
                rating: 4.9,
                vehicle: "Toyota Camry".to_string(),
                eta_minutes: 3,
                distance_km: 0.5,
            },
            NearbyDriver {
                id: 2,
                name: "Sarah Wilson".to_string(),
                rating: 4.8,
                vehicle: "Honda Accord".to_string(),
                eta_minutes: 5,
                distance_km: 1.2,
            },
        ])
    }

    pub fn drivers(&self) -> &[NearbyDriver] {
        &self.drivers
    }
}
