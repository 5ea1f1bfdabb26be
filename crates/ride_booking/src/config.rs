//! Flow configuration and the versioned JSON booking file.
//!
//! A booking file bundles [FlowConfig] with both catalogs so a front-end can be
//! pointed at different sample data without a rebuild.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::catalog::{DriverRoster, NearbyDriver, RideCatalog, RideOption};
use crate::clock::ONE_SEC_MS;
use crate::error::ConfigError;
use crate::routes::AppRoute;

pub const BOOKING_FILE_VERSION: u32 = 1;

/// Delay between the success notice and the hand-off, long enough to read it.
pub const DEFAULT_HAND_OFF_DELAY_MS: u64 = 2 * ONE_SEC_MS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TripEstimate {
    pub distance_km: f64,
    pub minutes: u32,
}

impl Default for TripEstimate {
    fn default() -> Self {
        Self {
            distance_km: 12.5,
            minutes: 18,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaymentCard {
    pub masked_number: String,
    pub brand: String,
}

impl Default for PaymentCard {
    fn default() -> Self {
        Self {
            masked_number: "**** **** **** 1234".to_string(),
            brand: "Visa".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Resource)]
#[serde(default, deny_unknown_fields)]
pub struct FlowConfig {
    pub hand_off_delay_ms: u64,
    /// Where the flow goes once a booking is committed.
    pub hand_off_route: AppRoute,
    /// Where the header back action goes.
    pub cancel_route: AppRoute,
    pub trip_estimate: TripEstimate,
    pub payment: PaymentCard,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            hand_off_delay_ms: DEFAULT_HAND_OFF_DELAY_MS,
            hand_off_route: AppRoute::RiderDashboard,
            cancel_route: AppRoute::RiderDashboard,
            trip_estimate: TripEstimate::default(),
            payment: PaymentCard::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct BookingFileV1 {
    version: u32,
    #[serde(default)]
    config: FlowConfig,
    ride_options: Vec<RideOption>,
    #[serde(default)]
    nearby_drivers: Vec<NearbyDriver>,
}

/// Everything a [crate::flow::BookingFlow] needs besides its collaborators.
#[derive(Debug, Clone)]
pub struct BookingSetup {
    pub config: FlowConfig,
    pub rides: RideCatalog,
    pub drivers: DriverRoster,
}

impl Default for BookingSetup {
    fn default() -> Self {
        Self {
            config: FlowConfig::default(),
            rides: RideCatalog::sample(),
            drivers: DriverRoster::sample(),
        }
    }
}

pub fn parse_booking_file(raw: &str) -> Result<BookingSetup, ConfigError> {
    let file: BookingFileV1 = serde_json::from_str(raw)?;
    if file.version != BOOKING_FILE_VERSION {
        return Err(ConfigError::UnsupportedVersion {
            found: file.version,
            expected: BOOKING_FILE_VERSION,
        });
    }
    Ok(BookingSetup {
        config: file.config,
        rides: RideCatalog::new(file.ride_options)?,
        drivers: DriverRoster::new(file.nearby_drivers),
    })
}

pub fn load_booking_file(path: &Path) -> Result<BookingSetup, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let setup = parse_booking_file(&raw)?;
    tracing::debug!(
        path = %path.display(),
        ride_options = setup.rides.len(),
        nearby_drivers = setup.drivers.drivers().len(),
        "loaded booking file"
    );
    Ok(setup)
}

pub fn render_booking_file(setup: &BookingSetup) -> Result<String, ConfigError> {
    let file = BookingFileV1 {
        version: BOOKING_FILE_VERSION,
        config: setup.config.clone(),
        ride_options: setup.rides.options().to_vec(),
        nearby_drivers: setup.drivers.drivers().to_vec(),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

/// Writes through a sibling temp file and renames, so readers never see a partial file.
/// The temp file is removed again if any step fails.
pub fn save_booking_file(path: &Path, setup: &BookingSetup) -> Result<(), ConfigError> {
    let serialized = render_booking_file(setup)?;
    let tmp_path = temp_path_for(path);
    let mut tmp_file = File::create(&tmp_path).map_err(io_error(&tmp_path))?;
    let written = tmp_file
        .write_all(serialized.as_bytes())
        .and_then(|()| tmp_file.sync_all());
    drop(tmp_file);
    if let Err(source) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(io_error(&tmp_path)(source));
    }

    fs::rename(&tmp_path, path).map_err(|source| {
        let _ = fs::remove_file(&tmp_path);
        io_error(path)(source)
    })
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ConfigError {
    let path = path.to_path_buf();
    move |source| ConfigError::Io { path, source }
}

/// `<name>.tmp.<nanos>` next to `path`; concurrent saves get distinct temp files.
fn temp_path_for(path: &Path) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or(0);
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "booking.json".into());
    name.push(format!(".tmp.{nanos}"));
    path.with_file_name(name)
}
