use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use ride_booking::config::{load_booking_file, save_booking_file};
use ride_booking::{BookingFlow, BookingSetup, BookingStage, RideOptionId};
use tracing_subscriber::EnvFilter;

mod console;
mod render;

use console::{ConsoleNavigator, ConsoleNotifier};
use render::{option_line, render_view};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "ride_booking_cli",
    about = "Walk through the ride booking wizard from the terminal"
)]
struct Cli {
    /// Booking file with catalogs and flow config (defaults to the sample data)
    #[arg(long, global = true, env = "RIDE_BOOKING_FILE")]
    catalog: Option<PathBuf>,
    /// Log every state transition
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Book a ride: locations, option, confirmation, hand-off
    Book {
        #[arg(long, default_value = "")]
        pickup: String,
        #[arg(long, default_value = "")]
        destination: String,
        /// Ride option id to choose
        #[arg(long)]
        option: u32,
        /// Go back from confirmation and choose this option instead
        #[arg(long)]
        revise_to: Option<u32>,
        /// Tear the flow down this many ms after confirming (before the hand-off if shorter)
        #[arg(long)]
        teardown_after_ms: Option<u64>,
    },
    /// Print the ride options and nearby drivers
    Catalog,
    /// Write the sample booking file to PATH
    WriteSample { path: PathBuf },
}

// ── helpers ────────────────────────────────────────────────────────

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_setup(path: Option<&Path>) -> Result<BookingSetup> {
    match path {
        Some(path) => load_booking_file(path)
            .with_context(|| format!("loading booking file {}", path.display())),
        None => Ok(BookingSetup::default()),
    }
}

fn show(flow: &BookingFlow) {
    println!("\n{}", render_view(&flow.view()));
}

fn book(
    setup: BookingSetup,
    pickup: &str,
    destination: &str,
    option: u32,
    revise_to: Option<u32>,
    teardown_after_ms: Option<u64>,
) -> Result<()> {
    let mut flow = BookingFlow::new(setup, ConsoleNavigator, ConsoleNotifier);
    flow.set_pickup(pickup);
    flow.set_destination(destination);
    show(&flow);

    if let Err(error) = flow.submit_locations() {
        bail!("booking stopped at {}: {error}", flow.stage());
    }
    show(&flow);

    for id in std::iter::once(option).chain(revise_to) {
        if flow.stage() == BookingStage::Confirmation {
            flow.revise();
        }
        flow.select_option(RideOptionId(id));
        if flow.stage() != BookingStage::Confirmation {
            bail!("ride option {id} is not in the catalog");
        }
        show(&flow);
    }

    flow.confirm();
    let delay = flow.config().hand_off_delay_ms;
    match teardown_after_ms {
        Some(after) if after < delay => {
            flow.advance_by(after);
            flow.teardown();
            println!("flow closed after {after} ms; hand-off dropped");
        }
        _ => {
            flow.advance_by(delay);
        }
    }
    Ok(())
}

fn print_catalog(setup: &BookingSetup) {
    println!("Ride options");
    for option in setup.rides.options() {
        println!("  #{} {}", option.id, option_line(option));
    }
    println!("\nNearby drivers");
    for driver in setup.drivers.drivers() {
        println!(
            "  {} ({}) ★ {:.1}, {} min away",
            driver.name, driver.vehicle, driver.rating, driver.eta_minutes
        );
    }
}

// ── main ───────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Book {
            pickup,
            destination,
            option,
            revise_to,
            teardown_after_ms,
        } => {
            let setup = load_setup(cli.catalog.as_deref())?;
            book(setup, &pickup, &destination, option, revise_to, teardown_after_ms)
        }
        Commands::Catalog => {
            let setup = load_setup(cli.catalog.as_deref())?;
            print_catalog(&setup);
            Ok(())
        }
        Commands::WriteSample { path } => {
            save_booking_file(&path, &BookingSetup::default())
                .with_context(|| format!("writing booking file {}", path.display()))?;
            eprintln!("wrote sample booking file to {}", path.display());
            Ok(())
        }
    }
}
