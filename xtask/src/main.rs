use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the ride booking workspace"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Book the sample UberXL ride from Main St to the Airport
    Demo,
    /// Show the empty-pickup rejection path
    DemoRejected,
    /// Run Criterion benchmarks
    Bench,
    /// Run CI checks
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Run both demos
    Demos,
    /// Run check + demos
    All,
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    match Command::new("cargo").args(args).status() {
        Ok(status) => status,
        Err(error) => {
            eprintln!("failed to execute cargo: {error}");
            exit(1);
        }
    }
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn run_cli(args: &[&str]) -> ExitStatus {
    let mut full = vec!["run", "--quiet", "-p", "ride_booking_cli", "--"];
    full.extend_from_slice(args);
    cargo(&full)
}

fn demo() {
    let status = run_cli(&[
        "book",
        "--pickup",
        "Main St",
        "--destination",
        "Airport",
        "--option",
        "2",
    ]);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn demo_rejected() {
    // The CLI exits non-zero when the locations are rejected; that is the expected outcome.
    let status = run_cli(&["book", "--destination", "Airport", "--option", "2"]);
    if status.success() {
        eprintln!("expected the empty pickup to be rejected");
        exit(1);
    }
}

fn ci_check() {
    step("Formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);
    step("Clippy");
    run_cargo(&["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"]);
    step("Tests");
    run_cargo(&["test", "--workspace"]);
}

fn ci_demos() {
    step("Demo: successful booking");
    demo();
    step("Demo: rejected booking");
    demo_rejected();
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => demo(),
        Commands::DemoRejected => demo_rejected(),
        Commands::Bench => {
            run_cargo(&["bench", "--package", "ride_booking", "--bench", "performance"]);
        }
        Commands::Ci { job } => {
            match job {
                CiJob::Check => ci_check(),
                CiJob::Demos => ci_demos(),
                CiJob::All => {
                    ci_check();
                    ci_demos();
                }
            }
            eprintln!("\nCI job passed.");
        }
    }
}
