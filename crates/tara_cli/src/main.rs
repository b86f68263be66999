use clap::{Args, Parser, Subcommand};
use tara_angle::{Sexagesimal, to_sexagesimal, wrap_360};
use tara_search::{
    BatchRow, CLASSICAL_END_JD, CLASSICAL_START_JD, Catalog, OffsetFromZero, REFERENCE_EPOCH_JD,
    SearchConfig, SearchDomain, StarOffsetFromTarget, find_root_with, find_roots, offsets_at,
    run_batch,
};
use tara_sky::{AyanamshaSystem, PrecessionSky};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tara", about = "Ayanamsha zero-coincidence search")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Epochs at which each ayanamsha was zero, plus the star placements
    ZeroPoints {
        /// Number of ayanamsha systems to search, in code order
        #[arg(long, default_value_t = AyanamshaSystem::all().len())]
        count: usize,
        /// Skip the Revati and Galactic Center placements
        #[arg(long)]
        no_stars: bool,
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Each system's ayanamsha at one epoch
    Offsets {
        /// Julian Date
        #[arg(long, default_value_t = REFERENCE_EPOCH_JD)]
        jd: f64,
    },
    /// Epoch at which a star stood at a longitude of date
    Star {
        /// Star name or alias (Revati, Pushya, Citra, Rohini, Gal. Center)
        #[arg(long)]
        name: String,
        /// Target longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        target: f64,
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Every zero crossing of one system's ayanamsha in the domain
    Roots {
        /// Ayanamsha system code (default 1 = Lahiri)
        #[arg(long, default_value_t = 1)]
        system: u8,
        /// Coarse scan step in days
        #[arg(long, default_value_t = 365.25)]
        scan_step: f64,
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Convert degrees in [0, 360] to signed DMS
    Dms {
        /// Angle in decimal degrees
        deg: f64,
    },
}

#[derive(Args)]
struct SearchArgs {
    /// Domain start, Julian Date
    #[arg(long, default_value_t = CLASSICAL_START_JD)]
    start: f64,
    /// Domain end, Julian Date (<= 0 selects JD 2500000.0)
    #[arg(long, default_value_t = CLASSICAL_END_JD, allow_negative_numbers = true)]
    end: f64,
    /// Use the 5e-10 day tolerance
    #[arg(long)]
    fine: bool,
    /// Convergence width in days (overrides --fine)
    #[arg(long)]
    epsilon: Option<f64>,
    /// Bisection pass limit
    #[arg(long)]
    max_iterations: Option<u32>,
}

impl SearchArgs {
    fn config(&self, preset: SearchConfig) -> SearchConfig {
        let mut config = if self.fine {
            SearchConfig::fine()
        } else {
            preset
        };
        if let Some(eps) = self.epsilon {
            config.convergence_days = eps;
        }
        if let Some(n) = self.max_iterations {
            config.max_iterations = n;
        }
        config
    }

    fn domain(&self) -> SearchDomain {
        SearchDomain::new(self.start, self.end).unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(1);
        })
    }
}

fn require_system(code: u8) -> AyanamshaSystem {
    AyanamshaSystem::from_code(code).unwrap_or_else(|| {
        eprintln!(
            "Invalid ayanamsha code: {code} (0-{})",
            AyanamshaSystem::all().len() - 1
        );
        std::process::exit(1);
    })
}

fn dms_or_exit(deg: f64) -> Sexagesimal {
    wrap_360(deg)
        .and_then(to_sexagesimal)
        .unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(1);
        })
}

fn print_batch_row(row: &BatchRow) {
    match &row.outcome {
        Ok(hit) => println!(
            "{:<24} JD {:>17.7}  {}  residual {}  ({} iterations)",
            row.label,
            hit.event.jd,
            dms_or_exit(hit.angle_deg),
            hit.residual_dms,
            hit.event.iterations
        ),
        Err(e) => println!("{:<24} error: {e}", row.label),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let cli = Cli::parse();
    let sky = PrecessionSky::new();

    match cli.command {
        Commands::ZeroPoints {
            count,
            no_stars,
            search,
        } => {
            let mut catalog = Catalog::systems(count, search.config(SearchConfig::coarse()));
            if !no_stars {
                catalog.entries.extend(Catalog::star_placements().entries);
            }
            let rows = run_batch(&sky, &catalog, &search.domain());
            for row in &rows {
                print_batch_row(row);
            }
            if rows.iter().any(|r| r.outcome.is_err()) {
                std::process::exit(1);
            }
        }

        Commands::Offsets { jd } => {
            for row in offsets_at(&sky, AyanamshaSystem::all(), jd) {
                match row.outcome {
                    Ok(dms) => println!("{:<24} {dms}", row.system.name()),
                    Err(e) => println!("{:<24} error: {e}", row.system.name()),
                }
            }
        }

        Commands::Star {
            name,
            target,
            search,
        } => {
            let star_target = StarOffsetFromTarget::new(sky, name, target).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            let config = search.config(SearchConfig::fine());
            match find_root_with(&star_target, &search.domain(), &config) {
                Ok(event) => println!(
                    "{} at {}: JD {:.7} ({} iterations)",
                    star_target.star(),
                    dms_or_exit(star_target.target_deg()),
                    event.jd,
                    event.iterations
                ),
                Err(e) => {
                    eprintln!("Search failed: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Roots {
            system,
            scan_step,
            search,
        } => {
            let system = require_system(system);
            let config = SearchConfig {
                scan_step_days: scan_step,
                ..search.config(SearchConfig::coarse())
            };
            let target = OffsetFromZero::new(sky, system);
            match find_roots(&target, &search.domain(), &config) {
                Ok(events) if events.is_empty() => {
                    println!("{}: no zero crossing in domain", system.name());
                }
                Ok(events) => {
                    for ev in events {
                        println!(
                            "{}: JD {:.7} ({} iterations)",
                            system.name(),
                            ev.jd,
                            ev.iterations
                        );
                    }
                }
                Err(e) => {
                    eprintln!("Scan failed: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Dms { deg } => match to_sexagesimal(deg) {
            Ok(dms) => println!("{dms}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
    }
}
