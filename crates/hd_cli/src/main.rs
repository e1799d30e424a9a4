use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hd_base::{Locale, gate_for_degree, gate_from_longitude, sun_longitude_deg};
use hd_engine::{
    CenterMode, ChartConfig, ChartResult, QuickResult, compute_fallback_with,
    compute_full_chart_with, compute_quick_type_with,
};
use hd_time::{BirthData, BirthInput, ValidationConfig, jd_to_calendar, validate_birth};

#[derive(Parser)]
#[command(name = "hd", about = "Birth-chart archetype CLI")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quick archetype (type, strategy, description)
    Quick {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM)
        #[arg(long, default_value = "12:00")]
        time: String,
        /// Birth place (not used in the calculation)
        #[arg(long, default_value = "")]
        location: String,
        /// Label language: en or de
        #[arg(long, default_value = "en")]
        locale: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Full chart (gates, centers, type, authority, profile)
    Chart {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM)
        #[arg(long, default_value = "12:00")]
        time: String,
        /// Birth place (not used in the calculation)
        #[arg(long, default_value = "")]
        location: String,
        /// Label language: en or de
        #[arg(long, default_value = "en")]
        locale: String,
        /// Center definition: quick (placeholder heuristic) or gates
        #[arg(long, default_value = "quick")]
        centers: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Calendar-only archetype estimate
    Fallback {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Label language: en or de
        #[arg(long, default_value = "en")]
        locale: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Gate for an ecliptic longitude
    Gate {
        /// Ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Solar longitude and gates at a Julian Day
    Sun {
        /// Julian Day
        #[arg(long)]
        jd: f64,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Julian Day for a date and time
    Jd {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Time (HH:MM)
        #[arg(long, default_value = "00:00")]
        time: String,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_date(s: &str) -> Result<(i64, i64, i64), String> {
    let parts: Vec<&str> = s.trim().split('-').collect();
    if parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD, got {s:?}"));
    }
    let year: i64 = parts[0].parse().map_err(|e| format!("year: {e}"))?;
    let month: i64 = parts[1].parse().map_err(|e| format!("month: {e}"))?;
    let day: i64 = parts[2].parse().map_err(|e| format!("day: {e}"))?;
    Ok((year, month, day))
}

fn parse_time(s: &str) -> Result<(i64, i64), String> {
    let (h, m) = s
        .trim()
        .split_once(':')
        .ok_or_else(|| format!("expected HH:MM, got {s:?}"))?;
    let hour: i64 = h.parse().map_err(|e| format!("hour: {e}"))?;
    let minute: i64 = m.parse().map_err(|e| format!("minute: {e}"))?;
    Ok((hour, minute))
}

fn birth_input(date: &str, time: &str, location: &str) -> Result<BirthInput, String> {
    let (year, month, day) = parse_date(date)?;
    let (hour, minute) = parse_time(time)?;
    Ok(BirthInput {
        year,
        month,
        day,
        hour,
        minute,
        location: location.to_string(),
    })
}

fn require_birth(date: &str, time: &str, location: &str) -> BirthData {
    let input = birth_input(date, time, location).unwrap_or_else(|e| {
        eprintln!("Invalid date/time: {e}");
        std::process::exit(1);
    });
    validate_birth(&input, &ValidationConfig::default()).unwrap_or_else(|e| {
        eprintln!("Invalid birth data: {e}");
        std::process::exit(1);
    })
}

fn require_locale(s: &str) -> Locale {
    s.parse().unwrap_or_else(|e| {
        eprintln!("{e} (use en or de)");
        std::process::exit(1);
    })
}

fn require_center_mode(s: &str) -> CenterMode {
    s.parse().unwrap_or_else(|e| {
        eprintln!("{e} (use quick or gates)");
        std::process::exit(1);
    })
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("JSON encoding failed: {e}");
            std::process::exit(1);
        }
    }
}

fn print_quick(r: &QuickResult) {
    let palette = r.palette();
    println!("Type:        {}", r.hd_type.display_name());
    println!("Strategy:    {}", r.strategy);
    println!("Description: {}", r.description);
    println!(
        "Colors:      {} / {} / {}",
        palette.primary, palette.secondary, palette.accent
    );
}

fn print_chart(r: &ChartResult) {
    let centers: Vec<&str> = r.defined_centers.iter().map(|c| c.name()).collect();
    println!("Type:        {}", r.hd_type.display_name());
    println!("Strategy:    {}", r.strategy);
    println!("Authority:   {}", r.authority_label);
    println!("Profile:     {}", r.profile);
    println!(
        "Centers:     {}",
        if centers.is_empty() {
            "(none)".to_string()
        } else {
            centers.join(", ")
        }
    );
    println!(
        "Personality: Sun {:>2}  Earth {:>2}  (JD {:.5})",
        r.personality_gates.sun, r.personality_gates.earth, r.personality_jd
    );
    println!(
        "Design:      Sun {:>2}  Earth {:>2}  (JD {:.5})",
        r.design_gates.sun, r.design_gates.earth, r.design_jd
    );
    println!("Channels:    not computed");
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Quick {
            date,
            time,
            location,
            locale,
            json,
        } => {
            let birth = require_birth(&date, &time, &location);
            let locale = require_locale(&locale);
            let result = compute_quick_type_with(&birth, locale);
            info!(%birth, hd_type = %result.hd_type, "quick type computed");
            if json {
                print_json(&result);
            } else {
                print_quick(&result);
            }
        }

        Commands::Chart {
            date,
            time,
            location,
            locale,
            centers,
            json,
        } => {
            let birth = require_birth(&date, &time, &location);
            let config = ChartConfig::new(require_center_mode(&centers), require_locale(&locale));
            match compute_full_chart_with(&birth, &config) {
                Ok(result) => {
                    info!(%birth, hd_type = %result.hd_type, "chart computed");
                    if json {
                        print_json(&result);
                    } else {
                        print_chart(&result);
                    }
                }
                Err(e) => {
                    eprintln!("Chart calculation failed: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Fallback { date, locale, json } => {
            let birth = require_birth(&date, "00:00", "");
            let result = compute_fallback_with(&birth, require_locale(&locale));
            if json {
                print_json(&result);
            } else {
                print_quick(&result);
            }
        }

        Commands::Gate { lon, json } => {
            let info = gate_from_longitude(lon);
            if json {
                print_json(&info);
            } else {
                println!(
                    "Gate {} (slice {}, {:.4} deg in gate)",
                    info.gate, info.wheel_index, info.degrees_in_gate
                );
            }
        }

        Commands::Sun { jd, json } => {
            let lon = sun_longitude_deg(jd);
            let sun = gate_for_degree(lon);
            let earth = gate_for_degree(lon + 180.0);
            if json {
                print_json(&json!({
                    "jd": jd,
                    "sun_longitude_deg": lon,
                    "sun_gate": sun,
                    "earth_gate": earth,
                }));
            } else {
                println!("Sun longitude: {lon:.6} deg");
                println!("Sun gate:      {sun}");
                println!("Earth gate:    {earth}");
            }
        }

        Commands::Jd { date, time } => {
            let birth = require_birth(&date, &time, "");
            let jd = birth.to_jd();
            let (y, m, d) = jd_to_calendar(jd);
            println!("JD {jd:.6} ({y:04}-{m:02}-{d:09.6})");
        }
    }
}
