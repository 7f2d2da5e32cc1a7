use clap::{Parser, Subcommand};
use natal_chart::{BirthInput, TimeMode, compute_chart, resolve_instant};
use natal_core::{ALL_BODIES, SnapshotEphemeris};
use natal_zodiac::{deg_to_dms, detect_aspects, normalize_360, sign_position};

#[derive(Parser)]
#[command(name = "natal", about = "Natal chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Zodiac sign from ecliptic longitude
    Sign {
        /// Tropical ecliptic longitude in degrees
        lon: f64,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        deg: f64,
    },
    /// Normalize angle to [0, 360)
    Normalize {
        /// Angle in degrees
        deg: f64,
    },
    /// Detect aspects among the ten body longitudes
    Aspects {
        /// Comma-separated ecliptic longitudes for Sun,Moon,Mercury,Venus,Mars,Jupiter,Saturn,Uranus,Neptune,Pluto
        #[arg(long)]
        longitudes: String,
    },
    /// Whole-sign house cusps from an ascendant longitude
    Houses {
        /// Ascendant ecliptic longitude in degrees
        asc: f64,
    },
    /// Resolve a birth input to its UTC instant
    Resolve {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Time mode: exact, noon, sunrise, sunset, midnight
        #[arg(long, default_value = "noon")]
        mode: String,
        /// Local clock time (HH:MM), used with --mode exact
        #[arg(long, default_value = "12:00")]
        time: String,
        /// UTC offset of the birth place in hours (e.g. -7, 5.5)
        #[arg(long, default_value = "0")]
        tz: f64,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: Option<f64>,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: Option<f64>,
    },
    /// Compute a full chart from a longitude snapshot
    Chart {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Time mode: exact, noon, sunrise, sunset, midnight
        #[arg(long, default_value = "noon")]
        mode: String,
        /// Local clock time (HH:MM), used with --mode exact
        #[arg(long, default_value = "12:00")]
        time: String,
        /// UTC offset of the birth place in hours (e.g. -7, 5.5)
        #[arg(long, default_value = "0")]
        tz: f64,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: Option<f64>,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: Option<f64>,
        /// Comma-separated ecliptic longitudes for Sun,Moon,Mercury,Venus,Mars,Jupiter,Saturn,Uranus,Neptune,Pluto
        #[arg(long)]
        longitudes: String,
        /// Emit the chart as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_date(s: &str) -> (i32, u32, u32) {
    let parts: Vec<&str> = s.split('-').collect();
    let parsed = if parts.len() == 3 {
        match (
            parts[0].parse::<i32>(),
            parts[1].parse::<u32>(),
            parts[2].parse::<u32>(),
        ) {
            (Ok(y), Ok(m), Ok(d)) => Some((y, m, d)),
            _ => None,
        }
    } else {
        None
    };
    parsed.unwrap_or_else(|| {
        eprintln!("Invalid date: {s} (expected YYYY-MM-DD)");
        std::process::exit(1);
    })
}

fn parse_time(s: &str) -> (u32, u32) {
    let parts: Vec<&str> = s.split(':').collect();
    let parsed = if parts.len() == 2 {
        match (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
            (Ok(h), Ok(m)) => Some((h, m)),
            _ => None,
        }
    } else {
        None
    };
    parsed.unwrap_or_else(|| {
        eprintln!("Invalid time: {s} (expected HH:MM)");
        std::process::exit(1);
    })
}

fn parse_mode(s: &str) -> TimeMode {
    s.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn parse_longitudes(s: &str) -> [f64; 10] {
    let values: Vec<f64> = s
        .split(',')
        .map(|p| {
            p.trim().parse::<f64>().unwrap_or_else(|_| {
                eprintln!("Invalid longitude: {p}");
                std::process::exit(1);
            })
        })
        .collect();
    if values.len() != 10 {
        eprintln!(
            "Expected 10 longitudes (Sun..Pluto), got {}",
            values.len()
        );
        std::process::exit(1);
    }
    std::array::from_fn(|i| values[i])
}

fn birth_input(
    date: &str,
    mode: &str,
    time: &str,
    tz: f64,
    lat: Option<f64>,
    lon: Option<f64>,
) -> BirthInput {
    let (year, month, day) = parse_date(date);
    let (hour, minute) = parse_time(time);
    BirthInput {
        year,
        month,
        day,
        time_mode: parse_mode(mode),
        hour,
        minute,
        utc_offset_hours: tz,
        latitude_deg: lat,
        longitude_deg: lon,
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sign { lon } => {
            let pos = sign_position(lon);
            let dms = pos.dms;
            println!(
                "{} {} - {} deg {} min {:.1} sec ({:.4} deg in sign, {} {})",
                pos.sign.name(),
                pos.sign.symbol(),
                dms.degrees,
                dms.minutes,
                dms.seconds,
                pos.degrees_in_sign,
                pos.sign.element().name(),
                pos.sign.quality().name()
            );
        }

        Commands::Dms { deg } => {
            let dms = deg_to_dms(deg);
            println!("{} deg {} min {:.2} sec", dms.degrees, dms.minutes, dms.seconds);
        }

        Commands::Normalize { deg } => {
            println!("{:.6}", normalize_360(deg));
        }

        Commands::Aspects { longitudes } => {
            let lons = parse_longitudes(&longitudes);
            let pairs: Vec<_> = ALL_BODIES
                .iter()
                .enumerate()
                .map(|(i, &body)| (body, normalize_360(lons[i])))
                .collect();
            let aspects = detect_aspects(&pairs);
            if aspects.is_empty() {
                println!("No aspects");
            }
            for a in &aspects {
                println!(
                    "{} {} {} (orb {:.2} deg)",
                    a.body_a.name(),
                    a.kind.name(),
                    a.body_b.name(),
                    a.orb_deg
                );
            }
        }

        Commands::Houses { asc } => {
            let asc = normalize_360(asc);
            let pos = sign_position(asc);
            println!("Ascendant: {:.4} deg ({})", asc, pos.sign.name());
            for i in 0..12u32 {
                let cusp = normalize_360(asc + 30.0 * i as f64);
                let cusp_sign = sign_position(cusp);
                println!("House {:2}: {:8.4} deg ({})", i + 1, cusp, cusp_sign.sign.name());
            }
        }

        Commands::Resolve {
            date,
            mode,
            time,
            tz,
            lat,
            lon,
        } => {
            let input = birth_input(&date, &mode, &time, tz, lat, lon);
            // No ephemeris here; sunrise/sunset resolve via the fixed defaults
            let eph = SnapshotEphemeris::from_longitudes([0.0; 10]);
            match resolve_instant(&input, &eph) {
                Ok(instant) => println!("{instant}"),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Chart {
            date,
            mode,
            time,
            tz,
            lat,
            lon,
            longitudes,
            json,
        } => {
            let input = birth_input(&date, &mode, &time, tz, lat, lon);
            let eph = SnapshotEphemeris::from_longitudes(parse_longitudes(&longitudes));
            let chart = compute_chart(&input, &eph, None).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });

            if json {
                match serde_json::to_string_pretty(&chart) {
                    Ok(s) => println!("{s}"),
                    Err(e) => {
                        eprintln!("Failed to serialize chart: {e}");
                        std::process::exit(1);
                    }
                }
                return;
            }

            println!("Instant: {}", chart.instant);
            for p in &chart.positions {
                let dms = p.dms_in_sign();
                println!(
                    "{:8} {:8.4} deg - {} {} deg {} min ({} {})",
                    p.body.name(),
                    p.longitude_deg,
                    p.sign.name(),
                    dms.degrees,
                    dms.minutes,
                    p.element.name(),
                    p.quality.name()
                );
            }
            if chart.aspects.is_empty() {
                println!("Aspects: none");
            } else {
                println!("Aspects:");
                for a in &chart.aspects {
                    println!(
                        "  {} {} {} (orb {:.2} deg)",
                        a.body_a.name(),
                        a.kind.name(),
                        a.body_b.name(),
                        a.orb_deg
                    );
                }
            }
            if let Some(asc) = chart.houses.ascendant_deg {
                println!("Ascendant: {asc:.4} deg");
            } else {
                println!("Houses: unavailable");
            }
        }
    }
}
