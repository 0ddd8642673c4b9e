use std::fmt::Display;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::{Args, Parser, Subcommand};
use gok_rs::{
    BodyConfig, GeoLocation, RiseSetResult, SkyConfig, SkyEventConfig, SkySnapshot, THRACE_CITIES,
    TimeError, UtcTime, city_by_name, compute_bodies_with, compute_constellations,
    compute_moon_phase, compute_sky_events_with, compute_sky_on_date, compute_twilight,
};
use gok_time::{gmst_deg, jd_to_centuries, local_sidereal_time_deg};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter; overrides `--log-level`.
const LOG_ENV: &str = "GOK_LOG";

const DEFAULT_CITY: &str = "Çorlu";

/// Largest civil UTC offset in use, in hours.
const MAX_TZ_OFFSET_HOURS: f64 = 14.0;

#[derive(Parser)]
#[command(name = "gok", about = "Naked-eye sky calculator for amateur observers")]
struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Log filter used when GOK_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

/// When to look.
#[derive(Args, Clone)]
struct When {
    /// Local timestamp YYYY-MM-DD[Thh:mm[:ss]]; defaults to now
    #[arg(long)]
    date: Option<String>,
    /// Hours east of UTC for --date and printed times
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    tz_offset: f64,
}

/// When and where to look.
#[derive(Args, Clone)]
struct Observer {
    #[command(flatten)]
    when: When,
    /// City from the built-in catalog (see `gok cities`)
    #[arg(long)]
    city: Option<String>,
    /// Latitude in degrees, north positive
    #[arg(long, requires = "lon", conflicts_with = "city", allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, requires = "lat", conflicts_with = "city", allow_hyphen_values = true)]
    lon: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Julian Date and centuries since J2000 for a timestamp
    Jd {
        #[command(flatten)]
        when: When,
    },
    /// Greenwich and local mean sidereal time
    Lst {
        #[command(flatten)]
        observer: Observer,
    },
    /// Sun, Moon, planets and bright stars in azimuth/altitude
    Bodies {
        #[command(flatten)]
        observer: Observer,
        /// Leave out the bright-star catalog
        #[arg(long)]
        no_stars: bool,
        /// Skip the Moon's parallax correction
        #[arg(long)]
        geocentric_moon: bool,
        /// Only print bodies above the horizon
        #[arg(long)]
        visible: bool,
    },
    /// Constellation stick figures in azimuth/altitude
    Constellations {
        #[command(flatten)]
        observer: Observer,
    },
    /// Moon phase, illumination and age
    Moon {
        #[command(flatten)]
        when: When,
    },
    /// Meteor showers active on the date
    Events {
        #[command(flatten)]
        observer: Observer,
        /// Also report peaks up to this many days ahead
        #[arg(long, default_value_t = 0)]
        lookahead: u32,
        /// Drop showers whose radiant never rises
        #[arg(long)]
        radiant_filter: bool,
    },
    /// Everything at once
    Sky {
        #[command(flatten)]
        observer: Observer,
    },
    /// Sunrise, sunset and twilight times for the date
    Twilight {
        #[command(flatten)]
        observer: Observer,
    },
    /// List the built-in cities
    Cities,
    /// Refresh the sky summary on an interval
    Watch {
        #[command(flatten)]
        observer: Observer,
        /// Seconds between refreshes
        #[arg(long, default_value_t = 300)]
        interval: u64,
        /// Stop after this many refreshes (default: run until interrupted)
        #[arg(long)]
        count: Option<u64>,
    },
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);
    let json = cli.json;

    match cli.command {
        Commands::Jd { when } => {
            let time = when.resolve().utc;
            let jd = require(time.to_jd(), "date");
            let t = jd_to_centuries(jd);
            if json {
                print_json(&serde_json::json!({ "utc": time, "jd": jd, "centuries": t }));
            } else {
                println!("UTC: {time}");
                println!("JD:  {jd:.6}");
                println!("T:   {t:.10}");
            }
        }

        Commands::Lst { observer } => {
            let time = observer.when.resolve().utc;
            let location = observer.location();
            let jd = require(time.to_jd(), "date");
            let gmst = gmst_deg(jd);
            let lst = local_sidereal_time_deg(gmst, location.longitude_deg);
            if json {
                print_json(&serde_json::json!({
                    "utc": time,
                    "longitude_deg": location.longitude_deg,
                    "gmst_deg": gmst,
                    "lst_deg": lst,
                }));
            } else {
                println!("GMST: {gmst:.4} deg ({})", hms(gmst / 15.0));
                println!("LST:  {lst:.4} deg ({})", hms(lst / 15.0));
            }
        }

        Commands::Bodies {
            observer,
            no_stars,
            geocentric_moon,
            visible,
        } => {
            let location = observer.location();
            let config = BodyConfig {
                include_stars: !no_stars,
                moon_parallax: !geocentric_moon,
            };
            let mut bodies = require(
                compute_bodies_with(
                    observer.when.resolve().utc,
                    location.latitude_deg,
                    location.longitude_deg,
                    &config,
                ),
                "bodies",
            );
            if visible {
                bodies.retain(|b| b.is_above_horizon());
            }
            if json {
                print_json(&bodies);
            } else {
                for b in &bodies {
                    println!(
                        "{:<12} {:<6} az {:>7.2} alt {:>6.2}  {:>12.4} {:<2}  mag {:>5.2}",
                        b.name,
                        format!("{:?}", b.kind),
                        b.azimuth_deg,
                        b.altitude_deg,
                        b.distance,
                        b.kind.distance_unit(),
                        b.magnitude
                    );
                }
            }
        }

        Commands::Constellations { observer } => {
            let location = observer.location();
            let states = require(
                compute_constellations(
                    observer.when.resolve().utc,
                    location.latitude_deg,
                    location.longitude_deg,
                ),
                "constellations",
            );
            if json {
                print_json(&states);
            } else {
                for c in &states {
                    let state = if c.is_partly_visible() { "visible" } else { "below horizon" };
                    println!("{} ({state})", c.name);
                    for l in &c.lines {
                        println!(
                            "  {:>7.2}/{:>6.2} -> {:>7.2}/{:>6.2}",
                            l.from.azimuth_deg, l.from.altitude_deg, l.to.azimuth_deg, l.to.altitude_deg
                        );
                    }
                }
            }
        }

        Commands::Moon { when } => {
            let moon = require(compute_moon_phase(when.resolve().utc), "moon phase");
            if json {
                print_json(&moon);
            } else {
                println!("{} {}", moon.emoji, moon.phase_name);
                println!("Illumination: {:.1}%", moon.illumination * 100.0);
                println!("Age:          {:.2} days", moon.age_days);
                println!("Elongation:   {:.2} deg", moon.elongation_deg);
            }
        }

        Commands::Events {
            observer,
            lookahead,
            radiant_filter,
        } => {
            let location = observer.location();
            let config = SkyEventConfig {
                lookahead_days: lookahead,
                radiant_filter,
            };
            let events = require(
                compute_sky_events_with(
                    observer.when.resolve().local,
                    location.latitude_deg,
                    location.longitude_deg,
                    &config,
                ),
                "sky events",
            );
            if json {
                print_json(&events);
            } else if events.is_empty() {
                println!("No meteor showers today.");
            } else {
                for e in &events {
                    println!("{e}");
                }
            }
        }

        Commands::Sky { observer } => {
            let snapshot = observer.snapshot();
            if json {
                print_json(&snapshot);
            } else {
                print_summary(&snapshot, observer.when.tz_offset);
            }
        }

        Commands::Twilight { observer } => {
            let location = observer.location();
            let events = require(
                compute_twilight(
                    observer.when.resolve().local,
                    location.latitude_deg,
                    location.longitude_deg,
                ),
                "twilight",
            );
            if json {
                print_json(&events);
            } else {
                for (event, result) in &events {
                    let when = match result {
                        RiseSetResult::Event { jd_utc, .. } => {
                            clock(*jd_utc, observer.when.tz_offset)
                        }
                        RiseSetResult::NeverRises => "sun stays below".to_string(),
                        RiseSetResult::NeverSets => "sun stays above".to_string(),
                    };
                    println!("{:<18} {when}", event.name());
                }
            }
        }

        Commands::Cities => {
            if json {
                print_json(&THRACE_CITIES);
            } else {
                for c in &THRACE_CITIES {
                    println!("{:<12} {:>8.4} {:>8.4}", c.name, c.latitude, c.longitude);
                }
            }
        }

        Commands::Watch {
            observer,
            interval,
            count,
        } => {
            let mut refreshes = 0u64;
            loop {
                let snapshot = observer.snapshot();
                info!(jd = snapshot.jd, "sky refreshed");
                if json {
                    match serde_json::to_string(&snapshot) {
                        Ok(line) => println!("{line}"),
                        Err(e) => fail(format!("JSON encoding failed: {e}")),
                    }
                } else {
                    print_summary(&snapshot, observer.when.tz_offset);
                    println!();
                }
                refreshes += 1;
                if count.is_some_and(|n| refreshes >= n) {
                    break;
                }
                debug!(seconds = interval, "sleeping");
                thread::sleep(Duration::from_secs(interval));
            }
        }
    }
}

/// A query time seen two ways.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ObserverTime {
    /// Instant for positions and sidereal time.
    utc: UtcTime,
    /// Civil time at the observer; its calendar day selects meteor showers
    /// and the twilight day.
    local: UtcTime,
}

/// Resolve `--date`/`--tz-offset` against the current instant `now`.
///
/// `date` is local civil time. Without it, `now` is shifted into local time.
fn resolve_time(
    date: Option<&str>,
    tz_offset: f64,
    now: UtcTime,
) -> Result<ObserverTime, TimeError> {
    if !tz_offset.is_finite() || tz_offset.abs() > MAX_TZ_OFFSET_HOURS {
        return Err(TimeError::InvalidDate("UTC offset must be within 14 hours of UTC"));
    }
    match date {
        Some(s) => {
            let local: UtcTime = s.parse()?;
            Ok(ObserverTime {
                utc: local.local_to_utc(tz_offset)?,
                local,
            })
        }
        None => Ok(ObserverTime {
            utc: now,
            local: now.local_to_utc(-tz_offset)?,
        }),
    }
}

/// Pick the observer location from `--lat/--lon` or `--city`, falling back to
/// the default city, and reject coordinates outside the globe.
fn resolve_location(
    lat: Option<f64>,
    lon: Option<f64>,
    city: Option<&str>,
) -> Result<GeoLocation, String> {
    let location = match (lat, lon) {
        (Some(lat), Some(lon)) => GeoLocation::from_lat_lon(lat, lon),
        _ => {
            let name = city.unwrap_or(DEFAULT_CITY);
            match city_by_name(name) {
                Some(city) => city.location(),
                None => return Err(format!("Unknown city: {name} (see `gok cities`)")),
            }
        }
    };
    location
        .validate()
        .map_err(|e| format!("Invalid location: {e}"))?;
    Ok(location)
}

impl When {
    fn resolve(&self) -> ObserverTime {
        require(resolve_time(self.date.as_deref(), self.tz_offset, now()), "date")
    }
}

impl Observer {
    fn location(&self) -> GeoLocation {
        match resolve_location(self.lat, self.lon, self.city.as_deref()) {
            Ok(location) => location,
            Err(msg) => fail(msg),
        }
    }

    fn snapshot(&self) -> SkySnapshot {
        let location = self.location();
        let time = self.when.resolve();
        require(
            compute_sky_on_date(
                time.utc,
                time.local,
                location.latitude_deg,
                location.longitude_deg,
                &SkyConfig::default(),
            ),
            "sky",
        )
    }
}

fn now() -> UtcTime {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => UtcTime::from_unix_seconds(d.as_secs_f64()),
        Err(e) => fail(format!("System clock before 1970: {e}")),
    }
}

fn print_summary(snapshot: &SkySnapshot, tz_offset: f64) {
    println!(
        "{} (local {}), lat {:.4} lon {:.4}, LST {}",
        snapshot.time,
        clock(snapshot.jd, tz_offset),
        snapshot.location.latitude_deg,
        snapshot.location.longitude_deg,
        hms(snapshot.lst_deg / 15.0)
    );
    let moon = &snapshot.moon;
    println!(
        "Moon: {} {} ({:.0}% lit, {:.1} days)",
        moon.emoji,
        moon.phase_name,
        moon.illumination * 100.0,
        moon.age_days
    );
    let up: Vec<String> = snapshot
        .bodies
        .iter()
        .filter(|b| b.is_above_horizon())
        .map(|b| format!("{} {:.0}°", b.name, b.altitude_deg))
        .collect();
    println!("Above horizon: {}", if up.is_empty() { "-".to_string() } else { up.join(", ") });
    let figures: Vec<&str> = snapshot
        .constellations
        .iter()
        .filter(|c| c.is_partly_visible())
        .map(|c| c.name)
        .collect();
    println!("Constellations: {}", figures.join(", "));
    for e in &snapshot.events {
        println!("{e}");
    }
}

/// Local wall-clock time `HH:MM` of a UTC Julian Date.
fn clock(jd_utc: f64, tz_offset: f64) -> String {
    let t = UtcTime::from_jd(jd_utc + tz_offset / 24.0);
    format!("{:02}:{:02}", t.hour, t.minute)
}

fn hms(hours: f64) -> String {
    let total = (hours * 3600.0).round() as u64 % 86_400;
    format!("{:02}h{:02}m{:02}s", total / 3600, (total / 60) % 60, total % 60)
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(format!("JSON encoding failed: {e}")),
    }
}

fn require<T, E: Display>(result: Result<T, E>, what: &str) -> T {
    match result {
        Ok(v) => v,
        Err(e) => fail(format!("Failed to compute {what}: {e}")),
    }
}

fn fail(msg: String) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}
