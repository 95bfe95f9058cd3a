use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use starsky::angle::{format_dms, format_hms, parse_dms_to_deg, parse_hms_to_deg, wrap_radians};
use starsky::constants::{AU, DEGRAD, RADEG, SECONDS_PER_DAY, T_J2000, VLIGHT_AU};
use starsky::linalg::{to_polar, Vec3};
use starsky::ref_system::RefSystem;
use starsky::sky::{hour_angle, star_to_horizontal, sun_horizontal, CatalogueStar, Observer};
use starsky::starsky_errors::StarskyError;
use starsky::sun::{sun_in, sun_pos};
use starsky::time::{date_to_mjd, from_mjd, gmst, julian_centuries, CalendarDate};

#[derive(Parser)]
#[command(name = "coco", about = "Coordinate conversions for a UTC instant and an observer")]
struct Cli {
    /// UTC date (YYYY-MM-DDTHH:MM:SS), defaults to now
    #[arg(long)]
    date: Option<String>,

    /// Geographic latitude in degrees
    #[arg(long, default_value = "53.319927", allow_hyphen_values = true)]
    lat: f64,

    /// Geographic longitude in degrees, positive east
    #[arg(long, default_value = "-6.264353", allow_hyphen_values = true)]
    lon: f64,

    /// Right ascension of a star (HH MM SS.SS, equinox of date)
    #[arg(long, requires = "dec")]
    ra: Option<String>,

    /// Declination of a star (±DD MM SS.S, equinox of date)
    #[arg(long, requires = "ra", allow_hyphen_values = true)]
    dec: Option<String>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) -> Result<(), StarskyError> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {l} - {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))
        .map_err(|e| StarskyError::LoggerSetup(e.to_string()))?;

    log4rs::init_config(config).map_err(|e| StarskyError::LoggerSetup(e.to_string()))?;
    Ok(())
}

fn print_vector(label: &str, v: &Vec3) {
    println!("{label:<24} ({:+.8}, {:+.8}, {:+.8})", v.x, v.y, v.z);
}

fn main() -> Result<(), StarskyError> {
    let cli = Cli::parse();
    init_logger(cli.verbose)?;

    let observer = Observer::from_degrees(cli.lat, cli.lon)?;
    let mjd = match &cli.date {
        Some(date) => date_to_mjd(date)?,
        None => CalendarDate::now()?.mjd(),
    };
    let t = julian_centuries(mjd);
    let lst = observer.local_sidereal_time(mjd);

    log::info!("Latitude:  {}", format_dms(cli.lat));
    log::info!("Longitude: {}", format_dms(cli.lon));
    log::info!("Time:      {} UTC", from_mjd(mjd));
    log::debug!("Epoch:     T = {t:.10} Julian centuries");

    println!("MJD                      {mjd:.8}");
    println!("GMST                     {}", format_hms(gmst(mjd) * DEGRAD));
    println!("LST                      {}", format_hms(lst * DEGRAD));

    let sun = sun_pos(t);
    print_vector("Sun (ecliptic of date)", &sun);
    println!("Sun distance             {:.0} km", sun.norm() * AU);
    println!(
        "Sun light time           {:.1} s",
        sun.norm() / VLIGHT_AU * SECONDS_PER_DAY
    );
    print_vector("Sun (equator of date)", &sun_in(t, &RefSystem::Equm(t)));
    print_vector("Sun (equator J2000)", &sun_in(t, &RefSystem::Equm(T_J2000)));

    let equ = to_polar(&sun_in(t, &RefSystem::Equm(t)));
    println!(
        "Sun RA / Dec             {} / {}",
        format_hms(wrap_radians(equ.phi) * DEGRAD),
        format_dms(equ.theta * DEGRAD)
    );

    let (alt, az) = sun_horizontal(mjd, &observer);
    println!(
        "Sun Az / Alt             {} / {}",
        format_dms(az * DEGRAD),
        format_dms(alt * DEGRAD)
    );

    if let (Some(ra), Some(dec)) = (&cli.ra, &cli.dec) {
        let (ra, _) = parse_hms_to_deg(ra)?;
        let (dec, _) = parse_dms_to_deg(dec)?;
        let star = CatalogueStar {
            ra,
            dec,
            magnitude: 0.0,
        };

        log::debug!(
            "Hour angle: {}",
            format_hms(hour_angle(lst, star.ra * RADEG) * DEGRAD)
        );

        let (alt, az) = star_to_horizontal(&star, lst, &observer);
        println!(
            "Star Az / Alt            {} / {}",
            format_dms(az * DEGRAD),
            format_dms(alt * DEGRAD)
        );
    }

    Ok(())
}
