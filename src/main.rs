use clap::{ArgAction, Parser};
use log::warn;
use rdpcurve::construct::{from_function, DEFAULT_DELTA};
use rdpcurve::render::{CurvePrinter, PrintConfig};
use rdpcurve::{Point, Precision, DEFAULT_EPSILON};
use std::env;
use std::error::Error;
use std::io;
use tracing_subscriber::filter::LevelFilter;

const DEFAULT_WIDTH: usize = 80;
const DEFAULT_HEIGHT: usize = 24;

/// Sample a curve, simplify it with Ramer-Douglas-Peucker and draw both versions.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Simplification tolerance [default: 0.075]. Anything which is not a number counts as 0.
    #[arg(allow_negative_numbers = true)]
    epsilon: Option<String>,

    /// Log more detail to stderr; repeat for debug output.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}

fn fmt_point(p: &Point) -> String {
    format!("({}, {})", p.x, p.y)
}

fn parse_epsilon(arg: Option<&str>) -> Precision {
    let Some(s) = arg else {
        return DEFAULT_EPSILON;
    };
    s.trim().parse().unwrap_or_else(|_| {
        warn!("could not parse epsilon {s:?}, using 0");
        0.0
    })
}

fn env_size(name: &str, default: usize) -> usize {
    match env::var(name).ok().and_then(|v| v.trim().parse().ok()) {
        Some(n) if n > 0 => n,
        _ => {
            warn!("environment does not contain a usable {name}, using {default}");
            default
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(log_level(args.verbose))
        .init();

    let epsilon = parse_epsilon(args.epsilon.as_deref());

    let width = env_size("COLUMNS", DEFAULT_WIDTH);
    let height = env_size("LINES", DEFAULT_HEIGHT);
    let printer = CurvePrinter::new(PrintConfig {
        symmetric_y: false,
        ..PrintConfig::with_size(width, height)
    });

    let curve = from_function(-5.0, 5.0, DEFAULT_DELTA, |x: Precision| (0.25 * x).tan())?;
    if let (Some(first), Some(last)) = (curve.first(), curve.last()) {
        println!("Beginning {} and {}", fmt_point(first), fmt_point(last));
    }
    println!("start has length of {}", curve.len());

    let simplified = curve.simplify(epsilon)?;
    println!(
        "epsilon={epsilon} result has {} points",
        simplified.len()
    );
    if let (Some(first), Some(last)) = (simplified.first(), simplified.last()) {
        println!("After RDP {} and {}", fmt_point(first), fmt_point(last));
    }

    let mut stdout = io::stdout().lock();
    printer.print(&curve, &mut stdout)?;
    printer.print(&simplified, &mut stdout)?;
    Ok(())
}
