//! pgdelta - PostgreSQL statistics counters as live deltas.
//!
//! Usage:
//!   pgdelta                      # TUI, 1 second interval, default view
//!   pgdelta 5 --view databases   # TUI, 5 second interval
//!   pgdelta --count 3            # print three cycles to stdout and exit
//!   pgdelta --count 0 --json     # print JSON every cycle until Ctrl-C

use tikv_jemallocator::Jemalloc;
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::cell::RefCell;
use std::fs::File;
use std::io::{self, Write};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::Parser;
use tracing::{Level, info, warn};
use tracing_subscriber::EnvFilter;

use pgdelta_core::collector::PostgresCollector;
use pgdelta_core::session::Session;
use pgdelta_core::tui::App;
use pgdelta_core::view::{View, pg_views};

/// Live deltas of PostgreSQL cumulative statistics.
#[derive(Parser)]
#[command(name = "pgdelta", about = "PostgreSQL statistics delta viewer", version = pgdelta_core::VERSION)]
struct Args {
    /// Poll interval in seconds (1 to 86400).
    #[arg(value_name = "INTERVAL", default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..=86_400))]
    interval: u64,

    /// View to start with (see --list-views). Empty selects the default.
    #[arg(long, value_name = "NAME", default_value = "")]
    view: String,

    /// Start with lifetime counters instead of deltas since the baseline.
    #[arg(long)]
    absolute: bool,

    /// Print the available views and exit.
    #[arg(long)]
    list_views: bool,

    /// Batch mode: print N collection cycles to stdout instead of the TUI.
    /// 0 runs until Ctrl-C.
    #[arg(long, value_name = "N")]
    count: Option<u64>,

    /// Batch mode output as one JSON document per cycle.
    #[arg(long, requires = "count")]
    json: bool,

    /// libpq connection string. Defaults to PGHOST, PGPORT, PGUSER,
    /// PGPASSWORD and PGDATABASE.
    #[arg(long, value_name = "DSN")]
    dsn: Option<String>,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,

    /// Write log output to this file. Without it the TUI discards logs.
    #[arg(long, value_name = "PATH")]
    log_file: Option<String>,
}

fn log_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

/// Initializes the tracing subscriber, writing to `log_file` or stderr.
fn init_logging(verbose: u8, quiet: bool, log_file: Option<File>) {
    let level = log_level(verbose, quiet);
    let mut filter = EnvFilter::from_default_env();
    for target in ["pgdelta", "pgdelta_core"] {
        if let Ok(directive) = format!("{}={}", target, level).parse() {
            filter = filter.add_directive(directive);
        }
    }

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);
    match log_file {
        Some(file) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init(),
        None => builder.with_writer(io::stderr).init(),
    }
}

fn list_views() {
    for view in View::all() {
        let marker = if *view == View::default() { " (default)" } else { "" };
        println!("{:<12} {}{}", view.name(), view.title(), marker);
    }
}

fn main() {
    let args = Args::parse();

    if args.list_views {
        list_views();
        return;
    }

    let batch = args.count.is_some();
    let log_file = match &args.log_file {
        Some(path) => match File::create(path) {
            Ok(f) => Some(f),
            Err(e) => {
                eprintln!("Error: cannot open log file {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => None,
    };
    if batch || log_file.is_some() {
        init_logging(args.verbose, args.quiet, log_file);
    }

    let collector = match &args.dsn {
        Some(dsn) => PostgresCollector::with_connection_string(dsn.clone()),
        None => match PostgresCollector::from_env() {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                print_pg_hint();
                std::process::exit(1);
            }
        },
    };
    let collector = Rc::new(RefCell::new(collector));

    let views = pg_views(collector.clone(), !args.absolute);
    let mut session = Session::new(views, Duration::from_secs(args.interval));
    if let Err(e) = session.select_view(&args.view) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    info!(
        "pgdelta {} starting: view={}, interval={}s, relative={}",
        pgdelta_core::VERSION,
        session.active_view().name(),
        args.interval,
        !args.absolute
    );

    if let Err(e) = collector.borrow_mut().try_connect() {
        // Not fatal: every cycle retries the connection.
        warn!("PostgreSQL connection failed ({})", e);
        if batch {
            eprintln!("PostgreSQL: {}", e);
            print_pg_hint();
        }
    }

    match args.count {
        Some(count) => {
            if let Err(e) = run_batch(&mut session, count, args.json) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        None => {
            if let Err(e) = App::new(session).run() {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

/// Prints `count` cycles of the active view (0 = until Ctrl-C).
fn run_batch(session: &mut Session, count: u64, json: bool) -> io::Result<()> {
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        info!("Received shutdown signal");
        r.store(false, Ordering::SeqCst);
    }) {
        warn!("Failed to set Ctrl-C handler: {}", e);
    }

    let mut stdout = io::stdout().lock();
    let mut cycles: u64 = 0;

    while running.load(Ordering::SeqCst) && (count == 0 || cycles < count) {
        if cycles > 0 {
            // Sleep with periodic checks for shutdown signal
            let sleep_interval = Duration::from_millis(100);
            let mut remaining = session.time_to_wait();
            while remaining > Duration::ZERO && running.load(Ordering::SeqCst) {
                let sleep_time = remaining.min(sleep_interval);
                std::thread::sleep(sleep_time);
                remaining = remaining.saturating_sub(sleep_time);
            }
            if !running.load(Ordering::SeqCst) {
                break;
            }
        }

        session.collect_active();
        cycles += 1;

        if json {
            writeln!(stdout, "{}", session.render_json())?;
        } else {
            writeln!(stdout, "{}", session.render_text())?;
        }
        stdout.flush()?;
    }

    info!("Finished after {} cycles", cycles);
    Ok(())
}

/// Prints PostgreSQL connection configuration hints.
fn print_pg_hint() {
    const YELLOW: &str = "\x1b[33m";
    const RESET: &str = "\x1b[0m";

    eprintln!();
    eprintln!("{YELLOW}  Configure connection with environment variables:");
    eprintln!("    export PGHOST=localhost");
    eprintln!("    export PGPORT=5432");
    eprintln!("    export PGUSER=postgres");
    eprintln!("    export PGPASSWORD=secret");
    eprintln!("    export PGDATABASE=postgres");
    eprintln!();
    eprintln!("  or pass --dsn \"host=... user=... dbname=...\"{RESET}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(log_level(0, false), Level::INFO);
        assert_eq!(log_level(1, false), Level::DEBUG);
        assert_eq!(log_level(3, false), Level::TRACE);
        assert_eq!(log_level(2, true), Level::ERROR);
    }

    #[test]
    fn args_defaults() {
        let args = Args::try_parse_from(["pgdelta"]).unwrap();
        assert_eq!(args.interval, 1);
        assert_eq!(args.view, "");
        assert!(!args.absolute);
        assert!(args.count.is_none());
    }

    #[test]
    fn interval_must_be_positive() {
        assert!(Args::try_parse_from(["pgdelta", "0"]).is_err());
        assert!(Args::try_parse_from(["pgdelta", "86401"]).is_err());
        assert!(Args::try_parse_from(["pgdelta", "18446744073709551615"]).is_err());
        assert_eq!(
            Args::try_parse_from(["pgdelta", "86400"]).unwrap().interval,
            86_400
        );
        let args = Args::try_parse_from(["pgdelta", "5", "--view", "slru"]).unwrap();
        assert_eq!(args.interval, 5);
        assert_eq!(args.view, "slru");
    }

    #[test]
    fn json_requires_batch_mode() {
        assert!(Args::try_parse_from(["pgdelta", "--json"]).is_err());
        let args = Args::try_parse_from(["pgdelta", "--count", "2", "--json"]).unwrap();
        assert_eq!(args.count, Some(2));
        assert!(args.json);
    }
}
