//! WireGuard Vanity Key Generator CLI
//!
//! Usage:
//!   wg_vanity hello            # Find a public key starting with "hello"
//!   wg_vanity -c Hi -l 3       # Case sensitive, three results per search
//!   wg_vanity "^wg./" -T 10m   # Regex search, give up after 10 minutes

use std::io::Write;
use std::process;
use std::sync::atomic::Ordering;
use std::thread;

use clap::Parser;

use wg_vanity::format::{humanize_duration, number_format, plural};
use wg_vanity::matcher::is_regex;
use wg_vanity::{eta, probability, Config, Cruncher, Match, Options};

fn main() {
    let config = Config::parse();

    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        process::exit(2);
    }

    let timeout = config.parse_timeout().unwrap_or_default();
    let workers = config.worker_count();

    let mut cruncher = match Cruncher::new(Options {
        parallelism: workers,
        case_sensitive: config.case_sensitive,
    }) {
        Ok(cruncher) => cruncher,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(2);
        }
    };

    if let Some(timeout) = timeout {
        println!("Quitting after {}", humanize_duration(timeout));
    }

    print!("Calculating speed: ");
    let _ = std::io::stdout().flush();
    let calibration = match cruncher.calibrate() {
        Ok(calibration) => calibration,
        Err(e) => {
            eprintln!("\nCalibration failed: {}", e);
            process::exit(1);
        }
    };
    println!(
        "{} calculations per second using {} CPU {}",
        number_format(calibration.trials_per_second),
        workers,
        plural("core", workers as u64)
    );

    let case_mode = if config.case_sensitive {
        "sensitive"
    } else {
        "insensitive"
    };
    println!(
        "Case-{} search, exiting after {} {}",
        case_mode,
        config.limit,
        plural("result", config.limit as u64)
    );

    for search in &config.searches {
        let search = search.trim();

        if is_regex(search) {
            if let Err(e) = cruncher.register_regex(search, config.limit) {
                eprintln!("{}", e);
                process::exit(2);
            }
            println!(
                "Probability for \"{}\" cannot be calculated as it is a regular expression",
                search
            );
        } else {
            if let Err(e) = cruncher.register_literal(search, config.limit) {
                eprintln!("{}", e);
                process::exit(2);
            }
            let one_in = probability(search, config.case_sensitive);
            println!(
                "Probability for \"{}\": 1 in {} (approx {} per match)",
                search,
                number_format(one_in),
                humanize_duration(eta(one_in, calibration.per_trial))
            );
        }
    }

    let abort = cruncher.abort_handle();
    ctrlc::set_handler(move || {
        abort.store(true, Ordering::Relaxed);
    })
    .expect("Error setting Ctrl-C handler");

    if let Some(timeout) = timeout {
        let abort = cruncher.abort_handle();
        thread::spawn(move || {
            thread::sleep(timeout);
            abort.store(true, Ordering::Relaxed);
        });
    }

    println!("\nPress Ctrl-c to cancel\n");

    let outcome = if config.summary {
        cruncher.collect_all().map(|matches| {
            for result in &matches {
                print_match(result);
            }
        })
    } else {
        cruncher.run(|result| print_match(&result))
    };

    if let Err(e) = outcome {
        eprintln!("Search failed: {}", e);
        process::exit(1);
    }
}

fn print_match(result: &Match) {
    println!("private {}   public {}", result.private, result.public);
}
