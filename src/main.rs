use chrono::Utc;
use std::process;

use suntime::args::{CliAction, ParsedArgs, help_text, usage_text, version_text};
use suntime::config::Config;
use suntime::constants::*;
use suntime::logger::Log;
use suntime::report::{self, TimeBase};

/// Print one line per location argument.
///
/// Bad coordinates, polar days and an offset past the calendar's range are
/// reported per argument on stderr and do not change the exit code.
fn run(debug_enabled: bool, utc: bool, offset_days: i64, locations: &[String]) {
    let config = Config::load_or_default();
    Log::set_debug(debug_enabled || config.debug);
    config.log_config();

    let base = if utc || config.utc {
        TimeBase::Utc
    } else {
        TimeBase::Local
    };

    Log::log_info(&format!(
        "{} location(s), day offset {}",
        locations.len(),
        offset_days
    ));

    let Some(instant) = report::offset_instant(Utc::now(), offset_days) else {
        for arg in locations {
            Log::log_error(&format!(
                "{}: day offset {} is out of range",
                arg, offset_days
            ));
        }
        return;
    };
    Log::log_debug(&format!("Evaluating at {}", instant));

    for arg in locations {
        match report::evaluate(arg, instant, &config, base) {
            Ok(line) => println!("{}", line),
            Err(e) => Log::log_error(&format!("{}: {}", arg, e)),
        }
    }
}

fn main() {
    let parsed = ParsedArgs::from_env();

    match parsed.action {
        CliAction::ShowVersion => println!("{}", version_text()),
        CliAction::ShowHelp => print!("{}", help_text()),
        CliAction::ShowUsageDueToError => {
            eprintln!("{}", usage_text());
            process::exit(EXIT_FAILURE);
        }
        CliAction::Run {
            debug_enabled,
            utc,
            offset_days,
            locations,
        } => run(debug_enabled, utc, offset_days, &locations),
    }
}
