//! Command-line argument parsing and processing.
//!
//! The command line is `suntime [OPTIONS] <day-offset> <location...>`.
//! Options may appear anywhere. Southern and western locations and negative
//! offsets begin with `-`, so only the exact short flags below are treated as
//! options; every other dash argument, including unrecognised `--words`, is
//! positional. Anything after `--` is positional too.
//!
//! Only a missing offset or an empty location list is a usage error. A day
//! offset that is not a plain integer is read like C's `strtol`: its leading
//! signed digits, or 0.

use crate::logger::Log;

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Print sunrise and sunset for each location
    Run {
        debug_enabled: bool,
        utc: bool,
        offset_days: i64,
        locations: Vec<String>,
    },
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show the usage line due to missing or invalid positional arguments
    ShowUsageDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// # Arguments
    /// * `args` - Iterator over command-line arguments, program name first
    ///
    /// # Returns
    /// ParsedArgs containing the determined action
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut debug_enabled = false;
        let mut utc = false;
        let mut display_help = false;
        let mut display_version = false;
        let mut options_ended = false;
        let mut positionals: Vec<String> = Vec::new();

        for arg in args.into_iter().skip(1) {
            let arg_str = arg.as_ref();
            if options_ended {
                positionals.push(arg_str.to_string());
                continue;
            }
            match arg_str {
                "--help" | "-h" => display_help = true,
                "--version" | "-V" | "-v" => display_version = true,
                "--debug" | "-d" => debug_enabled = true,
                "--utc" | "-u" => utc = true,
                "--" => options_ended = true,
                _ => positionals.push(arg_str.to_string()),
            }
        }

        let action = if display_version {
            CliAction::ShowVersion
        } else if display_help {
            CliAction::ShowHelp
        } else {
            Self::positional_action(debug_enabled, utc, positionals)
        };

        ParsedArgs { action }
    }

    fn positional_action(debug_enabled: bool, utc: bool, mut positionals: Vec<String>) -> CliAction {
        if positionals.len() < 2 {
            return CliAction::ShowUsageDueToError;
        }

        let locations = positionals.split_off(1);
        let offset = &positionals[0];
        let offset_days = parse_day_offset(offset);
        if offset.parse::<i64>().is_err() {
            Log::log_warning(&format!("Day offset '{}' read as {}", offset, offset_days));
        }

        CliAction::Run {
            debug_enabled,
            utc,
            offset_days,
            locations,
        }
    }

    /// Convenience method to parse from std::env::args()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Read a day offset like C's `strtol` in base 10.
///
/// Leading whitespace and one sign are skipped, then every following decimal
/// digit is taken. Text without digits reads as 0 and values past the `i64`
/// range saturate.
pub fn parse_day_offset(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| {
            let digit = i64::from(digit - b'0');
            if negative {
                acc.saturating_mul(10).saturating_sub(digit)
            } else {
                acc.saturating_mul(10).saturating_add(digit)
            }
        })
}

/// One-line usage summary.
pub fn usage_text() -> String {
    format!(
        "usage: {} [OPTIONS] <offset in days> <location...>",
        env!("CARGO_PKG_NAME")
    )
}

/// Full help text.
pub fn help_text() -> String {
    format!(
        "{name} {version}\n\
         {description}\n\
         \n\
         {usage}\n\
         \n\
         Arguments:\n\
         \x20 <offset in days>   Days to add to today, may be negative\n\
         \x20 <location>         ISO 6709 ±DDMM±DDDMM or ±DDMMSS±DDDMMSS, or a configured alias\n\
         \n\
         Options:\n\
         \x20 -d, --debug        Print calculation details to stderr\n\
         \x20 -u, --utc          Print times in UTC instead of local time\n\
         \x20 -h, --help         Print help information\n\
         \x20 -V, --version      Print version information\n",
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        description = env!("CARGO_PKG_DESCRIPTION"),
        usage = usage_text(),
    )
}

/// Version line.
pub fn version_text() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
