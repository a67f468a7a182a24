use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use attendance_grade::rules::{validate_rules, Rules};
use attendance_grade::{output, AttendanceError};

const EXIT_SUCCESS: i32 = 0;
const EXIT_OUTPUT: i32 = 1;
const EXIT_SOURCE: i32 = 2;
const EXIT_CAPACITY: i32 = 3;
const EXIT_CONFIG: i32 = 4;

const DEFAULT_INPUT: &str = "attendance_weekday_500.txt";

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "attendance-grade")]
#[command(about = "Score an attendance log and assign membership grades", long_about = None)]
#[command(version)]
struct Cli {
    /// Attendance log, one "<name> <day>" pair per line
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Enable verbose logging and per-user breakdowns
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/attendance-grade/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn main() {
    let cli = Cli::parse();
    attendance_grade::logging::init_tracing(cli.verbose);

    let config = match attendance_grade::config::load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate rule config at startup
    let rules_config = config.rules.unwrap_or_default();
    if let Err(errors) = validate_rules(&rules_config) {
        eprintln!("Rule config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }
    let rules = Rules::from_config(&rules_config);

    let (standings, stats) = match attendance_grade::run(&cli.input, rules) {
        Ok(result) => result,
        Err(e) => exit_with(e),
    };

    if cli.verbose {
        eprintln!(
            "Read {} lines: {} recorded, {} skipped, {} users",
            stats.lines,
            stats.recorded,
            stats.skipped,
            standings.len()
        );
    }

    match cli.format {
        Format::Json => match output::format_json(&standings) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize report: {}", e);
                std::process::exit(EXIT_OUTPUT);
            }
        },
        Format::Text if cli.verbose => {
            let use_colors = output::should_use_colors();
            for user in standings.users() {
                println!("{}", output::format_report_line(user, use_colors));
                println!("{}", output::format_user_detail(user));
            }
            println!();
            println!("{}", output::format_removed(&standings));
        }
        Format::Text => {
            let use_colors = output::should_use_colors();
            println!("{}", output::format_report(&standings, use_colors));
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

fn exit_with(error: AttendanceError) -> ! {
    eprintln!("{}", error);
    let code = match error {
        AttendanceError::CapacityExceeded { .. } => EXIT_CAPACITY,
        _ => EXIT_SOURCE,
    };
    std::process::exit(code);
}
