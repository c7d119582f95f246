use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use course_core::model::Course;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, CourseService, LoadedCourse};
use storage::{CourseSource, EmbeddedCourse, JsonFileCourse};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyCoursePath,
    InvalidLogFilter { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyCoursePath => write!(f, "--course requires a non-empty path"),
            ArgsError::InvalidLogFilter { raw } => write!(f, "invalid --log filter: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

/// `check` found authoring issues in the course.
#[derive(Debug)]
struct LintFailed {
    issues: usize,
}

impl fmt::Display for LintFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "course check failed with {} issue(s)", self.issues)
    }
}

impl std::error::Error for LintFailed {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    course: Arc<Course>,
    clock: Clock,
}

impl UiApp for DesktopApp {
    fn course(&self) -> Arc<Course> {
        Arc::clone(&self.course)
    }

    fn clock(&self) -> Clock {
        self.clock
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [ui]  [--course <course.json>] [--log <filter>]");
    eprintln!("  cargo run -p app -- check [--course <course.json>] [--log <filter>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  the embedded course, --log {DEFAULT_LOG_FILTER}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  COURSE_FILE, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

struct Args {
    course_file: Option<PathBuf>,
    log_filter: String,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut course_file = std::env::var("COURSE_FILE")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut log_filter =
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--course" => {
                    let value = require_value(args, "--course")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyCoursePath);
                    }
                    course_file = Some(PathBuf::from(value));
                }
                "--log" => {
                    log_filter = require_value(args, "--log")?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            course_file,
            log_filter,
        })
    }

    fn source(&self) -> Arc<dyn CourseSource> {
        match &self.course_file {
            Some(path) => Arc::new(JsonFileCourse::new(path.clone())),
            None => Arc::new(EmbeddedCourse),
        }
    }
}

fn init_tracing(filter: &str) -> Result<(), ArgsError> {
    let filter = EnvFilter::try_new(filter).map_err(|_| ArgsError::InvalidLogFilter {
        raw: filter.to_string(),
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn report(origin: &str, loaded: &LoadedCourse) -> Result<(), LintFailed> {
    let course = &loaded.course;
    println!(
        "{origin}: '{}' by {} ({} modules)",
        course.title(),
        course.author(),
        course.len()
    );
    for issue in &loaded.issues {
        println!("  warning: {issue}");
    }

    if loaded.issues.is_empty() {
        Ok(())
    } else {
        Err(LintFailed {
            issues: loaded.issues.len(),
        })
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    init_tracing(&parsed.log_filter)?;

    let service = CourseService::new(parsed.source());
    let loaded = service.load().await?;

    match cmd {
        Command::Check => {
            report(&service.origin(), &loaded)?;
            Ok(())
        }
        Command::Ui => {
            let title = loaded.course.title().to_string();
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                course: loaded.course,
                clock: Clock::system(),
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(title.as_str())
                    .with_always_on_top(false),
            );

            info!(%title, "launching desktop window");
            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
