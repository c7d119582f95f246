use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;

use storage::{CourseSource, EmbeddedCourse, JsonFileCourse, render_course};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
struct Args {
    file: Option<PathBuf>,
    normalize: bool,
}

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  course-check [--file <course.json>] [--normalize]");
    eprintln!();
    eprintln!("Without --file the embedded course is checked.");
    eprintln!("--normalize prints the document re-rendered from the parsed course.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  COURSE_FILE, RUST_LOG");
}

impl Args {
    fn parse() -> Result<Self, ArgsError> {
        let mut file = std::env::var("COURSE_FILE").ok().map(PathBuf::from);
        let mut normalize = false;

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--file" => {
                    let value = args
                        .next()
                        .ok_or(ArgsError::MissingValue { flag: "--file" })?;
                    file = Some(PathBuf::from(value));
                }
                "--normalize" => normalize = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { file, normalize })
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::parse() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return ExitCode::from(1);
        }
    };

    let source: Box<dyn CourseSource> = match args.file {
        Some(path) => Box::new(JsonFileCourse::new(path)),
        None => Box::new(EmbeddedCourse),
    };

    let course = match source.load().await {
        Ok(course) => course,
        Err(err) => {
            eprintln!("{}: {err}", source.describe());
            return ExitCode::from(1);
        }
    };

    if args.normalize {
        match render_course(&course) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::from(1);
            }
        }
        return ExitCode::SUCCESS;
    }

    println!(
        "{}: '{}' by {} ({} modules)",
        source.describe(),
        course.title(),
        course.author(),
        course.len()
    );

    let issues = course.lint();
    for issue in &issues {
        println!("  warning: {issue}");
    }

    if issues.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    }
}
