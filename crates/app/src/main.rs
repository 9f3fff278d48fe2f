use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, ChatService, Clock, PracticeService, QuizService, SessionManager};
use storage::Storage;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

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

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn sessions(&self) -> Arc<SessionManager> {
        self.services.sessions()
    }

    fn quiz(&self) -> Arc<QuizService> {
        self.services.quiz()
    }

    fn practice(&self) -> Arc<PracticeService> {
        self.services.practice()
    }

    fn chat(&self) -> Arc<ChatService> {
        self.services.chat()
    }
}

struct Args {
    data_file: PathBuf,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--data <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --data tutor-data.json");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TUTOR_DATA_FILE");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut data_file = std::env::var("TUTOR_DATA_FILE")
            .ok()
            .map_or_else(|| PathBuf::from("tutor-data.json"), PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--data" => {
                    let value = args
                        .next()
                        .ok_or(ArgsError::MissingValue { flag: "--data" })?;
                    data_file = PathBuf::from(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { data_file })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let storage = Storage::json_file(&parsed.data_file);
    let services = AppServices::new(&storage, Clock::default_clock());
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Geometry Tutor")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
