mod app;
mod cli;
mod error;
mod input;
mod paths;
mod settings;

use std::fs::{self, File};
use std::process::ExitCode;

use clap::Parser;
use inspector_term::Terminal;
use log::info;
use simplelog::{Config, WriteLogger};

use app::App;
use cli::Cli;
use error::AppError;
use settings::{LogLevel, Settings};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    settings.apply(cli);
    init_logging(settings.log_level)?;

    let text = input::read(&cli.input)?;
    let document = input::parse(&text, settings.mode)?;
    info!("Loaded {} as {:?}", cli.input.display(), settings.mode);

    let mut app = App::new(document, &settings);
    let mut terminal = Terminal::new()?;
    app.run(&mut terminal)?;
    Ok(())
}

/// Log to `latest.log` in the cache directory, archiving the previous one.
fn init_logging(level: LogLevel) -> Result<(), AppError> {
    if level == LogLevel::Off {
        return Ok(());
    }
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    paths::rotate_logs();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = File::create(&path)?;
    if let Err(e) = WriteLogger::init(level.filter(), Config::default(), file) {
        eprintln!("Failed to initialize logger: {}", e);
    }
    Ok(())
}
