mod platform;

use bmi_core::*;
use clap::{Parser, Subcommand};
use platform::{FileCamera, TerminalNotifier, TerminalShare};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "bmi")]
#[command(about = "Body-Mass-Index calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override config file location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate and classify BMI
    Calc {
        /// Height in centimetres
        #[arg(long, allow_hyphen_values = true)]
        height: String,

        /// Weight in kilograms
        #[arg(long, allow_hyphen_values = true)]
        weight: String,

        /// Print the result as JSON
        #[arg(long, conflicts_with = "share")]
        json: bool,

        /// Do not schedule the result notification
        #[arg(long)]
        no_notify: bool,

        /// Share the result after calculating
        #[arg(long)]
        share: bool,

        /// Attach a photo from this image file
        #[arg(long)]
        photo: Option<PathBuf>,
    },

    /// Check whether a height/weight pair is in the accepted range
    Check {
        #[arg(long, allow_hyphen_values = true)]
        height: String,

        #[arg(long, allow_hyphen_values = true)]
        weight: String,
    },

    /// Show the classification table
    Categories,

    /// Capture a photo without calculating
    Capture {
        /// Image file to use as the captured photo
        #[arg(long)]
        photo: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    bmi_core::logging::init_with_level(if cli.verbose { "debug" } else { "info" });

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Calc {
            height,
            weight,
            json,
            no_notify,
            share,
            photo,
        } => {
            let config = load_config(cli.config.as_deref())?;
            cmd_calc(config, &height, &weight, json, no_notify, share, photo)
        }
        Commands::Check { height, weight } => cmd_check(&height, &weight),
        Commands::Categories => {
            display_categories();
            Ok(ExitCode::SUCCESS)
        }
        Commands::Capture { photo } => {
            let config = load_config(cli.config.as_deref())?;
            cmd_capture(config, photo)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn cmd_calc(
    mut config: Config,
    height: &str,
    weight: &str,
    json: bool,
    no_notify: bool,
    share: bool,
    photo: Option<PathBuf>,
) -> Result<ExitCode> {
    if no_notify {
        config.notification.enabled = false;
    }

    // In JSON mode stdout carries nothing but the result
    let notifier = if json {
        TerminalNotifier::to_stderr()
    } else {
        TerminalNotifier::new()
    };
    let mut presenter = Presenter::new(
        config,
        notifier,
        TerminalShare,
        FileCamera::new(photo.clone()),
    );

    let result = presenter.calculate(height, weight)?;

    if json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        display_result(&result);
    }

    // Scheduled only once the result is on screen
    presenter.notify_result()?;

    // Auxiliary actions never change the exit status
    if share {
        if let Err(e) = presenter.share_result() {
            eprintln!("Could not share result: {}", e);
        }
    }

    if photo.is_some() {
        match presenter.take_picture() {
            Some(uri) if json => eprintln!("📷 Photo: {}", uri),
            Some(uri) => println!("📷 Photo: {}", uri),
            None => eprintln!("Could not capture photo."),
        }
    }

    presenter.notifier().wait();
    Ok(ExitCode::SUCCESS)
}

fn cmd_check(height: &str, weight: &str) -> Result<ExitCode> {
    let height_cm = parse_number("height", height)?;
    let weight_kg = parse_number("weight", weight)?;

    if validate(height_cm, weight_kg) {
        println!("valid");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("invalid");
        Ok(ExitCode::FAILURE)
    }
}

fn cmd_capture(config: Config, photo: PathBuf) -> Result<ExitCode> {
    let mut presenter = Presenter::new(
        config,
        TerminalNotifier::new(),
        TerminalShare,
        FileCamera::new(Some(photo)),
    );

    match presenter.take_picture() {
        Some(uri) => {
            println!("{}", uri);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("Could not capture photo.");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn parse_number(name: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| Error::InvalidInput(format!("{} is not a number: {:?}", name, raw)))
}

fn display_result(result: &BmiResult) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  BMI RESULT");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  BMI:      {:.2}", result.value);
    println!("  Category: {}", result.category);
    println!();
}

fn display_categories() {
    println!("  {:<12} BMI range", "Category");
    println!("  ─────────────────────────────");
    for category in BmiCategory::ALL {
        let range = match category.range() {
            (None, Some(upper)) => format!("below {}", upper),
            (Some(lower), Some(upper)) => format!("{} to under {}", lower, upper),
            (Some(lower), None) => format!("{} and above", lower),
            (None, None) => "any".to_string(),
        };
        println!("  {:<12} {}", category.label(), range);
    }
}
