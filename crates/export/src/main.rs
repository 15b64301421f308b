use std::fs::File;

use anyhow::{bail, Context, Result};
use camino::Utf8PathBuf;
use canvas_client::{Client, Token};
use canvas_export::Config;
use clap::Parser;
use log::{debug, info, warn};
use simplelog::{
    ColorChoice, CombinedLogger, LevelFilter, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};

/// Export assignment, quiz and discussion due dates from Canvas to CSV
#[derive(Parser, Debug)]
#[command(name = "canvas-export", version, about, long_about = None)]
struct Cli {
    /// Canvas access token (Account > Settings > New Access Token)
    #[arg(long, env = "TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Where to write the CSV
    #[arg(short, long)]
    output: Option<Utf8PathBuf>,

    /// API root, eg https://canvas.uw.edu/api/v1
    #[arg(long)]
    base_url: Option<String>,

    /// Skip a course, in addition to those in the config file
    #[arg(long = "exclude", value_name = "COURSE_ID")]
    exclude: Vec<u64>,

    /// Items to request per page
    #[arg(long)]
    per_page: Option<u32>,

    /// Request timeout
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Only fetch the first page of each collection
    #[arg(long)]
    single_page: bool,

    /// Fill the unlock columns from each item's due date
    #[arg(long)]
    mirror_due_into_unlock: bool,

    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Log debug output to the terminal
    #[arg(short, long)]
    verbose: bool,

    /// Also write debug logs to this file
    #[arg(long)]
    log_file: Option<Utf8PathBuf>,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        config.excluded_courses.extend(&self.exclude);
        if let Some(per_page) = self.per_page {
            config.per_page = per_page;
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if self.single_page {
            config.follow_pages = false;
        }
        if self.mirror_due_into_unlock {
            config.mirror_due_into_unlock = true;
        }
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];
    if let Some(path) = &cli.log_file {
        let file = File::create(path).context("error creating log file")?;
        loggers.push(WriteLogger::new(
            LevelFilter::Debug,
            simplelog::Config::default(),
            file,
        ));
    }

    CombinedLogger::init(loggers).context("error initialising logger")?;

    Ok(())
}

/// A missing .env is normal, anything else is worth mentioning
fn dotenv_problem(e: dotenvy::Error) -> Option<dotenvy::Error> {
    if e.not_found() {
        None
    } else {
        Some(e)
    }
}

fn main() -> Result<()> {
    // Loaded before parsing so TOKEN can come from .env, reported once logging is up
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();
    init_logging(&cli)?;
    match dotenv {
        Ok(path) => debug!("loaded {}", path.display()),
        Err(e) => {
            if let Some(e) = dotenv_problem(e) {
                warn!("ignoring .env: {}", e);
            }
        }
    }

    let token = Token::from(cli.token.clone().unwrap_or_default());
    if token.is_empty() {
        bail!("no access token: set TOKEN in the environment or a .env file");
    }

    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply(&mut config);

    let client = Client::new(&config.base_url, &token, config.client_options())
        .context("error creating API client")?;

    let (export, summary) =
        canvas_export::run(&client, &config).context("error fetching course data")?;

    export
        .write_csv(&config.output)
        .context("error writing csv")?;

    info!(
        "{} courses: {} assignments, {} quizzes, {} topics -> {}",
        summary.courses, summary.assignments, summary.quizzes, summary.discussions, config.output
    );
    println!("...csv created!");

    Ok(())
}
