#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use log::{error, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::Write;
use clap::{Parser, Subcommand, ValueEnum, CommandFactory};
use clap_complete::{generate, Shell};

use clinic_content::app_config::{self, Config};
use clinic_content::app_controller::{Controller, DomainPage};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a page document
    Page {
        /// Page slug, e.g. "home"
        slug: String,
        /// Locale of the page (defaults to the configured locale)
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Render the contact page
    Contact {
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Render the location/map block of the contact page
    ContactMap {
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Render the treatments overview
    Treatments {
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Render the IVF / ICSI page
    IvfIcsi {
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Look up a UI string
    Translate {
        /// Translation key, e.g. "nav.contact"
        key: String,
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// clinic-content - render clinic website content from the content API
#[derive(Parser, Debug)]
#[command(name = "clinic-content")]
#[command(version)]
#[command(about = "Fetch and render clinic website pages")]
#[command(long_about = "Fetches localized page documents and page configs from the content API and renders them as HTML fragments.

EXAMPLES:
    clinic-content page home                    # Render the home page in the default locale
    clinic-content page hakkimizda -l tr        # Render a Turkish page
    clinic-content treatments -l en             # Render the treatments overview
    clinic-content translate nav.contact -l tr  # Look up a UI string
    clinic-content completions bash > cc.bash   # Generate bash completions

CONFIGURATION:
    Settings are read from conf.json when present. The API base URL can also be
    given with --base-url or the CLINIC_API_BASE_URL environment variable.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Content API base URL
    #[arg(long, env = app_config::BASE_URL_ENV, global = true)]
    base_url: Option<String>,

    /// Set logging level
    #[arg(long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "clinic-content", &mut std::io::stdout());
        return Ok(());
    }

    let mut config = Config::load(&cli.config_path)?.apply_env();
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level.into();
    }

    CustomLogger::init(config.log_level.to_level_filter())?;

    let controller = match Controller::with_config(config) {
        Ok(controller) => controller,
        Err(e) => {
            error!("{:#}", e);
            return Err(e);
        }
    };

    let output = match cli.command {
        Commands::Page { slug, locale } => {
            let locale = controller.resolve_locale(locale.as_deref());
            controller.render_page(&slug, &locale).await
        }
        Commands::Contact { locale } => {
            let locale = controller.resolve_locale(locale.as_deref());
            controller.render_domain_page(DomainPage::Contact, &locale).await
        }
        Commands::ContactMap { locale } => {
            let locale = controller.resolve_locale(locale.as_deref());
            controller.render_domain_page(DomainPage::ContactMap, &locale).await
        }
        Commands::Treatments { locale } => {
            let locale = controller.resolve_locale(locale.as_deref());
            controller.render_domain_page(DomainPage::Treatments, &locale).await
        }
        Commands::IvfIcsi { locale } => {
            let locale = controller.resolve_locale(locale.as_deref());
            controller.render_domain_page(DomainPage::IvfIcsi, &locale).await
        }
        Commands::Translate { key, locale } => {
            let locale = controller.resolve_locale(locale.as_deref());
            format!("{}\n", controller.translate(&key, &locale))
        }
        Commands::Completions { .. } => return Ok(()),
    };

    print!("{}", output);
    Ok(())
}
