use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use lookup_bots::bots;
use lookup_bots::infrastructure::adapters::console::{run_console, ConsoleSink};
use lookup_bots::{BotError, BotRegistry, Config, Message};

#[derive(Parser)]
#[command(name = "lookup-bots")]
#[command(about = "Chat bots that answer with a dictionary or web lookup", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// List available bots
    List,
    /// Show a bot's help text
    Usage {
        bot: String,
    },
    /// Send one message to a bot and print the reply
    Ask {
        bot: String,
        /// Message text
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Chat with a bot on stdin, one message per line
    Run {
        bot: String,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), BotError> {
    match cli.command {
        Commands::Version => {
            println!("lookup-bots v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(&cli.config),
        Commands::List => {
            let registry = load_registry(&cli.config)?;
            for name in registry.names() {
                let bot = registry.get(name)?;
                let summary = bot.usage().lines().next().unwrap_or("");
                println!("{:<14} {}", name, summary);
            }
            Ok(())
        }
        Commands::Usage { bot } => {
            let registry = load_registry(&cli.config)?;
            println!("{}", registry.get(&bot)?.usage());
            Ok(())
        }
        Commands::Ask { bot, text } => {
            let registry = load_registry(&cli.config)?;
            let handler = registry.get(&bot)?;
            let sink = ConsoleSink::stdout(bot.as_str());
            handler.handle_message(&Message::new(text.join(" ")), &sink)
        }
        Commands::Run { bot } => {
            let registry = load_registry(&cli.config)?;
            let handler = registry.get(&bot)?;
            let sink = ConsoleSink::stdout(bot.as_str());
            println!("Chatting with {} (type 'exit' to quit)", bot);
            run_console(handler.as_ref(), std::io::stdin().lock(), &sink)?;
            Ok(())
        }
    }
}

fn load_config(path: &Path) -> Config {
    if !path.exists() {
        return Config::load_env();
    }

    match Config::load(path) {
        Ok(mut config) => {
            config.apply_env();
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::load_env()
        }
    }
}

fn load_registry(path: &Path) -> Result<BotRegistry, BotError> {
    let config = load_config(path);
    let registry = bots::builtin(&config)?;
    tracing::debug!("Loaded {} bots", registry.len());
    Ok(registry)
}

fn init_config(path: &Path) -> Result<(), BotError> {
    if path.exists() {
        return Err(BotError::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("{} already exists", path.display()),
        )));
    }

    std::fs::write(path, Config::default().to_yaml()?)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
