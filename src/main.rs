use clap::Parser;
use moodmeter::application::{CheckInService, ConfigService};
use moodmeter::cli::{Cli, Commands, Session};
use moodmeter::domain::JournalStore;
use moodmeter::error::MoodError;
use moodmeter::infrastructure::{init_logging, Config};
use std::io;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MoodError> {
    init_logging(cli.quiet, cli.verbose)?;

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };

    match cli.command {
        Some(Commands::Config { key, value, list }) => {
            let service = ConfigService::new(config_path);

            if list {
                let config = service.list()?;
                println!("first_run = {}", config.first_run);
                println!("default_mood = {}", config.default_mood);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: moodmeter config [--list | <key> [<value>]]");
                println!("Valid keys: first_run, default_mood, created");
                Ok(())
            }
        }
        Some(Commands::Start) | None => {
            let config = Config::load(&config_path)?;
            let service = CheckInService::new(JournalStore::new(), config, config_path);
            let stdout = io::stdout();
            let mut session = Session::new(service, stdout.lock());
            session.run(io::stdin().lock())
        }
    }
}
