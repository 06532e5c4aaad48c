use clap::Parser;
use protonfind::{
    EngineConfig, ProtonError, SteamApp, SteamInstallation, discover, resolve_launch_target,
};
use std::process::ExitCode;

const EXIT_RESOLVE_FAILURE: u8 = 1;
const EXIT_LOCATE_FAILURE: u8 = 2;

#[derive(Debug, Parser)]
#[command(
    name = "protonfind",
    version,
    about = "Find Steam games, their Proton prefixes and the Proton they run with"
)]
struct Cli {
    /// Steam app ID to resolve. Lists the inventory when omitted.
    app_id: Option<u64>,

    /// Only list apps whose name contains this text.
    #[arg(long, conflicts_with = "app_id")]
    search: Option<String>,

    /// Output results as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Enable verbose (info) logging output.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Enable trace-level logging (more detailed than --verbose).
    #[arg(long, default_value_t = false)]
    trace: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.trace {
        "trace"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("PROTONFIND_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let cfg = EngineConfig::from_env();
    let installation = match discover(&cfg) {
        Ok(installation) => installation,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(EXIT_LOCATE_FAILURE);
        }
    };

    let result = match cli.app_id {
        Some(app_id) => print_launch_target(&installation, app_id, &cfg, cli.json),
        None => print_inventory(&installation, cli.search.as_deref(), cli.json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(EXIT_RESOLVE_FAILURE)
        }
    }
}

fn print_inventory(
    installation: &SteamInstallation,
    search: Option<&str>,
    json: bool,
) -> Result<(), ProtonError> {
    let apps: Vec<&SteamApp> = installation
        .apps
        .iter()
        .filter(|app| search.is_none_or(|query| app.name_contains(query)))
        .collect();

    if json {
        print_json(&apps)?;
        return Ok(());
    }

    for app in apps {
        match app.app_id {
            Some(app_id) => println!("{} ({})", app.name, app_id),
            None => println!("{}", app.name),
        }
    }
    Ok(())
}

fn print_launch_target(
    installation: &SteamInstallation,
    app_id: u64,
    cfg: &EngineConfig,
    json: bool,
) -> Result<(), ProtonError> {
    let target = resolve_launch_target(installation, app_id, &cfg.overrides)?;

    if json {
        return print_json(&target);
    }

    println!("Game:    {} ({})", target.app.name, app_id);
    println!("Path:    {}", target.app.install_path.display());
    if let Some(prefix) = &target.app.prefix_path {
        println!("Prefix:  {}", prefix.display());
    }
    println!(
        "Proton:  {} ({})",
        target.proton.name,
        target.proton.install_path.display()
    );
    match &target.steam_runtime {
        Some(runtime) => println!("Runtime: {}", runtime.display()),
        None => println!("Runtime: disabled"),
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), ProtonError> {
    let out = serde_json::to_string_pretty(value)
        .map_err(|e| ProtonError::Format(format!("failed to serialize output: {e}")))?;
    println!("{out}");
    Ok(())
}
