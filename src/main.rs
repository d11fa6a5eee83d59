//! The pizzeria backend server: a GraphQL API over a small in-memory set of
//! pizza places, owners, makers and recipes.

use std::{env, fs, path::PathBuf, sync::Arc};

use clap::Parser;

use crate::{
    args::{Args, Command},
    config::Config,
    prelude::*,
    store::Store,
};

mod api;
mod args;
mod config;
mod http;
mod logger;
mod prelude;
mod store;


#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        // Log error in case stdout is not connected and it is logged into a file.
        error!("{:?}", e);

        // Show a somewhat nice representation of the error
        eprintln!();
        bunt::eprintln!("{$red}▶▶▶ {$bold}Error:{/$}{/$} {[yellow+intense]}", e);
        eprintln!();
        if e.chain().len() > 1 {
            bunt::eprintln!("{$red+italic}Caused by:{/$}");
        }

        for (i, cause) in e.chain().skip(1).enumerate() {
            eprint!(" {: >1$}", "", i * 2);
            eprintln!("‣ {cause}");
        }

        std::process::exit(1);
    }
}

/// Main entry point.
async fn run() -> Result<()> {
    // Backtraces are almost always useful for debugging, so unless the user
    // explicitly configured backtraces, we enable them.
    if env::var("RUST_BACKTRACE") == Err(env::VarError::NotPresent) {
        env::set_var("RUST_BACKTRACE", "1");
    }

    let args = Args::parse();

    // Configure output via `bunt`
    bunt::set_stdout_color_choice(args.stdout_color());
    bunt::set_stderr_color_choice(args.stderr_color());

    // Dispatch subcommand.
    match &args.cmd {
        Command::Serve { shared } => {
            let config = load_config_and_init_logger(shared, &args)?;
            start_server(config).await?;
        }
        Command::WriteConfig { target } => config::write_template(target.as_ref())?,
        Command::ExportApiSchema { target } => export_api_schema(target.as_ref())?,
    }

    Ok(())
}

async fn start_server(config: Config) -> Result<()> {
    info!("Starting pizzeria backend ...");
    trace!("Configuration: {:#?}", config);

    let store = Arc::new(Store::seeded());
    let root_node = api::root_node();
    let context = api::Context::new(store);

    http::serve(&config.http, root_node, context).await
        .context("failed to run HTTP server")?;

    Ok(())
}

fn load_config_and_init_logger(shared: &args::Shared, args: &Args) -> Result<Config> {
    let (config, path) = match &shared.config {
        Some(path) => {
            let config = Config::load_from(path)
                .context(format!("failed to load config from '{}'", path.display()))?;
            (config, Some(path.clone()))
        }
        None => Config::from_env_or_default_locations()?,
    };

    // Initialize logger. Unfortunately, we can only do this here
    // after reading the config.
    logger::init(&config.log, args)?;
    match &path {
        Some(path) => info!("Loaded config from '{}'", path.display()),
        None => info!("No config file found: using default configuration"),
    }

    Ok(config)
}

/// Exports the API as GraphQL SDL, e.g. for use by client codegen tools.
fn export_api_schema(target: Option<&PathBuf>) -> Result<()> {
    let schema = api::root_node().as_sdl();
    match target {
        Some(path) => fs::write(path, schema)
            .context(format!("failed to write schema to '{}'", path.display()))?,
        None => println!("{schema}"),
    }

    Ok(())
}
