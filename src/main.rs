mod app;
mod auth;
mod config;
mod error;
mod events;
mod form;
mod logger;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use clap::{crate_version, App as ClapApp, Arg};
use config::Config;
use form::ValidationMode;
use log::LevelFilter;

fn main() -> Result<()> {
    let matches = ClapApp::new("ledger-tui")
        .version(crate_version!())
        .about("A terminal user interface for managing customers and transactions")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("authenticated")
                .long("authenticated")
                .help("Start on the main screen instead of the login form"),
        )
        .arg(
            Arg::with_name("validate-on-blur")
                .long("validate-on-blur")
                .help("Validate fields when they lose focus"),
        )
        .get_matches();

    let log = logger::init(LevelFilter::Info)?;

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if matches.is_present("authenticated") {
        config.authenticated = true;
    }
    if matches.is_present("validate-on-blur") {
        config.validation_mode = ValidationMode::OnBlur;
    }

    App::start(config, log)?;
    Ok(())
}
