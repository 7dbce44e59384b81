// Disaster Watch - Main Entry Point
// Builds the session's city store once and hands it to every view

use clap::{Parser, Subcommand};
use disaster_watch::client::sender_from_config;
use disaster_watch::config::DEFAULT_CONFIG_PATH;
use disaster_watch::session::Session;
use disaster_watch::views::{self, prediction, volunteer};
use disaster_watch::{
    CityData, CityStore, DisasterWatchConfig, Route, ViewContext, VolunteerForm, VolunteerRegistrar,
    seed_cities, v_error, v_summary, verbosity,
};

#[derive(Parser)]
#[command(name = "disaster_watch", about = "Disaster management awareness for India")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Increase output detail (-v store activity, -vv full)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render one page: /, /dashboard, /emergency, /ai-prediction, /volunteer, /resources
    Show { path: String },
    /// Risk message, trend and safety tips for a city
    Predict { city: String },
    /// Merge a JSON patch into a city, then show the resources page
    Update { city: String, patch: String },
    /// Register as a volunteer
    Volunteer {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        skill: String,
        #[arg(long)]
        state: String,
    },
    /// Interactive session over one live store
    Session,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = DisasterWatchConfig::load_or_create(&cli.config)?;
    config.validate()?;
    verbosity::set_verbosity_level(verbosity::resolve_level(cli.verbose, config.display.verbosity));
    config.print_summary();

    let initial = if config.store.seed_default_cities { seed_cities() } else { CityData::new() };
    let store = CityStore::new(initial);
    let ctx = ViewContext {
        store: store.clone(),
        thousands_separator: config.display.thousands_separator,
    };

    match cli.command {
        Command::Show { path } => {
            let route: Route = path.parse()?;
            v_summary!("{}", views::render(route, &ctx));
        }
        Command::Predict { city } => {
            v_summary!("{}", prediction::render_lookup(&city));
        }
        Command::Update { city, patch } => {
            if let Err(e) = store.update_json(&city, &patch) {
                v_error!("❌ {}", e);
                return Err(e.into());
            }
            v_summary!("{}", views::render(Route::Resources, &ctx));
        }
        Command::Volunteer { name, phone, email, address, skill, state } => {
            let form = VolunteerForm { name, phone, email, address, skill, state };
            let sender = sender_from_config(&config.email).map_err(|e| e.to_string())?;
            let registrar = VolunteerRegistrar::new(sender.as_ref(), &config.email.volunteer, &config.email.team);
            match registrar.submit(&form).await {
                Ok(receipt) => v_summary!("{}", volunteer::render_receipt(&form.name, &receipt)),
                Err(e) => {
                    v_error!("❌ {}", e);
                    return Err(e.into());
                }
            }
        }
        Command::Session => {
            Session::new(ctx).run().await?;
        }
    }

    Ok(())
}
