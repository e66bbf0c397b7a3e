//! Command definitions and the handlers behind them.
//!
//! Fetches are fire-and-forget on the core client, so each handler registers
//! a channel-backed observer and blocks on the channel until its one outcome
//! arrives.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use inquire::{Confirm, Select};
use skycast_core::{
    ApiError, EndpointKind, ForecastResponse, Outcome, QuerySpec, SearchCompletion, SearchResults,
    WeatherApi, WeatherObserver, WeatherResponse,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::timeout;

use crate::output;
use crate::store::SavedLocations;

/// Where lookups land with no flags, no saved default.
const FALLBACK_CITY: &str = "Austin";
const FALLBACK_STATE: &str = "TX";

/// Longer than the client's own transport timeout, so a slow request comes
/// back as a delivered error instead of the CLI giving up first.
const DELIVERY_TIMEOUT: Duration = Duration::from_secs(35);

#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Weather lookups from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current conditions.
    Current {
        #[command(flatten)]
        place: PlaceArgs,
    },

    /// Show a day-by-day forecast.
    Forecast {
        #[command(flatten)]
        place: PlaceArgs,

        /// Number of days to fetch.
        #[arg(long, default_value_t = EndpointKind::DEFAULT_FORECAST_DAYS)]
        days: u32,

        /// Also print the hourly rows for each day.
        #[arg(long)]
        hours: bool,
    },

    /// Search for locations by free text.
    Search {
        /// Text to match, e.g. "Austin TX".
        query: String,

        /// Pick one of the matches and save it.
        #[arg(long)]
        save: bool,
    },

    /// Manage saved locations.
    Locations {
        #[command(subcommand)]
        action: Option<LocationsCommand>,
    },
}

#[derive(Debug, Subcommand)]
pub enum LocationsCommand {
    /// List saved locations.
    List,
    /// Pick which saved location plain lookups use.
    SetDefault,
    /// Remove a saved location by name.
    Remove { name: String },
}

/// Where to look up the weather. At most one of zip, city/state, coords.
#[derive(Debug, Args)]
pub struct PlaceArgs {
    /// Postal code, e.g. 78745.
    #[arg(long, conflicts_with_all = ["city", "state", "coords"])]
    zip: Option<String>,

    /// City name, paired with --state.
    #[arg(long, requires = "state")]
    city: Option<String>,

    /// State or territory, paired with --city.
    #[arg(long, requires = "city")]
    state: Option<String>,

    /// Geographic point.
    #[arg(long, value_name = "LAT,LON", conflicts_with_all = ["zip", "city", "state"])]
    coords: Option<String>,
}

impl PlaceArgs {
    /// Pick the query: flags first, then the saved default, then the
    /// built-in fallback.
    fn resolve(&self, store: &SavedLocations) -> anyhow::Result<QuerySpec> {
        if let Some(zip) = &self.zip {
            return Ok(QuerySpec::zip(zip));
        }
        if let (Some(city), Some(state)) = (&self.city, &self.state) {
            return Ok(QuerySpec::city_state(city, state));
        }
        if let Some(coords) = &self.coords {
            let (lat, lon) = parse_coords(coords)?;
            return Ok(QuerySpec::coordinates(lat, lon));
        }
        if let Some(default) = &store.default {
            return Ok(QuerySpec::from(default));
        }
        Ok(QuerySpec::city_state(FALLBACK_CITY, FALLBACK_STATE))
    }
}

fn parse_coords(text: &str) -> anyhow::Result<(f64, f64)> {
    let (lat, lon) = text
        .split_once(',')
        .context("coordinates must look like LAT,LON")?;
    let lat = lat.trim().parse().context("latitude is not a number")?;
    let lon = lon.trim().parse().context("longitude is not a number")?;
    Ok((lat, lon))
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Current { place } => show_current(&place).await,
            Command::Forecast { place, days, hours } => show_forecast(&place, days, hours).await,
            Command::Search { query, save } => run_search(query, save).await,
            Command::Locations { action } => manage_locations(action),
        }
    }
}

/// Forwards each delivered outcome into a channel a handler can await on.
#[derive(Debug)]
struct ChannelObserver {
    tx: UnboundedSender<Outcome>,
}

impl WeatherObserver for ChannelObserver {
    fn on_weather(&self, response: WeatherResponse) {
        let _ = self.tx.send(Outcome::Weather(response));
    }

    fn on_forecast(&self, response: ForecastResponse) {
        let _ = self.tx.send(Outcome::Forecast(response));
    }

    fn on_search_results(&self, results: SearchResults) {
        let _ = self.tx.send(Outcome::Search(results));
    }

    fn on_error(&self, error: ApiError) {
        let _ = self.tx.send(Outcome::Failed(error));
    }
}

/// Build a client from the environment and register an observer for it.
fn connect() -> anyhow::Result<(WeatherApi, UnboundedReceiver<Outcome>)> {
    let api = WeatherApi::from_env().context("could not set up the weather client")?;
    let (tx, rx) = mpsc::unbounded_channel();
    api.register_observer(Arc::new(ChannelObserver { tx }));
    Ok((api, rx))
}

/// Wait for the single outcome an issued request produces.
async fn await_outcome(rx: &mut UnboundedReceiver<Outcome>) -> anyhow::Result<Outcome> {
    match timeout(DELIVERY_TIMEOUT, rx.recv()).await {
        Ok(Some(outcome)) => Ok(outcome),
        Ok(None) => bail!("the weather client went away before answering"),
        Err(_) => bail!("timed out waiting for the weather service"),
    }
}

async fn show_current(place: &PlaceArgs) -> anyhow::Result<()> {
    let store = SavedLocations::load()?;
    let query = place.resolve(&store)?;

    let (api, mut rx) = connect()?;
    api.current_weather(query);

    match await_outcome(&mut rx).await? {
        Outcome::Weather(response) => output::print_current(&response),
        Outcome::Failed(error) => return Err(error).context("request failed"),
        other => bail!("unexpected outcome: {other:?}"),
    }
    Ok(())
}

async fn show_forecast(place: &PlaceArgs, days: u32, hours: bool) -> anyhow::Result<()> {
    let store = SavedLocations::load()?;
    let query = place.resolve(&store)?;

    let (api, mut rx) = connect()?;
    api.forecast(query, days);

    match await_outcome(&mut rx).await? {
        Outcome::Forecast(response) => output::print_forecast(&response, hours),
        Outcome::Failed(error) => return Err(error).context("request failed"),
        other => bail!("unexpected outcome: {other:?}"),
    }
    Ok(())
}

async fn run_search(query: String, save: bool) -> anyhow::Result<()> {
    let (api, mut rx) = connect()?;
    api.search(query);

    let results = match await_outcome(&mut rx).await? {
        Outcome::Search(results) => results,
        Outcome::Failed(error) => return Err(error).context("search failed"),
        other => bail!("unexpected outcome: {other:?}"),
    };

    if results.is_empty() {
        println!("No matches.");
        return Ok(());
    }

    output::print_search_results(&results);
    if save {
        save_one(&results)?;
    }
    Ok(())
}

/// Let the user pick a match, stash it, and maybe promote it to the default.
fn save_one(results: &SearchResults) -> anyhow::Result<()> {
    let labels: Vec<String> = results.iter().map(output::completion_label).collect();
    let choice = Select::new("Save which match?", labels)
        .raw_prompt()
        .context("selection cancelled")?;
    let completion = results[choice.index].clone();

    let mut store = SavedLocations::load()?;
    let make_default = Confirm::new("Use it as the default location?")
        .with_default(store.default.is_none())
        .prompt()
        .unwrap_or(false);

    let message = apply_save_choice(&mut store, completion, make_default);
    store.save()?;
    println!("{message}");
    Ok(())
}

/// Apply the selection to the store and say what happened. The caller prints
/// the message only once the store is on disk.
fn apply_save_choice(
    store: &mut SavedLocations,
    completion: SearchCompletion,
    make_default: bool,
) -> &'static str {
    if make_default {
        store.set_default(completion);
        "Saved as default."
    } else if store.add(completion) {
        "Saved."
    } else {
        "Already saved."
    }
}

fn manage_locations(action: Option<LocationsCommand>) -> anyhow::Result<()> {
    let mut store = SavedLocations::load()?;
    match action.unwrap_or(LocationsCommand::List) {
        LocationsCommand::List => output::print_saved(&store),
        LocationsCommand::SetDefault => {
            if store.saved.is_empty() {
                bail!("nothing saved yet; run `skycast search <text> --save` first");
            }
            let labels: Vec<String> = store.saved.iter().map(output::completion_label).collect();
            let choice = Select::new("Default location?", labels)
                .raw_prompt()
                .context("selection cancelled")?;
            let completion = store.saved[choice.index].clone();
            store.set_default(completion);
            store.save()?;
            println!("Default updated.");
        }
        LocationsCommand::Remove { name } => {
            let removed = store.remove(&name);
            if removed == 0 {
                println!("Nothing matched {name:?}.");
            } else {
                store.save()?;
                println!("Removed {removed} location(s).");
            }
        }
    }
    Ok(())
}
