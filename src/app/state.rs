use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::{
    animation::{AnimationEngine, CellSurface},
    app::{
        events::{AppEvent, schedule_reveal, schedule_search, start_frame_task},
        reveal::{RevealSchedule, RevealStep},
        search::{SEARCH_DEBOUNCE, SearchState, is_city_char},
        tween::TempTween,
    },
    cli::Cli,
    data::{forecast::ForecastClient, geocode::GeocodeClient, geoip::detect_location},
    domain::weather::{ForecastBundle, Location, Units},
};

mod input;
mod methods_fetch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Loading,
    Ready,
    Error,
    Quit,
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub loading_message: String,
    pub last_error: Option<String>,
    pub selected_location: Option<Location>,
    pub weather: Option<ForecastBundle>,
    pub units: Units,
    pub fetch_in_flight: bool,
    pub last_frame_at: Instant,
    pub animation: AnimationEngine<CellSurface>,
    pub reveal: RevealSchedule,
    pub temperature: TempTween,
    pub search: SearchState,
    forecast: ForecastClient,
    geocode: GeocodeClient,
    fetch_generation: u64,
}

impl AppState {
    pub fn new(cli: &Cli) -> Result<Self> {
        Ok(Self {
            mode: AppMode::Loading,
            running: true,
            loading_message: "Initializing...".to_string(),
            last_error: None,
            selected_location: None,
            weather: None,
            units: cli.units.into(),
            fetch_in_flight: false,
            last_frame_at: Instant::now(),
            animation: AnimationEngine::new(cli.engine_options()),
            reveal: RevealSchedule::default(),
            temperature: TempTween::default(),
            search: SearchState::default(),
            forecast: ForecastClient::with_base_url(&cli.forecast_url)
                .context("building forecast client")?,
            geocode: GeocodeClient::with_base_url(&cli.geocode_url, cli.country_code.clone())
                .context("building geocoding client")?,
            fetch_generation: 0,
        })
    }

    /// Gives the animation engine a backdrop covering `cols` x `rows` cells.
    pub fn attach_surface(&mut self, cols: u16, rows: u16) {
        self.animation.attach_surface(CellSurface::new(cols, rows));
    }

    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                cli.validate()?;
                start_frame_task(tx.clone(), cli.frame_interval());
                self.start_fetch(tx, cli).await?;
            }
            AppEvent::TickFrame => {
                let now = Instant::now();
                let delta = now.duration_since(self.last_frame_at);
                self.last_frame_at = now;
                self.animation.tick(delta);
            }
            AppEvent::Input(event) => self.handle_input(event, tx, cli).await?,
            AppEvent::FetchStarted => {
                if self.weather.is_none() {
                    self.mode = AppMode::Loading;
                }
            }
            AppEvent::LocationResolved { generation, .. }
            | AppEvent::LocationFailed { generation, .. }
            | AppEvent::FetchSucceeded { generation, .. }
            | AppEvent::FetchFailed { generation, .. }
                if generation != self.fetch_generation =>
            {
                tracing::debug!(generation, "dropping superseded fetch result");
            }
            AppEvent::LocationResolved { generation, location } => {
                tracing::info!(place = %location.display_name(), "location resolved");
                self.selected_location = Some(location.clone());
                self.fetch_forecast(tx, location, generation);
            }
            AppEvent::LocationFailed { message, .. } => self.fail(message),
            AppEvent::FetchSucceeded { bundle, .. } => {
                tracing::info!(
                    place = %bundle.location.name,
                    weather_code = ?bundle.current_weather_code(),
                    "forecast received"
                );
                self.fetch_in_flight = false;
                self.weather = Some(bundle);
                self.last_error = None;
                self.mode = AppMode::Ready;
                self.start_reveal(tx);
            }
            AppEvent::FetchFailed { message, .. } => self.fail(message),
            AppEvent::SearchDue { generation } => {
                if self.search.is_current(generation) {
                    self.run_search(tx, generation);
                }
            }
            AppEvent::SearchResults {
                generation,
                results,
            } => {
                if !self.search.apply_results(generation, results) {
                    tracing::debug!(generation, "dropping stale search results");
                }
            }
            AppEvent::SearchFailed { generation } => {
                self.search.apply_failure(generation);
            }
            AppEvent::Reveal { generation, step } => self.apply_reveal(generation, step),
            AppEvent::Quit => {
                self.animation.teardown();
                self.mode = AppMode::Quit;
            }
        }

        Ok(())
    }

    /// Stamps a new location/forecast request. Results carrying an older
    /// stamp are dropped when they arrive.
    pub(crate) fn begin_fetch(&mut self) -> u64 {
        self.fetch_generation += 1;
        self.fetch_in_flight = true;
        self.fetch_generation
    }

    fn fail(&mut self, message: String) {
        tracing::warn!(error = %message, "weather update failed");
        self.fetch_in_flight = false;
        self.last_error = Some(message);
        self.mode = AppMode::Error;
    }

    /// Restarts the staged panel reveal for the current forecast.
    pub(crate) fn start_reveal(&mut self, tx: &mpsc::Sender<AppEvent>) {
        let generation = self.reveal.restart();
        schedule_reveal(tx.clone(), generation);
    }

    fn apply_reveal(&mut self, generation: u64, step: RevealStep) {
        if !self.reveal.accept(generation, step) {
            return;
        }
        if step != RevealStep::Current {
            return;
        }
        let Some((code, temp)) = self
            .weather
            .as_ref()
            .map(|bundle| (bundle.current_weather_code(), bundle.current_temp(self.units)))
        else {
            return;
        };
        self.animation.on_weather_updated(code);
        if let Some(temp) = temp {
            self.temperature.retarget(temp, Instant::now());
        }
    }

    pub(crate) fn toggle_units(&mut self, tx: &mpsc::Sender<AppEvent>) {
        self.units = self.units.toggled();
        if self.weather.is_some() {
            self.start_reveal(tx);
        }
    }

    /// Drops the running animation and loads `location` from scratch.
    pub(crate) fn switch_to_location(&mut self, tx: &mpsc::Sender<AppEvent>, location: Location) {
        self.animation.retire();
        let generation = self.begin_fetch();
        self.selected_location = Some(location.clone());
        self.mode = AppMode::Loading;
        self.loading_message = format!("Fetching weather for {}...", location.name);
        self.fetch_forecast(tx, location, generation);
    }
}
