use super::*;

impl AppState {
    /// Resolves where to fetch for (picked city, coordinates, IP lookup, city
    /// name, then the Kulgam fallback) and starts the request.
    pub(crate) async fn start_fetch(
        &mut self,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        if self.fetch_in_flight {
            return Ok(());
        }
        let generation = self.begin_fetch();
        self.loading_message = "Fetching weather...".to_string();
        tx.send(AppEvent::FetchStarted).await?;

        if let Some(location) = self.selected_location.clone() {
            self.fetch_forecast(tx, location, generation);
            return Ok(());
        }
        if let (Some(lat), Some(lon)) = (cli.lat, cli.lon) {
            tx.send(AppEvent::LocationResolved {
                generation,
                location: Location::from_coords(lat, lon),
            })
            .await?;
            return Ok(());
        }
        if cli.locate {
            self.start_ip_lookup(tx, cli.geoip_url.clone(), generation);
            return Ok(());
        }
        if let Some(city) = cli.city.clone() {
            self.start_city_lookup(tx, city, generation);
            return Ok(());
        }
        tx.send(AppEvent::LocationResolved {
            generation,
            location: Location::kulgam(),
        })
        .await?;
        Ok(())
    }

    fn start_ip_lookup(&mut self, tx: &mpsc::Sender<AppEvent>, url: String, generation: u64) {
        self.loading_message = "Detecting location...".to_string();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let event = match detect_location(&url).await {
                Ok(location) => AppEvent::LocationResolved {
                    generation,
                    location,
                },
                Err(err) => AppEvent::LocationFailed {
                    generation,
                    message: err.to_string(),
                },
            };
            let _ = tx2.send(event).await;
        });
    }

    fn start_city_lookup(&mut self, tx: &mpsc::Sender<AppEvent>, city: String, generation: u64) {
        self.loading_message = format!("Looking up {city}...");
        let geocode = self.geocode.clone();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let event = match geocode.resolve(&city).await {
                Ok(location) => AppEvent::LocationResolved {
                    generation,
                    location,
                },
                Err(err) => AppEvent::LocationFailed {
                    generation,
                    message: err.to_string(),
                },
            };
            let _ = tx2.send(event).await;
        });
    }

    pub(crate) fn fetch_forecast(
        &self,
        tx: &mpsc::Sender<AppEvent>,
        location: Location,
        generation: u64,
    ) {
        let client = self.forecast.clone();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let event = match client.fetch(location).await {
                Ok(bundle) => AppEvent::FetchSucceeded { generation, bundle },
                Err(err) => AppEvent::FetchFailed {
                    generation,
                    message: err.to_string(),
                },
            };
            let _ = tx2.send(event).await;
        });
    }

    pub(crate) fn run_search(&self, tx: &mpsc::Sender<AppEvent>, generation: u64) {
        let query = self.search.trimmed_query().to_string();
        let geocode = self.geocode.clone();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let event = match geocode.search(&query).await {
                Ok(results) => AppEvent::SearchResults {
                    generation,
                    results,
                },
                Err(err) => {
                    tracing::warn!(error = %err, query, "place search failed");
                    AppEvent::SearchFailed { generation }
                }
            };
            let _ = tx2.send(event).await;
        });
    }
}
