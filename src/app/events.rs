use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::{
    sync::mpsc::Sender,
    time::{interval, sleep},
};

use crate::{
    app::reveal::{REVEAL_SCHEDULE, RevealStep},
    domain::weather::{ForecastBundle, Location},
};

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    TickFrame,
    Input(Event),
    FetchStarted,
    LocationResolved {
        generation: u64,
        location: Location,
    },
    LocationFailed {
        generation: u64,
        message: String,
    },
    FetchSucceeded {
        generation: u64,
        bundle: ForecastBundle,
    },
    FetchFailed {
        generation: u64,
        message: String,
    },
    SearchDue {
        generation: u64,
    },
    SearchResults {
        generation: u64,
        results: Vec<Location>,
    },
    SearchFailed {
        generation: u64,
    },
    Reveal {
        generation: u64,
        step: RevealStep,
    },
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

pub fn start_frame_task(tx: Sender<AppEvent>, period: Duration) {
    tokio::spawn(async move {
        let mut ticker = interval(period);
        loop {
            ticker.tick().await;
            if tx.send(AppEvent::TickFrame).await.is_err() {
                break;
            }
        }
    });
}

/// Fires `SearchDue` after the debounce delay; newer keystrokes make it stale.
pub fn schedule_search(tx: Sender<AppEvent>, generation: u64, delay: Duration) {
    tokio::spawn(async move {
        sleep(delay).await;
        let _ = tx.send(AppEvent::SearchDue { generation }).await;
    });
}

/// Emits every reveal step of one generation at its offset from now.
pub fn schedule_reveal(tx: Sender<AppEvent>, generation: u64) {
    tokio::spawn(async move {
        let mut elapsed = Duration::ZERO;
        for (offset, step) in REVEAL_SCHEDULE {
            sleep(offset.saturating_sub(elapsed)).await;
            elapsed = offset;
            if tx.send(AppEvent::Reveal { generation, step }).await.is_err() {
                break;
            }
        }
    });
}
