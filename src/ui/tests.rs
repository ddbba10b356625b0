use std::time::Instant;

use chrono::{DateTime, TimeZone, Utc};
use ratatui::{Terminal, backend::TestBackend};

use super::{render_at, theme::ColorCapability};
use crate::{
    app::{
        reveal::{REVEAL_SCHEDULE, RevealStep},
        state::{AppMode, AppState},
    },
    test_support::{buffer_text, fixture_bundle, state_test_cli},
};

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 12, 5, 30, 0)
        .single()
        .expect("valid instant")
}

fn draw(state: &AppState, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal
        .draw(|frame| {
            render_at(
                frame,
                state,
                ColorCapability::TrueColor,
                fixed_now(),
                Instant::now(),
            );
        })
        .expect("draw");
    buffer_text(terminal.backend().buffer())
}

fn state_with_weather() -> AppState {
    let mut state = AppState::new(&state_test_cli()).expect("state");
    state.attach_surface(100, 40);
    state.weather = Some(fixture_bundle(Some(61)));
    state.mode = AppMode::Ready;
    state
}

fn reveal_up_to(state: &mut AppState, last: RevealStep) {
    let generation = state.reveal.restart();
    for (_, step) in REVEAL_SCHEDULE {
        state.reveal.accept(generation, step);
        if step == last {
            break;
        }
    }
}

#[test]
fn loading_view_shows_progress_message() {
    let mut state = AppState::new(&state_test_cli()).expect("state");
    state.loading_message = "Fetching weather...".to_string();
    let text = draw(&state, 100, 40);
    assert!(text.contains("Loading"));
    assert!(text.contains("Fetching weather..."));
}

#[test]
fn error_view_offers_retry() {
    let mut state = AppState::new(&state_test_cli()).expect("state");
    state.mode = AppMode::Error;
    state.last_error = Some("Weather service unavailable (503)".to_string());
    let text = draw(&state, 100, 40);
    assert!(text.contains("Weather service unavailable (503)"));
    assert!(text.contains("r to retry"));
}

#[test]
fn panels_appear_only_once_revealed() {
    let mut state = state_with_weather();
    reveal_up_to(&mut state, RevealStep::Hourly);
    let text = draw(&state, 100, 40);
    assert!(text.contains("Kulgam, India"));
    assert!(text.contains("Hourly"));
    assert!(!text.contains("Temperature"));
    assert!(!text.contains("7-Day Forecast"));
    assert!(!text.contains("Updated"));
}

#[test]
fn full_reveal_shows_every_panel_and_footer() {
    let mut state = state_with_weather();
    reveal_up_to(&mut state, RevealStep::Dashboard);
    let text = draw(&state, 100, 40);
    assert!(text.contains("Now"));
    assert!(text.contains("Temperature"));
    assert!(text.contains("7-Day Forecast"));
    assert!(text.contains("Today"));
    assert!(text.contains("Updated"));
    assert!(text.contains("u units"));
}

#[test]
fn refresh_error_is_shown_beside_the_dashboard() {
    let mut state = state_with_weather();
    reveal_up_to(&mut state, RevealStep::Dashboard);
    state.mode = AppMode::Error;
    state.last_error = Some("Location request timed out".to_string());
    let text = draw(&state, 120, 40);
    assert!(text.contains("7-Day Forecast"));
    assert!(text.contains("Location request timed out"));
}

#[test]
fn search_overlay_draws_on_top() {
    let mut state = state_with_weather();
    reveal_up_to(&mut state, RevealStep::Dashboard);
    state.search.open();
    let text = draw(&state, 100, 40);
    assert!(text.contains("Search"));
    assert!(text.contains("Type at least 2 letters"));
}

#[test]
fn tiny_terminal_gets_a_resize_hint() {
    let state = state_with_weather();
    let text = draw(&state, 30, 10);
    assert!(text.contains("Terminal too small"));
}
