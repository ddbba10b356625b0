pub mod theme;
pub mod widgets;

use std::time::Instant;

use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::{
    app::state::{AppMode, AppState},
    domain::weather::ForecastBundle,
};

use self::{
    theme::{ColorCapability, Theme, theme_for},
    widgets::backdrop::Backdrop,
};

const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 16;

pub fn render(frame: &mut Frame, state: &AppState, capability: ColorCapability) {
    render_at(frame, state, capability, Utc::now(), Instant::now());
}

/// Renders one frame as of the given wall-clock and monotonic time.
pub fn render_at(
    frame: &mut Frame,
    state: &AppState,
    capability: ColorCapability,
    now: DateTime<Utc>,
    instant: Instant,
) {
    let area = frame.area();
    let theme = theme_for(state.animation.presentation(), capability);
    frame.render_widget(
        Backdrop {
            theme: &theme,
            surface: state.animation.surface(),
        },
        area,
    );

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let warning = Paragraph::new(format!(
            "Terminal too small. Resize to at least {MIN_WIDTH}x{MIN_HEIGHT}."
        ))
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(theme.text));
        frame.render_widget(warning, area);
        return;
    }

    match (&state.weather, state.mode) {
        (_, AppMode::Loading) | (None, AppMode::Ready | AppMode::Quit) => {
            render_notice(frame, area, &theme, "Loading", &state.loading_message, None);
        }
        (None, AppMode::Error) => {
            let message = state.last_error.as_deref().unwrap_or("Something went wrong");
            render_notice(
                frame,
                area,
                &theme,
                "Weather unavailable",
                message,
                Some("r to retry · q to quit"),
            );
        }
        (Some(bundle), _) => render_dashboard(frame, area, state, bundle, &theme, now, instant),
    }

    if state.search.open {
        widgets::search::render(frame, centered_rect(60, 50, area), &state.search, &theme);
    }
}

fn render_dashboard(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    bundle: &ForecastBundle,
    theme: &Theme,
    now: DateTime<Utc>,
    instant: Instant,
) {
    let revealed = state.reveal.progress();
    let daily_height = u16::try_from(bundle.daily.len()).unwrap_or(u16::MAX).saturating_add(2);
    let [current, hourly, chart, daily, footer] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Min(6),
        Constraint::Length(daily_height.min(9)),
        Constraint::Length(1),
    ])
    .areas(area);

    let local_now = bundle.local_now(now);
    let window = bundle.hourly_window(local_now);
    if revealed.current {
        let shown = bundle
            .current_temp(state.units)
            .map(|_| state.temperature.value_at(instant));
        widgets::current::render(frame, current, bundle, state.units, shown, local_now, theme);
    }
    if revealed.hourly {
        widgets::hourly::render(frame, hourly, window, state.units, theme);
    }
    if revealed.chart {
        widgets::chart::render(frame, chart, window, state.units, theme);
    }
    if revealed.daily {
        widgets::daily::render(frame, daily, &bundle.daily, state.units, theme);
    }
    if revealed.dashboard {
        widgets::footer::render(
            frame,
            footer,
            bundle.local_now(bundle.fetched_at),
            state.units,
            state.last_error.as_deref(),
            theme,
        );
    }
}

fn render_notice(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    title: &'static str,
    message: &str,
    hint: Option<&'static str>,
) {
    let mut lines = vec![Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    ))];
    if let Some(hint) = hint {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(hint, Style::default().fg(theme.muted_text))));
    }
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(theme.text).bg(theme.surface))
        .border_style(Style::default().fg(theme.border));
    let notice = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(notice, centered_rect(60, 30, area));
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(r);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);
    center
}

#[cfg(test)]
mod tests;
