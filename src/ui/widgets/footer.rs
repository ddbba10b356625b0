use chrono::NaiveDateTime;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{domain::weather::Units, ui::theme::Theme};

/// Fetch time, an optional error from the last refresh, and key hints.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    updated_at: NaiveDateTime,
    units: Units,
    error: Option<&str>,
    theme: &Theme,
) {
    let muted = Style::default().fg(theme.muted_text);
    let mut spans = vec![Span::styled(
        format!(" Updated {} ", updated_at.format("%-I:%M %p")),
        muted,
    )];
    if let Some(error) = error {
        spans.push(Span::styled(
            format!("· {error} "),
            Style::default()
                .fg(theme.danger)
                .add_modifier(Modifier::BOLD),
        ));
    }
    spans.push(Span::styled(
        format!(
            "· {} · / search · u units · r refresh · q quit",
            units.symbol()
        ),
        muted,
    ));
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.surface)),
        area,
    );
}
