use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Row, Table},
};

use crate::{
    domain::weather::{
        DailyForecast, Units, weather_code_to_category, weather_icon, weather_label,
        weekday_label,
    },
    ui::theme::{Theme, condition_color, temp_color},
};

use super::shared::{format_temp, panel_block};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    days: &[DailyForecast],
    units: Units,
    theme: &Theme,
) {
    let block = panel_block("7-Day Forecast", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || days.is_empty() {
        return;
    }

    let muted = Style::default().fg(theme.muted_text);
    let rows = days.iter().enumerate().map(|(idx, day)| {
        let icon_style = day.weather_code.map_or(muted, |code| {
            Style::default().fg(condition_color(theme, weather_code_to_category(code)))
        });
        let high_color = day
            .temperature_max_c
            .map_or(theme.muted_text, |c| temp_color(theme, c));
        let low_color = day
            .temperature_min_c
            .map_or(theme.muted_text, |c| temp_color(theme, c));
        Row::new(vec![
            Cell::from(weekday_label(day.date, idx)).style(
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Cell::from(weather_icon(day.weather_code)).style(icon_style),
            Cell::from(weather_label(day.weather_code)),
            Cell::from(precipitation_text(day.precipitation_sum_mm))
                .style(Style::default().fg(theme.info)),
            Cell::from(format_temp(day.temperature_max_c, units))
                .style(Style::default().fg(high_color).add_modifier(Modifier::BOLD)),
            Cell::from(format_temp(day.temperature_min_c, units))
                .style(Style::default().fg(low_color)),
        ])
    });

    let widths = [
        Constraint::Length(10),
        Constraint::Length(3),
        Constraint::Min(12),
        Constraint::Length(8),
        Constraint::Length(5),
        Constraint::Length(5),
    ];
    let table = Table::new(rows, widths)
        .column_spacing(1)
        .style(Style::default().fg(theme.text).bg(theme.surface));
    frame.render_widget(table, inner);
}

/// `"x.x mm"` for measurable precipitation, blank otherwise.
fn precipitation_text(mm: Option<f32>) -> String {
    match mm {
        Some(mm) if mm > 0.0 => format!("{mm:.1} mm"),
        _ => String::new(),
    }
}
