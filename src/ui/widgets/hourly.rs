use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Row, Table},
};

use crate::{
    domain::weather::{HourlyForecast, Units, hour_label, weather_code_to_category, weather_icon},
    ui::theme::{Theme, condition_color, temp_color},
};

use super::shared::{format_temp, panel_block};

const COLUMN_WIDTH: u16 = 7;

/// Hour strip; shows as many leading entries of `hours` as fit the width.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    hours: &[HourlyForecast],
    units: Units,
    theme: &Theme,
) {
    let block = panel_block("Hourly", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = visible_columns(inner.width, hours.len());
    if visible == 0 || inner.height == 0 {
        return;
    }
    let slice = &hours[..visible];

    let muted = Style::default().fg(theme.muted_text);
    let time_row = Row::new(
        slice
            .iter()
            .map(|hour| Cell::from(hour_label(hour.time)).style(muted)),
    );
    let icon_row = Row::new(slice.iter().map(|hour| {
        let style = hour.weather_code.map_or(muted, |code| {
            Style::default().fg(condition_color(theme, weather_code_to_category(code)))
        });
        Cell::from(weather_icon(hour.weather_code)).style(style)
    }));
    let temp_row = Row::new(slice.iter().map(|hour| {
        let color = hour
            .temperature_2m_c
            .map_or(theme.muted_text, |c| temp_color(theme, c));
        Cell::from(format_temp(hour.temperature_2m_c, units))
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
    }));

    let widths = vec![Constraint::Length(COLUMN_WIDTH); visible];
    let table = Table::new(vec![time_row, icon_row, temp_row], widths)
        .column_spacing(0)
        .style(Style::default().fg(theme.text).bg(theme.surface));
    frame.render_widget(table, inner);
}

fn visible_columns(width: u16, available: usize) -> usize {
    usize::from(width / COLUMN_WIDTH).min(available)
}
