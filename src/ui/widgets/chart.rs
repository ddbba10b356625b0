#![allow(clippy::cast_precision_loss)]

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    symbols,
    widgets::{Axis, Chart, Dataset, GraphType},
};

use crate::{
    domain::weather::{HourlyForecast, Units, convert_temp, hour_label, round_temp},
    ui::theme::Theme,
};

use super::shared::panel_block;

/// Degrees of headroom above and below the plotted range.
const Y_PADDING: f64 = 2.0;

/// Temperature line over the hourly window; gaps in the data are skipped.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    hours: &[HourlyForecast],
    units: Units,
    theme: &Theme,
) {
    let block = panel_block("Temperature", theme);
    let points = chart_points(hours, units);
    let Some((low, high)) = y_bounds(&points) else {
        frame.render_widget(block, area);
        return;
    };

    let x_max = hours.len().saturating_sub(1).max(1) as f64;
    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(theme.chart))
        .data(&points);

    let muted = Style::default().fg(theme.muted_text);
    let chart = Chart::new(vec![dataset])
        .block(block)
        .style(Style::default().fg(theme.text).bg(theme.surface))
        .x_axis(
            Axis::default()
                .style(muted)
                .bounds([0.0, x_max])
                .labels(x_labels(hours)),
        )
        .y_axis(
            Axis::default()
                .style(muted)
                .bounds([low, high])
                .labels(y_labels(low, high, units)),
        );
    frame.render_widget(chart, area);
}

fn chart_points(hours: &[HourlyForecast], units: Units) -> Vec<(f64, f64)> {
    hours
        .iter()
        .enumerate()
        .filter_map(|(idx, hour)| {
            hour.temperature_2m_c
                .map(|c| (idx as f64, f64::from(convert_temp(c, units))))
        })
        .collect()
}

fn y_bounds(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    let (low, high) = points.iter().fold(None, |acc: Option<(f64, f64)>, (_, y)| {
        Some(acc.map_or((*y, *y), |(lo, hi)| (lo.min(*y), hi.max(*y))))
    })?;
    Some(((low - Y_PADDING).floor(), (high + Y_PADDING).ceil()))
}

fn x_labels(hours: &[HourlyForecast]) -> Vec<String> {
    let (Some(first), Some(last)) = (hours.first(), hours.last()) else {
        return Vec::new();
    };
    let middle = &hours[hours.len() / 2];
    vec![
        hour_label(first.time),
        hour_label(middle.time),
        hour_label(last.time),
    ]
}

fn y_labels(low: f64, high: f64, units: Units) -> Vec<String> {
    let mid = (low + high) / 2.0;
    [low, mid, high]
        .iter()
        .map(|value| format!("{}{}", round_temp(*value as f32), units.symbol()))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::{
        test_support::{buffer_text, fixture_bundle},
        ui::theme::{ColorCapability, theme_for},
    };

    #[test]
    fn bounds_pad_the_observed_range() {
        let points = vec![(0.0, 4.2), (1.0, 9.8), (2.0, 6.0)];
        assert_eq!(y_bounds(&points), Some((2.0, 12.0)));
        assert_eq!(y_bounds(&[]), None);
    }

    #[test]
    fn missing_temperatures_are_skipped() {
        let mut hours = fixture_bundle(Some(0)).hourly;
        hours.truncate(3);
        hours[1].temperature_2m_c = None;
        let points = chart_points(&hours, Units::Fahrenheit);
        assert_eq!(points.len(), 2);
        assert!((points[0].1 - 41.0).abs() < 1e-6);
        assert!((points[1].0 - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn axis_labels_carry_the_unit() {
        let labels = y_labels(2.0, 12.0, Units::Celsius);
        assert_eq!(labels, vec!["2°C", "7°C", "12°C"]);
        let labels = y_labels(30.0, 50.0, Units::Fahrenheit);
        assert_eq!(labels[2], "50°F");
    }

    #[test]
    fn renders_over_the_hourly_window() {
        let bundle = fixture_bundle(Some(3));
        let local_now = NaiveDateTime::parse_from_str("2026-02-12T11:00", "%Y-%m-%dT%H:%M")
            .expect("time");
        let window = bundle.hourly_window(local_now);
        let theme = theme_for(None, ColorCapability::TrueColor);

        let mut terminal = Terminal::new(TestBackend::new(80, 12)).expect("terminal");
        terminal
            .draw(|frame| render(frame, frame.area(), window, Units::Celsius, &theme))
            .expect("draw");
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Temperature"));
        assert!(text.contains("°C"));
        assert!(text.contains("10 AM"));
    }
}
