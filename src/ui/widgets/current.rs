use chrono::NaiveDateTime;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    domain::weather::{
        ForecastBundle, Units, weather_code_to_category, weather_icon, weather_label,
    },
    ui::theme::{Theme, condition_color, temp_color},
};

use super::shared::panel_block;

const UNKNOWN: &str = "—";

/// Headline conditions. `shown_temp` is the tweened value already in `units`,
/// `None` when the service sent no air temperature.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    bundle: &ForecastBundle,
    units: Units,
    shown_temp: Option<i32>,
    local_now: NaiveDateTime,
    theme: &Theme,
) {
    let block = panel_block("Now", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let lines = vec![
        header_line(bundle, local_now, theme),
        temperature_line(bundle, units, shown_temp, theme),
        metrics_line(bundle, units, theme),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), inner);
}

fn header_line(bundle: &ForecastBundle, local_now: NaiveDateTime, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            bundle.location.display_name(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", local_now.format("%a %-I:%M %p")),
            Style::default().fg(theme.muted_text),
        ),
    ])
}

fn temperature_line(
    bundle: &ForecastBundle,
    units: Units,
    shown_temp: Option<i32>,
    theme: &Theme,
) -> Line<'static> {
    let code = bundle.current_weather_code();
    let icon_style = code.map_or(Style::default().fg(theme.accent), |code| {
        Style::default().fg(condition_color(theme, weather_code_to_category(code)))
    });
    Line::from(vec![
        Span::styled(format!("{} ", weather_icon(code)), icon_style),
        Span::styled(
            shown_temp.map_or_else(|| UNKNOWN.to_string(), |t| format!("{t}{}", units.symbol())),
            Style::default()
                .fg(bundle
                    .current
                    .temperature_2m_c
                    .map_or(theme.muted_text, |c| temp_color(theme, c)))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", weather_label(code)),
            Style::default().fg(theme.text),
        ),
    ])
}

fn metrics_line(bundle: &ForecastBundle, units: Units, theme: &Theme) -> Line<'static> {
    let label = Style::default().fg(theme.muted_text);
    let value = Style::default().fg(theme.text);
    let current = &bundle.current;
    let feels_like = bundle
        .feels_like(units)
        .map_or_else(|| UNKNOWN.to_string(), |t| format!("{t}°"));
    Line::from(vec![
        Span::styled("Feels like ", label),
        Span::styled(feels_like, value),
        Span::styled("  Humidity ", label),
        Span::styled(format!("{}%", current.relative_humidity_2m.round()), value),
        Span::styled("  Wind ", label),
        Span::styled(format!("{} km/h", current.wind_speed_10m.round()), value),
        Span::styled(format!(" {}°", current.wind_direction_10m.round()), value),
    ])
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::{
        test_support::{buffer_text, fixture_bundle},
        ui::theme::{ColorCapability, theme_for},
    };

    fn draw(bundle: &ForecastBundle, units: Units, shown: Option<i32>) -> String {
        let theme = theme_for(None, ColorCapability::TrueColor);
        let local = NaiveDateTime::parse_from_str("2026-02-12T15:05", "%Y-%m-%dT%H:%M")
            .expect("time");
        let mut terminal = Terminal::new(TestBackend::new(80, 5)).expect("terminal");
        terminal
            .draw(|frame| render(frame, frame.area(), bundle, units, shown, local, &theme))
            .expect("draw");
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn shows_location_time_and_readings() {
        let text = draw(&fixture_bundle(Some(61)), Units::Celsius, Some(7));
        assert!(text.contains("Kulgam, India"));
        assert!(text.contains("Thu 3:05 PM"));
        assert!(text.contains("7°C"));
        assert!(text.contains("Slight rain"));
        assert!(text.contains("Humidity 73%"));
        assert!(text.contains("Wind 12 km/h 220°"));
        assert!(text.contains("Feels like 6°"));
    }

    #[test]
    fn tweened_value_is_what_gets_drawn() {
        let text = draw(&fixture_bundle(Some(0)), Units::Fahrenheit, Some(30));
        assert!(text.contains("30°F"));
        assert!(text.contains("Feels like 42°"));
    }

    #[test]
    fn missing_air_temperature_is_not_drawn_as_zero() {
        let mut bundle = fixture_bundle(Some(3));
        bundle.current.temperature_2m_c = None;
        bundle.current.apparent_temperature_c = None;
        let text = draw(&bundle, Units::Celsius, bundle.current_temp(Units::Celsius));
        assert!(!text.contains("0°C"));
        assert!(text.contains("Feels like —"));
        assert_eq!(text.matches('—').count(), 2);
    }

    #[test]
    fn unknown_code_shows_placeholder_label() {
        let text = draw(&fixture_bundle(None), Units::Celsius, Some(7));
        assert!(text.contains('—'));
    }
}
