use ratatui::{
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders},
};

use crate::{
    domain::weather::{Units, convert_temp, round_temp},
    ui::theme::Theme,
};

pub(super) fn panel_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text).bg(theme.surface)
}

pub(super) fn panel_block(title: &'static str, theme: &Theme) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(panel_style(theme))
        .border_style(Style::default().fg(theme.border).bg(theme.surface))
}

/// `"12°"` in the display unit, `"--"` when the value is missing.
pub(super) fn format_temp(celsius: Option<f32>, units: Units) -> String {
    celsius.map_or_else(
        || "--".to_string(),
        |c| format!("{}°", round_temp(convert_temp(c, units))),
    )
}
