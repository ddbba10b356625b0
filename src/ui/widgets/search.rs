use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::{app::search::SearchState, ui::theme::Theme};

use super::shared::{panel_block, panel_style};

pub fn render(frame: &mut Frame, area: Rect, search: &SearchState, theme: &Theme) {
    frame.render_widget(Clear, area);

    let block = panel_block("Search", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [query_area, list_area, status_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    render_query_line(frame, query_area, search, theme);

    let items: Vec<ListItem<'static>> = search
        .results
        .iter()
        .map(|location| ListItem::new(location.display_name()))
        .collect();
    let mut list_state = ListState::default()
        .with_selected((!items.is_empty()).then_some(search.selected));
    let list = List::new(items)
        .style(panel_style(theme))
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ");
    frame.render_stateful_widget(list, list_area, &mut list_state);

    let status = search
        .status
        .message()
        .unwrap_or("Enter select · ↑/↓ move · Esc close");
    frame.render_widget(
        Paragraph::new(status).style(Style::default().fg(theme.muted_text)),
        status_area,
    );
}

fn render_query_line(frame: &mut Frame, area: Rect, search: &SearchState, theme: &Theme) {
    let (text, style) = if search.query.is_empty() {
        (
            "Type at least 2 letters of a city",
            Style::default().fg(theme.muted_text),
        )
    } else {
        (
            search.query.as_str(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )
    };
    let line = Paragraph::new(Line::from(vec![
        Span::styled("City: ", Style::default().fg(theme.muted_text)),
        Span::styled(text, style),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(line, area);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::{
        domain::weather::Location,
        test_support::buffer_text,
        ui::theme::{ColorCapability, theme_for},
    };

    fn draw(search: &SearchState) -> String {
        let theme = theme_for(None, ColorCapability::TrueColor);
        let mut terminal = Terminal::new(TestBackend::new(50, 10)).expect("terminal");
        terminal
            .draw(|frame| render(frame, frame.area(), search, &theme))
            .expect("draw");
        buffer_text(terminal.backend().buffer())
    }

    fn typed(query: &str) -> (SearchState, u64) {
        let mut search = SearchState::default();
        search.open();
        let mut generation = 0;
        for ch in query.chars() {
            if let Some(next) = search.push_char(ch) {
                generation = next;
            }
        }
        (search, generation)
    }

    #[test]
    fn lists_results_with_selection_marker() {
        let (mut search, generation) = typed("Par");
        let mut paris = Location::from_coords(48.85, 2.35);
        paris.name = "Paris".to_string();
        paris.country = Some("France".to_string());
        assert!(search.apply_results(generation, vec![paris]));

        let text = draw(&search);
        assert!(text.contains("City: Par"));
        assert!(text.contains("› Paris, France"));
    }

    #[test]
    fn empty_and_failed_searches_explain_themselves() {
        let (mut search, generation) = typed("Zzyzx");
        search.apply_results(generation, Vec::new());
        assert!(draw(&search).contains("No results found"));

        let (mut search, generation) = typed("Zzyzx");
        search.apply_failure(generation);
        assert!(draw(&search).contains("Search unavailable"));
    }
}
