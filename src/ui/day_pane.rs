use crate::app::AppState;
use crate::report::stats::calculate_day_stats;
use crate::ui::styles::{border_style, default_style, done_style, hint_style, selected_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Render every panel of the selected weekday
pub fn render_day_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let weekday = app.selected_weekday;
    let panels = app.coordinator.weekday_planner().panels(weekday);
    let stats = calculate_day_stats(app.coordinator.schedule(), weekday);

    let title = format!(
        " {} · {}/{} points · {}/{} done ",
        weekday.name(),
        stats.earned,
        stats.possible,
        stats.done,
        stats.tasks
    );

    let items: Vec<ListItem> = if panels.is_empty() {
        vec![ListItem::new(Line::from(Span::styled("  No tasks. Press a to add one.", hint_style())))]
    } else {
        panels
            .iter()
            .enumerate()
            .map(|(index, panel)| {
                let selected = index == app.selected_panel;
                let label_style = match (selected, panel.done) {
                    (true, _) => selected_style(),
                    (false, true) => done_style(),
                    (false, false) => default_style(),
                };
                let check = if panel.done { "[x]" } else { "[ ]" };

                let mut lines = vec![Line::from(vec![
                    Span::styled(format!(" {} ", check), label_style),
                    Span::styled(panel.time.format("%H:%M").to_string(), title_style()),
                    Span::raw("  "),
                    Span::styled(panel.label.clone(), label_style),
                ])];
                if !panel.description.trim().is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("            {}", panel.description.trim()),
                        hint_style(),
                    )));
                }
                ListItem::new(lines)
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    let mut state = ListState::default();
    if !panels.is_empty() {
        state.select(Some(app.selected_panel));
    }
    f.render_stateful_widget(list, area, &mut state);
}
