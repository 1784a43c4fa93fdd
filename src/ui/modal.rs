use crate::app::AppState;
use crate::domain::Weekday;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the oldest pending alert
pub fn render_alert_modal(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(message) = app.current_alert() {
        let modal_area = create_modal_area(area, 10);

        // Clear the area behind the modal
        f.render_widget(Clear, modal_area);

        let mut lines = vec![Line::raw(""), Line::raw(message.to_string()), Line::raw("")];
        if app.alerts.len() > 1 {
            lines.push(Line::raw(format!("({} more)", app.alerts.len() - 1)));
        }
        lines.push(Line::from(vec![
            Span::styled("[any key]", modal_title_style()),
            Span::raw(" Dismiss"),
        ]));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" ⚠ Attention ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}

/// Render the weekday cleaner
pub fn render_cleaner_modal(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(cleaner) = &app.cleaner {
        let modal_area = create_modal_area(area, 16);

        // Clear the area behind the modal
        f.render_widget(Clear, modal_area);

        let mut lines = vec![Line::raw(""), Line::raw("Pick the weekdays to clean:"), Line::raw("")];

        for (index, weekday) in Weekday::all().iter().enumerate() {
            let mark = if cleaner.is_selected(*weekday) { "[x]" } else { "[ ]" };
            lines.push(Line::from(vec![
                Span::styled(format!("  [{}]", index + 1), modal_title_style()),
                Span::raw(format!(" {} {}", mark, weekday.name())),
            ]));
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled("[a]", modal_title_style()),
            Span::raw(" All  "),
            Span::styled("[r]", modal_title_style()),
            Span::raw(" Reset points  "),
            Span::styled("[d]", modal_title_style()),
            Span::raw(" Delete tasks  "),
            Span::styled("[Esc]", modal_title_style()),
            Span::raw(" Close"),
        ]));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Cleaner ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
