use crate::app::AppState;
use crate::ui::styles::{hint_style, title_style};
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::raw(" ←/→/↑/↓ move   "),
        Span::raw("Tab grid/day   "),
        Span::raw("a add   "),
        Span::raw("e/Enter edit   "),
        Span::raw("x delete   "),
        Span::raw("c cleaner   "),
        Span::raw("s save   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}

/// Render the last action's outcome, or whether there is unsaved work
pub fn render_status_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let text = match (&app.status, app.needs_save) {
        (Some(status), _) => status.clone(),
        (None, true) => "Unsaved changes".to_string(),
        (None, false) => String::new(),
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {}", text), title_style())));
    f.render_widget(paragraph, area);
}
