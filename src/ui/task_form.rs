use crate::app::{AppState, FormField, TaskForm};
use crate::domain::MAX_PRIORITY;
use crate::ui::{
    layout::create_modal_area,
    styles::{error_style, hint_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const FORM_HEIGHT: u16 = 18;

fn field_value(form: &TaskForm, field: FormField) -> String {
    match field {
        FormField::Name => form.name.clone(),
        FormField::Description => form.description.clone(),
        FormField::Time => form.time.clone(),
        FormField::Weekday => format!("◀ {} ▶", form.weekday.name()),
        FormField::Priority => format!("◀ {}/{} ▶", form.priority, MAX_PRIORITY),
        FormField::Done => String::from(if form.done { "[x]" } else { "[ ]" }),
    }
}

/// Render the add/edit task form
pub fn render_task_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.form {
        let modal_area = create_modal_area(area, FORM_HEIGHT);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let mut lines = vec![Line::raw("")];

        for field in FormField::ALL {
            let editing = form.field == field;
            let label = if editing {
                format!("{}: (editing)", field.label())
            } else {
                format!("{}:", field.label())
            };
            lines.push(Line::raw(label));
            lines.push(Line::from(vec![
                Span::raw("> "),
                Span::styled(field_value(form, field), modal_title_style()),
                if editing && matches!(field, FormField::Name | FormField::Description | FormField::Time) {
                    Span::styled("█", modal_title_style()) // Cursor
                } else {
                    Span::raw("")
                },
            ]));
        }

        lines.push(Line::raw(""));
        match &form.error {
            Some(error) => lines.push(Line::from(Span::styled(error.clone(), error_style()))),
            None => lines.push(Line::from(Span::styled(
                "Tab fields · ↑/↓ saved names · ←/→ change · Enter save · Esc cancel",
                hint_style(),
            ))),
        }

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(form.title(), modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
