use crate::app::{AppState, FormField};
use crate::domain::{UiMode, Weekday};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events; returns true when the app should quit
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Ok(true);
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::TaskForm => handle_task_form_mode(app, key),
        UiMode::Cleaner => handle_cleaner_mode(app, key),
        UiMode::Alert => handle_alert_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    app.status = None;

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),
        KeyCode::Left | KeyCode::Char('h') => app.move_selection_left(),
        KeyCode::Right | KeyCode::Char('l') => app.move_selection_right(),

        KeyCode::Tab => app.toggle_view(),

        KeyCode::Char('a') => app.start_add_task(),
        KeyCode::Char('e') | KeyCode::Enter => app.start_edit_task(),
        KeyCode::Char('x') | KeyCode::Delete => app.delete_selected(),

        KeyCode::Char('c') => app.open_cleaner(),
        KeyCode::Char('s') => app.save_with_status(),

        // Saving happens on the way out
        KeyCode::Char('q') | KeyCode::Esc => return Ok(true),

        _ => {}
    }
    Ok(false)
}

/// Handle keys while the add/edit form is open
fn handle_task_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            app.submit_task_form();
            return Ok(false);
        }
        KeyCode::Esc => {
            app.cancel_task_form();
            return Ok(false);
        }
        _ => {}
    }

    let Some(form) = app.form.as_mut() else {
        app.ui_mode = UiMode::Normal;
        return Ok(false);
    };
    form.error = None;

    match key.code {
        KeyCode::Tab => form.next_field(),
        KeyCode::BackTab => form.previous_field(),
        KeyCode::Up if form.field == FormField::Name => form.cycle_name(&app.task_names, false),
        KeyCode::Down if form.field == FormField::Name => form.cycle_name(&app.task_names, true),
        KeyCode::Up => form.previous_field(),
        KeyCode::Down => form.next_field(),
        KeyCode::Delete if form.field == FormField::Name => {
            form.forget_name(&mut app.task_names);
        }
        KeyCode::Left => form.adjust(false),
        KeyCode::Right => form.adjust(true),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(c) => form.add_char(c),
        _ => {}
    }
    Ok(false)
}

/// Handle keys in the weekday cleaner
fn handle_cleaner_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char(c @ '1'..='7') => {
            let position = c as usize - '1' as usize;
            if let Some(weekday) = Weekday::from_position(position) {
                app.cleaner_toggle(weekday);
            }
        }
        KeyCode::Char('a') => app.cleaner_toggle_all(),
        KeyCode::Char('d') | KeyCode::Delete => app.cleaner_delete(),
        KeyCode::Char('r') => app.cleaner_reset_points(),
        KeyCode::Esc | KeyCode::Char('q') => app.close_cleaner(),
        _ => {}
    }
    Ok(false)
}

/// Any key dismisses the current alert
fn handle_alert_mode(app: &mut AppState, _key: KeyEvent) -> Result<bool> {
    app.dismiss_alert();
    Ok(false)
}
