pub mod day_pane;
pub mod grid_pane;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod styles;
pub mod task_form;

use crate::app::AppState;
use crate::domain::{UiMode, View};
use day_pane::render_day_pane;
use grid_pane::render_grid_pane;
use keybindings::{render_keybindings, render_status_bar};
use layout::create_layout;
use modal::{render_alert_modal, render_cleaner_modal};
use ratatui::Frame;
use task_form::render_task_form;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, layout.keybindings_area);

    match app.view {
        View::Grid => render_grid_pane(f, app, layout.main_area),
        View::Day => render_day_pane(f, app, layout.main_area),
    }

    render_status_bar(f, app, layout.status_area);

    // The form stays visible underneath an alert raised by its own submit
    if app.form.is_some() {
        render_task_form(f, app, size);
    }

    if app.ui_mode == UiMode::Cleaner {
        render_cleaner_modal(f, app, size);
    }

    if app.ui_mode == UiMode::Alert {
        render_alert_modal(f, app, size);
    }
}
