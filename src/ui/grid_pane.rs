use crate::app::AppState;
use crate::planner::GridProjection;
use crate::ui::styles::{
    border_style, default_style, done_style, empty_cell_style, header_style, now_style,
    selected_style, summary_style, title_style,
};
use chrono::Timelike;
use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

const TIME_COLUMN_WIDTH: u16 = 7;

/// Render the weekly grid: header, one row per time, points summary
pub fn render_grid_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let grid = app.coordinator.grid();
    let today_column = app.today.position() + 1;
    let selected_column = app.selected_weekday.position() + 1;
    let columns = grid.column_count();
    let summary_row = grid.row_count() - 1;

    let header = Row::new((0..columns).map(|column| {
        let text = grid.value_at(0, column).unwrap_or_default();
        let style = if column == today_column { now_style() } else { header_style() };
        Cell::from(text).style(style)
    }));

    let mut rows: Vec<Row> = (1..summary_row)
        .map(|row| {
            let is_current_hour = grid
                .time_at(row)
                .map(|time| time.hour() == app.current_hour())
                .unwrap_or(false);

            Row::new((0..columns).map(|column| {
                let text = grid.value_at(row, column).unwrap_or_default();
                let selected = row == app.selected_row + 1 && column == selected_column;
                Cell::from(text).style(cell_style(grid, row, column, selected, is_current_hour))
            }))
        })
        .collect();

    rows.push(Row::new((0..columns).map(|column| {
        Cell::from(grid.value_at(summary_row, column).unwrap_or_default()).style(summary_style())
    })));

    let widths: Vec<Constraint> = std::iter::once(Constraint::Length(TIME_COLUMN_WIDTH))
        .chain((1..columns).map(|_| Constraint::Ratio(1, (columns - 1) as u32)))
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .highlight_style(Style::default())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Week ", title_style())),
        );

    let mut state = TableState::default();
    if summary_row > 1 {
        state.select(Some(app.selected_row));
    }
    f.render_stateful_widget(table, area, &mut state);
}

/// Style of one body cell
fn cell_style(grid: &GridProjection, row: usize, column: usize, selected: bool, is_current_hour: bool) -> Style {
    if selected {
        return selected_style();
    }
    if column == 0 {
        return if is_current_hour { now_style() } else { default_style() };
    }
    match grid.cell(row, column) {
        Some(cell) if cell.is_done() => done_style(),
        Some(_) => default_style(),
        None => empty_cell_style(),
    }
}
