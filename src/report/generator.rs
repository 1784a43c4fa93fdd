use crate::domain::Weekday;
use crate::planner::{GridProjection, WeekdayPlanner};
use crate::report::stats::WeekStats;

/// Plain-text rendering of the weekly grid, one line per table row
pub fn format_grid(grid: &GridProjection) -> String {
    let rows = grid.row_count();
    let columns = grid.column_count();

    let cells: Vec<Vec<String>> = (0..rows)
        .map(|row| {
            (0..columns)
                .map(|column| grid.value_at(row, column).unwrap_or_default())
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..columns)
        .map(|column| {
            cells
                .iter()
                .map(|line| line[column].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut output = String::new();
    for line in &cells {
        let padded: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(text, width)| format!("{:<width$}", text, width = *width))
            .collect();
        output.push_str(padded.join("  ").trim_end());
        output.push('\n');
    }
    output
}

/// Plain-text rendering of one weekday's panels
pub fn format_day(planner: &WeekdayPlanner, weekday: Weekday) -> String {
    let panels = planner.panels(weekday);
    let mut output = format!("{}\n", weekday.name());

    if panels.is_empty() {
        output.push_str("  (no tasks)\n");
        return output;
    }

    for panel in panels {
        let mark = if panel.done { "x" } else { " " };
        output.push_str(&format!(
            "  [{}] {} {}\n",
            mark,
            panel.time.format("%H:%M"),
            panel.label
        ));
        if !panel.description.trim().is_empty() {
            output.push_str(&format!("        {}\n", panel.description.trim()));
        }
    }
    output
}

/// One-line weekly total
pub fn format_week_summary(stats: &WeekStats) -> String {
    format!(
        "Week: {}/{} points ({:.1}%)",
        stats.earned,
        stats.possible,
        stats.completion_percent()
    )
}
