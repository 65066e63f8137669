use prettytable::{Cell, Row, Table};
use separator::Separatable;

use crate::game::{LevelReport, Outcome};

pub fn summary_table(reports: &[LevelReport]) -> Table {
    let mut table = Table::new();
    table.set_titles(Row::new(
        ["#", "Level", "Result", "Moves", "Pushes", "Solution"]
            .iter()
            .map(|title| Cell::new(title))
            .collect(),
    ));
    for report in reports {
        table.add_row(Row::new(vec![
            Cell::new(&report.number.to_string()),
            Cell::new(&report.title),
            Cell::new(&report.outcome.to_string()),
            Cell::new(&report.moves.move_cnt().to_string()),
            Cell::new(&report.pushes.to_string()),
            Cell::new(&report.moves.to_string()),
        ]));
    }
    table
}

/// One line with totals over all played levels.
pub fn totals(reports: &[LevelReport]) -> String {
    let solved = reports.iter().filter(|r| r.outcome == Outcome::Solved).count();
    let moves: u64 = reports.iter().map(|r| r.moves.move_cnt() as u64).sum();
    let pushes: u64 = reports.iter().map(|r| u64::from(r.pushes)).sum();
    format!(
        "Solved {} of {} levels, {} moves, {} pushes",
        solved,
        reports.len(),
        moves.separated_string(),
        pushes.separated_string()
    )
}
