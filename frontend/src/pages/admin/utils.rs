use crate::state::ledger::{Ledger, SHIFT_DAYS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminRow {
    pub employee_id: String,
    pub cells: Vec<String>,
}

/// Always [`SHIFT_DAYS`] cells; missing days render empty.
pub fn day_cells(values: &[String]) -> Vec<String> {
    (0..SHIFT_DAYS)
        .map(|index| values.get(index).cloned().unwrap_or_default())
        .collect()
}

pub fn day_headers() -> Vec<String> {
    (1..=SHIFT_DAYS).map(|day| format!("Day {}", day)).collect()
}

pub fn table_rows(ledger: &Ledger) -> Vec<AdminRow> {
    ledger
        .rows()
        .map(|(id, entries)| AdminRow {
            employee_id: id.to_string(),
            cells: day_cells(entries.as_slice()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{employee, entries, week_pattern};

    #[test]
    fn short_rows_are_padded_with_empty_cells() {
        let cells = day_cells(&["Morning".to_string(), "Off".to_string()]);
        assert_eq!(cells.len(), SHIFT_DAYS);
        assert_eq!(cells[0], "Morning");
        assert_eq!(cells[1], "Off");
        assert!(cells[2..].iter().all(String::is_empty));
    }

    #[test]
    fn long_rows_are_cut_to_thirty_days() {
        let values = vec!["Night".to_string(); SHIFT_DAYS + 5];
        assert_eq!(day_cells(&values).len(), SHIFT_DAYS);
    }

    #[test]
    fn headers_cover_every_day() {
        let headers = day_headers();
        assert_eq!(headers.first().map(String::as_str), Some("Day 1"));
        assert_eq!(headers.last().map(String::as_str), Some("Day 30"));
    }

    #[test]
    fn rows_follow_ledger_order() {
        let mut ledger = Ledger::new();
        ledger.record(employee("emp20"), entries(&week_pattern()));
        ledger.record(employee("emp3"), entries(&week_pattern()));
        let rows = table_rows(&ledger);
        let ids: Vec<&str> = rows.iter().map(|row| row.employee_id.as_str()).collect();
        assert_eq!(ids, vec!["emp20", "emp3"]);
        assert_eq!(rows[0].cells, week_pattern());
    }
}
