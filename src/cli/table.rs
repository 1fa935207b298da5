// src/cli/table.rs
use clap::ValueEnum;
use console::{measure_text_width, pad_str, style, Alignment};

use crate::models::{HistoryFilter, HistoryRecord};

const MASKED_HEADER: &str = "Masked Password";
const CRACK_TIME_HEADER: &str = "Crack Time";

// Cells wider than this are clipped so one huge entry cannot wreck the layout.
const MAX_CELL_WIDTH: usize = 40;

/// The two history table columns, also usable as CLI values
/// (`--sort masked-password`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HistoryColumn {
    MaskedPassword,
    CrackTime,
}

impl HistoryColumn {
    fn cell<'a>(&self, record: &'a HistoryRecord) -> &'a str {
        match self {
            HistoryColumn::MaskedPassword => &record.masked_password,
            HistoryColumn::CrackTime => &record.crack_time,
        }
    }
}

/// How one rendering of the history table should look. The ledger itself is
/// never touched: filtering and sorting work on borrowed rows.
#[derive(Debug, Clone)]
pub struct GridOptions {
    pub page_size: usize,
    pub sort: Option<HistoryColumn>,
    pub descending: bool,
    pub filter: HistoryFilter,
}

impl GridOptions {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            sort: None,
            descending: false,
            filter: HistoryFilter::default(),
        }
    }
}

/// Apply the filter and sort from `options`, leaving ledger order intact.
/// Rows that compare equal keep their ledger order.
pub fn arrange<'a>(records: &'a [HistoryRecord], options: &GridOptions) -> Vec<&'a HistoryRecord> {
    let mut rows: Vec<&HistoryRecord> = records
        .iter()
        .filter(|record| matches_filter(record, &options.filter))
        .collect();

    if let Some(column) = options.sort {
        rows.sort_by(|a, b| {
            let ordering = column.cell(a).cmp(column.cell(b));
            if options.descending {
                ordering.reverse()
            } else {
                ordering
            }
        });
    }

    rows
}

// Substring match, case-insensitive, per column. An unset column always matches.
fn matches_filter(record: &HistoryRecord, filter: &HistoryFilter) -> bool {
    let masked_ok = filter
        .masked_contains
        .as_ref()
        .map(|needle| contains_ignore_case(&record.masked_password, needle))
        .unwrap_or(true);
    let crack_ok = filter
        .crack_time_contains
        .as_ref()
        .map(|needle| contains_ignore_case(&record.crack_time, needle))
        .unwrap_or(true);
    masked_ok && crack_ok
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Number of pages the arranged rows span.
pub fn page_count(rows: usize, page_size: usize) -> usize {
    if rows == 0 {
        0
    } else {
        (rows - 1) / page_size.max(1) + 1
    }
}

fn clip(text: &str) -> String {
    console::truncate_str(text, MAX_CELL_WIDTH, "...").to_string()
}

/// Render one page of the table. Columns fit their widest visible cell,
/// clipped at a fixed cap. An out-of-range page renders headers only.
pub fn render_page(rows: &[&HistoryRecord], page: usize, page_size: usize) -> String {
    let page_size = page_size.max(1);
    let start = (page * page_size).min(rows.len());
    let end = (start + page_size).min(rows.len());

    let cells: Vec<(String, String)> = rows[start..end]
        .iter()
        .map(|record| (clip(&record.masked_password), clip(&record.crack_time)))
        .collect();

    let mut masked_width = measure_text_width(MASKED_HEADER);
    let mut crack_width = measure_text_width(CRACK_TIME_HEADER);
    for (masked, crack_time) in &cells {
        masked_width = masked_width.max(measure_text_width(masked));
        crack_width = crack_width.max(measure_text_width(crack_time));
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{}  {}\n",
        style(pad_str(MASKED_HEADER, masked_width, Alignment::Left, None).as_ref()).bold(),
        style(pad_str(CRACK_TIME_HEADER, crack_width, Alignment::Left, None).as_ref()).bold(),
    ));
    out.push_str(&"-".repeat(masked_width + 2 + crack_width));
    out.push('\n');
    for (masked, crack_time) in &cells {
        out.push_str(&format!(
            "{}  {}\n",
            pad_str(masked, masked_width, Alignment::Left, None),
            pad_str(crack_time, crack_width, Alignment::Left, None),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(masked: &str, crack_time: &str) -> HistoryRecord {
        HistoryRecord {
            masked_password: masked.to_string(),
            crack_time: crack_time.to_string(),
        }
    }

    fn fixture() -> Vec<HistoryRecord> {
        vec![
            record("*******t1!", "2.31 years"),
            record("********ass", "1.61 centuries"),
            record("*********ood", "40.82 days"),
        ]
    }

    #[test]
    fn test_no_options_keep_ledger_order() {
        let records = fixture();
        let rows = arrange(&records, &GridOptions::new(10));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].masked_password, "*******t1!");
        assert_eq!(rows[2].masked_password, "*********ood");
    }

    #[test]
    fn test_filter_on_masked_column() {
        let records = fixture();
        let mut options = GridOptions::new(10);
        options.filter.masked_contains = Some("ass".to_string());

        let rows = arrange(&records, &options);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].masked_password, "********ass");
    }

    #[test]
    fn test_filter_on_crack_time_column_ignores_case() {
        let records = fixture();
        let mut options = GridOptions::new(10);
        options.filter.crack_time_contains = Some("CENTURIES".to_string());

        let rows = arrange(&records, &options);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].crack_time, "1.61 centuries");
    }

    #[test]
    fn test_filters_apply_together() {
        let records = fixture();
        let mut options = GridOptions::new(10);
        options.filter.masked_contains = Some("*".to_string());
        options.filter.crack_time_contains = Some("days".to_string());

        let rows = arrange(&records, &options);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].masked_password, "*********ood");
    }

    #[test]
    fn test_sort_by_crack_time_ascending() {
        let records = fixture();
        let mut options = GridOptions::new(10);
        options.sort = Some(HistoryColumn::CrackTime);

        let rows = arrange(&records, &options);
        let times: Vec<&str> = rows.iter().map(|r| r.crack_time.as_str()).collect();
        assert_eq!(times, vec!["1.61 centuries", "2.31 years", "40.82 days"]);
    }

    #[test]
    fn test_sort_descending_reverses_the_comparison() {
        let records = fixture();
        let mut options = GridOptions::new(10);
        options.sort = Some(HistoryColumn::CrackTime);
        options.descending = true;

        let rows = arrange(&records, &options);
        let times: Vec<&str> = rows.iter().map(|r| r.crack_time.as_str()).collect();
        assert_eq!(times, vec!["40.82 days", "2.31 years", "1.61 centuries"]);
    }

    #[test]
    fn test_arrange_leaves_the_ledger_untouched() {
        let records = fixture();
        let mut options = GridOptions::new(10);
        options.sort = Some(HistoryColumn::MaskedPassword);
        options.descending = true;

        let _ = arrange(&records, &options);
        assert_eq!(records[0].masked_password, "*******t1!");
        assert_eq!(records[2].masked_password, "*********ood");
    }

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(5, 2), 3);
    }

    #[test]
    fn test_render_includes_headers_and_cells() {
        let records = fixture();
        let rows = arrange(&records, &GridOptions::new(10));
        let output = render_page(&rows, 0, 10);

        assert!(output.contains("Masked Password"));
        assert!(output.contains("Crack Time"));
        assert!(output.contains("********ass"));
        assert!(output.contains("1.61 centuries"));
    }

    #[test]
    fn test_render_windows_rows_by_page() {
        let records = fixture();
        let rows = arrange(&records, &GridOptions::new(2));

        let first = render_page(&rows, 0, 2);
        assert!(first.contains("*******t1!"));
        assert!(!first.contains("*********ood"));

        let second = render_page(&rows, 1, 2);
        assert!(second.contains("*********ood"));
        assert!(!second.contains("*******t1!"));
        assert!(!second.contains("********ass"));
    }

    #[test]
    fn test_render_clips_very_wide_cells() {
        let wide = "*".repeat(60);
        let records = vec![record(&wide, "0.21 seconds")];
        let rows = arrange(&records, &GridOptions::new(10));

        let output = render_page(&rows, 0, 10);
        assert!(output.contains("..."));
        assert!(!output.contains(&wide));
    }

    #[test]
    fn test_render_out_of_range_page_shows_headers_only() {
        let records = fixture();
        let rows = arrange(&records, &GridOptions::new(10));

        let output = render_page(&rows, 5, 10);
        assert!(output.contains("Masked Password"));
        assert!(!output.contains("*******t1!"));
    }
}
