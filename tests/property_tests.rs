//! Property-based tests for patentdash using proptest
//!
//! These tests generate random monthly topic tables and check the derived
//! quarterly and cumulative views against straightforward recomputation.

use chrono::{Months, NaiveDate};
use patentdash::TimeTable;
use patentdash::app::TopicsDashboard;
use patentdash::data::period::{next_quarter_start, quarter_end};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Random monthly table: distinct months, 1-4 topics, integer counts
fn table_strategy() -> impl Strategy<Value = TimeTable> {
    (
        prop::collection::btree_set(0u32..72, 1..24),
        1usize..5,
        1u32..29,
    )
        .prop_flat_map(|(months, width, day)| {
            let len = months.len();
            (
                Just(months),
                Just(width),
                Just(day),
                prop::collection::vec(prop::collection::vec(0u32..500, width), len),
            )
        })
        .prop_map(|(months, width, day, counts)| build_table(&months, width, day, counts))
}

fn build_table(months: &BTreeSet<u32>, width: usize, day: u32, counts: Vec<Vec<u32>>) -> TimeTable {
    let start = NaiveDate::from_ymd_opt(2015, 1, day).unwrap();
    let index = months
        .iter()
        .map(|m| start.checked_add_months(Months::new(*m)).unwrap())
        .collect();
    let columns = (0..width).map(|i| format!("topic {i}")).collect();
    let rows = counts
        .into_iter()
        .map(|row| row.into_iter().map(f64::from).collect())
        .collect();
    TimeTable::new("registration date", index, columns, rows).unwrap()
}

proptest! {
    #[test]
    fn test_quarterly_rows_sum_their_months(table in table_strategy()) {
        let quarterly = table.resample_quarterly();

        for (q, row) in quarterly.index().iter().zip(quarterly.rows()) {
            let mut expected = vec![0.0; table.columns().len()];
            for (date, monthly) in table.index().iter().zip(table.rows()) {
                if quarter_end(*date) == *q {
                    for (acc, v) in expected.iter_mut().zip(monthly) {
                        *acc += v;
                    }
                }
            }
            prop_assert_eq!(row, &expected);
        }
    }

    #[test]
    fn test_quarterly_index_is_contiguous(table in table_strategy()) {
        let quarterly = table.resample_quarterly();
        let index = quarterly.index();

        prop_assert_eq!(index.first().copied(), table.first_date().map(quarter_end));
        prop_assert_eq!(index.last().copied(), table.last_date().map(quarter_end));
        for pair in index.windows(2) {
            let next = next_quarter_start(pair[0]).map(quarter_end);
            prop_assert_eq!(next, Some(pair[1]));
        }
    }

    #[test]
    fn test_quarterly_preserves_totals(table in table_strategy()) {
        prop_assert_eq!(table.resample_quarterly().column_totals(), table.column_totals());
    }

    #[test]
    fn test_cumulative_is_prefix_sum(table in table_strategy()) {
        let cumulative = table.cumulative();

        prop_assert_eq!(cumulative.index(), table.index());
        let mut running = vec![0.0; table.columns().len()];
        for (monthly, cum) in table.rows().iter().zip(cumulative.rows()) {
            for (acc, v) in running.iter_mut().zip(monthly) {
                *acc += v;
            }
            prop_assert_eq!(cum, &running);
        }
    }

    #[test]
    fn test_every_option_selects_its_quarter(table in table_strategy()) {
        let dashboard = TopicsDashboard::from_table(table).unwrap();
        let quarterly = dashboard.quarterly().clone();

        prop_assert_eq!(dashboard.options().len(), quarterly.len());
        for (option, (date, row)) in dashboard
            .options()
            .iter()
            .zip(quarterly.index().iter().zip(quarterly.rows()))
        {
            let frame = dashboard.quarter_frame(&option.value).unwrap();
            let expected: Vec<(String, f64)> = quarterly
                .columns()
                .iter()
                .cloned()
                .zip(row.iter().copied())
                .collect();
            prop_assert_eq!(&frame, &expected);
            prop_assert_eq!(dashboard.resolve(&option.value).unwrap(), *date);

            let treemap = dashboard.treemap(&option.value).unwrap();
            prop_assert_eq!(&treemap.data[0]["values"], &serde_json::json!(row));
        }
    }
}
