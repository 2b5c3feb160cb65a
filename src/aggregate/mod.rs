use std::collections::HashMap;

use crate::fda::RecallRecord;

/// Root-cause and firm tables keep only the heaviest entries.
pub const TOP_N: usize = 10;
/// Number of product descriptions sampled for the prompt.
pub const SAMPLE_SIZE: usize = 5;

/// Ranked count-by-category table. Ordering is part of the contract:
/// either count-descending or key-ascending, ties in first-occurrence order.
pub type AggregateTable = Vec<(String, u64)>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecallSummary {
    pub total: usize,
    /// Top 10 root causes, count descending.
    pub root_causes: AggregateTable,
    /// All months present, ascending by YYYY-MM key.
    pub monthly: AggregateTable,
    /// Top 10 recalling firms, count descending.
    pub firms: AggregateTable,
    /// Full status breakdown, count descending.
    pub statuses: AggregateTable,
    /// First 5 product descriptions, untruncated; None where absent.
    pub samples: Vec<Option<String>>,
}

/// Pure aggregation pass over one fetch's worth of records. Records
/// missing a field are skipped for that table only; never fails.
pub fn summarize(records: &[RecallRecord]) -> RecallSummary {
    let root_causes = top_n(
        count_by(
            records
                .iter()
                .filter_map(|r| r.root_cause_description.clone()),
        ),
        TOP_N,
    );

    let monthly = sort_by_key(count_by(
        records
            .iter()
            .filter_map(|r| r.event_date_initiated.as_deref().map(month_key)),
    ));

    let firms = top_n(
        count_by(records.iter().filter_map(|r| r.recalling_firm.clone())),
        TOP_N,
    );

    let statuses = rank_descending(count_by(
        records.iter().filter_map(|r| r.recall_status.clone()),
    ));

    let samples = records
        .iter()
        .take(SAMPLE_SIZE)
        .map(|r| r.product_description.clone())
        .collect();

    RecallSummary {
        total: records.len(),
        root_causes,
        monthly,
        firms,
        statuses,
        samples,
    }
}

/// YYYY-MM grouping key: the first 7 characters of the initiation date.
/// Malformed dates produce a garbage key rather than an error.
fn month_key(date: &str) -> String {
    date.chars().take(7).collect()
}

/// Count occurrences, keeping keys in first-occurrence order so that the
/// later stable sorts preserve source order among ties.
fn count_by(keys: impl Iterator<Item = String>) -> AggregateTable {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut table: AggregateTable = Vec::new();
    for key in keys {
        match index.get(&key) {
            Some(&i) => table[i].1 += 1,
            None => {
                index.insert(key.clone(), table.len());
                table.push((key, 1));
            }
        }
    }
    table
}

fn rank_descending(mut table: AggregateTable) -> AggregateTable {
    // Vec::sort_by is stable; ties keep first-occurrence order.
    table.sort_by(|a, b| b.1.cmp(&a.1));
    table
}

fn top_n(table: AggregateTable, n: usize) -> AggregateTable {
    let mut ranked = rank_descending(table);
    ranked.truncate(n);
    ranked
}

fn sort_by_key(mut table: AggregateTable) -> AggregateTable {
    table.sort_by(|a, b| a.0.cmp(&b.0));
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        date: Option<&str>,
        cause: Option<&str>,
        firm: Option<&str>,
        status: Option<&str>,
    ) -> RecallRecord {
        RecallRecord {
            recall_number: None,
            event_date_initiated: date.map(String::from),
            product_code: None,
            root_cause_description: cause.map(String::from),
            recalling_firm: firm.map(String::from),
            recall_status: status.map(String::from),
            product_description: None,
        }
    }

    #[test]
    fn test_counts_are_exact() {
        let records: Vec<_> = (0..12)
            .map(|_| record(None, Some("Software Error"), None, None))
            .chain(std::iter::once(record(None, Some("Labeling"), None, None)))
            .collect();
        let summary = summarize(&records);
        assert_eq!(summary.root_causes[0], ("Software Error".to_string(), 12));
        assert_eq!(summary.root_causes[1], ("Labeling".to_string(), 1));
    }

    #[test]
    fn test_top_n_cap() {
        let records: Vec<_> = (0..25)
            .map(|i| record(None, None, Some(&format!("Firm {}", i)), None))
            .collect();
        let summary = summarize(&records);
        assert_eq!(summary.firms.len(), TOP_N);
    }

    #[test]
    fn test_status_table_unbounded() {
        let records: Vec<_> = (0..15)
            .map(|i| record(None, None, None, Some(&format!("Status {}", i))))
            .collect();
        let summary = summarize(&records);
        assert_eq!(summary.statuses.len(), 15);
    }

    #[test]
    fn test_months_sorted_ascending() {
        let records = vec![
            record(Some("2024-11-02"), None, None, None),
            record(Some("2024-01-15"), None, None, None),
            record(Some("2024-06-30"), None, None, None),
            record(Some("2024-01-20"), None, None, None),
        ];
        let summary = summarize(&records);
        assert_eq!(
            summary.monthly,
            vec![
                ("2024-01".to_string(), 2),
                ("2024-06".to_string(), 1),
                ("2024-11".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_ties_preserve_first_occurrence_order() {
        let records = vec![
            record(None, Some("Beta"), None, None),
            record(None, Some("Alpha"), None, None),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.root_causes[0].0, "Beta");
        assert_eq!(summary.root_causes[1].0, "Alpha");
    }

    #[test]
    fn test_empty_record_set() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.root_causes.is_empty());
        assert!(summary.monthly.is_empty());
        assert!(summary.firms.is_empty());
        assert!(summary.statuses.is_empty());
        assert!(summary.samples.is_empty());
    }

    #[test]
    fn test_single_firm_and_status() {
        let records: Vec<_> = (0..3)
            .map(|_| record(None, None, Some("Acme Devices"), Some("Ongoing")))
            .collect();
        let summary = summarize(&records);
        assert_eq!(summary.firms, vec![("Acme Devices".to_string(), 3)]);
        assert_eq!(summary.statuses, vec![("Ongoing".to_string(), 3)]);
    }

    #[test]
    fn test_idempotent() {
        let records = vec![
            record(Some("2024-02-10"), Some("Software"), Some("Acme"), Some("Ongoing")),
            record(Some("2024-03-01"), Some("Labeling"), Some("Beta Corp"), Some("Terminated")),
        ];
        assert_eq!(summarize(&records), summarize(&records));
    }

    #[test]
    fn test_malformed_date_yields_garbage_key_not_error() {
        let records = vec![record(Some("bogus"), None, None, None)];
        let summary = summarize(&records);
        assert_eq!(summary.monthly, vec![("bogus".to_string(), 1)]);
    }

    #[test]
    fn test_field_missing_everywhere_means_empty_table() {
        let records = vec![
            record(Some("2024-05-05"), None, None, Some("Completed")),
            record(Some("2024-05-06"), None, None, Some("Completed")),
        ];
        let summary = summarize(&records);
        assert!(summary.root_causes.is_empty());
        assert!(summary.firms.is_empty());
        assert_eq!(summary.statuses, vec![("Completed".to_string(), 2)]);
    }
}
