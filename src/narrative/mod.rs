//! Renders the aggregates into the bounded text block embedded in the
//! generation prompt. Summarizing before sending keeps token usage low.

use crate::aggregate::{AggregateTable, RecallSummary};
use crate::utils::truncation::{truncate_description, MAX_DESCRIPTION_LENGTH};

/// One bounded, human-legible text block covering all four tables and the
/// description samples. Section headers are fixed.
pub fn format_data_summary(summary: &RecallSummary, year: i32) -> String {
    let mut out = String::new();
    out.push_str(&format!("FDA DEVICE RECALL DATA - {} SUMMARY\n", year));
    out.push_str("======================================\n");
    out.push_str(&format!("Total Recalls: {}\n", summary.total));

    out.push_str("\nTOP 10 ROOT CAUSES:\n");
    out.push_str(&format_table(&summary.root_causes));

    out.push_str("\nMONTHLY RECALL COUNTS:\n");
    out.push_str(&format_table(&summary.monthly));

    out.push_str("\nTOP 10 RECALLING FIRMS:\n");
    out.push_str(&format_table(&summary.firms));

    out.push_str("\nRECALL STATUS BREAKDOWN:\n");
    out.push_str(&format_table(&summary.statuses));

    out.push_str("\nSAMPLE PRODUCT DESCRIPTIONS (first 5):\n");
    for sample in &summary.samples {
        let line = match sample {
            Some(desc) => truncate_description(desc, MAX_DESCRIPTION_LENGTH),
            None => "N/A".to_string(),
        };
        out.push_str(&format!("- {}\n", line));
    }

    out
}

/// Aligned two-column listing: key padded to the widest entry, then the
/// count. No index decoration.
fn format_table(table: &AggregateTable) -> String {
    let width = table
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (key, count) in table {
        out.push_str(&format!("{:<width$}  {}\n", key, count, width = width));
    }
    out
}

/// Wrap the data summary in the fixed reporting instructions. The section
/// structure and length cap are requests to the model, not enforced here.
pub fn build_prompt(data_summary: &str, year: i32) -> String {
    format!(
        "You are a data analyst generating a brief executive report on FDA device recalls.\n\
         \n\
         Based on the following {year} FDA device recall data, generate a concise report with these sections:\n\
         \n\
         1. **Overview**: A 2-3 sentence summary of the overall recall landscape for {year}.\n\
         2. **Key Trends**: 3-5 bullet points identifying the most notable trends (monthly patterns, common root causes, frequent recalling firms).\n\
         3. **Top Concerns**: 2-3 bullet points highlighting the most significant root causes or product categories that warrant attention.\n\
         4. **Recommendations**: 2-3 bullet points suggesting actions for device manufacturers or regulators based on the data.\n\
         \n\
         Keep the total report under 300 words. Use clear, professional language suitable for a regulatory audience.\n\
         \n\
         DATA:\n\
         {data_summary}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_summary() -> RecallSummary {
        RecallSummary {
            total: 0,
            root_causes: vec![],
            monthly: vec![],
            firms: vec![],
            statuses: vec![],
            samples: vec![],
        }
    }

    #[test]
    fn test_empty_summary_still_well_formed() {
        let text = format_data_summary(&empty_summary(), 2024);
        assert!(text.contains("Total Recalls: 0"));
        assert!(text.contains("TOP 10 ROOT CAUSES:"));
        assert!(text.contains("MONTHLY RECALL COUNTS:"));
        assert!(text.contains("TOP 10 RECALLING FIRMS:"));
        assert!(text.contains("RECALL STATUS BREAKDOWN:"));
        assert!(text.contains("SAMPLE PRODUCT DESCRIPTIONS (first 5):"));
    }

    #[test]
    fn test_table_alignment() {
        let table = vec![
            ("Software".to_string(), 12),
            ("Labeling mix-up".to_string(), 3),
        ];
        let rendered = format_table(&table);
        assert_eq!(rendered, "Software         12\nLabeling mix-up  3\n");
    }

    #[test]
    fn test_missing_sample_renders_na() {
        let mut summary = empty_summary();
        summary.samples = vec![None, Some("Syringe".to_string())];
        let text = format_data_summary(&summary, 2024);
        assert!(text.contains("- N/A\n"));
        assert!(text.contains("- Syringe\n"));
    }

    #[test]
    fn test_long_sample_truncated_in_render() {
        let mut summary = empty_summary();
        summary.samples = vec![Some("d".repeat(450))];
        let text = format_data_summary(&summary, 2024);
        let bullet = text
            .lines()
            .find(|l| l.starts_with("- d"))
            .unwrap();
        // "- " prefix plus 200 chars plus the ellipsis marker
        assert_eq!(bullet.chars().count(), 2 + 203);
        assert!(bullet.ends_with("..."));
    }

    #[test]
    fn test_prompt_embeds_summary_verbatim() {
        let data = format_data_summary(&empty_summary(), 2024);
        let prompt = build_prompt(&data, 2024);
        assert!(prompt.contains(&data));
        assert!(prompt.contains("**Overview**"));
        assert!(prompt.contains("under 300 words"));
    }
}
