//! Ranked-list formatter.

use tweetime_models::{Panel, QuotedBlock, RankedGroups};

use crate::error::{PageError, Result};

/// Turns ranked groups into one panel per category, in stored order.
///
/// Each entry becomes a quoted block. Nothing is reordered, truncated or
/// deduplicated.
///
/// # Errors
/// `InvalidInput` if any category has no entries.
pub fn format_ranked_groups(groups: &RankedGroups) -> Result<Vec<Panel>> {
    groups
        .iter()
        .map(|(label, entries)| {
            if entries.is_empty() {
                return Err(PageError::InvalidInput(format!(
                    "category {:?} has no entries",
                    label
                )));
            }
            Ok(Panel {
                title: label.to_string(),
                entries: entries.iter().map(QuotedBlock::new).collect(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_order() {
        let groups: RankedGroups = vec![("A", vec!["x", "y"]), ("B", vec!["z"])]
            .into_iter()
            .collect();

        let panels = format_ranked_groups(&groups).unwrap();

        assert_eq!(panels.len(), 2);
        assert_eq!(panels[0].title, "A");
        assert_eq!(panels[0].entry_texts(), vec!["x", "y"]);
        assert_eq!(panels[1].title, "B");
        assert_eq!(panels[1].entry_texts(), vec!["z"]);
    }

    #[test]
    fn test_entries_are_quoted() {
        let groups: RankedGroups = vec![("A", vec!["first"])].into_iter().collect();

        let panels = format_ranked_groups(&groups).unwrap();
        assert_eq!(panels[0].entries[0].to_markdown(), "> first");
    }

    #[test]
    fn test_duplicates_kept() {
        let groups: RankedGroups = vec![("A", vec!["same", "same"])].into_iter().collect();

        let panels = format_ranked_groups(&groups).unwrap();
        assert_eq!(panels[0].entries.len(), 2);
    }

    #[test]
    fn test_empty_category_rejected() {
        let groups: RankedGroups = vec![("A", vec!["x".to_string()]), ("B", Vec::new())]
            .into_iter()
            .collect();

        let err = format_ranked_groups(&groups).unwrap_err();
        assert!(matches!(err, PageError::InvalidInput(_)));
        assert!(err.to_string().contains("\"B\""));
    }

    #[test]
    fn test_no_categories() {
        let panels = format_ranked_groups(&RankedGroups::new()).unwrap();
        assert!(panels.is_empty());
    }
}
