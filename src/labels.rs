//! Conversion between free-text label strings and label items.

use crate::models::LabelItem;

/// Separator accepted when parsing label text.
pub const LABEL_DELIMITER: char = ';';

/// Separator written between labels.
pub const LABEL_JOINER: &str = "; ";

/// Split raw label text into trimmed, non-empty items, preserving order.
pub fn parse_labels(raw: &str) -> Vec<LabelItem> {
    raw.split(LABEL_DELIMITER)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(LabelItem::new)
        .collect()
}

/// Join label texts into their canonical string form.
pub fn stringify_labels(labels: &[LabelItem]) -> String {
    labels
        .iter()
        .map(|label| label.text.as_str())
        .collect::<Vec<_>>()
        .join(LABEL_JOINER)
}
