use super::inline::InlineSpan;
use serde::{Deserialize, Serialize};

/// Table body of a BlockNote `table` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "tableContent", rename_all = "camelCase")]
pub struct TableContent {
    /// One entry per column; `None` means the editor picks the width.
    #[serde(default)]
    pub column_widths: Vec<Option<u32>>,
    #[serde(default)]
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableRow {
    /// Each cell is a list of spans; an empty cell is an empty list.
    #[serde(default)]
    pub cells: Vec<Vec<InlineSpan>>,
}

impl TableContent {
    /// An empty table with `width` unsized columns.
    pub fn with_width(width: usize) -> Self {
        Self {
            column_widths: vec![None; width],
            rows: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.column_widths.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_serializes_with_type_tag() {
        let mut table = TableContent::with_width(2);
        table.rows.push(TableRow {
            cells: vec![vec![], vec![]],
        });
        assert_eq!(
            serde_json::to_value(&table).unwrap(),
            json!({
                "type": "tableContent",
                "columnWidths": [null, null],
                "rows": [{"cells": [[], []]}]
            })
        );
    }

    #[test]
    fn test_reads_editor_widths() {
        let table: TableContent = serde_json::from_value(json!({
            "type": "tableContent",
            "columnWidths": [120, null, 80],
            "rows": []
        }))
        .unwrap();
        assert_eq!(table.width(), 3);
        assert_eq!(table.column_widths[0], Some(120));
    }
}
