//! Column layout for the user table.

use ratatui::layout::Constraint;

use crate::api::UserRecord;

/// A display column: a header label plus a cell accessor.
///
/// The column set is fixed at startup and not user-editable.
pub struct ColumnSpec {
    /// Header label.
    pub label: &'static str,
    /// Layout width for the column.
    pub width: Constraint,
    /// Extracts the cell text from a record.
    accessor: fn(&UserRecord) -> String,
}

impl ColumnSpec {
    /// Cell text for one record.
    pub fn cell(&self, record: &UserRecord) -> String {
        (self.accessor)(record)
    }
}

/// The five fixed columns of the user table.
pub const COLUMNS: [ColumnSpec; 5] = [
    ColumnSpec {
        label: "ID",
        width: Constraint::Length(6),
        accessor: |r| r.id.to_string(),
    },
    ColumnSpec {
        label: "First name",
        width: Constraint::Min(12),
        accessor: |r| r.first_name.clone(),
    },
    ColumnSpec {
        label: "Email",
        width: Constraint::Min(24),
        accessor: |r| r.email.clone(),
    },
    ColumnSpec {
        label: "Phone",
        width: Constraint::Min(14),
        accessor: |r| r.phone_number.clone(),
    },
    ColumnSpec {
        label: "UID",
        width: Constraint::Min(36),
        accessor: |r| r.uid.clone(),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> UserRecord {
        UserRecord {
            id: 7,
            first_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone_number: "555-0100".to_string(),
            uid: "u-7".to_string(),
        }
    }

    #[test]
    fn test_five_columns() {
        assert_eq!(COLUMNS.len(), 5);
        let labels: Vec<&str> = COLUMNS.iter().map(|c| c.label).collect();
        assert_eq!(labels, ["ID", "First name", "Email", "Phone", "UID"]);
    }

    #[test]
    fn test_accessors_extract_record_fields() {
        let r = record();
        let cells: Vec<String> = COLUMNS.iter().map(|c| c.cell(&r)).collect();
        assert_eq!(cells, ["7", "Ada", "ada@example.com", "555-0100", "u-7"]);
    }

    #[test]
    fn test_defaulted_record_renders_empty_cells() {
        let r = UserRecord::default();
        // Text fields render empty rather than erroring.
        assert_eq!(COLUMNS[1].cell(&r), "");
        assert_eq!(COLUMNS[2].cell(&r), "");
        assert_eq!(COLUMNS[4].cell(&r), "");
    }
}
