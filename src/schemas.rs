//! Predefined column layouts for the testing forms.

/// Identification columns shared by every category
pub const COMMON_COLUMNS: [&str; 6] = [
    "timestamp",
    "testerName",
    "testerEmail",
    "testDate",
    "companion",
    "chapter",
];

/// Free-text feedback columns closing every category
pub const FEEDBACK_COLUMNS: [&str; 3] = ["workedWell", "needsImprovement", "bugs"];

/// Column layout of one category table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySchema {
    pub name: &'static str,
    /// Test ids; each expands to a `test_<id>` / `notes_<id>` column pair
    pub tests: &'static [&'static str],
}

pub const CATEGORIES: [CategorySchema; 5] = [
    CategorySchema {
        name: "General",
        tests: &["G1", "G2", "G3", "G4", "G5", "G6", "G7", "G8"],
    },
    CategorySchema {
        name: "Chapter 1",
        tests: &[
            "1E1", "1E2", "1E3", "1E4", "1E5", "1X1", "1X3", "1X4", "1T1", "1T2", "1T3",
        ],
    },
    CategorySchema {
        name: "Chapter 2",
        tests: &[
            "2E1", "2E3", "2E5", "2E7", "2T1", "2T1b", "2T3", "2X2", "2X3",
        ],
    },
    CategorySchema {
        name: "Chapter 3",
        tests: &["3E3", "3E6", "3E7", "3E8", "3T1", "3T2", "3T3", "3T4"],
    },
    CategorySchema {
        name: "Chapter 4",
        tests: &[
            "4E1", "4E4", "4E5", "4E7", "4E8", "4T1", "4T2", "4T4", "4X3", "4X4",
        ],
    },
];

impl CategorySchema {
    /// Full header row in display order
    pub fn columns(&self) -> Vec<String> {
        let common = COMMON_COLUMNS.iter().map(|c| c.to_string());
        let tests = self
            .tests
            .iter()
            .flat_map(|id| [format!("test_{id}"), format!("notes_{id}")]);
        let feedback = FEEDBACK_COLUMNS.iter().map(|c| c.to_string());

        common.chain(tests).chain(feedback).collect()
    }
}

/// Look up a predefined category by table name
pub fn find(name: &str) -> Option<&'static CategorySchema> {
    CATEGORIES.iter().find(|schema| schema.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_column_counts() {
        let counts: Vec<(&str, usize)> = CATEGORIES
            .iter()
            .map(|schema| (schema.name, schema.columns().len()))
            .collect();

        assert_eq!(
            counts,
            vec![
                ("General", 25),
                ("Chapter 1", 31),
                ("Chapter 2", 27),
                ("Chapter 3", 25),
                ("Chapter 4", 29),
            ]
        );
    }

    #[test]
    fn test_columns_layout() {
        let columns = find("Chapter 2").unwrap().columns();
        assert_eq!(&columns[..6], &COMMON_COLUMNS.map(String::from));
        assert_eq!(columns[6], "test_2E1");
        assert_eq!(columns[7], "notes_2E1");
        assert!(columns.contains(&"test_2T1b".to_string()));
        assert_eq!(columns.last().unwrap(), "bugs");
    }

    #[test]
    fn test_column_names_are_unique() {
        for schema in &CATEGORIES {
            let columns = schema.columns();
            let unique: HashSet<&String> = columns.iter().collect();
            assert_eq!(unique.len(), columns.len(), "{}", schema.name);
        }
    }

    #[test]
    fn test_find_unknown_category() {
        assert!(find("Chapter 9").is_none());
    }
}
