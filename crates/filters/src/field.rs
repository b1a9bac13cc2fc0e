//! The fixed set of fields a constraint can target.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Filterable catalog fields.
///
/// The variant order is the declaration order used whenever constraints are
/// listed or applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FilterField {
    ShowId,
    Title,
    Director,
    Cast,
    Country,
    Rating,
    ReleaseYear,
}

/// How a constraint for a field is built from user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, matched as a case-insensitive substring
    Substring { prompt: &'static str },
    /// One value picked from the distinct values observed in the table
    Choice,
    /// Operator and number compared against the numeric cell
    Comparison,
}

impl FilterField {
    pub const ALL: [FilterField; 7] = [
        FilterField::ShowId,
        FilterField::Title,
        FilterField::Director,
        FilterField::Cast,
        FilterField::Country,
        FilterField::Rating,
        FilterField::ReleaseYear,
    ];

    /// Column name in the catalog file
    pub fn column(&self) -> &'static str {
        match self {
            FilterField::ShowId => "show_id",
            FilterField::Title => "title",
            FilterField::Director => "director",
            FilterField::Cast => "cast",
            FilterField::Country => "country",
            FilterField::Rating => "rating",
            FilterField::ReleaseYear => "release_year",
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            FilterField::ShowId => "Show id",
            FilterField::Title => "Title",
            FilterField::Director => "Director",
            FilterField::Cast => "Cast",
            FilterField::Country => "Country",
            FilterField::Rating => "Rating",
            FilterField::ReleaseYear => "Release year",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FilterField::ShowId => FieldKind::Substring {
                prompt: "Enter id of the show",
            },
            FilterField::Title => FieldKind::Substring {
                prompt: "Enter title",
            },
            FilterField::Director => FieldKind::Substring {
                prompt: "Enter director's name",
            },
            FilterField::Cast => FieldKind::Substring {
                prompt: "Enter actor's name",
            },
            FilterField::Country => FieldKind::Substring {
                prompt: "Enter country",
            },
            FilterField::Rating => FieldKind::Choice,
            FilterField::ReleaseYear => FieldKind::Comparison,
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order() {
        let mut shuffled = vec![
            FilterField::ReleaseYear,
            FilterField::ShowId,
            FilterField::Rating,
            FilterField::Title,
        ];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![
                FilterField::ShowId,
                FilterField::Title,
                FilterField::Rating,
                FilterField::ReleaseYear,
            ]
        );
    }

    #[test]
    fn test_display_is_column_name() {
        for field in FilterField::ALL {
            assert_eq!(field.to_string(), field.column());
        }
        assert_eq!(FilterField::ReleaseYear.to_string(), "release_year");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(FilterField::Rating.kind(), FieldKind::Choice);
        assert_eq!(FilterField::ReleaseYear.kind(), FieldKind::Comparison);
        assert!(matches!(FilterField::Cast.kind(), FieldKind::Substring { .. }));
    }
}
