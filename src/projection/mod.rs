//! Client-side table projection: sort, filter, and column visibility.
//!
//! A projection is a non-persistent view transformation over the current
//! page's records. It never mutates the page; hidden columns stay in the
//! data model, and the (filtered, sorted) row set is recomputed on demand.
//!
//! Pagination is server-driven: the projection does no paging of its own.
//! The total page count is derived from the server's declared record count
//! and the *fixed* page size carried in configuration, so a short last page
//! does not corrupt the total.

use crate::models::Person;

/// The table's columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Height,
    Name,
    Mass,
    Gender,
    HairColor,
}

impl Column {
    /// All columns in display order.
    pub const ALL: [Column; 5] = [
        Column::Height,
        Column::Name,
        Column::Mass,
        Column::Gender,
        Column::HairColor,
    ];

    /// Header title for this column.
    pub fn title(&self) -> &'static str {
        match self {
            Column::Height => "Height",
            Column::Name => "Name",
            Column::Mass => "Mass",
            Column::Gender => "Gender",
            Column::HairColor => "Hair Color",
        }
    }

    /// Cell value for this column from a person record.
    pub fn value<'a>(&self, person: &'a Person) -> &'a str {
        match self {
            Column::Height => &person.height,
            Column::Name => &person.name,
            Column::Mass => &person.mass,
            Column::Gender => &person.gender,
            Column::HairColor => &person.hair_color,
        }
    }

    /// Only Name is sortable, matching the upstream table.
    pub fn sortable(&self) -> bool {
        matches!(self, Column::Name)
    }

    fn index(&self) -> usize {
        Column::ALL.iter().position(|c| c == self).unwrap_or(0)
    }
}

/// Sort direction for the active sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Sort, filter, and column-visibility state over the current page.
#[derive(Debug, Clone)]
pub struct Projection {
    /// Active sort on the Name column, if any
    pub sort: Option<SortDirection>,
    /// Free-text filter bound to the `name` field (case-insensitive substring)
    pub filter: String,
    visible: [bool; Column::ALL.len()],
}

impl Projection {
    /// A projection with no sort, no filter, and every column visible.
    pub fn new() -> Self {
        Self {
            sort: None,
            filter: String::new(),
            visible: [true; Column::ALL.len()],
        }
    }

    /// Cycle the Name sort: none -> ascending -> descending -> none.
    pub fn toggle_sort(&mut self) {
        self.sort = match self.sort {
            None => Some(SortDirection::Ascending),
            Some(SortDirection::Ascending) => Some(SortDirection::Descending),
            Some(SortDirection::Descending) => None,
        };
    }

    /// Toggle a column's visibility.
    pub fn toggle_column(&mut self, column: Column) {
        let i = column.index();
        self.visible[i] = !self.visible[i];
    }

    /// Whether a column is currently visible.
    pub fn is_visible(&self, column: Column) -> bool {
        self.visible[column.index()]
    }

    /// The visible columns, in display order.
    pub fn visible_columns(&self) -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(|c| self.is_visible(*c))
            .collect()
    }

    /// Project a page's records through the filter and sort.
    ///
    /// Returns references in render order; the underlying slice is untouched.
    pub fn project<'a>(&self, people: &'a [Person]) -> Vec<&'a Person> {
        let needle = self.filter.to_lowercase();
        let mut rows: Vec<&Person> = people
            .iter()
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
            .collect();

        match self.sort {
            Some(SortDirection::Ascending) => rows.sort_by(|a, b| a.name.cmp(&b.name)),
            Some(SortDirection::Descending) => rows.sort_by(|a, b| b.name.cmp(&a.name)),
            None => {}
        }

        rows
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new()
    }
}

/// Total number of pages given the server's record count and the fixed
/// page size. Zero records means zero pages.
pub fn page_count(count: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str) -> Person {
        Person {
            name: name.to_string(),
            ..Person::default()
        }
    }

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(page_count(82, 10), 9);
        assert_eq!(page_count(80, 10), 8);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(82, 0), 0);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let people = vec![person("Luke Skywalker"), person("Leia Organa"), person("C-3PO")];
        let mut projection = Projection::new();
        projection.filter = "SKY".to_string();

        let rows = projection.project(&people);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Luke Skywalker");
    }

    #[test]
    fn test_filter_with_no_match_yields_no_rows() {
        let people = vec![person("Luke Skywalker")];
        let mut projection = Projection::new();
        projection.filter = "vader".to_string();

        assert!(projection.project(&people).is_empty());
    }

    #[test]
    fn test_sort_cycle_restores_server_order() {
        let people = vec![person("Owen Lars"), person("Beru Lars"), person("R5-D4")];
        let mut projection = Projection::new();

        projection.toggle_sort();
        let asc: Vec<&str> = projection.project(&people).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(asc, vec!["Beru Lars", "Owen Lars", "R5-D4"]);

        projection.toggle_sort();
        let desc: Vec<&str> = projection.project(&people).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(desc, vec!["R5-D4", "Owen Lars", "Beru Lars"]);

        projection.toggle_sort();
        assert_eq!(projection.sort, None);
        let original: Vec<&str> =
            projection.project(&people).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(original, vec!["Owen Lars", "Beru Lars", "R5-D4"]);
    }

    #[test]
    fn test_toggle_column_hides_and_restores() {
        let mut projection = Projection::new();
        assert_eq!(projection.visible_columns().len(), Column::ALL.len());

        projection.toggle_column(Column::Mass);
        assert!(!projection.is_visible(Column::Mass));
        assert!(!projection.visible_columns().contains(&Column::Mass));

        projection.toggle_column(Column::Mass);
        assert!(projection.is_visible(Column::Mass));
    }

    #[test]
    fn test_only_name_is_sortable() {
        assert!(Column::Name.sortable());
        assert!(!Column::Height.sortable());
        assert!(!Column::HairColor.sortable());
    }
}
