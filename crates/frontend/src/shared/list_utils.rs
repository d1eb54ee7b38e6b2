/// List utilities shared by the table screens (sorting, header indicators)
use std::cmp::Ordering;

/// Trait for row types that support column sorting
pub trait Sortable {
    /// Compare two rows by the named field
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort a list by the named field
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Arrow shown in the active sort column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            "▲"
        } else {
            "▼"
        }
    } else {
        ""
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "sort-indicator sort-indicator--active"
    } else {
        "sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(i32);

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "value" => self.0.cmp(&other.0),
                _ => Ordering::Equal,
            }
        }
    }

    #[test]
    fn sorts_both_directions() {
        let mut rows = vec![Row(3), Row(1), Row(2)];
        sort_list(&mut rows, "value", true);
        assert_eq!(rows.iter().map(|r| r.0).collect::<Vec<_>>(), vec![1, 2, 3]);
        sort_list(&mut rows, "value", false);
        assert_eq!(rows.iter().map(|r| r.0).collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn indicator_only_on_active_field() {
        assert_eq!(get_sort_indicator("name", "name", true), "▲");
        assert_eq!(get_sort_indicator("name", "name", false), "▼");
        assert_eq!(get_sort_indicator("name", "city", true), "");
    }
}
