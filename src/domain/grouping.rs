// src/domain/grouping.rs
use crate::domain::category::Category;
use crate::domain::link::LinkRecord;
use itertools::Itertools;
use std::cmp::Reverse;

/// Minimum number of links (inclusive) a category needs to get its own
/// section. Everything below lands in the catch-all "other" bucket.
pub const MAJOR_CATEGORY_THRESHOLD: usize = 4;

/// Label for the catch-all bucket when none has been stored.
pub const DEFAULT_OTHER_LABEL: &str = "Other links";

/// A category that earned its own section, with its links in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub category: Category,
    pub links: Vec<LinkRecord>,
}

impl CategoryGroup {
    pub fn count(&self) -> usize {
        self.links.len()
    }
}

/// The grouped view of a collection: major categories ordered by
/// descending size, then the leftover links.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupedLinks {
    pub major: Vec<CategoryGroup>,
    pub other: Vec<LinkRecord>,
}

impl GroupedLinks {
    pub fn from_records(records: &[LinkRecord]) -> Self {
        let mut majors: Vec<(Category, usize)> = category_counts(records)
            .into_iter()
            .filter(|(_, count)| *count >= MAJOR_CATEGORY_THRESHOLD)
            .collect();
        // Stable sort: categories of equal size keep first-appearance order.
        majors.sort_by_key(|(_, count)| Reverse(*count));

        let major: Vec<CategoryGroup> = majors
            .into_iter()
            .map(|(category, _)| CategoryGroup {
                links: records
                    .iter()
                    .filter(|record| record.category == category)
                    .cloned()
                    .collect(),
                category,
            })
            .collect();

        let other = records
            .iter()
            .filter(|record| major.iter().all(|group| group.category != record.category))
            .cloned()
            .collect();

        Self { major, other }
    }

    pub fn is_empty(&self) -> bool {
        self.major.is_empty() && self.other.is_empty()
    }

    pub fn link_count(&self) -> usize {
        self.major.iter().map(CategoryGroup::count).sum::<usize>() + self.other.len()
    }
}

/// Occurrence counts per category, in order of first appearance.
pub fn category_counts(records: &[LinkRecord]) -> Vec<(Category, usize)> {
    records
        .iter()
        .map(|record| record.category.clone())
        .unique()
        .map(|category| {
            let count = records
                .iter()
                .filter(|record| record.category == category)
                .count();
            (category, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, category: &str, title: &str) -> LinkRecord {
        LinkRecord::new(id, Category::new(category), title, "https://example.com").unwrap()
    }

    fn records_of(specs: &[(&str, usize)]) -> Vec<LinkRecord> {
        let mut id = 0;
        let mut records = Vec::new();
        for (category, count) in specs {
            for i in 0..*count {
                id += 1;
                records.push(record(id, category, &format!("{}-{}", category, i)));
            }
        }
        records
    }

    #[test]
    fn given_no_records_when_group_then_empty() {
        let grouped = GroupedLinks::from_records(&[]);
        assert!(grouped.is_empty());
        assert_eq!(grouped.link_count(), 0);
    }

    #[test]
    fn given_four_links_in_category_when_group_then_category_is_major() {
        let grouped = GroupedLinks::from_records(&records_of(&[("x", 4), ("y", 2)]));

        assert_eq!(grouped.major.len(), 1);
        assert_eq!(grouped.major[0].category.as_str(), "x");
        assert_eq!(grouped.major[0].count(), 4);
        assert_eq!(grouped.other.len(), 2);
        assert!(grouped
            .other
            .iter()
            .all(|record| record.category.as_str() == "y"));
    }

    #[test]
    fn given_three_links_in_category_when_group_then_category_stays_other() {
        let grouped = GroupedLinks::from_records(&records_of(&[("x", 3)]));
        assert!(grouped.major.is_empty());
        assert_eq!(grouped.other.len(), 3);
    }

    #[test]
    fn given_major_categories_when_group_then_sorted_by_descending_count() {
        let grouped = GroupedLinks::from_records(&records_of(&[("small", 4), ("big", 6)]));

        let names: Vec<&str> = grouped
            .major
            .iter()
            .map(|group| group.category.as_str())
            .collect();
        assert_eq!(names, vec!["big", "small"]);
    }

    #[test]
    fn given_equal_counts_when_group_then_first_appearance_wins() {
        let grouped = GroupedLinks::from_records(&records_of(&[("b", 4), ("a", 4)]));

        let names: Vec<&str> = grouped
            .major
            .iter()
            .map(|group| group.category.as_str())
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn given_interleaved_insertions_when_group_then_group_keeps_insertion_order() {
        let records = vec![
            record(1, "x", "first"),
            record(2, "y", "noise"),
            record(3, "x", "second"),
            record(4, "x", "third"),
            record(5, "x", "fourth"),
        ];
        let grouped = GroupedLinks::from_records(&records);

        let titles: Vec<&str> = grouped.major[0]
            .links
            .iter()
            .map(|record| record.title.as_str())
            .collect();
        assert_eq!(titles, vec!["first", "second", "third", "fourth"]);
    }

    #[test]
    fn given_minor_categories_when_group_then_other_keeps_insertion_order() {
        let records = vec![
            record(1, "y", "one"),
            record(2, "z", "two"),
            record(3, "y", "three"),
        ];
        let grouped = GroupedLinks::from_records(&records);

        let titles: Vec<&str> = grouped
            .other
            .iter()
            .map(|record| record.title.as_str())
            .collect();
        assert_eq!(titles, vec!["one", "two", "three"]);
    }

    #[test]
    fn given_mixed_collection_when_link_count_then_totals_all_buckets() {
        let grouped = GroupedLinks::from_records(&records_of(&[("x", 5), ("y", 1), ("z", 2)]));
        assert_eq!(grouped.link_count(), 8);
    }

    #[test]
    fn given_records_when_category_counts_then_first_appearance_order() {
        let records = vec![
            record(1, "b", "one"),
            record(2, "a", "two"),
            record(3, "b", "three"),
        ];
        let counts = category_counts(&records);

        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].0.as_str(), "b");
        assert_eq!(counts[0].1, 2);
        assert_eq!(counts[1].0.as_str(), "a");
        assert_eq!(counts[1].1, 1);
    }

    #[test]
    fn given_uncategorized_links_when_group_then_sentinel_can_be_major() {
        let grouped = GroupedLinks::from_records(&records_of(&[("", 4)]));
        assert_eq!(grouped.major.len(), 1);
        assert!(grouped.major[0].category.is_uncategorized());
    }
}
