use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape drawn by the generator for one object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Letters only, 1–20 characters
    Alphabetical,
    /// Signed decimal integer within ±10000
    Integer,
    /// Signed real within ±10000 with six fractional digits
    RealNumber,
    /// Letters and digits, 1–20 characters, padded with 0–10 spaces each side
    AlphanumericWithSpaces,
}

impl Variant {
    /// Order matches the generator's 4-way selector
    pub const ALL: [Variant; 4] = [
        Variant::Alphabetical,
        Variant::RealNumber,
        Variant::Integer,
        Variant::AlphanumericWithSpaces,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Alphabetical => "Alphabetical",
            Variant::Integer => "Integer",
            Variant::RealNumber => "Real Number",
            Variant::AlphanumericWithSpaces => "Alphanumeric with spaces",
        }
    }

    /// Category a well-formed object of this variant is classified as
    pub fn category(&self) -> Category {
        match self {
            Variant::Alphabetical => Category::AlphabeticalString,
            Variant::Integer => Category::Integer,
            Variant::RealNumber => Category::RealNumber,
            Variant::AlphanumericWithSpaces => Category::Alphanumeric,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification outcome, listed in rule priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Integer,
    RealNumber,
    AlphabeticalString,
    Alphanumeric,
    Unknown,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Integer,
        Category::RealNumber,
        Category::AlphabeticalString,
        Category::Alphanumeric,
        Category::Unknown,
    ];

    /// Label used in record lines and summaries
    pub fn label(&self) -> &'static str {
        match self {
            Category::Integer => "Integer",
            Category::RealNumber => "Real Number",
            Category::AlphabeticalString => "Alphabetical String",
            Category::Alphanumeric => "Alphanumeric",
            Category::Unknown => "Unknown",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One classified object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    /// Substring exactly as it appeared between separators
    pub raw: String,
    /// Whitespace-trimmed value
    pub value: String,
    pub category: Category,
}

impl ClassificationRecord {
    pub fn new(raw: &str, category: Category) -> Self {
        Self {
            raw: raw.to_string(),
            value: raw.trim().to_string(),
            category,
        }
    }
}

impl fmt::Display for ClassificationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Object: {}, Type: {}", self.value, self.category.label())
    }
}

/// Occurrences per category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    counts: [usize; 5],
}

impl CategoryCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, category: Category) {
        self.counts[category.index()] += 1;
    }

    pub fn get(&self, category: Category) -> usize {
        self.counts[category.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Share of the total in percent; 0.0 when nothing was counted
    pub fn percentage(&self, category: Category) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.get(category) as f64 * 100.0 / total as f64
        }
    }

    /// (category, count) pairs in priority order, zero counts included
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL.iter().map(move |c| (*c, self.get(*c)))
    }
}

impl Serialize for CategoryCounts {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(Category::ALL.len()))?;
        for (category, count) in self.iter() {
            map.serialize_entry(category.label(), &count)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_trims_value() {
        let record = ClassificationRecord::new("  ab12 ", Category::Alphanumeric);
        assert_eq!(record.raw, "  ab12 ");
        assert_eq!(record.value, "ab12");
        assert_eq!(record.to_string(), "Object: ab12, Type: Alphanumeric");
    }

    #[test]
    fn test_counts_total_and_percentage() {
        let mut counts = CategoryCounts::new();
        counts.record(Category::Integer);
        counts.record(Category::Integer);
        counts.record(Category::Unknown);
        counts.record(Category::RealNumber);

        assert_eq!(counts.total(), 4);
        assert_eq!(counts.get(Category::Integer), 2);
        assert_eq!(counts.get(Category::Alphanumeric), 0);
        assert!((counts.percentage(Category::Integer) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_counts_have_zero_percentage() {
        let counts = CategoryCounts::new();
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.percentage(Category::Unknown), 0.0);
    }

    #[test]
    fn test_counts_iterate_in_priority_order() {
        let labels: Vec<&str> = CategoryCounts::new()
            .iter()
            .map(|(c, _)| c.label())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Integer",
                "Real Number",
                "Alphabetical String",
                "Alphanumeric",
                "Unknown"
            ]
        );
    }

    #[test]
    fn test_counts_serialize_by_label() {
        let mut counts = CategoryCounts::new();
        counts.record(Category::AlphabeticalString);

        let json = serde_json::to_string(&counts).unwrap();
        assert!(json.contains("\"Alphabetical String\":1"));
        assert!(json.contains("\"Unknown\":0"));
    }

    #[test]
    fn test_variant_categories() {
        assert_eq!(Variant::Integer.category(), Category::Integer);
        assert_eq!(
            Variant::AlphanumericWithSpaces.category(),
            Category::Alphanumeric
        );
    }
}
