//! The fixed expense category set
//!
//! Categories form a closed enumeration; they are not user-extensible.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An expense category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Utilities,
    Entertainment,
    Transportation,
    Other,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Utilities,
        Category::Entertainment,
        Category::Transportation,
        Category::Other,
    ];

    /// The category name as a static string
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Transportation => "Transportation",
            Category::Other => "Other",
        }
    }

    /// The next category in display order, wrapping around
    pub fn next(&self) -> Category {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The previous category in display order, wrapping around
    pub fn prev(&self) -> Category {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "food" => Ok(Category::Food),
            "utilities" => Ok(Category::Utilities),
            "entertainment" => Ok(Category::Entertainment),
            "transportation" => Ok(Category::Transportation),
            "other" => Ok(Category::Other),
            _ => Err(CategoryParseError(s.to_string())),
        }
    }
}

/// Error type for category parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: {}", self.0)
    }
}

impl std::error::Error for CategoryParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_in_order() {
        assert_eq!(Category::ALL.len(), 5);
        assert_eq!(Category::ALL[0], Category::Food);
        assert_eq!(Category::ALL[4], Category::Other);
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::Transportation.to_string(), "Transportation");
    }

    #[test]
    fn test_parse() {
        assert_eq!("Food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" utilities ".parse::<Category>().unwrap(), Category::Utilities);
        assert!("Groceries".parse::<Category>().is_err());
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Category::Other.next(), Category::Food);
        assert_eq!(Category::Food.prev(), Category::Other);

        let mut c = Category::Food;
        for _ in 0..Category::ALL.len() {
            c = c.next();
        }
        assert_eq!(c, Category::Food);
    }
}
