use crate::model::Product;
use std::fmt;
use std::str::FromStr;

/// How a user points at a row.
///
/// A bare positive number is a 1-based position in the current (filtered and
/// sorted) view. Anything else is an id prefix; `id:` forces id lookup for
/// prefixes that happen to be all digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowSelector {
    Row(usize),
    Id(String),
}

impl fmt::Display for RowSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowSelector::Row(n) => write!(f, "{}", n),
            RowSelector::Id(prefix) => write!(f, "id:{}", prefix),
        }
    }
}

impl FromStr for RowSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(prefix) = s.strip_prefix("id:") {
            let prefix = prefix.trim();
            if prefix.is_empty() {
                return Err("Empty id".to_string());
            }
            return Ok(RowSelector::Id(prefix.to_string()));
        }
        if s.is_empty() {
            return Err("Empty row selector".to_string());
        }
        if s.chars().all(|c| c.is_ascii_digit()) {
            return match s.parse::<usize>() {
                Ok(0) => Err("Row numbers start at 1".to_string()),
                Ok(n) => Ok(RowSelector::Row(n)),
                Err(_) => Err(format!("Row number out of range: {}", s)),
            };
        }
        Ok(RowSelector::Id(s.to_string()))
    }
}

/// A product as listed, with its 1-based row number in that listing.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayProduct {
    pub index: usize,
    pub product: Product,
}

/// Numbers a view in display order.
pub fn index_products(view: &[&Product]) -> Vec<DisplayProduct> {
    view.iter()
        .enumerate()
        .map(|(i, p)| DisplayProduct {
            index: i + 1,
            product: (*p).clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_and_ids() {
        assert_eq!("3".parse::<RowSelector>().unwrap(), RowSelector::Row(3));
        assert_eq!(
            " a1b2 ".parse::<RowSelector>().unwrap(),
            RowSelector::Id("a1b2".into())
        );
        assert_eq!(
            "id:42".parse::<RowSelector>().unwrap(),
            RowSelector::Id("42".into())
        );
    }

    #[test]
    fn rejects_zero_and_empty() {
        assert!("0".parse::<RowSelector>().is_err());
        assert!("".parse::<RowSelector>().is_err());
        assert!("id:".parse::<RowSelector>().is_err());
    }

    #[test]
    fn indexes_are_one_based() {
        let a = Product::new("A", "Home", 1.0, 1);
        let b = Product::new("B", "Home", 1.0, 1);
        let listed = index_products(&[&b, &a]);
        assert_eq!(listed[0].index, 1);
        assert_eq!(listed[0].product.name, "B");
        assert_eq!(listed[1].index, 2);
    }
}
