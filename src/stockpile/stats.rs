use crate::model::Product;
use serde::Serialize;

/// Totals over the whole (unfiltered) collection.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Stats {
    pub total_items: i64,
    pub total_value: f64,
    pub low_stock_count: usize,
}

pub fn compute(products: &[Product]) -> Stats {
    Stats {
        total_items: products
            .iter()
            .fold(0i64, |total, p| total.saturating_add(p.quantity)),
        total_value: products.iter().map(Product::value).sum(),
        low_stock_count: products.iter().filter(|p| p.is_low_stock()).count(),
    }
}

/// Formats an amount as US dollars: `$1,234.56`, `-$3.00`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$—".to_string();
    }
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, group_thousands(cents / 100), cents % 100)
}

/// Formats an integer count with thousands separators.
pub fn format_count(n: i64) -> String {
    let sign = if n < 0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(n.unsigned_abs()))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
