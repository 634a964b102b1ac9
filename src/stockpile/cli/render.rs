//! # Rendering
//!
//! Turns `CmdResult` data into terminal text. Layout (column widths, alignment,
//! truncation, currency formatting) is computed here because it needs
//! Unicode-aware width math; the templates in `templates/` only apply styles
//! through the `style` filter and join the pieces.

use super::styles::{names, palette, Palette};
use super::templates;
use minijinja::{Environment, Value};
use serde::Serialize;
use stockpile::api::{CmdMessage, MessageLevel};
use stockpile::index::DisplayProduct;
use stockpile::model::Product;
use stockpile::stats::{format_count, format_currency, Stats};
use stockpile::theme::ThemeMode;
use stockpile::view::{SortDir, SortKey, ViewState, ALL_CATEGORIES};
use tracing::warn;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Longest product name shown before truncation.
pub const NAME_MAX_WIDTH: usize = 32;
pub const CATEGORY_MAX_WIDTH: usize = 16;
const COLUMN_GAP: &str = "  ";

#[derive(Serialize)]
struct RowData {
    index: String,
    name: String,
    category: String,
    price: String,
    quantity: String,
    value: String,
    id: String,
    low_stock: bool,
}

#[derive(Serialize)]
struct ListData {
    caption: Option<String>,
    header: String,
    rows: Vec<RowData>,
}

#[derive(Serialize)]
struct StatsData {
    total_items: String,
    total_value: String,
    low_stock: String,
    has_low_stock: bool,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(mode: ThemeMode, use_color: bool) -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        register_style_filter(&mut env, palette(mode), use_color);

        for (name, source) in templates::ALL {
            if let Err(e) = env.add_template(name, source) {
                warn!(template = name, error = %e, "template failed to compile");
            }
        }
        Self { env }
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> String {
        self.env
            .get_template(name)
            .and_then(|tmpl| tmpl.render(data))
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }

    /// The product table for a view, with a caption when filters hide rows.
    pub fn product_table(
        &self,
        rows: &[DisplayProduct],
        view: Option<&ViewState>,
        total: usize,
    ) -> String {
        let caption = view
            .filter(|v| v.is_filtered())
            .map(|v| view_caption(v, rows.len(), total));
        let (header, rows) = layout_rows(rows, view);
        self.render(
            "list",
            &ListData {
                caption,
                header,
                rows,
            },
        )
    }

    pub fn stats(&self, stats: &Stats) -> String {
        self.render(
            "stats",
            &StatsData {
                total_items: format_count(stats.total_items),
                total_value: format_currency(stats.total_value),
                low_stock: format_count(stats.low_stock_count as i64),
                has_low_stock: stats.low_stock_count > 0,
            },
        )
    }

    pub fn messages(&self, messages: &[CmdMessage]) -> String {
        if messages.is_empty() {
            return String::new();
        }
        let data = MessagesData {
            messages: messages
                .iter()
                .map(|m| MessageData {
                    content: m.content.clone(),
                    style: message_style(m.level),
                })
                .collect(),
        };
        self.render("messages", &data)
    }

    pub fn text_list(&self, lines: &[String], empty_message: &str) -> String {
        self.render(
            "text_list",
            &TextListData {
                lines: lines.to_vec(),
                empty_message: empty_message.to_string(),
            },
        )
    }

    /// Short listing of products about to be changed, for confirmation prompts.
    pub fn product_summary(&self, products: &[Product]) -> String {
        let lines: Vec<String> = products
            .iter()
            .map(|p| {
                format!(
                    "  {} ({}, {} in stock)",
                    truncate_to_width(&p.name, NAME_MAX_WIDTH),
                    p.category,
                    format_count(p.quantity)
                )
            })
            .collect();
        self.text_list(&lines, "Nothing selected.")
    }
}

fn message_style(level: MessageLevel) -> &'static str {
    match level {
        MessageLevel::Info => names::INFO,
        MessageLevel::Success => names::SUCCESS,
        MessageLevel::Warning => names::WARNING,
        MessageLevel::Error => names::ERROR,
    }
}

/// Registers the `style` filter on a minijinja environment.
fn register_style_filter(env: &mut Environment<'static>, palette: &'static Palette, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        palette.apply(&name, &value.to_string(), use_color)
    });
}

fn view_caption(view: &ViewState, shown: usize, total: usize) -> String {
    let mut parts = vec![format!("Showing {} of {} products", shown, total)];
    let search = view.search.trim();
    if !search.is_empty() {
        parts.push(format!("search \"{}\"", search));
    }
    if view.filter_category != ALL_CATEGORIES {
        parts.push(format!("category {}", view.filter_category));
    }
    parts.join(" · ")
}

const HEADERS: [&str; 7] = ["#", "Name", "Category", "Price", "Qty", "Value", "Id"];
const RIGHT_ALIGNED: [bool; 7] = [true, false, false, true, true, true, false];

fn layout_rows(rows: &[DisplayProduct], view: Option<&ViewState>) -> (String, Vec<RowData>) {
    let mut headers: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    if let Some(view) = view {
        let arrow = match view.sort_dir {
            SortDir::Asc => "▲",
            SortDir::Desc => "▼",
        };
        let col = match view.sort_by {
            SortKey::Name => 1,
            SortKey::Price => 3,
        };
        headers[col] = format!("{} {}", headers[col], arrow);
    }

    let cells: Vec<[String; 7]> = rows
        .iter()
        .map(|dp| {
            let p = &dp.product;
            [
                format!("{}.", dp.index),
                truncate_to_width(&p.name, NAME_MAX_WIDTH),
                truncate_to_width(&p.category, CATEGORY_MAX_WIDTH),
                format_currency(p.price),
                format_count(p.quantity),
                format_currency(p.value()),
                p.id.short().to_string(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.width());
        }
    }

    let header = headers
        .iter()
        .enumerate()
        .map(|(i, h)| pad(h, widths[i], RIGHT_ALIGNED[i]))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);

    let data = cells
        .into_iter()
        .zip(rows)
        .map(|(row, dp)| {
            let [index, name, category, price, quantity, value, id] = row;
            RowData {
                index: pad(&index, widths[0], RIGHT_ALIGNED[0]),
                name: pad(&name, widths[1], RIGHT_ALIGNED[1]),
                category: pad(&category, widths[2], RIGHT_ALIGNED[2]),
                price: pad(&price, widths[3], RIGHT_ALIGNED[3]),
                quantity: pad(&quantity, widths[4], RIGHT_ALIGNED[4]),
                value: pad(&value, widths[5], RIGHT_ALIGNED[5]),
                id,
                low_stock: dp.product.is_low_stock(),
            }
        })
        .collect();

    (header, data)
}

fn pad(text: &str, width: usize, right: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(text.width()));
    if right {
        format!("{}{}", fill, text)
    } else {
        format!("{}{}", text, fill)
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
