//! Output templates, embedded at compile time.
//!
//! Templates are minijinja, rendered with `trim_blocks` and `lstrip_blocks` on,
//! so a line holding only a block tag produces no output of its own. Column
//! widths and number formatting are done in Rust before data reaches a
//! template; templates only pick styles and lay out lines.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const STATS_TEMPLATE: &str = include_str!("templates/stats.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");

pub const ALL: [(&str, &str); 4] = [
    ("list", LIST_TEMPLATE),
    ("stats", STATS_TEMPLATE),
    ("messages", MESSAGES_TEMPLATE),
    ("text_list", TEXT_LIST_TEMPLATE),
];
