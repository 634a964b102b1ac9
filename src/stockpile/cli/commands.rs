//! # CLI Dispatch
//!
//! Parses arguments, wires up the [`AppContext`] and hands each subcommand to a
//! `handle_*` function. Handlers call the API, then print the rendered
//! `CmdResult`. Nothing here decides business rules; the only logic of its own
//! is terminal interaction: confirmation prompts, color detection and whether
//! a delete gets its pause.
//!
//! ## Output streams
//!
//! Tables, totals and messages go to stdout. Errors returned from `run()` are
//! printed by `main` to stderr with a non-zero exit code. That includes
//! validation failures from `add` and `edit`, so scripts can rely on the exit
//! status.

use super::logging::{init_logging, LogConfig};
use super::render::Renderer;
use super::setup::{Cli, Commands, DirArg, SortArg, ThemeArg};
use clap::Parser;
use console::Term;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use stockpile::api::{
    CmdMessage, CmdResult, ConfigAction, DeletePacing, ListOptions, StockpileApi, ThemeAction,
};
use stockpile::config::StockpileConfig;
use stockpile::error::{Result, StockpileError};
use stockpile::init::initialize;
use stockpile::model::ProductDraft;
use stockpile::store::fs::FileStore;
use stockpile::transfer::ImportPolicy;
use tracing::debug;

struct AppContext {
    api: StockpileApi<FileStore>,
    config: StockpileConfig,
    renderer: Renderer,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let log_config = LogConfig::from_verbosity(cli.verbose)
        .with_ansi(!cli.no_color && console::colors_enabled_stderr());
    init_logging(&log_config);

    let use_color = !cli.no_color && console::colors_enabled();
    let mut ctx = init_context(use_color)?;

    match cli.command {
        Some(Commands::List {
            search,
            category,
            sort,
            dir,
        }) => handle_list(&mut ctx, search, category, sort, dir),
        Some(Commands::Add {
            name,
            category,
            price,
            quantity,
        }) => handle_add(&mut ctx, ProductDraft::new(name, category, price, quantity)),
        Some(Commands::Edit { row, field, value }) => handle_edit(&mut ctx, &row, &field, &value),
        Some(Commands::Delete { rows, yes }) => handle_delete(&mut ctx, rows, yes),
        Some(Commands::Sort { key }) => handle_sort(&mut ctx, key),
        Some(Commands::Clear) => handle_clear(&mut ctx),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Categories) => handle_categories(&ctx),
        Some(Commands::Export { output, stdout }) => handle_export(&ctx, output, stdout),
        Some(Commands::Import { path, strict }) => handle_import(&mut ctx, path, strict),
        Some(Commands::Reset { yes }) => handle_reset(&mut ctx, yes),
        Some(Commands::Theme { mode }) => handle_theme(&mut ctx, mode),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&mut ctx, None, None, None, None),
    }
}

fn init_context(use_color: bool) -> Result<AppContext> {
    let ctx = initialize()?;
    let renderer = Renderer::new(ctx.api.current_theme(), use_color);

    Ok(AppContext {
        api: ctx.api,
        config: ctx.config,
        renderer,
        use_color,
    })
}

fn handle_list(
    ctx: &mut AppContext,
    search: Option<String>,
    category: Option<String>,
    sort: Option<SortArg>,
    dir: Option<DirArg>,
) -> Result<()> {
    let options = ListOptions {
        search,
        category,
        sort_by: sort.map(Into::into),
        sort_dir: dir.map(Into::into),
    };
    let result = ctx.api.list_products(options)?;
    print_listing(ctx, &result);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, draft: ProductDraft) -> Result<()> {
    let mut result = ctx.api.add_product(&draft)?;
    if let Some(errors) = result.field_errors.take() {
        return Err(StockpileError::Validation(errors));
    }
    print_messages(ctx, &result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, row: &str, field: &str, value: &str) -> Result<()> {
    let mut result = ctx.api.edit_product(row, field, value)?;
    if let Some(errors) = result.field_errors.take() {
        return Err(StockpileError::Validation(errors));
    }
    print_messages(ctx, &result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, rows: Vec<String>, yes: bool) -> Result<()> {
    if !yes {
        let preview = ctx.api.preview_products(&rows)?;
        print!("{}", ctx.renderer.product_summary(&preview.affected_products));
        let prompt = format!("Delete {} product(s)?", preview.affected_products.len());
        if !confirm(&prompt)? {
            println!("Aborted.");
            return Ok(());
        }
    }

    let pacing = delete_pacing(&ctx.config, yes);
    let result = ctx.api.delete_products(&rows, pacing)?;
    print_messages(ctx, &result.messages);
    Ok(())
}

/// The pause only makes sense when someone is watching the table.
fn delete_pacing(config: &StockpileConfig, yes: bool) -> DeletePacing {
    let delay = config.delete_delay();
    if yes || delay.is_zero() || !Term::stdout().is_term() {
        DeletePacing::Immediate
    } else {
        DeletePacing::Animated(delay)
    }
}

fn handle_sort(ctx: &mut AppContext, key: SortArg) -> Result<()> {
    let result = ctx.api.sort_by(key.into())?;
    print_listing(ctx, &result);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.clear_filters()?;
    print_listing(ctx, &result);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats()?;
    if let Some(stats) = &result.stats {
        print!("{}", ctx.renderer.stats(stats));
    }
    print_messages(ctx, &result.messages);
    Ok(())
}

fn handle_categories(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.categories()?;
    print!(
        "{}",
        ctx.renderer.text_list(&result.categories, "No categories.")
    );
    Ok(())
}

fn handle_export(ctx: &AppContext, output: Option<PathBuf>, stdout: bool) -> Result<()> {
    if stdout {
        let result = ctx.api.export_products(None)?;
        if let Some(json) = &result.exported {
            println!("{}", json);
        }
        return Ok(());
    }

    let path = output.unwrap_or_else(|| PathBuf::from(&ctx.config.export_file));
    let result = ctx.api.export_products(Some(&path))?;
    print_messages(ctx, &result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: PathBuf, strict: bool) -> Result<()> {
    let policy = if strict {
        ImportPolicy::Strict
    } else {
        ctx.config.import_policy
    };
    debug!(%policy, path = %path.display(), "importing");
    let result = ctx.api.import_products(&path, policy)?;
    print_messages(ctx, &result.messages);
    Ok(())
}

fn handle_reset(ctx: &mut AppContext, yes: bool) -> Result<()> {
    if !yes && !confirm("Replace the whole inventory with the sample products?")? {
        println!("Aborted.");
        return Ok(());
    }
    let result = ctx.api.reset_to_sample()?;
    print_messages(ctx, &result.messages);
    Ok(())
}

fn handle_theme(ctx: &mut AppContext, mode: Option<ThemeArg>) -> Result<()> {
    let action = match mode {
        None => ThemeAction::Show,
        Some(arg) => arg.mode().map_or(ThemeAction::Toggle, ThemeAction::Set),
    };
    let result = ctx.api.theme(action)?;
    if let Some(theme) = result.theme {
        ctx.renderer = Renderer::new(theme, ctx.use_color);
    }
    print_messages(ctx, &result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            let lines: Vec<String> = config
                .list_all()
                .into_iter()
                .map(|(k, v)| format!("{} = {}", k, v))
                .collect();
            print!("{}", ctx.renderer.text_list(&lines, ""));
        }
    }
    print_messages(ctx, &result.messages);
    Ok(())
}

fn print_listing(ctx: &AppContext, result: &CmdResult) {
    print!(
        "{}",
        ctx.renderer.product_table(
            &result.listed_products,
            result.view.as_ref(),
            result.total_products
        )
    );
    if let Some(stats) = &result.stats {
        if !result.listed_products.is_empty() {
            println!();
        }
        print!("{}", ctx.renderer.stats(stats));
    }
    print_messages(ctx, &result.messages);
}

fn print_messages(ctx: &AppContext, messages: &[CmdMessage]) {
    print!("{}", ctx.renderer.messages(messages));
}

/// Asks a yes/no question on stdin. Anything but `y`/`yes` is a no.
fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
