//! # CLI Layer
//!
//! One possible client of the stockpad library, and the only place that touches the
//! terminal, parses arguments or picks an exit code.
//!
//! ## Structure
//!
//! - `run()`: parse arguments, set up logging, dispatch
//! - `init_context()`: resolve the data directory and scope, load config, build the API
//! - `open_catalog()`: bootstrap the data directory and load the catalog
//! - `handle_*()`: one handler per subcommand; mutating handlers save before returning
//! - the interactive menu lives in `menu.rs`, rendering in `render.rs`

use super::menu::{run_menu, MenuExit, MenuIo};
use super::render::{print_messages, print_products};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use std::io;
use std::path::PathBuf;
use stockpad::api::{ConfigAction, MessageLevel, NewProduct, StockApi, StockPaths};
use stockpad::commands::helpers::parse_quantity;
use stockpad::config::StockConfig;
use stockpad::error::{Result, StockError};
use stockpad::model::Scope;
use stockpad::store::fs::FileStore;

const DEFAULT_DATA_DIR: &str = "data";

struct AppContext {
    api: StockApi<FileStore>,
    scope: Scope,
    config: StockConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        // These two never read the catalog
        Some(Commands::Init) => handle_init(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        command => {
            open_catalog(&mut ctx)?;
            match command {
                Some(Commands::List) => handle_list(&ctx),
                Some(Commands::Add {
                    name,
                    category,
                    price,
                    quantity,
                }) => handle_add(&mut ctx, &name, &category, &price, &quantity),
                Some(Commands::Update { id, quantity }) => handle_update(&mut ctx, id, &quantity),
                Some(Commands::Delete { id, yes }) => handle_delete(&mut ctx, id, yes),
                Some(Commands::Search { keyword }) => handle_search(&ctx, &keyword),
                Some(Commands::Sort { criterion }) => handle_sort(&mut ctx, &criterion),
                Some(Commands::Filter { min, max }) => handle_filter(&ctx, min, max),
                _ => handle_menu(&mut ctx),
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let global = ProjectDirs::from("com", "stockpad", "stockpad")
        .map(|dirs| dirs.data_dir().to_path_buf());
    let local = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
    let paths = StockPaths { local, global };

    // An explicit data dir wins over --global
    let scope = if cli.global && cli.data_dir.is_none() {
        Scope::Global
    } else {
        Scope::Local
    };

    let dir = paths.scope_dir(scope)?;
    let config = StockConfig::load(&dir)?;
    let store = FileStore::new(config.catalog_path(&dir));
    tracing::debug!(catalog = %store.path().display(), ?scope, "using catalog");

    Ok(AppContext {
        api: StockApi::new(store, paths),
        scope,
        config,
    })
}

/// Bootstraps the data directory, then reads the catalog into the session.
fn open_catalog(ctx: &mut AppContext) -> Result<()> {
    let bootstrap = ctx.api.init(ctx.scope)?;
    if bootstrap.has_level(MessageLevel::Success) {
        print_messages(&bootstrap.messages)?;
    }

    let loaded = ctx.api.load()?;
    print_messages(&loaded.messages)?;
    Ok(())
}

fn handle_menu(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let mut port = MenuIo::new(stdin.lock(), io::stdout().lock());
    match run_menu(&mut ctx.api, &mut port, &ctx.config.currency)? {
        MenuExit::Saved => tracing::debug!(scope = ?ctx.scope, "menu exited after save"),
        MenuExit::InputClosed => tracing::debug!(scope = ?ctx.scope, "menu input closed"),
    }
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list();
    if !result.listed_products.is_empty() {
        print_products(&result.listed_products, &ctx.config.currency)?;
    }
    print_messages(&result.messages)?;
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    name: &str,
    category: &str,
    price: &str,
    quantity: &str,
) -> Result<()> {
    let new = NewProduct::parse(name, category, price, quantity)?;
    let result = ctx.api.add_product(new)?;
    ctx.api.save()?;
    print_messages(&result.messages)?;
    Ok(())
}

fn handle_update(ctx: &mut AppContext, id: u32, quantity: &str) -> Result<()> {
    let quantity = parse_quantity(quantity)?;
    let result = ctx.api.update_quantity(id, quantity)?;
    if !result.affected_products.is_empty() {
        ctx.api.save()?;
    }
    print_messages(&result.messages)?;
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: u32, yes: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut port = MenuIo::new(stdin.lock(), io::stdout().lock());
    let result = ctx.api.delete_product(id, |product| {
        if yes {
            Ok(true)
        } else {
            port.confirm_delete(product)
        }
    })?;
    drop(port);

    if !result.affected_products.is_empty() {
        ctx.api.save()?;
    }
    print_messages(&result.messages)?;
    Ok(())
}

fn handle_search(ctx: &AppContext, keyword: &str) -> Result<()> {
    let result = ctx.api.search(keyword);
    println!("Search results ({} product(s)):", result.listed_products.len());
    print_products(&result.listed_products, &ctx.config.currency)?;
    Ok(())
}

fn handle_sort(ctx: &mut AppContext, criterion: &str) -> Result<()> {
    let result = ctx.api.sort(criterion);
    if result.has_level(MessageLevel::Success) {
        ctx.api.save()?;
    }
    print_messages(&result.messages)?;
    print_products(ctx.api.products(), &ctx.config.currency)?;
    Ok(())
}

fn handle_filter(ctx: &AppContext, min: f64, max: f64) -> Result<()> {
    let result = ctx.api.filter_by_price(min, max);
    println!(
        "Price filter results ({} product(s)):",
        result.listed_products.len()
    );
    print_products(&result.listed_products, &ctx.config.currency)?;
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init(ctx.scope)?;
    print_messages(&result.messages)?;
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
        (key, _) => ConfigAction::Show(key),
    };

    let result = ctx.api.config(ctx.scope, action)?;
    print_messages(&result.messages)?;
    if result.has_level(MessageLevel::Error) {
        return Err(StockError::Api("configuration not changed".into()));
    }
    Ok(())
}
