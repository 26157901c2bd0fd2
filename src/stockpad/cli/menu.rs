//! Interactive numbered menu.
//!
//! The menu reads from any `BufRead` and writes to any `Write`, so it runs the same against a
//! terminal or an in-memory buffer. Bad numeric input aborts only the current action and
//! control returns to the menu. End of input leaves without saving.

use super::render::{write_messages, write_products};
use std::io::{self, BufRead, Write};
use stockpad::api::{CmdMessage, NewProduct, StockApi};
use stockpad::commands::helpers::{parse_id, parse_price, parse_quantity};
use stockpad::error::{Result, StockError};
use stockpad::model::Product;
use stockpad::store::DataStore;

const MENU: &str = "\n=== INVENTORY MANAGER ===
1. View all
2. Add product
3. Update stock
4. Delete product
5. Search products
6. Sort products
7. Filter by price
8. Save & exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    Saved,
    InputClosed,
}

/// Input/output port for prompts.
pub struct MenuIo<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> MenuIo<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `label` and reads one line. End of input is an `UnexpectedEof` error.
    pub fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(StockError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            )));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Shows the product and asks for y/n. Anything but `y`/`yes` declines.
    pub fn confirm_delete(&mut self, product: &Product) -> Result<bool> {
        writeln!(self.output, "Product to delete: {}", product.name)?;
        match self.prompt("Are you sure? (y/n): ") {
            Ok(answer) => Ok(is_affirmative(&answer)),
            Err(e) if is_input_closed(&e) => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

fn is_input_closed(e: &StockError) -> bool {
    matches!(e, StockError::Io(err) if err.kind() == io::ErrorKind::UnexpectedEof)
}

pub fn run_menu<S, R, W>(
    api: &mut StockApi<S>,
    io: &mut MenuIo<R, W>,
    currency: &str,
) -> Result<MenuExit>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(io.output(), "{}", MENU)?;
        let choice = match io.prompt("Choose: ") {
            Ok(choice) => choice,
            Err(e) if is_input_closed(&e) => return closed(io),
            Err(e) => return Err(e),
        };

        let outcome = match choice.trim() {
            "1" => view_all(api, io, currency),
            "2" => add_product(api, io),
            "3" => update_stock(api, io),
            "4" => delete_product(api, io),
            "5" => search(api, io, currency),
            "6" => sort(api, io, currency),
            "7" => filter(api, io, currency),
            "8" => match api.save() {
                Ok(result) => {
                    write_messages(io.output(), &result.messages)?;
                    return Ok(MenuExit::Saved);
                }
                Err(e) => {
                    writeln!(io.output(), "Save failed: {}", e)?;
                    Ok(())
                }
            },
            _ => {
                writeln!(io.output(), "Invalid choice.")?;
                Ok(())
            }
        };

        match outcome {
            Ok(()) => {}
            Err(e) if is_input_closed(&e) => return closed(io),
            Err(e @ StockError::Validation(_)) => writeln!(io.output(), "{}", e)?,
            Err(e) => return Err(e),
        }
    }
}

fn closed<R: BufRead, W: Write>(io: &mut MenuIo<R, W>) -> Result<MenuExit> {
    writeln!(io.output(), "\nInput closed, exiting without saving.")?;
    Ok(MenuExit::InputClosed)
}

fn view_all<S: DataStore, R: BufRead, W: Write>(
    api: &StockApi<S>,
    io: &mut MenuIo<R, W>,
    currency: &str,
) -> Result<()> {
    writeln!(io.output(), "\n=== PRODUCTS ===")?;
    let result = api.list();
    if !result.listed_products.is_empty() {
        write_products(io.output(), &result.listed_products, currency)?;
    }
    write_messages(io.output(), &result.messages)?;
    Ok(())
}

fn add_product<S: DataStore, R: BufRead, W: Write>(
    api: &mut StockApi<S>,
    io: &mut MenuIo<R, W>,
) -> Result<()> {
    writeln!(io.output(), "\n=== ADD PRODUCT ===")?;
    let name = io.prompt("Name: ")?;
    let category = io.prompt("Category: ")?;
    let price = parse_price(&io.prompt("Price: ")?)?;
    let quantity = parse_quantity(&io.prompt("Quantity: ")?)?;

    let result = api.add_product(NewProduct::new(name.trim(), category.trim(), price, quantity))?;
    write_messages(io.output(), &result.messages)?;
    Ok(())
}

fn update_stock<S: DataStore, R: BufRead, W: Write>(
    api: &mut StockApi<S>,
    io: &mut MenuIo<R, W>,
) -> Result<()> {
    writeln!(io.output(), "\n=== UPDATE STOCK ===")?;
    let id = parse_id(&io.prompt("Product ID: ")?)?;

    let Some(product) = api.find(id) else {
        let missing = StockError::ProductNotFound(id).to_string();
        write_messages(io.output(), &[CmdMessage::warning(missing)])?;
        return Ok(());
    };
    writeln!(io.output(), "Found: {}", product.name)?;
    writeln!(io.output(), "Current stock: {}", product.quantity)?;

    let quantity = parse_quantity(&io.prompt("New stock: ")?)?;
    let result = api.update_quantity(id, quantity)?;
    write_messages(io.output(), &result.messages)?;
    Ok(())
}

fn delete_product<S: DataStore, R: BufRead, W: Write>(
    api: &mut StockApi<S>,
    io: &mut MenuIo<R, W>,
) -> Result<()> {
    writeln!(io.output(), "\n=== DELETE PRODUCT ===")?;
    let id = parse_id(&io.prompt("Product ID to delete: ")?)?;

    let result = api.delete_product(id, |product| io.confirm_delete(product))?;
    write_messages(io.output(), &result.messages)?;
    Ok(())
}

fn search<S: DataStore, R: BufRead, W: Write>(
    api: &StockApi<S>,
    io: &mut MenuIo<R, W>,
    currency: &str,
) -> Result<()> {
    let keyword = io.prompt("Search keyword: ")?;
    let result = api.search(&keyword);
    writeln!(
        io.output(),
        "\nSearch results ({} product(s)):",
        result.listed_products.len()
    )?;
    write_products(io.output(), &result.listed_products, currency)?;
    Ok(())
}

fn sort<S: DataStore, R: BufRead, W: Write>(
    api: &mut StockApi<S>,
    io: &mut MenuIo<R, W>,
    currency: &str,
) -> Result<()> {
    let criterion = io.prompt("Sort by (price/quantity): ")?;
    let result = api.sort(&criterion);
    write_messages(io.output(), &result.messages)?;
    write_products(io.output(), api.products(), currency)?;
    Ok(())
}

fn filter<S: DataStore, R: BufRead, W: Write>(
    api: &StockApi<S>,
    io: &mut MenuIo<R, W>,
    currency: &str,
) -> Result<()> {
    let min = parse_price(&io.prompt("Minimum price: ")?)?;
    let max = parse_price(&io.prompt("Maximum price: ")?)?;
    let result = api.filter_by_price(min, max);
    writeln!(
        io.output(),
        "\nPrice filter results ({} product(s)):",
        result.listed_products.len()
    )?;
    write_products(io.output(), &result.listed_products, currency)?;
    Ok(())
}
