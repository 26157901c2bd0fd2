use colored::Colorize;
use std::io::{self, Write};
use stockpad::api::{CmdMessage, MessageLevel};
use stockpad::model::Product;

const RULE_WIDTH: usize = 80;

pub(super) fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// One line per product between rules, followed by a total.
pub(super) fn write_products<W: Write>(
    out: &mut W,
    products: &[Product],
    currency: &str,
) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for product in products {
        writeln!(out, "{}", product.display_line(currency))?;
    }
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(out, "Total: {} product(s)", products.len())
}

pub(super) fn print_messages(messages: &[CmdMessage]) -> io::Result<()> {
    write_messages(&mut io::stdout().lock(), messages)
}

pub(super) fn print_products(products: &[Product], currency: &str) -> io::Result<()> {
    write_products(&mut io::stdout().lock(), products, currency)
}
