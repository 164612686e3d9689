//! Terminal output helpers.
//!
//! Every user-facing print goes through here so formatting stays in one
//! place. Errors land on stderr; everything else on stdout.

use console::style;

/// Print a success line with a green check mark.
pub fn success(message: &str) {
    println!("{} {message}", style("✓").green());
}

/// Print an error line with a red cross, to stderr.
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red(), style(message).red());
}

/// Print a section header.
pub fn header(title: &str) {
    println!("\n{}", style(title).bold().underlined());
}

/// Print an indented plain line.
pub fn line(text: &str) {
    println!("  {text}");
}

/// Print a dimmed hint line.
pub fn hint(text: &str) {
    println!("{}", style(text).dim());
}

/// Print a labelled value, label dimmed.
pub fn kv(key: &str, value: &str) {
    println!("  {}: {value}", style(key).dim());
}

/// Print a bare value with no decoration, for piping into scripts.
pub fn value(text: &str) {
    println!("{text}");
}

/// Print a blank separator line.
pub fn blank() {
    println!();
}

/// Print a catalog row: the id `cart add` takes, the name, the unit price.
///
/// Cells are padded before styling; ANSI escapes would otherwise count
/// against the column width.
pub fn product_row(id: &str, name: &str, price: &str) {
    let id_cell = format!("{id:<16}");
    println!("  {} {name:<28} {price:>8}", style(id_cell).dim());
}

/// Print a cart line: quantity, name, line total, and the id the quantity
/// and remove commands take.
pub fn cart_row(quantity: u32, name: &str, line_price: &str, id: &str) {
    let label = format!("{quantity} × {name}");
    let id_cell = format!("[{id}]");
    println!("  {label:<32} {line_price:>8}  {}", style(id_cell).dim());
}
