use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use montre_catalog::FilteredCatalog;
use montre_engine::format_price;
use montre_model::{ConfigurationResult, Slot, Stock};

/// Print the resolved configuration: per-slot choices, then price, SKU,
/// share query and any rule violations.
pub fn print_configuration(result: &ConfigurationResult, filtered: &FilteredCatalog) {
    println!("{}", configuration_table(result, filtered));
    println!("Price: {}", format_price(result.price, &result.currency));
    println!("SKU: {}", result.sku);
    println!("Share: ?{}", result.query);
    if result.has_violations() {
        println!("Violations:");
        for violation in &result.violations {
            println!("- {violation}");
        }
    }
}

/// Table of the current choice per slot. Unset slots (empty filtered list)
/// render as a dash.
pub fn configuration_table(result: &ConfigurationResult, filtered: &FilteredCatalog) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Slot"),
        header_cell("Option"),
        header_cell("Name"),
        header_cell("Delta"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for slot in Slot::ALL {
        match result.selection.get(slot) {
            Some(id) => {
                let option = filtered.option(slot, id);
                table.add_row(vec![
                    Cell::new(slot),
                    Cell::new(id),
                    Cell::new(option.map(|option| option.name.as_str()).unwrap_or("-")),
                    Cell::new(
                        option
                            .map(|option| format_price(option.price_delta, &result.currency))
                            .unwrap_or_else(|| "-".to_string()),
                    ),
                ]);
            }
            None => {
                table.add_row(vec![
                    Cell::new(slot),
                    Cell::new("-"),
                    Cell::new("no eligible option"),
                    Cell::new("-"),
                ]);
            }
        }
    }
    table
}

/// Table of every eligible option per slot for the current region.
pub fn slots_table(filtered: &FilteredCatalog, currency: &str) -> Result<Table> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Slot"),
        header_cell("Option"),
        header_cell("Name"),
        header_cell("Delta"),
        header_cell("Stock"),
        header_cell("Regions"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for slot in Slot::ALL {
        for option in filtered.options(slot)? {
            let regions = option
                .regions
                .as_ref()
                .filter(|regions| !regions.is_empty())
                .map(|regions| regions.iter().cloned().collect::<Vec<_>>().join(", "))
                .unwrap_or_else(|| "all".to_string());
            table.add_row(vec![
                Cell::new(slot),
                Cell::new(&option.id),
                Cell::new(&option.name),
                Cell::new(format_price(option.price_delta, currency)),
                Cell::new(stock_str(option.stock)),
                Cell::new(regions),
            ]);
        }
    }
    Ok(table)
}

fn stock_str(stock: Stock) -> &'static str {
    match stock {
        Stock::In => "in",
        Stock::Low => "low",
        Stock::Out => "out",
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
