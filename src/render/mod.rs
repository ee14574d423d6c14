use crate::catalog::{QueryDef, TOP_PROVIDERS_KEY};
use crate::runner::{provider_contacts, ProviderContact};
use crate::store::ResultSet;
use colored::Colorize;
use tabled::builder::Builder;
use tabled::settings::Style;

pub fn render_table(rs: &ResultSet) -> String {
    if rs.columns.is_empty() {
        return "(no rows)".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(rs.columns.clone());
    for row in &rs.rows {
        builder.push_record(row.clone());
    }

    let mut table = builder.build();
    table.with(Style::sharp());
    table.to_string()
}

pub fn contact_line(c: &ProviderContact) -> String {
    format!("{} ({}) -> {}", c.name, c.city, c.contact)
}

/// Print a query result to stdout: label, table, row count, and for the
/// top-providers query one contact line per row.
pub fn print_result(def: &QueryDef, rs: &ResultSet) {
    println!("\n{}", def.label.cyan().bold());
    println!("{}", render_table(rs));
    println!("{}", format!("{} row(s)", rs.len()).dimmed());

    if def.key == TOP_PROVIDERS_KEY {
        let contacts = provider_contacts(rs);
        if !contacts.is_empty() {
            println!("\n{}", "Provider contacts for coordination:".bold());
            for c in &contacts {
                println!("  {}", contact_line(c));
            }
        }
    }
}
