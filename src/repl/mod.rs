//! Interactive console menu: a numbered list of catalog queries, one
//! selection per loop iteration, 0 to exit.

use crate::error::{FoodLensError, Result};
use crate::render;
use crate::runner::QueryRunner;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::warn;

/// Outcome of parsing one line of menu input.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Run(u8),
    Exit,
    Invalid(String),
}

pub fn parse_selection(input: &str) -> Selection {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Selection::Invalid("enter a query number".to_string());
    }
    match trimmed.parse::<i64>() {
        Ok(0) => Selection::Exit,
        Ok(n) if (1..=i64::from(u8::MAX)).contains(&n) => Selection::Run(n as u8),
        Ok(n) => Selection::Invalid(format!("{n} is not a valid query number")),
        Err(_) => Selection::Invalid(format!("'{trimmed}' is not a number")),
    }
}

pub struct ConsoleMenu {
    runner: QueryRunner,
}

impl ConsoleMenu {
    pub fn new(runner: QueryRunner) -> Self {
        Self { runner }
    }

    fn print_menu(&self) {
        println!("\n{}", "Food Donation Query Menu".bold());
        for def in self.runner.catalog().iter() {
            println!("  {:>2}. {}", def.key, def.label);
        }
        println!("   0. Exit");
    }

    /// Loop until the user selects 0 or closes the input stream. The store
    /// connection was acquired by the caller and is released when the runner
    /// is dropped on return.
    pub async fn run(&mut self) -> Result<()> {
        let mut rl =
            DefaultEditor::new().map_err(|e| FoodLensError::Readline(e.to_string()))?;

        loop {
            self.print_menu();
            let line = match rl.readline("foodlens> ") {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(FoodLensError::Readline(e.to_string())),
            };
            let _ = rl.add_history_entry(&line);

            match parse_selection(&line) {
                Selection::Exit => break,
                Selection::Invalid(msg) => {
                    println!("{} {}", "invalid input:".red(), msg);
                }
                Selection::Run(key) => match self.runner.run(key).await {
                    Ok(rs) => {
                        if let Ok(def) = self.runner.catalog().lookup(key) {
                            render::print_result(def, &rs);
                        }
                    }
                    Err(FoodLensError::QueryNotFound(msg)) => {
                        println!("{} {}", "unknown query:".red(), msg);
                    }
                    Err(e) => {
                        warn!(key, error = %e, "query failed");
                        println!("{} {}", "query failed:".red(), e);
                    }
                },
            }
        }

        println!("Goodbye.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_exits() {
        assert_eq!(parse_selection("0"), Selection::Exit);
        assert_eq!(parse_selection("  0  "), Selection::Exit);
    }

    #[test]
    fn test_valid_keys_parse() {
        assert_eq!(parse_selection("1"), Selection::Run(1));
        assert_eq!(parse_selection("15"), Selection::Run(15));
        // out-of-catalog keys still parse; the runner reports the miss
        assert_eq!(parse_selection("16"), Selection::Run(16));
    }

    #[test]
    fn test_non_numeric_input_is_invalid() {
        assert!(matches!(parse_selection("abc"), Selection::Invalid(_)));
        assert!(matches!(parse_selection("1.5"), Selection::Invalid(_)));
        assert!(matches!(parse_selection(""), Selection::Invalid(_)));
    }

    #[test]
    fn test_out_of_range_numbers_are_invalid() {
        assert!(matches!(parse_selection("-1"), Selection::Invalid(_)));
        assert!(matches!(parse_selection("300"), Selection::Invalid(_)));
    }
}
