use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::{Money, Request};

/// Errors that can occur when parsing csv rows
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("line {line}: unrecognized command '{command}'")]
    UnrecognizedCommand { line: usize, command: String },

    #[error("line {line}: purchase missing drink")]
    MissingDrink { line: usize },

    #[error("line {line}: purchase missing amount")]
    MissingAmount { line: usize },

    #[error("line {line}: invalid amount '{amount}', expected a whole number")]
    InvalidAmount { line: usize, amount: String },
}

#[derive(Debug, Deserialize)]
struct InputRow {
    command: String,
    drink: Option<String>,
    amount: Option<String>,
    credential: Option<String>,
}

/// Read machine requests from a csv file with header `command,drink,amount,credential`.
pub fn read_requests(
    path: impl AsRef<Path>,
) -> Result<impl Iterator<Item = Result<Request, CsvError>>, csv::Error> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)?;

    Ok(reader
        .into_deserialize::<InputRow>()
        .enumerate()
        .map(|(idx, result)| {
            let line = idx + 2; // 1-indexed, skip header
            let row = result.map_err(|source| CsvError::Parse { line, source })?;
            parse_row(line, row)
        }))
}

fn parse_row(line: usize, row: InputRow) -> Result<Request, CsvError> {
    match row.command.to_lowercase().as_str() {
        "purchase" => {
            let drink = row
                .drink
                .ok_or(CsvError::MissingDrink { line })?
                .to_lowercase();
            let amount = row.amount.ok_or(CsvError::MissingAmount { line })?;
            let tendered = amount
                .parse::<u64>()
                .map(Money::new)
                .map_err(|_| CsvError::InvalidAmount { line, amount })?;
            Ok(Request::Purchase { drink, tendered })
        }
        "report" => Ok(Request::Report {
            credential: row.credential.unwrap_or_default(),
        }),
        "history" => Ok(Request::History),
        "menu" => Ok(Request::Menu),
        _ => Err(CsvError::UnrecognizedCommand {
            line,
            command: row.command,
        }),
    }
}
