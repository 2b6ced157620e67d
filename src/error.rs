// src/error.rs

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChemSimError {
    /// One or more entered symbols (possibly empty, or from a dismissed
    /// prompt) are not in the element table.
    #[error("element not found: {}", format_symbols(.symbols))]
    ElementNotFound { symbols: Vec<String> },
}

pub type Result<T> = std::result::Result<T, ChemSimError>;

impl ChemSimError {
    pub fn not_found(symbol: impl Into<String>) -> Self {
        Self::ElementNotFound {
            symbols: vec![symbol.into()],
        }
    }
}

fn format_symbols(symbols: &[String]) -> String {
    symbols
        .iter()
        .map(|s| format!("{:?}", s))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_quotes_every_rejected_symbol() {
        let err = ChemSimError::ElementNotFound {
            symbols: vec!["Xx".to_string(), String::new()],
        };
        assert_eq!(err.to_string(), "element not found: \"Xx\", \"\"");
    }
}
