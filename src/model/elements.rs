// src/model/elements.rs

use crate::error::{ChemSimError, Result};
use std::collections::HashMap;

pub type AtomicNumber = u32;

/// Symbols in atomic-number order: `ELEMENTS[z - 1]` is element `z`.
const ELEMENTS: [&str; 103] = [
    // --- Period 1 ---
    "H", "He",
    // --- Period 2 ---
    "Li", "Be", "B", "C", "N", "O", "F", "Ne",
    // --- Period 3 ---
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar",
    // --- Period 4 ---
    "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As", "Se",
    "Br", "Kr",
    // --- Period 5 ---
    "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn", "Sb", "Te",
    "I", "Xe",
    // --- Period 6 ---
    "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb",
    "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl", "Pb", "Bi", "Po", "At", "Rn",
    // --- Period 7 (through Lr) ---
    "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm", "Md", "No",
    "Lr",
];

/// Immutable symbol -> atomic number map, built once at startup.
#[derive(Debug, Clone)]
pub struct ElementTable {
    by_symbol: HashMap<&'static str, AtomicNumber>,
}

impl Default for ElementTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementTable {
    pub fn new() -> Self {
        let by_symbol = ELEMENTS
            .iter()
            .enumerate()
            .map(|(i, &sym)| (sym, i as AtomicNumber + 1))
            .collect();
        Self { by_symbol }
    }

    /// Exact-case lookup. Callers normalize with [`capitalize`] first.
    pub fn lookup(&self, symbol: &str) -> Result<AtomicNumber> {
        self.by_symbol
            .get(symbol)
            .copied()
            .ok_or_else(|| ChemSimError::not_found(symbol))
    }

    /// Capitalizes user input and looks it up.
    /// Returns the canonical symbol together with its atomic number.
    pub fn resolve(&self, raw: &str) -> Result<(String, AtomicNumber)> {
        let symbol = capitalize(raw);
        let z = self
            .lookup(&symbol)
            .map_err(|_| ChemSimError::not_found(raw))?;
        Ok((symbol, z))
    }

    pub fn symbol_of(&self, z: AtomicNumber) -> Option<&'static str> {
        let idx = usize::try_from(z).ok()?.checked_sub(1)?;
        ELEMENTS.get(idx).copied()
    }

    pub fn len(&self) -> usize {
        self.by_symbol.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }

    /// (symbol, Z) pairs in atomic-number order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, AtomicNumber)> {
        ELEMENTS
            .iter()
            .enumerate()
            .map(|(i, &sym)| (sym, i as AtomicNumber + 1))
    }
}

/// First character upper-cased, the remainder lower-cased ("hE" -> "He").
/// Whitespace is left alone, so " he" does not resolve.
pub fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
