// Input alphabet: ordered symbol list plus a name-to-column lookup.

use hashbrown::HashMap;

/// Ordered input alphabet of a transducer.
///
/// The position of a symbol is its column in every transition row, so the
/// order given at construction is significant. The column just past the last
/// symbol is the epsilon column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<String>,
    index: HashMap<String, usize>,
}

impl Alphabet {
    /// Build an alphabet from symbols in column order.
    ///
    /// A repeated symbol keeps its first column; later duplicates can never
    /// be looked up by name.
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(symbols.len());
        for (i, sym) in symbols.iter().enumerate() {
            index.entry(sym.clone()).or_insert(i);
        }
        Self { symbols, index }
    }

    /// Number of input symbols (not counting epsilon).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Column of a symbol, if it belongs to the alphabet.
    pub fn index_of(&self, symbol: &str) -> Option<usize> {
        self.index.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.index.contains_key(symbol)
    }

    /// Symbol at a column, `None` for the epsilon column or beyond.
    pub fn symbol(&self, index: usize) -> Option<&str> {
        self.symbols.get(index).map(String::as_str)
    }

    /// The epsilon column, one past the last symbol.
    pub fn epsilon_index(&self) -> usize {
        self.symbols.len()
    }

    /// Width of a transition row: one column per symbol plus epsilon.
    pub fn row_width(&self) -> usize {
        self.symbols.len() + 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }

    /// True if the alphabet repeats a symbol.
    pub fn has_duplicates(&self) -> bool {
        self.index.len() != self.symbols.len()
    }
}
