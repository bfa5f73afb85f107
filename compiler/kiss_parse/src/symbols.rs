//! The symbol table: every name declared in one compilation.

use kiss_asm::Size;
use kiss_diagnostic::ErrorKind;
use rustc_hash::FxHashMap;

/// What a name was declared as.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Variable(Size),
    Procedure,
}

/// Uppercased name → kind. At most one entry per name.
///
/// Errors come back as bare [`ErrorKind`]s; the parser anchors them at the
/// token that named the symbol.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    entries: FxHashMap<String, SymbolKind>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `name`. Fails if it is already declared, whatever its kind.
    pub fn declare(&mut self, name: &str, kind: SymbolKind) -> Result<(), ErrorKind> {
        if self.entries.contains_key(name) {
            return Err(ErrorKind::DuplicateIdentifier(name.to_owned()));
        }
        self.entries.insert(name.to_owned(), kind);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Result<SymbolKind, ErrorKind> {
        self.entries
            .get(name)
            .copied()
            .ok_or_else(|| ErrorKind::UndefinedIdentifier(name.to_owned()))
    }

    /// Look up `name` and require it to be a variable; returns its size.
    pub fn variable(&self, name: &str) -> Result<Size, ErrorKind> {
        match self.lookup(name)? {
            SymbolKind::Variable(size) => Ok(size),
            SymbolKind::Procedure => Err(ErrorKind::NotAVariable(name.to_owned())),
        }
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget every declaration.
    pub fn reset(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests;
