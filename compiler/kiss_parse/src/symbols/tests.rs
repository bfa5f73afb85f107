use proptest::prelude::*;

use super::*;

#[test]
fn declared_names_can_be_looked_up() {
    let mut table = SymbolTable::new();
    assert_eq!(table.declare("X", SymbolKind::Variable(Size::Byte)), Ok(()));
    assert_eq!(table.declare("P", SymbolKind::Procedure), Ok(()));

    assert_eq!(table.lookup("X"), Ok(SymbolKind::Variable(Size::Byte)));
    assert_eq!(table.variable("X"), Ok(Size::Byte));
    assert_eq!(table.lookup("P"), Ok(SymbolKind::Procedure));
    assert_eq!(table.len(), 2);
}

#[test]
fn undeclared_names_are_undefined() {
    let table = SymbolTable::new();
    assert_eq!(
        table.lookup("Y"),
        Err(ErrorKind::UndefinedIdentifier("Y".into()))
    );
    assert_eq!(
        table.variable("Y"),
        Err(ErrorKind::UndefinedIdentifier("Y".into()))
    );
}

#[test]
fn procedures_are_not_variables() {
    let mut table = SymbolTable::new();
    assert_eq!(table.declare("P", SymbolKind::Procedure), Ok(()));
    assert_eq!(table.variable("P"), Err(ErrorKind::NotAVariable("P".into())));
}

#[test]
fn reset_forgets_everything() {
    let mut table = SymbolTable::new();
    assert_eq!(table.declare("A", SymbolKind::Variable(Size::Word)), Ok(()));
    table.reset();
    assert!(table.is_empty());
    assert!(!table.contains("A"));
    assert_eq!(table.declare("A", SymbolKind::Procedure), Ok(()));
}

fn kind() -> impl Strategy<Value = SymbolKind> {
    prop_oneof![
        Just(SymbolKind::Procedure),
        prop::sample::select(Size::ALL.to_vec()).prop_map(SymbolKind::Variable),
    ]
}

proptest! {
    #[test]
    fn redeclaring_always_fails(
        name in "[A-Z][A-Z0-9]{0,6}",
        first in kind(),
        second in kind(),
        others in prop::collection::vec("[A-Z][A-Z0-9]{0,6}", 0..5),
    ) {
        let mut table = SymbolTable::new();
        prop_assert_eq!(table.declare(&name, first), Ok(()));
        for other in others.iter().filter(|other| **other != name) {
            // Duplicates among the others are fine to reject; only `name` matters.
            let _ = table.declare(other, SymbolKind::Procedure);
        }
        prop_assert_eq!(
            table.declare(&name, second),
            Err(ErrorKind::DuplicateIdentifier(name.clone()))
        );
        prop_assert_eq!(table.lookup(&name), Ok(first));
    }
}
