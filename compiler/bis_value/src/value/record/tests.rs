use super::*;
use crate::errors::EvalErrorKind;
use bis_ir::StringInterner;
use pretty_assertions::assert_eq;

#[test]
fn build_and_read_fields() {
    let interner = StringInterner::new();
    let pair = interner.intern("Pair");
    let x = interner.intern("x");
    let y = interner.intern("y");

    let record = RecordBuilder::new(pair)
        .field(y, Value::string("xyz"))
        .field(x, Value::string("abc"))
        .build(&interner);
    let Ok(record) = record else {
        panic!("record should build");
    };

    assert_eq!(record.type_name, pair);
    assert_eq!(record.len(), 2);
    assert_eq!(record.get_field(x).and_then(Value::as_str), Some("abc"));
    assert_eq!(record.get_field(y).and_then(Value::as_str), Some("xyz"));
    assert!(record.get_field(interner.intern("z")).is_none());
}

#[test]
fn layout_order_is_independent_of_assignment_order() {
    let interner = StringInterner::new();
    let pair = interner.intern("Pair");
    let x = interner.intern("x");
    let y = interner.intern("y");

    let a = RecordBuilder::new(pair)
        .field(x, Value::int(1))
        .field(y, Value::int(2))
        .build(&interner);
    let b = RecordBuilder::new(pair)
        .field(y, Value::int(2))
        .field(x, Value::int(1))
        .build(&interner);
    let (Ok(a), Ok(b)) = (a, b) else {
        panic!("records should build");
    };

    let names_a: Vec<Name> = a.fields().map(|(n, _)| n).collect();
    let names_b: Vec<Name> = b.fields().map(|(n, _)| n).collect();
    assert_eq!(names_a, names_b);
    assert!(a.equals(&b));
}

#[test]
fn duplicate_field_is_rejected() {
    let interner = StringInterner::new();
    let pair = interner.intern("Pair");
    let x = interner.intern("x");

    let err = RecordBuilder::new(pair)
        .field(x, Value::int(1))
        .field(x, Value::int(2))
        .build(&interner)
        .err();
    assert_eq!(
        err.map(|e| e.kind),
        Some(EvalErrorKind::DuplicateField {
            field: "x".to_string(),
            type_name: "Pair".to_string(),
        })
    );
}

#[test]
fn records_of_different_types_differ() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let a = RecordBuilder::new(interner.intern("A"))
        .field(x, Value::int(1))
        .build(&interner);
    let b = RecordBuilder::new(interner.intern("B"))
        .field(x, Value::int(1))
        .build(&interner);
    let (Ok(a), Ok(b)) = (a, b) else {
        panic!("records should build");
    };
    assert!(!a.equals(&b));
}

#[test]
fn empty_record() {
    let interner = StringInterner::new();
    let Ok(unit) = RecordBuilder::new(interner.intern("Empty")).build(&interner) else {
        panic!("record should build");
    };
    assert!(unit.is_empty());
    assert_eq!(unit.fields().count(), 0);
}

#[test]
fn missing_field_faults() {
    let interner = StringInterner::new();
    let pair = interner.intern("Pair");
    let Ok(record) = RecordBuilder::new(pair)
        .field(interner.intern("x"), Value::int(1))
        .build(&interner)
    else {
        panic!("record should build");
    };
    let err = record.field(interner.intern("y"), &interner).err();
    assert_eq!(
        err.map(|e| e.kind),
        Some(EvalErrorKind::UndefinedField {
            field: "y".to_string(),
            type_name: "Pair".to_string(),
        })
    );
    assert_eq!(
        record
            .field(interner.intern("x"), &interner)
            .ok()
            .and_then(Value::as_int),
        Some(1)
    );
}

#[test]
fn layout_is_sorted_by_field_text() {
    let interner = StringInterner::new();
    // interned before "a", so raw Name order differs from text order
    let b = interner.intern("b");
    let a = interner.intern("a");
    let Ok(record) = RecordBuilder::new(interner.intern("T"))
        .field(b, Value::int(2))
        .field(a, Value::int(1))
        .build(&interner)
    else {
        panic!("record should build");
    };
    let names: Vec<&str> = record.fields().map(|(n, _)| interner.lookup(n)).collect();
    assert_eq!(names, vec!["a", "b"]);
}
