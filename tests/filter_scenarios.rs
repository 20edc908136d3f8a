use std::sync::Arc;

use record_filters::filters::{
    ChainedFilter, ExcludeFieldsFilter, Filter, IncludeFieldsFilter, KeyMutatorFilter,
    KeyPrefixFilter, KeyReplacementFilter, filter_fn,
};
use record_filters::types::{Key, Record, Value};
use record_filters::FilterError;

fn person() -> Record {
    Record::from([("name", "Joe Bloe"), ("ssn", "123-45-6789")])
}

fn set_x(value: &'static str) -> impl Filter + 'static {
    filter_fn(move |r: &Record| {
        let mut out = r.clone();
        out.insert("x", value);
        Ok(out)
    })
}

#[test]
fn exclude_strips_ssn() {
    let out = ExcludeFieldsFilter::new(["ssn"]).filter(&person()).unwrap();
    assert_eq!(out, Record::from([("name", "Joe Bloe")]));
}

#[test]
fn include_keeps_only_ssn() {
    let out = IncludeFieldsFilter::new(["ssn"]).filter(&person()).unwrap();
    assert_eq!(out, Record::from([("ssn", "123-45-6789")]));
}

#[test]
fn replacement_renames_mapped_keys_only() {
    let input = Record::from([("ID", Value::Int64(12)), ("NotInMap", Value::from("x"))]);
    let out = KeyReplacementFilter::new([("ID", "id")]).filter(&input).unwrap();
    assert_eq!(out, Record::from([("id", Value::Int64(12)), ("NotInMap", Value::from("x"))]));
}

#[test]
fn mutator_and_prefix_agree() {
    let input = Record::from([("key", "value")]);
    let mutated = KeyMutatorFilter::infallible(|k: &Key| Key::from(format!("_{k}")))
        .filter(&input)
        .unwrap();
    let prefixed = KeyPrefixFilter::new("_").filter(&input).unwrap();

    assert_eq!(mutated, Record::from([("_key", "value")]));
    assert_eq!(prefixed, mutated);
}

#[test]
fn constant_mutator_keeps_last_value() {
    let out = KeyMutatorFilter::infallible(|_: &Key| Key::from("x"))
        .filter(&Record::from([("a", 1), ("b", 2)]))
        .unwrap();
    assert_eq!(out, Record::from([("x", 2)]));
}

#[test]
fn chain_order_decides_final_value() {
    let r = Record::from([("x", "start")]);

    let ab = ChainedFilter::new().with_filter(set_x("a")).with_filter(set_x("b"));
    let ba = ChainedFilter::new().with_filter(set_x("b")).with_filter(set_x("a"));

    assert_eq!(ab.filter(&r).unwrap().get("x"), Some(&Value::from("b")));
    assert_eq!(ba.filter(&r).unwrap().get("x"), Some(&Value::from("a")));
}

#[test]
fn database_row_normalization() {
    let row = Record::from([
        ("USR_ID", Value::Int64(7)),
        ("USR_NM", Value::from("Ada")),
        ("USR_PWD_HASH", Value::from("$2b$...")),
        ("CREATED", Value::from("2018-01-01")),
    ]);

    let chain = ChainedFilter::new()
        .with_filter(ExcludeFieldsFilter::new(["USR_PWD_HASH"]))
        .with_filter(KeyReplacementFilter::new([
            ("USR_ID", "id"),
            ("USR_NM", "name"),
            ("CREATED", "created_at"),
        ]));

    let out = chain.filter(&row).unwrap();
    assert_eq!(
        out,
        Record::from([
            ("id", Value::Int64(7)),
            ("name", Value::from("Ada")),
            ("created_at", Value::from("2018-01-01")),
        ])
    );
    // Original unchanged
    assert_eq!(row.len(), 4);
    assert!(row.contains_key("USR_PWD_HASH"));
}

#[test]
fn failing_mutator_inside_chain_surfaces_unchanged() {
    let strict = KeyMutatorFilter::new(|k: &Key| match k {
        Key::Int(_) => Err(FilterError::key_mutation(k, "integer keys are not allowed")),
        Key::Str(s) => Ok(Key::from(s.to_lowercase())),
    });
    let chain = ChainedFilter::new()
        .with_filter(ExcludeFieldsFilter::new(["skip"]))
        .with_filter(strict);

    let mut input = Record::new();
    input.insert("Name", "x");
    input.insert(5, "y");

    let err = chain.filter(&input).unwrap_err();
    match err {
        FilterError::KeyMutation { key, message } => {
            assert_eq!(key, Key::Int(5));
            assert_eq!(message, "integer keys are not allowed");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn configured_filter_is_reusable_across_threads() {
    let chain: Arc<dyn Filter> = Arc::new(
        ChainedFilter::new()
            .with_filter(ExcludeFieldsFilter::new(["ssn"]))
            .with_filter(KeyPrefixFilter::new("p_")),
    );

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let chain = Arc::clone(&chain);
            std::thread::spawn(move || {
                let input = Record::from([("id", Value::Int64(i)), ("ssn", Value::from("secret"))]);
                chain.filter(&input)
            })
        })
        .collect();

    for (i, h) in handles.into_iter().enumerate() {
        let out = h.join().unwrap().unwrap();
        assert_eq!(out, Record::from([("p_id", Value::Int64(i as i64))]));
    }
}
