//! Property-based tests for tessera-ingest using proptest.

use proptest::prelude::*;
use serde_json::{json, Map, Value as JsonValue};
use tessera_core::schema::SchemaBuilder;
use tessera_core::{ScalarKind, Value};
use tessera_ingest::{ImportMode, Importer};
use tessera_storage::{Store, Transaction};

const TYPE: &str = "PrimaryKeyAsBoxedInteger";

fn create_store() -> Store {
    let mut store = Store::new();
    store
        .create_type(
            SchemaBuilder::new(TYPE)
                .unwrap()
                .add_field("id", ScalarKind::BoxedInteger)
                .unwrap()
                .add_field("name", ScalarKind::String)
                .unwrap()
                .add_field("note", ScalarKind::String)
                .unwrap()
                .add_primary_key("id")
                .unwrap()
                .build()
                .unwrap(),
        )
        .unwrap();
    store
}

/// A key that is a small integer, explicit null, or absent.
#[derive(Clone, Debug)]
enum KeyForm {
    Value(i32),
    Null,
    Absent,
}

fn key_form() -> impl Strategy<Value = KeyForm> {
    prop_oneof![
        (0i32..8).prop_map(KeyForm::Value),
        Just(KeyForm::Null),
        Just(KeyForm::Absent),
    ]
}

fn document(key: &KeyForm, name: &Option<String>) -> JsonValue {
    let mut fields = Map::new();
    match key {
        KeyForm::Value(v) => {
            fields.insert("id".into(), json!(v));
        }
        KeyForm::Null => {
            fields.insert("id".into(), JsonValue::Null);
        }
        KeyForm::Absent => {}
    }
    if let Some(name) = name {
        fields.insert("name".into(), json!(name));
    }
    JsonValue::Object(fields)
}

/// Sorted (key, name) pairs describing a store's observable state.
fn snapshot(store: &Store) -> Vec<(Value, Value)> {
    let mut state: Vec<(Value, Value)> = store
        .get_type(TYPE)
        .unwrap()
        .scan()
        .map(|o| (o.values()[0].clone(), o.values()[1].clone()))
        .collect();
    state.sort();
    state
}

fn upsert_all(docs: &[(KeyForm, Option<String>)]) -> Store {
    let mut store = create_store();
    let mut tx = Transaction::begin();
    let mut importer = Importer::new(&mut store, &mut tx);
    for (key, name) in docs {
        importer.import_upsert(TYPE, &document(key, name)).unwrap();
    }
    tx.commit().unwrap();
    store
}

proptest! {
    /// Writing null as the key and leaving the key out are indistinguishable.
    #[test]
    fn null_and_absent_key_equivalent(
        docs in prop::collection::vec((key_form(), prop::option::of("[a-z]{0,6}")), 1..30)
    ) {
        let rewrite = |from: fn(&KeyForm) -> bool, to: KeyForm| -> Vec<_> {
            docs.iter()
                .map(|(k, n)| (if from(k) { to.clone() } else { k.clone() }, n.clone()))
                .collect()
        };
        let null_form = rewrite(|k| matches!(k, KeyForm::Absent), KeyForm::Null);
        let absent_form = rewrite(|k| matches!(k, KeyForm::Null), KeyForm::Absent);

        prop_assert_eq!(snapshot(&upsert_all(&null_form)), snapshot(&upsert_all(&absent_form)));
    }

    /// Upsert leaves exactly one object per distinct key, the null key included.
    #[test]
    fn upsert_one_object_per_key(
        docs in prop::collection::vec((key_form(), prop::option::of("[a-z]{0,6}")), 1..30)
    ) {
        let store = upsert_all(&docs);
        let state = snapshot(&store);

        let mut keys: Vec<Value> = state.iter().map(|(k, _)| k.clone()).collect();
        keys.dedup();
        prop_assert_eq!(keys.len(), state.len());
        prop_assert!(keys.iter().filter(|k| k.is_null()).count() <= 1);
    }

    /// Re-running the last document of a batch changes nothing.
    #[test]
    fn upsert_idempotent(
        docs in prop::collection::vec((key_form(), prop::option::of("[a-z]{0,6}")), 1..20)
    ) {
        let mut store = upsert_all(&docs);
        let before = snapshot(&store);

        let (key, name) = &docs[docs.len() - 1];
        let mut tx = Transaction::begin();
        Importer::new(&mut store, &mut tx)
            .import(TYPE, &document(key, name), ImportMode::CreateOrUpdate)
            .unwrap();

        prop_assert!(tx.changes().is_empty());
        prop_assert_eq!(snapshot(&store), before);
    }

    /// Create mode accepts a key at most once per store.
    #[test]
    fn create_rejects_repeated_keys(keys in prop::collection::vec(key_form(), 1..30)) {
        let mut store = create_store();
        let mut tx = Transaction::begin();
        let mut importer = Importer::new(&mut store, &mut tx);
        let mut seen = Vec::new();

        for key in &keys {
            let value = match key {
                KeyForm::Value(v) => Value::Integer(*v),
                _ => Value::Null,
            };
            let result = importer.import_create(TYPE, &document(key, &None));
            prop_assert_eq!(result.is_ok(), !seen.contains(&value));
            if !seen.contains(&value) {
                seen.push(value);
            }
        }
        prop_assert_eq!(importer.store().get_type(TYPE).unwrap().len(), seen.len());
    }
}
