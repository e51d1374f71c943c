use cptg_domain::constants::SOURCE_TAG;
use cptg_domain::{Registration, RegistrationLabels, Surfaces};
use cptg_kernel::i18n::{IdentityLocalizer, Localizer, MessageCatalog};
use cptg_registry::{
    DefinitionStore, RegistrationCatalog, Replay, ReplaySummary, Replayer, StorePolicy, sink_fn,
};
use cptg_storage::Storage;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use tempfile::TempDir;

fn setup(localizer: Arc<dyn Localizer>) -> (TempDir, DefinitionStore, Replayer) {
    let temp = TempDir::new().expect("tempdir");
    let storage = Storage::builder().root(temp.path()).connect().expect("storage");
    let store = DefinitionStore::open(&storage, "cptg_settings", StorePolicy::default())
        .expect("store");
    let replayer = Replayer::new(store.clone(), localizer);
    (temp, store, replayer)
}

#[test]
fn empty_store_replays_nothing() {
    let (_temp, _store, replayer) = setup(Arc::new(IdentityLocalizer));
    assert_eq!(replayer.replay_all().expect("replay"), Replay { registrations: vec![], skipped: 0 });
}

#[test]
fn movie_scenario() {
    let (_temp, store, replayer) = setup(Arc::new(IdentityLocalizer));

    assert!(store.append(&("Movie", "Movie", "Movies").into()).expect("first").is_stored());
    assert!(!store.append(&("Movie", "Film", "Films").into()).expect("second").is_stored());

    let replay = replayer.replay_all().expect("replay");
    assert_eq!(replay.skipped, 0);
    assert_eq!(
        replay.registrations,
        vec![Registration {
            type_key: "movie".to_owned(),
            labels: RegistrationLabels {
                name: "Movies".to_owned(),
                singular_name: "Movie".to_owned(),
                menu_name: "Movies".to_owned(),
                name_admin_bar: "Movie".to_owned(),
                add_new: "Add New".to_owned(),
                all_items: "All Movies".to_owned(),
            },
            public: true,
            has_archive: true,
            rewrite_slug: "movie".to_owned(),
            supports: Surfaces::DEFAULT,
            source_tag: SOURCE_TAG.to_owned(),
        }]
    );
}

#[test]
fn incomplete_definition_between_complete_ones_is_skipped() {
    let (_temp, store, replayer) = setup(Arc::new(IdentityLocalizer));

    store.append(&("book", "Book", "Books").into()).expect("book");
    store.append(&("draft", "Draft", "").into()).expect("draft");
    store.append(&("movie", "Movie", "Movies").into()).expect("movie");

    let replay = replayer.replay_all().expect("replay");
    let keys: Vec<_> = replay.registrations.iter().map(|r| r.type_key.as_str()).collect();
    assert_eq!(keys, ["book", "movie"]);
    assert_eq!(replay.skipped, 1);
    assert_eq!(store.read_all().expect("read").len(), 3, "skipped definitions stay stored");
}

#[test]
fn replay_is_idempotent() {
    let (_temp, store, replayer) = setup(Arc::new(IdentityLocalizer));
    store.append(&("book", "Book", "Books").into()).expect("book");
    store.append(&("movie", "Movie", "Movies").into()).expect("movie");

    let first = replayer.replay_all().expect("first");
    let second = replayer.replay_all().expect("second");

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_vec(&first.registrations).expect("json"),
        serde_json::to_vec(&second.registrations).expect("json")
    );
}

#[test]
fn replay_into_catalog_twice_keeps_one_entry_per_key() {
    let (_temp, store, replayer) = setup(Arc::new(IdentityLocalizer));
    store.append(&("book", "Book", "Books").into()).expect("book");
    store.append(&("movie", "Movie", "Movies").into()).expect("movie");

    let mut catalog = RegistrationCatalog::new();
    replayer.replay_into(&mut catalog).expect("first");
    let summary = replayer.replay_into(&mut catalog).expect("second");

    assert_eq!(summary, ReplaySummary { emitted: 2, skipped: 0 });
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.generated_keys(), ["book", "movie"]);
}

#[test]
fn closures_can_act_as_sinks() {
    let (_temp, store, replayer) = setup(Arc::new(IdentityLocalizer));
    store.append(&("movie", "Movie", "Movies").into()).expect("movie");

    let mut slugs = Vec::new();
    let summary =
        replayer.replay_into(&mut sink_fn(|r: Registration| slugs.push(r.rewrite_slug))).expect("replay");

    assert_eq!(summary.emitted, 1);
    assert_eq!(slugs, ["movie"]);
}

#[test]
fn localized_labels_use_the_catalog() {
    let catalog = MessageCatalog::new().with("Add New", "Neu").with("All ", "Alle ");
    let (_temp, store, replayer) = setup(Arc::new(catalog));
    store.append(&("film", "Film", "Filme").into()).expect("film");

    let replay = replayer.replay_all().expect("replay");
    assert_eq!(replay.registrations[0].labels.add_new, "Neu");
    assert_eq!(replay.registrations[0].labels.all_items, "Alle Filme");
}

#[test]
fn appends_after_replay_show_up_next_time() {
    let (_temp, store, replayer) = setup(Arc::new(IdentityLocalizer));
    store.append(&("book", "Book", "Books").into()).expect("book");
    assert_eq!(replayer.replay_all().expect("first").registrations.len(), 1);

    store.append(&("movie", "Movie", "Movies").into()).expect("movie");
    assert_eq!(replayer.replay_all().expect("second").registrations.len(), 2);
}

#[test]
fn malformed_document_fails_replay() {
    let (_temp, store, replayer) = setup(Arc::new(IdentityLocalizer));
    store.slot().store(b"{ definitely not json").expect("seed");

    let err = replayer.replay_all().expect_err("malformed");
    assert!(matches!(err, cptg_registry::RegistryError::Serialization { .. }));
}

#[test]
fn wrong_shaped_document_fails_replay() {
    let (_temp, store, replayer) = setup(Arc::new(IdentityLocalizer));
    store.slot().store(br#"{"version":1,"definitions":"movie"}"#).expect("seed");

    let err = replayer.replay_all().expect_err("wrong shape");
    assert!(matches!(err, cptg_registry::RegistryError::Serialization { .. }));
}

#[test]
fn legacy_duplicates_register_one_slug() {
    let (_temp, store, replayer) = setup(Arc::new(IdentityLocalizer));
    store
        .slot()
        .store(
            br#"[{"type_key":"movie","singular_label":"Movie","plural_label":"Movies"},
                {"type_key":"Movie","singular_label":"Film","plural_label":"Films"}]"#,
        )
        .expect("seed");

    let replay = replayer.replay_all().expect("replay");
    let slugs: Vec<_> = replay.registrations.iter().map(|r| r.rewrite_slug.as_str()).collect();
    assert_eq!(slugs, ["movie"]);
    assert_eq!(replay.registrations[0].labels.name, "Movies");
}
