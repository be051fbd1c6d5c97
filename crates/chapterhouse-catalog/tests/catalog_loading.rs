//! Loading the catalog from the JSON fixtures on disk.

use std::path::{Path, PathBuf};

use chapterhouse_catalog::prelude::*;

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

#[test]
fn manifest_file_loads_every_document() {
    init_tracing();
    let catalog =
        Catalog::load_manifest_file(&fixtures().join("manifest.json"), &LoadOptions::strict())
            .unwrap();

    assert_eq!(catalog.knights().id_strs(), ["percival", "gawain", "bors"]);
    assert_eq!(catalog.knights().list.len(), 4);

    let kingdoms: Vec<&str> = catalog.kingdoms().iter().map(|k| k.id.as_str()).collect();
    assert_eq!(kingdoms, ["northern_march", "southern_reach", "eastern_fens"]);

    let fens = catalog.kingdom("eastern_fens").unwrap();
    assert_eq!(fens.field("banner"), Some(&serde_json::json!("heron")));
}

#[test]
fn manifest_order_decides_kingdom_order() {
    init_tracing();
    let manifest = CatalogManifest {
        knights: PathBuf::from("knights.json"),
        kingdoms: vec![
            PathBuf::from("kingdoms/eastern_fens.json"),
            PathBuf::from("kingdoms/northern_march.json"),
        ],
    };
    let catalog = Catalog::load(&manifest, &fixtures(), &LoadOptions::default()).unwrap();
    let kingdoms: Vec<&str> = catalog.kingdoms().iter().map(|k| k.id.as_str()).collect();
    assert_eq!(kingdoms, ["eastern_fens", "northern_march"]);
}

#[test]
fn malformed_knights_degrade_when_lenient() {
    init_tracing();
    let manifest = CatalogManifest {
        knights: PathBuf::from("malformed_knights.json"),
        kingdoms: vec![PathBuf::from("kingdoms/northern_march.json")],
    };
    let catalog = Catalog::load(&manifest, &fixtures(), &LoadOptions::default()).unwrap();
    assert!(catalog.knights().is_empty());
    assert!(catalog.knights().ids.is_empty());
    assert_eq!(catalog.kingdoms().len(), 1);
}

#[test]
fn malformed_knights_fail_when_strict() {
    init_tracing();
    let manifest = CatalogManifest {
        knights: PathBuf::from("malformed_knights.json"),
        kingdoms: vec![PathBuf::from("kingdoms/northern_march.json")],
    };
    let err = Catalog::load(&manifest, &fixtures(), &LoadOptions::strict()).unwrap_err();
    assert!(matches!(err, CatalogError::NotASequence { .. }));
}

#[test]
fn broken_kingdom_fails_fast() {
    init_tracing();
    let manifest = CatalogManifest {
        knights: PathBuf::from("knights.json"),
        kingdoms: vec![
            PathBuf::from("kingdoms/northern_march.json"),
            PathBuf::from("kingdoms/broken.json"),
        ],
    };
    let err = Catalog::load(&manifest, &fixtures(), &LoadOptions::default()).unwrap_err();
    match err {
        CatalogError::Json { document, .. } => assert!(document.ends_with("broken.json")),
        other => panic!("expected a JSON error, got {other:?}"),
    }
}

#[test]
fn missing_document_is_an_io_error() {
    init_tracing();
    let manifest = CatalogManifest {
        knights: PathBuf::from("knights.json"),
        kingdoms: vec![PathBuf::from("kingdoms/atlantis.json")],
    };
    let err = Catalog::load(&manifest, &fixtures(), &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, CatalogError::Io { ref path, .. } if path.ends_with("atlantis.json")));
}

#[test]
fn loading_twice_gives_the_same_version() {
    init_tracing();
    let path = fixtures().join("manifest.json");
    let a = Catalog::load_manifest_file(&path, &LoadOptions::default()).unwrap();
    let b = Catalog::load_manifest_file(&path, &LoadOptions::default()).unwrap();
    assert_eq!(a.version(), b.version());
}

#[test]
fn catalog_source_feeds_the_accessor() {
    init_tracing();
    let catalog =
        Catalog::load_manifest_file(&fixtures().join("manifest.json"), &LoadOptions::default())
            .unwrap();
    let mut accessor = KnightCatalogAccessor::new();
    let view = accessor.view(catalog.knight_source());
    assert_eq!(*view, *catalog.knights());
    accessor.view(catalog.knight_source());
    assert_eq!(accessor.recomputes(), 1);
}

#[test]
fn disk_and_in_memory_catalogs_share_a_version() {
    init_tracing();
    let read = |name: &str| -> serde_json::Value {
        serde_json::from_str(&std::fs::read_to_string(fixtures().join(name)).unwrap()).unwrap()
    };
    let on_disk =
        Catalog::load_manifest_file(&fixtures().join("manifest.json"), &LoadOptions::strict())
            .unwrap();
    let in_memory = Catalog::from_documents(
        read("knights.json"),
        vec![
            read("kingdoms/northern_march.json"),
            read("kingdoms/southern_reach.json"),
            read("kingdoms/eastern_fens.json"),
        ],
        &LoadOptions::strict(),
    )
    .unwrap();
    assert_eq!(on_disk.version(), in_memory.version());
}
