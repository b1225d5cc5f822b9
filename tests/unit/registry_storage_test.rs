//! Lift registry tests against the SQLite store.

use liftplan::lifts::{
    default_lifts, load_lifts, LiftEntry, LiftRegistry, RegistryError, RenameCollisionPolicy,
    LIFTS_KEY,
};
use liftplan::storage::{Database, KeyValueStore};
use tempfile::TempDir;

fn open_db(dir: &TempDir) -> Database {
    Database::open(&dir.path().join("liftplan.db")).expect("Failed to open database")
}

#[test]
fn test_first_run_seeds_and_persists_defaults() {
    let dir = TempDir::new().unwrap();
    let registry = LiftRegistry::open(open_db(&dir), RenameCollisionPolicy::Overwrite)
        .expect("Failed to open registry");

    assert_eq!(registry.lifts(), &default_lifts());
    assert_eq!(registry.len(), 10);

    let db = registry.close();
    assert_eq!(load_lifts(&db).unwrap(), default_lifts());
    assert!(db.get(LIFTS_KEY).unwrap().is_some());
}

#[test]
fn test_mutations_survive_reopen() {
    let dir = TempDir::new().unwrap();

    {
        let mut registry =
            LiftRegistry::open(open_db(&dir), RenameCollisionPolicy::Overwrite).unwrap();
        registry.add("Front Squat", 180.0).unwrap();
        registry.rename("Dips", "Weighted Dips", 100.0).unwrap();
        registry.remove("Pull-ups").unwrap();
    }

    let registry = LiftRegistry::open(open_db(&dir), RenameCollisionPolicy::Overwrite).unwrap();

    assert_eq!(registry.get("Front Squat"), Some(180.0));
    assert_eq!(registry.get("Weighted Dips"), Some(100.0));
    assert!(!registry.contains("Dips"));
    assert!(!registry.contains("Pull-ups"));
    assert_eq!(registry.len(), 10);
}

#[test]
fn test_load_after_each_mutation_matches_state() {
    let mut registry = LiftRegistry::open(
        Database::open_in_memory().unwrap(),
        RenameCollisionPolicy::Overwrite,
    )
    .unwrap();

    registry.add("Hip Thrust", 200.0).unwrap();
    assert_eq!(&load_lifts(registry.store()).unwrap(), registry.lifts());

    registry.rename("Hip Thrust", "Barbell Hip Thrust", 210.0).unwrap();
    assert_eq!(&load_lifts(registry.store()).unwrap(), registry.lifts());

    registry.remove("Barbell Hip Thrust").unwrap();
    assert_eq!(&load_lifts(registry.store()).unwrap(), registry.lifts());
    assert_eq!(registry.lifts(), &default_lifts());
}

#[test]
fn test_rejected_add_leaves_storage_untouched() {
    let mut registry = LiftRegistry::open(
        Database::open_in_memory().unwrap(),
        RenameCollisionPolicy::Overwrite,
    )
    .unwrap();
    let stored_before = registry.store().get(LIFTS_KEY).unwrap();

    assert!(matches!(registry.add("", 50.0), Err(RegistryError::EmptyName)));
    assert!(matches!(
        registry.add("Squat", 50.0),
        Err(RegistryError::DuplicateName(_))
    ));

    assert_eq!(registry.store().get(LIFTS_KEY).unwrap(), stored_before);
    assert_eq!(registry.get("Squat"), Some(240.0));
}

#[test]
fn test_persisted_empty_mapping_is_not_reseeded() {
    let dir = TempDir::new().unwrap();

    {
        let mut registry =
            LiftRegistry::open(open_db(&dir), RenameCollisionPolicy::Overwrite).unwrap();
        let names: Vec<String> = registry.snapshot().into_iter().map(|e| e.name).collect();
        for name in names {
            registry.remove(&name).unwrap();
        }
        assert!(registry.is_empty());
    }

    let registry = LiftRegistry::open(open_db(&dir), RenameCollisionPolicy::Overwrite).unwrap();
    assert!(registry.is_empty());
}

#[test]
fn test_corrupt_storage_is_reported() {
    let mut db = Database::open_in_memory().unwrap();
    db.set(LIFTS_KEY, r#"{"Squat":"heavy"}"#).unwrap();

    let result = LiftRegistry::open(db, RenameCollisionPolicy::Overwrite);
    assert!(matches!(result, Err(RegistryError::Corrupt(_))));
}

#[test]
fn test_rename_collision_policies() {
    let mut registry = LiftRegistry::open(
        Database::open_in_memory().unwrap(),
        RenameCollisionPolicy::Reject,
    )
    .unwrap();

    let result = registry.rename("Dips", "Squat", 90.0);
    assert!(matches!(result, Err(RegistryError::NameCollision(_))));
    assert_eq!(registry.get("Dips"), Some(90.0));
    assert_eq!(registry.get("Squat"), Some(240.0));

    registry.set_policy(RenameCollisionPolicy::Overwrite);
    registry.rename("Dips", "Squat", 90.0).unwrap();
    assert!(!registry.contains("Dips"));
    assert_eq!(registry.get("Squat"), Some(90.0));
    assert_eq!(&load_lifts(registry.store()).unwrap(), registry.lifts());
}

#[test]
fn test_snapshot_is_sorted() {
    let registry = LiftRegistry::open(
        Database::open_in_memory().unwrap(),
        RenameCollisionPolicy::Overwrite,
    )
    .unwrap();

    let snapshot = registry.snapshot();
    assert_eq!(snapshot.first(), Some(&LiftEntry::new("Barbell Overhead Press", 100.0)));
    assert_eq!(snapshot.last(), Some(&LiftEntry::new("Squat", 240.0)));

    let mut names: Vec<&str> = snapshot.iter().map(|e| e.name.as_str()).collect();
    let before = names.clone();
    names.sort();
    assert_eq!(names, before);
}
