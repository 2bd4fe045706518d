use konvac_core::KonvacError;
use konvac_store::{MemoryStore, SceneId, SceneService};

const RECT: &str = r#"
layers:
  - objects:
      - type: Rect
        attrs: {width: 100, height: 50}
"#;

const WIDER_RECT: &str = r#"
layers:
  - objects:
      - type: Rect
        attrs: {width: 200, height: 75}
"#;

#[test]
fn list_is_empty_at_start() {
    let service = SceneService::new(MemoryStore::new());
    assert!(service.list().is_empty());
}

#[test]
fn create_then_list() {
    let service = SceneService::new(MemoryStore::new());
    let first = service.create(RECT).unwrap();
    let second = service.create("type: circle\nradius: 30\n").unwrap();

    let listed = service.list();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, first.id);
    assert_eq!(listed[1].id, second.id);
    assert_eq!(listed[1].data["radius"], 30);
}

#[test]
fn update_recompiles_in_place() {
    let service = SceneService::new(MemoryStore::new());
    let created = service.create(RECT).unwrap();
    assert!(created.program.contains(r#"{"width":100,"height":50}"#));

    let updated = service.update(&created.id, WIDER_RECT).unwrap();
    assert_eq!(updated.id, created.id);
    assert!(updated.program.contains(r#"{"width":200,"height":75}"#));
    assert_eq!(service.get(&created.id).unwrap(), updated);
    assert_eq!(service.list().len(), 1);
}

#[test]
fn update_with_bad_yaml_keeps_old_record() {
    let service = SceneService::new(MemoryStore::new());
    let created = service.create(RECT).unwrap();

    let err = service
        .update(&created.id, "invalid: yaml: content: - [")
        .unwrap_err();
    assert!(matches!(err, KonvacError::Decode(_)));
    assert_eq!(service.get(&created.id).unwrap(), created);
}

#[test]
fn missing_ids_are_not_found() {
    let service = SceneService::new(MemoryStore::new());
    let missing = SceneId::new("nonexistent-id");
    assert!(matches!(service.get(&missing), Err(KonvacError::NotFound(_))));
    assert!(matches!(service.update(&missing, RECT), Err(KonvacError::NotFound(_))));
    assert!(matches!(service.delete(&missing), Err(KonvacError::NotFound(_))));
}

#[test]
fn delete_returns_record_and_removes_it() {
    let service = SceneService::new(MemoryStore::new());
    let created = service.create(RECT).unwrap();

    let deleted = service.delete(&created.id).unwrap();
    assert_eq!(deleted, created);
    assert!(matches!(service.get(&created.id), Err(KonvacError::NotFound(_))));
}
