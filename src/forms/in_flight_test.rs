use super::*;

#[test]
fn second_admission_is_busy_until_guard_drops() {
    let registry = InFlight::new();
    let id = new_form_id();

    let first = registry.admit(&id);
    assert!(matches!(first, Admission::Tracked(_)));
    assert!(matches!(registry.admit(&id), Admission::Busy));

    drop(first);
    assert!(matches!(registry.admit(&id), Admission::Tracked(_)));
}

#[test]
fn distinct_form_instances_do_not_block_each_other() {
    let registry = InFlight::new();
    let a = registry.admit(&new_form_id());
    let b = registry.admit(&new_form_id());
    assert!(matches!(a, Admission::Tracked(_)));
    assert!(matches!(b, Admission::Tracked(_)));
}

#[test]
fn missing_or_malformed_id_is_untracked() {
    let registry = InFlight::new();
    assert!(matches!(registry.admit(""), Admission::Untracked));
    assert!(matches!(registry.admit("not-a-uuid"), Admission::Untracked));
    assert!(matches!(registry.admit("not-a-uuid"), Admission::Untracked));
}

#[test]
fn is_active_tracks_guard_lifetime() {
    let registry = InFlight::new();
    let raw = new_form_id();
    let id = parse_form_id(&raw).unwrap();

    assert!(!registry.is_active(id));
    let guard = registry.admit(&raw);
    assert!(registry.is_active(id));
    drop(guard);
    assert!(!registry.is_active(id));
}

#[test]
fn clones_share_the_registry() {
    let registry = InFlight::new();
    let clone = registry.clone();
    let raw = new_form_id();
    let _guard = registry.admit(&raw);
    assert!(matches!(clone.admit(&raw), Admission::Busy));
}

#[test]
fn parse_form_id_trims_whitespace() {
    let raw = new_form_id();
    assert_eq!(parse_form_id(&format!("  {raw} ")), parse_form_id(&raw));
    assert!(parse_form_id(&raw).is_some());
}
