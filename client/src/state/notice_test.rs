use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Success, "saved");
    let b = state.push(NoticeKind::Error, "failed");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].message, "failed");
}

#[test]
fn dismiss_removes_only_matching_notice() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Success, "one");
    let b = state.push(NoticeKind::Success, "two");
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = NoticeState::default();
    state.push(NoticeKind::Error, "x");
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn kinds_map_to_distinct_classes() {
    assert_ne!(NoticeKind::Success.css_class(), NoticeKind::Error.css_class());
}
