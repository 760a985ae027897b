use super::*;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

// =============================================================
// stagger
// =============================================================

#[test]
fn stagger_formulas_per_group() {
    let loose = CardLayout::Loose;
    assert_eq!(stagger(Group::FadeUp, 0, loose), ms(100));
    assert_eq!(stagger(Group::FadeUp, 3, loose), ms(250));
    assert_eq!(stagger(Group::Form, 2, loose), ms(400));
    assert_eq!(stagger(Group::Header, 1, loose), ms(200));
    assert_eq!(stagger(Group::Button, 10, loose), ms(500));
    assert_eq!(stagger(Group::Card, 4, loose), ms(700));
}

#[test]
fn grid_cards_stagger_by_row_and_column() {
    let grid = CardLayout::Grid { columns: 3 };
    assert_eq!(stagger(Group::Card, 0, grid), ms(300));
    assert_eq!(stagger(Group::Card, 2, grid), ms(420));
    assert_eq!(stagger(Group::Card, 3, grid), ms(420));
    assert_eq!(stagger(Group::Card, 5, grid), ms(540));
}

#[test]
fn zero_column_grid_is_treated_as_one_column() {
    assert_eq!(stagger(Group::Card, 2, CardLayout::Grid { columns: 0 }), ms(540));
}

// =============================================================
// grid_columns
// =============================================================

#[test]
fn implicit_grid_depends_on_viewport() {
    assert_eq!(grid_columns("none", 500.0), 2);
    assert_eq!(grid_columns("none", 768.0), 3);
    assert_eq!(grid_columns("", 1200.0), 3);
}

#[test]
fn explicit_grid_counts_tracks() {
    assert_eq!(grid_columns("200px 200px 200px 200px", 1200.0), 4);
    assert_eq!(grid_columns(" 1fr  1fr ", 400.0), 2);
}

// =============================================================
// plan
// =============================================================

#[test]
fn plan_covers_every_element_in_group_order() {
    let reveals = plan([2, 1, 0, 0, 1], CardLayout::Loose);
    let groups: Vec<Group> = reveals.iter().map(|r| r.group).collect();
    assert_eq!(groups, vec![Group::FadeUp, Group::FadeUp, Group::Form, Group::Header]);
    assert_eq!(reveals[1], Reveal { group: Group::FadeUp, index: 1, delay: ms(150) });
}

#[test]
fn plan_is_empty_for_empty_page() {
    assert!(plan([0; 5], CardLayout::Grid { columns: 3 }).is_empty());
}

#[test]
fn revealed_state_is_fully_opaque() {
    for group in Group::ALL {
        assert_eq!(group.shown().0, "1");
        assert!(!group.selector().is_empty());
    }
}

// =============================================================
// resize / motion gate
// =============================================================

#[test]
fn card_plan_follows_new_column_count() {
    let wide = card_plan(4, CardLayout::Grid { columns: 3 });
    let narrow = card_plan(4, CardLayout::Grid { columns: 2 });
    assert!(wide.iter().chain(&narrow).all(|r| r.group == Group::Card));
    assert_eq!(wide[3].delay, ms(420));
    assert_eq!(narrow[3].delay, ms(480));
}

fn prefs_sync() -> PreferenceSync {
    use std::sync::Arc;

    use crate::state::preferences::PreferenceStore;
    use crate::util::paint::MemorySurface;
    use crate::util::storage::MemoryStorage;

    let store = PreferenceStore::new(Arc::new(MemoryStorage::new()));
    PreferenceSync::new(store, Arc::new(MemorySurface::default()))
}

#[test]
fn motion_allowed_needs_flag_and_no_reduced_motion() {
    use crate::util::preference_sync::SystemSignals;

    let prefs = prefs_sync();
    prefs.init(SystemSignals::default());
    assert!(motion_allowed(&prefs));

    prefs.set_animations(false);
    assert!(!motion_allowed(&prefs));

    prefs.reduced_motion_changed(true);
    prefs.set_animations(true);
    assert!(!motion_allowed(&prefs));
}
