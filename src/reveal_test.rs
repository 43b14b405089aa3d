use super::*;
use crate::testing::FakeElement;

// =============================================================
// RevealPlan
// =============================================================

#[test]
fn no_targets_means_nothing() {
    assert_eq!(RevealPlan::choose(0, true), RevealPlan::Nothing);
    assert_eq!(RevealPlan::choose(0, false), RevealPlan::Nothing);
}

#[test]
fn observer_support_means_observe() {
    assert_eq!(RevealPlan::choose(3, true), RevealPlan::Observe);
}

#[test]
fn missing_observer_falls_back_to_reveal_all() {
    assert_eq!(RevealPlan::choose(3, false), RevealPlan::RevealAll);
}

// =============================================================
// Intersections
// =============================================================

#[test]
fn non_intersecting_entry_keeps_observing() {
    let el = FakeElement::new();
    assert!(!on_intersection(&el, false));
    assert!(!el.has_class("in-view"));
}

#[test]
fn intersecting_entry_reveals_and_stops() {
    let el = FakeElement::new();
    assert!(on_intersection(&el, true));
    assert!(el.has_class("in-view"));
}

#[test]
fn each_target_revealed_exactly_once() {
    let targets = [FakeElement::new(), FakeElement::new(), FakeElement::new()];
    let mut observed = [true; 3];
    let mut reveals = [0usize; 3];

    // Entries arrive in several batches, some repeated, some not yet visible.
    let batches: [&[(usize, bool)]; 4] =
        [&[(0, false), (1, true)], &[(0, true), (1, true)], &[(2, false)], &[(2, true), (0, true)]];
    for batch in batches {
        for &(i, visible) in batch {
            if !observed[i] {
                continue;
            }
            if on_intersection(&targets[i], visible) {
                observed[i] = false;
                reveals[i] += 1;
            }
        }
    }

    assert_eq!(reveals, [1, 1, 1]);
    assert!(targets.iter().all(|t| t.has_class("in-view") && t.class_count() == 1));
}

#[test]
fn reveal_all_marks_every_target() {
    let targets = [FakeElement::new(), FakeElement::with_class("fade")];
    reveal_all(&targets);
    assert!(targets.iter().all(|t| t.has_class("in-view")));
    assert!(targets[1].has_class("fade"));
}
