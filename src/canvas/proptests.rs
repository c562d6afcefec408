//! Property-based tests for the canvas state machine
//!
//! These tests verify key invariants hold across arbitrary transition
//! sequences.

use super::state::*;
use super::target::CanvasTarget;
use super::transition::*;
use crate::api::StateDescription;
use crate::inspector::{resolve_active_tab, InspectorTabs, TabStrip};
use proptest::prelude::*;
use std::collections::HashSet;

// ============================================================================
// Test Helpers
// ============================================================================

const ASSISTANTS: [&str; 3] = ["alpha", "beta", "gamma"];

/// Each assistant has its own, disjoint inspector ids plus `config`
fn test_catalog() -> InspectorCatalog {
    let mut catalog = InspectorCatalog::default();
    for assistant in ASSISTANTS {
        catalog.register(
            assistant,
            &[
                StateDescription::new("config", "Config"),
                StateDescription::new(format!("{assistant}-1"), "One"),
                StateDescription::new(format!("{assistant}-2"), "Two"),
            ],
        );
    }
    catalog
}

fn run(targets: &[CanvasTarget], catalog: &InspectorCatalog) -> CanvasState {
    targets.iter().fold(CanvasState::default(), |state, target| {
        transition(&state, target, catalog).new_state
    })
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_panel() -> impl Strategy<Value = Panel> {
    prop_oneof![
        Just(Panel::None),
        Just(Panel::Conversation),
        Just(Panel::Assistant),
    ]
}

fn arb_assistant_id() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(ASSISTANTS.to_vec()).prop_map(str::to_string),
        "[a-z]{1,6}",
    ]
}

fn arb_state_id() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("config".to_string()),
        (
            prop::sample::select(ASSISTANTS.to_vec()),
            prop::sample::select(vec!["1", "2", "3"])
        )
            .prop_map(|(assistant, n)| format!("{assistant}-{n}")),
        "[a-z]{1,6}",
    ]
}

fn arb_target() -> impl Strategy<Value = CanvasTarget> {
    (
        proptest::option::of(arb_panel()),
        proptest::option::of(arb_assistant_id()),
        proptest::option::of(arb_state_id()),
    )
        .prop_map(|(panel, assistant_id, assistant_state_id)| CanvasTarget {
            panel,
            assistant_id,
            assistant_state_id,
        })
}

fn arb_targets() -> impl Strategy<Value = Vec<CanvasTarget>> {
    proptest::collection::vec(arb_target(), 0..20)
}

fn arb_description() -> impl Strategy<Value = StateDescription> {
    prop_oneof![
        1 => Just(StateDescription::new("config", "Config")),
        4 => ("[a-z]{1,8}", "[A-Za-z ]{1,12}").prop_map(|(id, name)| StateDescription::new(id, name)),
    ]
}

/// Ordered descriptions with unique non-`config` ids
fn arb_descriptions() -> impl Strategy<Value = Vec<StateDescription>> {
    proptest::collection::vec(arb_description(), 0..8).prop_map(|mut descriptions| {
        let mut seen = HashSet::new();
        descriptions.retain(|d| d.is_config() || seen.insert(d.id.clone()));
        descriptions
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// A selected inspector always has an assistant target on the assistant panel
    #[test]
    fn prop_invariant_holds(targets in arb_targets()) {
        let catalog = test_catalog();
        let mut state = CanvasState::default();
        for target in &targets {
            state = transition(&state, target, &catalog).new_state;
            prop_assert!(state.is_consistent(), "inconsistent state {state:?}");
        }
    }

    /// Switching assistants never carries a tab id the new assistant lacks
    #[test]
    fn prop_no_cross_assistant_leakage(
        prefix in arb_targets(),
        from in prop::sample::select(ASSISTANTS.to_vec()),
        to in prop::sample::select(ASSISTANTS.to_vec()),
    ) {
        prop_assume!(from != to);
        let catalog = test_catalog();

        let mut targets = prefix;
        targets.push(CanvasTarget::assistant(from).with_assistant_state_id(format!("{from}-1")));
        targets.push(CanvasTarget::default().with_assistant_id(to));
        let state = run(&targets, &catalog);

        prop_assert_eq!(state.assistant_id(), Some(to));
        if let Some(selected) = state.assistant_state_id() {
            prop_assert!(catalog.contains(to, selected));
        }

        let expected = format!("{to}-1");
        let effective = resolve_active_tab(&state, catalog.get(to).unwrap_or_default());
        prop_assert_eq!(effective, Some(expected.as_str()));
    }

    /// Re-applying a target that was just applied changes nothing
    #[test]
    fn prop_transition_idempotent(prefix in arb_targets(), target in arb_target()) {
        let catalog = test_catalog();
        let state = run(&prefix, &catalog);

        let once = transition(&state, &target, &catalog);
        let twice = transition(&once.new_state, &target, &catalog);

        prop_assert!(!twice.changed);
        prop_assert_eq!(twice.new_state, once.new_state);
    }

    /// `changed` is exactly state inequality
    #[test]
    fn prop_changed_flag_matches(prefix in arb_targets(), target in arb_target()) {
        let catalog = test_catalog();
        let state = run(&prefix, &catalog);
        let result = transition(&state, &target, &catalog);
        prop_assert_eq!(result.changed, result.new_state != state);
    }

    /// Closing always clears every target
    #[test]
    fn prop_close_clears(prefix in arb_targets()) {
        let catalog = test_catalog();
        let state = run(&prefix, &catalog);
        let closed = transition(&state, &CanvasTarget::closed(), &catalog).new_state;
        prop_assert_eq!(closed, CanvasState::default());
    }

    /// `config` is never rendered as a tab, wherever it appears
    #[test]
    fn prop_config_never_rendered(
        descriptions in arb_descriptions(),
        selected in proptest::option::of(arb_state_id()),
    ) {
        let state = CanvasState::new(Panel::Assistant, Some("alpha".to_string()), selected);
        let tabs = InspectorTabs::new("conv-1", "alpha", &descriptions);

        match tabs.render(&state) {
            TabStrip::Tabs { tabs, active, .. } => {
                prop_assert!(tabs.iter().all(|tab| tab.id != "config"));
                prop_assert_ne!(active.as_str(), "config");
                prop_assert_eq!(tabs.iter().filter(|tab| tab.selected).count(), 1);
            }
            TabStrip::Empty { .. } => {
                prop_assert!(descriptions.iter().all(StateDescription::is_config));
            }
            TabStrip::Hidden => prop_assert!(false, "assistant is targeted"),
        }
    }
}
