//! Property-based tests for the registry, transition table, and machine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use std::collections::HashSet;

use proptest::prelude::*;
use trellis::{Action, Event, Machine, State, StateError, StateRegistry, Transition, TransitionTable};

prop_compose! {
    fn state_name()(name in "[a-z]{1,12}") -> String {
        name
    }
}

prop_compose! {
    fn state_names(max: usize)(names in prop::collection::hash_set("[a-z]{1,12}", 1..max)) -> Vec<String> {
        names.into_iter().collect()
    }
}

proptest! {
    #[test]
    fn registry_never_exceeds_capacity(names in state_names(40), cap in 1..20usize) {
        let mut registry = StateRegistry::new(cap);
        for name in &names {
            let _ = registry.add(name.as_str().into());
        }
        prop_assert!(registry.len() <= cap);
    }

    #[test]
    fn registering_twice_always_fails(name in state_name()) {
        let mut registry = StateRegistry::new(0);
        registry.add(name.as_str().into()).unwrap();

        let err = registry.add(name.as_str().into()).unwrap_err();
        prop_assert!(matches!(err, StateError::AlreadyExists(_)));
        prop_assert_eq!(registry.len(), 1);
    }

    #[test]
    fn keys_reflect_exactly_the_added_states(names in state_names(30)) {
        let mut registry = StateRegistry::new(0);
        for name in &names {
            registry.add(name.as_str().into()).unwrap();
        }

        let keys: HashSet<State> = registry.keys().into_iter().collect();
        let expected: HashSet<State> = names.iter().map(|n| n.as_str().into()).collect();
        prop_assert_eq!(keys, expected);
    }

    #[test]
    fn lookup_returns_the_earliest_match(
        from in state_name(),
        event in state_name(),
        targets in prop::collection::vec("[a-z]{1,12}", 1..8),
    ) {
        let mut table: TransitionTable<String> = TransitionTable::new();
        for target in &targets {
            table.append(Transition {
                from: from.as_str().into(),
                to: target.as_str().into(),
                event: event.as_str().into(),
                actions: Vec::new(),
            });
        }

        let found = table
            .lookup(&State::new(from.as_str()), &Event::new(event.as_str()))
            .unwrap();
        prop_assert_eq!(&found.to, &State::new(targets[0].as_str()));
    }

    #[test]
    fn lookup_never_matches_a_different_pair(
        from in state_name(),
        event in state_name(),
        other in state_name(),
    ) {
        prop_assume!(from != other && event != other);

        let mut table: TransitionTable<String> = TransitionTable::new();
        table.append(Transition {
            from: from.as_str().into(),
            to: "next".into(),
            event: event.as_str().into(),
            actions: Vec::new(),
        });

        prop_assert!(table
            .lookup(&State::new(other.as_str()), &Event::new(event.as_str()))
            .is_none());
        prop_assert!(table
            .lookup(&State::new(from.as_str()), &Event::new(other.as_str()))
            .is_none());
    }

    #[test]
    fn action_chains_run_in_declaration_order(suffixes in prop::collection::vec("[a-z]{1,4}", 0..6)) {
        let machine: Machine<String> = Machine::new("a");
        machine.register_state("b").unwrap();

        let actions = suffixes
            .iter()
            .map(|suffix| {
                let suffix = suffix.clone();
                Action::new(format!("append_{suffix}"), move |_ctx: &(), data: &mut String| {
                    data.push('_');
                    data.push_str(&suffix);
                    Ok(())
                })
            })
            .collect();
        machine.add_transition("a", "b", "go", actions);

        let mut data = String::from("seed");
        machine.trigger(&(), "go", &mut data).unwrap();

        let mut expected = String::from("seed");
        for suffix in &suffixes {
            expected.push('_');
            expected.push_str(suffix);
        }
        prop_assert_eq!(data, expected);
        prop_assert_eq!(machine.current_state(), "b");
    }

    #[test]
    fn failed_triggers_never_move_an_unconfigured_machine(
        start in state_name(),
        event in state_name(),
    ) {
        let machine: Machine<String> = Machine::new(start.as_str());
        let mut data = String::from("untouched");

        prop_assert!(machine.trigger(&(), event.as_str(), &mut data).is_err());
        prop_assert_eq!(machine.current_state(), State::new(start.as_str()));
        prop_assert_eq!(data, "untouched");
    }
}
