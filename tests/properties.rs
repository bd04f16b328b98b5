//! Property-based tests for the query layer.
//!
//! These check that lookups agree with a direct scan of the collections for
//! arbitrary states, using proptest.

use pagestore::{ComponentRef, Page, Project, SelectedElement, StoreState};
use pagestore::{AppState, Query, QueryName, QueryOutput};
use proptest::prelude::*;

// ============================================================================
// Arbitrary generators
// ============================================================================

fn arb_token() -> impl Strategy<Value = String> {
    "[a-d]{1,2}"
}

fn arb_path() -> impl Strategy<Value = String> {
    "/[a-c]{0,2}"
}

fn arb_page() -> impl Strategy<Value = Page> {
    (arb_token(), arb_token(), arb_path()).prop_map(|(id, name, path)| Page::new(id, name, path))
}

fn arb_state() -> impl Strategy<Value = StoreState> {
    (
        prop::collection::vec(arb_page(), 0..8),
        prop::collection::vec(arb_token().prop_map(|name| ComponentRef::new(name)), 0..8),
        prop::collection::vec(arb_token().prop_map(|id| SelectedElement::new(id)), 0..5),
    )
        .prop_map(|(pages, components, selected_elements)| {
            StoreState::new(Project { pages, components }, AppState { selected_elements })
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn page_index_points_at_first_match(state in arb_state(), id in arb_token()) {
        let getters = state.getters();
        let expected = state.project.pages.iter().position(|p| p.id == id);

        prop_assert_eq!(getters.get_page_index_by_id(&id), expected);
        prop_assert_eq!(getters.page_exists(&id), expected.is_some());
        prop_assert_eq!(getters.get_page_by_id(&id), expected.map(|i| &state.project.pages[i]));
    }

    #[test]
    fn selected_index_points_at_first_match(state in arb_state(), id in arb_token()) {
        let getters = state.getters();
        let selected = &state.app.selected_elements;
        let expected = selected.iter().position(|el| el.id == id);

        prop_assert_eq!(getters.get_selected_el_index_by_id(&id), expected);
        if let Some(i) = expected {
            prop_assert!(selected[..i].iter().all(|el| el.id != id));
        }
    }

    #[test]
    fn every_selected_element_is_found(state in arb_state()) {
        let getters = state.getters();
        for el in &state.app.selected_elements {
            let index = getters.get_selected_el_index_by_id(&el.id).unwrap();
            prop_assert_eq!(&state.app.selected_elements[index].id, &el.id);
        }
    }

    #[test]
    fn every_stored_page_is_found(state in arb_state()) {
        let getters = state.getters();
        for page in &state.project.pages {
            let found = getters.get_page_by_id(&page.id).unwrap();
            prop_assert_eq!(&found.id, &page.id);
            prop_assert!(getters.name_in_use(&page.name));
            prop_assert!(getters.path_in_use(&page.path));
        }
    }

    #[test]
    fn in_use_checks_match_any_scan(
        state in arb_state(),
        name in arb_token(),
        path in arb_path()
    ) {
        let getters = state.getters();
        let pages = &state.project.pages;
        prop_assert_eq!(getters.name_in_use(&name), pages.iter().any(|p| p.name == name));
        prop_assert_eq!(getters.path_in_use(&path), pages.iter().any(|p| p.path == path));
    }

    #[test]
    fn component_queries_agree(state in arb_state(), name in arb_token(), index in 0usize..10) {
        let getters = state.getters();
        let components = &state.project.components;

        let expected = components.iter().position(|c| c.name == name);
        prop_assert_eq!(getters.get_component_ref_index_by_name(&name), expected);
        prop_assert_eq!(getters.component_exist(&name), expected.is_some());
        prop_assert_eq!(getters.get_component_ref_by_name(&name), expected.map(|i| &components[i]));
        prop_assert_eq!(getters.get_component_ref_by_index(index), components.get(index));
    }

    #[test]
    fn queries_are_repeatable(state in arb_state(), arg in arb_token()) {
        let before = state.clone();
        let getters = state.getters();

        for name in QueryName::ALL {
            let argument = if name == QueryName::GetComponentRefByIndex {
                "0".to_string()
            } else {
                arg.clone()
            };
            let query = Query::new(name, argument);
            let first: QueryOutput = query.evaluate(&getters).unwrap();
            let second = query.evaluate(&getters).unwrap();
            prop_assert_eq!(first, second);
        }
        prop_assert_eq!(before, state);
    }
}
