mod common;

use pokesearch::ui::mvi::Reducer;
use pokesearch::ui::search::{
    SearchIntent, SearchMode, SearchPhase, SearchReducer, SearchResult, SearchState,
};

fn reduce_all(state: SearchState, intents: Vec<SearchIntent>) -> SearchState {
    intents
        .into_iter()
        .fold(state, |state, intent| SearchReducer::reduce(state, intent))
}

fn typed(text: &str) -> SearchState {
    reduce_all(
        SearchState::default(),
        text.chars().map(|ch| SearchIntent::Input { ch }).collect(),
    )
}

fn loading(text: &str) -> SearchState {
    SearchReducer::reduce(typed(text), SearchIntent::Submit)
}

#[test]
fn empty_name_submit_sets_validation_and_stays_idle() {
    let state = SearchReducer::reduce(SearchState::default(), SearchIntent::Submit);
    assert_eq!(state.phase, SearchPhase::Idle);
    assert_eq!(state.validation.as_deref(), Some("Name is required"));
    assert!(state.in_flight().is_none());
    assert_eq!(state.last_request_id, 0);
}

#[test]
fn whitespace_name_counts_as_empty() {
    let state = SearchReducer::reduce(typed("   "), SearchIntent::Submit);
    assert_eq!(state.phase, SearchPhase::Idle);
    assert_eq!(state.validation.as_deref(), Some("Name is required"));
}

#[test]
fn empty_type_submit_sets_validation() {
    let state = reduce_all(
        SearchState::default(),
        vec![SearchIntent::SwitchMode, SearchIntent::Submit],
    );
    assert_eq!(state.mode, SearchMode::Type);
    assert_eq!(state.phase, SearchPhase::Idle);
    assert_eq!(state.validation.as_deref(), Some("Type is required"));
}

#[test]
fn empty_submit_after_failure_keeps_failure() {
    let state = loading("xyzzy");
    let state = SearchReducer::reduce(state, SearchIntent::Rejected { request_id: 1 });
    let state = reduce_all(state, vec![SearchIntent::Clear, SearchIntent::Submit]);
    assert!(matches!(state.phase, SearchPhase::Failed { .. }));
    assert_eq!(state.validation.as_deref(), Some("Name is required"));
}

#[test]
fn editing_clears_validation() {
    let state = SearchReducer::reduce(SearchState::default(), SearchIntent::Submit);
    let state = SearchReducer::reduce(state, SearchIntent::Input { ch: 'p' });
    assert!(state.validation.is_none());
}

#[test]
fn valid_submit_enters_loading_with_normalized_query() {
    let state = loading("  Pikachu  ");
    let request = state.in_flight().expect("loading");
    assert_eq!(request.query, "pikachu");
    assert_eq!(request.mode, SearchMode::Name);
    assert_eq!(request.id, 1);
    assert!(state.validation.is_none());
}

#[test]
fn submit_while_loading_is_ignored() {
    let state = loading("pikachu");
    let again = SearchReducer::reduce(state.clone(), SearchIntent::Submit);
    assert_eq!(again, state);
}

#[test]
fn resolved_record_populates_only_record() {
    let state = SearchReducer::reduce(
        loading("pikachu"),
        SearchIntent::Resolved {
            request_id: 1,
            result: SearchResult::Record(Box::new(common::pikachu())),
        },
    );
    assert_eq!(state.record().map(|p| p.id), Some(25));
    assert!(state.references().is_none());
    assert!(state.error().is_none());
}

#[test]
fn resolved_list_populates_only_list() {
    let state = reduce_all(
        SearchState::default(),
        vec![
            SearchIntent::SwitchMode,
            SearchIntent::NextCategory,
            SearchIntent::Submit,
            SearchIntent::Resolved {
                request_id: 1,
                result: SearchResult::References(common::fire_references()),
            },
        ],
    );
    assert_eq!(state.references().map(<[_]>::len), Some(6));
    assert!(state.record().is_none());
    assert!(state.error().is_none());
}

#[test]
fn rejection_sets_name_banner_and_clears_result() {
    let state = SearchReducer::reduce(
        loading("pikachu"),
        SearchIntent::Resolved {
            request_id: 1,
            result: SearchResult::Record(Box::new(common::pikachu())),
        },
    );
    let state = reduce_all(
        state,
        vec![
            SearchIntent::Clear,
            SearchIntent::Input { ch: 'x' },
            SearchIntent::Submit,
            SearchIntent::Rejected { request_id: 2 },
        ],
    );
    assert_eq!(
        state.error(),
        Some("Pokemon not found. Please check the name and try again.")
    );
    assert!(state.record().is_none());
}

#[test]
fn rejection_in_type_mode_names_the_type() {
    let state = reduce_all(
        SearchState::default(),
        vec![
            SearchIntent::SwitchMode,
            SearchIntent::PreviousCategory,
            SearchIntent::Submit,
            SearchIntent::Rejected { request_id: 1 },
        ],
    );
    assert_eq!(state.error(), Some("No Pokemon found for type: fairy"));
}

#[test]
fn switching_mode_resets_from_every_phase() {
    let record = SearchReducer::reduce(
        loading("pikachu"),
        SearchIntent::Resolved {
            request_id: 1,
            result: SearchResult::Record(Box::new(common::pikachu())),
        },
    );
    let failed = SearchReducer::reduce(loading("xyzzy"), SearchIntent::Rejected { request_id: 1 });
    let invalid = SearchReducer::reduce(SearchState::default(), SearchIntent::Submit);
    let in_flight = loading("pikachu");

    for state in [record, failed, invalid, in_flight, typed("abc")] {
        let previous_mode = state.mode;
        let switched = SearchReducer::reduce(state, SearchIntent::SwitchMode);
        assert_eq!(switched.mode, previous_mode.toggled());
        assert_eq!(switched.phase, SearchPhase::Idle);
        assert!(switched.validation.is_none());
        assert!(switched.query.is_empty());
        assert!(switched.category.is_none());
        assert!(switched.record().is_none());
        assert!(switched.references().is_none());
        assert!(switched.error().is_none());
    }
}

#[test]
fn outcome_for_abandoned_request_is_dropped_after_mode_switch() {
    let state = reduce_all(
        loading("pikachu"),
        vec![
            SearchIntent::SwitchMode,
            SearchIntent::Resolved {
                request_id: 1,
                result: SearchResult::Record(Box::new(common::pikachu())),
            },
        ],
    );
    assert_eq!(state.phase, SearchPhase::Idle);
    assert_eq!(state.last_request_id, 1);
}

#[test]
fn request_ids_keep_increasing_across_mode_switches() {
    let state = reduce_all(
        loading("pikachu"),
        vec![
            SearchIntent::SwitchMode,
            SearchIntent::SwitchMode,
            SearchIntent::Input { ch: 'a' },
            SearchIntent::Submit,
        ],
    );
    assert_eq!(state.in_flight().map(|r| r.id), Some(2));
}
