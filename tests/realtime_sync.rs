//! Real-time reaction sync integration tests
//!
//! These exercise the wired application state end to end: mutations
//! arriving through the REST handlers must fan out to every registered
//! connection, and a closed connection must drop out cleanly.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use chargedesk::backend::reactions::handlers::{add_reaction, remove_reaction, NewReaction};
use chargedesk::backend::realtime::registry::ConnectionHandle;
use chargedesk::backend::server::init::build_state;
use chargedesk::backend::server::state::AppState;
use chargedesk::backend::tickets::seed::load_demo_data;
use chargedesk::shared::reaction::ReactionAggregate;
use chargedesk::shared::realtime::ServerFrame;

fn seeded_state() -> AppState {
    let state = build_state();
    load_demo_data(&state.tickets, &state.reactions);
    state
}

fn reactions_in(frame: ServerFrame) -> (i64, Vec<ReactionAggregate>) {
    let ServerFrame::Reactions { resource_id, reactions } = frame;
    (resource_id, reactions)
}

#[tokio::test]
async fn rest_vote_fans_out_to_all_subscribers() {
    let state = seeded_state();
    let (first, mut first_rx) = ConnectionHandle::new();
    let (second, mut second_rx) = ConnectionHandle::new();
    state.registry.subscribe(2, first);
    state.registry.subscribe(2, second);

    let (_, Json(aggregate)) = add_reaction(
        State(state.tickets.clone()),
        State(state.reactions.clone()),
        Path(2),
        Json(NewReaction {
            emoji: "🔥".to_string(),
            created_by: "bob".to_string(),
        }),
    )
    .await
    .expect("vote should succeed");
    assert_eq!(aggregate.count, 1);

    for rx in [&mut first_rx, &mut second_rx] {
        let (resource_id, pushed) =
            reactions_in(rx.try_recv().expect("both subscribers get the push"));
        assert_eq!(resource_id, 2);
        let fire = pushed
            .iter()
            .find(|a| a.emoji == "🔥")
            .expect("snapshot contains the new aggregate");
        assert_eq!(fire.count, 1);
        assert!(fire.has_voter("bob"));
        // The snapshot is the full list: the three seeded aggregates ride along.
        assert_eq!(pushed.len(), 4);
    }
}

#[tokio::test]
async fn removal_over_rest_pushes_the_shrunken_snapshot() {
    let state = seeded_state();
    let seeded = state.reactions.list(2);
    let thumbs_up = seeded.iter().find(|a| a.emoji == "👍").unwrap().clone();

    let (watcher, mut watcher_rx) = ConnectionHandle::new();
    state.registry.subscribe(2, watcher);

    remove_reaction(
        State(state.tickets.clone()),
        State(state.reactions.clone()),
        Path((2, thumbs_up.id, "Michael Chen".to_string())),
    )
    .await
    .expect("removal should succeed");

    let (_, pushed) = reactions_in(watcher_rx.try_recv().unwrap());
    let after = pushed.iter().find(|a| a.id == thumbs_up.id).unwrap();
    assert_eq!(after.count, 1);
    assert!(!after.has_voter("Michael Chen"));
    assert!(after.has_voter("Sarah Johnson"));
}

#[tokio::test]
async fn disconnected_subscriber_is_not_delivered_to() {
    let state = seeded_state();
    let (gone, gone_rx) = ConnectionHandle::new();
    let (staying, mut staying_rx) = ConnectionHandle::new();
    let gone_id = gone.id();
    state.registry.subscribe(2, gone);
    state.registry.subscribe(2, staying);

    // Connection close: registry sweep plus the socket task dropping its
    // receiver half.
    state.registry.unsubscribe_all(gone_id);
    drop(gone_rx);

    state.reactions.add_voter(2, "🔥", "bob");

    assert_eq!(state.registry.subscriber_count(2), 1);
    let (_, pushed) = reactions_in(staying_rx.try_recv().unwrap());
    assert!(pushed.iter().any(|a| a.emoji == "🔥"));
}

#[tokio::test]
async fn pushes_arrive_in_mutation_order_and_stay_consistent() {
    let state = build_state();
    let (watcher, mut watcher_rx) = ConnectionHandle::new();
    state.registry.subscribe(9, watcher);

    state.reactions.add_voter(9, "👍", "alice");
    state.reactions.add_voter(9, "👍", "bob");
    let id = state.reactions.list(9)[0].id;
    state.reactions.remove_voter(9, id, "alice");
    state.reactions.remove_voter(9, id, "bob");

    let mut counts = Vec::new();
    while let Ok(frame) = watcher_rx.try_recv() {
        let (_, pushed) = reactions_in(frame);
        for aggregate in &pushed {
            assert_eq!(aggregate.count, aggregate.voters.len());
            assert!(aggregate.count >= 1);
        }
        counts.push(pushed.first().map(|a| a.count));
    }
    assert_eq!(counts, vec![Some(1), Some(2), Some(1), None]);
}
