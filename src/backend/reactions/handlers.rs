//! Reaction HTTP Handlers
//!
//! REST surface for reading and mutating a ticket's reactions. Both
//! mutating endpoints commit through the store, whose change listener
//! broadcasts to subscribers before the HTTP response is returned, so a
//! caller that immediately reads its own subscription sees its write.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::backend::error::ApiError;
use crate::backend::reactions::store::ReactionStore;
use crate::backend::tickets::store::TicketStore;
use crate::shared::reaction::ReactionAggregate;

/// Payload for POST /api/tickets/{id}/reactions
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReaction {
    pub emoji: String,
    pub created_by: String,
}

/// List a ticket's reactions (GET /api/tickets/{id}/reactions)
pub async fn list_reactions(
    State(tickets): State<Arc<TicketStore>>,
    State(reactions): State<Arc<ReactionStore>>,
    Path(ticket_id): Path<i64>,
) -> Result<Json<Vec<ReactionAggregate>>, ApiError> {
    ensure_ticket(&tickets, ticket_id)?;
    Ok(Json(reactions.list(ticket_id)))
}

/// Record a vote (POST /api/tickets/{id}/reactions)
///
/// Creates the aggregate on first vote for that emoji, merges the voter
/// in otherwise. Voting twice is accepted and returns the aggregate
/// unchanged.
pub async fn add_reaction(
    State(tickets): State<Arc<TicketStore>>,
    State(reactions): State<Arc<ReactionStore>>,
    Path(ticket_id): Path<i64>,
    Json(new): Json<NewReaction>,
) -> Result<(StatusCode, Json<ReactionAggregate>), ApiError> {
    ensure_ticket(&tickets, ticket_id)?;
    if new.emoji.trim().is_empty() {
        return Err(ApiError::invalid_input("emoji must not be empty"));
    }
    if new.created_by.trim().is_empty() {
        return Err(ApiError::invalid_input("createdBy must not be empty"));
    }

    let aggregate = reactions.add_voter(ticket_id, &new.emoji, &new.created_by);
    Ok((StatusCode::CREATED, Json(aggregate)))
}

/// Withdraw a vote
/// (DELETE /api/tickets/{ticketId}/reactions/{reactionId}/voters/{voter})
///
/// Responds 200 with the updated aggregate while it still has voters, and
/// 204 when the aggregate is gone, either because this was its last voter
/// or because the id was already unknown.
pub async fn remove_reaction(
    State(tickets): State<Arc<TicketStore>>,
    State(reactions): State<Arc<ReactionStore>>,
    Path((ticket_id, reaction_id, voter)): Path<(i64, i64, String)>,
) -> Result<Response, ApiError> {
    ensure_ticket(&tickets, ticket_id)?;

    match reactions.remove_voter(ticket_id, reaction_id, &voter) {
        Some(aggregate) => Ok(Json(aggregate).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

fn ensure_ticket(tickets: &TicketStore, id: i64) -> Result<(), ApiError> {
    tickets
        .get_ticket(id)
        .map(|_| ())
        .ok_or_else(|| ApiError::not_found("ticket"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::ticket::NewTicket;

    fn stores() -> (Arc<TicketStore>, Arc<ReactionStore>) {
        let tickets = Arc::new(TicketStore::new());
        tickets.create_ticket(NewTicket {
            title: "Connection errors during charging".to_string(),
            description: "d".to_string(),
            location: "Metro Charging Hub".to_string(),
            location_details: "123 Electric Ave".to_string(),
            status: "open".to_string(),
            priority: "high".to_string(),
            charger_model: "PowerFlow DC5000".to_string(),
            charger_type: "DC Fast Charger".to_string(),
            charger_serial_number: "PF-2023-76548".to_string(),
            reported_by: "Michael Chen".to_string(),
            assigned_to: None,
            installed_at: None,
            last_maintenance: None,
            firmware_version: None,
            connectivity: None,
            site_contact: None,
            contact_phone: None,
            operating_hours: None,
        });
        (tickets, Arc::new(ReactionStore::new()))
    }

    #[tokio::test]
    async fn test_add_reaction_creates_aggregate() {
        let (tickets, reactions) = stores();
        let (status, Json(aggregate)) = add_reaction(
            State(tickets),
            State(reactions.clone()),
            Path(1),
            Json(NewReaction {
                emoji: "👍".to_string(),
                created_by: "alice".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(aggregate.count, 1);
        assert_eq!(reactions.list(1).len(), 1);
    }

    #[tokio::test]
    async fn test_add_reaction_unknown_ticket_is_404() {
        let (tickets, reactions) = stores();
        let result = add_reaction(
            State(tickets),
            State(reactions),
            Path(42),
            Json(NewReaction {
                emoji: "👍".to_string(),
                created_by: "alice".to_string(),
            }),
        )
        .await;
        assert!(matches!(result, Err(ApiError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_add_reaction_rejects_blank_fields_before_store() {
        let (tickets, reactions) = stores();
        let result = add_reaction(
            State(tickets),
            State(reactions.clone()),
            Path(1),
            Json(NewReaction {
                emoji: "".to_string(),
                created_by: "alice".to_string(),
            }),
        )
        .await;
        assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
        assert!(reactions.list(1).is_empty());
    }

    #[tokio::test]
    async fn test_remove_last_voter_responds_no_content() {
        let (tickets, reactions) = stores();
        let aggregate = reactions.add_voter(1, "👍", "alice");

        let response = remove_reaction(
            State(tickets),
            State(reactions.clone()),
            Path((1, aggregate.id, "alice".to_string())),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(reactions.list(1).is_empty());
    }

    #[tokio::test]
    async fn test_remove_with_remaining_voters_returns_aggregate() {
        let (tickets, reactions) = stores();
        let aggregate = reactions.add_voter(1, "👍", "alice");
        reactions.add_voter(1, "👍", "bob");

        let response = remove_reaction(
            State(tickets),
            State(reactions),
            Path((1, aggregate.id, "alice".to_string())),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
