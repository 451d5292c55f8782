//! Axum HTTP server: the presentation boundary for one lotto session.
//!
//! The session and its RNG live in [`AppContext`], created once at the
//! composition root and shared as `Arc<AppContext>`. Handlers are the only
//! write path to the session.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/session` | Current tickets, phase, and result if revealed |
//! | POST | `/purchase` | Buy tickets for a currency amount (multiple of 1000) |
//! | POST | `/reveal` | Draw winning numbers; records history when enabled |
//! | POST | `/reset` | Start over |
//! | GET | `/history` | Recorded sessions, most recent first |
//! | GET | `/statistics` | Aggregates over recorded sessions |
//! | POST | `/evaluate` | Prize tier of one ticket against given numbers |

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use uuid::Uuid;

use crate::api_computations::*;
use crate::purchase_input::parse_purchase_amount;
use crate::session::SessionState;
use crate::statistics::{history_statistics, HistoryStatistics};
use crate::storage::HistoryStore;
use crate::types::{Ticket, WinningDraw};

struct LiveSession {
    state: SessionState,
    rng: SmallRng,
}

/// Everything the handlers share: the single live session and the history.
pub struct AppContext {
    session: Mutex<LiveSession>,
    history: HistoryStore,
    record_history: bool,
}

impl AppContext {
    /// `seed = None` seeds the RNG from OS entropy.
    pub fn new(history: HistoryStore, record_history: bool, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => SmallRng::from_os_rng(),
        };
        Self {
            session: Mutex::new(LiveSession {
                state: SessionState::new(),
                rng,
            }),
            history,
            record_history,
        }
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Session mutations are single assignments or extends, so a poisoned
    /// lock still guards a consistent session.
    fn lock_session(&self) -> MutexGuard<'_, LiveSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub type AppState = Arc<AppContext>;

type ApiError = (StatusCode, Json<serde_json::Value>);

pub fn create_router(ctx: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health_check))
        .route("/session", get(handle_get_session))
        .route("/purchase", post(handle_purchase))
        .route("/reveal", post(handle_reveal))
        .route("/reset", post(handle_reset))
        .route("/history", get(handle_get_history))
        .route("/statistics", get(handle_get_statistics))
        .route("/evaluate", post(handle_evaluate))
        .layer(cors)
        .with_state(ctx)
}

// ── Request types ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct PurchaseRequest {
    amount: String,
}

#[derive(Deserialize)]
struct EvaluateRequest {
    ticket: Vec<u8>,
    numbers: Vec<u8>,
    bonus_number: u8,
}

fn error_response(status: StatusCode, msg: &str) -> ApiError {
    (status, Json(serde_json::json!({ "error": msg })))
}

// ── GET handlers ────────────────────────────────────────────────────

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

async fn handle_get_session(State(ctx): State<AppState>) -> Json<SessionView> {
    let live = ctx.lock_session();
    Json(compute_session_view(&live.state))
}

async fn handle_get_history(State(ctx): State<AppState>) -> Json<Vec<HistoryEntryView>> {
    Json(compute_history_view(&ctx.history.list()))
}

async fn handle_get_statistics(State(ctx): State<AppState>) -> Json<HistoryStatistics> {
    Json(history_statistics(&ctx.history.list()))
}

// ── POST handlers ───────────────────────────────────────────────────

async fn handle_purchase(
    State(ctx): State<AppState>,
    Json(req): Json<PurchaseRequest>,
) -> Result<Json<SessionView>, ApiError> {
    let count = parse_purchase_amount(&req.amount)
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, &e.to_string()))?;

    let mut live = ctx.lock_session();
    let LiveSession { state, rng } = &mut *live;
    state.purchase(rng, count);
    Ok(Json(compute_session_view(state)))
}

async fn handle_reveal(State(ctx): State<AppState>) -> Result<Json<SessionView>, ApiError> {
    let (view, entry) = {
        let mut live = ctx.lock_session();
        let LiveSession { state, rng } = &mut *live;
        if state.reveal(rng).is_none() {
            return Err(error_response(
                StatusCode::CONFLICT,
                "Purchase tickets before revealing the result",
            ));
        }
        let entry = if ctx.record_history {
            state.history_entry(Uuid::new_v4().to_string(), Utc::now())
        } else {
            None
        };
        (compute_session_view(state), entry)
    };

    if let Some(entry) = entry {
        ctx.history.append(entry);
    }
    Ok(Json(view))
}

async fn handle_reset(State(ctx): State<AppState>) -> Json<SessionView> {
    let mut live = ctx.lock_session();
    live.state.reset();
    Json(compute_session_view(&live.state))
}

async fn handle_evaluate(
    Json(req): Json<EvaluateRequest>,
) -> Result<Json<EvaluationView>, ApiError> {
    let bad_request = |e: crate::error::TicketError| {
        error_response(StatusCode::BAD_REQUEST, &e.to_string())
    };
    let ticket = Ticket::new(&req.ticket).map_err(bad_request)?;
    let numbers = Ticket::new(&req.numbers).map_err(bad_request)?;
    let draw = WinningDraw::new(numbers, req.bonus_number).map_err(bad_request)?;
    Ok(Json(compute_evaluation(&ticket, &draw)))
}
