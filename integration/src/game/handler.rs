use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use strategy_card_game::{CardCatalog, Difficulty, GameSession, RankingTable};

// ---------------------------------------------------------------------------
// Shared state: in-memory session registry + process-wide rankings
// ---------------------------------------------------------------------------

// The mutexes serialize concurrent finalize/record calls; the core itself
// assumes one caller per session at a time.
#[derive(Clone)]
pub struct GameState {
    pub catalog: Arc<CardCatalog>,
    pub sessions: Arc<Mutex<HashMap<String, GameSession>>>,
    pub rankings: Arc<Mutex<RankingTable>>,
}

pub fn new_state() -> GameState {
    GameState {
        catalog: Arc::new(CardCatalog::standard()),
        sessions: Arc::new(Mutex::new(HashMap::new())),
        rankings: Arc::new(Mutex::new(RankingTable::new())),
    }
}

// ---------------------------------------------------------------------------
// Body types
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct StartGameRequest {
    pub player_name: Option<String>,
}

#[derive(Deserialize)]
pub struct AnswerRequest {
    pub answer_index: i64,
}

// ---------------------------------------------------------------------------
// Difficulty parsing (case-insensitive; the core only takes the enum)
// ---------------------------------------------------------------------------

fn parse_difficulty(s: &str) -> Option<Difficulty> {
    match s.to_lowercase().as_str() {
        "easy"         => Some(Difficulty::Easy),
        "intermediate" => Some(Difficulty::Intermediate),
        "hard"         => Some(Difficulty::Hard),
        _ => None,
    }
}

fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Game not found" })),
    )
}

// ---------------------------------------------------------------------------
// POST /api/start-game   body: { player_name }
// ---------------------------------------------------------------------------

pub async fn start_game(
    State(state): State<GameState>,
    Json(body): Json<StartGameRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    // Missing name gets the sentinel; an explicitly empty one is rejected.
    let player_name = body.player_name.unwrap_or_else(|| "Anonymous".to_string());
    if player_name.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Player name required" })),
        ));
    }

    let mut sessions = state.sessions.lock().unwrap();
    // Simple id scheme; swap in UUIDs when ids must be unguessable.
    let game_id = format!("{}_{}", player_name, sessions.len());
    let session = GameSession::new(player_name.clone(), Arc::clone(&state.catalog), None);
    sessions.insert(game_id.clone(), session);

    Ok(Json(json!({
        "game_id":     game_id,
        "player_name": player_name,
        "message":     format!("Welcome, {player_name}!"),
    })))
}

// ---------------------------------------------------------------------------
// POST /api/draw-card/:game_id/:difficulty
// ---------------------------------------------------------------------------

pub async fn draw_card(
    State(state): State<GameState>,
    Path((game_id, difficulty)): Path<(String, String)>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let difficulty = parse_difficulty(&difficulty).ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid difficulty" })),
        )
    })?;

    let mut sessions = state.sessions.lock().unwrap();
    let session = sessions.get_mut(&game_id).ok_or_else(not_found)?;

    let card = session.draw_card(difficulty);

    // Strip is_correct / explanation / points from answers sent to the client.
    let public_answers: Vec<Value> = card
        .answers
        .iter()
        .enumerate()
        .map(|(i, a)| json!({ "id": i, "text": a.text }))
        .collect();

    Ok(Json(json!({
        "card_id":      card.title,
        "title":        card.title,
        "description":  card.description,
        "category":     card.category,
        "difficulty":   difficulty.to_string().to_uppercase(),
        "impact":       card.impact,
        "answers":      public_answers,
        "cards_played": session.cards_played(),
    })))
}

// ---------------------------------------------------------------------------
// POST /api/answer/:game_id   body: { answer_index }
// ---------------------------------------------------------------------------

pub async fn submit_answer(
    State(state): State<GameState>,
    Path(game_id): Path<String>,
    Json(body): Json<AnswerRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let mut sessions = state.sessions.lock().unwrap();
    let session = sessions.get_mut(&game_id).ok_or_else(not_found)?;

    let outcome = session.submit_answer(body.answer_index as isize);
    let stats = session.stats();

    Ok(Json(json!({
        "is_correct":    outcome.correct,
        "points_earned": outcome.points,
        "explanation":   outcome.explanation,
        "total_score":   stats.score,
        "accuracy":      format!("{:.1}%", stats.accuracy),
        "cards_won":     stats.cards_won,
        "cards_played":  stats.cards_played,
        "streak_bonus":  stats.streak_bonus,
    })))
}

// ---------------------------------------------------------------------------
// GET /api/stats/:game_id
// ---------------------------------------------------------------------------

pub async fn get_stats(
    State(state): State<GameState>,
    Path(game_id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let sessions = state.sessions.lock().unwrap();
    let session = sessions.get(&game_id).ok_or_else(not_found)?;
    let stats = session.stats();

    Ok(Json(json!({
        "player_name":         stats.player_name,
        "total_score":         stats.score,
        "cards_played":        stats.cards_played,
        "cards_won":           stats.cards_won,
        "accuracy":            format!("{:.1}%", stats.accuracy),
        "easy_streak":         stats.easy_streak,
        "intermediate_streak": stats.intermediate_streak,
        "hard_streak":         stats.hard_streak,
        "streak_bonus":        stats.streak_bonus,
    })))
}

// ---------------------------------------------------------------------------
// POST /api/end-game/:game_id
// ---------------------------------------------------------------------------

pub async fn end_game(
    State(state): State<GameState>,
    Path(game_id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    // The session is discarded whatever happens after this point.
    let session = state.sessions.lock().unwrap().remove(&game_id);
    let mut session = session.ok_or_else(not_found)?;

    let report = session.finalize();

    let mut rankings = state.rankings.lock().unwrap();
    rankings.record(
        report.stats.player_name.clone(),
        report.final_score,
        report.stats.accuracy,
        report.stats.cards_played,
    );
    let rank = rankings.rank_of(&report.stats.player_name);

    Ok(Json(json!({
        "player_name":          report.stats.player_name,
        "final_score":          report.final_score,
        "accuracy":             format!("{:.1}%", report.stats.accuracy),
        "cards_played":         report.stats.cards_played,
        "cards_won":            report.stats.cards_won,
        "streak_bonus_applied": report.streak_bonus_applied,
        "rank":                 rank,
    })))
}

// ---------------------------------------------------------------------------
// GET /api/leaderboard
// ---------------------------------------------------------------------------

pub async fn get_leaderboard(State(state): State<GameState>) -> Json<Value> {
    let rankings = state.rankings.lock().unwrap();
    let board: Vec<Value> = rankings
        .leaderboard(10)
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            json!({
                "rank":         i + 1,
                "name":         entry.name,
                "score":        entry.score,
                "accuracy":     format!("{:.1}%", entry.accuracy),
                "cards_played": entry.cards_played,
            })
        })
        .collect();

    Json(json!({ "leaderboard": board }))
}

// ---------------------------------------------------------------------------
// GET /api/health
// ---------------------------------------------------------------------------

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "service": "strategy-card-game" }))
}
