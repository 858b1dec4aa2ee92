use axum::{routing::{get, post}, Router};
use super::handler::{
    draw_card, end_game, get_leaderboard, get_stats, health, start_game, submit_answer,
    GameState,
};

pub fn router(state: GameState) -> Router {
    Router::new()
        .route("/api/start-game",                    post(start_game))
        .route("/api/draw-card/:game_id/:difficulty", post(draw_card))
        .route("/api/answer/:game_id",               post(submit_answer))
        .route("/api/stats/:game_id",                get(get_stats))
        .route("/api/end-game/:game_id",             post(end_game))
        .route("/api/leaderboard",                   get(get_leaderboard))
        .route("/api/health",                        get(health))
        .with_state(state)
}
