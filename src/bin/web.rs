//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT,
//! DATA_FILE (path of the JSON store file).

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use fifa_league_web::{
    calculate_standings, generate_fixture, load_matches, load_players, save_matches, save_players,
    FileStore, FixtureMode, LeagueError, MatchId, Player, MIN_PLAYERS,
};
use serde::Deserialize;
use std::sync::RwLock;

/// App state: the store behind one lock. The write lock serializes the
/// load-mutate-save sequences so score updates never race roster edits.
type AppState = Data<RwLock<FileStore>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct AddPlayerBody {
    name: String,
    #[serde(rename = "imageUrl", default)]
    image_url: Option<String>,
}

#[derive(Deserialize)]
struct GenerateFixtureBody {
    #[serde(default)]
    mode: FixtureMode,
}

#[derive(Deserialize)]
struct SetScoreBody {
    #[serde(rename = "homeScore")]
    home_score: Option<u32>,
    #[serde(rename = "awayScore")]
    away_score: Option<u32>,
}

/// Path segment: player name (e.g. /api/players/{name})
#[derive(Deserialize)]
struct PlayerPath {
    name: String,
}

/// Path segment: serialized match id (e.g. /api/matches/{id}/score)
#[derive(Deserialize)]
struct MatchPath {
    id: String,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "fifa-league-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Current roster.
#[get("/api/players")]
async fn api_get_players(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(load_players(&*g))
}

/// Register a player. Names are trimmed and must be unique (case-insensitive).
#[post("/api/players")]
async fn api_add_player(state: AppState, body: Json<AddPlayerBody>) -> HttpResponse {
    let name = body.name.trim();
    if name.is_empty() {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({ "error": "Player name must not be empty" }));
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let mut players = load_players(&*g);
    if players.iter().any(|p| p.name.eq_ignore_ascii_case(name)) {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({ "error": "A player with this name already exists" }));
    }
    players.push(Player::new(name, body.image_url.clone()));
    save_players(&mut *g, &players);
    HttpResponse::Ok().json(players)
}

/// Remove a player from the roster. Existing matches keep their embedded
/// copies, so standings will report the stale reference until the fixture
/// is regenerated.
#[delete("/api/players/{name}")]
async fn api_remove_player(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let mut players = load_players(&*g);
    let before = players.len();
    players.retain(|p| !p.name.eq_ignore_ascii_case(&path.name));
    if players.len() == before {
        return HttpResponse::NotFound().json(serde_json::json!({ "error": "No such player" }));
    }
    save_players(&mut *g, &players);
    HttpResponse::Ok().json(players)
}

/// Current fixture (empty until generated).
#[get("/api/matches")]
async fn api_get_matches(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(load_matches(&*g))
}

/// Generate the round-robin fixture, overwriting any previous one
/// (entered scores are discarded with it).
#[post("/api/fixture/generate")]
async fn api_generate_fixture(
    state: AppState,
    body: Option<Json<GenerateFixtureBody>>,
) -> HttpResponse {
    let mode = body.map(|b| b.mode).unwrap_or_default();
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let players = load_players(&*g);
    if players.len() < MIN_PLAYERS {
        let e = LeagueError::InsufficientPlayers {
            found: players.len(),
        };
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }));
    }
    let matches = generate_fixture(&players, mode);
    save_matches(&mut *g, &matches);
    HttpResponse::Ok().json(matches)
}

/// Record (or clear) the scores of one match, identified by its id string.
#[put("/api/matches/{id}/score")]
async fn api_set_score(
    state: AppState,
    path: Path<MatchPath>,
    body: Json<SetScoreBody>,
) -> HttpResponse {
    let id: MatchId = match path.id.parse() {
        Ok(id) => id,
        Err(e) => return HttpResponse::BadRequest().json(serde_json::json!({ "error": e })),
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let mut matches = load_matches(&*g);
    let Some(m) = matches.iter_mut().find(|m| m.id == id) else {
        return HttpResponse::NotFound().json(serde_json::json!({ "error": "Match not found" }));
    };
    m.home_score = body.home_score;
    m.away_score = body.away_score;
    save_matches(&mut *g, &matches);
    HttpResponse::Ok().json(matches)
}

/// Standings recomputed from the stored roster and fixture.
#[get("/api/standings")]
async fn api_get_standings(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let players = load_players(&*g);
    let matches = load_matches(&*g);
    match calculate_standings(&players, &matches) {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_file() -> String {
    "fifa25-data.json".to_string()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let data_file = std::env::var("DATA_FILE").unwrap_or_else(|_| default_data_file());
    let bind = (host.as_str(), port);
    log::info!(
        "Starting server at http://{}:{} (data file: {})",
        bind.0,
        bind.1,
        data_file
    );

    let state = Data::new(RwLock::new(FileStore::open(data_file)));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_get_players)
            .service(api_add_player)
            .service(api_remove_player)
            .service(api_get_matches)
            .service(api_generate_fixture)
            .service(api_set_score)
            .service(api_get_standings)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
