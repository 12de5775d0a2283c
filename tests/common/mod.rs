#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::State,
    http::{HeaderMap, Method, Request, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use hr_panel::{config::Config, routes, AppState};
use serde_json::{json, Value as JsonValue};
use tempfile::TempDir;
use tower::ServiceExt;

pub const INIT_DATA: &str = "user=%7B%22id%22%3A123456789%2C%22first_name%22%3A%22Test%22%2C%22username%22%3A%22testadmin%22%7D&auth_date=1234567890&hash=test_hash";
pub const TELEGRAM_TOKEN: &str = "tg-token";
pub const PASSWORD_TOKEN: &str = "pw-token";

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: JsonValue,
    pub bearer: Option<String>,
}

impl Recorded {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Default)]
struct BackendState {
    requests: Vec<Recorded>,
    candidates: BTreeMap<i64, JsonValue>,
    comments: Vec<JsonValue>,
    pending_admins: Vec<JsonValue>,
    count_override: Option<u64>,
    fail_candidate_writes: bool,
    fail_count: bool,
    fail_metrics: bool,
}

/// In-process stand-in for the FastAPI backend. Records every request and
/// keeps candidates in memory so status writes are visible on re-fetch.
#[derive(Clone, Default)]
pub struct FakeBackend {
    inner: Arc<Mutex<BackendState>>,
}

impl FakeBackend {
    pub fn insert_candidate(&self, candidate: JsonValue) {
        let id = candidate["id"].as_i64().expect("candidate id");
        self.inner.lock().unwrap().candidates.insert(id, candidate);
    }

    pub fn candidate(&self, id: i64) -> Option<JsonValue> {
        self.inner.lock().unwrap().candidates.get(&id).cloned()
    }

    pub fn set_count(&self, total: u64) {
        self.inner.lock().unwrap().count_override = Some(total);
    }

    pub fn fail_candidate_writes(&self) {
        self.inner.lock().unwrap().fail_candidate_writes = true;
    }

    pub fn fail_count(&self) {
        self.inner.lock().unwrap().fail_count = true;
    }

    pub fn fail_metrics(&self) {
        self.inner.lock().unwrap().fail_metrics = true;
    }

    pub fn add_pending_admin(&self, username: &str) {
        self.inner.lock().unwrap().pending_admins.push(json!({
            "id": 1,
            "telegram_username": username,
            "created_by": 1,
            "created_at": "2024-05-01T09:00:00"
        }));
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn requests_to(&self, method: Method, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    pub fn clear_requests(&self) {
        self.inner.lock().unwrap().requests.clear();
    }

    /// Serves the fake on an ephemeral port and returns its base URL.
    pub async fn spawn(&self) -> String {
        let app = Router::new().fallback(handle).with_state(self.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake backend");
        let addr = listener.local_addr().expect("fake backend addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fake backend");
        });
        format!("http://{}", addr)
    }
}

pub fn user_json(id: i64, name: &str, username: &str) -> JsonValue {
    json!({
        "id": id,
        "name": name,
        "email": null,
        "telegram_id": id.to_string(),
        "telegram_username": username,
        "is_admin": true
    })
}

pub fn candidate_json(id: i64, full_name: &str, status: &str, results: &str) -> JsonValue {
    json!({
        "id": id,
        "full_name": full_name,
        "telegram_username": format!("cand{}", id),
        "telegram_id": (1000 + id).to_string(),
        "status": status,
        "results": results,
        "last_action_date": "2024-05-01T10:15:30.123456",
        "last_action_type": "interview",
        "created_at": "2024-04-30T08:00:00"
    })
}

fn reply(status: StatusCode, body: JsonValue) -> Response {
    (status, Json(body)).into_response()
}

fn not_found() -> Response {
    reply(StatusCode::NOT_FOUND, json!({ "detail": "Not found" }))
}

async fn handle(
    State(backend): State<FakeBackend>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    let query: Vec<(String, String)> = uri
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect()
        })
        .unwrap_or_default();
    let bearer = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string);
    let body: JsonValue = serde_json::from_slice(&body).unwrap_or(JsonValue::Null);

    let mut state = backend.inner.lock().unwrap();
    state.requests.push(Recorded {
        method: method.clone(),
        path: path.clone(),
        query: query.clone(),
        body: body.clone(),
        bearer: bearer.clone(),
    });

    let token_ok = matches!(bearer.as_deref(), Some(TELEGRAM_TOKEN) | Some(PASSWORD_TOKEN));
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method.as_str(), segments.as_slice()) {
        ("POST", ["api", "telegram", "telegram-auth"]) => reply(
            StatusCode::OK,
            json!({
                "access_token": TELEGRAM_TOKEN,
                "token_type": "bearer",
                "user": user_json(1, "Test Admin", "testadmin")
            }),
        ),
        ("POST", ["api", "user", "login"]) => {
            if body["password"] == "secret" {
                reply(
                    StatusCode::OK,
                    json!({ "access_token": PASSWORD_TOKEN, "token_type": "bearer" }),
                )
            } else {
                reply(
                    StatusCode::UNAUTHORIZED,
                    json!({ "detail": "Incorrect email or password" }),
                )
            }
        }
        (_, ["api", ..]) if !token_ok => reply(
            StatusCode::UNAUTHORIZED,
            json!({ "detail": "Could not validate credentials" }),
        ),
        ("GET", ["api", "telegram", "profile"]) | ("GET", ["api", "user", "profile"]) => {
            reply(StatusCode::OK, user_json(1, "Test Admin", "testadmin"))
        }

        ("GET", ["api", "candidates"]) => {
            let skip = param(&query, "skip").unwrap_or(0) as usize;
            let limit = param(&query, "limit").unwrap_or(100) as usize;
            let rows: Vec<JsonValue> = state
                .candidates
                .values()
                .skip(skip)
                .take(limit)
                .cloned()
                .collect();
            reply(StatusCode::OK, JsonValue::Array(rows))
        }
        ("POST", ["api", "candidates"]) => {
            let id = state.candidates.keys().max().copied().unwrap_or(0) + 1;
            let mut created = candidate_json(
                id,
                body["full_name"].as_str().unwrap_or_default(),
                "ожидает",
                body["results"].as_str().unwrap_or_default(),
            );
            created["telegram_id"] = body["telegram_id"].clone();
            state.candidates.insert(id, created.clone());
            reply(StatusCode::OK, created)
        }
        ("GET", ["api", "candidates", "count"]) => {
            if state.fail_count {
                return reply(StatusCode::INTERNAL_SERVER_ERROR, json!({ "detail": "count failed" }));
            }
            let total = state
                .count_override
                .unwrap_or(state.candidates.len() as u64);
            reply(StatusCode::OK, json!({ "total": total }))
        }
        ("GET", ["api", "candidates", id]) => match id
            .parse::<i64>()
            .ok()
            .and_then(|id| state.candidates.get(&id))
        {
            Some(candidate) => reply(StatusCode::OK, candidate.clone()),
            None => reply(StatusCode::NOT_FOUND, json!({ "detail": "Candidate not found" })),
        },
        ("PUT", ["api", "candidates", id]) => {
            if state.fail_candidate_writes {
                return reply(StatusCode::INTERNAL_SERVER_ERROR, json!({ "detail": "write failed" }));
            }
            let Some(candidate) = id.parse::<i64>().ok().and_then(|id| state.candidates.get_mut(&id))
            else {
                return reply(StatusCode::NOT_FOUND, json!({ "detail": "Candidate not found" }));
            };
            if let Some(fields) = body.as_object() {
                for (key, value) in fields {
                    candidate[key] = value.clone();
                }
            }
            reply(StatusCode::OK, candidate.clone())
        }
        ("GET", ["api", "candidates", id, "comments"]) => {
            let id: i64 = id.parse().unwrap_or_default();
            let rows: Vec<JsonValue> = state
                .comments
                .iter()
                .filter(|c| c["candidate_id"] == id)
                .cloned()
                .collect();
            reply(StatusCode::OK, JsonValue::Array(rows))
        }
        ("POST", ["api", "candidates", id, "comments"]) => {
            let comment = json!({
                "id": state.comments.len() as i64 + 1,
                "candidate_id": id.parse::<i64>().unwrap_or_default(),
                "hr_comment": body["hr_comment"],
                "created_at": "2024-05-02T12:00:00"
            });
            state.comments.push(comment.clone());
            reply(StatusCode::OK, comment)
        }
        ("POST", ["api", "candidates", _, "test-notification"]) => {
            reply(StatusCode::OK, json!({ "message": "Test notification sent" }))
        }

        ("GET", ["api", "notifications"]) => reply(
            StatusCode::OK,
            json!([{
                "id": 5,
                "type": "interview_started",
                "message": "Кандидат начал интервью",
                "candidate_id": 1,
                "telegram_sent": true,
                "notion_sent": false,
                "created_at": "2024-05-01T11:00:00",
                "candidate": { "full_name": "Иван Петров", "telegram_username": "ivan" }
            }]),
        ),
        ("GET", ["api", "notifications", "stats"]) => reply(
            StatusCode::OK,
            json!({
                "total": 3,
                "telegram_sent": 2,
                "notion_sent": 0,
                "success_rate": 66.6666,
                "type_stats": [{ "type": "interview_started", "count": 3 }]
            }),
        ),
        ("POST", ["api", "notifications", "send-test"]) => {
            reply(StatusCode::OK, json!({ "message": "Test notification sent" }))
        }
        ("POST", ["api", "notifications", "send-interview-notification", id]) => {
            if id.parse::<i64>().ok().is_some_and(|id| state.candidates.contains_key(&id)) {
                reply(StatusCode::OK, json!({ "message": "Notification sent" }))
            } else {
                reply(StatusCode::NOT_FOUND, json!({ "detail": "Candidate not found" }))
            }
        }
        ("DELETE", ["api", "notifications", "404"]) => {
            reply(StatusCode::NOT_FOUND, json!({ "detail": "Notification not found" }))
        }
        ("DELETE", ["api", "notifications", _]) => {
            reply(StatusCode::OK, json!({ "message": "Notification deleted" }))
        }

        ("GET", ["api", "metrics", _]) if state.fail_metrics => {
            reply(StatusCode::INTERNAL_SERVER_ERROR, json!({ "detail": "metrics down" }))
        }
        ("GET", ["api", "metrics", "overview"]) => reply(
            StatusCode::OK,
            json!({
                "total_candidates": 12,
                "passed_candidates": 5,
                "active_candidates": 4,
                "test_pass_rate": 41.67
            }),
        ),
        ("GET", ["api", "metrics", "status-distribution"]) => reply(
            StatusCode::OK,
            json!({ "distribution": [
                { "status": "прошёл", "count": 2 },
                { "status": "берем", "count": 3 },
                { "status": "ожидает", "count": 6 },
                { "status": "отклонён", "count": 1 }
            ]}),
        ),
        ("GET", ["api", "metrics", "activity-timeline"]) => reply(
            StatusCode::OK,
            json!({ "timeline": [{ "date": "2024-05-01", "count": 4 }] }),
        ),
        ("GET", ["api", "metrics", "interview-stats"]) => reply(
            StatusCode::OK,
            json!({ "category_stats": [{ "category": "sql", "avg_score": 7.5, "count": 4 }] }),
        ),
        ("GET", ["api", "metrics", "top-candidates"]) => reply(
            StatusCode::OK,
            json!({ "top_candidates": [{
                "full_name": "Иван Петров", "avg_score": 9.1, "questions_count": 10
            }]}),
        ),

        ("GET", ["api", "telegram", "admins"]) => reply(
            StatusCode::OK,
            json!({ "admins": [user_json(1, "Test Admin", "testadmin")] }),
        ),
        ("GET", ["api", "telegram", "pending-admins"]) => reply(
            StatusCode::OK,
            json!({ "pending_admins": state.pending_admins }),
        ),
        ("POST", ["api", "telegram", "create-admin"]) => {
            let username = body["telegram_username"].as_str().unwrap_or_default().to_string();
            if username == "existinguser" {
                reply(
                    StatusCode::OK,
                    json!({
                        "message": "User promoted",
                        "user": user_json(2, "Existing User", "existinguser")
                    }),
                )
            } else {
                let id = state.pending_admins.len() as i64 + 1;
                state.pending_admins.push(json!({
                    "id": id,
                    "telegram_username": username,
                    "created_by": 1,
                    "created_at": "2024-05-01T09:00:00"
                }));
                reply(
                    StatusCode::OK,
                    json!({ "message": format!("Пользователь @{} будет назначен администратором при первом входе", username) }),
                )
            }
        }
        ("DELETE", ["api", "telegram", "pending-admins", username]) => {
            let before = state.pending_admins.len();
            state
                .pending_admins
                .retain(|p| p["telegram_username"] != *username);
            if state.pending_admins.len() < before {
                reply(StatusCode::OK, json!({ "message": "Pending admin removed" }))
            } else {
                not_found()
            }
        }

        _ => not_found(),
    }
}

fn param(query: &[(String, String)], name: &str) -> Option<u64> {
    query
        .iter()
        .find(|(k, _)| k == name)
        .and_then(|(_, v)| v.parse().ok())
}

pub fn config(api_base_url: &str, dir: &TempDir) -> Config {
    Config {
        server_address: "127.0.0.1:0".to_string(),
        api_base_url: api_base_url.to_string(),
        session_file: dir.path().join("session.json"),
        http_timeout_secs: 5,
        notice_ttl_secs: 3,
        panel_rps: 1000,
        telegram_init_data: None,
    }
}

pub struct TestPanel {
    pub app: Router,
    pub state: AppState,
    pub backend: FakeBackend,
    pub dir: TempDir,
}

impl TestPanel {
    /// Panel wired to a fresh fake backend, nobody signed in.
    pub async fn start() -> Self {
        Self::start_with(|_| {}).await
    }

    pub async fn start_with(adjust: impl FnOnce(&mut Config)) -> Self {
        let backend = FakeBackend::default();
        let base_url = backend.spawn().await;
        let dir = tempfile::tempdir().expect("tempdir");
        let mut config = config(&base_url, &dir);
        adjust(&mut config);
        let state = AppState::new(config).expect("app state");
        let app = routes::router(state.clone());
        Self {
            app,
            state,
            backend,
            dir,
        }
    }

    pub async fn signed_in() -> Self {
        let panel = Self::start().await;
        panel
            .state
            .sessions
            .sign_in_telegram(INIT_DATA)
            .await
            .expect("telegram sign-in");
        panel.backend.clear_requests();
        panel
    }

    pub async fn call_raw(&self, method: &str, uri: &str) -> Response {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.app.clone().oneshot(req).await.unwrap()
    }

    pub async fn call(&self, method: &str, uri: &str, body: Option<JsonValue>) -> (StatusCode, JsonValue) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let resp = self.app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null);
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, JsonValue) {
        self.call("GET", uri, None).await
    }
}
