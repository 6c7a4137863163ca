#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use tower::ServiceExt;

use studbook_api::auth::jwt::{generate_access_token, JwtConfig};
use studbook_api::authorization::Authorizer;
use studbook_api::config::ServerConfig;
use studbook_api::router::build_app_router;
use studbook_api::services::HorseService;
use studbook_api::state::AppState;
use studbook_core::error::CoreError;
use studbook_core::types::DbId;
use studbook_db::models::horse::{CreateHorse, DeleteResult, Horse, UpdateHorse, UpdateResult};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        editor_profiles: vec!["admin".to_string()],
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Signed bearer token carrying `profile`.
pub fn token_for(profile: &str) -> String {
    generate_access_token("breeder-1", profile, &test_config().jwt).expect("token generation")
}

// ---------------------------------------------------------------------------
// Horse Data Service double
// ---------------------------------------------------------------------------

/// In-memory [`HorseService`] that records how it was called.
#[derive(Clone, Default)]
pub struct MockHorseService {
    horses: Arc<Mutex<Vec<Horse>>>,
    calls: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
    last_page: Arc<Mutex<Option<(String, i64, i64)>>>,
    last_update: Arc<Mutex<Option<(DbId, UpdateHorse)>>>,
}

impl MockHorseService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_horses(horses: Vec<Horse>) -> Self {
        let mock = Self::new();
        *mock.horses.lock().unwrap() = horses;
        mock
    }

    /// Make every subsequent call fail with a database error.
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// Number of service calls made so far (pings excluded).
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_page(&self) -> Option<(String, i64, i64)> {
        self.last_page.lock().unwrap().clone()
    }

    pub fn last_update(&self) -> Option<(DbId, UpdateHorse)> {
        self.last_update.lock().unwrap().clone()
    }

    fn enter(&self) -> Result<(), sqlx::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(sqlx::Error::Protocol("simulated store failure".into()));
        }
        Ok(())
    }
}

fn same_name(a: Option<&str>, b: &str) -> bool {
    a.is_some_and(|a| a.to_lowercase() == b.to_lowercase())
}

/// Replace `slot` with `value` when supplied, reporting whether it changed.
fn apply<T: PartialEq>(slot: &mut T, value: Option<T>) -> bool {
    match value {
        Some(v) if *slot != v => {
            *slot = v;
            true
        }
        _ => false,
    }
}

#[async_trait]
impl HorseService for MockHorseService {
    async fn list(&self) -> Result<Vec<Horse>, sqlx::Error> {
        self.enter()?;
        Ok(self.horses.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Horse>, sqlx::Error> {
        self.enter()?;
        Ok(self
            .horses
            .lock()
            .unwrap()
            .iter()
            .find(|h| h.id == id)
            .cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Horse>, sqlx::Error> {
        self.enter()?;
        Ok(self
            .horses
            .lock()
            .unwrap()
            .iter()
            .filter(|h| same_name(Some(h.name.as_str()), name))
            .cloned()
            .collect())
    }

    async fn find_by_parent(
        &self,
        parent: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Horse>, sqlx::Error> {
        self.enter()?;
        *self.last_page.lock().unwrap() = Some((parent.to_string(), limit, offset));
        Ok(self
            .horses
            .lock()
            .unwrap()
            .iter()
            .filter(|h| {
                same_name(h.father.as_deref(), parent) || same_name(h.mother.as_deref(), parent)
            })
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn create(&self, input: &CreateHorse) -> Result<Horse, sqlx::Error> {
        self.enter()?;
        let Some(name) = input.name.clone() else {
            return Err(sqlx::Error::Protocol(
                "null value in column \"name\" violates not-null constraint".into(),
            ));
        };
        let mut horses = self.horses.lock().unwrap();
        let id = horses.iter().map(|h| h.id).max().unwrap_or(0) + 1;
        let now = Utc::now();
        let horse = Horse {
            id,
            name,
            father: input.father.clone(),
            mother: input.mother.clone(),
            gender: input.gender.clone(),
            coat: input.coat.clone(),
            birth: input.birth,
            owner: input.owner.clone(),
            book: input.book.clone(),
            register: input.register.clone(),
            alive: input.alive.unwrap_or(true),
            blocked: input.blocked.unwrap_or(false),
            created_at: now,
            updated_at: now,
        };
        horses.push(horse.clone());
        Ok(horse)
    }

    async fn update(&self, id: DbId, input: &UpdateHorse) -> Result<UpdateResult, sqlx::Error> {
        self.enter()?;
        *self.last_update.lock().unwrap() = Some((id, input.clone()));

        let mut horses = self.horses.lock().unwrap();
        let Some(horse) = horses.iter_mut().find(|h| h.id == id) else {
            return Ok(UpdateResult {
                matched_count: 0,
                modified_count: 0,
            });
        };

        let input = input.clone();
        let mut changed = apply(&mut horse.name, input.name);
        changed |= apply(&mut horse.father, input.father);
        changed |= apply(&mut horse.mother, input.mother);
        changed |= apply(&mut horse.gender, input.gender);
        changed |= apply(&mut horse.coat, input.coat);
        changed |= apply(&mut horse.birth, input.birth);
        changed |= apply(&mut horse.owner, input.owner);
        changed |= apply(&mut horse.book, input.book);
        changed |= apply(&mut horse.register, input.register);
        changed |= apply(&mut horse.alive, input.alive);
        changed |= apply(&mut horse.blocked, input.blocked);

        Ok(UpdateResult {
            matched_count: 1,
            modified_count: i64::from(changed),
        })
    }

    async fn delete(&self, id: DbId) -> Result<DeleteResult, sqlx::Error> {
        self.enter()?;
        let mut horses = self.horses.lock().unwrap();
        let before = horses.len();
        horses.retain(|h| h.id != id);
        Ok(DeleteResult {
            deleted_count: (before - horses.len()) as u64,
        })
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Authorization Checker double
// ---------------------------------------------------------------------------

/// [`Authorizer`] that returns a fixed decision, or fails.
#[derive(Clone, Default)]
pub struct StaticAuthorizer {
    allow: bool,
    fail: bool,
    calls: Arc<AtomicUsize>,
}

impl StaticAuthorizer {
    pub fn allowing() -> Self {
        Self {
            allow: true,
            ..Self::default()
        }
    }

    pub fn denying() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Authorizer for StaticAuthorizer {
    async fn authorize(&self, _profile: &str) -> Result<bool, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(CoreError::Internal("profile directory unreachable".into()));
        }
        Ok(self.allow)
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build the full application router with all middleware layers around the
/// given collaborators.
pub fn build_test_app<H, A>(horses: H, authorizer: A) -> Router
where
    H: HorseService + 'static,
    A: Authorizer + 'static,
{
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        horses: Arc::new(horses),
        authorizer: Arc::new(authorizer),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn horse(id: DbId, name: &str, father: Option<&str>, mother: Option<&str>) -> Horse {
    let now = Utc::now();
    Horse {
        id,
        name: name.to_string(),
        father: father.map(str::to_string),
        mother: mother.map(str::to_string),
        gender: Some("F".to_string()),
        coat: Some("Alazão".to_string()),
        birth: chrono::NaiveDate::from_ymd_opt(2018, 10, 3),
        owner: Some("Haras Boa Vista".to_string()),
        book: Some("Definitivo".to_string()),
        register: Some(format!("B{id:06}")),
        alive: true,
        blocked: false,
        created_at: now,
        updated_at: now,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), Some(token)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body), Some(token)).await
}

/// POST a body that is not necessarily valid JSON.
pub async fn post_raw_auth(app: Router, uri: &str, body: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, Some(token)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
