//! End-to-end checks of the profile form against a mock profile API.
//!
//! Each test mounts `/profile/me` handlers on a `wiremock` server, drives a
//! `ProfileForm` through `ApiClient`, and lets the mock server verify how many
//! requests were made when it is dropped.

use anyhow::Result;
use profile_form::{
    api::{ApiClient, ApiConfig, AppError, ProfileApi},
    form::{ProfileForm, SkillCatalog, SubmitOutcome, SUBMIT_FALLBACK_MESSAGE},
};
use serde_json::{json, Value};
use std::{
    net::TcpListener,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

fn client(server: &MockServer) -> Result<ApiClient> {
    let config = ApiConfig::new(&server.uri())?.with_token(Some("session-token"));
    Ok(ApiClient::new(config)?)
}

fn learner_user() -> Value {
    json!({
        "fullName": "Ana",
        "bio": "hi",
        "avatar": "",
        "skills": ["React"],
        "timezone": "UTC+00:00",
        "socialLinks": {"linkedin": "", "twitter": "", "github": ""},
        "roles": ["learner"]
    })
}

fn mentor_user(rate: Value) -> Value {
    json!({
        "name": "Bruno",
        "bio": "Backend mentor",
        "skills": ["Go", "PostgreSQL"],
        "timezone": "UTC-03:00",
        "socialLinks": {"github": "bruno"},
        "roles": ["learner", "mentor"],
        "expertise": "Backend",
        "availability": "Evenings",
        "hourlyRate": rate,
        "experience": "10 years"
    })
}

async fn mount_profile(server: &MockServer, user: Value) {
    Mock::given(method("GET"))
        .and(path("/profile/me"))
        .and(header("authorization", "Bearer session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": user })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn valid_learner_draft_is_submitted_once() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount_profile(&server, learner_user()).await;

    let mut canonical = learner_user();
    canonical["fullName"] = json!("Ana Souza");
    canonical["skills"] = json!(["React", "Rust"]);

    Mock::given(method("PUT"))
        .and(path("/profile/me"))
        .and(header("authorization", "Bearer session-token"))
        .and(body_json(json!({
            "fullName": "Ana",
            "bio": "hi",
            "avatar": "",
            "skills": ["React", "Rust"],
            "timezone": "UTC+00:00",
            "socialLinks": {"linkedin": "", "twitter": "", "github": ""}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": canonical })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server)?;
    let record = api.fetch_profile().await?;

    let completions = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&completions);
    let mut form = ProfileForm::from_record(&record, SkillCatalog::default())
        .with_on_complete(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

    assert!(form.add_skill("Rust"));
    assert!(form.validate().is_empty());
    assert_eq!(form.submit(&api).await, SubmitOutcome::Saved);

    assert_eq!(completions.load(Ordering::SeqCst), 1);
    assert_eq!(form.draft().base().full_name, "Ana Souza");
    assert_eq!(form.draft().skills(), ["React", "Rust"]);
    assert!(form.general_error().is_none());
    Ok(())
}

#[tokio::test]
async fn draft_without_skills_makes_no_request() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount_profile(&server, learner_user()).await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let api = client(&server)?;
    let record = api.fetch_profile().await?;
    let mut form = ProfileForm::from_record(&record, SkillCatalog::default());
    assert!(form.remove_skill("React"));

    assert_eq!(form.submit(&api).await, SubmitOutcome::Invalid);
    assert_eq!(form.errors().len(), 1);
    assert_eq!(
        form.errors().get("skills"),
        Some("At least one skill is required")
    );
    Ok(())
}

#[tokio::test]
async fn mentor_rate_is_sent_as_a_number() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount_profile(&server, mentor_user(json!("35"))).await;
    Mock::given(method("PUT"))
        .and(path("/profile/me"))
        .and(body_partial_json(json!({
            "fullName": "Bruno",
            "hourlyRate": 50.0,
            "expertise": "Backend",
            "socialLinks": {"github": "bruno"}
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "user": mentor_user(json!(50)) })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server)?;
    let record = api.fetch_profile().await?;
    let mut form = ProfileForm::from_record(&record, SkillCatalog::default());
    assert!(form.draft().is_mentor());

    form.set_field_by_name("hourlyRate", "50")?;
    assert_eq!(form.submit(&api).await, SubmitOutcome::Saved);

    let mentor = form.draft().mentor_fields().expect("mentor draft");
    assert_eq!(mentor.hourly_rate, "50");
    Ok(())
}

#[tokio::test]
async fn negative_mentor_rate_is_rejected_locally() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount_profile(&server, mentor_user(json!(null))).await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let api = client(&server)?;
    let record = api.fetch_profile().await?;
    let mut form = ProfileForm::from_record(&record, SkillCatalog::default());
    form.set_field_by_name("hourlyRate", "-5")?;

    assert_eq!(form.submit(&api).await, SubmitOutcome::Invalid);
    assert_eq!(
        form.errors().get("hourlyRate"),
        Some("Hourly rate must be a positive number")
    );
    Ok(())
}

#[tokio::test]
async fn server_message_becomes_general_error() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount_profile(&server, learner_user()).await;
    Mock::given(method("PUT"))
        .and(path("/profile/me"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "Avatar URL is invalid"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server)?;
    let record = api.fetch_profile().await?;
    let mut form = ProfileForm::from_record(&record, SkillCatalog::default());
    form.set_field_by_name("avatar", "not-a-url")?;

    assert_eq!(form.submit(&api).await, SubmitOutcome::Failed);
    assert_eq!(form.general_error(), Some("Avatar URL is invalid"));
    assert_eq!(form.draft().base().avatar, "not-a-url");
    assert!(!form.is_loading());
    Ok(())
}

#[tokio::test]
async fn unstructured_failure_uses_fallback_message() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount_profile(&server, learner_user()).await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server)?;
    let record = api.fetch_profile().await?;
    let mut form = ProfileForm::from_record(&record, SkillCatalog::default());

    assert_eq!(form.submit(&api).await, SubmitOutcome::Failed);
    assert_eq!(form.general_error(), Some(SUBMIT_FALLBACK_MESSAGE));
    Ok(())
}

#[tokio::test]
async fn slow_server_surfaces_timeout() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile/me"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "user": learner_user() }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = ApiConfig::new(&server.uri())?.with_timeout(Duration::from_millis(200));
    let api = ApiClient::new(config)?;

    let result = api.fetch_profile().await;
    assert!(matches!(result, Err(AppError::Timeout(_))), "{result:?}");
    Ok(())
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile/me"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let result = client(&server)?.fetch_profile().await;
    assert!(matches!(result, Err(AppError::Parse(_))), "{result:?}");
    Ok(())
}

#[tokio::test]
async fn unauthorized_fetch_reports_status() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile/me"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Not authenticated"})),
        )
        .mount(&server)
        .await;

    let config = ApiConfig::new(&server.uri())?;
    let result = ApiClient::new(config)?.fetch_profile().await;
    match result {
        Err(AppError::Http { status, message, .. }) => {
            assert_eq!(status, 401);
            assert_eq!(message.as_deref(), Some("Not authenticated"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
    Ok(())
}
