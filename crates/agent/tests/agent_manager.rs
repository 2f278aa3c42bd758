use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use paleluna_agent::{AgentManager, AgentStatus};
use paleluna_config::AiConfig;
use paleluna_llm::{InferenceBackend, LlmError};
use paleluna_prompt::{SessionContext, fallback_response};

// ── Fake backend ─────────────────────────────────────────────────────────────

enum Scripted {
    Reply(&'static str),
    Fail,
}

struct FakeBackend {
    available: bool,
    script: Scripted,
    probes: AtomicUsize,
    completions: AtomicUsize,
}

impl FakeBackend {
    fn new(available: bool, script: Scripted) -> Arc<Self> {
        Arc::new(Self {
            available,
            script,
            probes: AtomicUsize::new(0),
            completions: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.probes.load(Ordering::SeqCst) + self.completions.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InferenceBackend for FakeBackend {
    async fn is_available(&self) -> bool {
        self.probes.fetch_add(1, Ordering::SeqCst);
        self.available
    }

    async fn complete(&self, _input: &str, _ctx: &SessionContext) -> Result<String, LlmError> {
        self.completions.fetch_add(1, Ordering::SeqCst);
        match self.script {
            Scripted::Reply(text) => Ok(text.to_string()),
            Scripted::Fail => Err(LlmError::Status(500)),
        }
    }
}

fn config(enabled: bool) -> Arc<AiConfig> {
    Arc::new(AiConfig {
        enabled,
        ..AiConfig::default()
    })
}

fn ctx(hour: u32) -> SessionContext {
    SessionContext::new("Iris", hour)
}

// ── Routing ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn uses_model_reply_when_enabled_and_available() {
    let backend = FakeBackend::new(true, Scripted::Reply("Where the grass grows wrong."));
    let manager = AgentManager::with_backend(config(true), backend.clone());

    let reply = manager.process_input("where are you", &ctx(12)).await;
    assert_eq!(reply, "Where the grass grows wrong.");
    assert_eq!(backend.completions.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn disabled_feature_never_touches_backend() {
    let backend = FakeBackend::new(true, Scripted::Reply("unused"));
    let manager = AgentManager::with_backend(config(false), backend.clone());

    let reply = manager.process_input("hello there", &ctx(12)).await;
    assert_eq!(reply, "Hello, Iris. I sense your presence.");
    assert_eq!(reply, fallback_response("hello there", &ctx(12)));
    assert_eq!(backend.calls(), 0);
    assert!(!manager.is_ai_available().await);
    assert_eq!(backend.calls(), 0);
}

#[tokio::test]
async fn unavailable_backend_skips_completion() {
    let backend = FakeBackend::new(false, Scripted::Reply("unused"));
    let manager = AgentManager::with_backend(config(true), backend.clone());

    let reply = manager.process_input("luna", &ctx(3)).await;
    assert_eq!(reply, fallback_response("luna", &ctx(3)));
    assert_eq!(backend.probes.load(Ordering::SeqCst), 1);
    assert_eq!(backend.completions.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn backend_error_is_absorbed() {
    let backend = FakeBackend::new(true, Scripted::Fail);
    let manager = AgentManager::with_backend(config(true), backend.clone());

    let reply = manager.process_input("who", &ctx(20)).await;
    assert_eq!(reply, fallback_response("who", &ctx(20)));
    assert_eq!(backend.completions.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn blank_model_reply_is_replaced() {
    let backend = FakeBackend::new(true, Scripted::Reply("   "));
    let manager = AgentManager::with_backend(config(true), backend);

    let reply = manager.process_input("rope", &ctx(20)).await;
    assert_eq!(reply, fallback_response("rope", &ctx(20)));
}

#[tokio::test]
async fn never_empty_for_non_empty_input() {
    let scripts = [
        (true, true),
        (true, false),
        (false, true),
        (false, false),
    ];
    for (enabled, available) in scripts {
        for script in [Scripted::Reply(""), Scripted::Fail] {
            let backend = FakeBackend::new(available, script);
            let manager = AgentManager::with_backend(config(enabled), backend);
            for input in ["x", "pale luna", "what is this place"] {
                assert!(!manager.process_input(input, &ctx(4)).await.is_empty());
            }
        }
    }
}

// ── Status ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn status_snapshot_reports_config_and_probe() {
    let backend = FakeBackend::new(true, Scripted::Reply("unused"));
    let manager = AgentManager::with_backend(config(true), backend);

    let status = manager.status().await;
    assert_eq!(
        status,
        AgentStatus {
            enabled: true,
            available: true,
            model: "llama3.2:3b".to_string(),
            endpoint: "http://localhost:11434".to_string(),
        }
    );

    let json = serde_json::to_value(&status).unwrap();
    assert_eq!(json["available"], true);
}

#[tokio::test]
async fn status_unavailable_when_disabled() {
    let backend = FakeBackend::new(true, Scripted::Reply("unused"));
    let manager = AgentManager::with_backend(config(false), backend);

    let status = manager.status().await;
    assert!(!status.enabled);
    assert!(!status.available);
}
