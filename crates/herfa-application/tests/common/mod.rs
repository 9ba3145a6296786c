#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use herfa_application::Herfa;
use herfa_core::clock::ManualClock;
use herfa_infrastructure::testing::RecordingTransport;
use herfa_infrastructure::{ClientConfig, MemoryStore, UnauthorizedHandler};

#[derive(Default)]
pub struct CountingRedirect {
    count: AtomicUsize,
}

impl CountingRedirect {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl UnauthorizedHandler for CountingRedirect {
    fn on_unauthorized(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct Fixture {
    pub herfa: Herfa,
    pub transport: Arc<RecordingTransport>,
    pub store: Arc<MemoryStore>,
    pub clock: Arc<ManualClock>,
    pub redirect: Arc<CountingRedirect>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    /// Builds a client over a pre-populated store (hydrates the session).
    pub fn with_store(store: Arc<MemoryStore>) -> Self {
        let transport = Arc::new(RecordingTransport::new());
        let clock = Arc::new(ManualClock::new(1_700_000_000_000));
        let redirect = Arc::new(CountingRedirect::default());

        let herfa = Herfa::builder(ClientConfig::default())
            .store(store.clone())
            .transport(transport.clone())
            .clock(clock.clone())
            .on_unauthorized(redirect.clone())
            .build()
            .unwrap();

        Self {
            herfa,
            transport,
            store,
            clock,
            redirect,
        }
    }
}

pub fn user_json(id: i64, role: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": "مستخدم",
        "role": role,
        "phone": "07701234567",
        "is_email_verified": false,
        "is_phone_verified": true
    })
}
