//! The root object wiring configuration, session, transport and services.

use std::sync::Arc;

use herfa_core::clock::{Clock, SystemClock};
use herfa_core::error::Result;
use herfa_core::storage::{LocalStore, keys};
use herfa_infrastructure::http::{HttpTransport, LoggingRedirect, ReqwestTransport};
use herfa_infrastructure::{
    ApiClient, ClientConfig, HerfaPaths, JsonFileStore, MemoryStore, ReferenceCache,
    SessionStore, UnauthorizedHandler,
};

use crate::{
    AuthService, FavoriteService, NeighborhoodService, PortfolioService, ProfessionService,
    RequestService, ReviewService, UserService, WorkerService,
};

/// One client instance: one session, one transport, one set of services.
pub struct Herfa {
    config: ClientConfig,
    client: ApiClient,
    auth: AuthService,
    workers: WorkerService,
    requests: RequestService,
    reviews: ReviewService,
    favorites: FavoriteService,
    professions: ProfessionService,
    neighborhoods: NeighborhoodService,
    users: UserService,
    portfolio: PortfolioService,
}

impl Herfa {
    pub fn builder(config: ClientConfig) -> HerfaBuilder {
        HerfaBuilder::new(config)
    }

    /// Production setup: config from the platform directories and the
    /// environment, file-backed store, `reqwest` transport.
    pub fn open(paths: &HerfaPaths) -> Result<Self> {
        let config = ClientConfig::load(paths)?;
        let store = Arc::new(JsonFileStore::new(paths.store_dir()?));
        Self::builder(config).store(store).build()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        self.client.session()
    }

    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    pub fn workers(&self) -> &WorkerService {
        &self.workers
    }

    pub fn requests(&self) -> &RequestService {
        &self.requests
    }

    pub fn reviews(&self) -> &ReviewService {
        &self.reviews
    }

    pub fn favorites(&self) -> &FavoriteService {
        &self.favorites
    }

    pub fn professions(&self) -> &ProfessionService {
        &self.professions
    }

    pub fn neighborhoods(&self) -> &NeighborhoodService {
        &self.neighborhoods
    }

    pub fn users(&self) -> &UserService {
        &self.users
    }

    pub fn portfolio(&self) -> &PortfolioService {
        &self.portfolio
    }
}

pub struct HerfaBuilder {
    config: ClientConfig,
    store: Option<Arc<dyn LocalStore>>,
    transport: Option<Arc<dyn HttpTransport>>,
    clock: Option<Arc<dyn Clock>>,
    on_unauthorized: Option<Arc<dyn UnauthorizedHandler>>,
}

impl HerfaBuilder {
    fn new(config: ClientConfig) -> Self {
        Self {
            config,
            store: None,
            transport: None,
            clock: None,
            on_unauthorized: None,
        }
    }

    /// Local store for the session and caches. Defaults to memory.
    pub fn store(mut self, store: Arc<dyn LocalStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Defaults to `ReqwestTransport`.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Hook run after a 401 has cleared the session. Defaults to logging.
    pub fn on_unauthorized(mut self, handler: Arc<dyn UnauthorizedHandler>) -> Self {
        self.on_unauthorized = Some(handler);
        self
    }

    pub fn build(self) -> Result<Herfa> {
        let config = self.config;
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(MemoryStore::new()) as Arc<dyn LocalStore>);
        let clock = self
            .clock
            .unwrap_or_else(|| Arc::new(SystemClock) as Arc<dyn Clock>);
        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(&config)?),
        };
        let on_unauthorized = self
            .on_unauthorized
            .unwrap_or_else(|| Arc::new(LoggingRedirect) as Arc<dyn UnauthorizedHandler>);

        let session = Arc::new(SessionStore::hydrate(store.clone()));
        let client = ApiClient::new(transport, session, config.base_url.clone())
            .with_unauthorized_handler(on_unauthorized);

        let professions_cache = ReferenceCache::new(
            keys::PROFESSIONS_CACHE,
            config.cache_ttl(),
            store.clone(),
            clock.clone(),
        );
        let neighborhoods_cache =
            ReferenceCache::new(keys::NEIGHBORHOODS_CACHE, config.cache_ttl(), store, clock);

        tracing::debug!("Herfa client ready for {}", config.base_url);

        Ok(Herfa {
            auth: AuthService::new(client.clone()),
            workers: WorkerService::new(client.clone()),
            requests: RequestService::new(client.clone(), config.poll_interval()),
            reviews: ReviewService::new(client.clone()),
            favorites: FavoriteService::new(client.clone()),
            professions: ProfessionService::new(client.clone(), professions_cache),
            neighborhoods: NeighborhoodService::new(client.clone(), neighborhoods_cache),
            users: UserService::new(client.clone()),
            portfolio: PortfolioService::new(client.clone()),
            client,
            config,
        })
    }
}
