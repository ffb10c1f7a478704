//! Route handlers and the shared application state
//!
//! - `system` - health check and hello endpoints
//! - `login` - password login
//! - `users` - account CRUD
//! - `entities` - generic CRUD for spirits, batches, vessels and measurements

pub mod entities;
pub mod login;
pub mod system;
pub mod users;

use std::sync::Arc;
use std::time::Duration;

use aging_core::domain::entities::{Batch, Document, Measurement, Spirit, User, Vessel};
use aging_core::repositories::{EntityRepository, InMemoryStore, UserRepository};
use aging_core::services::{
    AccountService, EntityService, PasswordHasher, RequestAuthenticator, TokenService,
};
use aging_infra::database::{DatabasePool, MySqlDocumentStore};

/// One store per collection
///
/// `users` and `user_records` point at the same store viewed through the
/// two repository traits.
pub struct Stores {
    pub users: Arc<dyn UserRepository>,
    pub user_records: Arc<dyn EntityRepository<User>>,
    pub spirits: Arc<dyn EntityRepository<Spirit>>,
    pub batches: Arc<dyn EntityRepository<Batch>>,
    pub vessels: Arc<dyn EntityRepository<Vessel>>,
    pub measurements: Arc<dyn EntityRepository<Measurement>>,
}

impl Stores {
    /// Process-local stores; contents are lost on restart
    pub fn in_memory() -> Self {
        let users = Arc::new(InMemoryStore::<User>::new());
        Self {
            users: users.clone(),
            user_records: users,
            spirits: Arc::new(InMemoryStore::<Spirit>::new()),
            batches: Arc::new(InMemoryStore::<Batch>::new()),
            vessels: Arc::new(InMemoryStore::<Vessel>::new()),
            measurements: Arc::new(InMemoryStore::<Measurement>::new()),
        }
    }

    /// MySQL document stores sharing one pool
    pub fn mysql(pool: &DatabasePool) -> Self {
        let users = Arc::new(MySqlDocumentStore::<User>::new(pool.pool().clone()));
        Self {
            users: users.clone(),
            user_records: users,
            spirits: Arc::new(MySqlDocumentStore::<Spirit>::new(pool.pool().clone())),
            batches: Arc::new(MySqlDocumentStore::<Batch>::new(pool.pool().clone())),
            vessels: Arc::new(MySqlDocumentStore::<Vessel>::new(pool.pool().clone())),
            measurements: Arc::new(MySqlDocumentStore::<Measurement>::new(pool.pool().clone())),
        }
    }
}

/// Application state that holds shared services
pub struct AppState {
    pub accounts: AccountService,
    pub authenticator: RequestAuthenticator,
    pub users: EntityService<User>,
    pub spirits: EntityService<Spirit>,
    pub batches: EntityService<Batch>,
    pub vessels: EntityService<Vessel>,
    pub measurements: EntityService<Measurement>,
    /// Present when backed by MySQL; used by the health check
    pub database: Option<DatabasePool>,
}

impl AppState {
    /// Wire services over the given stores
    ///
    /// # Arguments
    ///
    /// * `stores` - Entity stores, one per collection
    /// * `token_service` - Shared by login and the request authenticator
    /// * `hasher` - Credential hasher for new accounts and login
    /// * `deadline` - Upper bound on every store call made for a request
    pub fn new(
        stores: Stores,
        token_service: Arc<TokenService>,
        hasher: PasswordHasher,
        deadline: Duration,
    ) -> Self {
        Self {
            accounts: AccountService::new(
                stores.users,
                hasher,
                Arc::clone(&token_service),
                deadline,
            ),
            authenticator: RequestAuthenticator::new(token_service),
            users: EntityService::new(stores.user_records, deadline),
            spirits: EntityService::new(stores.spirits, deadline),
            batches: EntityService::new(stores.batches, deadline),
            vessels: EntityService::new(stores.vessels, deadline),
            measurements: EntityService::new(stores.measurements, deadline),
            database: None,
        }
    }

    pub fn with_database(mut self, pool: DatabasePool) -> Self {
        self.database = Some(pool);
        self
    }
}

/// Entity types served by the generic CRUD routes
pub trait Collection: Document {
    fn service(state: &AppState) -> &EntityService<Self>;
}

impl Collection for Spirit {
    fn service(state: &AppState) -> &EntityService<Self> {
        &state.spirits
    }
}

impl Collection for Batch {
    fn service(state: &AppState) -> &EntityService<Self> {
        &state.batches
    }
}

impl Collection for Vessel {
    fn service(state: &AppState) -> &EntityService<Self> {
        &state.vessels
    }
}

impl Collection for Measurement {
    fn service(state: &AppState) -> &EntityService<Self> {
        &state.measurements
    }
}
