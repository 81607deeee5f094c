//! Shared world state for account BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskdeck::{
    auth::{
        adapters::memory::InMemoryAuthProvider,
        domain::{AuthenticatedUser, SignUpRequest},
        services::{AccountError, AccountService},
    },
    profile::{
        adapters::memory::InMemoryProfileRepository,
        services::{ProfileOverview, ProfileService},
    },
    task::adapters::memory::InMemoryTaskStore,
};

/// Account service type used by the BDD world.
pub type TestAccounts =
    AccountService<InMemoryAuthProvider, InMemoryProfileRepository, DefaultClock>;

/// Profile service type used by the BDD world.
pub type TestProfiles = ProfileService<InMemoryProfileRepository, InMemoryTaskStore, DefaultClock>;

/// Scenario world for account behaviour tests.
pub struct AccountWorld {
    pub provider: Arc<InMemoryAuthProvider>,
    pub tasks: Arc<InMemoryTaskStore>,
    pub accounts: TestAccounts,
    pub profiles: TestProfiles,
    pub pending_request: Option<SignUpRequest>,
    pub sign_up_result: Option<Result<AuthenticatedUser, AccountError>>,
    pub signed_in: Option<AuthenticatedUser>,
    pub overview: Option<ProfileOverview>,
}

impl AccountWorld {
    /// Creates a world wired to fresh in-memory adapters.
    #[must_use]
    pub fn new() -> Self {
        let provider = Arc::new(InMemoryAuthProvider::new());
        let profile_repository = Arc::new(InMemoryProfileRepository::new());
        let tasks = Arc::new(InMemoryTaskStore::new());
        let clock = Arc::new(DefaultClock);

        Self {
            accounts: AccountService::new(
                Arc::clone(&provider),
                Arc::clone(&profile_repository),
                Arc::clone(&clock),
            ),
            profiles: ProfileService::new(profile_repository, Arc::clone(&tasks), clock),
            provider,
            tasks,
            pending_request: None,
            sign_up_result: None,
            signed_in: None,
            overview: None,
        }
    }

    /// Returns the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns an error when no user has signed in during the scenario.
    pub fn user(&self) -> Result<&AuthenticatedUser, eyre::Report> {
        self.signed_in
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no signed-in user in scenario world"))
    }
}

impl Default for AccountWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> AccountWorld {
    AccountWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
