//! Session collaborator used by the status commands.
//!
//! The [`Session`] trait exposes the state the commands read (current user,
//! cached settings, known presences) and the status update call. The
//! [`HttpSession`] implementation is backed by the REST API.

use std::sync::{Mutex, MutexGuard};

use log::{debug, info};
use mockall::automock;

use crate::discord::{ApiClient, Presence, Settings, Status, User};

/// State and operations of a logged in session.
#[automock]
pub trait Session {
    /// Returns the account the session is logged in with.
    fn current_user(&self) -> User;
    /// Returns the cached settings of the current user.
    fn settings(&self) -> Settings;
    /// Replaces the cached settings of the current user.
    fn set_settings(&self, settings: Settings);
    /// Returns the known presences, in the order the service sent them.
    fn presences(&self) -> Vec<Presence>;
    /// Asks the service to change the status of the current user.
    ///
    /// Returns the new settings snapshot when the service sends one back.
    async fn update_status(&self, status: Status) -> Result<Option<Settings>, anyhow::Error>;
}

/// [`Session`] backed by the REST API.
///
/// The current user and its settings are fetched once by [`HttpSession::connect`],
/// then the settings are kept up to date by the status commands.
pub struct HttpSession {
    /// API client used for the status updates
    api: ApiClient,
    /// Account of the token
    user: User,
    /// Cached settings
    settings: Mutex<Settings>,
    /// Known presences, replaced by [`HttpSession::set_presences`]
    presences: Mutex<Vec<Presence>>,
}

/// Locks a mutex, recovering the data if a previous holder panicked.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl HttpSession {
    /// Creates a session by fetching the current user and its settings.
    ///
    /// # Errors
    ///
    /// Returns an error if one of the requests fails, typically because the
    /// token is invalid or the service is unreachable.
    pub async fn connect(api: ApiClient) -> Result<Self, anyhow::Error> {
        let user = api.get_current_user().await?;
        let settings = api.get_settings().await?;

        info!("logged in as {}", user.tag());
        debug!("initial settings {:?}", settings);

        let session = HttpSession {
            api,
            user,
            settings: Mutex::new(settings),
            presences: Mutex::new(Vec::new()),
        };
        session.set_presences(vec![session.own_presence()]);

        Ok(session)
    }

    /// Replaces the known presences, keeping the given order.
    ///
    /// Called with the presence list of an external presence source. The
    /// session only knows the presence of the current user on its own.
    pub fn set_presences(&self, presences: Vec<Presence>) {
        debug!("replace {} presences", presences.len());
        *lock(&self.presences) = presences;
    }

    fn own_presence(&self) -> Presence {
        Presence {
            user: self.user.clone(),
            status: lock(&self.settings).status,
        }
    }
}

impl Session for HttpSession {
    fn current_user(&self) -> User {
        self.user.clone()
    }

    fn settings(&self) -> Settings {
        lock(&self.settings).clone()
    }

    fn set_settings(&self, settings: Settings) {
        debug!("cache settings {:?}", settings);
        let status = settings.status;
        *lock(&self.settings) = settings;

        for presence in lock(&self.presences).iter_mut() {
            if presence.user.id == self.user.id {
                presence.status = status;
            }
        }
    }

    fn presences(&self) -> Vec<Presence> {
        lock(&self.presences).clone()
    }

    async fn update_status(&self, status: Status) -> Result<Option<Settings>, anyhow::Error> {
        let settings = self.api.patch_status(status).await?;
        Ok(Some(settings))
    }
}
