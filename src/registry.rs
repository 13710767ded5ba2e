// ABOUTME: Service instance registry keyed by credential identity and service type
// ABOUTME: Concurrent map guaranteeing exactly one live instance per key
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::any::{type_name, Any, TypeId};
use std::sync::{Arc, OnceLock};

use dashmap::DashMap;
use tracing::debug;

use strava_core::models::AccessToken;

/// Cache key: credential identity plus the concrete service type.
type ServiceKey = (String, TypeId);

/// Registry caching one service instance per `(credential, service type)`
/// pair.
///
/// Construction of a service is side-effect-free (no network), so the only
/// thing the registry must guarantee is that two concurrent first lookups for
/// the same key never produce two live instances: the map's entry API holds
/// the shard lock across the check-then-insert, and every caller gets a clone
/// of the same `Arc`. Entries live as long as the credential; nothing is
/// evicted until [`ServiceRegistry::discard_credential`] is called for a
/// token that is being thrown away.
pub struct ServiceRegistry {
    services: DashMap<ServiceKey, Arc<dyn Any + Send + Sync>>,
}

impl ServiceRegistry {
    /// Create an empty registry.
    ///
    /// Production code normally goes through [`ServiceRegistry::global`];
    /// tests wanting isolation create their own instances.
    #[must_use]
    pub fn new() -> Self {
        Self {
            services: DashMap::new(),
        }
    }

    /// Get the process-wide registry.
    #[must_use]
    pub fn global() -> Arc<Self> {
        static REGISTRY: OnceLock<Arc<ServiceRegistry>> = OnceLock::new();
        REGISTRY.get_or_init(|| Arc::new(Self::new())).clone()
    }

    /// Return the cached instance for `(token, S)`, constructing it on first
    /// access.
    ///
    /// Two concurrent first-time lookups for the same key observe the same
    /// insertion and receive the identical `Arc`.
    pub fn get_or_create<S, F>(&self, token: &AccessToken, init: F) -> Arc<S>
    where
        S: Send + Sync + 'static,
        F: FnOnce() -> S,
    {
        let key = (token.secret().to_owned(), TypeId::of::<S>());
        let entry = self
            .services
            .entry(key)
            .or_insert_with(|| {
                debug!(service = type_name::<S>(), "constructing service instance");
                Arc::new(init())
            })
            .clone();

        match entry.downcast() {
            Ok(service) => service,
            // The key embeds TypeId::of::<S>(), so the stored value is
            // always an Arc<S>.
            Err(_) => unreachable!("registry entry type matches its key"),
        }
    }

    /// Drop every instance cached for the given credential.
    ///
    /// Call when the credential itself is discarded; the instances die with
    /// it.
    pub fn discard_credential(&self, token: &AccessToken) {
        self.services
            .retain(|(identity, _), _| identity != token.secret());
    }

    /// Number of live service instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether the registry holds no instances.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
