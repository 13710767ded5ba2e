// ABOUTME: Client facade handing out registry-cached service instances
// ABOUTME: Owns the transport; services are created lazily, once per credential
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Arc;

use strava_core::models::AccessToken;
use strava_core::paging::PagingConfig;

use crate::config::StravaConfig;
use crate::registry::ServiceRegistry;
use crate::services::activity::ActivityService;
use crate::services::athlete::AthleteService;
use crate::services::club::ClubService;
use crate::services::club_event::ClubGroupEventService;
use crate::services::token::TokenService;
use crate::transport::Transport;

/// Entry point to the Strava API.
///
/// Holds the authenticated transport and hands out service instances cached
/// in the [`ServiceRegistry`]: asking twice for the same service with the
/// same credential returns the identical instance, even from two `Strava`
/// values built around the same token.
pub struct Strava {
    transport: Arc<Transport>,
    registry: Arc<ServiceRegistry>,
    paging: PagingConfig,
}

impl Strava {
    /// Build a client with environment-derived configuration and the global
    /// registry.
    #[must_use]
    pub fn new(token: AccessToken) -> Self {
        Self::with_config(token, StravaConfig::from_env())
    }

    /// Build a client against explicit configuration.
    #[must_use]
    pub fn with_config(token: AccessToken, config: StravaConfig) -> Self {
        Self::with_registry(token, config, ServiceRegistry::global())
    }

    /// Build a client with its own registry.
    ///
    /// Tests use this for isolation; sharing the registry between clients is
    /// what makes the one-instance-per-credential guarantee hold globally.
    #[must_use]
    pub fn with_registry(
        token: AccessToken,
        config: StravaConfig,
        registry: Arc<ServiceRegistry>,
    ) -> Self {
        let paging = config.paging;
        Self {
            transport: Arc::new(Transport::new(config, token)),
            registry,
            paging,
        }
    }

    /// The credential this client authenticates with.
    #[must_use]
    pub fn token(&self) -> &AccessToken {
        self.transport.token()
    }

    /// Activity operations.
    #[must_use]
    pub fn activities(&self) -> Arc<ActivityService> {
        let transport = Arc::clone(&self.transport);
        let paging = self.paging;
        self.registry
            .get_or_create(self.transport.token(), || {
                ActivityService::new(transport, paging)
            })
    }

    /// Club operations.
    #[must_use]
    pub fn clubs(&self) -> Arc<ClubService> {
        let transport = Arc::clone(&self.transport);
        let paging = self.paging;
        self.registry
            .get_or_create(self.transport.token(), || ClubService::new(transport, paging))
    }

    /// Club group event operations.
    #[must_use]
    pub fn club_events(&self) -> Arc<ClubGroupEventService> {
        let transport = Arc::clone(&self.transport);
        let paging = self.paging;
        self.registry
            .get_or_create(self.transport.token(), || {
                ClubGroupEventService::new(transport, paging)
            })
    }

    /// Athlete operations.
    #[must_use]
    pub fn athletes(&self) -> Arc<AthleteService> {
        let transport = Arc::clone(&self.transport);
        self.registry
            .get_or_create(self.transport.token(), || AthleteService::new(transport))
    }

    /// Token lifecycle operations.
    #[must_use]
    pub fn tokens(&self) -> Arc<TokenService> {
        let transport = Arc::clone(&self.transport);
        self.registry
            .get_or_create(self.transport.token(), || TokenService::new(transport))
    }

    /// Drop this credential's cached service instances.
    ///
    /// Meant to be called when the token is discarded or deauthorized.
    pub fn discard_services(&self) {
        self.registry.discard_credential(self.transport.token());
    }
}
