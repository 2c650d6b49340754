//! Holder of the active [`Config`].

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::{
    validate::{is_valid_credential_structure, is_valid_service_url, normalize_service_url},
    Config, Result, Statement, StatementBatch, Transport, TursoError,
};

/// Probe statement run against every newly installed configuration.
pub const SELF_TEST_QUERY: &str = "SELECT 1";

/// Guards the active configuration behind a read/write lock.
///
/// Readers never block each other. [`ConfigStore::init`] holds the write
/// lock across install and self-test, so readers never observe a
/// configuration that has not passed its probe.
#[derive(Debug, Default)]
pub struct ConfigStore {
    active: RwLock<Option<Config>>,
}

impl ConfigStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates, normalizes, installs and probes `candidate`.
    ///
    /// Validation failures return before any lock is taken or request sent.
    /// If the probe fails the store is left unset, not restored to the
    /// previous configuration.
    pub async fn init(&self, transport: &dyn Transport, mut candidate: Config) -> Result<()> {
        if !is_valid_credential_structure(&candidate.credential) {
            return Err(TursoError::InvalidCredential);
        }
        if !is_valid_service_url(&candidate.service_url) {
            return Err(TursoError::InvalidUrl);
        }

        let mut active = self.active.write().await;

        candidate.service_url = normalize_service_url(&candidate.service_url);
        let config = active.insert(candidate);

        let probe = StatementBatch::single(Statement::new(SELF_TEST_QUERY, ()));
        if let Err(err) = transport.execute(&probe, config).await {
            warn!(url = %config.service_url, error = %err, "configuration self-test failed");
            *active = None;
            return Err(TursoError::SelfTest {
                source: Box::new(err),
            });
        }

        debug!(url = %config.service_url, "configuration installed");
        Ok(())
    }

    /// Returns a snapshot of the active configuration.
    pub async fn active(&self) -> Result<Config> {
        self.active
            .read()
            .await
            .clone()
            .ok_or(TursoError::NotInitialized)
    }

    /// Returns `true` if a configuration is installed.
    pub async fn is_initialized(&self) -> bool {
        self.active.read().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::ConfigStore;
    use crate::{Config, Result, ResultBatch, StatementBatch, Transport, TursoError};

    struct Probe {
        fail: bool,
        calls: AtomicUsize,
    }

    impl Probe {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Transport for Probe {
        async fn execute(&self, batch: &StatementBatch, config: &Config) -> Result<ResultBatch> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(batch.statements.len(), 1);
            assert_eq!(batch.statements[0].sql, "SELECT 1");
            assert!(config.service_url.starts_with("https://"));
            if self.fail {
                Err(TursoError::Http {
                    status: 401,
                    body: "bad token".to_owned(),
                })
            } else {
                Ok(Vec::new())
            }
        }
    }

    #[tokio::test]
    async fn uninitialized_store_reports_not_initialized() {
        let store = ConfigStore::new();
        assert!(matches!(
            store.active().await,
            Err(TursoError::NotInitialized)
        ));
        assert!(!store.is_initialized().await);
    }

    #[tokio::test]
    async fn init_normalizes_libsql_scheme() {
        let store = ConfigStore::new();
        let probe = Probe::new(false);
        store
            .init(&probe, Config::new("libsql://my-db.turso.io", "h.p.s"))
            .await
            .expect("init must succeed");

        let active = store.active().await.expect("must be initialized");
        assert_eq!(active.service_url, "https://my-db.turso.io");
        assert_eq!(probe.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn invalid_shapes_fail_before_probe() {
        let store = ConfigStore::new();
        let probe = Probe::new(false);

        let err = store
            .init(&probe, Config::new("https://valid.turso.io", "not-a-jwt"))
            .await
            .expect_err("must reject key");
        assert!(matches!(err, TursoError::InvalidCredential));

        let err = store
            .init(&probe, Config::new("https://wrong-domain.com", "h.p.s"))
            .await
            .expect_err("must reject url");
        assert!(matches!(err, TursoError::InvalidUrl));

        assert_eq!(probe.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failed_probe_leaves_store_unset() {
        let store = ConfigStore::new();
        store
            .init(&Probe::new(false), Config::new("https://a.turso.io", "h.p.s"))
            .await
            .expect("first init must succeed");

        let err = store
            .init(&Probe::new(true), Config::new("https://b.turso.io", "h.p.s"))
            .await
            .expect_err("probe must fail");
        match err {
            TursoError::SelfTest { source } => {
                assert!(matches!(*source, TursoError::Http { status: 401, .. }));
            }
            other => panic!("expected self-test error, got {other:?}"),
        }

        assert!(matches!(
            store.active().await,
            Err(TursoError::NotInitialized)
        ));
    }
}
