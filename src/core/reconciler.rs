use crate::core::{DomainSet, DomainSource, Registry, SyncReport};
use crate::utils::error::Result;

/// Desired-minus-actual set difference. The only derived entity of a pass.
pub fn pending(desired: &DomainSet, actual: &DomainSet) -> DomainSet {
    desired.difference(actual).cloned().collect()
}

/// One reconciliation unit: any number of desired-state sources on one side,
/// the registry on the other. Domains are only ever added, never deleted.
pub struct Reconciler<R: Registry> {
    sources: Vec<Box<dyn DomainSource>>,
    registry: R,
}

impl<R: Registry> Reconciler<R> {
    pub fn new(registry: R) -> Self {
        Self {
            sources: Vec::new(),
            registry,
        }
    }

    pub fn add_source(&mut self, source: Box<dyn DomainSource>) {
        self.sources.push(source);
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// 逐一載入各來源並聯集成 desired set
    pub async fn desired(&self) -> Result<DomainSet> {
        let mut desired = DomainSet::new();
        for source in &self.sources {
            let loaded = source.load().await?;
            tracing::info!("📥 {} domains from {}", loaded.len(), source.describe());
            desired.extend(loaded);
        }
        Ok(desired)
    }

    /// One pass: load desired, fetch actual, push the difference. A push
    /// failure aborts the remaining pushes; the next pass re-derives the
    /// difference and re-applies whatever is still missing.
    pub async fn reconcile(&self) -> Result<SyncReport> {
        let desired = self.desired().await?;

        tracing::info!("📡 Fetching current internal domains from the registry");
        let actual = self.registry.fetch().await?;

        let pending = pending(&desired, &actual);
        tracing::info!(
            "🔁 {} desired, {} actual, {} pending",
            desired.len(),
            actual.len(),
            pending.len()
        );

        let mut pushed = Vec::with_capacity(pending.len());
        for domain in pending {
            tracing::info!("➕ Adding internal domain '{}'", domain);
            self.registry.push(&domain).await?;
            pushed.push(domain);
        }

        Ok(SyncReport {
            desired: desired.len(),
            actual: actual.len(),
            pushed,
        })
    }
}
