use std::{sync::Arc, time::Instant};

use crate::{
    application::config::RuntimeConfig,
    domain::{browser::BrowserMatcher, error::DomainError},
};

#[derive(Clone)]
pub struct SharedState {
    inner: Arc<InnerState>,
}

struct InnerState {
    config: RuntimeConfig,
    matcher: BrowserMatcher,
    started_at: Instant,
}

impl SharedState {
    pub fn new(config: RuntimeConfig) -> Result<Self, DomainError> {
        let matcher = BrowserMatcher::firefox()?;

        Ok(Self {
            inner: Arc::new(InnerState {
                config,
                matcher,
                started_at: Instant::now(),
            }),
        })
    }

    #[must_use]
    pub fn config(&self) -> &RuntimeConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn matcher(&self) -> &BrowserMatcher {
        &self.inner.matcher
    }

    #[must_use]
    pub fn uptime_ms(&self) -> u64 {
        u64::try_from(self.inner.started_at.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}
