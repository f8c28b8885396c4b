use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
    time::{Duration, Instant},
};

use super::{redact, AuthResult, Authenticator};

/// Remembers accepted credentials for `ttl`. Denials always reach the inner authenticator.
#[derive(Debug)]
pub struct CachedAuthenticator<A> {
    inner: A,
    ttl: Duration,
    entries: Mutex<HashMap<String, (Instant, AuthResult)>>,
}

impl<A> CachedAuthenticator<A> {
    pub fn new(inner: A, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn lookup(&self, auth: &str) -> Option<AuthResult> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        match entries.get(auth) {
            Some((stored_at, result)) if stored_at.elapsed() < self.ttl => Some(result.clone()),
            Some(_) => {
                entries.remove(auth);
                None
            }
            None => None,
        }
    }

    fn store(&self, auth: &str, result: &AuthResult) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        // Sweep expired entries on every insert.
        let ttl = self.ttl;
        entries.retain(|_, (stored_at, _)| stored_at.elapsed() < ttl);
        entries.insert(auth.to_string(), (Instant::now(), result.clone()));
    }
}

impl<A> Authenticator for CachedAuthenticator<A>
where
    A: Authenticator + Sync,
{
    async fn authenticate(&self, auth: &str, addr: &str) -> AuthResult {
        if self.ttl.is_zero() {
            return self.inner.authenticate(auth, addr).await;
        }

        if let Some(hit) = self.lookup(auth) {
            tracing::debug!(addr, auth = %redact(auth), "auth cache hit");
            return hit;
        }

        let result = self.inner.authenticate(auth, addr).await;
        if result.ok {
            self.store(auth, &result);
        }
        result
    }
}
