//! Checker resolution: the factory handle and the provider strategy.
//!
//! A [`CheckerFactory`] is an explicit handle holding a baseline checker, an
//! optional substitute and a stack of scoped overrides. Clones share state, so
//! installing a substitute affects every validator that resolves through any
//! clone of the handle. Tests should build their own handle or use
//! [`CheckerFactory::override_checker`]; each guard removes only its own entry
//! when dropped, whatever the drop order.

use std::fmt;
use std::sync::{Arc, LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::checker::{ExtensionChecker, ListExtensionChecker};
use crate::config::AnalyzerConfig;

/// Hands a validator the checker it should use.
///
/// This is the seam for specializing a validator without touching the factory
/// or the injection path. Any `Fn() -> Arc<dyn ExtensionChecker>` is a provider.
pub trait CheckerProvider: Send + Sync {
    /// The checker to use from now on.
    fn checker(&self) -> Arc<dyn ExtensionChecker>;
}

impl<F> CheckerProvider for F
where
    F: Fn() -> Arc<dyn ExtensionChecker> + Send + Sync,
{
    fn checker(&self) -> Arc<dyn ExtensionChecker> {
        self()
    }
}

static GLOBAL_FACTORY: LazyLock<CheckerFactory> = LazyLock::new(CheckerFactory::default);

struct FactoryState {
    baseline: Arc<dyn ExtensionChecker>,
    substitute: Option<Arc<dyn ExtensionChecker>>,
    /// Scoped overrides in install order; the last entry wins.
    overrides: Vec<(u64, Arc<dyn ExtensionChecker>)>,
    next_override_id: u64,
}

impl FactoryState {
    fn active(&self) -> &Arc<dyn ExtensionChecker> {
        self.overrides
            .last()
            .map(|(_, checker)| checker)
            .or(self.substitute.as_ref())
            .unwrap_or(&self.baseline)
    }
}

/// Shared, resettable source of the default checker.
#[derive(Clone)]
pub struct CheckerFactory {
    state: Arc<RwLock<FactoryState>>,
}

impl CheckerFactory {
    /// A factory whose baseline is `default`.
    #[must_use]
    pub fn new(default: Arc<dyn ExtensionChecker>) -> Self {
        Self {
            state: Arc::new(RwLock::new(FactoryState {
                baseline: default,
                substitute: None,
                overrides: Vec::new(),
                next_override_id: 0,
            })),
        }
    }

    /// A factory whose baseline is a [`ListExtensionChecker`] built from `config`.
    #[must_use]
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self::new(Arc::new(ListExtensionChecker::from_config(config)))
    }

    /// The process-wide factory, initialized with the default config on first use.
    ///
    /// Substituting on this handle is a global mutation. Treat it as a one-time
    /// configuration step or scope it with [`CheckerFactory::override_checker`].
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL_FACTORY
    }

    /// The most recent live scoped override, else the substitute, else the baseline.
    #[must_use]
    pub fn checker(&self) -> Arc<dyn ExtensionChecker> {
        Arc::clone(self.read().active())
    }

    /// Install `checker` as the substitute for every holder of this handle.
    ///
    /// Live scoped overrides still take precedence until their guards drop.
    pub fn set_default_checker(&self, checker: Arc<dyn ExtensionChecker>) {
        self.write().substitute = Some(checker);
        tracing::info!("Installed substitute extension checker");
    }

    /// Drop the substitute and every scoped override and go back to the
    /// baseline checker.
    ///
    /// Guards that are still alive become no-ops when dropped.
    pub fn reset(&self) {
        let mut state = self.write();
        let had_override = state.substitute.take().is_some() || !state.overrides.is_empty();
        state.overrides.clear();
        drop(state);
        if had_override {
            tracing::info!("Restored baseline extension checker");
        }
    }

    /// Whether a substitute or a scoped override is currently installed.
    #[must_use]
    pub fn has_override(&self) -> bool {
        let state = self.read();
        state.substitute.is_some() || !state.overrides.is_empty()
    }

    /// Install `checker` until the returned guard is dropped.
    ///
    /// Dropping the guard removes exactly this override. Overrides installed
    /// later that are still alive keep precedence, and a `reset` in the
    /// meantime is not undone.
    pub fn override_checker(&self, checker: Arc<dyn ExtensionChecker>) -> CheckerOverride<'_> {
        let mut state = self.write();
        let id = state.next_override_id;
        state.next_override_id += 1;
        state.overrides.push((id, checker));
        drop(state);
        tracing::debug!(id, "Scoped extension checker override installed");
        CheckerOverride { factory: self, id }
    }

    fn read(&self) -> RwLockReadGuard<'_, FactoryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FactoryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CheckerFactory {
    fn default() -> Self {
        Self::from_config(&AnalyzerConfig::default())
    }
}

impl fmt::Debug for CheckerFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckerFactory")
            .field("has_override", &self.has_override())
            .finish_non_exhaustive()
    }
}

impl CheckerProvider for CheckerFactory {
    fn checker(&self) -> Arc<dyn ExtensionChecker> {
        Self::checker(self)
    }
}

/// Scope guard returned by [`CheckerFactory::override_checker`].
#[must_use = "the override is removed as soon as the guard is dropped"]
pub struct CheckerOverride<'a> {
    factory: &'a CheckerFactory,
    id: u64,
}

impl Drop for CheckerOverride<'_> {
    fn drop(&mut self) {
        let id = self.id;
        self.factory.write().overrides.retain(|(entry, _)| *entry != id);
        tracing::debug!(id, "Scoped extension checker override removed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::DecisionChecker;

    fn always(answer: bool) -> Arc<dyn ExtensionChecker> {
        Arc::new(DecisionChecker::new(move |_: &str| answer))
    }

    #[test]
    fn test_default_factory_uses_list_checker() {
        let factory = CheckerFactory::default();
        assert!(!factory.has_override());
        assert_eq!(factory.checker().is_acceptable("a.SLF"), Ok(true));
        assert_eq!(factory.checker().is_acceptable("a.foo"), Ok(false));
    }

    #[test]
    fn test_set_default_checker_and_reset() {
        let factory = CheckerFactory::default();
        factory.set_default_checker(always(true));
        assert!(factory.has_override());
        assert_eq!(factory.checker().is_acceptable("a.foo"), Ok(true));

        factory.reset();
        assert!(!factory.has_override());
        assert_eq!(factory.checker().is_acceptable("a.foo"), Ok(false));
    }

    #[test]
    fn test_clones_share_substitute() {
        let factory = CheckerFactory::default();
        let clone = factory.clone();
        clone.set_default_checker(always(true));
        assert_eq!(factory.checker().is_acceptable("a.foo"), Ok(true));
    }

    #[test]
    fn test_nested_overrides_unwind() {
        let factory = CheckerFactory::default();
        factory.set_default_checker(always(true));
        {
            let _outer = factory.override_checker(always(false));
            assert_eq!(factory.checker().is_acceptable("a.slf"), Ok(false));
            {
                let _inner = factory.override_checker(always(true));
                assert_eq!(factory.checker().is_acceptable("a.foo"), Ok(true));
            }
            assert_eq!(factory.checker().is_acceptable("a.slf"), Ok(false));
        }
        assert_eq!(factory.checker().is_acceptable("a.foo"), Ok(true));
    }

    #[test]
    fn test_overrides_dropped_in_creation_order() {
        let factory = CheckerFactory::default();
        let first = factory.override_checker(always(true));
        let second = factory.override_checker(always(false));
        assert_eq!(factory.checker().is_acceptable("a.foo"), Ok(false));

        drop(first);
        // The later override is still alive and keeps precedence.
        assert_eq!(factory.checker().is_acceptable("a.foo"), Ok(false));

        drop(second);
        assert!(!factory.has_override());
        assert_eq!(factory.checker().is_acceptable("a.foo"), Ok(false));
        assert_eq!(factory.checker().is_acceptable("a.slf"), Ok(true));
    }

    #[test]
    fn test_override_dropped_before_later_one_falls_back_correctly() {
        let factory = CheckerFactory::default();
        let first = factory.override_checker(always(false));
        let second = factory.override_checker(always(true));

        drop(second);
        assert_eq!(factory.checker().is_acceptable("a.slf"), Ok(false));

        drop(first);
        assert_eq!(factory.checker().is_acceptable("a.slf"), Ok(true));
    }

    #[test]
    fn test_reset_while_guard_alive_is_not_undone() {
        let factory = CheckerFactory::default();
        factory.set_default_checker(always(true));
        let guard = factory.override_checker(always(false));

        factory.reset();
        assert!(!factory.has_override());

        drop(guard);
        assert!(!factory.has_override());
        assert_eq!(factory.checker().is_acceptable("a.foo"), Ok(false));
        assert_eq!(factory.checker().is_acceptable("a.slf"), Ok(true));
    }

    #[test]
    fn test_substitute_set_during_guard_survives_drop() {
        let factory = CheckerFactory::default();
        let guard = factory.override_checker(always(false));
        factory.set_default_checker(always(true));
        assert_eq!(factory.checker().is_acceptable("a.foo"), Ok(false));

        drop(guard);
        assert_eq!(factory.checker().is_acceptable("a.foo"), Ok(true));
    }

    #[test]
    fn test_closure_provider() {
        let provider = || always(true);
        assert_eq!(
            CheckerProvider::checker(&provider).is_acceptable("a.foo"),
            Ok(true)
        );
    }
}
