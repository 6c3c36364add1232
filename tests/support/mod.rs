//! A hand-rolled container double for exercising the factory layer.
//!
//! Constructors are closures registered per target type; each one reads its
//! parameters by name, preferring the call-site overrides and falling back
//! to the container's own ambient registrations, which is exactly the
//! contract a real container's binding layer provides.

#![allow(dead_code)] // Each test binary uses a subset of the helpers.

use std::collections::HashMap;
use std::sync::Arc;

use typed_factories::{AnyArc, ArgValue, Binding, FactoryContainer, Key, ResolveFailure};

pub type Ctor = Arc<dyn Fn(&ResolveArgs<'_>) -> Result<AnyArc, ResolveFailure> + Send + Sync>;

/// Wrap a constructor closure.
pub fn ctor<F>(f: F) -> Ctor
where
    F: Fn(&ResolveArgs<'_>) -> Result<AnyArc, ResolveFailure> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Per-resolution view over call-site overrides and ambient registrations,
/// looked up by constructor parameter name.
pub struct ResolveArgs<'a> {
    overrides: &'a [Binding],
    ambient: &'a HashMap<&'static str, ArgValue>,
}

impl ResolveArgs<'_> {
    fn lookup(&self, name: &str) -> Option<&ArgValue> {
        self.overrides
            .iter()
            .find(|b| b.name == name)
            .map(|b| &b.value)
            .or_else(|| self.ambient.get(name))
    }

    /// Required concrete parameter; absence is a binding-layer failure.
    pub fn require<T: Send + Sync + 'static>(&self, name: &str) -> Result<Arc<T>, ResolveFailure> {
        match self.lookup(name) {
            Some(value) => value.downcast::<T>().ok_or_else(|| wrong_type(name)),
            None => Err(missing(name)),
        }
    }

    /// Required contract parameter (`Arc<dyn Trait>` stored via
    /// `ArgValue::contract`).
    pub fn require_contract<T: ?Sized + Send + Sync + 'static>(
        &self,
        name: &str,
    ) -> Result<Arc<T>, ResolveFailure> {
        match self.lookup(name) {
            Some(value) => value.downcast_contract::<T>().ok_or_else(|| wrong_type(name)),
            None => Err(missing(name)),
        }
    }

    /// Optional reference parameter: an explicit null binds through as
    /// `None`, it never falls back to an ambient registration.
    pub fn optional<T: Send + Sync + 'static>(
        &self,
        name: &str,
    ) -> Result<Option<Arc<T>>, ResolveFailure> {
        match self.lookup(name) {
            Some(ArgValue::Null) => Ok(None),
            Some(value) => match value.downcast::<T>() {
                Some(v) => Ok(Some(v)),
                None => Err(wrong_type(name)),
            },
            None => Err(missing(name)),
        }
    }
}

fn missing(name: &str) -> ResolveFailure {
    ResolveFailure::Binding(format!("no value for parameter {}", name).into())
}

fn wrong_type(name: &str) -> ResolveFailure {
    ResolveFailure::Binding(format!("parameter {} has the wrong type", name).into())
}

/// In-memory container keyed by target type name.
#[derive(Default)]
pub struct StubContainer {
    single: HashMap<&'static str, Ctor>,
    named: HashMap<(&'static str, String), Ctor>,
    all: HashMap<&'static str, Vec<Ctor>>,
    ambient: HashMap<&'static str, ArgValue>,
}

impl StubContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the default constructor for a target; also appended to the
    /// resolve-all list.
    pub fn register(&mut self, target: Key, constructor: Ctor) {
        self.all.entry(target.display_name()).or_default().push(constructor.clone());
        self.single.insert(target.display_name(), constructor);
    }

    /// Register a constructor under a registration name.
    pub fn register_named(&mut self, target: Key, name: impl Into<String>, constructor: Ctor) {
        self.named.insert((target.display_name(), name.into()), constructor);
    }

    /// Append an additional constructor to the resolve-all list only.
    pub fn register_additional(&mut self, target: Key, constructor: Ctor) {
        self.all.entry(target.display_name()).or_default().push(constructor);
    }

    /// Ambient value resolvable by parameter name when no override matches.
    pub fn provide(&mut self, name: &'static str, value: ArgValue) {
        self.ambient.insert(name, value);
    }

    fn args<'a>(&'a self, overrides: &'a [Binding]) -> ResolveArgs<'a> {
        ResolveArgs { overrides, ambient: &self.ambient }
    }
}

impl FactoryContainer for StubContainer {
    fn resolve(&self, target: Key, overrides: &[Binding]) -> Result<AnyArc, ResolveFailure> {
        let constructor = self
            .single
            .get(target.display_name())
            .ok_or(ResolveFailure::NotFound(target.display_name()))?;
        constructor(&self.args(overrides))
    }

    fn resolve_named(
        &self,
        target: Key,
        name: &str,
        overrides: &[Binding],
    ) -> Result<AnyArc, ResolveFailure> {
        let constructor = self
            .named
            .get(&(target.display_name(), name.to_string()))
            .ok_or(ResolveFailure::NotFound(target.display_name()))?;
        constructor(&self.args(overrides))
    }

    fn resolve_all(
        &self,
        target: Key,
        overrides: &[Binding],
    ) -> Result<Vec<AnyArc>, ResolveFailure> {
        let Some(constructors) = self.all.get(target.display_name()) else {
            return Ok(Vec::new());
        };
        constructors.iter().map(|c| c(&self.args(overrides))).collect()
    }
}
