//! Factory proxies: the dispatch table standing in for generated code.
//!
//! A [`FactoryProxy`] is the live object implementing a factory contract:
//! every call is looked up in the contract's method table, packaged into an
//! [`Invocation`], and routed through the registration's [`MethodHandler`].
//! Contract method tables are shared through a process-wide
//! [`ProxyFactory`], created lazily exactly once and append-only after
//! that, so repeated registrations of the same contract reuse one table.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

#[cfg(feature = "parking-lot")]
use parking_lot::RwLock;
#[cfg(not(feature = "parking-lot"))]
use std::sync::RwLock;

use crate::descriptors::{ContractDescriptor, MethodDescriptor};
use crate::error::{FactoryError, FactoryResult};
use crate::interceptor::MethodHandler;
use crate::invocation::{ArgValue, CallOutcome, Invocation};

/// A live factory implementing one contract for one registration.
pub struct FactoryProxy {
    contract: &'static str,
    methods: Arc<[MethodDescriptor]>,
    handler: Arc<dyn MethodHandler>,
}

impl FactoryProxy {
    /// Invoke the factory method `method` with positional `arguments`.
    ///
    /// Fails with [`FactoryError::UnknownMethod`] when the contract declares
    /// no such method and [`FactoryError::ArityMismatch`] when the argument
    /// count disagrees with the declaration; otherwise the call record goes
    /// straight through the handler and its result is returned as-is.
    pub fn call(&self, method: &'static str, arguments: &[ArgValue]) -> FactoryResult<CallOutcome> {
        let descriptor = self
            .methods
            .iter()
            .find(|m| m.name() == method)
            .ok_or(FactoryError::UnknownMethod { contract: self.contract, method })?;
        if descriptor.parameters().len() != arguments.len() {
            return Err(FactoryError::ArityMismatch {
                contract: self.contract,
                method,
                expected: descriptor.parameters().len(),
                supplied: arguments.len(),
            });
        }
        let invocation = Invocation::new(self.contract, descriptor, arguments);
        self.handler.invoke(&invocation)
    }

    /// Reflected name of the implemented contract.
    pub fn contract(&self) -> &'static str {
        self.contract
    }

    /// The contract's method table.
    pub fn methods(&self) -> &[MethodDescriptor] {
        &self.methods
    }
}

/// Builds [`FactoryProxy`] instances, caching contract method tables.
///
/// The shared instance is process-wide and lazily constructed at most once,
/// even under concurrent first use. The cache is read-mostly after first
/// use and logically append-only: the first registration of a contract name
/// stores its method table, later registrations for the same name reuse it
/// only when they declare the same methods. A registration declaring a
/// different method set under an already-cached name keeps its own table;
/// its declared methods are never traded for the cached ones. The cache
/// holds no external resources, so teardown is a no-op.
pub struct ProxyFactory {
    shapes: RwLock<HashMap<&'static str, Arc<[MethodDescriptor]>>>,
}

impl ProxyFactory {
    pub fn new() -> Self {
        Self { shapes: RwLock::new(HashMap::new()) }
    }

    /// The process-wide shared instance.
    pub fn shared() -> &'static ProxyFactory {
        static SHARED: Lazy<ProxyFactory> = Lazy::new(ProxyFactory::new);
        &SHARED
    }

    /// Create a proxy implementing `contract`, routing every method call
    /// through `handler`. The proxy's method table is exactly the methods
    /// the descriptor declares, shared with the cache when they agree.
    pub fn create_proxy(
        &self,
        contract: ContractDescriptor,
        handler: Arc<dyn MethodHandler>,
    ) -> FactoryProxy {
        let name = contract.name();
        let declared = contract.into_methods();
        let methods = match self.lookup(name) {
            Some(cached) if cached.as_ref() == declared.as_slice() => cached,
            Some(_) => Arc::from(declared),
            None => self.store(name, declared),
        };
        FactoryProxy { contract: name, methods, handler }
    }

    /// Number of contracts whose method tables are cached.
    pub fn cached_contracts(&self) -> usize {
        #[cfg(feature = "parking-lot")]
        {
            self.shapes.read().len()
        }
        #[cfg(not(feature = "parking-lot"))]
        {
            self.shapes.read().unwrap_or_else(|e| e.into_inner()).len()
        }
    }

    fn lookup(&self, name: &str) -> Option<Arc<[MethodDescriptor]>> {
        #[cfg(feature = "parking-lot")]
        {
            self.shapes.read().get(name).cloned()
        }
        #[cfg(not(feature = "parking-lot"))]
        {
            self.shapes.read().unwrap_or_else(|e| e.into_inner()).get(name).cloned()
        }
    }

    fn store(
        &self,
        name: &'static str,
        methods: Vec<MethodDescriptor>,
    ) -> Arc<[MethodDescriptor]> {
        #[cfg(feature = "parking-lot")]
        let mut shapes = self.shapes.write();
        #[cfg(not(feature = "parking-lot"))]
        let mut shapes = self.shapes.write().unwrap_or_else(|e| e.into_inner());
        match shapes.entry(name) {
            // A racing registration stored a table first; share it only if
            // it declares the same methods.
            Entry::Occupied(entry) if entry.get().as_ref() == methods.as_slice() => {
                entry.get().clone()
            }
            Entry::Occupied(_) => Arc::from(methods),
            Entry::Vacant(entry) => entry.insert(Arc::from(methods)).clone(),
        }
    }
}

impl Default for ProxyFactory {
    fn default() -> Self {
        Self::new()
    }
}
