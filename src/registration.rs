//! Fluent surface for registering typed factories.

use std::sync::Arc;

use crate::container::FactoryContainer;
use crate::descriptors::{ContractDescriptor, TargetManifest};
use crate::interceptor::{FactoryInterceptor, MethodHandler};
use crate::proxy::{FactoryProxy, ProxyFactory};

/// Fluent registration of one typed factory: a contract, an optional
/// registration name, and the concrete type to construct.
///
/// Each completed registration constructs one interceptor and one proxy.
///
/// # Examples
///
/// Registration reads left to right, contract first:
///
/// ```rust,ignore
/// let factory = register_typed_factory(container, contract)
///     .named("primary")
///     .for_concrete_type(target);
/// ```
pub struct TypedFactoryRegistration {
    container: Arc<dyn FactoryContainer>,
    contract: ContractDescriptor,
    name: Option<String>,
}

impl TypedFactoryRegistration {
    pub fn new(container: Arc<dyn FactoryContainer>, contract: ContractDescriptor) -> Self {
        Self { container, contract, name: None }
    }

    /// Bind the factory to the container registration stored under `name`.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Define the concrete type the factory will create, completing the
    /// registration.
    pub fn for_concrete_type(self, target: TargetManifest) -> FactoryProxy {
        let handler: Arc<dyn MethodHandler> = match self.name {
            Some(name) => Arc::new(FactoryInterceptor::named(self.container, target, name)),
            None => Arc::new(FactoryInterceptor::new(self.container, target)),
        };
        ProxyFactory::shared().create_proxy(self.contract, handler)
    }
}

/// Start registering a typed factory for `contract` against `container`.
pub fn register_typed_factory(
    container: Arc<dyn FactoryContainer>,
    contract: ContractDescriptor,
) -> TypedFactoryRegistration {
    TypedFactoryRegistration::new(container, contract)
}
