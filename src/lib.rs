//! # typed-factories
//!
//! Typed factory generation for dependency-injection containers: given a
//! factory contract (an interface whose methods return constructed objects)
//! and a concrete target type, this crate synthesizes a dispatch-table
//! implementation of that contract whose methods resolve the target from
//! the container, passing call-site arguments into the target's constructor
//! **by parameter name** rather than by position.
//!
//! ## Features
//!
//! - **Name-based argument binding**: factory method arguments become named
//!   constructor overrides; remaining constructor parameters resolve from
//!   the container as usual
//! - **Single, named, and collection resolution**: one registration decides
//!   whether a method resolves one instance, a named instance, or every
//!   registration of the target
//! - **Actionable mismatch diagnostics**: when resolution fails in the
//!   container's binding layer, the closest constructor is identified and
//!   the factory parameters it does not accept are reported by name
//! - **Transparent failures**: constructor-body errors and genuine
//!   resolution failures propagate with their causes chained, never masked
//!   as naming problems
//! - **No runtime reflection**: contracts and constructors are described by
//!   registration-time manifests; the container stays an external
//!   collaborator behind [`FactoryContainer`]
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use typed_factories::{
//!     AnyArc, ArgValue, Binding, ContractDescriptor, ConstructorSpec, FactoryContainer,
//!     Key, MethodDescriptor, ResolveFailure, TargetManifest, TypedFactoryRegistration,
//! };
//!
//! trait Widget: Send + Sync {
//!     fn label(&self) -> &str;
//! }
//!
//! struct TextWidget {
//!     label: String,
//! }
//!
//! impl Widget for TextWidget {
//!     fn label(&self) -> &str {
//!         &self.label
//!     }
//! }
//!
//! // The factory contract: create(label) -> a Widget.
//! trait WidgetFactory {}
//!
//! // A toy container that constructs TextWidget from the `label` override.
//! struct ToyContainer;
//!
//! impl FactoryContainer for ToyContainer {
//!     fn resolve(&self, _target: Key, overrides: &[Binding]) -> Result<AnyArc, ResolveFailure> {
//!         let label = overrides
//!             .iter()
//!             .find(|b| b.name == "label")
//!             .and_then(|b| b.value.downcast::<String>())
//!             .ok_or_else(|| ResolveFailure::Binding("no value for parameter label".into()))?;
//!         Ok(Arc::new(TextWidget { label: (*label).clone() }))
//!     }
//!
//!     fn resolve_named(
//!         &self,
//!         target: Key,
//!         _name: &str,
//!         overrides: &[Binding],
//!     ) -> Result<AnyArc, ResolveFailure> {
//!         self.resolve(target, overrides)
//!     }
//!
//!     fn resolve_all(
//!         &self,
//!         target: Key,
//!         overrides: &[Binding],
//!     ) -> Result<Vec<AnyArc>, ResolveFailure> {
//!         Ok(vec![self.resolve(target, overrides)?])
//!     }
//! }
//!
//! // Describe the contract and the target, then register.
//! let contract = ContractDescriptor::of::<dyn WidgetFactory>()
//!     .method(MethodDescriptor::single::<dyn Widget>("create").param::<String>("label"));
//! let target = TargetManifest::of::<TextWidget>()
//!     .implements::<dyn Widget>()
//!     .constructor(ConstructorSpec::new().param::<String>("label"));
//!
//! let factory = TypedFactoryRegistration::new(Arc::new(ToyContainer), contract)
//!     .for_concrete_type(target);
//!
//! let outcome = factory.call("create", &[ArgValue::of("hello".to_string())]).unwrap();
//! let widget = outcome.single_as::<TextWidget>().unwrap();
//! assert_eq!(widget.label(), "hello");
//! ```
//!
//! ## Mismatch diagnosis
//!
//! When the container's binding layer fails, the [`diagnose`] pass compares
//! the factory method's parameter names against every declared constructor
//! of the target and reports the closest match, so a factory written as
//! `create(label)` against a constructor taking `title` fails with
//! "missing in the constructor: label" instead of an opaque container
//! error. Failures with no naming explanation, and failures thrown by the
//! constructor body itself, propagate unchanged with their causes intact.

pub mod container;
pub mod descriptors;
pub mod error;
pub mod interceptor;
pub mod invocation;
pub mod key;
pub mod mismatch;
pub mod proxy;
pub mod registration;

pub use container::{AnyArc, FactoryContainer, ResolveFailure};
pub use descriptors::{
    ConstructorSpec, ContractDescriptor, MethodDescriptor, ParameterSpec, ReturnSpec,
    TargetManifest,
};
pub use error::{BoxError, ConstructorMismatch, FactoryError, FactoryResult};
pub use interceptor::{FactoryInterceptor, MethodHandler};
pub use invocation::{ArgValue, Binding, CallOutcome, Invocation};
pub use key::{key_of, trait_key_of, Key};
pub use mismatch::{diagnose, MismatchReport};
pub use proxy::{FactoryProxy, ProxyFactory};
pub use registration::{register_typed_factory, TypedFactoryRegistration};
