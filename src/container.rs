//! Collaborator contract for the dependency-injection container.
//!
//! The container itself lives outside this crate. The factory layer only
//! needs three operations from it: resolve one instance, resolve one named
//! instance, and resolve every registration for a type, each accepting a
//! list of name-based overrides for the target's constructor parameters.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::BoxError;
use crate::invocation::Binding;
use crate::key::Key;

/// Type-erased shared instance, the currency between container and factory.
pub type AnyArc = Arc<dyn Any + Send + Sync>;

/// Why a container resolution failed.
///
/// The origin of a failure is tagged explicitly so the interceptor can tell
/// a failure of the container's own binding layer (a candidate for mismatch
/// diagnosis) apart from a failure inside the target's constructor body
/// (which must surface transparently). The container implementation is
/// responsible for tagging correctly; the factory layer never inspects
/// error text to guess the origin.
#[derive(Debug)]
pub enum ResolveFailure {
    /// The container's binding layer could not supply a constructor
    /// parameter, e.g. an override name matched nothing and no registration
    /// covered the parameter.
    Binding(BoxError),
    /// The target's constructor ran and failed.
    Construction(BoxError),
    /// No registration exists for the requested type.
    NotFound(&'static str),
}

impl fmt::Display for ResolveFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveFailure::Binding(cause) => write!(f, "binding failure: {}", cause),
            ResolveFailure::Construction(cause) => write!(f, "construction failure: {}", cause),
            ResolveFailure::NotFound(name) => write!(f, "no registration for {}", name),
        }
    }
}

impl std::error::Error for ResolveFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResolveFailure::Binding(cause) | ResolveFailure::Construction(cause) => {
                let cause: &(dyn std::error::Error + 'static) = cause.as_ref();
                Some(cause)
            }
            ResolveFailure::NotFound(_) => None,
        }
    }
}

/// Resolution surface the factory layer requires from a container.
///
/// Overrides are (parameter name, value) pairs built from the factory
/// method's call-site arguments; the container applies them in place of its
/// normal dependency resolution for the matching constructor parameters.
/// An explicit [`ArgValue::Null`](crate::ArgValue::Null) override binds the
/// parameter to null and must not fall back to a registered instance.
///
/// Thread safety of resolution is the container's concern; implementations
/// must be safe to call from concurrent factory invocations.
pub trait FactoryContainer: Send + Sync {
    /// Resolve one instance of `target`, applying `overrides` by name.
    fn resolve(&self, target: Key, overrides: &[Binding]) -> Result<AnyArc, ResolveFailure>;

    /// Resolve the instance registered for `target` under `name`.
    fn resolve_named(
        &self,
        target: Key,
        name: &str,
        overrides: &[Binding],
    ) -> Result<AnyArc, ResolveFailure>;

    /// Resolve every registration for `target` into a finite sequence.
    ///
    /// The result is eagerly materialized; callers enumerate it repeatedly.
    fn resolve_all(&self, target: Key, overrides: &[Binding])
        -> Result<Vec<AnyArc>, ResolveFailure>;
}
