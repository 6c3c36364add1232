//! Invocation interceptor: routes factory calls to the container.

use std::sync::Arc;

use crate::container::{FactoryContainer, ResolveFailure};
use crate::descriptors::{ReturnSpec, TargetManifest};
use crate::error::{ConstructorMismatch, FactoryError, FactoryResult};
use crate::invocation::{Binding, CallOutcome, Invocation};
use crate::mismatch::diagnose;

/// Handler for one intercepted factory-method call.
///
/// This is the dispatch seam between the generated factory surface and the
/// interception core: the proxy builds a structured call record and hands it
/// to whatever handler was selected at registration time.
pub trait MethodHandler: Send + Sync {
    fn invoke(&self, invocation: &Invocation<'_>) -> FactoryResult<CallOutcome>;
}

/// Implements factory methods by resolving the target type from the
/// container, passing the call arguments into the target's constructor by
/// parameter name.
///
/// One interceptor backs one registration. It keeps no per-call state and
/// never memoizes resolved instances; every call is resolved independently,
/// with instance lifetime management left entirely to the container. On a
/// binding-layer failure it runs the mismatch diagnoser before propagating,
/// so factories misnamed against their target's constructors fail with an
/// actionable [`ConstructorMismatch`] instead of an opaque container error.
pub struct FactoryInterceptor {
    container: Arc<dyn FactoryContainer>,
    target: TargetManifest,
    name: Option<String>,
}

impl FactoryInterceptor {
    /// An interceptor resolving the default registration of the target.
    pub fn new(container: Arc<dyn FactoryContainer>, target: TargetManifest) -> Self {
        Self { container, target, name: None }
    }

    /// An interceptor resolving the registration bound under `name`.
    /// Sequence-returning methods resolve every registration and ignore
    /// the name.
    pub fn named(
        container: Arc<dyn FactoryContainer>,
        target: TargetManifest,
        name: impl Into<String>,
    ) -> Self {
        Self { container, target, name: Some(name.into()) }
    }

    /// The target manifest this interceptor constructs.
    pub fn target(&self) -> &TargetManifest {
        &self.target
    }

    fn check_contract_shape(&self, invocation: &Invocation<'_>) -> FactoryResult<()> {
        let declared = invocation.method().returns().declared();
        if !declared.is_contract() {
            return Err(FactoryError::UnsupportedReturn {
                contract: invocation.contract(),
                method: invocation.method().name(),
                declared: declared.display_name(),
            });
        }
        if !self.target.implements_contract(declared.display_name()) {
            return Err(FactoryError::ContractMismatch {
                target: self.target.type_name(),
                declared: declared.display_name(),
            });
        }
        Ok(())
    }

    fn dispatch(&self, invocation: &Invocation<'_>, overrides: &[Binding])
        -> Result<CallOutcome, ResolveFailure>
    {
        match invocation.method().returns() {
            ReturnSpec::Sequence(_) => self
                .container
                .resolve_all(self.target.key(), overrides)
                .map(CallOutcome::Many),
            ReturnSpec::Single(_) => match &self.name {
                Some(name) => self.container.resolve_named(self.target.key(), name, overrides),
                None => self.container.resolve(self.target.key(), overrides),
            }
            .map(CallOutcome::One),
        }
    }

    fn translate_failure(
        &self,
        invocation: &Invocation<'_>,
        failure: ResolveFailure,
    ) -> FactoryError {
        match failure {
            ResolveFailure::Binding(cause) => {
                match diagnose(invocation.method(), &self.target) {
                    Some(report) => FactoryError::ConstructorMismatch(ConstructorMismatch::new(
                        invocation.contract(),
                        self.target.type_name(),
                        report,
                        cause,
                    )),
                    // No constructor shows a naming explanation; the
                    // genuine resolution failure propagates unchanged.
                    None => FactoryError::Unresolved {
                        target: self.target.type_name(),
                        failure: ResolveFailure::Binding(cause),
                    },
                }
            }
            ResolveFailure::Construction(cause) => FactoryError::Construction {
                target: self.target.type_name(),
                source: cause,
            },
            not_found @ ResolveFailure::NotFound(_) => FactoryError::Unresolved {
                target: self.target.type_name(),
                failure: not_found,
            },
        }
    }
}

impl MethodHandler for FactoryInterceptor {
    fn invoke(&self, invocation: &Invocation<'_>) -> FactoryResult<CallOutcome> {
        self.check_contract_shape(invocation)?;
        let overrides = invocation.bindings();
        self.dispatch(invocation, &overrides)
            .map_err(|failure| self.translate_failure(invocation, failure))
    }
}
