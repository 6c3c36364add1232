//! Error types for the typed factory layer.

use std::fmt;

use crate::container::ResolveFailure;
use crate::descriptors::{ConstructorSpec, ParameterSpec};
use crate::mismatch::MismatchReport;

/// Boxed error cause carried across the container boundary.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Typed factory errors
///
/// Every failure of an intercepted factory call propagates to the caller as
/// one of these; nothing is logged, retried, or recovered inside the factory
/// layer. Causes from the container are chained through
/// [`std::error::Error::source`], never discarded.
///
/// # Examples
///
/// ```rust
/// use typed_factories::FactoryError;
///
/// let error = FactoryError::ContractMismatch {
///     target: "my_app::TextWidget",
///     declared: "dyn my_app::Button",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "concrete type my_app::TextWidget does not implement the factory method \
///      return type dyn my_app::Button",
/// );
/// ```
#[derive(Debug)]
pub enum FactoryError {
    /// The factory contract is malformed: a method's declared return type
    /// is not a contract trait (or a sequence of one).
    UnsupportedReturn {
        contract: &'static str,
        method: &'static str,
        declared: &'static str,
    },
    /// The target type does not implement the method's declared return
    /// contract.
    ContractMismatch {
        target: &'static str,
        declared: &'static str,
    },
    /// No method with that name exists on the factory contract.
    UnknownMethod {
        contract: &'static str,
        method: &'static str,
    },
    /// The call supplied the wrong number of arguments for the method.
    ArityMismatch {
        contract: &'static str,
        method: &'static str,
        expected: usize,
        supplied: usize,
    },
    /// Resolution failed and the diagnoser attributes it to a parameter-name
    /// mismatch between the factory method and the target's constructors.
    ConstructorMismatch(ConstructorMismatch),
    /// The target's constructor itself failed; the original cause is
    /// preserved, annotated with the target's identity.
    Construction {
        target: &'static str,
        source: BoxError,
    },
    /// The container failed for reasons unrelated to naming; the original
    /// failure is propagated unchanged.
    Unresolved {
        target: &'static str,
        failure: ResolveFailure,
    },
}

impl fmt::Display for FactoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactoryError::UnsupportedReturn { contract, method, declared } => write!(
                f,
                "factory method {}::{} must declare a contract return type, not {}",
                contract, method, declared
            ),
            FactoryError::ContractMismatch { target, declared } => write!(
                f,
                "concrete type {} does not implement the factory method return type {}",
                target, declared
            ),
            FactoryError::UnknownMethod { contract, method } => {
                write!(f, "no method {} on factory contract {}", method, contract)
            }
            FactoryError::ArityMismatch { contract, method, expected, supplied } => write!(
                f,
                "{}::{} takes {} argument(s), {} supplied",
                contract, method, expected, supplied
            ),
            FactoryError::ConstructorMismatch(mismatch) => write!(f, "{}", mismatch),
            FactoryError::Construction { target, .. } => {
                write!(f, "constructor of {} failed; see the error source for the cause", target)
            }
            FactoryError::Unresolved { target, failure } => {
                write!(f, "resolution of {} failed: {}", target, failure)
            }
        }
    }
}

impl std::error::Error for FactoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FactoryError::ConstructorMismatch(mismatch) => {
                let cause: &(dyn std::error::Error + 'static) = mismatch.source.as_ref();
                Some(cause)
            }
            FactoryError::Construction { source, .. } => {
                let cause: &(dyn std::error::Error + 'static) = source.as_ref();
                Some(cause)
            }
            FactoryError::Unresolved { failure, .. } => Some(failure),
            _ => None,
        }
    }
}

/// Structured report of a factory/constructor parameter-name mismatch.
///
/// Carries the factory contract's reflected name, the target that failed to
/// resolve, the most plausibly intended constructor, and the factory
/// method's parameters that no parameter of that constructor matches, in
/// method declaration order. The original container failure is chained as
/// the error source.
#[derive(Debug)]
pub struct ConstructorMismatch {
    contract: &'static str,
    target: &'static str,
    constructor: ConstructorSpec,
    unmatched: Vec<ParameterSpec>,
    source: BoxError,
}

impl ConstructorMismatch {
    pub fn new(
        contract: &'static str,
        target: &'static str,
        report: MismatchReport,
        source: BoxError,
    ) -> Self {
        let (constructor, unmatched) = report.into_parts();
        Self { contract, target, constructor, unmatched, source }
    }

    /// Reflected name of the factory contract.
    pub fn contract(&self) -> &'static str {
        self.contract
    }

    /// The target type that failed to resolve.
    pub fn target(&self) -> &'static str {
        self.target
    }

    /// The constructor most plausibly intended by the factory method.
    pub fn constructor(&self) -> &ConstructorSpec {
        &self.constructor
    }

    /// Factory method parameters with no counterpart in the constructor,
    /// in method declaration order.
    pub fn unmatched(&self) -> &[ParameterSpec] {
        &self.unmatched
    }

    /// Names of the unmatched parameters.
    pub fn unmatched_names(&self) -> Vec<&'static str> {
        self.unmatched.iter().map(|p| p.name()).collect()
    }
}

impl fmt::Display for ConstructorMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "resolution failed: parameter names of the typed factory contract {} do not match \
             {}'s constructor; missing in the constructor: {}",
            self.contract,
            self.target,
            self.unmatched_names().join(", ")
        )
    }
}

/// Result type for factory operations.
pub type FactoryResult<T> = Result<T, FactoryError>;
