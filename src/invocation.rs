//! Per-call records: arguments, name-based bindings, and outcomes.

use std::fmt;
use std::sync::Arc;

use crate::container::AnyArc;
use crate::descriptors::MethodDescriptor;

/// One factory-method argument.
///
/// `Null` is an explicit null for a reference-typed parameter. It binds the
/// container override to null; it is never treated as "unset", so the
/// container must not substitute a resolved instance for it.
#[derive(Clone)]
pub enum ArgValue {
    /// A present value.
    Value(AnyArc),
    /// An explicit null.
    Null,
}

impl ArgValue {
    /// Wrap a concrete value.
    pub fn of<T: Send + Sync + 'static>(value: T) -> Self {
        ArgValue::Value(Arc::new(value))
    }

    /// Wrap a shared contract instance (`Arc<dyn Trait>`).
    pub fn contract<T: ?Sized + Send + Sync + 'static>(value: Arc<T>) -> Self {
        ArgValue::Value(Arc::new(value))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ArgValue::Null)
    }

    /// Downcast to a concrete type. `None` for nulls and type disagreement.
    pub fn downcast<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        match self {
            ArgValue::Value(value) => value.clone().downcast::<T>().ok(),
            ArgValue::Null => None,
        }
    }

    /// Downcast to a contract instance stored via [`contract`](Self::contract).
    pub fn downcast_contract<T: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        match self {
            ArgValue::Value(value) => {
                value.clone().downcast::<Arc<T>>().ok().map(|boxed| (*boxed).clone())
            }
            ArgValue::Null => None,
        }
    }
}

impl fmt::Debug for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Value(_) => f.write_str("Value(..)"),
            ArgValue::Null => f.write_str("Null"),
        }
    }
}

/// A (parameter name, value) override handed to the container, built 1:1
/// from the invocation's parallel name and argument arrays. Lives for the
/// duration of one call.
#[derive(Debug, Clone)]
pub struct Binding {
    pub name: &'static str,
    pub value: ArgValue,
}

/// One call event on a factory method. Ephemeral; created by the proxy per
/// call and discarded when the call returns or fails.
pub struct Invocation<'a> {
    contract: &'static str,
    method: &'a MethodDescriptor,
    arguments: &'a [ArgValue],
}

impl<'a> Invocation<'a> {
    pub fn new(
        contract: &'static str,
        method: &'a MethodDescriptor,
        arguments: &'a [ArgValue],
    ) -> Self {
        Self { contract, method, arguments }
    }

    /// Reflected name of the factory contract this call came through.
    pub fn contract(&self) -> &'static str {
        self.contract
    }

    pub fn method(&self) -> &'a MethodDescriptor {
        self.method
    }

    pub fn arguments(&self) -> &[ArgValue] {
        self.arguments
    }

    /// Pair each argument position with the declared parameter name at that
    /// position. Zero arguments yield no bindings.
    pub fn bindings(&self) -> Vec<Binding> {
        self.method
            .parameter_names()
            .zip(self.arguments.iter())
            .map(|(name, value)| Binding { name, value: value.clone() })
            .collect()
    }
}

/// What a successful factory call produced.
pub enum CallOutcome {
    /// A single resolved instance.
    One(AnyArc),
    /// An eagerly materialized sequence of resolved instances.
    Many(Vec<AnyArc>),
}

impl CallOutcome {
    /// The single instance, downcast to `T`. `None` for sequences and type
    /// disagreement.
    pub fn single_as<T: Send + Sync + 'static>(self) -> Option<Arc<T>> {
        match self {
            CallOutcome::One(value) => value.downcast::<T>().ok(),
            CallOutcome::Many(_) => None,
        }
    }

    /// The sequence, with every element downcast to `T`.
    pub fn sequence_as<T: Send + Sync + 'static>(self) -> Option<Vec<Arc<T>>> {
        match self {
            CallOutcome::One(_) => None,
            CallOutcome::Many(values) => values
                .into_iter()
                .map(|value| value.downcast::<T>().ok())
                .collect(),
        }
    }
}

impl fmt::Debug for CallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallOutcome::One(_) => f.write_str("One(..)"),
            CallOutcome::Many(values) => write!(f, "Many(len={})", values.len()),
        }
    }
}
