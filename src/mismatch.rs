//! Mismatch diagnoser: explains failed resolutions by parameter naming.
//!
//! Constructors are often overloaded, so the diagnoser reports the closest
//! match (the constructor with the smallest set of unmatched factory
//! parameter names). That is the most actionable diagnostic short of full
//! overload-resolution semantics. When every constructor's parameter names
//! cover the factory method's names, there is no naming explanation and the
//! caller must let the original container failure stand.

use crate::descriptors::{ConstructorSpec, MethodDescriptor, ParameterSpec, TargetManifest};

/// Which constructor a failed factory call most plausibly intended, and
/// which of the factory method's parameters it does not accept.
#[derive(Debug, Clone)]
pub struct MismatchReport {
    constructor: ConstructorSpec,
    unmatched: Vec<ParameterSpec>,
}

impl MismatchReport {
    /// The offending constructor.
    pub fn constructor(&self) -> &ConstructorSpec {
        &self.constructor
    }

    /// Factory method parameters with no name counterpart in the
    /// constructor, in method declaration order.
    pub fn unmatched(&self) -> &[ParameterSpec] {
        &self.unmatched
    }

    /// Names of the unmatched parameters.
    pub fn unmatched_names(&self) -> Vec<&'static str> {
        self.unmatched.iter().map(|p| p.name()).collect()
    }

    pub(crate) fn into_parts(self) -> (ConstructorSpec, Vec<ParameterSpec>) {
        (self.constructor, self.unmatched)
    }
}

/// Diagnose a failed resolution of `target` through `method`.
///
/// For each declared constructor the unmatched set is the factory parameter
/// names minus the names the constructor shares with them, compared
/// case-sensitively with no type-aware or fuzzy matching. Constructors with
/// a non-empty unmatched set are candidate explanations; the one with the
/// fewest unmatched names wins, ties going to the first-declared
/// constructor. `None` means no constructor offers a naming explanation.
///
/// # Examples
///
/// ```rust
/// use typed_factories::{diagnose, ConstructorSpec, MethodDescriptor, TargetManifest};
///
/// trait Widget {}
/// struct TextWidget;
///
/// let method = MethodDescriptor::single::<dyn Widget>("create")
///     .param::<String>("label")
///     .param::<u32>("width");
/// let target = TargetManifest::of::<TextWidget>()
///     .constructor(ConstructorSpec::new().param::<String>("title").param::<u32>("width"));
///
/// let report = diagnose(&method, &target).unwrap();
/// assert_eq!(report.unmatched_names(), ["label"]);
/// ```
pub fn diagnose(method: &MethodDescriptor, target: &TargetManifest) -> Option<MismatchReport> {
    let mut best: Option<(&ConstructorSpec, Vec<&'static str>)> = None;

    for constructor in target.constructors() {
        let missing: Vec<&'static str> = method
            .parameter_names()
            .filter(|name| !constructor.has_param(name))
            .collect();
        if missing.is_empty() {
            // This constructor accepts every factory parameter name; it is
            // not a naming explanation for the failure.
            continue;
        }
        // Strict comparison keeps the first-declared constructor on ties.
        let better = match &best {
            Some((_, current)) => missing.len() < current.len(),
            None => true,
        };
        if better {
            best = Some((constructor, missing));
        }
    }

    best.map(|(constructor, missing)| MismatchReport {
        constructor: constructor.clone(),
        unmatched: method
            .parameters()
            .iter()
            .filter(|p| missing.contains(&p.name()))
            .cloned()
            .collect(),
    })
}
