//! Build-time manifests describing factory contracts and target types.
//!
//! The original typed-factory pattern discovers method and constructor
//! parameter names through runtime reflection. Here the registration step
//! supplies the same information as explicit manifests: a
//! [`ContractDescriptor`] lists the factory's methods with their named,
//! ordered parameters and declared return contracts, and a
//! [`TargetManifest`] lists the concrete type's implemented contracts and
//! public constructors. The name-matching algorithms are unchanged; only
//! the source of the names moved from reflection to registration.

use crate::key::{key_of, trait_key_of, Key};

/// One named parameter: of a factory method or of a target constructor.
///
/// # Examples
///
/// ```rust
/// use typed_factories::ParameterSpec;
///
/// trait Clock {}
///
/// let label = ParameterSpec::of::<String>("label");
/// assert_eq!(label.name(), "label");
/// assert!(!label.ty().is_contract());
///
/// let clock = ParameterSpec::contract::<dyn Clock>("clock");
/// assert!(clock.ty().is_contract());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    name: &'static str,
    ty: Key,
}

impl ParameterSpec {
    /// A parameter of concrete type `T`.
    pub fn of<T: 'static>(name: &'static str) -> Self {
        Self { name, ty: key_of::<T>() }
    }

    /// A parameter of contract type `T`.
    pub fn contract<T: ?Sized + 'static>(name: &'static str) -> Self {
        Self { name, ty: trait_key_of::<T>() }
    }

    /// The declared parameter name. Matching against constructor parameter
    /// names is case-sensitive and exact.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The declared parameter type.
    pub fn ty(&self) -> Key {
        self.ty
    }
}

/// Declared return type of a factory method.
#[derive(Debug, Clone, PartialEq)]
pub enum ReturnSpec {
    /// One instance of the declared contract.
    Single(Key),
    /// A homogeneous sequence of the declared contract; the key is the
    /// element type.
    Sequence(Key),
}

impl ReturnSpec {
    /// The declared contract key (the element key for sequences).
    pub fn declared(&self) -> Key {
        match self {
            ReturnSpec::Single(key) | ReturnSpec::Sequence(key) => *key,
        }
    }

    /// Whether the method returns a sequence of the contract.
    pub fn is_sequence(&self) -> bool {
        matches!(self, ReturnSpec::Sequence(_))
    }
}

/// One factory method: name, ordered named parameters, declared return type.
///
/// # Examples
///
/// ```rust
/// use typed_factories::MethodDescriptor;
///
/// trait Widget {}
///
/// let create = MethodDescriptor::single::<dyn Widget>("create")
///     .param::<String>("label")
///     .param::<u32>("width");
///
/// assert_eq!(create.name(), "create");
/// assert_eq!(create.parameter_names().collect::<Vec<_>>(), ["label", "width"]);
/// assert!(!create.returns().is_sequence());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDescriptor {
    name: &'static str,
    parameters: Vec<ParameterSpec>,
    returns: ReturnSpec,
}

impl MethodDescriptor {
    /// A method with an explicit return declaration.
    ///
    /// Prefer [`single`](Self::single) or [`sequence`](Self::sequence);
    /// this exists for contracts whose declared return type has to be
    /// spelled out, including malformed ones under test.
    pub fn new(name: &'static str, returns: ReturnSpec) -> Self {
        Self { name, parameters: Vec::new(), returns }
    }

    /// A method returning one instance of contract `T`.
    pub fn single<T: ?Sized + 'static>(name: &'static str) -> Self {
        Self::new(name, ReturnSpec::Single(trait_key_of::<T>()))
    }

    /// A method returning a sequence of contract `T`.
    pub fn sequence<T: ?Sized + 'static>(name: &'static str) -> Self {
        Self::new(name, ReturnSpec::Sequence(trait_key_of::<T>()))
    }

    /// Append a parameter of concrete type `P`.
    pub fn param<P: 'static>(mut self, name: &'static str) -> Self {
        self.parameters.push(ParameterSpec::of::<P>(name));
        self
    }

    /// Append a parameter of contract type `P`.
    pub fn contract_param<P: ?Sized + 'static>(mut self, name: &'static str) -> Self {
        self.parameters.push(ParameterSpec::contract::<P>(name));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    pub fn returns(&self) -> &ReturnSpec {
        &self.returns
    }

    /// Declared parameter names in positional order.
    pub fn parameter_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.parameters.iter().map(|p| p.name)
    }
}

/// A whole factory contract: the interface whose methods create instances.
///
/// # Examples
///
/// ```rust
/// use typed_factories::{ContractDescriptor, MethodDescriptor};
///
/// trait Widget {}
/// trait WidgetFactory {}
///
/// let contract = ContractDescriptor::of::<dyn WidgetFactory>()
///     .method(MethodDescriptor::single::<dyn Widget>("create").param::<String>("label"))
///     .method(MethodDescriptor::sequence::<dyn Widget>("create_all"));
///
/// assert!(contract.name().contains("WidgetFactory"));
/// assert_eq!(contract.methods().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ContractDescriptor {
    name: &'static str,
    methods: Vec<MethodDescriptor>,
}

impl ContractDescriptor {
    /// Describe the factory contract trait `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self { name: std::any::type_name::<T>(), methods: Vec::new() }
    }

    /// Append a method to the contract.
    pub fn method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn methods(&self) -> &[MethodDescriptor] {
        &self.methods
    }

    pub(crate) fn into_methods(self) -> Vec<MethodDescriptor> {
        self.methods
    }
}

/// One public constructor of the target type, as an ordered parameter-name
/// manifest.
#[derive(Debug, Clone, Default)]
pub struct ConstructorSpec {
    parameters: Vec<ParameterSpec>,
}

impl ConstructorSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter of concrete type `P`.
    pub fn param<P: 'static>(mut self, name: &'static str) -> Self {
        self.parameters.push(ParameterSpec::of::<P>(name));
        self
    }

    /// Append a parameter of contract type `P`.
    pub fn contract_param<P: ?Sized + 'static>(mut self, name: &'static str) -> Self {
        self.parameters.push(ParameterSpec::contract::<P>(name));
        self
    }

    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    /// Exact, case-sensitive parameter name lookup.
    pub fn has_param(&self, name: &str) -> bool {
        self.parameters.iter().any(|p| p.name == name)
    }
}

/// The concrete type a factory contract is bound to construct.
///
/// Carries the target's identity, the contract traits it implements (used
/// for the return-type assignability precondition), and its public
/// constructors in declaration order (used by the mismatch diagnoser).
/// Constructors declared on ancestors are not listed; the manifest covers
/// the target's own constructors only.
///
/// # Examples
///
/// ```rust
/// use typed_factories::{ConstructorSpec, TargetManifest};
///
/// trait Widget {}
/// struct TextWidget;
/// impl Widget for TextWidget {}
///
/// let target = TargetManifest::of::<TextWidget>()
///     .implements::<dyn Widget>()
///     .constructor(ConstructorSpec::new().param::<String>("label"));
///
/// assert!(target.implements_contract(std::any::type_name::<dyn Widget>()));
/// assert_eq!(target.constructors().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TargetManifest {
    key: Key,
    contracts: Vec<&'static str>,
    constructors: Vec<ConstructorSpec>,
}

impl TargetManifest {
    /// Describe the concrete type `T`.
    pub fn of<T: 'static>() -> Self {
        Self { key: key_of::<T>(), contracts: Vec::new(), constructors: Vec::new() }
    }

    /// Declare that the target implements contract `C`.
    pub fn implements<C: ?Sized + 'static>(mut self) -> Self {
        self.contracts.push(std::any::type_name::<C>());
        self
    }

    /// Append a public constructor manifest. Order is discovery order and
    /// breaks ties during mismatch diagnosis.
    pub fn constructor(mut self, constructor: ConstructorSpec) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn key(&self) -> Key {
        self.key
    }

    pub fn type_name(&self) -> &'static str {
        self.key.display_name()
    }

    pub fn implements_contract(&self, trait_name: &str) -> bool {
        self.contracts.iter().any(|c| *c == trait_name)
    }

    pub fn constructors(&self) -> &[ConstructorSpec] {
        &self.constructors
    }
}
