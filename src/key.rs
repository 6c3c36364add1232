//! Type identity keys for factory targets and declared return types.

use std::any::TypeId;

/// Key identifying a type the factory layer talks to the container about.
///
/// Keys distinguish concrete types from contract (trait-object) types, which
/// drives the factory-shape preconditions: a factory method must declare a
/// contract return type, while the resolved target is always a concrete type.
///
/// # Examples
///
/// ```rust
/// use typed_factories::{key_of, trait_key_of, Key};
///
/// trait Widget {}
/// struct TextWidget;
///
/// let target = key_of::<TextWidget>();
/// let contract = trait_key_of::<dyn Widget>();
///
/// assert!(!target.is_contract());
/// assert!(contract.is_contract());
/// assert!(contract.display_name().contains("Widget"));
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Key {
    /// Concrete type key with TypeId and name for diagnostics
    ///
    /// Identifies the concrete target type a factory constructs, or a
    /// concrete parameter type. The TypeId provides exact identity while
    /// the name feeds error messages.
    Type(TypeId, &'static str),
    /// Contract (trait object) key
    ///
    /// Identifies a factory method's declared return contract or a
    /// contract-typed parameter. Traits have no TypeId, so only the
    /// trait name is stored.
    Trait(&'static str),
}

impl Key {
    /// Get the type or trait name for display
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typed_factories::Key;
    /// use std::any::TypeId;
    ///
    /// let key = Key::Type(TypeId::of::<String>(), "alloc::string::String");
    /// assert_eq!(key.display_name(), "alloc::string::String");
    ///
    /// let contract = Key::Trait("dyn core::fmt::Debug");
    /// assert_eq!(contract.display_name(), "dyn core::fmt::Debug");
    /// ```
    pub fn display_name(&self) -> &'static str {
        match self {
            Key::Type(_, name) => name,
            Key::Trait(name) => name,
        }
    }

    /// Whether this key names a contract (trait object) type.
    ///
    /// Factory methods must declare contract return types; this is the
    /// check behind the malformed-contract precondition.
    pub fn is_contract(&self) -> bool {
        matches!(self, Key::Trait(_))
    }
}

// TypeId-only comparison for concrete types; the name is diagnostics.
impl PartialEq for Key {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Key::Type(a, _), Key::Type(b, _)) => a == b,
            (Key::Trait(a), Key::Trait(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Key {}

impl std::hash::Hash for Key {
    #[inline(always)]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self {
            Key::Type(id, _) => {
                0u8.hash(state); // Discriminant
                id.hash(state);
            }
            Key::Trait(name) => {
                1u8.hash(state);
                name.hash(state);
            }
        }
    }
}

/// Key for a concrete type.
#[inline(always)]
pub fn key_of<T: 'static>() -> Key {
    Key::Type(TypeId::of::<T>(), std::any::type_name::<T>())
}

/// Key for a contract (trait object) type.
#[inline(always)]
pub fn trait_key_of<T: ?Sized + 'static>() -> Key {
    Key::Trait(std::any::type_name::<T>())
}
