//! Lookups over symbols and attribute arguments.

use crate::{
    AttributeData, EventSymbol, FieldSymbol, FromConstant, MethodSymbol, PropertySymbol, Symbol,
    TypeSymbol, TypedConstant,
    error::{Error, Result},
};

/// Display names treated as primitive types.
pub const PRIMITIVE_TYPE_NAMES: &[&str] = &[
    "byte", "sbyte", "short", "ushort", "int", "uint", "long", "ulong", "float", "double",
    "decimal", "char", "string", "bool", "object",
];

/// Symbols that carry applied attributes.
pub trait HasAttributes {
    fn attributes(&self) -> &[AttributeData];
}

macro_rules! impl_has_attributes {
    ($($ty:ty),+ $(,)?) => {$(
        impl HasAttributes for $ty {
            fn attributes(&self) -> &[AttributeData] {
                &self.attributes
            }
        }
    )+};
}

impl_has_attributes!(TypeSymbol, FieldSymbol, PropertySymbol, MethodSymbol, EventSymbol);

impl HasAttributes for Symbol {
    fn attributes(&self) -> &[AttributeData] {
        Symbol::attributes(self)
    }
}

/// Attribute lookup by class name.
pub trait AttributeQueries: HasAttributes {
    /// The first attribute whose class is `attribute_class`.
    fn get_attribute(&self, attribute_class: &str) -> Option<&AttributeData> {
        self.attributes()
            .iter()
            .find(|attr| attr.attribute_class == attribute_class)
    }

    /// Every attribute whose class is `attribute_class`, in declaration order.
    fn get_attributes<'a>(
        &'a self,
        attribute_class: &'a str,
    ) -> impl Iterator<Item = &'a AttributeData> + 'a {
        self.attributes()
            .iter()
            .filter(move |attr| attr.attribute_class == attribute_class)
    }
}

impl<T: HasAttributes + ?Sized> AttributeQueries for T {}

/// Read an optional constant as `T`.
///
/// A missing or `null` constant gives `T::default()`. A present constant of
/// another type is a [`Error::TypeMismatch`].
pub fn value_or_default<T: FromConstant + Default>(constant: Option<&TypedConstant>) -> Result<T> {
    match constant {
        None => Ok(T::default()),
        Some(constant) if constant.is_null() => Ok(T::default()),
        Some(constant) => constant.value_as().ok_or(Error::TypeMismatch {
            expected: T::EXPECTED,
            found: constant.value.kind_name(),
        }),
    }
}

/// Whether the type's display name is one of [`PRIMITIVE_TYPE_NAMES`].
///
/// Only the keyword spelling counts: `int` is primitive, `System.Int32` is not.
pub fn is_primitive(ty: &TypeSymbol) -> bool {
    PRIMITIVE_TYPE_NAMES.contains(&ty.to_string().as_str())
}
