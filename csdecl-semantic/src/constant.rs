//! Typed constants carried by attribute arguments.

use serde::Serialize;

/// How a constant was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypedConstantKind {
    /// A literal of a primitive type, or `null`.
    Primitive,
    /// A member of an enum type, e.g. `LogLevel.Warning`.
    Enum,
    /// A `typeof(...)` operand.
    Type,
    /// An array of constants.
    Array,
}

/// The value of a typed constant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConstantValue {
    Null,
    Bool(bool),
    Char(char),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
    /// The display name of a type.
    Type(String),
    /// Enum member name, e.g. `Warning`.
    Enum(String),
    Array(Vec<TypedConstant>),
}

impl ConstantValue {
    /// The value's shape, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Char(_) => "char",
            Self::Int(_) => "signed integer",
            Self::UInt(_) => "unsigned integer",
            Self::Float(_) => "floating-point",
            Self::String(_) => "string",
            Self::Type(_) => "type",
            Self::Enum(_) => "enum",
            Self::Array(_) => "array",
        }
    }
}

/// An attribute argument value together with its type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypedConstant {
    /// Literal kind.
    pub kind: TypedConstantKind,
    /// Display name of the constant's type; `None` for `null`.
    pub type_name: Option<String>,
    /// The value.
    pub value: ConstantValue,
}

impl TypedConstant {
    pub fn null() -> Self {
        Self {
            kind: TypedConstantKind::Primitive,
            type_name: None,
            value: ConstantValue::Null,
        }
    }

    pub fn primitive(type_name: &str, value: ConstantValue) -> Self {
        Self {
            kind: TypedConstantKind::Primitive,
            type_name: Some(type_name.to_string()),
            value,
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::primitive("string", ConstantValue::String(value.into()))
    }

    pub fn int(value: i32) -> Self {
        Self::primitive("int", ConstantValue::Int(value.into()))
    }

    pub fn long(value: i64) -> Self {
        Self::primitive("long", ConstantValue::Int(value))
    }

    pub fn double(value: f64) -> Self {
        Self::primitive("double", ConstantValue::Float(value))
    }

    pub fn bool(value: bool) -> Self {
        Self::primitive("bool", ConstantValue::Bool(value))
    }

    pub fn char(value: char) -> Self {
        Self::primitive("char", ConstantValue::Char(value))
    }

    /// `typeof(type_name)`
    pub fn type_of(type_name: impl Into<String>) -> Self {
        Self {
            kind: TypedConstantKind::Type,
            type_name: Some("System.Type".to_string()),
            value: ConstantValue::Type(type_name.into()),
        }
    }

    /// `EnumType.Member`
    pub fn enum_member(enum_type: impl Into<String>, member: impl Into<String>) -> Self {
        Self {
            kind: TypedConstantKind::Enum,
            type_name: Some(enum_type.into()),
            value: ConstantValue::Enum(member.into()),
        }
    }

    pub fn array(element_type: &str, values: Vec<TypedConstant>) -> Self {
        Self {
            kind: TypedConstantKind::Array,
            type_name: Some(format!("{}[]", element_type)),
            value: ConstantValue::Array(values),
        }
    }

    pub fn is_null(&self) -> bool {
        self.value == ConstantValue::Null
    }

    /// Read the value as `T`, or `None` when the shapes do not match.
    pub fn value_as<T: FromConstant>(&self) -> Option<T> {
        T::from_constant(&self.value)
    }
}

/// Conversion from a constant's value into a Rust type.
pub trait FromConstant: Sized {
    /// Short name of the target type for error messages.
    const EXPECTED: &'static str;

    fn from_constant(value: &ConstantValue) -> Option<Self>;
}

macro_rules! impl_from_constant_int {
    ($($ty:ty),+ $(,)?) => {$(
        impl FromConstant for $ty {
            const EXPECTED: &'static str = stringify!($ty);

            fn from_constant(value: &ConstantValue) -> Option<Self> {
                match value {
                    ConstantValue::Int(v) => <$ty>::try_from(*v).ok(),
                    ConstantValue::UInt(v) => <$ty>::try_from(*v).ok(),
                    _ => None,
                }
            }
        }
    )+};
}

impl_from_constant_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl FromConstant for f64 {
    const EXPECTED: &'static str = "f64";

    fn from_constant(value: &ConstantValue) -> Option<Self> {
        match value {
            ConstantValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromConstant for f32 {
    const EXPECTED: &'static str = "f32";

    fn from_constant(value: &ConstantValue) -> Option<Self> {
        match value {
            ConstantValue::Float(v) => Some(*v as f32),
            _ => None,
        }
    }
}

impl FromConstant for bool {
    const EXPECTED: &'static str = "bool";

    fn from_constant(value: &ConstantValue) -> Option<Self> {
        match value {
            ConstantValue::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromConstant for char {
    const EXPECTED: &'static str = "char";

    fn from_constant(value: &ConstantValue) -> Option<Self> {
        match value {
            ConstantValue::Char(v) => Some(*v),
            _ => None,
        }
    }
}

/// Strings, type names and enum member names all read as `String`.
impl FromConstant for String {
    const EXPECTED: &'static str = "String";

    fn from_constant(value: &ConstantValue) -> Option<Self> {
        match value {
            ConstantValue::String(v) | ConstantValue::Type(v) | ConstantValue::Enum(v) => {
                Some(v.clone())
            }
            _ => None,
        }
    }
}

impl<T: FromConstant> FromConstant for Vec<T> {
    const EXPECTED: &'static str = "Vec";

    fn from_constant(value: &ConstantValue) -> Option<Self> {
        match value {
            ConstantValue::Array(items) => items.iter().map(|item| item.value_as()).collect(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_as_matching_type() {
        assert_eq!(TypedConstant::int(42).value_as::<i32>(), Some(42));
        assert_eq!(TypedConstant::int(42).value_as::<i64>(), Some(42));
        assert_eq!(
            TypedConstant::string("deprecated").value_as::<String>(),
            Some("deprecated".to_string())
        );
        assert_eq!(TypedConstant::bool(true).value_as::<bool>(), Some(true));
    }

    #[test]
    fn test_value_as_out_of_range() {
        assert_eq!(TypedConstant::int(-1).value_as::<u32>(), None);
        assert_eq!(TypedConstant::long(i64::MAX).value_as::<i32>(), None);
    }

    #[test]
    fn test_value_as_wrong_shape() {
        assert_eq!(TypedConstant::string("1").value_as::<i32>(), None);
        assert_eq!(TypedConstant::int(1).value_as::<bool>(), None);
    }

    #[test]
    fn test_enum_and_type_read_as_string() {
        let level = TypedConstant::enum_member("LogLevel", "Warning");
        assert_eq!(level.kind, TypedConstantKind::Enum);
        assert_eq!(level.value_as::<String>().as_deref(), Some("Warning"));
        assert_eq!(
            TypedConstant::type_of("User").value_as::<String>().as_deref(),
            Some("User")
        );
    }

    #[test]
    fn test_array_values() {
        let array = TypedConstant::array("int", vec![TypedConstant::int(1), TypedConstant::int(2)]);
        assert_eq!(array.type_name.as_deref(), Some("int[]"));
        assert_eq!(array.value_as::<Vec<i32>>(), Some(vec![1, 2]));
    }

    #[test]
    fn test_serializes_untagged_value() {
        let json = serde_json::to_value(TypedConstant::int(7)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "primitive", "type_name": "int", "value": 7 })
        );
    }
}
