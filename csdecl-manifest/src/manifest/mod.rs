//! Manifest types and parsing for csdecl.toml files.

mod parse;
mod validate;

pub use parse::parse_manifest;
use serde::Deserialize;
pub use validate::ParseContext;

/// Root manifest for csdecl.toml: one C# compilation unit.
///
/// Types are emitted kind by kind: classes, then interfaces, then enums.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Using-directives at the top of the file
    #[serde(default)]
    pub usings: Vec<String>,

    /// Enclosing namespace; without one, types sit at the top level
    pub namespace: Option<NamespaceConfig>,

    #[serde(default, rename = "class")]
    pub classes: Vec<ClassConfig>,

    #[serde(default, rename = "interface")]
    pub interfaces: Vec<InterfaceConfig>,

    #[serde(default, rename = "enum")]
    pub enums: Vec<EnumConfig>,
}

impl Manifest {
    /// Number of declared types of every kind.
    pub fn type_count(&self) -> usize {
        self.classes.len() + self.interfaces.len() + self.enums.len()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamespaceConfig {
    /// Dotted namespace name (`Acme.Models`)
    pub name: String,

    /// Using-directives inside the namespace body
    #[serde(default)]
    pub usings: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassConfig {
    pub name: String,

    #[serde(default)]
    pub modifiers: Vec<String>,

    /// Base class and interfaces. `base_types = []` keeps an empty base list.
    pub base_types: Option<Vec<String>>,

    #[serde(default)]
    pub attributes: Vec<AttributeConfig>,

    #[serde(default, rename = "field")]
    pub fields: Vec<FieldConfig>,

    #[serde(default, rename = "property")]
    pub properties: Vec<PropertyConfig>,

    #[serde(default, rename = "method")]
    pub methods: Vec<MethodConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InterfaceConfig {
    pub name: String,

    #[serde(default)]
    pub modifiers: Vec<String>,

    pub base_types: Option<Vec<String>>,

    #[serde(default)]
    pub attributes: Vec<AttributeConfig>,

    #[serde(default, rename = "property")]
    pub properties: Vec<PropertyConfig>,

    #[serde(default, rename = "method")]
    pub methods: Vec<MethodConfig>,

    // Accepted so validation can reject it with a shape error
    #[serde(default, rename = "field")]
    pub(crate) stray_fields: Option<toml::Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumConfig {
    pub name: String,

    #[serde(default)]
    pub modifiers: Vec<String>,

    #[serde(default)]
    pub attributes: Vec<AttributeConfig>,

    /// Underlying integral type (`byte`, `long`, ...)
    #[serde(rename = "type")]
    pub underlying_type: Option<String>,

    #[serde(default, rename = "member")]
    pub members: Vec<EnumMemberConfig>,

    #[serde(default, rename = "base_types")]
    pub(crate) stray_base_types: Option<toml::Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumMemberConfig {
    pub name: String,

    /// Explicit constant value
    pub value: Option<i64>,

    #[serde(default)]
    pub attributes: Vec<AttributeConfig>,

    #[serde(default, rename = "modifiers")]
    pub(crate) stray_modifiers: Option<toml::Value>,

    #[serde(default, rename = "base_types")]
    pub(crate) stray_base_types: Option<toml::Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default)]
    pub modifiers: Vec<String>,

    #[serde(default)]
    pub attributes: Vec<AttributeConfig>,

    /// Initializer expression text
    pub initializer: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyConfig {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default)]
    pub modifiers: Vec<String>,

    #[serde(default)]
    pub attributes: Vec<AttributeConfig>,

    /// Accessor keywords; defaults to `get` and `set`
    pub accessors: Option<Vec<String>>,

    pub initializer: Option<String>,
}

impl PropertyConfig {
    /// Accessor keywords in declaration order.
    pub fn accessor_names(&self) -> Vec<&str> {
        match &self.accessors {
            Some(accessors) => accessors.iter().map(String::as_str).collect(),
            None => vec!["get", "set"],
        }
    }

    /// A property without `set` or `init`.
    pub fn is_read_only(&self) -> bool {
        !self
            .accessor_names()
            .iter()
            .any(|accessor| matches!(*accessor, "set" | "init"))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodConfig {
    pub name: String,

    /// Return type; defaults to `void`
    #[serde(default = "default_return_type")]
    pub returns: String,

    #[serde(default)]
    pub modifiers: Vec<String>,

    #[serde(default)]
    pub attributes: Vec<AttributeConfig>,

    #[serde(default)]
    pub parameters: Vec<ParameterConfig>,

    /// Expression body (`=> body;`)
    pub body: Option<String>,
}

fn default_return_type() -> String {
    "void".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterConfig {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,

    /// Default value expression text
    pub default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeConfig {
    /// Attribute class name as written (`Obsolete`, `System.Serializable`)
    pub name: String,

    #[serde(default)]
    pub args: Vec<AttributeArg>,
}

/// One attribute argument. A missing `value` means `null`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeArg {
    pub name: Option<String>,

    pub value: Option<toml::Value>,

    /// Quote the value; defaults to true for strings
    pub quoted: Option<bool>,
}

impl AttributeArg {
    pub fn is_quoted(&self) -> bool {
        self.quoted
            .unwrap_or(matches!(self.value, Some(toml::Value::String(_))))
    }

    pub fn is_null(&self) -> bool {
        self.value.is_none()
    }
}

/// Whether `word` is one of the modifier words.
pub(crate) fn has_modifier(modifiers: &[String], word: &str) -> bool {
    modifiers.iter().any(|m| m == word)
}
