//! Declared symbols: types and their members.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::TypedConstant;

/// An applied attribute: its class and its arguments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeData {
    /// Simple name of the attribute class, as written (`Obsolete`).
    pub attribute_class: String,
    /// Positional arguments in order.
    pub constructor_arguments: Vec<TypedConstant>,
    /// Named arguments in declaration order.
    pub named_arguments: IndexMap<String, TypedConstant>,
}

impl AttributeData {
    pub fn new(attribute_class: impl Into<String>) -> Self {
        Self {
            attribute_class: attribute_class.into(),
            constructor_arguments: Vec::new(),
            named_arguments: IndexMap::new(),
        }
    }

    pub fn with_constructor_argument(mut self, value: TypedConstant) -> Self {
        self.constructor_arguments.push(value);
        self
    }

    /// Add a named argument; a repeated name replaces the earlier value in place.
    pub fn with_named_argument(mut self, name: impl Into<String>, value: TypedConstant) -> Self {
        self.named_arguments.insert(name.into(), value);
        self
    }

    /// The named argument called `name`, or `None` when the attribute has none.
    pub fn get_named_argument(&self, name: &str) -> Option<&TypedConstant> {
        self.named_arguments.get(name)
    }
}

/// What kind of type a [`TypeSymbol`] declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Struct,
    /// A type known only by name, such as a member's type.
    Unresolved,
}

/// A named type and the members it declares.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeSymbol {
    /// Simple name (`User`), or the keyword for predefined types (`int`).
    pub name: String,
    /// Containing namespace, if any.
    pub namespace: Option<String>,
    pub kind: TypeKind,
    /// Members in declaration order.
    pub members: Vec<Symbol>,
    pub attributes: Vec<AttributeData>,
}

impl TypeSymbol {
    pub fn new(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            kind,
            members: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// A type referenced by its display name only.
    pub fn unresolved(display_name: impl Into<String>) -> Self {
        Self::new(TypeKind::Unresolved, display_name)
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_member(mut self, member: impl Into<Symbol>) -> Self {
        self.members.push(member.into());
        self
    }

    pub fn with_attribute(mut self, attribute: AttributeData) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn get_fields(&self) -> impl Iterator<Item = &FieldSymbol> {
        self.members.iter().filter_map(|m| match m {
            Symbol::Field(field) => Some(field),
            _ => None,
        })
    }

    pub fn get_properties(&self) -> impl Iterator<Item = &PropertySymbol> {
        self.members.iter().filter_map(|m| match m {
            Symbol::Property(property) => Some(property),
            _ => None,
        })
    }

    pub fn get_methods(&self) -> impl Iterator<Item = &MethodSymbol> {
        self.members.iter().filter_map(|m| match m {
            Symbol::Method(method) => Some(method),
            _ => None,
        })
    }

    pub fn get_events(&self) -> impl Iterator<Item = &EventSymbol> {
        self.members.iter().filter_map(|m| match m {
            Symbol::Event(event) => Some(event),
            _ => None,
        })
    }
}

/// Namespace-qualified display name, as C# tooling prints it (`Acme.Models.User`).
impl fmt::Display for TypeSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(namespace) => write!(f, "{}.{}", namespace, self.name),
            None => f.write_str(&self.name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Field,
    Property,
    Method,
    Event,
}

impl SymbolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Field => "field",
            Self::Property => "property",
            Self::Method => "method",
            Self::Event => "event",
        }
    }
}

/// A member of a type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Symbol {
    Field(FieldSymbol),
    Property(PropertySymbol),
    Method(MethodSymbol),
    Event(EventSymbol),
}

impl Symbol {
    pub fn kind(&self) -> SymbolKind {
        match self {
            Self::Field(_) => SymbolKind::Field,
            Self::Property(_) => SymbolKind::Property,
            Self::Method(_) => SymbolKind::Method,
            Self::Event(_) => SymbolKind::Event,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Field(s) => &s.name,
            Self::Property(s) => &s.name,
            Self::Method(s) => &s.name,
            Self::Event(s) => &s.name,
        }
    }

    pub fn attributes(&self) -> &[AttributeData] {
        match self {
            Self::Field(s) => &s.attributes,
            Self::Property(s) => &s.attributes,
            Self::Method(s) => &s.attributes,
            Self::Event(s) => &s.attributes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSymbol {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeSymbol,
    pub is_static: bool,
    pub is_const: bool,
    pub attributes: Vec<AttributeData>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertySymbol {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeSymbol,
    pub is_static: bool,
    /// True when the property has no `set` or `init` accessor.
    pub is_read_only: bool,
    pub attributes: Vec<AttributeData>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterSymbol {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeSymbol,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodSymbol {
    pub name: String,
    pub return_type: TypeSymbol,
    pub parameters: Vec<ParameterSymbol>,
    pub is_static: bool,
    pub attributes: Vec<AttributeData>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventSymbol {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeSymbol,
    pub is_static: bool,
    pub attributes: Vec<AttributeData>,
}

impl From<FieldSymbol> for Symbol {
    fn from(symbol: FieldSymbol) -> Self {
        Self::Field(symbol)
    }
}

impl From<PropertySymbol> for Symbol {
    fn from(symbol: PropertySymbol) -> Self {
        Self::Property(symbol)
    }
}

impl From<MethodSymbol> for Symbol {
    fn from(symbol: MethodSymbol) -> Self {
        Self::Method(symbol)
    }
}

impl From<EventSymbol> for Symbol {
    fn from(symbol: EventSymbol) -> Self {
        Self::Event(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, ty: &str) -> FieldSymbol {
        FieldSymbol {
            name: name.into(),
            ty: TypeSymbol::unresolved(ty),
            is_static: false,
            is_const: false,
            attributes: vec![],
        }
    }

    #[test]
    fn test_members_filtered_by_kind() {
        let user = TypeSymbol::new(TypeKind::Class, "User")
            .with_member(field("_id", "int"))
            .with_member(MethodSymbol {
                name: "Save".into(),
                return_type: TypeSymbol::unresolved("void"),
                parameters: vec![],
                is_static: false,
                attributes: vec![],
            })
            .with_member(field("_name", "string"))
            .with_member(EventSymbol {
                name: "Changed".into(),
                ty: TypeSymbol::unresolved("EventHandler"),
                is_static: false,
                attributes: vec![],
            });

        let fields: Vec<&str> = user.get_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(fields, ["_id", "_name"]);
        assert_eq!(user.get_methods().count(), 1);
        assert_eq!(user.get_events().count(), 1);
        assert_eq!(user.get_properties().count(), 0);
    }

    #[test]
    fn test_type_display_name() {
        let user = TypeSymbol::new(TypeKind::Class, "User").with_namespace("Acme.Models");
        assert_eq!(user.to_string(), "Acme.Models.User");
        assert_eq!(TypeSymbol::unresolved("int").to_string(), "int");
    }

    #[test]
    fn test_named_argument_lookup() {
        let obsolete = AttributeData::new("Obsolete")
            .with_named_argument("message", TypedConstant::string("old"))
            .with_named_argument("error", TypedConstant::bool(true));

        assert_eq!(
            obsolete.get_named_argument("message"),
            Some(&TypedConstant::string("old"))
        );
        assert_eq!(obsolete.get_named_argument("missing"), None);
        let names: Vec<&String> = obsolete.named_arguments.keys().collect();
        assert_eq!(names, ["message", "error"]);
    }

    #[test]
    fn test_symbol_serializes_with_kind_tag() {
        let json = serde_json::to_value(Symbol::from(field("_id", "int"))).unwrap();
        assert_eq!(json["kind"], "field");
        assert_eq!(json["name"], "_id");
        assert_eq!(json["type"]["name"], "int");
    }
}
