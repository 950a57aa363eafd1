//! The declared-symbol view of a manifest.

mod constant;

use std::collections::HashMap;

use csdecl_semantic::{
    AttributeData, FieldSymbol, MethodSymbol, ParameterSymbol, PropertySymbol, TypeKind,
    TypeSymbol, TypedConstant,
};
use csdecl_syntax::{
    ParseError,
    factory::{parse_expression, parse_name, parse_type_name},
};

use self::constant::{constant_from_expression, integer_constant};
use crate::{
    AttributeArg, AttributeConfig, ClassConfig, EnumConfig, FieldConfig, InterfaceConfig,
    Manifest, MethodConfig, PropertyConfig, manifest::has_modifier,
};

type SymbolResult<T> = std::result::Result<T, ParseError>;

impl Manifest {
    /// One [`TypeSymbol`] per class, interface and enum, in emission order.
    ///
    /// Member types naming a type declared in the same manifest resolve to
    /// it (without its members); every other type stays unresolved.
    pub fn symbols(&self) -> SymbolResult<Vec<TypeSymbol>> {
        let scope = Scope::new(self);
        let mut symbols = Vec::new();
        for class in &self.classes {
            symbols.push(class.symbol(&scope)?);
        }
        for interface in &self.interfaces {
            symbols.push(interface.symbol(&scope)?);
        }
        for enumeration in &self.enums {
            symbols.push(enumeration.symbol(&scope)?);
        }
        Ok(symbols)
    }
}

/// Types declared by the manifest, keyed by simple name.
struct Scope<'a> {
    namespace: Option<&'a str>,
    declared: HashMap<&'a str, TypeKind>,
}

impl<'a> Scope<'a> {
    fn new(manifest: &'a Manifest) -> Self {
        let classes = manifest.classes.iter().map(|c| (c.name.as_str(), TypeKind::Class));
        let interfaces = manifest
            .interfaces
            .iter()
            .map(|i| (i.name.as_str(), TypeKind::Interface));
        let enums = manifest.enums.iter().map(|e| (e.name.as_str(), TypeKind::Enum));
        Self {
            namespace: manifest.namespace.as_ref().map(|ns| ns.name.as_str()),
            declared: classes.chain(interfaces).chain(enums).collect(),
        }
    }

    fn declared_type(&self, kind: TypeKind, name: &str) -> TypeSymbol {
        let symbol = TypeSymbol::new(kind, name);
        match self.namespace {
            Some(namespace) => symbol.with_namespace(namespace),
            None => symbol,
        }
    }

    fn type_symbol(&self, text: &str) -> SymbolResult<TypeSymbol> {
        let display = parse_type_name(text)?.to_string();
        Ok(match self.declared.get(display.as_str()) {
            Some(kind) => self.declared_type(*kind, &display),
            None => TypeSymbol::unresolved(display),
        })
    }
}

impl ClassConfig {
    fn symbol(&self, scope: &Scope<'_>) -> SymbolResult<TypeSymbol> {
        let mut symbol = scope.declared_type(TypeKind::Class, &self.name);
        symbol.attributes = attribute_data(&self.attributes)?;
        for field in &self.fields {
            symbol = symbol.with_member(field.symbol(scope)?);
        }
        for property in &self.properties {
            symbol = symbol.with_member(property.symbol(scope)?);
        }
        for method in &self.methods {
            symbol = symbol.with_member(method.symbol(scope)?);
        }
        Ok(symbol)
    }
}

impl InterfaceConfig {
    fn symbol(&self, scope: &Scope<'_>) -> SymbolResult<TypeSymbol> {
        let mut symbol = scope.declared_type(TypeKind::Interface, &self.name);
        symbol.attributes = attribute_data(&self.attributes)?;
        for property in &self.properties {
            symbol = symbol.with_member(property.symbol(scope)?);
        }
        for method in &self.methods {
            symbol = symbol.with_member(method.symbol(scope)?);
        }
        Ok(symbol)
    }
}

impl EnumConfig {
    /// Enum members are static constant fields of the enum type.
    fn symbol(&self, scope: &Scope<'_>) -> SymbolResult<TypeSymbol> {
        let mut symbol = scope.declared_type(TypeKind::Enum, &self.name);
        symbol.attributes = attribute_data(&self.attributes)?;
        for member in &self.members {
            symbol = symbol.with_member(FieldSymbol {
                name: member.name.clone(),
                ty: scope.declared_type(TypeKind::Enum, &self.name),
                is_static: true,
                is_const: true,
                attributes: attribute_data(&member.attributes)?,
            });
        }
        Ok(symbol)
    }
}

impl FieldConfig {
    fn symbol(&self, scope: &Scope<'_>) -> SymbolResult<FieldSymbol> {
        let is_const = has_modifier(&self.modifiers, "const");
        Ok(FieldSymbol {
            name: self.name.clone(),
            ty: scope.type_symbol(&self.ty)?,
            // const fields are implicitly static
            is_static: is_const || has_modifier(&self.modifiers, "static"),
            is_const,
            attributes: attribute_data(&self.attributes)?,
        })
    }
}

impl PropertyConfig {
    fn symbol(&self, scope: &Scope<'_>) -> SymbolResult<PropertySymbol> {
        Ok(PropertySymbol {
            name: self.name.clone(),
            ty: scope.type_symbol(&self.ty)?,
            is_static: has_modifier(&self.modifiers, "static"),
            is_read_only: self.is_read_only(),
            attributes: attribute_data(&self.attributes)?,
        })
    }
}

impl MethodConfig {
    fn symbol(&self, scope: &Scope<'_>) -> SymbolResult<MethodSymbol> {
        let mut parameters = Vec::with_capacity(self.parameters.len());
        for parameter in &self.parameters {
            parameters.push(ParameterSymbol {
                name: parameter.name.clone(),
                ty: scope.type_symbol(&parameter.ty)?,
            });
        }
        Ok(MethodSymbol {
            name: self.name.clone(),
            return_type: scope.type_symbol(&self.returns)?,
            parameters,
            is_static: has_modifier(&self.modifiers, "static"),
            attributes: attribute_data(&self.attributes)?,
        })
    }
}

fn attribute_data(attributes: &[AttributeConfig]) -> SymbolResult<Vec<AttributeData>> {
    attributes.iter().map(attribute).collect()
}

/// The attribute class is the simple name as written: `[Obsolete]` reads as
/// `Obsolete`, `[System.Obsolete]` too.
fn attribute(config: &AttributeConfig) -> SymbolResult<AttributeData> {
    let class = parse_name(&config.name)?;
    let mut data = AttributeData::new(class.simple_identifier());
    for arg in &config.args {
        let constant = argument_constant(arg)?;
        data = match &arg.name {
            Some(name) => data.with_named_argument(name.as_str(), constant),
            None => data.with_constructor_argument(constant),
        };
    }
    Ok(data)
}

fn argument_constant(arg: &AttributeArg) -> SymbolResult<TypedConstant> {
    let Some(value) = &arg.value else {
        return Ok(TypedConstant::null());
    };

    Ok(match (value, arg.is_quoted()) {
        (toml::Value::String(text), true) => TypedConstant::string(text.as_str()),
        (other, true) => TypedConstant::string(other.to_string()),
        (toml::Value::String(text), false) => constant_from_expression(&parse_expression(text)?),
        (toml::Value::Integer(v), false) => integer_constant(*v),
        (toml::Value::Float(v), false) => TypedConstant::double(*v),
        (toml::Value::Boolean(v), false) => TypedConstant::bool(*v),
        (other, false) => constant_from_expression(&parse_expression(&other.to_string())?),
    })
}
