//! Lowering a manifest into syntax nodes through the declaration builders.

use csdecl_extensions::prelude::*;
use csdecl_syntax::{
    AccessorDeclarationSyntax, AccessorKind, AttributeSyntax, ClassDeclaration, CompilationUnit,
    EnumDeclaration, EnumMemberDeclaration, FieldDeclaration, InterfaceDeclaration,
    MemberDeclaration, MethodBody, MethodDeclaration, ModifierKind, ParameterSyntax,
    PropertyDeclaration, SyntaxList, VariableDeclarationSyntax,
    factory::{parse_expression, parse_type_name},
};

use crate::{
    AttributeArg, AttributeConfig, ClassConfig, EnumConfig, FieldConfig, InterfaceConfig,
    LowerError, Manifest, MethodConfig, PropertyConfig, manifest::has_modifier,
};

type LowerResult<T> = std::result::Result<T, LowerError>;

impl Manifest {
    /// Build the compilation unit this manifest describes.
    ///
    /// Manifests produced by [`Manifest::from_str`](std::str::FromStr) are
    /// already validated. Values built or edited in code can still carry
    /// malformed fragments or unknown modifier words, which fail here.
    pub fn lower(&self) -> LowerResult<CompilationUnit> {
        let mut types: Vec<MemberDeclaration> = Vec::new();
        for class in &self.classes {
            types.push(class.lower()?.into());
        }
        for interface in &self.interfaces {
            types.push(interface.lower()?.into());
        }
        for enumeration in &self.enums {
            types.push(enumeration.lower()?.into());
        }

        let unit = CompilationUnit::new().add_usings(&self.usings)?;
        let unit = match &self.namespace {
            Some(namespace) => {
                let namespace = factory::namespace_declaration(&namespace.name)?
                    .add_usings(&namespace.usings)?
                    .add_members(types);
                unit.add_members([namespace.into()])
            }
            None => unit.add_members(types),
        };
        Ok(unit)
    }
}

impl ClassConfig {
    fn lower(&self) -> LowerResult<ClassDeclaration> {
        let mut class = ClassDeclaration::new(&self.name)
            .with_modifiers(modifier_kinds(&self.modifiers, "class", &self.name)?);
        if let Some(base_types) = &self.base_types {
            class = class.with_base_list(base_types)?;
        }
        let class = add_attributes(class, &self.attributes)?;

        let mut members: Vec<MemberDeclaration> = Vec::new();
        for field in &self.fields {
            members.push(field.lower()?.into());
        }
        for property in &self.properties {
            members.push(property.lower()?.into());
        }
        for method in &self.methods {
            let body = match &method.body {
                Some(body) => MethodBody::Expression(parse_expression(body)?),
                None if has_bodyless_modifier(&method.modifiers) => MethodBody::None,
                None => MethodBody::Block,
            };
            members.push(method.lower(body)?.into());
        }
        Ok(class.add_members(members))
    }
}

impl InterfaceConfig {
    fn lower(&self) -> LowerResult<InterfaceDeclaration> {
        let mut interface = InterfaceDeclaration::new(&self.name)
            .with_modifiers(modifier_kinds(&self.modifiers, "interface", &self.name)?);
        if let Some(base_types) = &self.base_types {
            interface = interface.with_base_list(base_types)?;
        }
        let interface = add_attributes(interface, &self.attributes)?;

        let mut members: Vec<MemberDeclaration> = Vec::new();
        for property in &self.properties {
            members.push(property.lower()?.into());
        }
        for method in &self.methods {
            // Interface members have no body unless a default one is given
            let body = match &method.body {
                Some(body) => MethodBody::Expression(parse_expression(body)?),
                None => MethodBody::None,
            };
            members.push(method.lower(body)?.into());
        }
        Ok(interface.add_members(members))
    }
}

impl EnumConfig {
    fn lower(&self) -> LowerResult<EnumDeclaration> {
        let underlying = self
            .underlying_type
            .as_deref()
            .map(parse_type_name)
            .transpose()?;
        let enumeration = EnumDeclaration::new(&self.name)
            .with_modifiers(modifier_kinds(&self.modifiers, "enum", &self.name)?)
            .with_underlying_type(underlying);
        let enumeration = add_attributes(enumeration, &self.attributes)?;

        let mut members = Vec::with_capacity(self.members.len());
        for member in &self.members {
            let value = member
                .value
                .map(|value| LiteralValue::Int(value).to_expression())
                .transpose()?;
            let lowered = EnumMemberDeclaration::new(&member.name).with_equals_value(value);
            members.push(add_attributes(lowered, &member.attributes)?);
        }
        Ok(enumeration.add_members(members))
    }
}

impl FieldConfig {
    fn lower(&self) -> LowerResult<FieldDeclaration> {
        let field = factory::field_declaration(parse_type_name(&self.ty)?, &self.name)?
            .with_modifiers(modifier_kinds(&self.modifiers, "field", &self.name)?);

        let field = match &self.initializer {
            Some(initializer) => {
                let initializer = parse_expression(initializer)?;
                let declaration = field.declaration();
                let variables = declaration
                    .variables()
                    .iter()
                    .map(|variable| variable.with_initializer(Some(initializer.clone())))
                    .collect();
                field.with_declaration(
                    VariableDeclarationSyntax::new(declaration.ty().clone()).with_variables(variables),
                )
            }
            None => field,
        };
        add_attributes(field, &self.attributes)
    }
}

impl PropertyConfig {
    fn lower(&self) -> LowerResult<PropertyDeclaration> {
        let accessors: SyntaxList<AccessorDeclarationSyntax> = self
            .accessor_names()
            .into_iter()
            .filter_map(accessor_kind)
            .map(AccessorDeclarationSyntax::new)
            .collect();
        let initializer = self
            .initializer
            .as_deref()
            .map(parse_expression)
            .transpose()?;

        let property = PropertyDeclaration::new(parse_type_name(&self.ty)?, &self.name)
            .with_modifiers(modifier_kinds(&self.modifiers, "property", &self.name)?)
            .with_accessors(accessors)
            .with_initializer(initializer);
        add_attributes(property, &self.attributes)
    }
}

impl MethodConfig {
    fn lower(&self, body: MethodBody) -> LowerResult<MethodDeclaration> {
        let mut parameters = Vec::with_capacity(self.parameters.len());
        for parameter in &self.parameters {
            let default = parameter
                .default
                .as_deref()
                .map(parse_expression)
                .transpose()?;
            parameters.push(
                ParameterSyntax::new(parse_type_name(&parameter.ty)?, &parameter.name)
                    .with_default(default),
            );
        }

        let method = MethodDeclaration::new(parse_type_name(&self.returns)?, &self.name)
            .with_modifiers(modifier_kinds(&self.modifiers, "method", &self.name)?)
            .add_parameters(parameters)
            .with_body(body);
        add_attributes(method, &self.attributes)
    }
}

fn modifier_kinds(words: &[String], kind: &str, name: &str) -> LowerResult<Vec<ModifierKind>> {
    words
        .iter()
        .map(|word| {
            word.parse::<ModifierKind>().map_err(|_| LowerError::UnknownModifier {
                modifier: word.clone(),
                context: format!("{} '{}'", kind, name),
            })
        })
        .collect()
}

fn has_bodyless_modifier(modifiers: &[String]) -> bool {
    ["abstract", "extern", "partial"]
        .iter()
        .any(|word| has_modifier(modifiers, word))
}

fn accessor_kind(word: &str) -> Option<AccessorKind> {
    match word {
        "get" => Some(AccessorKind::Get),
        "set" => Some(AccessorKind::Set),
        "init" => Some(AccessorKind::Init),
        _ => None,
    }
}

fn add_attributes<T: AttributeExt>(node: T, attributes: &[AttributeConfig]) -> LowerResult<T> {
    attributes
        .iter()
        .try_fold(node, |node, config| Ok(node.add_attribute(lower_attribute(config)?)))
}

pub(crate) fn lower_attribute(config: &AttributeConfig) -> csdecl_syntax::Result<AttributeSyntax> {
    config
        .args
        .iter()
        .try_fold(factory::attribute(&config.name)?, |attribute, arg| {
            lower_argument(&attribute, arg)
        })
}

/// Strings go through the typed route so quotes and backslashes are escaped.
/// Quoted non-strings use the text route, which quotes their display form.
fn lower_argument(
    attribute: &AttributeSyntax,
    arg: &AttributeArg,
) -> csdecl_syntax::Result<AttributeSyntax> {
    let name = arg.name.as_deref();
    let Some(value) = &arg.value else {
        // Null is only expressible as a named argument
        return attribute.add_null_argument(name.unwrap_or_default());
    };

    match (value, arg.is_quoted()) {
        (toml::Value::String(text), true) => {
            attribute.add_literal_argument(name, LiteralValue::String(text.clone()))
        }
        (toml::Value::String(text), false) => {
            attribute.add_literal_argument(name, LiteralValue::raw(text.as_str()))
        }
        (other, true) => match name {
            Some(name) => attribute.add_named_quoted_argument(name, other),
            None => attribute.add_quoted_argument(other),
        },
        (other, false) => attribute.add_literal_argument(name, literal_value(other)),
    }
}

fn literal_value(value: &toml::Value) -> LiteralValue {
    match value {
        toml::Value::Integer(v) => LiteralValue::Int(*v),
        toml::Value::Float(v) => LiteralValue::Float(*v),
        toml::Value::Boolean(v) => LiteralValue::Bool(*v),
        toml::Value::String(v) => LiteralValue::raw(v.as_str()),
        other => LiteralValue::raw(other.to_string()),
    }
}
