//! Validation context and rules for manifest parsing.

use std::{collections::HashSet, sync::Arc};

use csdecl_syntax::{
    DeclarationKind, ModifierKind, PredefinedType, TypeSyntax, is_reserved_keyword,
    parser::{parse_expression, parse_name, parse_type_name},
};
use miette::SourceSpan;

use super::{
    AttributeArg, AttributeConfig, ClassConfig, EnumConfig, FieldConfig, InterfaceConfig,
    Manifest, MethodConfig, PropertyConfig,
};
use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Holds the manifest source and the path of declaration names leading to
/// the node being checked, so nested rules can report where they failed.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "csdecl.toml");
/// ctx.validate_name("User", "class name")?;
///
/// let class = ctx.push("User");
/// class.validate_name("_id", "field name")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Declaration names leading here, e.g. ["User", "Save"]
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    pub fn src(&self) -> &str {
        self.source.src()
    }

    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a declaration name and return the nested context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    /// The current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Describe `kind` at the current path, e.g. "field name in 'User'".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a value in the source.
    pub fn find_span(&self, value: &str) -> Option<SourceSpan> {
        find_value_span(self.src(), value, self.anchor())
    }

    /// Find the span of a `key = ...` entry belonging to the current declaration.
    pub fn find_key_span(&self, key: &str) -> Option<SourceSpan> {
        find_key_span(self.src(), key, self.anchor())
    }

    // Offset of the innermost declaration name, so lookups prefer its entries.
    fn anchor(&self) -> usize {
        self.path
            .last()
            .and_then(|name| find_value_span(self.src(), name, 0))
            .map_or(0, |span| span.offset())
    }

    /// Validate that a name is a usable C# identifier.
    ///
    /// Reserved keywords are rejected unless written verbatim (`@class`).
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_reserved_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for(kind),
                self.find_span(name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }

        Ok(())
    }

    /// Check every modifier word against the known modifier keywords.
    pub fn validate_modifiers(&self, modifiers: &[String], kind: &str) -> Result<()> {
        for word in modifiers {
            if word.parse::<ModifierKind>().is_err() {
                return Err(self.source.unknown_modifier_error(
                    word,
                    self.context_for(kind),
                    self.find_span(word),
                ));
            }
        }
        Ok(())
    }

    /// Run a fragment parser over `text`, reporting failures at its span.
    pub fn parse_fragment<T>(
        &self,
        text: &str,
        kind: &str,
        parse: fn(&str) -> csdecl_syntax::Result<T>,
    ) -> Result<T> {
        parse(text).map_err(|e| {
            self.source
                .invalid_syntax_error(text, self.context_for(kind), e, self.find_span(text))
        })
    }

    pub fn shape_mismatch(
        &self,
        kind: DeclarationKind,
        name: &str,
        feature: &str,
        key: &str,
    ) -> Box<crate::Error> {
        let span = self.find_key_span(key).or_else(|| self.find_span(key));
        self.source.shape_mismatch_error(kind, name, feature, span)
    }

    fn validate_attributes(&self, attributes: &[AttributeConfig]) -> Result<()> {
        for attribute in attributes {
            self.parse_fragment(&attribute.name, "attribute name", parse_name)?;
            for arg in &attribute.args {
                self.validate_argument(&attribute.name, arg)?;
            }
        }
        Ok(())
    }

    fn validate_argument(&self, attribute: &str, arg: &AttributeArg) -> Result<()> {
        if let Some(name) = &arg.name {
            self.validate_name(name, "argument name")?;
        }

        match &arg.value {
            None if arg.name.is_none() => Err(self.source.validation_error_at(
                format!("null argument of '{}' needs a name", attribute),
                self.find_span(attribute),
            )),
            None => Ok(()),
            Some(toml::Value::String(text)) if !arg.is_quoted() => self
                .parse_fragment(text, "argument expression", parse_expression)
                .map(drop),
            Some(
                toml::Value::String(_)
                | toml::Value::Integer(_)
                | toml::Value::Float(_)
                | toml::Value::Boolean(_),
            ) => Ok(()),
            Some(other) => Err(self.source.validation_error_at(
                format!(
                    "argument of '{}' must be a string, number or boolean, found {}",
                    attribute,
                    other.type_str()
                ),
                self.find_span(attribute),
            )),
        }
    }

    // Names must be unique within one scope.
    fn check_unique(&self, seen: &mut HashSet<&'a str>, name: &'a str, kind: &str) -> Result<()> {
        if seen.insert(name) {
            return Ok(());
        }
        Err(self.duplicate(name, kind))
    }

    // Methods may overload each other but not reuse a field or property name.
    fn check_methods(
        &self,
        data_members: &HashSet<&'a str>,
        methods: &'a [MethodConfig],
    ) -> Result<()> {
        for method in methods {
            if data_members.contains(method.name.as_str()) {
                return Err(self.duplicate(&method.name, "member"));
            }
            method.validate(self)?;
        }
        Ok(())
    }

    fn duplicate(&self, name: &str, kind: &str) -> Box<crate::Error> {
        self.source.validation_error_at(
            format!("duplicate {} '{}'", kind, name),
            find_last_value_span(self.src(), name),
        )
    }
}

impl Manifest {
    pub(crate) fn validate<'a>(&'a self, ctx: &ParseContext<'a>) -> Result<()> {
        for using in &self.usings {
            ctx.parse_fragment(using, "using", parse_name)?;
        }

        let ctx = match &self.namespace {
            Some(namespace) => {
                ctx.parse_fragment(&namespace.name, "namespace name", parse_name)?;
                let ns_ctx = ctx.push(&namespace.name);
                for using in &namespace.usings {
                    ns_ctx.parse_fragment(using, "using", parse_name)?;
                }
                ns_ctx
            }
            None => ctx.clone(),
        };

        let mut types = HashSet::new();
        for class in &self.classes {
            ctx.validate_name(&class.name, "class name")?;
            ctx.check_unique(&mut types, &class.name, "type")?;
            class.validate(&ctx.push(&class.name))?;
        }
        for interface in &self.interfaces {
            ctx.validate_name(&interface.name, "interface name")?;
            ctx.check_unique(&mut types, &interface.name, "type")?;
            interface.validate(&ctx.push(&interface.name))?;
        }
        for enumeration in &self.enums {
            ctx.validate_name(&enumeration.name, "enum name")?;
            ctx.check_unique(&mut types, &enumeration.name, "type")?;
            enumeration.validate(&ctx.push(&enumeration.name))?;
        }
        Ok(())
    }
}

impl ClassConfig {
    fn validate<'a>(&'a self, ctx: &ParseContext<'a>) -> Result<()> {
        ctx.validate_modifiers(&self.modifiers, "class")?;
        for base in self.base_types.iter().flatten() {
            ctx.parse_fragment(base, "base type", parse_type_name)?;
        }
        ctx.validate_attributes(&self.attributes)?;

        let mut data_members = HashSet::new();
        for field in &self.fields {
            ctx.check_unique(&mut data_members, &field.name, "member")?;
            field.validate(ctx)?;
        }
        for property in &self.properties {
            ctx.check_unique(&mut data_members, &property.name, "member")?;
            property.validate(ctx)?;
        }
        ctx.check_methods(&data_members, &self.methods)
    }
}

impl InterfaceConfig {
    fn validate<'a>(&'a self, ctx: &ParseContext<'a>) -> Result<()> {
        if self.stray_fields.is_some() {
            return Err(ctx.shape_mismatch(
                DeclarationKind::Interface,
                &self.name,
                "fields",
                "interface.field",
            ));
        }

        ctx.validate_modifiers(&self.modifiers, "interface")?;
        for base in self.base_types.iter().flatten() {
            ctx.parse_fragment(base, "base type", parse_type_name)?;
        }
        ctx.validate_attributes(&self.attributes)?;

        let mut properties = HashSet::new();
        for property in &self.properties {
            ctx.check_unique(&mut properties, &property.name, "member")?;
            property.validate(ctx)?;
        }
        ctx.check_methods(&properties, &self.methods)
    }
}

impl EnumConfig {
    fn validate<'a>(&'a self, ctx: &ParseContext<'a>) -> Result<()> {
        if self.stray_base_types.is_some() {
            return Err(ctx.shape_mismatch(
                DeclarationKind::Enum,
                &self.name,
                "base types; set `type` for the underlying type",
                "base_types",
            ));
        }

        ctx.validate_modifiers(&self.modifiers, "enum")?;
        ctx.validate_attributes(&self.attributes)?;

        // Enums without an explicit type are backed by int
        let (underlying, range) = match &self.underlying_type {
            Some(underlying) => {
                let ty = ctx.parse_fragment(underlying, "underlying type", parse_type_name)?;
                let Some(range) = integral_range(&ty) else {
                    return Err(ctx.source_context().validation_error_at(
                        format!(
                            "underlying type of enum '{}' must be an integral type, found '{}'",
                            self.name, ty
                        ),
                        ctx.find_span(underlying),
                    ));
                };
                (underlying.as_str(), range)
            }
            None => ("int", (i128::from(i32::MIN), i128::from(i32::MAX))),
        };

        let mut members = HashSet::new();
        for member in &self.members {
            ctx.validate_name(&member.name, "enum member name")?;
            ctx.check_unique(&mut members, &member.name, "enum member")?;

            let member_ctx = ctx.push(&member.name);
            if member.stray_modifiers.is_some() {
                return Err(member_ctx.shape_mismatch(
                    DeclarationKind::EnumMember,
                    &member.name,
                    "modifiers",
                    "modifiers",
                ));
            }
            if member.stray_base_types.is_some() {
                return Err(member_ctx.shape_mismatch(
                    DeclarationKind::EnumMember,
                    &member.name,
                    "base types",
                    "base_types",
                ));
            }
            let out_of_range = member
                .value
                .filter(|value| !(range.0..=range.1).contains(&i128::from(*value)));
            if let Some(value) = out_of_range {
                return Err(member_ctx.source_context().validation_error_at(
                    format!(
                        "value {} of enum member '{}' is out of range for '{}'",
                        value, member.name, underlying
                    ),
                    member_ctx.find_key_span("value"),
                ));
            }
            member_ctx.validate_attributes(&member.attributes)?;
        }
        Ok(())
    }
}

impl FieldConfig {
    fn validate<'a>(&'a self, ctx: &ParseContext<'a>) -> Result<()> {
        ctx.validate_name(&self.name, "field name")?;
        let ctx = ctx.push(&self.name);
        ctx.parse_fragment(&self.ty, "field type", parse_type_name)?;
        ctx.validate_modifiers(&self.modifiers, "field")?;
        ctx.validate_attributes(&self.attributes)?;
        if let Some(initializer) = &self.initializer {
            ctx.parse_fragment(initializer, "initializer", parse_expression)?;
        }
        Ok(())
    }
}

impl PropertyConfig {
    fn validate<'a>(&'a self, ctx: &ParseContext<'a>) -> Result<()> {
        ctx.validate_name(&self.name, "property name")?;
        let ctx = ctx.push(&self.name);
        ctx.parse_fragment(&self.ty, "property type", parse_type_name)?;
        ctx.validate_modifiers(&self.modifiers, "property")?;
        ctx.validate_attributes(&self.attributes)?;
        if let Some(initializer) = &self.initializer {
            ctx.parse_fragment(initializer, "initializer", parse_expression)?;
        }

        let accessors = self.accessor_names();
        let problem = if let Some(unknown) = accessors
            .iter()
            .find(|a| !matches!(**a, "get" | "set" | "init"))
        {
            Some(format!("unknown accessor '{}'", unknown))
        } else if !accessors.contains(&"get") {
            Some("auto-properties need a 'get' accessor".to_string())
        } else if accessors.contains(&"set") && accessors.contains(&"init") {
            Some("a property cannot have both 'set' and 'init'".to_string())
        } else if accessors.iter().collect::<HashSet<_>>().len() != accessors.len() {
            Some("duplicate accessor".to_string())
        } else {
            None
        };

        match problem {
            Some(problem) => Err(ctx.source_context().validation_error_at(
                format!("{} on {}", problem, ctx.context_for("property")),
                ctx.find_key_span("accessors"),
            )),
            None => Ok(()),
        }
    }
}

impl MethodConfig {
    fn validate<'a>(&'a self, ctx: &ParseContext<'a>) -> Result<()> {
        ctx.validate_name(&self.name, "method name")?;
        let ctx = ctx.push(&self.name);
        ctx.parse_fragment(&self.returns, "return type", parse_type_name)?;
        ctx.validate_modifiers(&self.modifiers, "method")?;
        ctx.validate_attributes(&self.attributes)?;

        let mut parameters = HashSet::new();
        for parameter in &self.parameters {
            ctx.validate_name(&parameter.name, "parameter name")?;
            ctx.check_unique(&mut parameters, &parameter.name, "parameter")?;
            ctx.parse_fragment(&parameter.ty, "parameter type", parse_type_name)?;
            if let Some(default) = &parameter.default {
                ctx.parse_fragment(default, "default value", parse_expression)?;
            }
        }

        if let Some(body) = &self.body {
            ctx.parse_fragment(body, "method body", parse_expression)?;
        }
        Ok(())
    }
}

/// Inclusive value range of an integral enum backing type.
fn integral_range(ty: &TypeSyntax) -> Option<(i128, i128)> {
    let TypeSyntax::Predefined(predefined) = ty else {
        return None;
    };
    let range = match predefined {
        PredefinedType::Byte => (0, i128::from(u8::MAX)),
        PredefinedType::SByte => (i128::from(i8::MIN), i128::from(i8::MAX)),
        PredefinedType::Short => (i128::from(i16::MIN), i128::from(i16::MAX)),
        PredefinedType::UShort => (0, i128::from(u16::MAX)),
        PredefinedType::Int => (i128::from(i32::MIN), i128::from(i32::MAX)),
        PredefinedType::UInt => (0, i128::from(u32::MAX)),
        PredefinedType::Long => (i128::from(i64::MIN), i128::from(i64::MAX)),
        PredefinedType::ULong => (0, i128::from(u64::MAX)),
        _ => return None,
    };
    Some(range)
}

/// Check that a name is a C# identifier.
/// Returns None if valid, Some(reason) if invalid.
///
/// A leading `@` marks a verbatim identifier and is not part of the check.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let bare = name.strip_prefix('@').unwrap_or(name);
    let mut chars = bare.chars();

    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.all(|c| c.is_alphanumeric() || c == '_') {
        None
    } else {
        Some("name must contain only letters, digits, and underscores")
    }
}

/// Find the span of a string value in the TOML source, at or after `from`.
///
/// Prefers the quoted form `"value"` and falls back to a bare match, which
/// also finds table headers such as `[[interface.field]]`.
pub(crate) fn find_value_span(src: &str, value: &str, from: usize) -> Option<SourceSpan> {
    if value.is_empty() {
        return None;
    }
    let quoted = format!("\"{}\"", value);
    let tail = src.get(from..).unwrap_or_default();

    if let Some(pos) = tail.find(&quoted) {
        // +1 to skip the opening quote
        return Some(SourceSpan::from((from + pos + 1, value.len())));
    }
    if let Some(pos) = tail.find(value) {
        return Some(SourceSpan::from((from + pos, value.len())));
    }
    if from > 0 {
        return find_value_span(src, value, 0);
    }
    None
}

fn find_last_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", value);
    src.rfind(&quoted)
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
}

/// Find the span of the first `key = ...` line at or after `from`.
pub(crate) fn find_key_span(src: &str, key: &str, from: usize) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let start = offset + (line.len() - trimmed.len());
        offset += line.len();

        if start < from {
            continue;
        }
        let is_entry = trimmed
            .strip_prefix(key)
            .is_some_and(|rest| rest.trim_start().starts_with('='));
        if is_entry {
            return Some(SourceSpan::from((start, key.len())));
        }
    }
    None
}
