//! Inspect command report.

use csdecl_semantic::{
    AttributeData, ConstantValue, Symbol, TypeKind, TypeSymbol, TypedConstant, is_primitive,
};

use super::output::{Output, Report};

/// The declared types of a manifest, with their members.
#[derive(Debug)]
pub struct InspectReport {
    pub types: Vec<TypeSymbol>,
}

impl Report for InspectReport {
    fn render(&self, out: &mut dyn Output) {
        for (i, ty) in self.types.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.section(&format!("{} {}", kind_name(ty.kind), ty));
            if !ty.attributes.is_empty() {
                out.key_value_indented("attributes", &attribute_list(&ty.attributes));
            }
            out.key_value_indented(
                "members",
                &format!(
                    "{} fields, {} properties, {} methods, {} events",
                    ty.get_fields().count(),
                    ty.get_properties().count(),
                    ty.get_methods().count(),
                    ty.get_events().count()
                ),
            );
            for member in &ty.members {
                out.list_item(&member_line(member));
            }
        }
    }
}

fn kind_name(kind: TypeKind) -> &'static str {
    match kind {
        TypeKind::Class => "class",
        TypeKind::Interface => "interface",
        TypeKind::Enum => "enum",
        TypeKind::Struct => "struct",
        TypeKind::Unresolved => "type",
    }
}

fn member_line(member: &Symbol) -> String {
    let mut flags = Vec::new();
    let mut line = match member {
        Symbol::Field(field) => {
            flags.extend(field.is_const.then_some("const"));
            flags.extend((field.is_static && !field.is_const).then_some("static"));
            flags.extend(is_primitive(&field.ty).then_some("primitive"));
            format!("field {}: {}", field.name, field.ty)
        }
        Symbol::Property(property) => {
            flags.extend(property.is_static.then_some("static"));
            flags.extend(property.is_read_only.then_some("read-only"));
            flags.extend(is_primitive(&property.ty).then_some("primitive"));
            format!("property {}: {}", property.name, property.ty)
        }
        Symbol::Method(method) => {
            flags.extend(method.is_static.then_some("static"));
            let parameters: Vec<String> = method
                .parameters
                .iter()
                .map(|p| format!("{} {}", p.ty, p.name))
                .collect();
            format!(
                "method {}({}): {}",
                method.name,
                parameters.join(", "),
                method.return_type
            )
        }
        Symbol::Event(event) => {
            flags.extend(event.is_static.then_some("static"));
            format!("event {}: {}", event.name, event.ty)
        }
    };

    if !flags.is_empty() {
        line.push_str(&format!(" ({})", flags.join(", ")));
    }
    if !member.attributes().is_empty() {
        line.push(' ');
        line.push_str(&attribute_list(member.attributes()));
    }
    line
}

fn attribute_list(attributes: &[AttributeData]) -> String {
    attributes
        .iter()
        .map(|attribute| format!("[{}]", attribute_text(attribute)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn attribute_text(attribute: &AttributeData) -> String {
    let positional = attribute.constructor_arguments.iter().map(constant_text);
    let named = attribute
        .named_arguments
        .iter()
        .map(|(name, value)| format!("{} = {}", name, constant_text(value)));
    let arguments: Vec<String> = positional.chain(named).collect();

    if arguments.is_empty() {
        attribute.attribute_class.clone()
    } else {
        format!("{}({})", attribute.attribute_class, arguments.join(", "))
    }
}

fn constant_text(constant: &TypedConstant) -> String {
    match &constant.value {
        ConstantValue::Null => "null".to_string(),
        ConstantValue::Bool(v) => v.to_string(),
        ConstantValue::Char(v) => format!("{:?}", v),
        ConstantValue::Int(v) => v.to_string(),
        ConstantValue::UInt(v) => v.to_string(),
        ConstantValue::Float(v) => v.to_string(),
        ConstantValue::String(v) if constant.type_name.as_deref() == Some("string") => {
            format!("{:?}", v)
        }
        // Opaque expressions keep their source text
        ConstantValue::String(v) => v.clone(),
        ConstantValue::Type(v) => format!("typeof({})", v),
        ConstantValue::Enum(member) => format!(
            "{}.{}",
            constant.type_name.as_deref().unwrap_or_default(),
            member
        ),
        ConstantValue::Array(values) => format!(
            "{{{}}}",
            values.iter().map(constant_text).collect::<Vec<_>>().join(", ")
        ),
    }
}

#[cfg(test)]
mod tests {
    use csdecl_semantic::{FieldSymbol, MethodSymbol, ParameterSymbol, PropertySymbol};

    use super::*;
    use crate::reports::output::BufferOutput;

    fn int() -> TypeSymbol {
        TypeSymbol::unresolved("int")
    }

    #[test]
    fn test_inspect_report_render() {
        let user = TypeSymbol::new(TypeKind::Class, "User")
            .with_namespace("Acme")
            .with_attribute(
                AttributeData::new("Table")
                    .with_constructor_argument(TypedConstant::string("users"))
                    .with_named_argument("Schema", TypedConstant::string("auth")),
            )
            .with_member(FieldSymbol {
                name: "Max".to_string(),
                ty: int(),
                is_static: true,
                is_const: true,
                attributes: vec![],
            })
            .with_member(PropertySymbol {
                name: "Owner".to_string(),
                ty: TypeSymbol::new(TypeKind::Class, "User").with_namespace("Acme"),
                is_static: false,
                is_read_only: true,
                attributes: vec![AttributeData::new("Obsolete")],
            })
            .with_member(MethodSymbol {
                name: "Resize".to_string(),
                return_type: TypeSymbol::unresolved("void"),
                parameters: vec![ParameterSymbol {
                    name: "size".to_string(),
                    ty: int(),
                }],
                is_static: false,
                attributes: vec![],
            });

        let mut out = BufferOutput::default();
        InspectReport { types: vec![user] }.render(&mut out);
        assert_eq!(
            out.lines,
            [
                "class Acme.User:",
                r#"  attributes: [Table("users", Schema = "auth")]"#,
                "  members: 1 fields, 1 properties, 1 methods, 0 events",
                "  - field Max: int (const, primitive)",
                "  - property Owner: Acme.User (read-only) [Obsolete]",
                "  - method Resize(int size): void",
            ]
        );
    }

    #[test]
    fn test_constant_text() {
        assert_eq!(constant_text(&TypedConstant::null()), "null");
        assert_eq!(constant_text(&TypedConstant::string("a\"b")), r#""a\"b""#);
        assert_eq!(constant_text(&TypedConstant::char('x')), "'x'");
        assert_eq!(constant_text(&TypedConstant::type_of("User")), "typeof(User)");
        assert_eq!(
            constant_text(&TypedConstant::enum_member("LogLevel", "Warning")),
            "LogLevel.Warning"
        );
        assert_eq!(
            constant_text(&TypedConstant::array(
                "int",
                vec![TypedConstant::int(1), TypedConstant::int(2)]
            )),
            "{1, 2}"
        );
    }
}
