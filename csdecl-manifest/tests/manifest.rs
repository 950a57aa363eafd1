use std::{io::Write, str::FromStr};

use csdecl_manifest::{ClassConfig, Error, LowerError, Manifest};
use csdecl_semantic::{
    AttributeQueries, TypeKind, TypedConstant, is_primitive, value_or_default,
};

const USER_MANIFEST: &str = r#"
usings = ["System"]

[namespace]
name = "Acme.Models"
usings = ["System.ComponentModel.DataAnnotations"]

[[class]]
name = "User"
modifiers = ["public", "sealed"]
base_types = ["Entity<Guid>", "IDisposable"]
attributes = [{ name = "Serializable" }, { name = "Table", args = [{ value = "users" }, { name = "Schema", value = "auth" }] }]

[[class.field]]
name = "MaxNameLength"
type = "int"
modifiers = ["public", "const"]
initializer = "64"

[[class.field]]
name = "_cache"
type = "Dictionary<string, Role>"
modifiers = ["private", "readonly"]

[[class.property]]
name = "Name"
type = "string"
modifiers = ["public"]
attributes = [
    { name = "Obsolete", args = [{ name = "message", value = "use DisplayName" }, { name = "error", value = false }] },
    { name = "MaxLength", args = [{ value = 64 }] },
]

[[class.property]]
name = "Id"
type = "Guid"
modifiers = ["public"]
accessors = ["get", "init"]

[[class.property]]
name = "Role"
type = "Role"
modifiers = ["public"]
accessors = ["get"]
attributes = [{ name = "DefaultValue", args = [{ value = "Role.Member", quoted = false }] }]

[[class.method]]
name = "Rename"
modifiers = ["public"]
parameters = [{ name = "name", type = "string" }, { name = "force", type = "bool", default = "false" }]

[[class.method]]
name = "Describe"
returns = "string"
modifiers = ["public"]
body = "nameof(User)"

[[interface]]
name = "IAuditable"
modifiers = ["public"]

[[interface.property]]
name = "ModifiedAt"
type = "DateTime?"
accessors = ["get"]

[[interface.method]]
name = "Touch"
returns = "void"

[[enum]]
name = "Role"
modifiers = ["public"]
type = "byte"

[[enum.member]]
name = "Member"
value = 0

[[enum.member]]
name = "Admin"
value = 1
attributes = [{ name = "Description", args = [{ value = "Full access" }] }]
"#;

fn parse_err(src: &str) -> Box<Error> {
    Manifest::from_str(src).unwrap_err()
}

#[test]
fn test_render_full_manifest() {
    let manifest = Manifest::from_str(USER_MANIFEST).unwrap();
    let unit = manifest.lower().unwrap();

    insta::assert_snapshot!(unit.to_string(), @r#"
    using System;

    namespace Acme.Models
    {
        using System.ComponentModel.DataAnnotations;

        [Serializable]
        [Table("users", Schema = "auth")]
        public sealed class User : Entity<Guid>, IDisposable
        {
            public const int MaxNameLength = 64;
            private readonly Dictionary<string, Role> _cache;
            [Obsolete(message = "use DisplayName", error = false)]
            [MaxLength(64)]
            public string Name { get; set; }
            public Guid Id { get; init; }
            [DefaultValue(Role.Member)]
            public Role Role { get; }

            public void Rename(string name, bool force = false)
            {
            }

            public string Describe() => nameof(User);
        }

        public interface IAuditable
        {
            DateTime? ModifiedAt { get; }

            void Touch();
        }

        public enum Role : byte
        {
            Member = 0,
            [Description("Full access")]
            Admin = 1
        }
    }
    "#);
}

#[test]
fn test_minimal_manifest_without_namespace() {
    let manifest = Manifest::from_str(
        r#"
[[class]]
name = "Empty"
base_types = []
"#,
    )
    .unwrap();
    assert!(manifest.namespace.is_none());
    assert_eq!(manifest.lower().unwrap().to_string(), "class Empty\n{\n}\n");
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(USER_MANIFEST.as_bytes()).unwrap();

    let manifest = Manifest::from_file(file.path()).unwrap();
    assert_eq!(manifest.classes.len(), 1);
    assert_eq!(manifest.interfaces[0].name, "IAuditable");
    assert_eq!(manifest.enums[0].members.len(), 2);
}

#[test]
fn test_from_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = Manifest::from_file(dir.path().join("csdecl.toml")).unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
}

#[test]
fn test_unknown_key_is_parse_error() {
    let err = parse_err(
        r#"
[[class]]
name = "User"
sealed = true
"#,
    );
    assert!(matches!(*err, Error::Parse { .. }));
}

#[test]
fn test_reserved_keyword_class_name_has_span() {
    let src = "[[class]]\nname = \"class\"\n";
    let err = parse_err(src);
    let Error::ReservedKeyword { span, name, .. } = *err else {
        panic!("expected reserved keyword error");
    };
    assert_eq!(name, "class");
    let span = span.unwrap();
    assert_eq!(&src[span.offset()..span.offset() + span.len()], "class");
}

#[test]
fn test_verbatim_keyword_is_allowed() {
    let manifest = Manifest::from_str("[[class]]\nname = \"@class\"\n").unwrap();
    assert!(
        manifest
            .lower()
            .unwrap()
            .to_string()
            .starts_with("class @class")
    );
}

#[test]
fn test_keyword_field_type_is_fine_but_keyword_field_name_is_not() {
    let err = parse_err(
        r#"
[[class]]
name = "User"

[[class.field]]
name = "int"
type = "int"
"#,
    );
    assert_eq!(
        err.to_string(),
        "'int' is a C# reserved keyword (field name in 'User')"
    );
}

#[test]
fn test_invalid_identifier() {
    let err = parse_err("[[enum]]\nname = \"2Fast\"\n");
    assert!(matches!(*err, Error::InvalidIdentifier { .. }));
}

#[test]
fn test_unknown_modifier() {
    let err = parse_err(
        r#"
[[class]]
name = "User"
modifiers = ["public", "frozen"]
"#,
    );
    assert_eq!(err.to_string(), "unknown modifier 'frozen' on class in 'User'");
}

#[test]
fn test_unparsable_base_type() {
    let src = "[[class]]\nname = \"User\"\nbase_types = [\"List<int\"]\n";
    let err = parse_err(src);
    let Error::InvalidSyntax { span, text, .. } = *err else {
        panic!("expected syntax error");
    };
    assert_eq!(text, "List<int");
    assert_eq!(span.unwrap().offset(), src.find("List<int").unwrap());
}

#[test]
fn test_positional_null_needs_a_name() {
    let err = parse_err(
        r#"
[[class]]
name = "User"
attributes = [{ name = "DefaultValue", args = [{ quoted = false }] }]
"#,
    );
    assert_eq!(err.to_string(), "null argument of 'DefaultValue' needs a name");
}

#[test]
fn test_named_null_argument() {
    let manifest = Manifest::from_str(
        r#"
[[class]]
name = "User"
attributes = [{ name = "Obsolete", args = [{ name = "message" }] }]
"#,
    )
    .unwrap();
    assert!(
        manifest
            .lower()
            .unwrap()
            .to_string()
            .starts_with("[Obsolete(message = null)]")
    );
}

#[test]
fn test_table_argument_rejected() {
    let err = parse_err(
        r#"
[[class]]
name = "User"
attributes = [{ name = "Meta", args = [{ value = { a = 1 } }] }]
"#,
    );
    assert!(matches!(*err, Error::Validation { .. }));
}

#[test]
fn test_interface_fields_are_shape_mismatch() {
    let err = parse_err(
        r#"
[[interface]]
name = "IRepo"

[[interface.field]]
name = "_x"
type = "int"
"#,
    );
    assert_eq!(err.to_string(), "interface 'IRepo' cannot carry fields");
    assert!(matches!(*err, Error::ShapeMismatch { .. }));
}

#[test]
fn test_enum_member_modifiers_are_shape_mismatch() {
    let src = r#"
[[enum]]
name = "Role"

[[enum.member]]
name = "Admin"
modifiers = ["public"]
"#;
    let err = parse_err(src);
    let Error::ShapeMismatch { span, name, .. } = *err else {
        panic!("expected shape mismatch");
    };
    assert_eq!(name, "Admin");
    assert_eq!(span.unwrap().offset(), src.find("modifiers").unwrap());
}

#[test]
fn test_enum_base_types_are_shape_mismatch() {
    let err = parse_err("[[enum]]\nname = \"Role\"\nbase_types = [\"int\"]\n");
    assert!(matches!(*err, Error::ShapeMismatch { .. }));
}

#[test]
fn test_enum_underlying_type_must_be_integral() {
    let err = parse_err("[[enum]]\nname = \"Role\"\ntype = \"string\"\n");
    assert_eq!(
        err.to_string(),
        "underlying type of enum 'Role' must be an integral type, found 'string'"
    );
}

#[test]
fn test_property_accessor_rules() {
    let with = |accessors: &str| {
        format!(
            "[[class]]\nname = \"User\"\n[[class.property]]\nname = \"Name\"\ntype = \"string\"\naccessors = {}\n",
            accessors
        )
    };
    assert!(Manifest::from_str(&with(r#"["get", "init"]"#)).is_ok());
    assert!(Manifest::from_str(&with(r#"["set"]"#)).is_err());
    assert!(Manifest::from_str(&with(r#"["get", "set", "init"]"#)).is_err());
    assert!(Manifest::from_str(&with(r#"["get", "get"]"#)).is_err());
    assert!(Manifest::from_str(&with(r#"["get", "remove"]"#)).is_err());
}

#[test]
fn test_enum_member_value_must_fit_underlying_type() {
    let src = r#"
[[enum]]
name = "Flags"
type = "byte"

[[enum.member]]
name = "Big"
value = 300
"#;
    let err = parse_err(src);
    assert_eq!(
        err.to_string(),
        "value 300 of enum member 'Big' is out of range for 'byte'"
    );
    let Error::Validation { span, .. } = *err else {
        panic!("expected validation error");
    };
    assert_eq!(span.unwrap().offset(), src.find("value").unwrap());

    let err = parse_err("[[enum]]\nname = \"Big\"\n[[enum.member]]\nname = \"A\"\nvalue = 4294967296\n");
    assert!(err.to_string().ends_with("out of range for 'int'"));

    assert!(
        Manifest::from_str(
            "[[enum]]\nname = \"Small\"\ntype = \"sbyte\"\n[[enum.member]]\nname = \"Low\"\nvalue = -128\n"
        )
        .is_ok()
    );
}

#[test]
fn test_method_cannot_reuse_member_name() {
    let err = parse_err(
        r#"
[[class]]
name = "User"

[[class.field]]
name = "Name"
type = "string"

[[class.method]]
name = "Name"
"#,
    );
    assert_eq!(err.to_string(), "duplicate member 'Name'");

    let err = parse_err(
        r#"
[[interface]]
name = "IUser"

[[interface.property]]
name = "Id"
type = "int"

[[interface.method]]
name = "Id"
"#,
    );
    assert_eq!(err.to_string(), "duplicate member 'Id'");
}

#[test]
fn test_method_overloads_are_allowed() {
    let manifest = Manifest::from_str(
        r#"
[[class]]
name = "Writer"

[[class.method]]
name = "Write"
parameters = [{ name = "text", type = "string" }]

[[class.method]]
name = "Write"
parameters = [{ name = "value", type = "int" }]
"#,
    )
    .unwrap();
    assert_eq!(manifest.classes[0].methods.len(), 2);
}

#[test]
fn test_lower_rejects_unknown_modifier_built_in_code() {
    let manifest = Manifest {
        classes: vec![ClassConfig {
            name: "User".to_string(),
            modifiers: vec!["pubic".to_string(), "sealed".to_string()],
            base_types: None,
            attributes: vec![],
            fields: vec![],
            properties: vec![],
            methods: vec![],
        }],
        ..Default::default()
    };
    let err = manifest.lower().unwrap_err();
    assert!(matches!(&err, LowerError::UnknownModifier { modifier, .. } if modifier == "pubic"));
    assert_eq!(err.to_string(), "unknown modifier 'pubic' on class 'User'");
}

#[test]
fn test_duplicate_type_names() {
    let err = parse_err("[[class]]\nname = \"User\"\n[[enum]]\nname = \"User\"\n");
    assert_eq!(err.to_string(), "duplicate type 'User'");
}

#[test]
fn test_symbols_members_and_kinds() {
    let manifest = Manifest::from_str(USER_MANIFEST).unwrap();
    let symbols = manifest.symbols().unwrap();
    let names: Vec<String> = symbols.iter().map(|s| s.to_string()).collect();
    assert_eq!(
        names,
        ["Acme.Models.User", "Acme.Models.IAuditable", "Acme.Models.Role"]
    );

    let user = &symbols[0];
    assert_eq!(user.kind, TypeKind::Class);
    let fields: Vec<&str> = user.get_fields().map(|f| f.name.as_str()).collect();
    assert_eq!(fields, ["MaxNameLength", "_cache"]);
    assert_eq!(user.get_properties().count(), 3);
    assert_eq!(user.get_methods().count(), 2);
    assert_eq!(user.get_events().count(), 0);

    let max = user.get_fields().next().unwrap();
    assert!(max.is_const && max.is_static);
    assert!(is_primitive(&max.ty));

    let role = user.get_properties().find(|p| p.name == "Role").unwrap();
    assert!(role.is_read_only);
    assert_eq!(role.ty.kind, TypeKind::Enum);
    assert_eq!(role.ty.to_string(), "Acme.Models.Role");
    assert!(!is_primitive(&role.ty));

    let rename = user.get_methods().next().unwrap();
    assert_eq!(rename.return_type.to_string(), "void");
    assert_eq!(rename.parameters.len(), 2);
}

#[test]
fn test_symbols_attribute_queries() {
    let manifest = Manifest::from_str(USER_MANIFEST).unwrap();
    let symbols = manifest.symbols().unwrap();
    let user = &symbols[0];

    let table = user.get_attribute("Table").unwrap();
    assert_eq!(table.constructor_arguments, [TypedConstant::string("users")]);
    assert_eq!(
        value_or_default::<String>(table.get_named_argument("Schema")),
        Ok("auth".to_string())
    );
    assert!(user.get_attribute("Obsolete").is_none());

    let name = user.get_properties().find(|p| p.name == "Name").unwrap();
    let obsolete = name.get_attribute("Obsolete").unwrap();
    assert_eq!(
        value_or_default::<bool>(obsolete.get_named_argument("error")),
        Ok(false)
    );
    assert_eq!(obsolete.get_named_argument("DiagnosticId"), None);
    assert_eq!(
        value_or_default::<String>(obsolete.get_named_argument("DiagnosticId")),
        Ok(String::new())
    );
    let max_length = name.get_attribute("MaxLength").unwrap();
    assert_eq!(max_length.constructor_arguments, [TypedConstant::int(64)]);

    let role = user.get_properties().find(|p| p.name == "Role").unwrap();
    let default = role.get_attribute("DefaultValue").unwrap();
    assert_eq!(
        default.constructor_arguments,
        [TypedConstant::enum_member("Role", "Member")]
    );
}

#[test]
fn test_symbols_enum_members_are_constants() {
    let manifest = Manifest::from_str(USER_MANIFEST).unwrap();
    let symbols = manifest.symbols().unwrap();
    let role = &symbols[2];
    assert_eq!(role.kind, TypeKind::Enum);

    let admin = role.get_fields().find(|f| f.name == "Admin").unwrap();
    assert!(admin.is_const && admin.is_static);
    assert_eq!(admin.ty.to_string(), "Acme.Models.Role");
    assert_eq!(admin.get_attributes("Description").count(), 1);
}
