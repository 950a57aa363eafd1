use csdecl_syntax::{HasModifiers, ModifierKind, factory};

/// Replace a declaration's modifiers in one call.
///
/// Implemented for every node that carries a modifier list: classes,
/// interfaces, enums, fields, properties and methods.
pub trait ModifiersExt: HasModifiers {
    /// Return a copy whose modifier list holds exactly `kinds`, in the order
    /// given. Existing modifiers are dropped, not merged; duplicates are kept.
    fn with_modifiers(&self, kinds: impl IntoIterator<Item = ModifierKind>) -> Self {
        self.with_modifier_tokens(factory::token_list(kinds))
    }
}

impl<T: HasModifiers> ModifiersExt for T {}

#[cfg(test)]
mod tests {
    use csdecl_syntax::{
        ClassDeclaration, EnumDeclaration, FieldDeclaration, InterfaceDeclaration,
        MethodDeclaration, PredefinedType, PropertyDeclaration, TypeSyntax,
        VariableDeclarationSyntax,
    };

    use super::*;
    use ModifierKind::*;

    fn kinds<T: HasModifiers>(node: &T) -> Vec<ModifierKind> {
        node.modifiers().iter().map(|token| token.kind()).collect()
    }

    #[test]
    fn test_with_modifiers_replaces_existing() {
        let class = ClassDeclaration::new("User").with_modifiers([Internal, Static]);
        let class = class.with_modifiers([Public, Sealed]);
        assert_eq!(kinds(&class), [Public, Sealed]);
    }

    #[test]
    fn test_with_modifiers_empty_clears() {
        let class = ClassDeclaration::new("User").with_modifiers([Public]);
        assert!(class.with_modifiers([]).modifiers().is_empty());
    }

    #[test]
    fn test_with_modifiers_keeps_order_and_duplicates() {
        let class = ClassDeclaration::new("User").with_modifiers([Static, Public, Static]);
        assert_eq!(kinds(&class), [Static, Public, Static]);
    }

    #[test]
    fn test_with_modifiers_uniform_across_variants() {
        let order = [Protected, Internal, Virtual];
        let int = TypeSyntax::predefined(PredefinedType::Int);

        assert_eq!(kinds(&ClassDeclaration::new("A").with_modifiers(order)), order);
        assert_eq!(kinds(&InterfaceDeclaration::new("IA").with_modifiers(order)), order);
        assert_eq!(kinds(&EnumDeclaration::new("E").with_modifiers(order)), order);
        assert_eq!(
            kinds(&FieldDeclaration::new(VariableDeclarationSyntax::new(int.clone())).with_modifiers(order)),
            order
        );
        assert_eq!(
            kinds(&PropertyDeclaration::new(int.clone(), "P").with_modifiers(order)),
            order
        );
        assert_eq!(kinds(&MethodDeclaration::new(int, "M").with_modifiers(order)), order);
    }

    #[test]
    fn test_with_modifiers_leaves_receiver_untouched() {
        let original = ClassDeclaration::new("User").with_modifiers([Public]);
        let _ = original.with_modifiers([Private]);
        assert_eq!(kinds(&original), [Public]);
    }
}
