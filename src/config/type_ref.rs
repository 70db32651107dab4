use std::fmt;

use thiserror::Error;

/// Go scalar types that may be named without a package qualifier.
pub const BUILTIN_TYPES: &[&str] = &[
    "bool",
    "int",
    "int8",
    "int16",
    "int32",
    "int64",
    "uint",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "uintptr",
    "float32",
    "float64",
    "complex64",
    "complex128",
    "string",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeRefError {
    #[error("`go_type` specifier {0:?} is not a Go basic type e.g. 'string'")]
    NotBuiltin(String),
    #[error(
        "`go_type` specifier {0:?} is not the proper format, expected 'package.type', e.g. 'github.com/segmentio/ksuid.KSUID'"
    )]
    Malformed(String),
}

/// A parsed `go_type` reference.
///
/// For `*github.com/segmentio/ksuid.KSUID` the package is
/// `github.com/segmentio/ksuid`, the type name `*KSUID` and the qualified
/// name `*ksuid.KSUID`. Builtin scalars have an empty package and identical
/// type and qualified names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoType {
    raw: String,
    package: String,
    type_name: String,
    qualified_name: String,
    pointer: bool,
    builtin: bool,
}

impl GoType {
    pub fn parse(input: &str) -> Result<Self, TypeRefError> {
        let last_dot = input.rfind('.');
        let last_slash = input.rfind('/');

        let (Some(dot), Some(slash)) = (last_dot, last_slash) else {
            if last_dot.is_some() || last_slash.is_some() {
                return Err(TypeRefError::Malformed(input.to_string()));
            }
            if !BUILTIN_TYPES.contains(&input) {
                return Err(TypeRefError::NotBuiltin(input.to_string()));
            }
            return Ok(Self {
                raw: input.to_string(),
                package: String::new(),
                type_name: input.to_string(),
                qualified_name: input.to_string(),
                pointer: false,
                builtin: true,
            });
        };

        if dot < slash {
            return Err(TypeRefError::Malformed(input.to_string()));
        }

        let (package, pointer) = match input[..dot].strip_prefix('*') {
            Some(rest) => (rest, true),
            None => (&input[..dot], false),
        };
        let bare = &input[dot + 1..];
        let qualifier = normalize_qualifier(&input[slash + 1..dot]);
        if package.is_empty() || bare.is_empty() || qualifier.is_empty() {
            return Err(TypeRefError::Malformed(input.to_string()));
        }

        let sigil = if pointer { "*" } else { "" };
        Ok(Self {
            raw: input.to_string(),
            package: package.to_string(),
            type_name: format!("{}{}", sigil, bare),
            qualified_name: format!("{}{}.{}", sigil, qualifier, bare),
            pointer,
            builtin: false,
        })
    }

    /// The string as written in the configuration.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Import path, empty for builtin scalars.
    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Type name prefixed with the package's import name, as generated code refers to it.
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn is_pointer(&self) -> bool {
        self.pointer
    }

    pub fn is_builtin(&self) -> bool {
        self.builtin
    }
}

impl fmt::Display for GoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

// Import paths like `github.com/x/go-uuid` or `github.com/x/uuid-go` are
// imported under the name without the `go` affix.
fn normalize_qualifier(segment: &str) -> &str {
    let segment = segment.strip_prefix("go-").unwrap_or(segment);
    segment.strip_suffix("-go").unwrap_or(segment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_builtin_scalar() {
        let parsed = GoType::parse("string").expect("parse");
        assert!(parsed.is_builtin());
        assert!(!parsed.is_pointer());
        assert_eq!(parsed.package(), "");
        assert_eq!(parsed.type_name(), "string");
    }

    #[test]
    fn parses_package_type() {
        let parsed = GoType::parse("github.com/segmentio/ksuid.KSUID").expect("parse");
        assert!(!parsed.is_builtin());
        assert_eq!(parsed.package(), "github.com/segmentio/ksuid");
        assert_eq!(parsed.type_name(), "KSUID");
        assert_eq!(parsed.qualified_name(), "ksuid.KSUID");
    }

    #[test]
    fn parses_pointer_package_type() {
        let parsed = GoType::parse("*github.com/segmentio/ksuid.KSUID").expect("parse");
        assert!(parsed.is_pointer());
        assert_eq!(parsed.package(), "github.com/segmentio/ksuid");
        assert_eq!(parsed.type_name(), "*KSUID");
        assert_eq!(parsed.qualified_name(), "*ksuid.KSUID");
    }

    #[test]
    fn strips_go_affixes_from_qualifier() {
        let parsed = GoType::parse("github.com/gofrs/go-uuid.UUID").expect("parse");
        assert_eq!(parsed.package(), "github.com/gofrs/go-uuid");
        assert_eq!(parsed.qualified_name(), "uuid.UUID");

        let parsed = GoType::parse("github.com/lib/decimal-go.Decimal").expect("parse");
        assert_eq!(parsed.qualified_name(), "decimal.Decimal");
    }

    #[test]
    fn rejects_unknown_bare_names() {
        for input in ["", "*", "text", "String", "*string"] {
            assert_eq!(
                GoType::parse(input),
                Err(TypeRefError::NotBuiltin(input.to_string())),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn rejects_malformed_references() {
        for input in [
            "time.Time",
            "github.com/segmentio/ksuid",
            "github.com/segmentio/ksuid.",
            "*/.T",
            "github.com/foo/.T",
            "/x.",
        ] {
            assert!(
                matches!(GoType::parse(input), Err(TypeRefError::Malformed(_))),
                "input {:?}",
                input
            );
        }
    }

    proptest! {
        #[test]
        fn package_types_split_on_last_dot(
            host in "[a-z]{1,8}\\.(com|org|io)",
            segments in prop::collection::vec("[a-z][a-z0-9]{0,8}", 1..4),
            name in "[A-Z][A-Za-z0-9]{0,10}",
            pointer in any::<bool>(),
        ) {
            let package = format!("{}/{}", host, segments.join("/"));
            let sigil = if pointer { "*" } else { "" };
            let input = format!("{}{}.{}", sigil, package, name);

            let parsed = GoType::parse(&input).expect("parse");
            prop_assert_eq!(parsed.package(), package.as_str());
            prop_assert_eq!(parsed.type_name(), format!("{}{}", sigil, name));
            prop_assert_eq!(parsed.is_pointer(), pointer);
            prop_assert!(!parsed.is_builtin());
        }

        #[test]
        fn bare_names_are_builtin_or_rejected(name in "[a-z0-9]{0,12}") {
            match GoType::parse(&name) {
                Ok(parsed) => {
                    prop_assert!(BUILTIN_TYPES.contains(&name.as_str()));
                    prop_assert!(parsed.is_builtin());
                    prop_assert_eq!(parsed.package(), "");
                }
                Err(err) => prop_assert_eq!(err, TypeRefError::NotBuiltin(name.clone())),
            }
        }

        #[test]
        fn never_panics(input in "\\PC{0,24}") {
            let _ = GoType::parse(&input);
        }
    }
}
