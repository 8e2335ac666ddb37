//! Stub doc generator
//!
//! Pure function from a structural signature to templated comment text. No
//! network, no configuration - identical signatures always yield
//! byte-identical output.
//!
//! The template emits one `@return` line per parameter, paired with its
//! `@param` line. That mirrors the observed behavior of the system this
//! replaces and is covered by tests; do not "fix" it here without changing
//! the template contract.

use crate::signature::FunctionSignature;

/// Render the stub doc comment for a signature.
///
/// ```
/// use docsmith::FunctionSignature;
///
/// let sig = FunctionSignature::new("add", "int")
///     .with_parameter("a", "int")
///     .with_parameter("b", "int");
/// let text = docsmith::stub::render(&sig);
/// assert!(text.starts_with("/**"));
/// assert!(text.ends_with("*/"));
/// ```
pub fn render(signature: &FunctionSignature) -> String {
    let mut out = String::from("/**\n");
    out.push_str(&format!(
        "* {} Method Description:\n",
        capitalize(&signature.name)
    ));
    out.push_str("*\n");

    for param in &signature.parameters {
        out.push_str(&format!("* @param {} of type {}\n", param.name, param.type_name));
        out.push_str(&format!("* @return {}\n", signature.return_type));
    }

    out.push_str("*/");
    out
}

/// Leading-capitalize the function name for the template header.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_like_two_parameter_stub() {
        let sig = FunctionSignature::new("add", "int")
            .with_parameter("a", "int")
            .with_parameter("b", "int");

        let text = render(&sig);
        assert_eq!(
            text,
            "/**\n\
             * Add Method Description:\n\
             *\n\
             * @param a of type int\n\
             * @return int\n\
             * @param b of type int\n\
             * @return int\n\
             */"
        );
    }

    #[test]
    fn test_kotlin_like_single_parameter_stub() {
        let sig = FunctionSignature::new("greet", "String").with_parameter("name", "String");

        let text = render(&sig);
        assert!(text.contains("* Greet Method Description:"));
        assert!(text.contains("* @param name of type String"));
        assert!(text.contains("* @return String"));
        assert!(text.starts_with("/**"));
        assert!(text.ends_with("*/"));
    }

    #[test]
    fn test_one_return_line_per_parameter() {
        let sig = FunctionSignature::new("add", "int")
            .with_parameter("a", "int")
            .with_parameter("b", "int");

        let text = render(&sig);
        let returns = text.matches("* @return int").count();
        assert_eq!(returns, 2);
    }

    #[test]
    fn test_zero_parameters_still_closes_block() {
        let sig = FunctionSignature::new("run", "void");

        let text = render(&sig);
        assert_eq!(text, "/**\n* Run Method Description:\n*\n*/");
        assert!(!text.contains("@param"));
        assert!(!text.contains("@return"));
    }

    #[test]
    fn test_deterministic() {
        let sig = FunctionSignature::new("greet", "String").with_parameter("name", "String");
        assert_eq!(render(&sig), render(&sig));
    }
}
