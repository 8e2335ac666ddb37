//! Function signature types
//!
//! A `FunctionSignature` is constructed on demand from a function node by the
//! matching language adapter and never persisted. It carries exactly what the
//! stub generator needs: the name, the ordered parameters, and the return
//! type.

use std::fmt;

/// Substitute token for a parameter the grammar yields no name for.
///
/// Keeps signature extraction total: a nameless parameter is rendered as `_`
/// instead of being skipped.
pub const UNNAMED_PARAMETER: &str = "_";

/// A single (name, type) parameter pair, read positionally from the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name, or [`UNNAMED_PARAMETER`] when the node has none
    pub name: String,
    /// Declared type, verbatim source text
    pub type_name: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// The structural signature of a function definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    /// Function name, verbatim (no case transformation applied here)
    pub name: String,
    /// Parameters in declaration order
    pub parameters: Vec<Parameter>,
    /// Return type; the language's canonical "no value" spelling when absent
    /// (`void` for Java, `Unit` for Kotlin)
    pub return_type: String,
}

impl FunctionSignature {
    /// Create a signature with no parameters
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type: return_type.into(),
        }
    }

    /// Append a parameter
    pub fn with_parameter(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.parameters.push(Parameter::new(name, type_name));
        self
    }
}

impl fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", param.name, param.type_name)?;
        }
        write!(f, ") -> {}", self.return_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_display() {
        let sig = FunctionSignature::new("add", "int")
            .with_parameter("a", "int")
            .with_parameter("b", "int");

        assert_eq!(sig.to_string(), "add(a: int, b: int) -> int");
    }

    #[test]
    fn test_empty_signature_display() {
        let sig = FunctionSignature::new("run", "void");
        assert_eq!(sig.to_string(), "run() -> void");
    }
}
