//! Naming conventions for different programming languages.

use rpcgen_core::{Naming, to_snake_case};

/// How a schema identifier is cased for one kind of symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// `user_id` -> `UserID` (acronym-aware upper camel).
    Exported,
    /// `user_id` -> `userID` (acronym-aware lower camel).
    Member,
    /// `userId` -> `user_id`.
    Snake,
    /// The wire name, unchanged.
    Wire,
}

/// Language-specific naming conventions.
///
/// Defines how schema identifiers become type, field and method names, and
/// how reserved words are escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Acronym-aware normalizer used by [`Case::Exported`] and [`Case::Member`].
    pub naming: Naming,
    /// Casing of type names (schema types, method input/output types).
    pub type_case: Case,
    /// Casing of field names.
    pub field_case: Case,
    /// Casing of method names.
    pub method_case: Case,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "type" -> "r#type" in Rust)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a type name.
    pub fn type_name(&self, name: &str) -> String {
        self.safe_name(&self.apply(self.type_case, name))
    }

    /// Transform and make safe for use as a field name.
    ///
    /// [`Case::Wire`] names are returned untouched, since they must match
    /// the JSON keys.
    pub fn field_name(&self, name: &str) -> String {
        match self.field_case {
            Case::Wire => name.to_string(),
            case => self.safe_name(&self.apply(case, name)),
        }
    }

    /// Transform and make safe for use as a method name.
    pub fn method_name(&self, name: &str) -> String {
        self.safe_name(&self.apply(self.method_case, name))
    }

    /// Acronym-aware lower-camel name, whatever the configured cases.
    pub fn member_name(&self, name: &str) -> String {
        self.safe_name(&self.naming.member_name(name))
    }

    /// Type name of a method's request shape, e.g. `AddItemInput`.
    pub fn input_type(&self, method: &str) -> String {
        format!("{}Input", self.apply(self.type_case, method))
    }

    /// Type name of a method's response shape, e.g. `AddItemOutput`.
    pub fn output_type(&self, method: &str) -> String {
        format!("{}Output", self.apply(self.type_case, method))
    }

    fn apply(&self, case: Case, name: &str) -> String {
        match case {
            Case::Exported => self.naming.exported_name(name),
            Case::Member => self.naming.member_name(name),
            Case::Snake => to_snake_case(name),
            Case::Wire => name.to_string(),
        }
    }
}
