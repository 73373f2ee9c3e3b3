//! Rust impl block builder.

use rpcgen_codegen::builder::{CodeFragment, Renderable};

use super::Fn;

/// Builder for Rust impl blocks.
#[derive(Debug, Clone)]
pub struct Impl {
    type_name: String,
    trait_name: Option<String>,
    methods: Vec<Fn>,
}

impl Impl {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            trait_name: None,
            methods: Vec::new(),
        }
    }

    /// Create an impl block for a trait.
    pub fn for_trait(mut self, trait_name: impl Into<String>) -> Self {
        self.trait_name = Some(trait_name.into());
        self
    }

    pub fn method(mut self, method: Fn) -> Self {
        self.methods.push(method);
        self
    }

    fn header(&self) -> String {
        match &self.trait_name {
            Some(trait_name) => format!("impl {} for {} {{", trait_name, self.type_name),
            None => format!("impl {} {{", self.type_name),
        }
    }
}

impl Renderable for Impl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();
        for (i, method) in self.methods.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::Blank);
            }
            body.extend(method.to_fragments());
        }
        vec![CodeFragment::block(self.header(), body, "}")]
    }
}

#[cfg(test)]
mod tests {
    use rpcgen_codegen::builder::CodeBuilder;

    use super::*;
    use crate::ast::Param;

    #[test]
    fn test_impl_for_trait() {
        let code = CodeBuilder::rust()
            .node(
                &Impl::new("Item")
                    .for_trait("Validate")
                    .method(
                        Fn::new("validate")
                            .private()
                            .param(Param::self_ref())
                            .returns("Result<(), ValidationError>")
                            .body_line("Ok(())"),
                    ),
            )
            .build();
        assert_eq!(
            code,
            "impl Validate for Item {\n    fn validate(&self) -> Result<(), ValidationError> {\n        Ok(())\n    }\n}\n"
        );
    }

    #[test]
    fn test_methods_separated_by_blank_line() {
        let code = CodeBuilder::rust()
            .node(&Impl::new("Foo").method(Fn::new("bar")).method(Fn::new("baz")))
            .build();
        assert!(code.contains("    pub fn bar() {\n    }\n\n    pub fn baz() {\n    }\n"));
    }
}
