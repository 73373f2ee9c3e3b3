//! `impl Validate` blocks built from schema checks.

use rpcgen_codegen::{
    builder::CodeFragment,
    schema::{Check, DefaultValue, REQUIRED_MESSAGE, Zero, one_of_message},
};
use rpcgen_ir::Field;

use crate::{
    ast::{Fn, Impl, Param},
    naming::RUST_NAMING,
};

/// The `rpcgen_runtime::Validate` implementation of the struct `type_name`.
///
/// `apply_defaults` is only written when a field has a default or holds
/// nested elements; the trait's empty default covers the rest.
pub fn validate_impl(type_name: &str, checks: &[Check<'_>]) -> Impl {
    let mut imp = Impl::new(type_name).for_trait("Validate");

    let defaults: Vec<CodeFragment> = checks.iter().flat_map(default_fragments).collect();
    if !defaults.is_empty() {
        imp = imp.method(
            Fn::new("apply_defaults")
                .private()
                .param(Param::new("&mut self", ""))
                .fragments(defaults),
        );
    }

    let mut body = Vec::new();
    for check in checks {
        body.extend(validate_fragments(check));
    }
    body.push(CodeFragment::line("Ok(())"));

    imp.method(
        Fn::new("validate")
            .private()
            .param(Param::self_ref())
            .returns("Result<(), ValidationError>")
            .fragments(body),
    )
}

fn default_fragments(check: &Check<'_>) -> Vec<CodeFragment> {
    match check {
        Check::Default { field, value } => {
            let target = target(field);
            let (condition, literal) = match value {
                DefaultValue::String(s) => {
                    (format!("{}.is_empty()", target), format!("{:?}.to_string()", s))
                }
                DefaultValue::Integer(n) => (format!("{} == 0", target), n.to_string()),
                DefaultValue::Float(n) => (format!("{} == 0.0", target), format!("{:?}", n)),
            };
            vec![CodeFragment::block(
                format!("if {} {{", condition),
                vec![CodeFragment::line(format!("{} = {};", target, literal))],
                "}",
            )]
        }
        Check::Elements { field, .. } => vec![CodeFragment::block(
            format!("for v in &mut {} {{", target(field)),
            vec![CodeFragment::line("v.apply_defaults();")],
            "}",
        )],
        Check::Required { .. } | Check::OneOf { .. } => Vec::new(),
    }
}

fn validate_fragments(check: &Check<'_>) -> Vec<CodeFragment> {
    match check {
        Check::Default { .. } => Vec::new(),
        Check::Required { field, zero } => {
            let target = target(field);
            let condition = match zero {
                Zero::EmptyString | Zero::EmptyArray | Zero::EmptyObject => {
                    format!("{}.is_empty()", target)
                }
                Zero::ZeroInt => format!("{} == 0", target),
                Zero::ZeroFloat => format!("{} == 0.0", target),
                Zero::UnsetTimestamp | Zero::UnsetReference => format!("{}.is_none()", target),
            };
            vec![CodeFragment::block(
                format!("if {} {{", condition),
                vec![failure(field, REQUIRED_MESSAGE)],
                "}",
            )]
        }
        Check::OneOf { field } => {
            let target = target(field);
            let values = field
                .enum_values
                .iter()
                .map(|v| format!("{:?}", v))
                .collect::<Vec<_>>()
                .join(", ");
            vec![CodeFragment::block(
                format!(
                    "if !{}.is_empty() && ![{}].contains(&{}.as_str()) {{",
                    target, values, target
                ),
                vec![failure(field, &one_of_message(&field.enum_values))],
                "}",
            )]
        }
        Check::Elements { field, .. } => vec![CodeFragment::block(
            format!("for (i, v) in {}.iter().enumerate() {{", target(field)),
            vec![CodeFragment::line(
                "v.validate().map_err(|err| err.at_element(i))?;",
            )],
            "}",
        )],
    }
}

fn failure(field: &Field, message: &str) -> CodeFragment {
    CodeFragment::line(format!(
        "return Err(ValidationError::new({:?}, {:?}));",
        field.name, message
    ))
}

fn target(field: &Field) -> String {
    format!("self.{}", RUST_NAMING.field_name(&field.name))
}

#[cfg(test)]
mod tests {
    use rpcgen_codegen::{
        builder::CodeBuilder,
        schema::checks,
        testing::{schema_from_str, todo_schema},
    };

    use super::*;

    #[test]
    fn test_required_string() {
        let schema = todo_schema();
        let item = schema.type_named("item").unwrap();
        let checks = checks(&schema, &item.properties).unwrap();

        let code = CodeBuilder::rust().node(&validate_impl("Item", &checks)).build();
        assert_eq!(
            code,
            "impl Validate for Item {\n\
             \x20   fn validate(&self) -> Result<(), ValidationError> {\n\
             \x20       if self.text.is_empty() {\n\
             \x20           return Err(ValidationError::new(\"text\", \"is required\"));\n\
             \x20       }\n\
             \x20       Ok(())\n\
             \x20   }\n\
             }\n"
        );
    }

    #[test]
    fn test_defaults_enum_and_elements() {
        let schema = schema_from_str(
            r##"{
                "name": "x",
                "version": "1",
                "description": "",
                "groups": [],
                "methods": [],
                "types": {
                    "task": {
                        "properties": [
                            { "name": "priority", "type": "integer", "default": 3 },
                            { "name": "status", "type": "string", "enum": ["open", "closed"] },
                            { "name": "subtasks", "type": "array", "items": { "$ref": "#/types/task" } },
                            { "name": "weight", "type": "float", "default": 1.5 }
                        ]
                    }
                }
            }"##,
        );
        let task = schema.type_named("task").unwrap();
        let checks = checks(&schema, &task.properties).unwrap();
        let code = CodeBuilder::rust().node(&validate_impl("Task", &checks)).build();

        assert!(code.contains("    fn apply_defaults(&mut self) {\n"));
        assert!(code.contains("        if self.priority == 0 {\n            self.priority = 3;\n"));
        assert!(code.contains("        if self.weight == 0.0 {\n            self.weight = 1.5;\n"));
        assert!(code.contains("        for v in &mut self.subtasks {\n            v.apply_defaults();\n"));
        assert!(code.contains(
            "if !self.status.is_empty() && ![\"open\", \"closed\"].contains(&self.status.as_str()) {"
        ));
        assert!(code.contains(
            "return Err(ValidationError::new(\"status\", \"must be one of: \\\"open\\\", \\\"closed\\\"\"));"
        ));
        assert!(code.contains("v.validate().map_err(|err| err.at_element(i))?;"));
    }
}
