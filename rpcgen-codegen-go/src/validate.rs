//! `Validate() error` methods built from schema checks.

use rpcgen_codegen::{
    builder::CodeFragment,
    schema::{Check, DefaultValue, REQUIRED_MESSAGE, Zero, one_of_message},
};
use rpcgen_ir::Field;
use serde_json::Value;

use crate::{ast::Func, naming::GO_NAMING};

/// The `oneOf` helper used by enum checks.
pub const ONE_OF_HELPER: &str = "\
// oneOf returns true if s is in the values.
func oneOf(s string, values []string) bool {
\tfor _, v := range values {
\t\tif s == v {
\t\t\treturn true
\t\t}
\t}
\treturn false
}";

/// Packages a set of validation methods needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Needs {
    /// `fmt`, for annotating element failures with their index.
    pub fmt: bool,
    /// The runtime package, for `ValidationError`.
    pub runtime: bool,
    /// The `oneOf` helper.
    pub one_of: bool,
}

impl Needs {
    pub fn merge(&mut self, other: Needs) {
        self.fmt |= other.fmt;
        self.runtime |= other.runtime;
        self.one_of |= other.one_of;
    }
}

/// Builds `Validate` methods for one Go package.
#[derive(Debug, Clone)]
pub struct ValidateWriter<'r> {
    /// Package qualifier of the runtime, e.g. `rpc`.
    runtime: &'r str,
    needs: Needs,
}

impl<'r> ValidateWriter<'r> {
    pub fn new(runtime: &'r str) -> Self {
        Self {
            runtime,
            needs: Needs::default(),
        }
    }

    pub fn needs(&self) -> Needs {
        self.needs
    }

    /// The `Validate` method of the struct `type_name`.
    pub fn method(&mut self, type_name: &str, checks: &[Check<'_>]) -> Func {
        let recv = receiver(type_name);
        let mut body = Vec::new();
        for check in checks {
            body.extend(self.check(&recv, check));
            body.push(CodeFragment::Blank);
        }
        body.push(CodeFragment::line("return nil"));

        Func::new("Validate")
            .doc("Validate implementation.")
            .receiver(format!("{} *{}", recv, type_name))
            .returns("error")
            .body(body)
    }

    fn check(&mut self, recv: &str, check: &Check<'_>) -> Vec<CodeFragment> {
        match check {
            Check::Default { field, value } => {
                let target = target(recv, field);
                let (zero, literal) = match value {
                    DefaultValue::String(s) => ("\"\"", Value::String(s.clone()).to_string()),
                    DefaultValue::Integer(n) => ("0", n.to_string()),
                    DefaultValue::Float(n) => ("0", format!("{:?}", n)),
                };
                vec![CodeFragment::block(
                    format!("if {} == {} {{", target, zero),
                    vec![CodeFragment::line(format!("{} = {}", target, literal))],
                    "}",
                )]
            }
            Check::Required { field, zero } => {
                let target = target(recv, field);
                let condition = match zero {
                    Zero::EmptyString => format!("{} == \"\"", target),
                    Zero::ZeroInt | Zero::ZeroFloat => format!("{} == 0", target),
                    Zero::EmptyArray | Zero::EmptyObject | Zero::UnsetReference => {
                        format!("{} == nil", target)
                    }
                    Zero::UnsetTimestamp => format!("{}.IsZero()", target),
                };
                vec![CodeFragment::block(
                    format!("if {} {{", condition),
                    vec![self.failure(field, REQUIRED_MESSAGE)],
                    "}",
                )]
            }
            Check::OneOf { field } => {
                self.needs.one_of = true;
                let target = target(recv, field);
                let values = field
                    .enum_values
                    .iter()
                    .map(|v| Value::String(v.clone()).to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                vec![CodeFragment::block(
                    format!(
                        "if {} != \"\" && !oneOf({}, []string{{{}}}) {{",
                        target, target, values
                    ),
                    vec![self.failure(field, &one_of_message(&field.enum_values))],
                    "}",
                )]
            }
            Check::Elements { field, .. } => {
                self.needs.fmt = true;
                vec![CodeFragment::block(
                    format!("for i, v := range {} {{", target(recv, field)),
                    vec![CodeFragment::block(
                        "if err := v.Validate(); err != nil {",
                        vec![CodeFragment::line(
                            "return fmt.Errorf(\"element %d: %s\", i, err.Error())",
                        )],
                        "}",
                    )],
                    "}",
                )]
            }
        }
    }

    fn failure(&mut self, field: &Field, message: &str) -> CodeFragment {
        self.needs.runtime = true;
        CodeFragment::line(format!(
            "return {}.ValidationError{{Field: {}, Message: {}}}",
            self.runtime,
            Value::String(field.name.clone()),
            Value::String(message.to_string()),
        ))
    }
}

/// Receiver name: the lowercased first letter of the type.
fn receiver(type_name: &str) -> String {
    type_name
        .chars()
        .next()
        .map(|c| c.to_lowercase().collect())
        .unwrap_or_else(|| "x".to_string())
}

fn target(recv: &str, field: &Field) -> String {
    format!("{}.{}", recv, GO_NAMING.field_name(&field.name))
}
