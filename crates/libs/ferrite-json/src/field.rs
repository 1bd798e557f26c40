//! Parameter schema: the kinds a positional parameter may take and the
//! per-field descriptors a command registers.

use serde_json::Value;

use crate::error::{Error, ErrorKind};

/// Wire kind of a single positional parameter.
///
/// Structured kinds (`StringArray`, `AmountMap`, `Object`, `ObjectArray`)
/// cover the aggregate shapes commands actually use. Anything deeper is
/// validated by the command struct's own deserialization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamKind {
    Bool,
    /// Signed integer, any width the command struct accepts.
    Int,
    /// Unsigned integer.
    Uint,
    /// Floating point. Also accepts integral numbers.
    Float,
    String,
    /// Array of strings.
    StringArray,
    /// Object mapping address strings to numeric amounts.
    AmountMap,
    /// Arbitrary JSON object.
    Object,
    /// Array of JSON objects.
    ObjectArray,
    /// An optional parameter of the inner kind. Only valid at the top
    /// level of a descriptor; optionals do not nest.
    Optional(Box<ParamKind>),
}

impl ParamKind {
    /// Short label used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            ParamKind::Bool => "bool",
            ParamKind::Int => "int",
            ParamKind::Uint => "uint",
            ParamKind::Float => "float",
            ParamKind::String => "string",
            ParamKind::StringArray => "string array",
            ParamKind::AmountMap => "amount map",
            ParamKind::Object => "object",
            ParamKind::ObjectArray => "object array",
            ParamKind::Optional(inner) => inner.label(),
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, ParamKind::Optional(_))
    }

    /// The kind a value must satisfy, with optionality stripped.
    pub fn inner(&self) -> &ParamKind {
        match self {
            ParamKind::Optional(inner) => inner,
            other => other,
        }
    }

    /// Whether `value` already satisfies this kind without coercion.
    pub fn matches(&self, value: &Value) -> bool {
        match self.inner() {
            ParamKind::Bool => value.is_boolean(),
            ParamKind::Int => value.as_i64().is_some(),
            ParamKind::Uint => value.as_u64().is_some(),
            ParamKind::Float => value.is_number(),
            ParamKind::String => value.is_string(),
            ParamKind::StringArray => match value {
                Value::Array(items) => items.iter().all(Value::is_string),
                _ => false,
            },
            ParamKind::AmountMap => match value {
                Value::Object(entries) => entries.values().all(Value::is_number),
                _ => false,
            },
            ParamKind::Object => value.is_object(),
            ParamKind::ObjectArray => match value {
                Value::Array(items) => items.iter().all(Value::is_object),
                _ => false,
            },
            // Unreachable once descriptors are validated; optionals never nest.
            ParamKind::Optional(_) => false,
        }
    }
}

/// Schema entry for one positional parameter of a command.
#[derive(Clone, Debug)]
pub struct FieldDescriptor {
    /// Field name as it appears in the command struct's serialized form.
    pub name: &'static str,
    pub kind: ParamKind,
    /// Substituted when an optional parameter is absent.
    pub default: Option<Value>,
}

impl FieldDescriptor {
    /// A required parameter.
    pub fn required(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            default: None,
        }
    }

    /// An optional parameter with no default.
    pub fn optional(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind: ParamKind::Optional(Box::new(kind)),
            default: None,
        }
    }

    /// An optional parameter that takes `default` when absent.
    pub fn optional_defaulted(name: &'static str, kind: ParamKind, default: Value) -> Self {
        Self {
            name,
            kind: ParamKind::Optional(Box::new(kind)),
            default: Some(default),
        }
    }

    pub fn is_optional(&self) -> bool {
        self.kind.is_optional()
    }
}

/// Coerces a caller-supplied argument toward `kind`, for the lenient
/// constructor path.
///
/// Numbers are widened (int to float) but never narrowed; a float with a
/// fractional part never becomes an integer. Strings aimed at a structured
/// kind are parsed as embedded JSON text and the result is re-checked.
/// Anything else must already match.
pub fn coerce_arg(
    method: &str,
    field: &FieldDescriptor,
    index: usize,
    arg: &Value,
) -> Result<Value, Error> {
    if field.kind.matches(arg) {
        return Ok(arg.clone());
    }

    // JSON text fallback for aggregate parameters, mirroring how shell
    // clients pass arrays and maps as quoted strings.
    if let Value::String(text) = arg {
        let structured = matches!(
            field.kind.inner(),
            ParamKind::StringArray | ParamKind::AmountMap | ParamKind::Object | ParamKind::ObjectArray
        );
        if structured {
            if let Ok(parsed) = serde_json::from_str::<Value>(text) {
                if field.kind.matches(&parsed) {
                    return Ok(parsed);
                }
            }
        }
    }

    Err(Error::new(
        ErrorKind::InvalidType,
        format!(
            "method {}: parameter #{} ({}) must be a {}, got {}",
            method,
            index + 1,
            field.name,
            field.kind.label(),
            value_label(arg),
        ),
    ))
}

/// Human-readable JSON type name for error messages.
pub fn value_label(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
