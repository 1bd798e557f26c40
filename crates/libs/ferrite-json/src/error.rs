use std::borrow::Cow;
use std::fmt;

/// Failure categories for command registration and wire conversion.
///
/// The first seven kinds can only surface while the registry is being
/// populated and indicate a configuration defect the host should treat as
/// fatal at startup. The remaining kinds are per-request and always
/// recoverable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorKind {
    /// A method name or command shape was registered twice.
    DuplicateMethod = 1,
    /// Usage flags carried bits outside the known set.
    InvalidUsageFlags,
    /// A value did not match the declared kind of its parameter.
    InvalidType,
    /// A field descriptor used a kind the wire cannot carry.
    UnsupportedFieldType,
    /// A required field was declared after an optional one.
    NonOptionalField,
    /// A default value was supplied for a required field.
    NonOptionalDefault,
    /// A default value did not match its field's declared kind.
    MismatchedDefault,
    /// No descriptor exists for the requested method or shape.
    UnregisteredMethod,
    /// The parameter count fell outside the command's accepted range.
    NumParams,
    /// A non-trailing optional parameter was absent with no default,
    /// which a positional array cannot represent.
    ParamPosition,
}

impl ErrorKind {
    /// Every assigned kind, in code order.
    pub const ALL: [ErrorKind; 10] = [
        ErrorKind::DuplicateMethod,
        ErrorKind::InvalidUsageFlags,
        ErrorKind::InvalidType,
        ErrorKind::UnsupportedFieldType,
        ErrorKind::NonOptionalField,
        ErrorKind::NonOptionalDefault,
        ErrorKind::MismatchedDefault,
        ErrorKind::UnregisteredMethod,
        ErrorKind::NumParams,
        ErrorKind::ParamPosition,
    ];

    /// Stable numeric code for this kind.
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Looks up the kind assigned to `code`, if any.
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.code() == code)
    }

    /// Stable display name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::DuplicateMethod => "ErrDuplicateMethod",
            ErrorKind::InvalidUsageFlags => "ErrInvalidUsageFlags",
            ErrorKind::InvalidType => "ErrInvalidType",
            ErrorKind::UnsupportedFieldType => "ErrUnsupportedFieldType",
            ErrorKind::NonOptionalField => "ErrNonOptionalField",
            ErrorKind::NonOptionalDefault => "ErrNonOptionalDefault",
            ErrorKind::MismatchedDefault => "ErrMismatchedDefault",
            ErrorKind::UnregisteredMethod => "ErrUnregisteredMethod",
            ErrorKind::NumParams => "ErrNumParams",
            ErrorKind::ParamPosition => "ErrParamPosition",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Renders a raw error code: the stable name when assigned, otherwise
/// `Unknown ErrorCode (N)`.
pub fn describe_code(code: u16) -> Cow<'static, str> {
    match ErrorKind::from_code(code) {
        Some(kind) => Cow::Borrowed(kind.name()),
        None => Cow::Owned(format!("Unknown ErrorCode ({code})")),
    }
}

/// Engine error: a kind plus a human-readable message.
///
/// Display shows the message alone; the kind is for programmatic matching.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Converts into the response-envelope error form.
    pub fn to_rpc_error(&self) -> crate::envelope::RpcError {
        crate::envelope::RpcError {
            code: i32::from(self.kind.code()),
            message: self.message.clone(),
        }
    }
}
