//! The command registry: method names mapped to wire schemas and to the
//! typed encode/decode bridges for their command structs.

use std::any::TypeId;
use std::collections::HashMap;
use std::ops::BitOr;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::command::RpcCommand;
use crate::error::{Error, ErrorKind};
use crate::field::{FieldDescriptor, ParamKind};

/// Where a command may be issued from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UsageFlags(pub u8);

impl UsageFlags {
    /// Plain chain-server command.
    pub const NONE: UsageFlags = UsageFlags(0);
    /// Handled by the wallet server.
    pub const WALLET: UsageFlags = UsageFlags(1);
    /// Only valid over a websocket transport.
    pub const WEBSOCKET: UsageFlags = UsageFlags(1 << 1);
    /// Server-to-client notification; never carries a response.
    pub const NOTIFICATION: UsageFlags = UsageFlags(1 << 2);

    const HIGHEST: u8 = UsageFlags::NOTIFICATION.0;

    pub fn is_valid(self) -> bool {
        self.0 < Self::HIGHEST << 1
    }

    pub fn contains(self, other: UsageFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for UsageFlags {
    type Output = UsageFlags;

    fn bitor(self, rhs: UsageFlags) -> UsageFlags {
        UsageFlags(self.0 | rhs.0)
    }
}

/// Wire schema for one method: its name, usage flags, and positional
/// parameter layout.
#[derive(Clone, Debug)]
pub struct CommandDescriptor {
    pub method: &'static str,
    pub flags: UsageFlags,
    pub fields: Vec<FieldDescriptor>,
}

impl CommandDescriptor {
    pub fn new(method: &'static str, flags: UsageFlags) -> Self {
        Self {
            method,
            flags,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Number of leading required parameters.
    pub fn num_required(&self) -> usize {
        self.fields.iter().take_while(|f| !f.is_optional()).count()
    }
}

pub(crate) type DecodeFn =
    Box<dyn Fn(Map<String, Value>) -> Result<Box<dyn RpcCommand>, Error> + Send + Sync>;
pub(crate) type EncodeFn =
    Box<dyn Fn(&dyn RpcCommand) -> Result<Map<String, Value>, Error> + Send + Sync>;

pub(crate) struct RegisteredCommand {
    pub(crate) descriptor: CommandDescriptor,
    pub(crate) shape: TypeId,
    pub(crate) decode: DecodeFn,
    pub(crate) encode: EncodeFn,
}

/// Registry of every command the host knows how to marshal.
///
/// Registration happens once at startup against `&mut self`; all wire
/// conversion borrows the registry shared, so a populated registry can be
/// handed to any number of request handlers.
#[derive(Default)]
pub struct Registry {
    methods: HashMap<&'static str, RegisteredCommand>,
    shapes: HashMap<TypeId, &'static str>,
}

impl Registry {
    /// An empty registry with no methods.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with the full built-in command set.
    pub fn with_builtin_commands() -> Result<Self, Error> {
        let mut registry = Self::new();
        crate::cmds::register_all(&mut registry)?;
        Ok(registry)
    }

    /// Registers the command type `C` under `descriptor`.
    ///
    /// The descriptor is validated in full before anything is stored, so a
    /// failed registration leaves the registry unchanged.
    pub fn register<C>(&mut self, descriptor: CommandDescriptor) -> Result<(), Error>
    where
        C: RpcCommand + Serialize + DeserializeOwned + 'static,
    {
        let method = descriptor.method;
        if !descriptor.flags.is_valid() {
            return Err(Error::new(
                ErrorKind::InvalidUsageFlags,
                format!("method {}: unknown usage flag bits {:#04x}", method, descriptor.flags.0),
            ));
        }
        if self.methods.contains_key(method) {
            return Err(Error::new(
                ErrorKind::DuplicateMethod,
                format!("method {method} is already registered"),
            ));
        }
        let shape = TypeId::of::<C>();
        if let Some(existing) = self.shapes.get(&shape) {
            return Err(Error::new(
                ErrorKind::DuplicateMethod,
                format!("command type for {method} is already registered as {existing}"),
            ));
        }
        validate_fields(&descriptor)?;

        let decode: DecodeFn = Box::new(|fields| {
            let cmd: C = serde_json::from_value(Value::Object(fields)).map_err(|err| {
                Error::new(ErrorKind::InvalidType, format!("decoding command: {err}"))
            })?;
            Ok(Box::new(cmd))
        });
        let encode: EncodeFn = Box::new(move |cmd| {
            let concrete = cmd.downcast_ref::<C>().ok_or_else(|| {
                Error::new(
                    ErrorKind::InvalidType,
                    format!("command value is not the type registered for {method}"),
                )
            })?;
            match serde_json::to_value(concrete) {
                Ok(Value::Object(fields)) => Ok(fields),
                Ok(other) => Err(Error::new(
                    ErrorKind::InvalidType,
                    format!(
                        "method {}: command serialized to {}, expected an object",
                        method,
                        crate::field::value_label(&other)
                    ),
                )),
                Err(err) => Err(Error::new(
                    ErrorKind::InvalidType,
                    format!("encoding command: {err}"),
                )),
            }
        });

        log::debug!("registry: registered method {method}");
        self.shapes.insert(shape, method);
        self.methods.insert(
            method,
            RegisteredCommand {
                descriptor,
                shape,
                decode,
                encode,
            },
        );
        Ok(())
    }

    /// The wire schema registered for `method`, if any.
    pub fn descriptor(&self, method: &str) -> Option<&CommandDescriptor> {
        self.methods.get(method).map(|entry| &entry.descriptor)
    }

    /// All registered method names, sorted.
    pub fn method_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.methods.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub(crate) fn entry(&self, method: &str) -> Result<&RegisteredCommand, Error> {
        self.methods.get(method).ok_or_else(|| {
            Error::new(
                ErrorKind::UnregisteredMethod,
                format!("method {method} is not registered"),
            )
        })
    }

    pub(crate) fn entry_for(&self, cmd: &dyn RpcCommand) -> Result<&RegisteredCommand, Error> {
        let method = cmd.method();
        let entry = self.entry(method)?;
        if entry.shape != cmd.as_any().type_id() {
            return Err(Error::new(
                ErrorKind::UnregisteredMethod,
                format!("command value is not the type registered for {method}"),
            ));
        }
        Ok(entry)
    }
}

fn validate_fields(descriptor: &CommandDescriptor) -> Result<(), Error> {
    let method = descriptor.method;
    let mut seen_optional = false;
    for field in &descriptor.fields {
        if let ParamKind::Optional(inner) = &field.kind {
            if inner.is_optional() {
                return Err(Error::new(
                    ErrorKind::UnsupportedFieldType,
                    format!("method {}: field {} nests optional kinds", method, field.name),
                ));
            }
            seen_optional = true;
        } else {
            if seen_optional {
                return Err(Error::new(
                    ErrorKind::NonOptionalField,
                    format!(
                        "method {}: required field {} follows an optional field",
                        method, field.name
                    ),
                ));
            }
            if field.default.is_some() {
                return Err(Error::new(
                    ErrorKind::NonOptionalDefault,
                    format!(
                        "method {}: required field {} cannot carry a default",
                        method, field.name
                    ),
                ));
            }
        }
        if let Some(default) = &field.default {
            if !field.kind.matches(default) {
                return Err(Error::new(
                    ErrorKind::MismatchedDefault,
                    format!(
                        "method {}: default for field {} is not a {}",
                        method,
                        field.name,
                        field.kind.label()
                    ),
                ));
            }
        }
    }
    Ok(())
}
