//! The unmarshaler: wire request back into the registered command struct.

use serde_json::{Map, Value};

use crate::command::RpcCommand;
use crate::envelope::Request;
use crate::error::{Error, ErrorKind};
use crate::field::value_label;
use crate::registry::Registry;

impl Registry {
    /// Recovers the typed command a wire `request` carries.
    ///
    /// Unlike the generic constructor this path is strict: every supplied
    /// parameter must already have the registered kind, with no text
    /// parsing or numeric bending. Omitted trailing optionals take their
    /// registered default.
    pub fn unmarshal_request(&self, request: &Request) -> Result<Box<dyn RpcCommand>, Error> {
        let method = request.method.as_str();
        let entry = self.entry(method)?;
        let descriptor = &entry.descriptor;
        let params = &request.params;

        let min = descriptor.num_required();
        let max = descriptor.fields.len();
        if params.len() < min || params.len() > max {
            return Err(Error::new(
                ErrorKind::NumParams,
                format!(
                    "method {}: wrong number of params (got {}, want {}-{})",
                    method,
                    params.len(),
                    min,
                    max
                ),
            ));
        }

        let mut fields = Map::with_capacity(max);
        for (index, field) in descriptor.fields.iter().enumerate() {
            let value = match params.get(index) {
                Some(param) => {
                    // A null in a supplied slot is only valid for optionals.
                    if param.is_null() && field.is_optional() {
                        Value::Null
                    } else if field.kind.matches(param) {
                        param.clone()
                    } else {
                        return Err(Error::new(
                            ErrorKind::InvalidType,
                            format!(
                                "method {}: parameter #{} ({}) must be a {}, got {}",
                                method,
                                index + 1,
                                field.name,
                                field.kind.label(),
                                value_label(param),
                            ),
                        ));
                    }
                }
                None => field.default.clone().unwrap_or(Value::Null),
            };
            fields.insert(field.name.to_owned(), value);
        }

        log::trace!("unmarshal: {} with {} params", method, params.len());
        (entry.decode)(fields)
    }
}
