//! The marshaler: typed command plus envelope data out to the wire form.

use serde_json::Value;

use crate::command::RpcCommand;
use crate::envelope::{check_id, Request};
use crate::error::{Error, ErrorKind};
use crate::registry::Registry;

impl Registry {
    /// Converts `cmd` into a wire request under the given protocol version
    /// and request id.
    ///
    /// The daemon's own wire traffic is JSON-RPC `"1.0"`; `"2.0"` is also
    /// accepted for clients that speak it. Anything else is rejected with
    /// [`ErrorKind::InvalidType`].
    ///
    /// The emitted parameter list is minimal: the longest trailing run of
    /// optional parameters that are unset or equal to their registered
    /// default is omitted. An unset optional that cannot be omitted (a set
    /// parameter follows it) takes its default; with no default to fill the
    /// slot the command is unrepresentable as a positional array and the
    /// call fails with [`ErrorKind::ParamPosition`].
    pub fn marshal_command(
        &self,
        jsonrpc: &str,
        id: Value,
        cmd: &dyn RpcCommand,
    ) -> Result<Request, Error> {
        if jsonrpc != "1.0" && jsonrpc != "2.0" {
            return Err(Error::new(
                ErrorKind::InvalidType,
                format!("unsupported protocol version {jsonrpc:?}"),
            ));
        }
        check_id(&id)?;

        let entry = self.entry_for(cmd)?;
        let descriptor = &entry.descriptor;
        let mut fields = (entry.encode)(cmd)?;

        let method = descriptor.method;
        let mut values: Vec<Value> = descriptor
            .fields
            .iter()
            .map(|field| fields.remove(field.name).unwrap_or(Value::Null))
            .collect();

        // Drop the longest trailing run of omittable optionals.
        while let Some(last) = values.last() {
            let field = &descriptor.fields[values.len() - 1];
            if !field.is_optional() {
                break;
            }
            let omittable = last.is_null() || field.default.as_ref() == Some(last);
            if !omittable {
                break;
            }
            values.pop();
        }

        // Whatever survives must fill every slot.
        for (index, value) in values.iter_mut().enumerate() {
            if !value.is_null() {
                continue;
            }
            let field = &descriptor.fields[index];
            if !field.is_optional() {
                return Err(Error::new(
                    ErrorKind::InvalidType,
                    format!(
                        "method {}: required parameter #{} ({}) is unset",
                        method,
                        index + 1,
                        field.name
                    ),
                ));
            }
            match &field.default {
                Some(default) => *value = default.clone(),
                None => {
                    return Err(Error::new(
                        ErrorKind::ParamPosition,
                        format!(
                            "method {}: optional parameter #{} ({}) is unset with no \
                             default but a later parameter is set",
                            method,
                            index + 1,
                            field.name
                        ),
                    ));
                }
            }
        }

        log::trace!("marshal: {} with {} params", method, values.len());
        Ok(Request {
            jsonrpc: jsonrpc.to_owned(),
            method: method.to_owned(),
            params: values,
            id,
        })
    }

    /// [`marshal_command`](Self::marshal_command), serialized to bytes.
    pub fn marshal_request(
        &self,
        jsonrpc: &str,
        id: Value,
        cmd: &dyn RpcCommand,
    ) -> Result<Vec<u8>, Error> {
        let request = self.marshal_command(jsonrpc, id, cmd)?;
        serde_json::to_vec(&request)
            .map_err(|err| Error::new(ErrorKind::InvalidType, format!("encoding request: {err}")))
    }
}
