//! The generic constructor: builds a typed command from a method name and
//! loosely-typed positional arguments.

use serde_json::{Map, Value};

use crate::command::RpcCommand;
use crate::error::{Error, ErrorKind};
use crate::field::coerce_arg;
use crate::registry::Registry;

impl Registry {
    /// Builds the registered command for `method` from positional `args`.
    ///
    /// Arguments are coerced leniently toward the registered schema (see
    /// [`crate::field::coerce_arg`]); absent trailing optionals take their
    /// registered default, or stay unset when no default exists.
    pub fn new_command(&self, method: &str, args: &[Value]) -> Result<Box<dyn RpcCommand>, Error> {
        let entry = self.entry(method)?;
        let descriptor = &entry.descriptor;

        let min = descriptor.num_required();
        let max = descriptor.fields.len();
        if args.len() < min || args.len() > max {
            return Err(Error::new(
                ErrorKind::NumParams,
                format!(
                    "method {}: wrong number of params (got {}, want {}-{})",
                    method,
                    args.len(),
                    min,
                    max
                ),
            ));
        }

        let mut fields = Map::with_capacity(max);
        for (index, field) in descriptor.fields.iter().enumerate() {
            let value = match args.get(index) {
                Some(arg) => coerce_arg(method, field, index, arg)?,
                None => field.default.clone().unwrap_or(Value::Null),
            };
            fields.insert(field.name.to_owned(), value);
        }

        log::trace!("construct: built {} from {} args", method, args.len());
        (entry.decode)(fields)
    }
}
