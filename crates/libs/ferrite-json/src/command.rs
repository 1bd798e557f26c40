//! The capability trait every registered command type implements.

use std::any::Any;
use std::fmt;

/// A typed command that can travel as a positional JSON-RPC request.
///
/// Implementations are plain data structs; the registry holds the wire
/// schema, so the trait only has to name the method and expose the value
/// for downcasting. Use [`rpc_command!`](crate::rpc_command) rather than
/// implementing this by hand.
pub trait RpcCommand: Any + fmt::Debug + Send + Sync {
    /// The wire method name this command marshals to.
    fn method(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl dyn RpcCommand {
    /// Borrows the concrete command if it is a `C`.
    pub fn downcast_ref<C: RpcCommand>(&self) -> Option<&C> {
        self.as_any().downcast_ref::<C>()
    }

    /// Recovers the concrete command, or gives the box back untyped.
    pub fn downcast<C: RpcCommand>(self: Box<Self>) -> Option<Box<C>> {
        self.into_any().downcast::<C>().ok()
    }
}

/// Implements [`RpcCommand`] for a command struct with a fixed method name.
///
/// ```
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// struct PingCmd {}
///
/// ferrite_json::rpc_command!(PingCmd, "ping");
/// ```
#[macro_export]
macro_rules! rpc_command {
    ($ty:ty, $method:literal) => {
        impl $crate::RpcCommand for $ty {
            fn method(&self) -> &'static str {
                $method
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn ::std::any::Any> {
                self
            }
        }
    };
}
