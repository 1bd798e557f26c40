//! Typed JSON-RPC command marshaling for the ferrite daemon.
//!
//! This crate is the wire boundary between the daemon and its wallet/CLI
//! clients. Requests travel as positional JSON-RPC 1.0 parameter arrays;
//! in process they are plain typed structs. The pieces:
//!
//! - **[`Registry`]** — method names mapped to wire schemas
//!   ([`CommandDescriptor`]) and to the typed command structs registered
//!   for them
//! - **[`Registry::new_command`]** — lenient constructor from a method
//!   name plus loosely-typed arguments
//! - **[`Registry::marshal_command`]** — typed command out to a
//!   [`Request`], omitting the maximal trailing run of default-valued
//!   optional parameters
//! - **[`Registry::unmarshal_request`]** — strict wire request back into
//!   the registered struct, filling registered defaults for omitted
//!   trailing optionals
//! - **[`cmds`]** — the built-in chain, wallet, and websocket command
//!   surface
//!
//! A populated registry is obtained from [`Registry::with_builtin_commands`]
//! or built empty and extended via [`Registry::register`]. Registration
//! takes `&mut self`; everything else borrows shared, so a built registry
//! can serve any number of request handlers.
//!
//! ```
//! use serde_json::json;
//!
//! let registry = ferrite_json::Registry::with_builtin_commands()?;
//! let cmd = registry.new_command("getblockhash", &[json!(4000)])?;
//! let wire = registry.marshal_request("1.0", json!(1), cmd.as_ref())?;
//! assert_eq!(
//!     std::str::from_utf8(&wire).unwrap(),
//!     r#"{"jsonrpc":"1.0","method":"getblockhash","params":[4000],"id":1}"#
//! );
//! # Ok::<(), ferrite_json::Error>(())
//! ```

pub mod cmds;
pub mod command;
pub mod envelope;
pub mod error;
pub mod field;
pub mod registry;

mod construct;
mod marshal;
mod unmarshal;

pub use command::RpcCommand;
pub use envelope::{Request, Response, RpcError};
pub use error::{describe_code, Error, ErrorKind};
pub use field::{FieldDescriptor, ParamKind};
pub use registry::{CommandDescriptor, Registry, UsageFlags};
