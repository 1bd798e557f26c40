use std::fmt::Debug;

use serde_json::{json, Value};

use ferrite_json::{Registry, Request, RpcCommand};

/// Drives one command through all three wire paths and checks the fixture:
/// the typed value marshals to `wire`, the lenient constructor reproduces
/// the same bytes from `args`, and `wire` decodes back to `expected` with
/// registered defaults applied.
pub fn assert_cmd<C>(registry: &Registry, args: &[Value], static_cmd: C, wire: &str, expected: C)
where
    C: RpcCommand + Clone + PartialEq + Debug,
{
    let method = static_cmd.method();

    let bytes = registry
        .marshal_request("1.0", json!(1), &static_cmd)
        .unwrap_or_else(|err| panic!("{method}: marshal static command: {err}"));
    assert_eq!(
        std::str::from_utf8(&bytes).expect("utf8"),
        wire,
        "{method}: static marshal"
    );

    let constructed = registry
        .new_command(method, args)
        .unwrap_or_else(|err| panic!("{method}: construct: {err}"));
    let bytes = registry
        .marshal_request("1.0", json!(1), constructed.as_ref())
        .unwrap_or_else(|err| panic!("{method}: marshal constructed command: {err}"));
    assert_eq!(
        std::str::from_utf8(&bytes).expect("utf8"),
        wire,
        "{method}: constructed marshal"
    );

    let request: Request =
        serde_json::from_str(wire).unwrap_or_else(|err| panic!("{method}: parse wire: {err}"));
    let decoded = registry
        .unmarshal_request(&request)
        .unwrap_or_else(|err| panic!("{method}: unmarshal: {err}"));
    let decoded = decoded
        .downcast_ref::<C>()
        .unwrap_or_else(|| panic!("{method}: decoded command has the wrong type"));
    assert_eq!(decoded, &expected, "{method}: unmarshal");
}

/// Fixture shorthand for commands that take no parameters.
#[macro_export]
macro_rules! check_no_params {
    ($registry:expr, $ty:ident, $method:literal) => {
        $crate::common::assert_cmd(
            &$registry,
            &[],
            $ty {},
            concat!(
                r#"{"jsonrpc":"1.0","method":""#,
                $method,
                r#"","params":[],"id":1}"#
            ),
            $ty {},
        );
    };
}
