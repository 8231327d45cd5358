//! Parsing the module listing of `go list -m -json`
//!
//! `go list -json` does not print a JSON array: it prints one JSON object
//! per module, back to back, separated only by newlines. The objects are
//! decoded one after the other from a streaming deserializer, so nothing
//! depends on how the objects are laid out between each other.

use crate::domain::Module;
use crate::error::{ExecError, ParseError};
use crate::exec::{self, CommandRunner};
use serde_json::{Deserializer, Value};
use std::path::Path;
use tracing::debug;

/// Program used to list the modules
pub const GO_PROGRAM: &str = "go";

/// Arguments listing every module of the build list with update and
/// replacement information
pub const LIST_ARGS: [&str; 5] = ["list", "-m", "-u", "-json", "all"];

/// Decode the raw output of `go list -m -json` into modules.
///
/// Modules are returned in the order they were listed. The decoding is all
/// or nothing: a single malformed object, or a top-level value that is not
/// an object, fails the whole parse. Empty (or whitespace-only) input decodes
/// to no modules.
pub fn parse_modules(raw: &str) -> Result<Vec<Module>, ParseError> {
    let mut modules = Vec::new();
    for (index, value) in Deserializer::from_str(raw).into_iter::<Value>().enumerate() {
        let object = match value? {
            Value::Object(object) => object,
            other => {
                return Err(ParseError::not_an_object(index, json_kind(&other)));
            }
        };
        modules.push(serde_json::from_value(Value::Object(object))?);
    }

    debug!(count = modules.len(), "parsed module listing");
    Ok(modules)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Run `go list -m -u -json all` in `dir` and return its raw output
pub fn list_modules_raw<R: CommandRunner + ?Sized>(
    runner: &R,
    dir: &Path,
) -> Result<String, ExecError> {
    exec::run(runner, GO_PROGRAM, &LIST_ARGS, dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::CommandOutput;
    use std::cell::RefCell;

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_modules("").unwrap().is_empty());
        assert!(parse_modules("\n  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_two_objects_in_order() {
        let modules = parse_modules("{\"Path\":\"a\"}\n{\"Path\":\"b\"}").unwrap();
        let paths: Vec<_> = modules.iter().map(|m| m.path.as_str()).collect();
        assert_eq!(paths, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_many_single_line_objects() {
        let raw = (0..25)
            .map(|i| format!("{{\"Path\":\"example.com/m{}\",\"Version\":\"v1.0.{}\"}}", i, i))
            .collect::<Vec<_>>()
            .join("\n");

        let modules = parse_modules(&raw).unwrap();
        assert_eq!(modules.len(), 25);
        for (i, module) in modules.iter().enumerate() {
            assert_eq!(module.path, format!("example.com/m{}", i));
            assert_eq!(module.version, format!("v1.0.{}", i));
        }
    }

    #[test]
    fn test_parse_multiline_objects() {
        let raw = r#"{
	"Path": "example.com/app",
	"Main": true,
	"Dir": "/src/app",
	"GoMod": "/src/app/go.mod"
}
{
	"Path": "golang.org/x/text",
	"Version": "v0.3.0",
	"Time": "2017-12-14T13:08:43Z",
	"Update": {
		"Path": "golang.org/x/text",
		"Version": "v0.3.2",
		"Time": "2019-04-25T21:42:06Z"
	},
	"Indirect": true
}"#;
        let modules = parse_modules(raw).unwrap();
        assert_eq!(modules.len(), 2);
        assert!(modules[0].main);
        assert_eq!(modules[1].update.as_ref().unwrap().version, "v0.3.2");
    }

    #[test]
    fn test_parse_brace_newline_brace_inside_string() {
        let raw = "{\"Path\":\"a\",\"Error\":{\"Err\":\"x}\\n{y\"}}\n{\"Path\":\"b\"}";
        let modules = parse_modules(raw).unwrap();
        assert_eq!(modules.len(), 2);
        assert_eq!(modules[0].error.as_ref().unwrap().err, "x}\n{y");
    }

    #[test]
    fn test_parse_malformed_input_fails_entirely() {
        let err = parse_modules("{\"Path\":\"a\"}\n{\"Path\":").unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));

        assert!(parse_modules("not json").is_err());
        assert!(parse_modules("{\"Path\": 12}").is_err());
    }

    #[test]
    fn test_parse_rejects_top_level_arrays() {
        let err = parse_modules("[]").unwrap_err();
        assert!(matches!(err, ParseError::NotAnObject { index: 0, kind: "array" }));

        let err = parse_modules("[\"example.com/x\", \"v1.0.0\"]").unwrap_err();
        assert!(matches!(err, ParseError::NotAnObject { index: 0, .. }));
    }

    #[test]
    fn test_parse_rejects_non_object_after_valid_module() {
        let err = parse_modules("{\"Path\":\"a\"}\n[1]").unwrap_err();
        assert!(matches!(err, ParseError::NotAnObject { index: 1, kind: "array" }));
        assert_eq!(
            err.to_string(),
            "invalid module JSON: value 1 is an array, not an object"
        );

        assert!(parse_modules("{\"Path\":\"a\"}\n\"b\"").is_err());
        assert!(parse_modules("null").is_err());
        assert!(parse_modules("42").is_err());
    }

    /// Mock runner recording the command it was asked to run
    struct RecordingRunner {
        calls: RefCell<Vec<(String, Vec<String>)>>,
        output: CommandOutput,
    }

    impl CommandRunner for RecordingRunner {
        fn exec(
            &self,
            program: &str,
            args: &[&str],
            _working_dir: &Path,
        ) -> Result<CommandOutput, ExecError> {
            self.calls.borrow_mut().push((
                program.to_string(),
                args.iter().map(|a| a.to_string()).collect(),
            ));
            Ok(self.output.clone())
        }
    }

    #[test]
    fn test_list_modules_raw_invokes_go_list() {
        let runner = RecordingRunner {
            calls: RefCell::new(Vec::new()),
            output: CommandOutput::success("{\"Path\":\"a\"}", ""),
        };

        let raw = list_modules_raw(&runner, Path::new(".")).unwrap();
        assert_eq!(raw, "{\"Path\":\"a\"}");

        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "go");
        assert_eq!(calls[0].1, vec!["list", "-m", "-u", "-json", "all"]);
    }

    #[test]
    fn test_list_modules_raw_reports_stderr() {
        let runner = RecordingRunner {
            calls: RefCell::new(Vec::new()),
            output: CommandOutput::failure(Some(1), "", "go: go.mod file not found"),
        };

        let err = list_modules_raw(&runner, Path::new(".")).unwrap_err();
        assert_eq!(err.to_string(), "go: go.mod file not found");
    }
}
