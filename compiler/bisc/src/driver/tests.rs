use super::*;
use bis_eval::LinkError;
use bis_value::{index_out_of_bounds, not_implemented, BacktraceFrame, EvalBacktrace};
use pretty_assertions::assert_eq;

#[test]
fn contract_fault_renders_message_and_backtrace() {
    let fault = not_implemented("show").with_backtrace(EvalBacktrace::new(vec![
        BacktraceFrame {
            name: "main".to_string(),
        },
        BacktraceFrame {
            name: "show".to_string(),
        },
    ]));
    assert_eq!(
        render_fault(&fault),
        "error: show is not implemented\ncall backtrace:\n  0: main\n  1: show\n"
    );
}

#[test]
fn fault_without_backtrace_is_one_line() {
    assert_eq!(
        render_fault(&not_implemented("show")),
        "error: show is not implemented\n"
    );
}

fn report_captured(err: &RunError) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut diag = Vec::new();
    let code = report_to(err, &mut out, &mut diag);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&diag).into_owned(),
    )
}

#[test]
fn fatal_fault_goes_to_stdout() {
    let (code, out, diag) = report_captured(&RunError::Fault(index_out_of_bounds(5, 2)));
    assert_eq!(code, EXIT_FATAL);
    assert_eq!(out, "out-of-bounds index; index 5 in array of length 2\n");
    assert_eq!(diag, "");
}

#[test]
fn contract_fault_goes_to_stderr() {
    let (code, out, diag) = report_captured(&RunError::Fault(not_implemented("show")));
    assert_eq!(code, EXIT_FAULT);
    assert_eq!(out, "");
    assert_eq!(diag, "error: show is not implemented\n");
}

#[test]
fn link_error_goes_to_stderr() {
    let (code, out, diag) = report_captured(&RunError::Link(LinkError::MissingEntry {
        name: "main".to_string(),
    }));
    assert_eq!(code, EXIT_LINK);
    assert_eq!(out, "");
    assert_eq!(diag, "error: entry point 'main' is not bound\n");
}
