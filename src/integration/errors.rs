use crate::init;
use crate::rescalc;
use crate::stderr;
use crate::stdout;

const COUNT_ERROR: &str = "Provide exactly TWO of --Q --R --H.";

#[test]
fn test_no_capacities() {
    let env = init();

    let output = rescalc!(env; "--N", "2", "--S", "10");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(COUNT_ERROR));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_one_capacity() {
    let env = init();

    let output = rescalc!(env; "--N", "2", "--S", "10", "--Q", "100");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(COUNT_ERROR));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_three_capacities() {
    let env = init();

    let output = rescalc!(env; "--N", "2", "--S", "10", "--Q", "100", "--R", "10", "--H", "5");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(COUNT_ERROR));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_negative_buffer() {
    let env = init();

    let output = rescalc!(env; "--N", "2", "--S", "10", "--b", "-0.5", "--Q", "10", "--R", "2");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("--b must be a non-negative fraction"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_zero_hours() {
    let env = init();

    let output = rescalc!(env; "--N", "2", "--S", "10", "--Q", "10", "--H", "0");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("--H must be a positive number"));
}

#[test]
fn test_bad_start() {
    let env = init();

    let output = rescalc!(env; "--N", "1", "--S", "1", "--Q", "1", "--R", "1", "--start", "soon");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("--start is not a valid start time"));
}

#[test]
fn test_overflowing_result() {
    let env = init();

    let output = rescalc!(env; "--N", "1", "--S", "1", "--R", "1e300", "--H", "1e300");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("--Q is out of range"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_underflowing_job_shape() {
    let env = init();

    let output = rescalc!(env; "--N", "1e-300", "--S", "1e-300", "--Q", "1", "--R", "1");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("node-hours per job are out of range"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_relative_start() {
    let env = init();

    let output = rescalc!(env; "--N", "1", "--S", "1", "--Q", "1", "--R", "1", "--start", "now+2days");

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("StartTime=now+2days"));
}

#[test]
fn test_missing_shape_is_a_usage_error() {
    let env = init();

    let output = rescalc!(env; "--S", "10", "--Q", "1", "--R", "1");

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_malformed_number_is_a_usage_error() {
    let env = init();

    let output = rescalc!(env; "--N", "two", "--S", "10", "--Q", "1", "--R", "1");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_too_verbose() {
    let env = init();

    let output = rescalc!(env; "-vvv", "--N", "1", "--S", "1", "--Q", "1", "--R", "1");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Only two levels of verbosity supported"));
}
