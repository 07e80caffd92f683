use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;

use super::*;

#[test]
fn capacity_count_message() {
    for provided in [0, 1, 3] {
        assert_eq!(
            InvalidInputError::CapacityCount { provided }.to_string(),
            "Provide exactly TWO of --Q --R --H."
        );
    }
}

#[test]
fn not_positive_names_the_flag() {
    let err = InvalidInputError::NotPositive {
        flag: "--S",
        value: -2.0,
    };

    assert_eq!(err.to_string(), "--S must be a positive number, got -2");
}

#[test]
fn range_errors_name_the_quantity() {
    let err = InvalidInputError::OutOfRange {
        flag: "--Q",
        value: f64::INFINITY,
    };

    assert_eq!(err.to_string(), "--Q is out of range, got inf");
    assert_eq!(
        InvalidInputError::NodeHours(0.0).to_string(),
        "the node-hours per job are out of range, got 0"
    );
}

#[test]
fn ctx_keeps_root_cause() {
    let res: Result<()> = Err(anyhow!(InvalidInputError::NegativeBuffer(-0.5)))
        .with_context(ctx!("Could not validate {}", "the input"; "Use a buffer of at least {}", 0));

    let err = res.unwrap_err();

    assert!(err.root_cause().is::<InvalidInputError>());
    assert!(format!("{err}").contains("Could not validate the input"));
    assert!(format!("{err}").contains("Use a buffer of at least 0"));
}

#[test]
fn ctx_empty_help_is_omitted() {
    let shown = format!("{}", Ctx("context", ""));

    assert!(shown.contains("context"));
    assert!(!shown.contains("help:"));
}
