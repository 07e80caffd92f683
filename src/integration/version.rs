use clap::crate_version;

use crate::init;
use crate::rescalc;
use crate::stdout;

#[test]
fn test_rescalc_version() {
    let env = init();

    let output = rescalc!(env; "--version"; "version");

    assert!(stdout(&output).contains(crate_version!()));
}
