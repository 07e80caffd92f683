use crate::init;
use crate::rescalc;
use crate::stdout;

#[test]
fn test_jobs_from_nodes_and_hours() {
    let env = init();

    let output = rescalc!(env; "--N", "2", "--S", "10", "--R", "100", "--H", "50"; "jobs");

    assert_eq!(
        stdout(&output),
        "Jobs Q ≈ 250  (NH_eff=20.000 node-hours/job)\n\
         \n\
         # scontrol (optional):\n\
         scontrol create reservation \\\n  \
         Duration=50:00:00 \\\n  \
         PartitionName=reserved \\\n  \
         TRES=Nodes=100\n"
    );
}

#[test]
fn test_nodes_with_buffer() {
    let env = init();

    let output = rescalc!(
        env; "--N", "2", "--S", "10", "--b", "0.15", "--Q", "100", "--H", "50"; "nodes"
    );

    let out = stdout(&output);
    assert!(out.starts_with("Nodes R ≈ 46  (NH_eff=23.000 node-hours/job)\n"));
    assert!(out.contains("TRES=Nodes=46"));
}

#[test]
fn test_hours_from_jobs_and_nodes() {
    let env = init();

    let output = rescalc!(env; "--N", "1", "--S", "5", "--Q", "10", "--R", "2"; "hours");

    let out = stdout(&output);
    assert!(out.starts_with("Hours H ≈ 25.00  (NH_eff=5.000 node-hours/job)\n"));
    assert!(out.contains("Duration=25:00:00"));
}

#[test]
fn test_full_reservation() {
    let env = init();

    let output = rescalc!(
        env;
        "--N", "1", "--S", "1.3", "--Q", "5", "--R", "3",
        "--start", "2025-09-30T09:00:00",
        "--partition", "compute",
        "--users", "alice,bob",
        "--accounts", "research";
        "full reservation"
    );

    assert_eq!(
        stdout(&output),
        "Hours H ≈ 2.17  (NH_eff=1.300 node-hours/job)\n\
         \n\
         # scontrol (optional):\n\
         scontrol create reservation \\\n  \
         StartTime=2025-09-30T09:00:00 \\\n  \
         Duration=02:10:00 \\\n  \
         PartitionName=compute \\\n  \
         TRES=Nodes=3 \\\n  \
         Users=alice,bob \\\n  \
         Accounts=research\n"
    );
}

#[test]
fn test_empty_partition() {
    let env = init();

    let output = rescalc!(
        env; "--N", "2", "--S", "10", "--R", "100", "--H", "50", "--partition", ""; "no partition"
    );

    assert_eq!(
        stdout(&output),
        "Jobs Q ≈ 250  (NH_eff=20.000 node-hours/job)\n\
         \n\
         # scontrol (optional):\n\
         scontrol create reservation \\\n  \
         Duration=50:00:00 \\\n  \
         TRES=Nodes=100\n"
    );
}

#[test]
fn test_logs_stay_off_stdout() {
    let env = init();

    let output = rescalc!(env; "-vv", "--N", "2", "--S", "10", "--R", "100", "--H", "50"; "verbose");

    assert!(stdout(&output).starts_with("Jobs Q ≈ 250"));
    assert!(!stdout(&output).contains("debug"));
}
