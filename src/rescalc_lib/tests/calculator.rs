use super::*;
use crate::request::Capacities;
use crate::request::JobShape;
use crate::request::ReservationMetadata;

fn request(n: f64, s: f64, b: f64, capacities: Capacities) -> ReservationRequest {
    ReservationRequest::new(
        JobShape {
            nodes_per_job: n,
            hours_per_job: s,
            buffer_fraction: b,
        },
        capacities,
        ReservationMetadata::default(),
    )
    .unwrap()
}

#[test]
fn jobs_from_nodes_and_hours() {
    let solution = solve(&request(
        2.0,
        10.0,
        0.0,
        Capacities {
            jobs: None,
            nodes: Some(100.0),
            hours: Some(50.0),
        },
    ))
    .unwrap();

    assert_eq!(solution.missing, Capacity::Jobs);
    assert_eq!(solution.effective_node_hours, 20.0);
    assert_eq!(solution.jobs, 250.0);
    assert_eq!(solution.value(), 250.0);
    assert_eq!(solution.nodes, 100.0);
    assert_eq!(solution.hours, 50.0);
}

#[test]
fn nodes_from_jobs_and_hours_with_buffer() {
    let solution = solve(&request(
        2.0,
        10.0,
        0.15,
        Capacities {
            jobs: Some(100.0),
            nodes: None,
            hours: Some(50.0),
        },
    ))
    .unwrap();

    assert_eq!(solution.missing, Capacity::Nodes);
    assert!((solution.effective_node_hours - 23.0).abs() < 1e-9);
    assert_eq!(solution.nodes, 46.0);
    assert_eq!(solution.get(Capacity::Jobs), 100.0);
}

#[test]
fn hours_from_jobs_and_nodes() {
    let solution = solve(&request(
        1.0,
        5.0,
        0.0,
        Capacities {
            jobs: Some(10.0),
            nodes: Some(2.0),
            hours: None,
        },
    ))
    .unwrap();

    assert_eq!(solution.missing, Capacity::Hours);
    assert_eq!(solution.hours, 25.0);
    assert_eq!(solution.get(Capacity::Nodes), 2.0);
}

#[test]
fn jobs_never_overcommit() {
    let nh_values = [0.7, 1.0, 3.3, 20.0, 23.0, 117.25];
    let nodes_values = [1.0, 7.0, 64.0, 1000.0];
    let hours_values = [0.5, 1.0, 13.7, 168.0];

    for nh in nh_values {
        for nodes in nodes_values {
            for hours in hours_values {
                let jobs = jobs_for(nodes, hours, nh);

                assert_eq!(jobs, jobs.trunc());
                assert!(jobs * nh <= nodes * hours + 1e-9);
                assert!(nodes * hours < (jobs + 1.0) * nh);
            }
        }
    }
}

#[test]
fn nodes_always_cover_jobs() {
    let nh_values = [0.7, 1.0, 3.3, 20.0, 23.0, 117.25];
    let jobs_values = [1.0, 3.0, 100.0, 2500.0];
    let hours_values = [0.5, 1.0, 13.7, 168.0];

    for nh in nh_values {
        for jobs in jobs_values {
            for hours in hours_values {
                let nodes = nodes_for(jobs, hours, nh);

                assert_eq!(nodes, nodes.trunc());
                assert!((nodes - 1.0) * hours < jobs * nh);
                assert!(jobs * nh <= nodes * hours + 1e-9);
            }
        }
    }
}

#[test]
fn hours_are_exact() {
    for (jobs, nodes, nh) in [(10.0, 2.0, 5.0), (7.0, 3.0, 2.5), (1.0, 64.0, 0.25)] {
        let hours = hours_for(jobs, nodes, nh);

        assert!((hours * nodes - jobs * nh).abs() < 1e-9);
    }

    assert!((hours_for(7.0, 3.0, 2.5) - 35.0 / 6.0).abs() < 1e-12);
}

#[test]
fn buffer_only_inflates() {
    let capacities = Capacities {
        jobs: None,
        nodes: Some(10.0),
        hours: Some(10.0),
    };

    let plain = solve(&request(1.0, 1.0, 0.0, capacities)).unwrap();
    let buffered = solve(&request(1.0, 1.0, 0.25, capacities)).unwrap();

    assert_eq!(plain.jobs, 100.0);
    assert_eq!(buffered.jobs, 80.0);
    assert_eq!(buffered.effective_node_hours, 1.25);
}

#[test]
fn overflowing_jobs_are_rejected() {
    let res = solve(&request(
        1.0,
        1.0,
        0.0,
        Capacities {
            jobs: None,
            nodes: Some(1e300),
            hours: Some(1e300),
        },
    ));

    assert_eq!(
        res,
        Err(InvalidInputError::OutOfRange {
            flag: "--Q",
            value: f64::INFINITY
        })
    );
}

#[test]
fn counts_beyond_whole_numbers_are_rejected() {
    let res = solve(&request(
        1.0,
        1.0,
        0.0,
        Capacities {
            jobs: Some(1e17),
            nodes: None,
            hours: Some(1.0),
        },
    ));

    assert!(matches!(
        res,
        Err(InvalidInputError::OutOfRange { flag: "--Q", .. })
    ));
}

#[test]
fn given_capacities_are_range_checked() {
    let res = solve(&request(
        1.0,
        1.0,
        0.0,
        Capacities {
            jobs: Some(1.0),
            nodes: Some(1e20),
            hours: None,
        },
    ));

    assert!(matches!(
        res,
        Err(InvalidInputError::OutOfRange { flag: "--R", .. })
    ));
}

#[test]
fn largest_whole_count_is_accepted() {
    let solution = solve(&request(
        1.0,
        1.0,
        0.0,
        Capacities {
            jobs: None,
            nodes: Some(MAX_CAPACITY),
            hours: Some(1.0),
        },
    ))
    .unwrap();

    assert_eq!(solution.jobs, MAX_CAPACITY);
}
