use super::*;

fn solution(missing: Capacity, jobs: f64, nodes: f64, hours: f64, nh: f64) -> Solution {
    Solution {
        missing,
        jobs,
        nodes,
        hours,
        effective_node_hours: nh,
    }
}

#[test]
fn capacity_formatting() {
    assert_eq!(format_capacity(Capacity::Jobs, 250.0), "250");
    assert_eq!(format_capacity(Capacity::Nodes, 45.9), "45");
    assert_eq!(format_capacity(Capacity::Hours, 25.0), "25.00");
    assert_eq!(format_capacity(Capacity::Hours, 35.0 / 6.0), "5.83");
}

#[test]
fn solution_lines() {
    assert_eq!(
        format_solution(&solution(Capacity::Jobs, 250.0, 100.0, 50.0, 20.0)),
        "Jobs Q ≈ 250  (NH_eff=20.000 node-hours/job)"
    );
    assert_eq!(
        format_solution(&solution(Capacity::Nodes, 100.0, 46.0, 50.0, 23.0)),
        "Nodes R ≈ 46  (NH_eff=23.000 node-hours/job)"
    );
    assert_eq!(
        format_solution(&solution(Capacity::Hours, 10.0, 2.0, 25.0, 5.0)),
        "Hours H ≈ 25.00  (NH_eff=5.000 node-hours/job)"
    );
}

#[test]
fn display_includes_reservation() {
    let mut out = Vec::new();

    display_solution(
        &mut out,
        &solution(Capacity::Hours, 10.0, 2.0, 25.0, 5.0),
        &ReservationMetadata::default(),
    )
    .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Hours H ≈ 25.00  (NH_eff=5.000 node-hours/job)\n\
         \n\
         # scontrol (optional):\n\
         scontrol create reservation \\\n  \
         Duration=25:00:00 \\\n  \
         PartitionName=reserved \\\n  \
         TRES=Nodes=2\n"
    );
}
