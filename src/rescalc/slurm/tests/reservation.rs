use super::*;

#[test]
fn duration_fmt_test() {
    assert_eq!(format_reservation_duration(25.0), "25:00:00");
    assert_eq!(format_reservation_duration(0.0), "00:00:00");
    assert_eq!(format_reservation_duration(1.5), "01:30:00");
    assert_eq!(format_reservation_duration(2.25), "02:15:00");
    assert_eq!(format_reservation_duration(0.01), "00:01:00");
    assert_eq!(format_reservation_duration(120.0), "120:00:00");
}

#[test]
fn duration_rounds_to_minutes() {
    // 10 h 20 min 24 s
    assert_eq!(format_reservation_duration(10.34), "10:20:00");
    // 3 h 59 min 58 s
    assert_eq!(format_reservation_duration(3.0 + 3598.0 / 3600.0), "04:00:00");
}

#[test]
fn minimal_command() {
    let command = ReservationCommand::new(2.0, 25.0, &ReservationMetadata::default());

    assert_eq!(
        command.parts,
        vec![
            "scontrol create reservation",
            "Duration=25:00:00",
            "PartitionName=reserved",
            "TRES=Nodes=2",
        ]
    );
    assert_eq!(
        command.to_string(),
        "scontrol create reservation \\\n  Duration=25:00:00 \\\n  PartitionName=reserved \\\n  TRES=Nodes=2"
    );
}

#[test]
fn full_command_keeps_order() {
    let metadata = ReservationMetadata {
        start: "2025-09-30T09:00:00".to_string(),
        partition: "compute".to_string(),
        users: "alice,bob".to_string(),
        accounts: "research".to_string(),
    };

    let command = ReservationCommand::new(46.0, 50.0, &metadata);

    assert_eq!(
        command.parts,
        vec![
            "scontrol create reservation",
            "StartTime=2025-09-30T09:00:00",
            "Duration=50:00:00",
            "PartitionName=compute",
            "TRES=Nodes=46",
            "Users=alice,bob",
            "Accounts=research",
        ]
    );
}

#[test]
fn empty_parts_are_skipped() {
    let metadata = ReservationMetadata {
        accounts: "research".to_string(),
        ..Default::default()
    };

    let shown = ReservationCommand::new(10.7, 1.0, &metadata).to_string();

    assert!(!shown.contains("StartTime"));
    assert!(!shown.contains("Users"));
    assert!(!shown.contains("= "));
    assert!(shown.contains("TRES=Nodes=10 \\\n  Accounts=research"));
}

#[test]
fn empty_partition_is_skipped() {
    let metadata = ReservationMetadata {
        partition: String::new(),
        ..Default::default()
    };

    let command = ReservationCommand::new(2.0, 1.5, &metadata);

    assert_eq!(
        command.parts,
        vec![
            "scontrol create reservation",
            "Duration=01:30:00",
            "TRES=Nodes=2",
        ]
    );
    assert!(!command.to_string().contains("PartitionName"));
}
