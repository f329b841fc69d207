use chrono::NaiveDate;
use rollcall_core::{Attendance, Name, Phone, Student, StudentNumber, TutorialGroup};

fn john_ng() -> Student {
    Student::new(
        Name::parse("John Ng").expect("valid name"),
        StudentNumber::parse("A1234567B").expect("valid student number"),
        TutorialGroup::parse("T01").expect("valid tutorial group"),
    )
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let mut student = john_ng().with_phone(Phone::parse("98765432").expect("valid phone"));
    student.mark_attendance(
        NaiveDate::from_ymd_opt(2019, 10, 16).expect("valid calendar date"),
        Attendance::Late,
    );
    student.mark_attendance(
        NaiveDate::from_ymd_opt(2019, 10, 9).expect("valid calendar date"),
        Attendance::Present,
    );

    let json = serde_json::to_value(&student).expect("record should serialize");
    assert_eq!(json["name"], "John Ng");
    assert_eq!(json["phone"], "98765432");
    assert_eq!(json["student_number"], "A1234567B");
    assert_eq!(json["tutorial_group"], "T01");
    assert_eq!(json["attendance"][0]["date"], "2019-10-09");
    assert_eq!(json["attendance"][0]["attendance"], "present");
    assert_eq!(json["attendance"][1]["attendance"], "late");

    let decoded: Student = serde_json::from_value(json).expect("record should deserialize");
    assert_eq!(decoded, student);
}

#[test]
fn deserialize_rejects_malformed_student_number() {
    let value = serde_json::json!({
        "name": "John Ng",
        "phone": null,
        "student_number": "12345",
        "tutorial_group": "T01",
        "attendance": []
    });

    let err = serde_json::from_value::<Student>(value).unwrap_err();
    assert!(
        err.to_string().contains("invalid student number `12345`"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_two_records_on_one_date() {
    let value = serde_json::json!({
        "name": "John Ng",
        "phone": null,
        "student_number": "A1234567B",
        "tutorial_group": "T01",
        "attendance": [
            {"date": "2019-10-09", "attendance": "present"},
            {"date": "2019-10-09", "attendance": "absent"}
        ]
    });

    let err = serde_json::from_value::<Student>(value).unwrap_err();
    assert!(
        err.to_string()
            .contains("duplicate attendance record for 2019-10-09"),
        "unexpected error: {err}"
    );
}

#[test]
fn missing_attendance_defaults_to_empty() {
    let value = serde_json::json!({
        "name": "John Ng",
        "phone": null,
        "student_number": "A1234567B",
        "tutorial_group": "t01"
    });

    let student: Student = serde_json::from_value(value).expect("record should deserialize");
    assert_eq!(student.attendance_count(), 0);
    assert_eq!(student.tutorial_group.as_str(), "T01");
}

#[test]
fn same_student_matches_on_either_unique_key() {
    let base = john_ng();
    let renamed = Student::new(
        Name::parse("Johnny Ng").expect("valid name"),
        StudentNumber::parse("A1234567B").expect("valid student number"),
        TutorialGroup::parse("T02").expect("valid tutorial group"),
    );
    let renumbered = Student::new(
        Name::parse("John Ng").expect("valid name"),
        StudentNumber::parse("A7654321Z").expect("valid student number"),
        TutorialGroup::parse("T01").expect("valid tutorial group"),
    );
    let other = Student::new(
        Name::parse("Amy Lee").expect("valid name"),
        StudentNumber::parse("A2222222C").expect("valid student number"),
        TutorialGroup::parse("T01").expect("valid tutorial group"),
    );

    assert!(base.is_same_student(&renamed));
    assert!(base.is_same_student(&renumbered));
    assert!(!base.is_same_student(&other));
}
