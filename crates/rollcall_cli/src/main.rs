//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `rollcall_core` linkage and run a fixed session of commands.
//! - Keep output deterministic for quick local sanity checks.
//!
//! File logging is enabled only when `ROLLCALL_LOG_DIR` is set.

use chrono::NaiveDate;
use log::info;
use rollcall_core::{
    AddStudentCommand, Attendance, Command, CommandService, DeleteAttendanceCommand,
    DeleteStudentCommand, FilterGroupCommand, InMemoryModel, ListStudentsCommand, LoggingConfig,
    MarkAttendanceCommand, Model, Name, Student, StudentNumber, TutorialGroup, ValidationError,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("rollcall_core ping={}", rollcall_core::ping());
    println!("rollcall_core version={}", rollcall_core::core_version());

    if let Some(config) = LoggingConfig::from_env() {
        if let Err(err) = config.init() {
            eprintln!("logging disabled: {err}");
        }
    }

    let script = match smoke_script() {
        Ok(script) => script,
        Err(err) => {
            eprintln!("invalid smoke script: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut service = CommandService::new(InMemoryModel::new());
    for command in script {
        let word = command.command_word();
        match service.execute(command) {
            Ok(result) => println!("{word}> {}", result.feedback),
            Err(err) => println!("{word}! {err}"),
        }
    }
    match service.undo() {
        Ok(result) => println!("undo> {}", result.feedback),
        Err(err) => println!("undo! {err}"),
    }

    let model = service.into_model();
    println!("visible={}", model.filtered_students().len());
    match serde_json::to_string_pretty(model.student_book()) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("failed to serialize snapshot: {err}");
            return ExitCode::FAILURE;
        }
    }
    info!(
        "event=cli_smoke module=cli status=ok revision={}",
        model.revision()
    );
    ExitCode::SUCCESS
}

/// Fixed session: every command kind succeeds once and a few fail.
fn smoke_script() -> Result<Vec<Box<dyn Command>>, ValidationError> {
    let john = Name::parse("John Ng")?;
    let amy = Name::parse("Amy Lee")?;
    let t01 = TutorialGroup::parse("T01")?;
    let class_day = NaiveDate::from_ymd_opt(2019, 10, 9).expect("valid smoke date");

    Ok(vec![
        Box::new(AddStudentCommand::new(Student::new(
            john.clone(),
            StudentNumber::parse("A1234567B")?,
            t01.clone(),
        ))),
        Box::new(AddStudentCommand::new(Student::new(
            amy.clone(),
            StudentNumber::parse("A2222222C")?,
            TutorialGroup::parse("T02")?,
        ))),
        Box::new(MarkAttendanceCommand::new(
            john.clone(),
            class_day,
            Attendance::Present,
        )),
        Box::new(MarkAttendanceCommand::new(amy, class_day, Attendance::Late)),
        Box::new(DeleteAttendanceCommand::new(john, class_day)),
        Box::new(DeleteAttendanceCommand::new(
            Name::parse("John Tan")?,
            class_day,
        )),
        Box::new(DeleteStudentCommand::new("12345")),
        Box::new(DeleteStudentCommand::new("A2222222C")),
        Box::new(FilterGroupCommand::new(t01)),
        Box::new(ListStudentsCommand),
    ])
}
