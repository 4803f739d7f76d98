use rtimeclock::MemoryStore;
use rtimeclock::core::entries::PunchOutcome;
use rtimeclock::models::employee::EmployeeUpdate;
use rtimeclock::models::status::EmployeeStatus;
use rtimeclock::models::time_entry::{EntryUpdate, TimeEntry};
use std::collections::HashSet;

mod common;
use common::{d, sheet_at, t};

const ENTRIES_KEY: &str = "rtimeclock-entries";
const EMPLOYEES_KEY: &str = "rtimeclock-employees";

/// Clock in at `start` and out at `end` on `day` (both on the same moment's date).
fn shift(store: &MemoryStore, emp_id: &str, day: &str, start: &str, end: &str) -> TimeEntry {
    let entry = sheet_at(store, &format!("{day} {start}"))
        .clock_in(emp_id)
        .expect("clock in");
    sheet_at(store, &format!("{day} {end}"))
        .clock_out(&entry.id)
        .expect("clock out")
}

#[test]
fn test_add_employee_assigns_unique_ids() {
    let store = MemoryStore::new();
    let sheet = sheet_at(&store, "2025-09-17 09:00");

    let mut seen = HashSet::new();
    for (i, name) in ["Alice", "Bob", "Chen", "Dana"].iter().enumerate() {
        let before = sheet.employees();
        let emp = sheet.add_employee(name, 15.0 + i as f64).expect("valid employee");

        let after = sheet.employees();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after.iter().filter(|e| e.id == emp.id).count(), 1);
        assert!(before.iter().all(|e| e.id != emp.id));
        assert!(seen.insert(emp.id.clone()), "duplicate id {}", emp.id);
    }
}

#[test]
fn test_add_employee_trims_name() {
    let store = MemoryStore::new();
    let sheet = sheet_at(&store, "2025-09-17 09:00");

    let emp = sheet.add_employee("  Alice  ", 20.0).unwrap();
    assert_eq!(emp.name, "Alice");
    assert_eq!(sheet.employees()[0].name, "Alice");
}

#[test]
fn test_add_employee_rejects_invalid_input() {
    let store = MemoryStore::new();
    let sheet = sheet_at(&store, "2025-09-17 09:00");

    assert!(sheet.add_employee("", 20.0).is_none());
    assert!(sheet.add_employee("   ", 20.0).is_none());
    assert!(sheet.add_employee("Alice", 0.0).is_none());
    assert!(sheet.add_employee("Alice", -5.0).is_none());
    assert!(sheet.add_employee("Alice", f64::NAN).is_none());
    assert!(sheet.add_employee("Alice", f64::INFINITY).is_none());

    assert!(sheet.employees().is_empty());
    assert!(store.raw(EMPLOYEES_KEY).is_none(), "nothing should be written");
}

#[test]
fn test_update_employee_merges_fields() {
    let store = MemoryStore::new();
    let sheet = sheet_at(&store, "2025-09-17 09:00");
    let emp = sheet.add_employee("Alice", 20.0).unwrap();

    let updated = sheet
        .update_employee(
            &emp.id,
            EmployeeUpdate {
                hourly_rate: Some(22.5),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.name, "Alice");
    assert_eq!(updated.hourly_rate, 22.5);
    assert_eq!(sheet.employee(&emp.id).unwrap(), updated);

    let renamed = sheet
        .update_employee(
            &emp.id,
            EmployeeUpdate {
                name: Some("Alicia".into()),
                pin: Some(Some("1234".into())),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(renamed.name, "Alicia");
    assert_eq!(renamed.hourly_rate, 22.5);
    assert_eq!(renamed.pin.as_deref(), Some("1234"));

    let cleared = sheet
        .update_employee(
            &emp.id,
            EmployeeUpdate {
                pin: Some(None),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(cleared.pin, None);
}

#[test]
fn test_update_employee_ignores_invalid_rate() {
    let store = MemoryStore::new();
    let sheet = sheet_at(&store, "2025-09-17 09:00");
    let alice = sheet.add_employee("Alice", 15.0).unwrap();
    sheet.add_employee("Bob", 20.0).unwrap();

    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 0.0, -3.0] {
        let updated = sheet
            .update_employee(
                &alice.id,
                EmployeeUpdate {
                    name: Some("Alicia".into()),
                    hourly_rate: Some(bad),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.name, "Alicia");
        assert_eq!(updated.hourly_rate, 15.0);
    }

    let raw = store.raw(EMPLOYEES_KEY).unwrap();
    assert!(!raw.contains("null"));

    sheet.add_employee("Carol", 18.0).unwrap();
    let names: Vec<_> = sheet.employees().into_iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["Alicia", "Bob", "Carol"]);
}

#[test]
fn test_update_employee_ignores_blank_name() {
    let store = MemoryStore::new();
    let sheet = sheet_at(&store, "2025-09-17 09:00");
    let alice = sheet.add_employee("Alice", 15.0).unwrap();

    let updated = sheet
        .update_employee(
            &alice.id,
            EmployeeUpdate {
                name: Some("   ".into()),
                hourly_rate: Some(16.0),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.name, "Alice");
    assert_eq!(updated.hourly_rate, 16.0);

    let trimmed = sheet
        .update_employee(
            &alice.id,
            EmployeeUpdate {
                name: Some("  Alicia ".into()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(trimmed.name, "Alicia");
}

#[test]
fn test_update_unknown_employee_is_noop() {
    let store = MemoryStore::new();
    let sheet = sheet_at(&store, "2025-09-17 09:00");
    sheet.add_employee("Alice", 20.0).unwrap();
    let raw_before = store.raw(EMPLOYEES_KEY);

    let res = sheet.update_employee(
        "emp-missing",
        EmployeeUpdate {
            name: Some("Ghost".into()),
            ..Default::default()
        },
    );

    assert!(res.is_none());
    assert_eq!(store.raw(EMPLOYEES_KEY), raw_before);
}

#[test]
fn test_delete_employee_cascades_entries() {
    let store = MemoryStore::new();
    let sheet = sheet_at(&store, "2025-09-17 09:00");
    let alice = sheet.add_employee("Alice", 20.0).unwrap();
    let bob = sheet.add_employee("Bob", 18.0).unwrap();

    shift(&store, &alice.id, "2025-09-15", "09:00", "17:00");
    shift(&store, &alice.id, "2025-09-16", "09:00", "17:00");
    shift(&store, &bob.id, "2025-09-16", "10:00", "14:00");
    sheet_at(&store, "2025-09-17 08:00").clock_in(&alice.id).unwrap();

    assert!(sheet.delete_employee(&alice.id));

    let employees = sheet.employees();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].id, bob.id);

    let entries = sheet.entries();
    assert_eq!(entries.len(), 1);
    assert!(entries.iter().all(|e| e.employee_id == bob.id));
}

#[test]
fn test_clock_in_twice_returns_none_and_keeps_entries() {
    let store = MemoryStore::new();
    let sheet = sheet_at(&store, "2025-09-17 09:00");
    let emp = sheet.add_employee("Alice", 20.0).unwrap();

    let first = sheet.clock_in(&emp.id).expect("first clock in");
    assert!(first.is_open());
    assert_eq!(first.date, d("2025-09-17"));
    assert_eq!(first.clock_in, t("09:00"));

    let raw_before = store.raw(ENTRIES_KEY);
    let second = sheet_at(&store, "2025-09-17 09:05").clock_in(&emp.id);

    assert!(second.is_none());
    assert_eq!(store.raw(ENTRIES_KEY), raw_before);
    assert_eq!(sheet.entries(), vec![first]);
}

#[test]
fn test_clock_in_blocked_by_open_entry_from_previous_day() {
    let store = MemoryStore::new();
    let emp = sheet_at(&store, "2025-09-16 08:00")
        .add_employee("Alice", 20.0)
        .unwrap();

    sheet_at(&store, "2025-09-16 22:00").clock_in(&emp.id).unwrap();
    assert!(sheet_at(&store, "2025-09-17 06:00").clock_in(&emp.id).is_none());
}

#[test]
fn test_clock_in_truncates_seconds() {
    let store = MemoryStore::new();
    let now = common::dt("2025-09-17 09:00") + chrono::Duration::seconds(42);
    let sheet = rtimeclock::TimeSheet::new(&store, rtimeclock::FixedClock(now));

    let entry = sheet.clock_in("emp-1").unwrap();
    assert_eq!(entry.clock_in, t("09:00"));
    assert!(store.raw(ENTRIES_KEY).unwrap().contains("\"clockIn\":\"09:00\""));
}

#[test]
fn test_clock_out_then_clock_in_again() {
    let store = MemoryStore::new();
    let emp = sheet_at(&store, "2025-09-17 08:00")
        .add_employee("Alice", 20.0)
        .unwrap();

    let first = shift(&store, &emp.id, "2025-09-17", "09:00", "12:00");
    assert_eq!(first.clock_out, Some(t("12:00")));

    let second = sheet_at(&store, "2025-09-17 13:00")
        .clock_in(&emp.id)
        .expect("a closed shift does not block a new one");
    assert_ne!(first.id, second.id);
}

#[test]
fn test_clock_out_unknown_entry_is_noop() {
    let store = MemoryStore::new();
    let sheet = sheet_at(&store, "2025-09-17 09:00");
    sheet.clock_in("emp-1").unwrap();
    let raw_before = store.raw(ENTRIES_KEY);

    assert!(sheet.clock_out("t-does-not-exist").is_none());
    assert_eq!(store.raw(ENTRIES_KEY), raw_before);
}

#[test]
fn test_clock_out_twice_overwrites_clock_out() {
    let store = MemoryStore::new();
    let entry = shift(&store, "emp-1", "2025-09-17", "09:00", "12:00");

    let again = sheet_at(&store, "2025-09-17 12:30")
        .clock_out(&entry.id)
        .unwrap();
    assert_eq!(again.clock_out, Some(t("12:30")));
}

#[test]
fn test_update_entry_allows_clock_out_before_clock_in() {
    let store = MemoryStore::new();
    let sheet = sheet_at(&store, "2025-09-17 18:00");
    let entry = shift(&store, "emp-1", "2025-09-17", "09:00", "17:00");

    let updated = sheet
        .update_entry(
            &entry.id,
            EntryUpdate {
                clock_in: Some(t("10:00")),
                clock_out: Some(Some(t("08:00"))),
            },
        )
        .unwrap();

    assert_eq!(updated.clock_in, t("10:00"));
    assert_eq!(updated.clock_out, Some(t("08:00")));
    // read as a wrap over midnight
    assert_eq!(sheet.calc_hours(&updated), 22.0);
    assert_eq!(sheet.entry(&entry.id).unwrap(), updated);
}

#[test]
fn test_update_entry_reopen() {
    let store = MemoryStore::new();
    let sheet = sheet_at(&store, "2025-09-17 18:00");
    let first = shift(&store, "emp-1", "2025-09-17", "09:00", "12:00");

    let reopened = sheet
        .update_entry(
            &first.id,
            EntryUpdate {
                clock_out: Some(None),
                ..Default::default()
            },
        )
        .unwrap();
    assert!(reopened.is_open());
    assert_eq!(sheet.find_open_entry("emp-1").unwrap().id, first.id);
}

#[test]
fn test_update_entry_reopen_refused_when_another_shift_open() {
    let store = MemoryStore::new();
    let first = shift(&store, "emp-1", "2025-09-17", "09:00", "12:00");
    let sheet = sheet_at(&store, "2025-09-17 13:00");
    sheet.clock_in("emp-1").unwrap();
    let raw_before = store.raw(ENTRIES_KEY);

    let res = sheet.update_entry(
        &first.id,
        EntryUpdate {
            clock_out: Some(None),
            ..Default::default()
        },
    );

    assert!(res.is_none());
    assert_eq!(store.raw(ENTRIES_KEY), raw_before);
}

#[test]
fn test_today_entries_only_today() {
    let store = MemoryStore::new();
    shift(&store, "emp-1", "2025-09-16", "09:00", "17:00");
    shift(&store, "emp-1", "2025-09-17", "09:00", "11:00");
    shift(&store, "emp-2", "2025-09-17", "09:00", "11:00");

    let sheet = sheet_at(&store, "2025-09-17 12:00");
    let today = sheet.today_entries("emp-1");
    assert_eq!(today.len(), 1);
    assert_eq!(today[0].date, d("2025-09-17"));
    assert_eq!(today[0].employee_id, "emp-1");
}

#[test]
fn test_entries_in_range_inclusive() {
    let store = MemoryStore::new();
    shift(&store, "emp-1", "2025-08-31", "09:00", "10:00");
    shift(&store, "emp-1", "2025-09-01", "09:00", "10:00");
    shift(&store, "emp-2", "2025-09-30", "09:00", "10:00");
    shift(&store, "emp-2", "2025-10-01", "09:00", "10:00");

    let sheet = sheet_at(&store, "2025-09-17 12:00");
    let range = rtimeclock::DateRange::new(d("2025-09-01"), d("2025-09-30"));
    let dates: Vec<_> = sheet
        .entries_in_range(&range)
        .iter()
        .map(|e| e.date)
        .collect();
    assert_eq!(dates, vec![d("2025-09-01"), d("2025-09-30")]);
}

#[test]
fn test_find_by_pin_returns_first_match() {
    let store = MemoryStore::new();
    let sheet = sheet_at(&store, "2025-09-17 09:00");
    let alice = sheet
        .add_employee_with_pin("Alice", 20.0, Some("1234".into()))
        .unwrap();
    sheet
        .add_employee_with_pin("Bob", 18.0, Some("1234".into()))
        .unwrap();
    sheet.add_employee("Chen", 18.0).unwrap();

    assert_eq!(sheet.find_by_pin("1234").unwrap().id, alice.id);
    assert!(sheet.find_by_pin("9999").is_none());
    assert!(sheet.find_by_pin("").is_none());
}

#[test]
fn test_punch_toggles_between_in_and_out() {
    let store = MemoryStore::new();
    sheet_at(&store, "2025-09-17 08:00")
        .add_employee_with_pin("Alice", 20.0, Some("4321".into()))
        .unwrap();

    match sheet_at(&store, "2025-09-17 09:00").punch("4321") {
        PunchOutcome::ClockedIn { name, entry } => {
            assert_eq!(name, "Alice");
            assert_eq!(entry.clock_in, t("09:00"));
        }
        other => panic!("expected clock in, got {:?}", other),
    }

    match sheet_at(&store, "2025-09-17 17:00").punch("4321") {
        PunchOutcome::ClockedOut { entry, .. } => {
            assert_eq!(entry.clock_out, Some(t("17:00")));
        }
        other => panic!("expected clock out, got {:?}", other),
    }

    assert_eq!(
        sheet_at(&store, "2025-09-17 17:00").punch("0000"),
        PunchOutcome::UnknownPin
    );
}

#[test]
fn test_employee_status_transitions() {
    let store = MemoryStore::new();
    let emp = sheet_at(&store, "2025-09-17 08:00")
        .add_employee("Alice", 20.0)
        .unwrap();

    assert_eq!(
        sheet_at(&store, "2025-09-17 08:00").employee_status(&emp.id),
        EmployeeStatus::Idle
    );

    let entry = sheet_at(&store, "2025-09-17 09:00").clock_in(&emp.id).unwrap();
    let working = sheet_at(&store, "2025-09-17 10:30");
    assert_eq!(
        working.employee_status(&emp.id),
        EmployeeStatus::Working(entry.clone())
    );
    assert_eq!(working.today_total(&emp.id), 1.5);

    sheet_at(&store, "2025-09-17 12:00").clock_out(&entry.id).unwrap();
    let done = sheet_at(&store, "2025-09-17 15:00");
    assert_eq!(done.employee_status(&emp.id), EmployeeStatus::Done);
    assert_eq!(done.today_total(&emp.id), 3.0);
}

#[test]
fn test_total_hours_excludes_open_entry() {
    let store = MemoryStore::new();
    shift(&store, "emp-1", "2025-09-15", "09:00", "17:30");
    sheet_at(&store, "2025-09-17 09:00").clock_in("emp-1").unwrap();

    let sheet = sheet_at(&store, "2025-09-17 15:00");
    let week = sheet.week_range();
    assert!(week.contains(d("2025-09-17")));
    assert_eq!(sheet.total_hours_for_employee("emp-1", &week), 8.5);
}

#[test]
fn test_wage_summary_per_employee_and_total() {
    let store = MemoryStore::new();
    let setup = sheet_at(&store, "2025-09-15 08:00");
    let alice = setup.add_employee("Alice", 20.0).unwrap();
    let bob = setup.add_employee("Bob", 15.0).unwrap();
    let chen = setup.add_employee("Chen", 30.0).unwrap();

    shift(&store, &alice.id, "2025-09-15", "09:00", "17:30"); // 8.5h
    shift(&store, &alice.id, "2025-09-16", "23:00", "02:00"); // 3h, wraps
    shift(&store, &bob.id, "2025-09-16", "10:00", "14:00"); // 4h
    shift(&store, &bob.id, "2025-09-12", "10:00", "14:00"); // previous week

    let sheet = sheet_at(&store, "2025-09-17 12:00");
    let summary = sheet.wage_summary(&sheet.week_range());

    assert_eq!(summary.rows.len(), 3);
    let row = |id: &str| summary.rows.iter().find(|r| r.employee_id == id).unwrap();

    assert_eq!(row(&alice.id).hours, 11.5);
    assert_eq!(row(&alice.id).wage, 230.0);
    assert_eq!(row(&bob.id).hours, 4.0);
    assert_eq!(row(&bob.id).wage, 60.0);
    assert_eq!(row(&chen.id).hours, 0.0);

    assert_eq!(summary.total_hours, 15.5);
    assert_eq!(summary.total_wage, 290.0);
    assert!(summary.has_data());
}

#[test]
fn test_wage_report_text_lists_only_worked_employees() {
    let store = MemoryStore::new();
    let setup = sheet_at(&store, "2025-09-15 08:00");
    let alice = setup.add_employee("Alice", 20.0).unwrap();
    setup.add_employee("Bob", 15.0).unwrap();
    shift(&store, &alice.id, "2025-09-15", "09:00", "10:30");

    let sheet = sheet_at(&store, "2025-09-17 12:00");
    let summary = sheet.wage_summary(&sheet.week_range());
    let text = rtimeclock::core::report::wage_report_text(&summary, "This week", "$");

    assert!(text.starts_with("📋 Wage report: This week"));
    assert!(text.contains("Alice: 1h30m → $30.00"));
    assert!(!text.contains("Bob"));
    assert!(text.ends_with("Total: 1h30m → $30.00"));
}
