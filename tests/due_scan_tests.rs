use bills_core::bills::{
    cycle_summary, scan, sort_bills, BillRecord, BillingCycle, DueStatus, ScanMode, SortKey,
};
use chrono::{Duration, NaiveDate};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn bill(name: &str, due: NaiveDate) -> BillRecord {
    BillRecord::new(name, due, BillingCycle::Monthly)
}

#[test]
fn test_classify_due_today_for_any_reminder_window() {
    let today = date(2025, 6, 10);
    for reminder_days in [1, 7, 30, 365] {
        assert_eq!(
            DueStatus::classify(today, reminder_days, today),
            DueStatus::DueToday
        );
    }
}

#[test]
fn test_classify_reminder_window_edges() {
    let today = date(2025, 6, 10);
    assert_eq!(
        DueStatus::classify(today + Duration::days(7), 7, today),
        DueStatus::Upcoming
    );
    assert_eq!(
        DueStatus::classify(today + Duration::days(8), 7, today),
        DueStatus::NotDue
    );
    assert_eq!(
        DueStatus::classify(today - Duration::days(1), 365, today),
        DueStatus::Overdue
    );
}

#[test]
fn test_per_bill_scan_respects_each_reminder_window() {
    let today = date(2025, 6, 1);
    let bills = vec![
        bill("Rent", date(2025, 6, 5)).with_reminder_days(3),
        bill("Internet", date(2025, 6, 5)).with_reminder_days(7),
    ];

    let due = scan(&bills, ScanMode::PerBill, today);
    // Rent is 4 days out with a 3-day window, so only Internet surfaces.
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].bill.name, "Internet");
    assert_eq!(due[0].status, DueStatus::Upcoming);
    assert_eq!(due[0].days_until, 4);
}

#[test]
fn test_fixed_window_overrides_without_mutating() {
    let today = date(2025, 6, 1);
    let bills = vec![
        bill("Rent", date(2025, 6, 20)).with_reminder_days(3),
        bill("Water", date(2025, 7, 15)).with_reminder_days(3),
    ];

    let due = scan(&bills, ScanMode::FixedWindow(30), today);
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].bill.name, "Rent");
    assert_eq!(due[0].status, DueStatus::Upcoming);

    // The override is scan-only: the bills keep their own windows.
    assert_eq!(bills[0].reminder_days, 3);
    assert_eq!(bills[1].reminder_days, 3);
}

#[test]
fn test_overdue_bills_always_included() {
    let today = date(2025, 6, 10);
    let bills = vec![bill("Electric", date(2025, 6, 1)).with_reminder_days(1)];

    for mode in [ScanMode::PerBill, ScanMode::FixedWindow(0)] {
        let due = scan(&bills, mode, today);
        assert_eq!(due.len(), 1, "{mode:?}");
        assert_eq!(due[0].status, DueStatus::Overdue);
        assert_eq!(due[0].days_until, -9);
    }
}

#[test]
fn test_paid_bills_are_skipped() {
    let today = date(2025, 6, 10);
    let mut settled = bill("Gym", date(2025, 6, 1));
    settled.billing_cycle = BillingCycle::OneTime;
    settled.paid = true;
    let bills = vec![settled, bill("Phone", date(2025, 6, 10))];

    let due = scan(&bills, ScanMode::FixedWindow(30), today);
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].bill.name, "Phone");
}

#[test]
fn test_scan_orders_by_date_then_name() {
    let today = date(2025, 6, 1);
    let bills = vec![
        bill("zeta", date(2025, 6, 2)),
        bill("Alpha", date(2025, 6, 2)),
        bill("Mid", date(2025, 6, 1)),
    ];

    let due = scan(&bills, ScanMode::FixedWindow(7), today);
    let names: Vec<&str> = due.iter().map(|d| d.bill.name.as_str()).collect();
    assert_eq!(names, ["Mid", "Alpha", "zeta"]);

    // Input order untouched.
    assert_eq!(bills[0].name, "zeta");
}

#[test]
fn test_sort_bills_orderings() {
    let mut paid = bill("Aqua", date(2025, 1, 5));
    paid.paid = true;
    let bills = vec![bill("Cable", date(2025, 3, 1)), paid, bill("Band", date(2025, 2, 1))];

    let by_date: Vec<String> = sort_bills(&bills, SortKey::DueDateAscending)
        .iter()
        .map(|b| b.name.clone())
        .collect();
    assert_eq!(by_date, ["Aqua", "Band", "Cable"]);

    let by_name_desc: Vec<String> = sort_bills(&bills, SortKey::NameDescending)
        .iter()
        .map(|b| b.name.clone())
        .collect();
    assert_eq!(by_name_desc, ["Cable", "Band", "Aqua"]);

    let unpaid_first: Vec<bool> = sort_bills(&bills, SortKey::UnpaidFirst)
        .iter()
        .map(|b| b.paid)
        .collect();
    assert_eq!(unpaid_first, [false, false, true]);
}

#[test]
fn test_cycle_summary_counts_in_canonical_order() {
    let mut annual = bill("Insurance", date(2025, 9, 1));
    annual.billing_cycle = BillingCycle::Annually;
    let bills = vec![
        bill("Rent", date(2025, 6, 1)),
        bill("Internet", date(2025, 6, 3)),
        annual,
    ];

    let summary = cycle_summary(&bills);
    assert_eq!(
        summary,
        vec![(BillingCycle::Monthly, 2), (BillingCycle::Annually, 1)]
    );
}
