use bills_core::bills::{upcoming_occurrences, BillRecord, BillingCycle};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_monthly_bill_projects_each_cycle_in_window() {
    let bills = vec![BillRecord::new(
        "Rent",
        date(2025, 1, 15),
        BillingCycle::Monthly,
    )];

    let occurrences = upcoming_occurrences(&bills, 90, date(2025, 1, 1));
    let dates: Vec<NaiveDate> = occurrences.iter().map(|o| o.date).collect();
    assert_eq!(
        dates,
        [date(2025, 1, 15), date(2025, 2, 15), date(2025, 3, 15)]
    );
}

#[test]
fn test_one_time_bill_contributes_single_occurrence() {
    let bills = vec![BillRecord::new(
        "Deposit",
        date(2025, 1, 20),
        BillingCycle::OneTime,
    )];

    let occurrences = upcoming_occurrences(&bills, 365, date(2025, 1, 1));
    assert_eq!(occurrences.len(), 1);
    assert_eq!(occurrences[0].date, date(2025, 1, 20));
}

#[test]
fn test_overdue_bill_rolls_forward_into_window() {
    let bills = vec![BillRecord::new(
        "Internet",
        date(2024, 12, 10),
        BillingCycle::Monthly,
    )];

    let occurrences = upcoming_occurrences(&bills, 45, date(2025, 1, 1));
    let dates: Vec<NaiveDate> = occurrences.iter().map(|o| o.date).collect();
    assert_eq!(dates, [date(2025, 1, 10), date(2025, 2, 10)]);
}

#[test]
fn test_paid_bills_are_excluded_and_result_is_sorted() {
    let mut retired = BillRecord::new("Old Gym", date(2025, 1, 5), BillingCycle::Monthly);
    retired.paid = true;
    let bills = vec![
        retired,
        BillRecord::new("Water", date(2025, 1, 12), BillingCycle::Weekly),
        BillRecord::new("Power", date(2025, 1, 12), BillingCycle::Monthly),
    ];

    let occurrences = upcoming_occurrences(&bills, 14, date(2025, 1, 10));
    let summary: Vec<(NaiveDate, &str)> = occurrences
        .iter()
        .map(|o| (o.date, o.name.as_str()))
        .collect();
    assert_eq!(
        summary,
        [
            (date(2025, 1, 12), "Power"),
            (date(2025, 1, 12), "Water"),
            (date(2025, 1, 19), "Water"),
        ]
    );
}
