//! Fixed records every session starts from.

use crate::models::{
    AttendanceRecord, Contractor, LabourStatus, Payment, PaymentCategory, Worker,
};
use chrono::NaiveDate;

pub struct SeedData {
    pub contractors: Vec<Contractor>,
    pub workers: Vec<Worker>,
    pub attendance: Vec<AttendanceRecord>,
    pub payments: Vec<Payment>,
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn worker(
    id: &str,
    name: &str,
    trade: &str,
    daily_rate: f64,
    status: LabourStatus,
    phone: Option<&str>,
    contractor_id: &str,
) -> Worker {
    Worker {
        id: id.into(),
        name: name.into(),
        trade: trade.into(),
        daily_rate,
        status,
        phone: phone.map(str::to_string),
        contractor_id: contractor_id.into(),
    }
}

pub fn seed_data() -> SeedData {
    let contractors = vec![
        Contractor {
            id: "c-1".into(),
            name: "Ravi Kumar".into(),
            company: "RK Structures".into(),
            scope: "RCC frame and blockwork, Tower B".into(),
            budget: 850_000.0,
            start_date: day(2026, 8, 1),
            end_date: day(2026, 12, 20),
            crew_size_target: 12,
            notes: Some("Slab pours need 48h notice to the batching plant".into()),
        },
        Contractor {
            id: "c-2".into(),
            name: "Meera Nair".into(),
            company: "Nair Electricals".into(),
            scope: "Electrical rough-in, levels 1 to 4".into(),
            budget: 320_000.0,
            start_date: day(2026, 9, 15),
            end_date: day(2026, 11, 30),
            crew_size_target: 6,
            notes: None,
        },
    ];

    let workers = vec![
        worker(
            "w-1",
            "Arun Das",
            "Mason",
            4200.0,
            LabourStatus::Present,
            Some("+91 98450 11223"),
            "c-1",
        ),
        worker(
            "w-2",
            "Suresh Pillai",
            "Bar bender",
            4600.0,
            LabourStatus::Present,
            None,
            "c-1",
        ),
        worker(
            "w-3",
            "Imran Shaikh",
            "Electrician",
            5800.0,
            LabourStatus::Leave,
            Some("+91 99001 44321"),
            "c-2",
        ),
        worker(
            "w-4",
            "Deepak Yadav",
            "Helper",
            3600.0,
            LabourStatus::Standby,
            None,
            "c-1",
        ),
    ];

    // newest first
    let attendance = vec![
        AttendanceRecord {
            id: "a-3".into(),
            worker_id: "w-1".into(),
            date: day(2026, 10, 16),
            hours_worked: 8.0,
            presence: LabourStatus::Present,
            remarks: Some("Slab shuttering".into()),
            site: "Tower B".into(),
        },
        AttendanceRecord {
            id: "a-2".into(),
            worker_id: "w-3".into(),
            date: day(2026, 10, 16),
            hours_worked: 0.0,
            presence: LabourStatus::Absent,
            remarks: Some("Did not report".into()),
            site: "Tower B".into(),
        },
        AttendanceRecord {
            id: "a-1".into(),
            worker_id: "w-2".into(),
            date: day(2026, 10, 15),
            hours_worked: 9.5,
            presence: LabourStatus::Present,
            remarks: None,
            site: "Tower B".into(),
        },
    ];

    let payments = vec![
        Payment {
            id: "p-2".into(),
            worker_id: "w-4".into(),
            amount: 1500.0,
            date: day(2026, 10, 14),
            category: PaymentCategory::Advance,
            note: Some("Festival advance".into()),
        },
        Payment {
            id: "p-1".into(),
            worker_id: "w-2".into(),
            amount: 800.0,
            date: day(2026, 10, 10),
            category: PaymentCategory::Deduction,
            note: Some("Damaged tools".into()),
        },
    ];

    SeedData {
        contractors,
        workers,
        attendance,
        payments,
    }
}
