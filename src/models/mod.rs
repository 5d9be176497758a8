pub mod attendance;
pub mod contractor;
pub mod dashboard;
pub mod insight;
pub mod labour_status;
pub mod payment;
pub mod payment_category;
pub mod worker;

pub use attendance::{AttendanceRecord, NewAttendance};
pub use contractor::Contractor;
pub use dashboard::Dashboard;
pub use insight::{RiskFlag, SuggestedAction};
pub use labour_status::LabourStatus;
pub use payment::{NewPayment, Payment};
pub use payment_category::PaymentCategory;
pub use worker::{NewWorker, Worker};
