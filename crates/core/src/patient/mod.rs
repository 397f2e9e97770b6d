mod error;
mod http_mapping;
mod mock_data;
mod operations;
mod requests;
mod types;

pub use error::PatientError;
pub use http_mapping::patient_error_to_status_code;
pub use mock_data::demo_patients;
pub use operations::{merge_update, validate_update};
pub use requests::{CreatePatientRequest, UpdatePatientRequest};
pub use types::{PatientId, PatientRecord};
