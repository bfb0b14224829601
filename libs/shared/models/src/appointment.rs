use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentType {
    Quickcheck,
    Extensive,
    Surgery,
}

impl fmt::Display for AppointmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentType::Quickcheck => write!(f, "QUICKCHECK"),
            AppointmentType::Extensive => write!(f, "EXTENSIVE"),
            AppointmentType::Surgery => write!(f, "SURGERY"),
        }
    }
}

/// An appointment as the API returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    pub doctor_id: i64,
    pub patient_id: i64,
    pub patient_name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub appointment_type: AppointmentType,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub doctor_id: i64,
    pub patient_name: String,
    pub patient_email: String,
    pub patient_date_of_birth: NaiveDate,
    pub start: DateTime<Utc>,
    pub appointment_type: AppointmentType,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentUpdateRequest {
    pub id: i64,
    pub doctor_id: i64,
    pub start: DateTime<Utc>,
    pub appointment_type: AppointmentType,
}

/// Body of the signed patient-schedule lookup. The date of birth goes on the
/// wire pre-formatted as `%Y-%m-%d`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientScheduleRequest {
    pub received_hash: String,
    pub patient_id: i64,
    pub patient_date_of_birth: String,
}
