use chrono::NaiveDate;
use reqwest::Method;
use tracing::debug;

use shared_config::AppConfig;
use shared_http::RestClient;
use shared_models::appointment::{Appointment, PatientScheduleRequest};
use shared_models::error::ApiError;

use crate::signing::sign;

/// Looks up a patient's appointments through the signed schedule endpoint.
///
/// The endpoint takes no session token; instead the body carries an HMAC
/// token over the configured message/key pair, which the server verifies
/// against its own copy of the credentials.
pub struct PatientScheduleService {
    api: RestClient,
    secret_key: String,
    message: String,
}

impl PatientScheduleService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api: RestClient::new(config),
            secret_key: config.schedule_secret_key.clone(),
            message: config.schedule_message.clone(),
        }
    }

    pub async fn fetch_appointments(
        &self,
        date_of_birth: NaiveDate,
        patient_id: i64,
    ) -> Result<Vec<Appointment>, ApiError> {
        debug!("Fetching schedule for patient: {}", patient_id);

        let request = PatientScheduleRequest {
            received_hash: sign(self.message.as_bytes(), self.secret_key.as_bytes()),
            patient_id,
            patient_date_of_birth: date_of_birth.format("%Y-%m-%d").to_string(),
        };

        let body = serde_json::to_value(&request)?;
        self.api
            .request(Method::POST, "/api/patient-schedule", None, Some(body))
            .await
    }
}
