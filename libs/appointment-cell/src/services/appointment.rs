use chrono::NaiveDate;
use reqwest::Method;
use tracing::debug;

use shared_config::AppConfig;
use shared_http::RestClient;
use shared_models::appointment::{
    Appointment, AppointmentRequest, AppointmentType, AppointmentUpdateRequest,
};
use shared_models::doctor::Doctor;
use shared_models::error::ApiError;

/// Wrapper around the appointment endpoints of the clinic API.
///
/// Every method is a single round trip: build the path or body, await the
/// response, hand the parsed payload back unchanged. Failures arrive already
/// normalized by the REST client and are propagated as-is.
pub struct AppointmentService {
    api: RestClient,
    auth_token: Option<String>,
}

impl AppointmentService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api: RestClient::new(config),
            auth_token: None,
        }
    }

    /// Attach a session token to every outgoing call.
    pub fn with_session(config: &AppConfig, auth_token: impl Into<String>) -> Self {
        Self {
            api: RestClient::new(config),
            auth_token: Some(auth_token.into()),
        }
    }

    fn token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    /// Free slots for a doctor on a given date, optionally for the whole
    /// week around it.
    pub async fn get_free_slots(
        &self,
        doctor_id: i64,
        date: NaiveDate,
        appointment_type: AppointmentType,
        week_view: bool,
    ) -> Result<Vec<String>, ApiError> {
        debug!("Fetching free slots for doctor: {}", doctor_id);

        let mut path = format!(
            "/api/appointments/free-slots?doctorId={}&appointmentType={}&date={}",
            doctor_id,
            appointment_type,
            date.format("%Y-%m-%d")
        );
        if week_view {
            path.push_str("&weekView=true");
        }

        self.api.request(Method::GET, &path, self.token(), None).await
    }

    pub async fn fetch_doctors(&self) -> Result<Vec<Doctor>, ApiError> {
        debug!("Fetching doctor list");

        self.api
            .request(Method::GET, "/api/appointments/doctors", self.token(), None)
            .await
    }

    pub async fn create_appointment(
        &self,
        request: &AppointmentRequest,
    ) -> Result<Appointment, ApiError> {
        debug!("Creating appointment with doctor: {}", request.doctor_id);

        let body = serde_json::to_value(request)?;
        self.api
            .request(Method::POST, "/api/appointments", self.token(), Some(body))
            .await
    }

    pub async fn get_appointment(&self, appointment_id: i64) -> Result<Appointment, ApiError> {
        debug!("Fetching appointment: {}", appointment_id);

        let path = format!("/api/appointments?appointmentId={}", appointment_id);
        self.api.request(Method::GET, &path, self.token(), None).await
    }

    /// Booked appointments for a doctor on a date, optionally for the whole
    /// week around it.
    pub async fn get_appointments_for_doctor(
        &self,
        doctor_id: i64,
        date: NaiveDate,
        week_view: bool,
    ) -> Result<Vec<Appointment>, ApiError> {
        debug!("Fetching booked appointments for doctor: {}", doctor_id);

        let mut path = format!(
            "/api/appointments/booked?doctorId={}&date={}",
            doctor_id,
            date.format("%Y-%m-%d")
        );
        if week_view {
            path.push_str("&weekView=true");
        }

        self.api.request(Method::GET, &path, self.token(), None).await
    }

    pub async fn update_appointment(
        &self,
        request: &AppointmentUpdateRequest,
    ) -> Result<Appointment, ApiError> {
        debug!("Updating appointment: {}", request.id);

        let body = serde_json::to_value(request)?;
        self.api
            .request(Method::PUT, "/api/appointments", self.token(), Some(body))
            .await
    }

    pub async fn delete_appointment(&self, appointment_id: i64) -> Result<(), ApiError> {
        debug!("Deleting appointment: {}", appointment_id);

        let path = format!("/api/appointments/{}", appointment_id);
        self.api
            .request_no_content(Method::DELETE, &path, self.token())
            .await
    }
}
