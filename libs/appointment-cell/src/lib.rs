pub mod services;

pub use services::appointment::AppointmentService;
