pub mod checkin;
pub mod geofence;
pub mod risk;
pub mod window;
