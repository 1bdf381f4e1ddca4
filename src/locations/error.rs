use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Unknown region '{0}'")]
    UnknownRegion(String),

    #[error("Invalid coordinates for '{name}': latitude {latitude} must be -90 to 90, longitude {longitude} must be -180 to 180")]
    InvalidCoordinates {
        name: String,
        latitude: f64,
        longitude: f64,
    },

    #[error("Region '{0}' is listed more than once")]
    DuplicateName(String),

    #[error("Location table is empty")]
    EmptyTable,

    #[error("Failed to parse location table JSON")]
    JsonParse(#[from] serde_json::Error),
}
