use thiserror::Error;

/// Input rejected before any geometry is computed.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PlacementError {
    #[error("{what} is not finite")]
    NonFinite { what: &'static str },
    #[error("{what} has a negative size ({width} x {height})")]
    NegativeSize {
        what: &'static str,
        width: f32,
        height: f32,
    },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown placement `{0}`")]
pub struct ParsePlacementError(pub String);
