use crate::error::BlipError;

pub type Result<T> = std::result::Result<T, BlipError>;
