pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
pub const DELIVERY_ERROR: &str = "DELIVERY_ERROR";
