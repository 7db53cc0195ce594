pub mod lookup;

pub use crate::domain::model::{LookupOutcome, VehicleFields, VehicleInfo, Vin};
pub use crate::domain::ports::{ConfigProvider, VinDecoder};
pub use crate::utils::error::Result;
