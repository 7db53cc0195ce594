use crate::domain::model::{VehicleFields, Vin};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait VinDecoder: Send + Sync {
    async fn decode(&self, vin: &Vin) -> Result<VehicleFields>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn logo_image(&self) -> &str;
    fn car_image(&self) -> &str;
    fn show_banner(&self) -> bool;
}
