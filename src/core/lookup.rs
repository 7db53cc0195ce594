use crate::core::{LookupOutcome, VinDecoder, Vin};
use crate::utils::error::Result;

pub struct LookupEngine<D: VinDecoder> {
    decoder: D,
}

impl<D: VinDecoder> LookupEngine<D> {
    pub fn new(decoder: D) -> Self {
        Self { decoder }
    }

    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// Format check only. Never touches the decoder.
    pub fn validate(&self, input: &str) -> Result<Vin> {
        let vin = Vin::parse(input);
        if let Err(e) = &vin {
            tracing::debug!("VIN {:?} rejected: {}", input, e);
        }
        vin
    }

    /// One decoder call; no retry, no partial results.
    pub async fn lookup(&self, vin: &Vin) -> LookupOutcome {
        tracing::debug!("Decoding VIN {}", vin);

        match self.decoder.decode(vin).await {
            Ok(fields) => match fields.clone().into_complete() {
                Some(info) => {
                    tracing::info!(
                        "VIN {} decoded: {} {} {}",
                        vin,
                        info.year,
                        info.make,
                        info.model
                    );
                    LookupOutcome::Decoded(info)
                }
                None => {
                    tracing::warn!("Incomplete vehicle data for VIN {}: {:?}", vin, fields);
                    LookupOutcome::Incomplete
                }
            },
            Err(e) => {
                tracing::error!(
                    "Lookup for VIN {} failed: {} (Category: {:?})",
                    vin,
                    e,
                    e.category()
                );
                LookupOutcome::Failed(e)
            }
        }
    }

    pub async fn run(&self, input: &str) -> LookupOutcome {
        match self.validate(input) {
            Ok(vin) => self.lookup(&vin).await,
            Err(e) => LookupOutcome::Failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::VehicleFields;
    use crate::utils::error::VinError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone)]
    enum Reply {
        Fields(VehicleFields),
        Status(u16),
    }

    #[derive(Clone)]
    struct MockDecoder {
        reply: Reply,
        calls: Arc<AtomicUsize>,
    }

    impl MockDecoder {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl VinDecoder for MockDecoder {
        async fn decode(&self, _vin: &Vin) -> Result<VehicleFields> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Reply::Fields(f) => Ok(f.clone()),
                Reply::Status(status) => Err(VinError::ServiceStatusError { status: *status }),
            }
        }
    }

    fn accord() -> VehicleFields {
        VehicleFields {
            year: Some("2003".to_string()),
            make: Some("HONDA".to_string()),
            model: Some("Accord".to_string()),
        }
    }

    #[tokio::test]
    async fn test_valid_vin_decodes_with_single_call() {
        let engine = LookupEngine::new(MockDecoder::new(Reply::Fields(accord())));

        let outcome = engine.run("1HGCM82633A004352").await;

        let info = outcome.vehicle().expect("decoded");
        assert_eq!(info.make, "HONDA");
        assert_eq!(info.model, "Accord");
        assert_eq!(info.year, "2003");
        assert_eq!(engine.decoder().calls(), 1);
    }

    #[tokio::test]
    async fn test_short_vin_never_reaches_decoder() {
        let engine = LookupEngine::new(MockDecoder::new(Reply::Fields(accord())));

        let outcome = engine.run("1HGCM82633A00435").await;

        assert!(matches!(
            outcome.error(),
            Some(VinError::VinLengthError { length: 16 })
        ));
        assert_eq!(engine.decoder().calls(), 0);
    }

    #[tokio::test]
    async fn test_vin_with_q_never_reaches_decoder() {
        let engine = LookupEngine::new(MockDecoder::new(Reply::Fields(accord())));

        let outcome = engine.run("1HGCM82633Q004352").await;

        assert!(matches!(
            outcome.error(),
            Some(VinError::VinAlphabetError { invalid: 'Q' })
        ));
        assert_eq!(engine.decoder().calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_field_is_incomplete() {
        let mut partial = accord();
        partial.model = None;
        let engine = LookupEngine::new(MockDecoder::new(Reply::Fields(partial)));

        let outcome = engine.run("1HGCM82633A004352").await;

        assert!(matches!(outcome, LookupOutcome::Incomplete));
        assert!(outcome.vehicle().is_none());
        assert_eq!(engine.decoder().calls(), 1);
    }

    #[tokio::test]
    async fn test_service_error_is_not_retried() {
        let engine = LookupEngine::new(MockDecoder::new(Reply::Status(500)));

        let outcome = engine.run("1HGCM82633A004352").await;

        assert!(matches!(
            outcome.error(),
            Some(VinError::ServiceStatusError { status: 500 })
        ));
        assert_eq!(engine.decoder().calls(), 1);
    }
}
