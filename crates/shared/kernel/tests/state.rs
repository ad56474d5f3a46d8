use corbas_kernel::domain::components::PipelineComponents;
use corbas_kernel::domain::config::ApiConfig;
use corbas_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use corbas_kernel::server::{ApiState, ApiStateError};
use std::any::Any;

#[derive(Debug, PartialEq)]
struct Counter(u32);

impl FeatureSlice for Counter {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
struct Unregistered;

impl FeatureSlice for Unregistered {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn build_requires_config() {
    let err = ApiState::builder().build().expect_err("config is mandatory");
    assert!(matches!(err, ApiStateError::Validation { .. }));
}

#[test]
fn registered_slices_are_retrievable() {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .components(PipelineComponents::ALL)
        .register_slices([InitializedSlice::new(Counter(7))])
        .build()
        .expect("state should build");

    assert_eq!(state.get_slice::<Counter>(), Some(&Counter(7)));
    assert_eq!(state.components, PipelineComponents::ALL);
    assert_eq!(state.slice_names().count(), 1);
}

#[test]
fn missing_slice_is_an_error() {
    let state = ApiState::builder().config(ApiConfig::default()).build().expect("state");

    assert!(state.get_slice::<Unregistered>().is_none());
    let err = state.try_get_slice::<Unregistered>().expect_err("slice was never registered");
    assert!(matches!(err, ApiStateError::MissingSlice { .. }));
}
