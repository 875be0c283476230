use rhub_database::Database;
use rhub_domain::config::ApiConfig;
use rhub_domain::registry::{FeatureSlice, InitializedSlice};
use rhub_kernel::server::{ApiState, ApiStateError};

#[derive(Debug)]
struct DummySlice {
    label: &'static str,
}

impl FeatureSlice for DummySlice {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

async fn mem_database() -> Database {
    Database::builder().url("mem://").session("kernel_test", "state").init().await.expect("mem db")
}

#[tokio::test]
async fn builder_requires_config_and_database() {
    let err = ApiState::builder().build().unwrap_err();
    assert!(matches!(err, ApiStateError::Validation { .. }));
}

#[tokio::test]
async fn registered_slices_are_retrievable() {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .db(mem_database().await)
        .register_slice(InitializedSlice::new(DummySlice { label: "dummy" }))
        .build()
        .expect("state build");

    let slice = state.try_get_slice::<DummySlice>().expect("slice registered");
    assert_eq!(slice.label, "dummy");
    assert_eq!(state.slice_ids().count(), 1);
}

#[tokio::test]
async fn missing_slice_is_an_error() {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .db(mem_database().await)
        .build()
        .expect("state build");

    let err = state.try_get_slice::<DummySlice>().unwrap_err();
    assert!(matches!(err, ApiStateError::MissingSlice { .. }));
}
