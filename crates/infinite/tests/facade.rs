#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use infinite::core::protocol::ops::IndexResponse;
use infinite::gateway::{app_state::AppState, config, router};

#[test]
fn facade_exposes_core_and_gateway() {
    let cfg = config::load(|_| None).unwrap();
    let state = AppState::new(cfg);
    let _app = router::build_router(state.clone());
    assert_eq!(IndexResponse::default().endpoints.health, "/health");
    assert!(state.metrics().render().contains("# TYPE http_requests_total counter"));
}
