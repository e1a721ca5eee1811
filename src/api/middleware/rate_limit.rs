//! Per-IP rate limiting for cart mutations and checkout.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Tokens replenished per second for each client IP.
const REQUESTS_PER_SECOND: u64 = 5;

/// Requests a client may issue in a burst before being throttled.
const BURST_SIZE: u32 = 30;

/// Creates the rate limiter applied to routes that write to the database.
///
/// Browsing pages is not limited; adding to and removing from the basket and
/// placing orders are. Requests exceeding the limit receive
/// `429 Too Many Requests`.
///
/// The key is the socket peer address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(REQUESTS_PER_SECOND)
            .burst_size(BURST_SIZE)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}
