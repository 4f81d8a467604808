use boxoffice_core::Venue;
use boxoffice_engine::SeatEngine;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub venue: Venue,
    pub engine: Arc<SeatEngine>,
}

impl AppState {
    pub fn new(venue: Venue, engine: Arc<SeatEngine>) -> Self {
        Self { venue, engine }
    }
}
