use std::sync::Arc;

use glowcheck_core::application::GlowcheckService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<GlowcheckService>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: GlowcheckService) -> Self {
        Self {
            args,
            service: Arc::new(service),
        }
    }
}
