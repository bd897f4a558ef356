use portal_business::{BusinessConfig, UsersApiError, register};
use portal_states::StateCtx;

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl State {
    pub fn new(config: BusinessConfig) -> Result<Self, UsersApiError> {
        let mut ctx = StateCtx::new();
        register(&mut ctx, config)?;
        Ok(Self { ctx })
    }

    /// State pointed at a mock backend.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be built.
    pub fn test(base_url: String) -> Self {
        match Self::new(BusinessConfig::new(base_url)) {
            Ok(state) => state,
            Err(err) => panic!("test state: {err}"),
        }
    }
}
