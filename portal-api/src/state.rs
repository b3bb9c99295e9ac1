use portal_core::ShiftCalculator;

/// Settings shared with every handler, built once from the config file
#[derive(Debug, Clone)]
pub struct PortalState {
    /// Namespace of the portal's collections in the document store
    pub app_id: String,
    pub shift_calculator: ShiftCalculator,
}

impl PortalState {
    pub fn new(app_id: impl Into<String>, shift_calculator: ShiftCalculator) -> Self {
        Self {
            app_id: app_id.into(),
            shift_calculator,
        }
    }
}
