/// Visualization tab shown under the input panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ActiveView {
    #[default]
    Basic,
    Confidence,
    Comparison,
    Model,
}

impl ActiveView {
    /// Tabs in the order they appear in the tab strip.
    pub const ALL: [ActiveView; 4] = [
        ActiveView::Basic,
        ActiveView::Confidence,
        ActiveView::Comparison,
        ActiveView::Model,
    ];

    /// Stable identifier, used for egui ids and logging.
    pub fn id(self) -> &'static str {
        match self {
            ActiveView::Basic => "basic",
            ActiveView::Confidence => "confidence",
            ActiveView::Comparison => "comparison",
            ActiveView::Model => "model",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActiveView::Basic => "Basic Results",
            ActiveView::Confidence => "Prediction & Features",
            ActiveView::Comparison => "Bot vs Human Analysis",
            ActiveView::Model => "Model Performance",
        }
    }

    /// Whether the panel is derived from the held classification result.
    pub fn requires_result(self) -> bool {
        !matches!(self, ActiveView::Model)
    }
}

/// Tab selection. Only changed by an explicit user click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    active: ActiveView,
}

impl ViewState {
    pub fn active(&self) -> ActiveView {
        self.active
    }

    /// Switch tabs; returns `true` when the selection actually changed.
    pub fn select(&mut self, view: ActiveView) -> bool {
        if self.active == view {
            return false;
        }
        self.active = view;
        true
    }
}
