use crate::types::liquidation::Liquidation;

/// State of the liquidate dialog. A closed dialog holds no selection.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DialogState {
    pub liquidation: Option<Liquidation>,
    pub visible: bool,
}

impl DialogState {
    pub fn open(&mut self, liquidation: Liquidation) {
        self.liquidation = Some(liquidation);
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.liquidation = None;
        self.visible = false;
    }

    /// Visibility toggle owned by the dialog itself, keeps the selection
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }
}
