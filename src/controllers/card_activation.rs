use crate::prelude::*;
use crate::ui::Ui;
use crate::widgets::NavigationPage;
use super::product_loader::WeakProductLoader;

use std::rc::{Rc, Weak};

struct State {
    ui: Ui,
    loader: WeakProductLoader,
}

struct WeakCardActivation {
    state: Weak<State>,
}

impl WeakCardActivation {
    fn upgrade(&self) -> Option<CardActivation> {
        self.state.upgrade().map(|state| CardActivation { state })
    }
}

pub struct CardActivation {
    state: Rc<State>,
}

impl CardActivation {

    pub fn new(ui: Ui, loader: WeakProductLoader) -> Self {
        let state = State { ui, loader };
        let this = Self { state: Rc::new(state) };
        this.setup_card_activation();
        this
    }

    fn setup_card_activation(&self) {
        let this_weak = self.downgrade();
        self.state.ui.catalog_page().connect_card_activated(move |_, product_id| {
            if let Some(this) = this_weak.upgrade() {
                this.navigate_to_product(product_id);
            }
        });
    }

    fn navigate_to_product(&self, product_id: &str) {
        let Some(loader) = self.state.loader.upgrade() else { return };
        loader.load(product_id);
        self.state.ui.navigation().push_page(NavigationPage::Product);
    }

    fn downgrade(&self) -> WeakCardActivation {
        let state = Rc::downgrade(&self.state);
        WeakCardActivation { state }
    }

}
