use crate::constants;
use crate::prelude::*;
use crate::ui::Ui;

use std::rc::{Rc, Weak};

struct State {
    ui: Ui,
}

struct WeakOrderActivation {
    state: Weak<State>,
}

impl WeakOrderActivation {
    fn upgrade(&self) -> Option<OrderActivation> {
        self.state.upgrade().map(|state| OrderActivation { state })
    }
}

pub struct OrderActivation {
    state: Rc<State>,
}

impl OrderActivation {

    pub fn new(ui: Ui) -> Self {
        let state = State { ui };
        let this = Self { state: Rc::new(state) };
        this.setup_order_button();
        this
    }

    fn setup_order_button(&self) {
        let this_weak = self.downgrade();
        self.state.ui.product_page().order_button().connect_clicked(move |_| {
            if let Some(this) = this_weak.upgrade() {
                this.launch_order_uri();
            }
        });
    }

    /// Hands the customer over to the chat service in the system handler.
    fn launch_order_uri(&self) {
        let window = self.state.ui.window();
        let window_weak = window.downgrade();
        gtk::UriLauncher::new(constants::APP_ORDER_URI).launch(
            Some(window),
            None::<&gtk::gio::Cancellable>,
            move |result| {
                if let Err(error) = result {
                    log::warn!("failed to open {}: {error}", constants::APP_ORDER_URI);
                    if let Some(window) = window_weak.upgrade() {
                        window.toast("Failed to open the chat service");
                    }
                }
            },
        );
    }

    fn downgrade(&self) -> WeakOrderActivation {
        let state = Rc::downgrade(&self.state);
        WeakOrderActivation { state }
    }

}
