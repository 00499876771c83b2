use crate::catalog_client::{CatalogClient, FetchError};
use crate::models::Catalog;
use crate::prelude::*;
use crate::ui::Ui;

use gtk::gio;
use std::cell::Cell;
use std::rc::{Rc, Weak};

const LOAD_FAILED_MESSAGE: &str = "Failed to load product. Please try again later.";
const NOT_FOUND_MESSAGE: &str = "Product not found";
const PLACEHOLDER_TITLE: &str = "Product";

struct State {
    ui: Ui,
    client: CatalogClient,
    generation: Cell<u64>,
}

pub struct WeakProductLoader {
    state: Weak<State>,
}

impl WeakProductLoader {
    pub fn upgrade(&self) -> Option<ProductLoader> {
        self.state.upgrade().map(|state| ProductLoader { state })
    }
}

pub struct ProductLoader {
    state: Rc<State>,
}

impl ProductLoader {

    pub fn new(ui: Ui, client: CatalogClient) -> Self {
        let state = State { ui, client, generation: Cell::new(0) };
        let this = Self { state: Rc::new(state) };
        this.setup_discard_on_hide();
        this
    }

    /// Leaving the detail page tears the screen down; a result that arrives
    /// afterwards must be discarded, not applied.
    fn setup_discard_on_hide(&self) {
        let this_weak = self.downgrade();
        self.state.ui.product_page().connect_hidden(move |_| {
            if let Some(this) = this_weak.upgrade() {
                this.invalidate();
            }
        });
    }

    /// Fetches the catalog and resolves `product_id` in it; called on every
    /// navigation to the detail page, and again whenever a different card
    /// is activated.
    pub fn load(&self, product_id: &str) {
        let generation = self.invalidate();
        let product_page = self.state.ui.product_page();
        product_page.set_title(PLACEHOLDER_TITLE);
        product_page.content().show_loading();

        let client = self.state.client.clone();
        let id = product_id.to_owned();
        let this_weak = self.downgrade();
        glib::spawn_future_local(async move {
            let result = gio::spawn_blocking(move || client.fetch()).await;
            let Some(this) = this_weak.upgrade() else { return };
            if this.state.generation.get() != generation {
                return;
            }
            match result {
                Ok(result) => this.apply(&id, result),
                Err(_) => this.show_error(LOAD_FAILED_MESSAGE),
            }
        });
    }

    fn invalidate(&self) -> u64 {
        let generation = self.state.generation.get().wrapping_add(1);
        self.state.generation.set(generation);
        generation
    }

    fn apply(&self, product_id: &str, result: Result<Catalog, FetchError>) {
        let catalog = match result {
            Ok(catalog) => catalog,
            Err(error) => {
                log::warn!("product fetch failed: {error}");
                self.show_error(LOAD_FAILED_MESSAGE);
                return;
            }
        };

        let Some(product) = catalog.product(product_id) else {
            log::warn!("product `{product_id}` is not in the catalog");
            self.show_error(NOT_FOUND_MESSAGE);
            return;
        };

        let product_page = self.state.ui.product_page();
        product_page.set_product(product);
        product_page.content().show_content();
        product_page.content().scroll_to_top();
    }

    fn show_error(&self, message: &str) {
        self.state.ui.product_page().content().show_error(message);
    }

    pub fn downgrade(&self) -> WeakProductLoader {
        let state = Rc::downgrade(&self.state);
        WeakProductLoader { state }
    }

}
