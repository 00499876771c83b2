use crate::catalog_client::{CatalogClient, FetchError};
use crate::models::Catalog;
use crate::prelude::*;
use crate::ui::Ui;

use gtk::gio;
use std::cell::Cell;
use std::rc::{Rc, Weak};

const LOAD_FAILED_MESSAGE: &str = "Failed to load products. Please try again later.";

struct State {
    ui: Ui,
    client: CatalogClient,
    generation: Cell<u64>,
}

struct WeakCatalogLoader {
    state: Weak<State>,
}

impl WeakCatalogLoader {
    fn upgrade(&self) -> Option<CatalogLoader> {
        self.state.upgrade().map(|state| CatalogLoader { state })
    }
}

pub struct CatalogLoader {
    state: Rc<State>,
}

impl CatalogLoader {

    pub fn new(ui: Ui, client: CatalogClient) -> Self {
        let state = State { ui, client, generation: Cell::new(0) };
        let this = Self { state: Rc::new(state) };
        this.setup_load_on_mount();
        this.setup_discard_on_unmount();
        this
    }

    /// Every mapping of the catalog page is a fresh mount: one fetch each,
    /// including the initial presentation and every pop back from the
    /// detail page.
    fn setup_load_on_mount(&self) {
        let this_weak = self.downgrade();
        self.state.ui.catalog_page().connect_map(move |_| {
            if let Some(this) = this_weak.upgrade() {
                this.load();
            }
        });
    }

    fn setup_discard_on_unmount(&self) {
        let this_weak = self.downgrade();
        self.state.ui.catalog_page().connect_unmap(move |_| {
            if let Some(this) = this_weak.upgrade() {
                this.invalidate();
            }
        });
    }

    pub fn load(&self) {
        let generation = self.invalidate();
        self.state.ui.catalog_page().content().show_loading();

        let client = self.state.client.clone();
        let this_weak = self.downgrade();
        glib::spawn_future_local(async move {
            let result = gio::spawn_blocking(move || client.fetch()).await;
            let Some(this) = this_weak.upgrade() else { return };
            if this.state.generation.get() != generation {
                return;
            }
            match result {
                Ok(result) => this.apply(result),
                Err(_) => this.show_error(),
            }
        });
    }

    /// Bumps the generation so any in-flight completion is discarded.
    fn invalidate(&self) -> u64 {
        let generation = self.state.generation.get().wrapping_add(1);
        self.state.generation.set(generation);
        generation
    }

    fn apply(&self, result: Result<Catalog, FetchError>) {
        match result {
            Ok(catalog) => {
                if catalog.is_empty() {
                    log::info!("catalog loaded empty");
                } else {
                    log::info!("catalog loaded with {} products", catalog.len());
                }

                let catalog_page = self.state.ui.catalog_page();
                catalog_page.set_products(&catalog);
                catalog_page.content().show_content();
            }
            Err(error) => {
                log::warn!("catalog fetch failed: {error}");
                self.show_error();
            }
        }
    }

    fn show_error(&self) {
        self.state.ui.catalog_page().content().show_error(LOAD_FAILED_MESSAGE);
    }

    fn downgrade(&self) -> WeakCatalogLoader {
        let state = Rc::downgrade(&self.state);
        WeakCatalogLoader { state }
    }

}
