use super::widgets::{
    CatalogPage,
    Gallery,
    Navigation,
    NavigationPage,
    ProductPage,
    Window,
};

use std::rc::Rc;

#[derive(Clone)]
pub struct Ui {
    window: Rc<Window>,
}

impl Ui {

    pub fn new(window: Window) -> Self {
        Self { window: Rc::new(window) }
    }

    /// Normalizes the navigation stack to the catalog listing; any other
    /// starting point redirects here.
    pub fn activate(&self) {
        self.navigation().replace_with_page(NavigationPage::Catalog);
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn navigation(&self) -> &Navigation {
        self.window.navigation()
    }

    pub fn catalog_page(&self) -> &CatalogPage {
        self.navigation().catalog_page()
    }

    pub fn product_page(&self) -> &ProductPage {
        self.navigation().product_page()
    }

    pub fn gallery(&self) -> &Gallery {
        self.product_page().gallery()
    }

}
