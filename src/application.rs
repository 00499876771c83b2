use std::cell::RefCell;
use std::rc::Rc;

use super::prelude::*;
use super::constants;
use super::catalog_client::CatalogClient;
use super::controllers::{
    ActionsController,
    CardActivationController,
    CatalogLoaderController,
    GalleryScrollController,
    OrderActivationController,
    ProductLoaderController,
};
use super::ui::Ui;
use super::widgets::Window;

struct Controllers {
    _actions: ActionsController,
    _catalog_loader: CatalogLoaderController,
    _product_loader: ProductLoaderController,
    _card_activation: CardActivationController,
    _gallery_scroll: GalleryScrollController,
    _order_activation: OrderActivationController,
}

impl Controllers {
    fn new(application: &adw::Application, ui: &Ui, client: &CatalogClient) -> Self {
        let product_loader = ProductLoaderController::new(ui.clone(), client.clone());
        let card_activation = CardActivationController::new(ui.clone(), product_loader.downgrade());

        Self {
            _actions: ActionsController::new(application.clone()),
            _catalog_loader: CatalogLoaderController::new(ui.clone(), client.clone()),
            _product_loader: product_loader,
            _card_activation: card_activation,
            _gallery_scroll: GalleryScrollController::new(ui.clone()),
            _order_activation: OrderActivationController::new(ui.clone()),
        }
    }
}

struct ApplicationState {
    application: adw::Application,
    client: CatalogClient,
    controllers: RefCell<Option<Controllers>>,
}

pub struct Application {
    state: Rc<ApplicationState>,
}

impl Application {

    pub fn new() -> Self {
        let application = adw::Application::new(
            Some(constants::APP_ID),
            adw::gio::ApplicationFlags::default()
        );

        let client = CatalogClient::new(constants::APP_CATALOG_URL);
        let state = Rc::new(ApplicationState {
            application,
            client,
            controllers: RefCell::new(None),
        });

        Self::setup_signals(&state);

        Self { state }
    }

    fn setup_signals(state: &Rc<ApplicationState>) {
        Self::setup_activate_event(state);
        Self::setup_startup_event(state);
    }

    fn setup_activate_event(state: &Rc<ApplicationState>) {
        let state_weak = Rc::downgrade(state);
        state.application.connect_activate(move |_application| {
            let Some(state) = state_weak.upgrade() else { return };
            let this = Self { state };
            this.setup_ui();
        });
    }

    fn setup_startup_event(state: &Rc<ApplicationState>) {
        state.application.connect_startup(move |_application| {
            Self::setup_resources().unwrap();
        });
    }

    fn setup_ui(&self) {
        let window = Window::new(&self.state.application);
        let ui = Ui::new(window);

        let controllers = Controllers::new(&self.state.application, &ui, &self.state.client);
        self.state.controllers.replace(Some(controllers));

        ui.activate();
        ui.window().present();
    }

    fn setup_resources() -> Result<()> {
        gtk::glib::set_application_name(constants::APP_TITLE);
        gtk::glib::set_prgname(Some(constants::APP_NAME));
        gtk::gio::resources_register_include_impl(constants::APP_RESOURCES)?;

        let css_provider = gtk::CssProvider::new();
        css_provider.load_from_resource(&format!("{}/style.css", constants::APP_PREFIX));

        let display = gtk::gdk::Display::default().context("Failed to add style provider")?;

        gtk::style_context_add_provider_for_display(
            &display,
            &css_provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );

        Ok(())
    }

    pub fn activate(&self) -> Result<()> {
        log::info!("{} {}", constants::APP_TITLE, constants::APP_VERSION);

        let result = self.state.application.run();
        if matches!(result, adw::glib::ExitCode::FAILURE) {
            bail!("Application exited with code {}", result.get());
        }

        Ok(())
    }

}
