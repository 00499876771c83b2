use crate::models::Catalog;
use crate::prelude::*;
use super::page_content::PageContent;
use super::product_card::ProductCard;

use std::cell::RefCell;
use std::sync::OnceLock;

const CARD_ACTIVATED_SIGNAL: &str = "card-activated";

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/vn/vinescooter/vine_scooter/catalog_page.ui")]
    pub struct CatalogPage {
        #[template_child(id = "catalog-page-content")]
        pub content: TemplateChild<PageContent>,
        #[template_child(id = "catalog-page-flow-box")]
        pub flow_box: TemplateChild<gtk::FlowBox>,

        pub cards: RefCell<Vec<ProductCard>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for CatalogPage {
        const NAME: &'static str = "CatalogPage";
        type Type = super::CatalogPage;
        type ParentType = adw::NavigationPage;

        fn class_init(class: &mut Self::Class) {
            PageContent::ensure_type();
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for CatalogPage {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().setup_card_activation();
        }

        fn signals() -> &'static [glib::subclass::Signal] {
            static SIGNALS: OnceLock<[glib::subclass::Signal; 1]> = OnceLock::new();
            SIGNALS.get_or_init(|| {
                [
                    glib::subclass::Signal::builder(CARD_ACTIVATED_SIGNAL).param_types([str::static_type()]).build()
                ]
            })
        }
    }

    impl WidgetImpl for CatalogPage {}
    impl NavigationPageImpl for CatalogPage {}
}

glib::wrapper! {
    pub struct CatalogPage(ObjectSubclass<imp::CatalogPage>)
        @extends adw::NavigationPage, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl CatalogPage {
    fn setup_card_activation(&self) {
        let this_weak = self.downgrade();
        self.imp().flow_box.connect_child_activated(move |_, child| {
            if
                let Some(this) = this_weak.upgrade()
                && let Some(card) = child.downcast_ref::<ProductCard>()
            {
                this.emit_by_name::<()>(CARD_ACTIVATED_SIGNAL, &[&card.product_id()]);
            }
        });
    }

    pub fn content(&self) -> &PageContent {
        &self.imp().content
    }

    /// Rebuilds the card grid from a freshly fetched catalog; one card per
    /// entry, in catalog order.
    pub fn set_products(&self, catalog: &Catalog) {
        let imp = self.imp();
        let mut cards = imp.cards.borrow_mut();

        for card in cards.drain(..) {
            imp.flow_box.remove(&card);
        }

        for product in catalog.products() {
            let card = ProductCard::from_product(product);
            imp.flow_box.append(&card);
            cards.push(card);
        }
    }

    pub fn connect_card_activated<F>(&self, callback: F) -> glib::SignalHandlerId
    where
        F: Fn(&Self, &str) + 'static,
    {
        self.connect_local(CARD_ACTIVATED_SIGNAL, false, move |values| {
            let this = values[0].get::<Self>().unwrap();
            let product_id = values[1].get::<&str>().unwrap();
            callback(&this, product_id);
            None
        })
    }
}
