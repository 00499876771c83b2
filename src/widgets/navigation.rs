use crate::prelude::*;
use super::catalog_page::CatalogPage;
use super::product_page::ProductPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationPage {
    Catalog,
    Product,
}

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/vn/vinescooter/vine_scooter/navigation.ui")]
    pub struct Navigation {
        #[template_child(id = "navigation-view")]
        pub view: TemplateChild<adw::NavigationView>,
        #[template_child(id = "catalog-page")]
        pub catalog_page: TemplateChild<CatalogPage>,
        #[template_child(id = "product-page")]
        pub product_page: TemplateChild<ProductPage>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for Navigation {
        const NAME: &'static str = "Navigation";
        type Type = super::Navigation;
        type ParentType = adw::Bin;

        fn class_init(class: &mut Self::Class) {
            CatalogPage::ensure_type();
            ProductPage::ensure_type();
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for Navigation {}
    impl WidgetImpl for Navigation {}
    impl BinImpl for Navigation {}
}

glib::wrapper! {
    pub struct Navigation(ObjectSubclass<imp::Navigation>)
        @extends adw::Bin, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl Navigation {
    pub fn catalog_page(&self) -> &CatalogPage {
        &self.imp().catalog_page
    }

    pub fn product_page(&self) -> &ProductPage {
        &self.imp().product_page
    }

    pub fn push_page(&self, page: NavigationPage) {
        let view: &adw::NavigationView = &self.imp().view;

        let widget: &adw::NavigationPage = match page {
            NavigationPage::Catalog => self.catalog_page().upcast_ref(),
            NavigationPage::Product => self.product_page().upcast_ref(),
        };

        view.push(widget);
    }

    pub fn replace_with_page(&self, page: NavigationPage) {
        let view: &adw::NavigationView = &self.imp().view;

        let widget: adw::NavigationPage = match page {
            NavigationPage::Catalog => self.catalog_page().clone().upcast(),
            NavigationPage::Product => self.product_page().clone().upcast(),
        };

        view.replace(&[widget]);
    }
}
