use crate::models::Product;
use crate::prelude::*;
use super::gallery::Gallery;
use super::page_content::PageContent;

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/vn/vinescooter/vine_scooter/product_page.ui")]
    pub struct ProductPage {
        #[template_child(id = "product-page-content")]
        pub content: TemplateChild<PageContent>,
        #[template_child(id = "product-page-gallery")]
        pub gallery: TemplateChild<Gallery>,
        #[template_child(id = "product-page-name")]
        pub name_label: TemplateChild<gtk::Label>,
        #[template_child(id = "product-page-price")]
        pub price_label: TemplateChild<gtk::Label>,
        #[template_child(id = "product-page-details-section")]
        pub details_section: TemplateChild<gtk::Box>,
        #[template_child(id = "product-page-details")]
        pub details_label: TemplateChild<gtk::Label>,
        #[template_child(id = "product-page-order-button")]
        pub order_button: TemplateChild<gtk::Button>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for ProductPage {
        const NAME: &'static str = "ProductPage";
        type Type = super::ProductPage;
        type ParentType = adw::NavigationPage;

        fn class_init(class: &mut Self::Class) {
            PageContent::ensure_type();
            Gallery::ensure_type();
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for ProductPage {}
    impl WidgetImpl for ProductPage {}
    impl NavigationPageImpl for ProductPage {}
}

glib::wrapper! {
    pub struct ProductPage(ObjectSubclass<imp::ProductPage>)
        @extends adw::NavigationPage, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl ProductPage {
    pub fn content(&self) -> &PageContent {
        &self.imp().content
    }

    pub fn gallery(&self) -> &Gallery {
        &self.imp().gallery
    }

    pub fn order_button(&self) -> &gtk::Button {
        &self.imp().order_button
    }

    /// Fills the detail view from a freshly resolved product.
    pub fn set_product(&self, product: &Product) {
        let imp = self.imp();
        self.set_title(&product.name);
        imp.name_label.set_text(&product.name);
        imp.price_label.set_text(&format!("Giá: {}", product.price));
        imp.details_section.set_visible(!product.details.is_empty());
        imp.details_label.set_text(&product.details);
        imp.gallery.show_images(&product.images, product.cover_image());
    }
}
