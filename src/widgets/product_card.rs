use crate::image_loader;
use crate::models::Product;
use crate::prelude::*;

use std::cell::RefCell;

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, glib::Properties)]
    #[template(resource = "/vn/vinescooter/vine_scooter/product_card.ui")]
    #[properties(wrapper_type = super::ProductCard)]
    pub struct ProductCard {
        #[template_child(id = "product-card-picture")]
        pub picture: TemplateChild<gtk::Picture>,
        #[template_child(id = "product-card-name")]
        pub name_label: TemplateChild<gtk::Label>,
        #[template_child(id = "product-card-price")]
        pub price_label: TemplateChild<gtk::Label>,

        #[property(get, construct_only)]
        pub product_id: RefCell<String>,
        #[property(get, construct_only)]
        pub name: RefCell<String>,
        #[property(get, construct_only)]
        pub price: RefCell<String>,
        #[property(get, construct_only)]
        pub thumbnail: RefCell<String>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for ProductCard {
        const NAME: &'static str = "ProductCard";
        type Type = super::ProductCard;
        type ParentType = gtk::FlowBoxChild;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    #[glib::derived_properties]
    impl ObjectImpl for ProductCard {
        fn constructed(&self) {
            self.parent_constructed();
            let this = self.obj();
            self.name_label.set_text(&this.name());
            self.price_label.set_text(&this.price());
            image_loader::load_into_picture(&self.picture.get(), &this.thumbnail());
        }
    }

    impl WidgetImpl for ProductCard {}
    impl FlowBoxChildImpl for ProductCard {}
}

glib::wrapper! {
    pub struct ProductCard(ObjectSubclass<imp::ProductCard>)
        @extends gtk::FlowBoxChild, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl ProductCard {
    pub fn from_product(product: &Product) -> Self {
        glib::Object::builder()
            .property("product-id", &product.id)
            .property("name", &product.name)
            .property("price", &product.price)
            .property("thumbnail", &product.thumbnail)
            .build()
    }
}
