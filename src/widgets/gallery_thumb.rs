use crate::image_loader;
use crate::prelude::*;

use std::cell::{Cell, RefCell};

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, glib::Properties)]
    #[template(resource = "/vn/vinescooter/vine_scooter/gallery_thumb.ui")]
    #[properties(wrapper_type = super::GalleryThumb)]
    pub struct GalleryThumb {
        #[template_child(id = "gallery-thumb-picture")]
        pub picture: TemplateChild<gtk::Picture>,

        #[property(get, construct_only)]
        pub uri: RefCell<String>,
        #[property(get, construct_only)]
        pub index: Cell<u32>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for GalleryThumb {
        const NAME: &'static str = "GalleryThumb";
        type Type = super::GalleryThumb;
        type ParentType = gtk::Button;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    #[glib::derived_properties]
    impl ObjectImpl for GalleryThumb {
        fn constructed(&self) {
            self.parent_constructed();
            image_loader::load_into_picture(&self.picture.get(), &self.obj().uri());
        }
    }

    impl WidgetImpl for GalleryThumb {}
    impl ButtonImpl for GalleryThumb {}
}

glib::wrapper! {
    pub struct GalleryThumb(ObjectSubclass<imp::GalleryThumb>)
        @extends gtk::Button, gtk::Widget,
        @implements gtk::Accessible, gtk::Actionable, gtk::Buildable, gtk::ConstraintTarget;
}

impl GalleryThumb {
    pub fn new(uri: &str, index: usize) -> Self {
        glib::Object::builder()
            .property("uri", uri)
            .property("index", index as u32)
            .build()
    }

    pub fn set_selected(&self, selected: bool) {
        if selected {
            self.add_css_class("selected");
        } else {
            self.remove_css_class("selected");
        }
    }
}
