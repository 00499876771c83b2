use crate::constants;
use crate::image_loader;
use crate::prelude::*;
use super::gallery_thumb::GalleryThumb;

use std::cell::{Cell, RefCell};

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/vn/vinescooter/vine_scooter/gallery.ui")]
    pub struct Gallery {
        #[template_child(id = "gallery-picture")]
        pub picture: TemplateChild<gtk::Picture>,
        #[template_child(id = "gallery-strip-controls")]
        pub strip_controls: TemplateChild<gtk::Box>,
        #[template_child(id = "gallery-strip-window")]
        pub strip_window: TemplateChild<gtk::ScrolledWindow>,
        #[template_child(id = "gallery-strip")]
        pub strip: TemplateChild<gtk::Box>,
        #[template_child(id = "gallery-scroll-left")]
        pub scroll_left_button: TemplateChild<gtk::Button>,
        #[template_child(id = "gallery-scroll-right")]
        pub scroll_right_button: TemplateChild<gtk::Button>,

        pub thumbs: RefCell<Vec<GalleryThumb>>,
        pub selected: Cell<Option<usize>>,
        pub image_generation: Cell<u64>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for Gallery {
        const NAME: &'static str = "Gallery";
        type Type = super::Gallery;
        type ParentType = gtk::Box;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for Gallery {}
    impl WidgetImpl for Gallery {}
    impl BoxImpl for Gallery {}
}

glib::wrapper! {
    pub struct Gallery(ObjectSubclass<imp::Gallery>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl Gallery {
    /// Replaces the gallery contents for a newly shown product. The first
    /// gallery image starts selected; without gallery images the strip is
    /// hidden and the main picture shows `fallback`.
    pub fn show_images(&self, images: &[String], fallback: &str) {
        let imp = self.imp();
        imp.selected.set(None);

        let mut thumbs = imp.thumbs.borrow_mut();
        for thumb in thumbs.drain(..) {
            imp.strip.remove(&thumb);
        }

        for (index, uri) in images.iter().enumerate() {
            let thumb = GalleryThumb::new(uri, index);
            self.setup_thumb_activation(&thumb);
            imp.strip.append(&thumb);
            thumbs.push(thumb);
        }
        drop(thumbs);

        imp.strip_controls.set_visible(!images.is_empty());
        imp.strip_window.hadjustment().set_value(0.0);

        if images.is_empty() {
            self.display_image(fallback);
        } else {
            self.select(0);
        }
    }

    /// Marks the thumbnail at `index` selected and swaps the main picture
    /// to exactly that thumbnail's image.
    pub fn select(&self, index: usize) {
        let imp = self.imp();
        if imp.selected.get() == Some(index) {
            return;
        }

        let thumbs = imp.thumbs.borrow();
        let Some(thumb) = thumbs.get(index) else { return };

        if
            let Some(previous) = imp.selected.get()
            && let Some(previous_thumb) = thumbs.get(previous)
        {
            previous_thumb.set_selected(false);
        }

        thumb.set_selected(true);
        imp.selected.set(Some(index));
        let uri = thumb.uri();
        drop(thumbs);

        self.display_image(&uri);
    }

    fn setup_thumb_activation(&self, thumb: &GalleryThumb) {
        let this_weak = self.downgrade();
        thumb.connect_clicked(move |thumb| {
            if let Some(this) = this_weak.upgrade() {
                this.select(thumb.index() as usize);
            }
        });
    }

    /// Loads `uri` into the main picture; only the newest request wins.
    fn display_image(&self, uri: &str) {
        let imp = self.imp();
        let generation = imp.image_generation.get().wrapping_add(1);
        imp.image_generation.set(generation);

        if uri.is_empty() {
            imp.picture.set_resource(Some(constants::APP_PLACEHOLDER_RESOURCE));
            return;
        }

        let this_weak = self.downgrade();
        image_loader::load_texture(uri, move |texture| {
            let Some(this) = this_weak.upgrade() else { return };
            if this.imp().image_generation.get() != generation {
                return;
            }
            match texture {
                Some(texture) => this.imp().picture.set_paintable(Some(&texture)),
                None => this.imp().picture.set_resource(Some(constants::APP_PLACEHOLDER_RESOURCE)),
            }
        });
    }

    pub fn strip_window(&self) -> &gtk::ScrolledWindow {
        &self.imp().strip_window
    }

    pub fn scroll_left_button(&self) -> &gtk::Button {
        &self.imp().scroll_left_button
    }

    pub fn scroll_right_button(&self) -> &gtk::Button {
        &self.imp().scroll_right_button
    }
}
