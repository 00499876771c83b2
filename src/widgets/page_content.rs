use crate::prelude::*;

use std::cell::RefCell;

const LOADING_CHILD: &str = "loading";
const ERROR_CHILD: &str = "error";
const CONTENT_CHILD: &str = "content";

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, glib::Properties)]
    #[template(resource = "/vn/vinescooter/vine_scooter/page_content.ui")]
    #[properties(wrapper_type = super::PageContent)]
    pub struct PageContent {
        #[template_child(id = "page-content-stack")]
        pub stack: TemplateChild<gtk::Stack>,
        #[template_child(id = "page-content-status")]
        pub status_page: TemplateChild<adw::StatusPage>,
        #[template_child(id = "page-content-scrolled-window")]
        pub scrolled_window: TemplateChild<gtk::ScrolledWindow>,

        #[property(get, set)]
        pub content: RefCell<Option<gtk::Widget>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for PageContent {
        const NAME: &'static str = "PageContent";
        type Type = super::PageContent;
        type ParentType = adw::Bin;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    #[glib::derived_properties]
    impl ObjectImpl for PageContent {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().apply_content();
            self.obj().connect_notify_local(Some("content"), |this, _| {
                this.apply_content();
            });
        }
    }

    impl WidgetImpl for PageContent {}
    impl BinImpl for PageContent {}
}

glib::wrapper! {
    pub struct PageContent(ObjectSubclass<imp::PageContent>)
        @extends adw::Bin, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl PageContent {
    fn apply_content(&self) {
        let content = self.content();
        self.imp().scrolled_window.set_child(content.as_ref());
    }

    pub fn show_loading(&self) {
        self.imp().stack.set_visible_child_name(LOADING_CHILD);
    }

    /// Replaces the page content with a literal error message.
    pub fn show_error(&self, message: &str) {
        self.imp().status_page.set_title(message);
        self.imp().stack.set_visible_child_name(ERROR_CHILD);
    }

    pub fn show_content(&self) {
        self.imp().stack.set_visible_child_name(CONTENT_CHILD);
    }

    pub fn scroll_to_top(&self) {
        self.imp().scrolled_window.vadjustment().set_value(0.0);
    }
}
