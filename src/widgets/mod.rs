mod catalog_page;
mod gallery;
mod gallery_thumb;
mod navigation;
mod page_content;
mod product_card;
mod product_page;
mod window;

pub use self::catalog_page::CatalogPage;
pub use self::gallery::Gallery;
pub use self::navigation::{Navigation, NavigationPage};
pub use self::product_page::ProductPage;
pub use self::window::Window;
