mod actions;
mod card_activation;
mod catalog_loader;
mod gallery_scroll;
mod order_activation;
mod product_loader;

pub use self::actions::Actions as ActionsController;
pub use self::card_activation::CardActivation as CardActivationController;
pub use self::catalog_loader::CatalogLoader as CatalogLoaderController;
pub use self::gallery_scroll::GalleryScroll as GalleryScrollController;
pub use self::order_activation::OrderActivation as OrderActivationController;
pub use self::product_loader::ProductLoader as ProductLoaderController;
