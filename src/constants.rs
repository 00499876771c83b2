pub const APP_RESOURCES: &[u8] = include_bytes!(env!("APP_RESOURCES"));
pub const APP_ID: &str = env!("APP_ID");
pub const APP_NAME: &str = env!("APP_NAME");
pub const APP_VERSION: &str = env!("APP_VERSION");
pub const APP_PREFIX: &str = env!("APP_PREFIX");
pub const APP_TITLE: &str = env!("APP_TITLE");
pub const APP_CATALOG_URL: &str = env!("APP_CATALOG_URL");
pub const APP_ORDER_URI: &str = env!("APP_ORDER_URI");
pub const APP_PLACEHOLDER_RESOURCE: &str = concat!(env!("APP_PREFIX"), "/icons/product-placeholder.svg");
