use serde::Deserialize;

use super::product::Product;
use crate::ordered_map::OrderedMap;

/// The full keyed product collection as delivered by the data source.
/// Products iterate in document order, and each product is stored under the
/// key matching its `id`; the document is trusted as-is.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    products: OrderedMap<Product>,
}

impl Catalog {
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Catalog;

    const CATALOG_JSON: &str = r#"{
        "products": {
            "p2": {
                "id": "p2",
                "name": "Model B",
                "thumbnail": "b.jpg",
                "price": "$200",
                "images": ["b-front.jpg", "b-side.jpg"],
                "details": "Long range battery"
            },
            "p1": {
                "id": "p1",
                "name": "Model A",
                "thumbnail": "a.jpg",
                "price": "$100"
            }
        }
    }"#;

    fn catalog() -> Catalog {
        serde_json::from_str(CATALOG_JSON).unwrap()
    }

    #[test]
    fn lists_every_entry_in_document_order() {
        let catalog = catalog();

        assert_eq!(catalog.len(), 2);
        let names: Vec<&str> = catalog.products().map(|product| product.name.as_str()).collect();
        assert_eq!(names, ["Model B", "Model A"]);
    }

    #[test]
    fn looks_up_a_product_by_identifier() {
        let catalog = catalog();
        let product = catalog.product("p1").unwrap();

        assert_eq!(product.name, "Model A");
        assert_eq!(product.price, "$100");
    }

    #[test]
    fn unknown_identifier_resolves_to_nothing() {
        assert!(catalog().product("p9").is_none());
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let catalog = catalog();
        let product = catalog.product("p1").unwrap();

        assert!(product.images.is_empty());
        assert!(product.details.is_empty());
        assert_eq!(product.cover_image(), "a.jpg");
    }

    #[test]
    fn gallery_products_start_on_their_first_image() {
        let catalog = catalog();

        assert_eq!(catalog.product("p2").unwrap().cover_image(), "b-front.jpg");
    }

    #[test]
    fn empty_collection_has_zero_products() {
        let catalog: Catalog = serde_json::from_str(r#"{"products": {}}"#).unwrap();

        assert!(catalog.is_empty());
        assert_eq!(catalog.products().count(), 0);
    }

    #[test]
    fn document_without_a_product_map_is_rejected() {
        assert!(serde_json::from_str::<Catalog>("{}").is_err());
    }
}
