use serde::Deserialize;

/// One catalog entry. `price` is pre-formatted display text; no currency
/// arithmetic happens anywhere.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub details: String,
}

impl Product {
    /// The image the detail page starts with: the first gallery image, or
    /// the thumbnail for products without a gallery.
    pub fn cover_image(&self) -> &str {
        self.images.first().map_or(self.thumbnail.as_str(), String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::Product;

    fn product(images: &[&str]) -> Product {
        Product {
            id: "p1".to_owned(),
            name: "Model A".to_owned(),
            thumbnail: "a.jpg".to_owned(),
            price: "$100".to_owned(),
            images: images.iter().map(|&image| image.to_owned()).collect(),
            details: String::new(),
        }
    }

    #[test]
    fn cover_image_prefers_the_first_gallery_image() {
        assert_eq!(product(&["front.jpg", "side.jpg"]).cover_image(), "front.jpg");
    }

    #[test]
    fn cover_image_falls_back_to_the_thumbnail() {
        assert_eq!(product(&[]).cover_image(), "a.jpg");
    }
}
