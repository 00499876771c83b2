use thiserror::Error;

use crate::models::Catalog;

const SUCCESS_STATUSES: std::ops::Range<i32> = 200..300;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: minreq::Error,
    },
    #[error("request to {url} returned status {status}")]
    Status { url: String, status: i32 },
    #[error("catalog document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Retrieves the catalog document. `fetch` blocks on the network and is
/// meant to run on a worker, never on the main loop.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    url: String,
}

impl CatalogClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn fetch(&self) -> Result<Catalog, FetchError> {
        let body = get_bytes(&self.url)?;
        Ok(parse_catalog(&body)?)
    }
}

/// One GET of `url`, returning the body of a successful response.
pub fn get_bytes(url: &str) -> Result<Vec<u8>, FetchError> {
    let response = minreq::get(url).send().map_err(|source| FetchError::Transport {
        url: url.to_owned(),
        source,
    })?;

    if !SUCCESS_STATUSES.contains(&response.status_code) {
        return Err(FetchError::Status {
            url: url.to_owned(),
            status: response.status_code,
        });
    }

    Ok(response.as_bytes().to_vec())
}

fn parse_catalog(document: &[u8]) -> Result<Catalog, serde_json::Error> {
    serde_json::from_slice(document)
}

#[cfg(test)]
mod tests {
    use super::{FetchError, parse_catalog};

    #[test]
    fn parses_a_catalog_document() {
        let document = br#"{"products": {"p1": {"id": "p1", "name": "Model A", "thumbnail": "a.jpg", "price": "$100"}}}"#;
        let catalog = parse_catalog(document).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.product("p1").unwrap().name, "Model A");
    }

    #[test]
    fn rejects_a_body_that_is_not_json() {
        assert!(parse_catalog(b"<html>Not found</html>").is_err());
    }

    #[test]
    fn status_errors_name_the_url_and_code() {
        let error = FetchError::Status {
            url: "https://example.com/catalog.json".to_owned(),
            status: 503,
        };

        let message = error.to_string();
        assert!(message.contains("https://example.com/catalog.json"));
        assert!(message.contains("503"));
    }
}
