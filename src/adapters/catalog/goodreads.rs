//! Goodreads catalog adapter - implementation of [`BookCatalog`] for the
//! Goodreads-style `book/title.xml` endpoint.
//!
//! Issues exactly one GET per lookup with a bounded timeout. Query
//! parameters that are absent are omitted from the URL entirely; the API
//! key never appears in logs.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GoodreadsConfig::new(api_key)
//!     .with_base_url("https://www.goodreads.com")
//!     .with_timeout(Duration::from_secs(8));
//!
//! let catalog = GoodreadsCatalog::new(config);
//! ```

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;

use crate::config::{CatalogConfig, ValidationError};
use crate::domain::book::{AuthorRecord, BookRecord, SimilarBook};
use crate::domain::eligibility::ShelfTag;
use crate::ports::{BookCatalog, CatalogError, CatalogRecord};

/// Default catalog host.
const DEFAULT_BASE_URL: &str = "https://www.goodreads.com";

/// Default request timeout. The upstream skill platform cuts a turn off
/// after a few seconds, so a slow catalog must fail fast.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

/// Configuration for the Goodreads catalog adapter.
#[derive(Debug, Clone)]
pub struct GoodreadsConfig {
    /// API key for the catalog.
    api_key: Secret<String>,
    /// Base URL (overridable for tests).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GoodreadsConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for building requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Builds the adapter configuration from validated application config.
    pub fn from_catalog_config(config: &CatalogConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        let api_key = config
            .api_key
            .clone()
            .ok_or(ValidationError::MissingRequired("KIDS_BOOKS__CATALOG__API_KEY"))?;
        Ok(Self::new(api_key)
            .with_base_url(config.base_url.clone())
            .with_timeout(config.timeout()))
    }
}

/// Goodreads catalog adapter.
pub struct GoodreadsCatalog {
    config: GoodreadsConfig,
    client: reqwest::Client,
}

impl GoodreadsCatalog {
    /// Creates a new adapter with the given configuration.
    pub fn new(config: GoodreadsConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the title-lookup endpoint URL.
    fn title_url(&self) -> String {
        format!("{}/book/title.xml", self.config.base_url)
    }
}

#[async_trait]
impl BookCatalog for GoodreadsCatalog {
    async fn lookup(
        &self,
        title: Option<&str>,
        author: Option<&str>,
    ) -> Result<CatalogRecord, CatalogError> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(title) = title {
            query.push(("title", title));
        }
        if let Some(author) = author {
            query.push(("author", author));
        }
        query.push(("key", self.config.api_key()));

        tracing::debug!(
            title = title.unwrap_or(""),
            author = author.unwrap_or(""),
            endpoint = %self.title_url(),
            "querying catalog"
        );

        let response = self
            .client
            .get(self.title_url())
            .query(&query)
            .send()
            .await
            .map_err(|err| CatalogError::transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::bad_status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|err| CatalogError::transport(err.to_string()))?;

        parse_catalog_body(&body)
    }
}

/// Parses the catalog's XML body into the normalized record.
fn parse_catalog_body(xml: &str) -> Result<CatalogRecord, CatalogError> {
    let parsed: GoodreadsResponse =
        quick_xml::de::from_str(xml).map_err(|err| CatalogError::malformed(err.to_string()))?;
    parsed.into_record()
}

// Provider DTOs. Numeric fields arrive as text and are frequently empty
// elements, so they deserialize as optional strings and parse leniently.

#[derive(Debug, Deserialize)]
struct GoodreadsResponse {
    book: XmlBook,
}

#[derive(Debug, Deserialize)]
struct XmlBook {
    title: String,
    description: Option<String>,
    publication_year: Option<String>,
    publisher: Option<String>,
    num_pages: Option<String>,
    average_rating: Option<String>,
    ratings_count: Option<String>,
    url: Option<String>,
    small_image_url: Option<String>,
    image_url: Option<String>,
    popular_shelves: Option<XmlShelves>,
    authors: Option<XmlAuthors>,
    similar_books: Option<XmlSimilarBooks>,
}

#[derive(Debug, Deserialize)]
struct XmlShelves {
    #[serde(default, rename = "shelf")]
    shelves: Vec<XmlShelf>,
}

#[derive(Debug, Deserialize)]
struct XmlShelf {
    #[serde(rename = "@name")]
    name: String,
}

#[derive(Debug, Deserialize)]
struct XmlAuthors {
    #[serde(default, rename = "author")]
    authors: Vec<XmlAuthor>,
}

#[derive(Debug, Deserialize)]
struct XmlAuthor {
    name: String,
}

#[derive(Debug, Deserialize)]
struct XmlSimilarBooks {
    #[serde(default, rename = "book")]
    books: Vec<XmlSimilarBook>,
}

#[derive(Debug, Deserialize)]
struct XmlSimilarBook {
    title: String,
}

impl GoodreadsResponse {
    fn into_record(self) -> Result<CatalogRecord, CatalogError> {
        let xml = self.book;

        let author = xml
            .authors
            .and_then(|a| a.authors.into_iter().next())
            .map(|a| AuthorRecord { name: a.name })
            .ok_or_else(|| CatalogError::malformed("book has no author"))?;

        let shelves = xml
            .popular_shelves
            .map(|s| {
                s.shelves
                    .into_iter()
                    .map(|shelf| ShelfTag { name: shelf.name })
                    .collect()
            })
            .unwrap_or_default();

        let similar_books = xml
            .similar_books
            .map(|s| {
                s.books
                    .into_iter()
                    .map(|book| SimilarBook { title: book.title })
                    .collect()
            })
            .unwrap_or_default();

        let book = BookRecord {
            title: xml.title,
            description: non_empty(xml.description),
            publication_year: parse_number(xml.publication_year),
            publisher: non_empty(xml.publisher),
            num_pages: parse_number(xml.num_pages),
            average_rating: parse_number(xml.average_rating),
            ratings_count: parse_number(xml.ratings_count),
            url: non_empty(xml.url),
            small_image_url: non_empty(xml.small_image_url),
            image_url: non_empty(xml.image_url),
            similar_books,
        };

        Ok(CatalogRecord { book, author, shelves })
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn parse_number<T: FromStr>(raw: Option<String>) -> Option<T> {
    raw.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<GoodreadsResponse>
  <book>
    <title>Harry Potter and the Philosopher's Stone</title>
    <publication_year>1997</publication_year>
    <publisher>Bloomsbury</publisher>
    <num_pages>223</num_pages>
    <description>Harry discovers he is a wizard.</description>
    <url>https://www.goodreads.com/book/show/72193</url>
    <small_image_url>https://images.gr-assets.com/books/small.jpg</small_image_url>
    <image_url>https://images.gr-assets.com/books/large.jpg</image_url>
    <average_rating>4.47</average_rating>
    <ratings_count>7000000</ratings_count>
    <popular_shelves>
      <shelf name="fantasy" count="1000"/>
      <shelf name="kids" count="800"/>
    </popular_shelves>
    <authors>
      <author>
        <name>J.K. Rowling</name>
      </author>
    </authors>
    <similar_books>
      <book>
        <title>Matilda</title>
      </book>
      <book>
        <title>The Hobbit</title>
      </book>
    </similar_books>
  </book>
</GoodreadsResponse>"#;

    #[test]
    fn parses_a_full_catalog_record() {
        let record = parse_catalog_body(SAMPLE_XML).unwrap();

        assert_eq!(record.book.title, "Harry Potter and the Philosopher's Stone");
        assert_eq!(record.book.publication_year, Some(1997));
        assert_eq!(record.book.publisher.as_deref(), Some("Bloomsbury"));
        assert_eq!(record.book.num_pages, Some(223));
        assert_eq!(record.book.average_rating, Some(4.47));
        assert_eq!(record.book.ratings_count, Some(7_000_000));
        assert_eq!(record.author.name, "J.K. Rowling");
        assert_eq!(
            record.shelves,
            vec![ShelfTag::new("fantasy"), ShelfTag::new("kids")]
        );
        assert_eq!(record.book.similar_titles(), vec!["Matilda", "The Hobbit"]);
    }

    #[test]
    fn empty_numeric_elements_become_none() {
        let xml = r#"<GoodreadsResponse>
  <book>
    <title>Mystery Book</title>
    <publication_year></publication_year>
    <num_pages/>
    <authors><author><name>Unknown</name></author></authors>
  </book>
</GoodreadsResponse>"#;

        let record = parse_catalog_body(xml).unwrap();
        assert_eq!(record.book.publication_year, None);
        assert_eq!(record.book.num_pages, None);
        assert!(record.shelves.is_empty());
        assert!(record.book.similar_books.is_empty());
    }

    #[test]
    fn missing_author_is_malformed() {
        let xml = "<GoodreadsResponse><book><title>Orphan</title></book></GoodreadsResponse>";
        let err = parse_catalog_body(xml).unwrap_err();
        assert_eq!(err, CatalogError::malformed("book has no author"));
    }

    #[test]
    fn non_xml_body_is_malformed() {
        let err = parse_catalog_body("{\"not\": \"xml\"}").unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[test]
    fn config_defaults_point_at_the_real_catalog() {
        let config = GoodreadsConfig::new("secret-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }
}
