//! Rust client for the Index Herbariorum API
//!
//! [Index Herbariorum](https://sweetgum.nybg.org/science/ih/) is the global
//! directory of public herbaria and their staff, maintained by the New York
//! Botanical Garden. This crate wraps its read-only web services.
//!
//! # Example
//!
//! ```no_run
//! use index_herbariorum::{IndexHerbariorumClient, Resource, SearchParams};
//!
//! # async fn example() -> Result<(), index_herbariorum::IndexHerbariorumError> {
//! let client = IndexHerbariorumClient::new()?;
//!
//! let ny = client.institution("NY").await?;
//! println!("{}", ny["organization"]);
//!
//! let params = SearchParams::new().with("country", "italy").with("city", "rome");
//! let total = client.count_institutions(&params).await?;
//! println!("{} herbaria in Rome", total);
//!
//! client.export_csv(Resource::Institutions, &params).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - `GET /countries` - All countries with herbaria
//! - `GET /staff`, `GET /staff/search` - List or search staff
//! - `GET /institutions`, `GET /institutions/search` - List or search institutions
//! - `GET /institutions/{code}` - Single institution by code
//! - `GET /{staff|institutions}/search?download=yes` - CSV export

mod client;
mod config;
mod error;
mod params;
mod types;

pub use client::IndexHerbariorumClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{IndexHerbariorumError, Result};
pub use params::SearchParams;
pub use types::{Meta, Resource, DEFAULT_CSV_FILENAME, DOWNLOAD_KEY};
