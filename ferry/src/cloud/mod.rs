//! Cloud sharing URL to local file mapping.
//!
//! Document applications whose files live on a cloud drive often report
//! an `https://` sharing URL where a filesystem path is expected. This
//! module maps such URLs back onto the locally synced copy of the file
//! when one exists.
//!
//! # How Mapping Works
//!
//! A sharing URL addresses a document library on the provider's host.
//! The locally synced copy of that library lives under a provider
//! directory inside the per-user cloud-storage container. Mapping
//! decodes the URL's path segments, cuts them down to the part below
//! the library marker, and probes the resulting relative path against
//! every mounted sync root until an existing file turns up.
//!
//! The whole operation is best effort. An unrecognized host, a path
//! without a library marker, an unreadable container, or a miss on
//! every candidate all produce `None`. Callers decide how to present a
//! cloud location that has no local counterpart.
//!
//! # Examples
//!
//! ```
//! use ferry::cloud::CloudMapper;
//!
//! let mapper = CloudMapper::new();
//! if let Some(local) = mapper.map_to_local(
//!     "https://contoso.sharepoint.com/sites/Team/Documents/Reports/Q1.docx",
//! ) {
//!     println!("synced copy at {}", local.display());
//! }
//! ```

mod mapper;
mod roots;
mod segments;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use mapper::CloudMapper;
