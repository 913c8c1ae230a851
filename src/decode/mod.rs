//! Response decoder module
//!
//! Supports: traffic volume connections, registration point lists
//!
//! # Overview
//!
//! Every response goes through [`locate_payload`] first, which turns a
//! status and body into the JSON value at the expected data path or one of
//! the three query errors. A [`PageDecoder`] then maps that payload into
//! typed items plus the page's pagination metadata.

mod decoders;
mod types;

pub use decoders::{locate_payload, RegistrationPointDecoder, VolumeDecoder};
pub use types::{DecodedPage, PageDecoder};
