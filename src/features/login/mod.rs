//! Login form feature: the presentational component, its step sequencing,
//! the accumulated field values, and the submission client.
//!
//! Flow overview: the wizard advances username → email → password, merging
//! each accepted submission into the value set, then POSTs the collected
//! values as one JSON body and follows any redirect URL in the response. The
//! flat shape bypasses all of this with a native browser form post.

pub mod client;
pub mod fields;
pub mod form;
pub mod step;
pub mod types;

pub use form::LoginForm;
