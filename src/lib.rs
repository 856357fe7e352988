//! OAuth 1.0a signature validation for LTI launch requests.
//!
//! ```
//! use ltisign::{validate, LaunchRequest};
//!
//! let request = LaunchRequest::new("GET", "http://photos.example.net/photos")
//!     .param("oauth_consumer_key", "dpf43f3p2l4k3l03")
//!     .param("oauth_token", "nnch734d00sl2jdk")
//!     .param("oauth_nonce", "kllo9940pd9333jh")
//!     .param("oauth_timestamp", "1191242096")
//!     .param("oauth_signature_method", "HMAC-SHA1")
//!     .param("oauth_version", "1.0")
//!     .param("size", "original")
//!     .param("file", "vacation.jpg")
//!     .param("oauth_signature", "tR3+Ty81lMeYAr/Fid0kMTYa/WM=");
//!
//! assert!(validate("kd94hf93k423kf44&pfkkdhi9sl3r4s00", &request));
//! ```

pub mod encoder_oauth1;
pub mod error;
pub mod parameters;
pub mod request;
pub mod signature;
pub mod signer;
pub mod validator;
pub mod values;

mod util;

pub use encoder_oauth1::encode;
pub use error::{Error, Result};
pub use parameters::ParameterValue;
pub use request::LaunchRequest;
pub use signer::{LaunchSigner, SignedLaunch};
pub use validator::{signature_base_string, validate, verify, ConsumerCredentials, LtiValidator};
