//! Resource writers.
//!
//! A [`Writer`] collects values under `"<type>.<name>"` keys and, on
//! [`Writer::sync`], renders everything it holds to its output sink.
//! [`HclWriter`] renders HCL resource blocks:
//!
//! ```text
//! write("aws_instance.web", {"ami": "x"})      resource "aws_instance" "web" {
//! sync()                                 ──▶     ami = "x"
//!                                              }
//! ```

pub mod error;
pub mod hcl;
pub mod key;

pub use error::{Error, Result};
pub use hcl::HclWriter;
pub use key::ResourceKey;
pub use serde_json::Value;

/// Key/value sink that hides the output format from resource producers.
pub trait Writer {
	/// Stores `value` under `key`.
	///
	/// Keys have the form `"<type>.<name>"` and may be written once; a repeated
	/// key is rejected and leaves the stored value untouched.
	fn write(&self, key: &str, value: Value) -> Result<()>;

	/// Renders every stored value to the writer's output.
	///
	/// A failing stage aborts the ones after it; on error, callers must not
	/// assume anything reached the output.
	fn sync(&self) -> Result<()>;
}
