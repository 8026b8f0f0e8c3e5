//! HCL resource writer.
//!
//! Values are kept in a `resource → type → name` namespace. Syncing runs that
//! namespace through every document stage in order and stops at the first
//! failure:
//!
//! 1. encode the namespace as JSON ([`Error::Encoding`])
//! 2. read the JSON back as a block document ([`Error::Parse`])
//! 3. pretty-print the document ([`Error::Print`])
//! 4. apply the canonicalizing rewrites (cannot fail)
//! 5. enforce canonical style while writing to the sink ([`Error::Format`])

use std::fmt;
use std::io;

use hclw_hcl::{CanonicalStyle, StyleEnforcer};
use indexmap::IndexMap;
use indexmap::map::Entry;
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;

use crate::Writer;
use crate::error::{Error, Result};
use crate::key::ResourceKey;


/// Values by resource type, then resource name, in first-write order.
type Resources = IndexMap<String, IndexMap<String, Value>>;

/// Shape of the encoded document.
#[derive(Debug, Default, Serialize)]
struct Config {
	#[serde(skip_serializing_if = "IndexMap::is_empty")]
	resource: Resources,
}

/// [`Writer`] producing HCL `resource` blocks.
///
/// Writes and syncs take `&self`; the namespace and the sink each sit behind
/// their own lock, so the writer can be shared between producer threads.
pub struct HclWriter<W> {
	config: Mutex<Config>,
	sink: Mutex<W>,
	style: Box<dyn StyleEnforcer + Send + Sync>,
}

impl<W: io::Write> HclWriter<W> {
	/// Creates a writer rendering to `sink` with the default [`CanonicalStyle`].
	pub fn new(sink: W) -> Self {
		Self::with_style(sink, CanonicalStyle::default())
	}

	/// Creates a writer rendering to `sink` through `style`.
	pub fn with_style(sink: W, style: impl StyleEnforcer + Send + Sync + 'static) -> Self {
		Self {
			config: Mutex::new(Config::default()),
			sink: Mutex::new(sink),
			style: Box::new(style),
		}
	}

	/// Encodes `value` and stores it under `key`, see [`Writer::write`].
	///
	/// # Errors
	///
	/// Returns [`Error::Encoding`] if `value` has no JSON representation, and
	/// any error of [`Writer::write`].
	pub fn write_value<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
		let value = serde_json::to_value(value).map_err(Error::Encoding)?;
		self.write(key, value)
	}

	/// Returns a copy of the value stored under `key`.
	pub fn get(&self, key: &str) -> Option<Value> {
		let key = ResourceKey::parse(key).ok()?;
		let config = self.config.lock();
		config.resource.get(&key.kind)?.get(&key.name).cloned()
	}

	/// Returns `true` if `key` has been written.
	pub fn contains(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	/// Number of stored resources.
	pub fn len(&self) -> usize {
		self.config.lock().resource.values().map(IndexMap::len).sum()
	}

	/// Returns `true` if nothing has been written yet.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Consumes the writer and returns its sink.
	pub fn into_inner(self) -> W {
		self.sink.into_inner()
	}

	/// Runs every stage up to the canonicalizing rewrites.
	fn render(&self) -> Result<Vec<u8>> {
		let json = {
			let config = self.config.lock();
			serde_json::to_vec(&*config).map_err(Error::Encoding)?
		};
		tracing::trace!(json = %String::from_utf8_lossy(&json), "parsing internal config to HCL");

		let body = hclw_hcl::parse(&json).map_err(Error::Parse)?;
		let printed = hclw_hcl::to_string(&body).map_err(Error::Print)?;
		tracing::trace!(hcl = %printed, "formatting HCL");

		let formatted = hclw_hcl::format(printed.as_bytes());
		tracing::trace!(hcl = %String::from_utf8_lossy(&formatted), "formatted HCL");
		Ok(formatted)
	}
}

impl<W: io::Write> Writer for HclWriter<W> {
	fn write(&self, key: &str, value: Value) -> Result<()> {
		if key.is_empty() {
			return Err(Error::EmptyKey);
		}
		if value.is_null() {
			return Err(Error::NilValue);
		}
		let ResourceKey { kind, name } = ResourceKey::parse(key)?;

		let mut config = self.config.lock();
		// A duplicate implies the type bucket already existed, so a rejected
		// write never leaves an empty bucket behind.
		match config.resource.entry(kind).or_default().entry(name) {
			Entry::Occupied(_) => Err(Error::DuplicateKey { key: key.to_string() }),
			Entry::Vacant(slot) => {
				tracing::debug!(key, content = %value, "writing to internal config");
				slot.insert(value);
				Ok(())
			}
		}
	}

	fn sync(&self) -> Result<()> {
		let _span = tracing::debug_span!("hcl_sync").entered();
		let formatted = self.render()?;

		let mut sink = self.sink.lock();
		self.style.enforce(&formatted, &mut *sink).map_err(Error::Format)?;
		sink.flush().map_err(|e| Error::Format(e.into()))?;
		tracing::debug!(bytes = formatted.len(), "wrote HCL");
		Ok(())
	}
}

impl<W> fmt::Debug for HclWriter<W> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HclWriter")
			.field("config", &self.config.lock())
			.finish_non_exhaustive()
	}
}
