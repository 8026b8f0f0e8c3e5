//! Pretty printer for [`Body`] documents.
//!
//! Output is deliberately plain: tab indentation, every key quoted, nested
//! objects spelled as assignments (`"key" = {`). The [`crate::format`] rules
//! rewrite that spelling afterwards.

use std::fmt::Write;

use crate::document::{Body, Item, Value};
use crate::error::PrintError;

#[cfg(test)]
mod tests;

/// Prints `body` into `out`.
///
/// # Errors
///
/// Returns [`PrintError::MissingKey`] for items without keys,
/// [`PrintError::InvalidBlock`] for multi-key items that do not hold an
/// object, and [`PrintError::Fmt`] if `out` rejects a write.
pub fn print<W: Write + ?Sized>(body: &Body, out: &mut W) -> Result<(), PrintError> {
	Printer { out }.body(body, 0)
}

/// Prints `body` into a new string.
pub fn to_string(body: &Body) -> Result<String, PrintError> {
	let mut out = String::new();
	print(body, &mut out)?;
	Ok(out)
}

struct Printer<'a, W: ?Sized> {
	out: &'a mut W,
}

impl<W: Write + ?Sized> Printer<'_, W> {
	fn body(&mut self, body: &Body, depth: usize) -> Result<(), PrintError> {
		for item in body.iter() {
			self.indent(depth)?;
			self.item(item, depth)?;
			self.out.write_char('\n')?;
		}
		Ok(())
	}

	fn item(&mut self, item: &Item, depth: usize) -> Result<(), PrintError> {
		let Some(first) = item.keys.first() else {
			return Err(PrintError::MissingKey);
		};

		if !item.is_block() {
			self.string(first)?;
			self.out.write_str(" = ")?;
			return self.value(&item.value, depth);
		}

		let Value::Object(body) = &item.value else {
			return Err(PrintError::InvalidBlock {
				keys: item.keys.clone(),
			});
		};
		for key in &item.keys {
			self.string(key)?;
			self.out.write_char(' ')?;
		}
		self.object(body, depth)
	}

	fn value(&mut self, value: &Value, depth: usize) -> Result<(), PrintError> {
		match value {
			Value::Null => self.out.write_str("null")?,
			Value::Bool(b) => write!(self.out, "{b}")?,
			Value::Number(n) => write!(self.out, "{n}")?,
			Value::String(s) => self.string(s)?,
			Value::List(elements) => self.list(elements, depth)?,
			Value::Object(body) => self.object(body, depth)?,
		}
		Ok(())
	}

	fn object(&mut self, body: &Body, depth: usize) -> Result<(), PrintError> {
		if body.is_empty() {
			self.out.write_str("{}")?;
			return Ok(());
		}
		self.out.write_str("{\n")?;
		self.body(body, depth + 1)?;
		self.indent(depth)?;
		self.out.write_char('}')?;
		Ok(())
	}

	fn list(&mut self, elements: &[Value], depth: usize) -> Result<(), PrintError> {
		if elements.iter().all(Value::is_scalar) {
			self.out.write_char('[')?;
			for (i, element) in elements.iter().enumerate() {
				if i > 0 {
					self.out.write_str(", ")?;
				}
				self.value(element, depth)?;
			}
			self.out.write_char(']')?;
			return Ok(());
		}

		self.out.write_str("[\n")?;
		for element in elements {
			self.indent(depth + 1)?;
			self.value(element, depth + 1)?;
			self.out.write_str(",\n")?;
		}
		self.indent(depth)?;
		self.out.write_char(']')?;
		Ok(())
	}

	fn string(&mut self, s: &str) -> Result<(), PrintError> {
		self.out.write_char('"')?;
		for c in s.chars() {
			match c {
				'"' => self.out.write_str("\\\"")?,
				'\\' => self.out.write_str("\\\\")?,
				'\n' => self.out.write_str("\\n")?,
				'\r' => self.out.write_str("\\r")?,
				'\t' => self.out.write_str("\\t")?,
				c if c.is_control() => write!(self.out, "\\u{:04x}", c as u32)?,
				c => self.out.write_char(c)?,
			}
		}
		self.out.write_char('"')?;
		Ok(())
	}

	fn indent(&mut self, depth: usize) -> Result<(), PrintError> {
		for _ in 0..depth {
			self.out.write_char('\t')?;
		}
		Ok(())
	}
}
