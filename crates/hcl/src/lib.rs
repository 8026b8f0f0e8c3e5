//! HCL document support for the resource writer.
//!
//! The writer does not build HCL directly. It encodes its namespace as JSON
//! and pushes that through the stages exposed here, in order:
//!
//! * [`parse()`]: JSON text into a block-structured [`Body`]
//! * [`printer`]: the [`Body`] into tab-indented text with quoted keys
//! * [`format()`]: ordered pattern rewrites that bring the printed text close
//!   to idiomatic block style
//! * [`style`]: the canonical-style pass that parses the rewritten text as
//!   HCL and formats it again while writing it to a sink
//!
//! ```text
//! "resource" "aws_instance" "web" {      resource "aws_instance" "web" {
//!     "ami" = "x"                          ami = "x"
//!     "tags" = {                ──▶        tags = {
//!         "env" = "prod"                     env = "prod"
//!     }                                    }
//! }                                      }
//! ```

pub mod document;
pub mod error;
pub mod format;
pub mod parse;
pub mod printer;
pub mod style;

pub use document::{Body, Item, Value};
pub use error::{FormatError, ParseError, PrintError};
pub use format::{format, format_str};
pub use parse::parse;
pub use printer::{print, to_string};
pub use style::{CanonicalStyle, StyleEnforcer, StyleOptions};
