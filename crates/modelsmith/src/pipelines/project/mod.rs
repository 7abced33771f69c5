//! Project pipeline
//!
//! Turns a zip archive of PHP sources into a zip-based UML model project.

mod archive;
mod emitter;
mod extractor;
mod xml;

pub use archive::{pack_archive, read_text_lossy, unpack_archive};
pub use emitter::{ModelArchiveEmitter, CLASSES_DIR, DIAGRAM_FILE, PROJECT_FILE};
pub use extractor::PhpExtractor;
pub use xml::{escape_xml, XmlElement};
