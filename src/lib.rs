// Mode Wheel core library
//
// The catalog of scale ("mode family") patterns for every cardinality from
// 0 to 12 notes, the literal-equality matcher that names an arbitrary
// pitch-class selection, and the session state the terminal explorer mutates.
//
// Architecture:
// - pitch.rs: PitchClass + 12-bit PitchSet, note and interval names
// - scale.rs: FamilyDef (static table rows), validated ModeFamily, ModeRef
// - catalog.rs: Catalog registry (name/address lookup, note-count navigation)
// - catalog_data.rs: the built-in family table
// - detect.rs: Matcher with sticky-hint tie-break, Detection result
// - address.rs: "noteCount.familyIndex.rotation" addresses
// - session.rs: Selection state (toggle, load, step, rotate, transpose)
// - chords.rs: Roman-numeral chord symbols for scale degrees
// - voicing.rs: MIDI voicings for auditioning a selection
// - settings.rs: JSON settings for the explorer binary
//
// Everything here is synchronous and side-effect free apart from `Session`
// mutation and settings file IO. The built-in catalog is shared read-only.

pub mod address;
pub mod catalog;
mod catalog_data;
pub mod chords;
pub mod detect;
pub mod pitch;
pub mod scale;
pub mod session;
pub mod settings;
pub mod voicing;

pub use address::{Address, AddressError};
pub use catalog::{Catalog, CatalogError};
pub use detect::{detect, Detection};
pub use pitch::{PitchClass, PitchSet};
pub use scale::{FamilyDef, ModeFamily, ModeRef};
pub use session::{DegreeTile, Provenance, Session, SessionError};
