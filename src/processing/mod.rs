/*! Core transcript processing passes.

Data flows strictly forward: segmenter → grouper → aligner → assembler.
Each pass catches nothing itself; unit- and document-level failures are
reported to the caller, which skips the failing unit or file and keeps
going.

!*/

pub mod align;
pub mod assemble;
pub mod group;
pub mod segment;

pub use align::{align, is_discourse_marker};
pub use assemble::assemble;
pub use group::{group, GroupedUnit};
pub use segment::{is_unit_header, segment, UnitSpan};
